use rand::Rng;
use rand::seq::SliceRandom;

/// Robotics subdomains questions are drawn from.
pub const TOPICS: [&str; 30] = [
    "Industrial Robotics",
    "Mobile Robotics",
    "Collaborative Robotics (Cobots)",
    "Humanoid Robotics",
    "Service Robotics",
    "Assistive Robotics",
    "Medical Robotics",
    "Surgical Robotics",
    "Educational Robotics",
    "Social Robotics",
    "Cognitive Robotics",
    "Autonomous Robotics",
    "Aerial Robotics (Drones)",
    "Space Robotics",
    "Underwater Robotics",
    "Rescue Robotics",
    "Military and Defense Robotics",
    "Agricultural Robotics",
    "Logistics Robotics",
    "Construction Robotics",
    "Soft Robotics",
    "Modular Robotics",
    "Swarm Robotics",
    "Microrobotics",
    "Nanorobotics",
    "Computer Vision for Robotics",
    "SLAM (Mapping and Localization)",
    "Motion Planning and Control",
    "Robotic Mechatronics",
    "Machine Learning for Robotics",
];

/// Draw a topic uniformly at random. Repeats between calls are allowed.
pub fn pick_topic<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    TOPICS.choose(rng).copied().unwrap_or(TOPICS[0])
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    #[test]
    fn test_picks_from_catalog() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..100 {
            assert!(TOPICS.contains(&pick_topic(&mut rng)));
        }
    }

    #[test]
    fn test_same_seed_same_draws() {
        let mut a = StdRng::seed_from_u64(42);
        let mut b = StdRng::seed_from_u64(42);
        let first: Vec<_> = (0..10).map(|_| pick_topic(&mut a)).collect();
        let second: Vec<_> = (0..10).map(|_| pick_topic(&mut b)).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_catalog_is_distinct() {
        let unique: HashSet<_> = TOPICS.iter().collect();
        assert_eq!(unique.len(), TOPICS.len());
    }
}
