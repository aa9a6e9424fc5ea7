use crate::models::{Difficulty, OPTION_COUNT, Question};

const FALLBACK_LABELS: [&str; OPTION_COUNT] = ["A", "B", "C", "D", "E"];

/// Placeholder question used when the generator produced nothing usable.
///
/// `ordinal` is the zero-based draw position; the text shows it one-based.
/// The level does not change the placeholder.
pub fn fallback_question(topic: &str, _level: Difficulty, ordinal: usize) -> Question {
    Question::from_parts(
        format!("Fallback question {} about {}", ordinal + 1, topic),
        FALLBACK_LABELS.map(String::from),
        0,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_shape() {
        let q = fallback_question("Soft Robotics", Difficulty::Easy, 3);
        assert_eq!(q.text(), "Fallback question 4 about Soft Robotics");
        assert_eq!(q.options(), &FALLBACK_LABELS.map(String::from));
        assert_eq!(q.correct_index(), 0);
    }

    #[test]
    fn test_fallback_is_deterministic() {
        for level in Difficulty::ALL {
            assert_eq!(
                fallback_question("Microrobotics", level, 9),
                fallback_question("Microrobotics", level, 9)
            );
        }
    }
}
