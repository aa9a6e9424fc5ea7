use crate::models::Difficulty;

/// System message sent alongside every prompt.
pub const SYSTEM_PROMPT: &str = "Answer only with valid JSON.";

/// Build the user prompt asking for one question on `topic` at `level`.
pub fn build_prompt(level: Difficulty, topic: &str) -> String {
    format!(
        r#"You are a robotics question generator.

RETURN ONLY PURE JSON, NO EXTRA TEXT.

Generate exactly 1 (one) multiple choice question IN ENGLISH.
The question must have 5 alternatives, with ONLY 1 correct answer.

Mandatory JSON format:
{{
  "question": "question text",
  "options": ["A","B","C","D","E"],
  "correct_index": 0-4
}}

Mandatory topic: {topic}
Level: {level}

No explanations, comments or markdown allowed.
Return ONLY the JSON, nothing else.
"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_mentions_topic_and_level() {
        let prompt = build_prompt(Difficulty::Hard, "Swarm Robotics");
        assert!(prompt.contains("Mandatory topic: Swarm Robotics"));
        assert!(prompt.contains("Level: Hard"));
        assert!(prompt.contains("\"correct_index\""));
        assert!(prompt.contains("IN ENGLISH"));
    }

    #[test]
    fn test_prompt_is_deterministic() {
        assert_eq!(
            build_prompt(Difficulty::Easy, "Space Robotics"),
            build_prompt(Difficulty::Easy, "Space Robotics")
        );
        assert_ne!(
            build_prompt(Difficulty::Easy, "Space Robotics"),
            build_prompt(Difficulty::Medium, "Space Robotics")
        );
    }
}
