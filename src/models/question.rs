use serde::Deserialize;
use thiserror::Error;

/// Number of answer options every question carries.
pub const OPTION_COUNT: usize = 5;

/// A validated multiple-choice question.
///
/// Fields are private: `options` always has [`OPTION_COUNT`] distinct
/// entries and `correct_index` always points into it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    text: String,
    options: [String; OPTION_COUNT],
    correct_index: usize,
}

/// Reasons a candidate question is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("question text is empty")]
    EmptyText,

    #[error("expected 5 options, got {0}")]
    OptionCount(usize),

    #[error("option {0:?} appears more than once")]
    DuplicateOption(String),

    #[error("correct_index {0} is outside 0..5")]
    IndexOutOfRange(i64),

    #[error("correct_index is not an integer: {0}")]
    NonIntegerIndex(String),
}

impl Question {
    pub fn new(
        text: impl Into<String>,
        options: Vec<String>,
        correct_index: usize,
    ) -> Result<Self, ValidationError> {
        let text = text.into();
        if text.trim().is_empty() {
            return Err(ValidationError::EmptyText);
        }

        let options: [String; OPTION_COUNT] = options
            .try_into()
            .map_err(|rejected: Vec<String>| ValidationError::OptionCount(rejected.len()))?;

        for (i, option) in options.iter().enumerate() {
            if options[..i].contains(option) {
                return Err(ValidationError::DuplicateOption(option.clone()));
            }
        }

        if correct_index >= OPTION_COUNT {
            return Err(ValidationError::IndexOutOfRange(correct_index as i64));
        }

        Ok(Self {
            text,
            options,
            correct_index,
        })
    }

    /// Build from parts already known to satisfy the invariants.
    pub(crate) fn from_parts(
        text: String,
        options: [String; OPTION_COUNT],
        correct_index: usize,
    ) -> Self {
        debug_assert!(correct_index < OPTION_COUNT);
        Self {
            text,
            options,
            correct_index,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn options(&self) -> &[String; OPTION_COUNT] {
        &self.options
    }

    pub fn correct_index(&self) -> usize {
        self.correct_index
    }

    pub fn is_correct(&self, option: usize) -> bool {
        option == self.correct_index
    }
}

/// The JSON object a generator is asked to produce.
///
/// Every field is optional here so that a missing field surfaces as a
/// [`ValidationError`] rather than a serde error.
#[derive(Debug, Deserialize)]
pub struct GeneratedQuestion {
    pub question: Option<String>,
    pub options: Option<Vec<String>>,
    pub correct_index: Option<serde_json::Value>,
}

impl TryFrom<GeneratedQuestion> for Question {
    type Error = ValidationError;

    fn try_from(raw: GeneratedQuestion) -> Result<Self, Self::Error> {
        let text = raw.question.ok_or(ValidationError::EmptyText)?;
        let options = raw.options.ok_or(ValidationError::OptionCount(0))?;
        let index = match raw.correct_index {
            Some(serde_json::Value::Number(n)) => {
                if let Some(i) = n.as_i64() {
                    i
                } else {
                    return Err(ValidationError::NonIntegerIndex(n.to_string()));
                }
            }
            Some(other) => return Err(ValidationError::NonIntegerIndex(other.to_string())),
            None => return Err(ValidationError::NonIntegerIndex("missing".to_string())),
        };
        let index = usize::try_from(index).map_err(|_| ValidationError::IndexOutOfRange(index))?;

        Question::new(text, options, index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options(labels: &[&str]) -> Vec<String> {
        labels.iter().map(|s| s.to_string()).collect()
    }

    fn parse(json: &str) -> Result<Question, ValidationError> {
        let raw: GeneratedQuestion = serde_json::from_str(json).unwrap();
        Question::try_from(raw)
    }

    #[test]
    fn test_valid_question() {
        let q = Question::new("What is SLAM?", options(&["a", "b", "c", "d", "e"]), 3).unwrap();
        assert_eq!(q.text(), "What is SLAM?");
        assert_eq!(q.correct_index(), 3);
        assert!(q.is_correct(3));
        assert!(!q.is_correct(0));
    }

    #[test]
    fn test_rejects_wrong_option_count() {
        let err = Question::new("Q", options(&["a", "b", "c", "d"]), 0).unwrap_err();
        assert_eq!(err, ValidationError::OptionCount(4));

        let err = Question::new("Q", options(&["a", "b", "c", "d", "e", "f"]), 0).unwrap_err();
        assert_eq!(err, ValidationError::OptionCount(6));
    }

    #[test]
    fn test_rejects_empty_text_and_duplicates() {
        assert_eq!(
            Question::new("   ", options(&["a", "b", "c", "d", "e"]), 0).unwrap_err(),
            ValidationError::EmptyText
        );
        assert_eq!(
            Question::new("Q", options(&["a", "b", "a", "d", "e"]), 0).unwrap_err(),
            ValidationError::DuplicateOption("a".to_string())
        );
    }

    #[test]
    fn test_generated_question_conversion() {
        let q = parse(r#"{"question":"Q","options":["A","B","C","D","E"],"correct_index":2}"#)
            .unwrap();
        assert_eq!(q.correct_index(), 2);
        assert_eq!(q.options()[4], "E");
    }

    #[test]
    fn test_generated_question_rejections() {
        assert_eq!(
            parse(r#"{"options":["A","B","C","D","E"],"correct_index":1}"#).unwrap_err(),
            ValidationError::EmptyText
        );
        assert_eq!(
            parse(r#"{"question":"Q","options":["A","B","C","D","E"],"correct_index":5}"#)
                .unwrap_err(),
            ValidationError::IndexOutOfRange(5)
        );
        assert_eq!(
            parse(r#"{"question":"Q","options":["A","B","C","D","E"],"correct_index":-1}"#)
                .unwrap_err(),
            ValidationError::IndexOutOfRange(-1)
        );
        assert!(matches!(
            parse(r#"{"question":"Q","options":["A","B","C","D","E"],"correct_index":"2"}"#),
            Err(ValidationError::NonIntegerIndex(_))
        ));
        assert!(matches!(
            parse(r#"{"question":"Q","options":["A","B","C","D","E"],"correct_index":1.5}"#),
            Err(ValidationError::NonIntegerIndex(_))
        ));
    }
}
