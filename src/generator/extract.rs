//! Pulls a question out of free-form generator text.
//!
//! The generator is asked for bare JSON but often wraps it in prose or code
//! fences. The object is taken to span from the first `{` to the last `}`;
//! text holding more than one top-level brace group will not parse.

use crate::error::GeneratorError;
use crate::models::{GeneratedQuestion, Question};

/// Slice from the first `{` to the last `}`, inclusive.
pub fn extract_json(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    if end < start {
        return None;
    }
    Some(&text[start..=end])
}

/// Extract, parse and validate a question from generated text.
pub fn parse_question(text: &str) -> Result<Question, GeneratorError> {
    let json = extract_json(text).ok_or(GeneratorError::NoJsonObject)?;
    let raw: GeneratedQuestion = serde_json::from_str(json)?;
    Ok(Question::try_from(raw)?)
}
