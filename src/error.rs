//! Error types.

use std::io;

use thiserror::Error;

use crate::models::ValidationError;

/// Everything that can go wrong while turning one prompt into a question.
///
/// These never leave the generator client; they are logged and turned into
/// "no question".
#[derive(Debug, Error)]
pub enum GeneratorError {
    #[error("network error: {0}")]
    Network(String),

    #[error("request timed out after {0}s")]
    Timeout(u64),

    #[error("API error (HTTP {status}): {message}")]
    Api { status: u16, message: String },

    #[error("response carried no message content")]
    EmptyContent,

    #[error("no JSON object found in generated text")]
    NoJsonObject,

    #[error("generated JSON is malformed: {0}")]
    MalformedJson(#[from] serde_json::Error),

    #[error("generated question is invalid: {0}")]
    Invalid(#[from] ValidationError),
}

impl GeneratorError {
    /// Transport-level failures worth another attempt.
    pub fn is_transient(&self) -> bool {
        match self {
            GeneratorError::Network(_) | GeneratorError::Timeout(_) => true,
            GeneratorError::Api { status, .. } => *status == 429 || *status >= 500,
            _ => false,
        }
    }
}

/// Invalid generator settings.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("{0} must not be empty")]
    Empty(&'static str),

    #[error("temperature must be within 0.0..=2.0, got {0}")]
    Temperature(f32),

    #[error("max_tokens must be greater than zero")]
    MaxTokens,

    #[error("timeout must be greater than zero")]
    Timeout,
}

/// Error type for quiz operations.
#[derive(Debug, Error)]
pub enum QuizError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("failed to build HTTP client: {0}")]
    Http(#[from] reqwest::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transient_errors() {
        assert!(GeneratorError::Timeout(30).is_transient());
        assert!(GeneratorError::Network("reset".into()).is_transient());
        for status in [429, 500, 503] {
            let err = GeneratorError::Api { status, message: String::new() };
            assert!(err.is_transient(), "HTTP {status}");
        }
        for status in [400, 401, 404] {
            let err = GeneratorError::Api { status, message: String::new() };
            assert!(!err.is_transient(), "HTTP {status}");
        }
        assert!(!GeneratorError::EmptyContent.is_transient());
        assert!(!GeneratorError::NoJsonObject.is_transient());
    }
}
