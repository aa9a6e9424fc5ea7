//! Question acquisition.
//!
//! Builds prompts on random robotics topics, asks a chat-completion
//! endpoint for each question, and fills every failed draw with a
//! deterministic fallback.

mod acquire;
mod client;
mod extract;
mod fallback;
mod prompt;
mod topics;

pub use acquire::{QUESTIONS_PER_QUIZ, acquire_questions};
pub use client::{ChatCompletionClient, QuestionGenerator};
pub use extract::{extract_json, parse_question};
pub use fallback::fallback_question;
pub use prompt::{SYSTEM_PROMPT, build_prompt};
pub use topics::{TOPICS, pick_topic};
