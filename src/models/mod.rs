mod difficulty;
mod question;
mod session;

pub use difficulty::Difficulty;
pub use question::{GeneratedQuestion, OPTION_COUNT, Question, ValidationError};
pub use session::{Grade, QuizSession};

/// Which screen the application is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    Menu,
    Loading,
    Quiz,
    Result,
}
