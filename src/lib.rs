//! # robotics-quiz
//!
//! A terminal quiz on robotics. Each play-through asks a chat-completion
//! endpoint for ten multiple-choice questions at the chosen difficulty,
//! substituting placeholder questions for any the endpoint fails to
//! deliver, then scores the player's answers.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use robotics_quiz::{GeneratorConfig, Quiz, QuizError};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), QuizError> {
//!     let quiz = Quiz::from_config(GeneratorConfig::from_env())?;
//!     quiz.run().await
//! }
//! ```

mod app;
pub mod config;
pub mod error;
pub mod generator;
mod models;
pub mod terminal;
mod ui;

use std::sync::Arc;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{info, warn};

pub use app::App;
pub use config::GeneratorConfig;
pub use error::{ConfigError, GeneratorError, QuizError};
pub use generator::{ChatCompletionClient, QuestionGenerator, acquire_questions};
pub use models::{AppState, Difficulty, Grade, OPTION_COUNT, Question, QuizSession, ValidationError};

const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Messages from the acquisition task to the event loop.
enum LoadEvent {
    Progress(usize),
    Done(Vec<Question>),
}

/// What the event loop should do after a key press.
enum Action {
    None,
    Acquire(Difficulty),
    Quit,
}

/// A quiz instance that can be run in the terminal.
pub struct Quiz {
    app: App,
    generator: Arc<dyn QuestionGenerator>,
}

impl Quiz {
    /// Create a quiz drawing its questions from `generator`.
    pub fn new(generator: Arc<dyn QuestionGenerator>) -> Self {
        Self {
            app: App::new(),
            generator,
        }
    }

    /// Create a quiz backed by the chat-completion endpoint in `config`.
    pub fn from_config(config: GeneratorConfig) -> Result<Self, QuizError> {
        if config.api_key.is_none() {
            warn!("no API key configured; questions will fall back to placeholders");
        }
        info!(?config, "using generator endpoint");
        let client = ChatCompletionClient::new(config)?;
        Ok(Self::new(Arc::new(client)))
    }

    /// Run the quiz in the terminal.
    ///
    /// This will take over the terminal, display the quiz UI, and return
    /// when the user quits.
    pub async fn run(mut self) -> Result<(), QuizError> {
        let mut term = terminal::TerminalSession::enter()?;
        let result = run_event_loop(&mut term, &mut self.app, &self.generator).await;
        term.restore()?;
        result
    }
}

async fn run_event_loop(
    term: &mut terminal::TerminalSession,
    app: &mut App,
    generator: &Arc<dyn QuestionGenerator>,
) -> Result<(), QuizError> {
    let (tx, mut rx) = mpsc::unbounded_channel::<LoadEvent>();
    let mut acquisition: Option<JoinHandle<()>> = None;

    loop {
        while let Ok(load_event) = rx.try_recv() {
            match load_event {
                LoadEvent::Progress(ordinal) => app.set_loading_progress(ordinal),
                LoadEvent::Done(questions) => {
                    app.finish_loading(questions);
                    acquisition = None;
                }
            }
        }

        term.terminal_mut().draw(|frame| ui::render(frame, app))?;

        if !event::poll(POLL_INTERVAL)? {
            tokio::task::yield_now().await;
            continue;
        }
        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        match handle_input(app, key.code) {
            Action::None => {}
            Action::Acquire(level) => {
                acquisition = Some(spawn_acquisition(Arc::clone(generator), level, tx.clone()));
            }
            Action::Quit => break,
        }
    }

    if let Some(handle) = acquisition {
        info!("quit during loading, abandoning acquisition");
        handle.abort();
    }

    Ok(())
}

fn spawn_acquisition(
    generator: Arc<dyn QuestionGenerator>,
    level: Difficulty,
    tx: mpsc::UnboundedSender<LoadEvent>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut rng = StdRng::from_entropy();
        let progress = tx.clone();
        let questions = acquire_questions(generator.as_ref(), level, &mut rng, |ordinal| {
            let _ = progress.send(LoadEvent::Progress(ordinal));
        })
        .await;
        let _ = tx.send(LoadEvent::Done(questions));
    })
}

fn handle_input(app: &mut App, key: KeyCode) -> Action {
    match app.state {
        AppState::Menu => handle_menu_input(app, key),
        AppState::Loading => handle_loading_input(key),
        AppState::Quiz => handle_quiz_input(app, key),
        AppState::Result => handle_result_input(app, key),
    }
}

fn is_quit(key: KeyCode) -> bool {
    matches!(key, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
}

fn handle_menu_input(app: &mut App, key: KeyCode) -> Action {
    let level = match key {
        KeyCode::Up | KeyCode::Char('k') => {
            app.select_previous_level();
            return Action::None;
        }
        KeyCode::Down | KeyCode::Char('j') => {
            app.select_next_level();
            return Action::None;
        }
        KeyCode::Char(c @ '1'..='3') => Difficulty::ALL[(c as u8 - b'1') as usize],
        KeyCode::Enter | KeyCode::Char(' ') => app.menu_selection(),
        _ if is_quit(key) => return Action::Quit,
        _ => return Action::None,
    };

    if app.select_difficulty(level) {
        Action::Acquire(level)
    } else {
        Action::None
    }
}

fn handle_loading_input(key: KeyCode) -> Action {
    if is_quit(key) {
        Action::Quit
    } else {
        Action::None
    }
}

fn handle_quiz_input(app: &mut App, key: KeyCode) -> Action {
    let answered = app
        .session()
        .is_some_and(|s| s.selected_option().is_some());

    match key {
        KeyCode::Up | KeyCode::Char('k') => app.select_previous_option(),
        KeyCode::Down | KeyCode::Char('j') => app.select_next_option(),
        KeyCode::Char(c @ 'a'..='e') => {
            app.select_option((c as u8 - b'a') as usize);
        }
        KeyCode::Char(c @ 'A'..='E') => {
            app.select_option((c as u8 - b'A') as usize);
        }
        KeyCode::Enter | KeyCode::Char(' ') if !answered => {
            app.submit_answer();
        }
        KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Char('n') | KeyCode::Right => {
            app.advance()
        }
        _ if is_quit(key) => return Action::Quit,
        _ => {}
    }
    Action::None
}

fn handle_result_input(app: &mut App, key: KeyCode) -> Action {
    match key {
        KeyCode::Down | KeyCode::Char('j') => app.scroll_results_down(),
        KeyCode::Up | KeyCode::Char('k') => app.scroll_results_up(),
        KeyCode::Char('r') | KeyCode::Char('R') => app.restart(),
        _ if is_quit(key) => return Action::Quit,
        _ => {}
    }
    Action::None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::{QUESTIONS_PER_QUIZ, fallback_question};

    fn start(app: &mut App, key: KeyCode) -> Option<Difficulty> {
        match handle_input(app, key) {
            Action::Acquire(level) => Some(level),
            _ => None,
        }
    }

    fn load(app: &mut App, level: Difficulty) {
        let questions = (0..QUESTIONS_PER_QUIZ)
            .map(|i| fallback_question("Space Robotics", level, i))
            .collect();
        app.finish_loading(questions);
    }

    #[test]
    fn test_menu_digit_starts_acquisition() {
        let mut app = App::new();
        assert_eq!(start(&mut app, KeyCode::Char('2')), Some(Difficulty::Medium));
        assert_eq!(app.state, AppState::Loading);
    }

    #[test]
    fn test_menu_enter_uses_highlighted_level() {
        let mut app = App::new();
        handle_input(&mut app, KeyCode::Down);
        handle_input(&mut app, KeyCode::Down);
        assert_eq!(start(&mut app, KeyCode::Enter), Some(Difficulty::Hard));
    }

    #[test]
    fn test_loading_ignores_everything_but_quit() {
        let mut app = App::new();
        start(&mut app, KeyCode::Char('1'));
        assert!(start(&mut app, KeyCode::Char('3')).is_none());
        assert!(start(&mut app, KeyCode::Enter).is_none());
        assert!(matches!(handle_input(&mut app, KeyCode::Char('q')), Action::Quit));
    }

    #[test]
    fn test_quiz_enter_answers_then_advances() {
        let mut app = App::new();
        start(&mut app, KeyCode::Char('1'));
        load(&mut app, Difficulty::Easy);

        handle_input(&mut app, KeyCode::Enter);
        let session = app.session().unwrap();
        assert_eq!(session.selected_option(), Some(0));
        assert_eq!(session.score(), 1);

        handle_input(&mut app, KeyCode::Enter);
        assert_eq!(app.session().unwrap().position(), 1);
    }

    #[test]
    fn test_quiz_letter_keys_answer_once() {
        let mut app = App::new();
        start(&mut app, KeyCode::Char('1'));
        load(&mut app, Difficulty::Easy);

        handle_input(&mut app, KeyCode::Char('c'));
        handle_input(&mut app, KeyCode::Char('a'));
        let session = app.session().unwrap();
        assert_eq!(session.selected_option(), Some(2));
        assert_eq!(session.score(), 0);
    }

    #[test]
    fn test_result_restart_returns_to_menu() {
        let mut app = App::new();
        start(&mut app, KeyCode::Char('1'));
        load(&mut app, Difficulty::Easy);
        for _ in 0..QUESTIONS_PER_QUIZ {
            handle_input(&mut app, KeyCode::Char('b'));
            handle_input(&mut app, KeyCode::Char('n'));
        }
        assert_eq!(app.state, AppState::Result);
        assert_eq!(app.session().unwrap().score(), 0);

        handle_input(&mut app, KeyCode::Char('r'));
        assert_eq!(app.state, AppState::Menu);
    }
}
