use tracing::info;

use crate::generator::QUESTIONS_PER_QUIZ;
use crate::models::{AppState, Difficulty, OPTION_COUNT, Question, QuizSession};

const NUM_LEVELS: usize = Difficulty::ALL.len();

/// Session controller: `Menu -> Loading -> Quiz -> Result -> Menu`.
///
/// Every transition is guarded by the current state, so input arriving in
/// the wrong state is ignored.
pub struct App {
    pub state: AppState,
    menu_selection: usize,
    loading_level: Option<Difficulty>,
    loading_progress: usize,
    session: Option<QuizSession>,
    highlighted_option: usize,
    result_scroll: usize,
}

impl App {
    pub fn new() -> Self {
        Self {
            state: AppState::Menu,
            menu_selection: 0,
            loading_level: None,
            loading_progress: 0,
            session: None,
            highlighted_option: 0,
            result_scroll: 0,
        }
    }

    pub fn session(&self) -> Option<&QuizSession> {
        self.session.as_ref()
    }

    pub fn menu_selection(&self) -> Difficulty {
        Difficulty::ALL[self.menu_selection]
    }

    pub fn highlighted_option(&self) -> usize {
        self.highlighted_option
    }

    pub fn result_scroll(&self) -> usize {
        self.result_scroll
    }

    pub fn loading_level(&self) -> Option<Difficulty> {
        self.loading_level
    }

    pub fn loading_message(&self) -> String {
        format!(
            "Generating question {} of {}...",
            self.loading_progress + 1,
            QUESTIONS_PER_QUIZ
        )
    }

    pub fn select_next_level(&mut self) {
        if self.state == AppState::Menu {
            self.menu_selection = (self.menu_selection + 1) % NUM_LEVELS;
        }
    }

    pub fn select_previous_level(&mut self) {
        if self.state == AppState::Menu {
            self.menu_selection = (self.menu_selection + NUM_LEVELS - 1) % NUM_LEVELS;
        }
    }

    /// Leave the menu for the loading screen.
    ///
    /// Returns false (and changes nothing) outside the menu; the caller only
    /// starts acquisition on true.
    pub fn select_difficulty(&mut self, level: Difficulty) -> bool {
        if self.state != AppState::Menu {
            return false;
        }

        info!(%level, "starting quiz");
        self.state = AppState::Loading;
        self.loading_level = Some(level);
        self.loading_progress = 0;
        true
    }

    pub fn set_loading_progress(&mut self, ordinal: usize) {
        if self.state == AppState::Loading {
            self.loading_progress = ordinal.min(QUESTIONS_PER_QUIZ - 1);
        }
    }

    /// Start the quiz with the acquired questions.
    pub fn finish_loading(&mut self, questions: Vec<Question>) {
        if self.state != AppState::Loading {
            return;
        }
        let Some(level) = self.loading_level.take() else {
            return;
        };

        self.session = Some(QuizSession::new(level, questions));
        self.highlighted_option = 0;
        self.state = AppState::Quiz;
    }

    pub fn select_next_option(&mut self) {
        if self.can_answer() {
            self.highlighted_option = (self.highlighted_option + 1) % OPTION_COUNT;
        }
    }

    pub fn select_previous_option(&mut self) {
        if self.can_answer() {
            self.highlighted_option = (self.highlighted_option + OPTION_COUNT - 1) % OPTION_COUNT;
        }
    }

    /// Answer the current question. Ignored once it has an answer.
    pub fn select_option(&mut self, option: usize) -> bool {
        if self.state != AppState::Quiz {
            return false;
        }
        let Some(session) = self.session.as_mut() else {
            return false;
        };

        let recorded = session.select_option(option);
        if recorded {
            self.highlighted_option = option;
        }
        recorded
    }

    pub fn submit_answer(&mut self) -> bool {
        self.select_option(self.highlighted_option)
    }

    /// Move to the next question, or to the result screen after the last.
    pub fn advance(&mut self) {
        if self.state != AppState::Quiz {
            return;
        }
        let Some(session) = self.session.as_mut() else {
            return;
        };

        let before = session.position();
        if session.advance() {
            info!(
                score = session.score(),
                total = session.total_questions(),
                "quiz finished"
            );
            self.result_scroll = 0;
            self.state = AppState::Result;
        } else if session.position() != before {
            self.highlighted_option = 0;
        }
    }

    pub fn scroll_results_down(&mut self) {
        if let Some(session) = &self.session {
            let max_scroll = session.total_questions().saturating_sub(1);
            self.result_scroll = (self.result_scroll + 1).min(max_scroll);
        }
    }

    pub fn scroll_results_up(&mut self) {
        self.result_scroll = self.result_scroll.saturating_sub(1);
    }

    /// Discard the finished session and return to the menu.
    pub fn restart(&mut self) {
        if self.state != AppState::Result {
            return;
        }

        self.session = None;
        self.highlighted_option = 0;
        self.result_scroll = 0;
        self.state = AppState::Menu;
    }

    fn can_answer(&self) -> bool {
        self.state == AppState::Quiz
            && self
                .session
                .as_ref()
                .is_some_and(|s| s.selected_option().is_none())
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
