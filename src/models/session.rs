use super::{Difficulty, OPTION_COUNT, Question};

/// Message band shown on the result screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Grade {
    Excellent,
    Great,
    Good,
    KeepPracticing,
}

impl Grade {
    pub fn from_percentage(percentage: f64) -> Self {
        if percentage >= 90.0 {
            Grade::Excellent
        } else if percentage >= 70.0 {
            Grade::Great
        } else if percentage >= 50.0 {
            Grade::Good
        } else {
            Grade::KeepPracticing
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            Grade::Excellent => "Excellent!",
            Grade::Great => "Great job!",
            Grade::Good => "Good work!",
            Grade::KeepPracticing => "Keep practicing!",
        }
    }
}

/// In-memory state of one play-through.
#[derive(Debug, Clone)]
pub struct QuizSession {
    difficulty: Difficulty,
    questions: Vec<Question>,
    position: usize,
    score: usize,
    selected: Option<usize>,
    answers: Vec<Option<usize>>,
    finished: bool,
}

impl QuizSession {
    pub fn new(difficulty: Difficulty, questions: Vec<Question>) -> Self {
        let num_questions = questions.len();

        Self {
            difficulty,
            questions,
            position: 0,
            score: 0,
            selected: None,
            answers: vec![None; num_questions],
            finished: num_questions == 0,
        }
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn answers(&self) -> &[Option<usize>] {
        &self.answers
    }

    pub fn current_question(&self) -> Option<&Question> {
        self.questions.get(self.position)
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn current_question_number(&self) -> usize {
        self.position + 1
    }

    pub fn total_questions(&self) -> usize {
        self.questions.len()
    }

    pub fn selected_option(&self) -> Option<usize> {
        self.selected
    }

    pub fn score(&self) -> usize {
        self.score
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Record an answer for the current question.
    ///
    /// Only the first selection per question counts; returns whether this
    /// call recorded one.
    pub fn select_option(&mut self, option: usize) -> bool {
        if self.finished || self.selected.is_some() || option >= OPTION_COUNT {
            return false;
        }
        let Some(question) = self.questions.get(self.position) else {
            return false;
        };

        if question.is_correct(option) {
            self.score += 1;
        }
        self.selected = Some(option);
        self.answers[self.position] = Some(option);
        true
    }

    /// Move past the answered current question.
    ///
    /// No-op until an option has been selected. Returns true once the last
    /// question has been advanced past.
    pub fn advance(&mut self) -> bool {
        if self.finished {
            return true;
        }
        if self.selected.is_none() {
            return false;
        }

        if self.position + 1 >= self.questions.len() {
            self.finished = true;
        } else {
            self.position += 1;
            self.selected = None;
        }
        self.finished
    }

    pub fn percentage(&self) -> f64 {
        let total = self.questions.len();
        if total > 0 {
            self.score as f64 * 100.0 / total as f64
        } else {
            0.0
        }
    }

    pub fn grade(&self) -> Grade {
        Grade::from_percentage(self.percentage())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question(correct_index: usize) -> Question {
        let options = ["A", "B", "C", "D", "E"].map(String::from).to_vec();
        Question::new("Which one?", options, correct_index).unwrap()
    }

    fn session(n: usize) -> QuizSession {
        QuizSession::new(Difficulty::Medium, (0..n).map(|i| question(i % 5)).collect())
    }

    fn answer_all(session: &mut QuizSession, correct: usize) {
        for i in 0..session.total_questions() {
            let expected = session.current_question().unwrap().correct_index();
            let pick = if i < correct { expected } else { (expected + 1) % 5 };
            assert!(session.select_option(pick));
            session.advance();
        }
    }

    #[test]
    fn test_correct_selection_scores() {
        let mut s = session(10);
        assert!(s.select_option(0));
        assert_eq!(s.score(), 1);
        assert_eq!(s.selected_option(), Some(0));
    }

    #[test]
    fn test_wrong_selection_does_not_score() {
        let mut s = session(10);
        assert!(s.select_option(3));
        assert_eq!(s.score(), 0);
    }

    #[test]
    fn test_second_selection_is_ignored() {
        let mut s = session(10);
        assert!(s.select_option(1));
        assert!(!s.select_option(0));
        assert_eq!(s.score(), 0);
        assert_eq!(s.selected_option(), Some(1));
        assert_eq!(s.answers()[0], Some(1));
    }

    #[test]
    fn test_out_of_range_selection_is_ignored() {
        let mut s = session(10);
        assert!(!s.select_option(5));
        assert_eq!(s.selected_option(), None);
    }

    #[test]
    fn test_advance_requires_selection() {
        let mut s = session(10);
        assert!(!s.advance());
        assert_eq!(s.position(), 0);

        s.select_option(0);
        assert!(!s.advance());
        assert_eq!(s.position(), 1);
        assert_eq!(s.selected_option(), None);
    }

    #[test]
    fn test_advance_past_last_question_finishes() {
        let mut s = session(10);
        answer_all(&mut s, 10);
        assert!(s.is_finished());
        assert_eq!(s.position(), 9);
        assert_eq!(s.score(), 10);
    }

    #[test]
    fn test_grade_bands() {
        let cases = [
            (10, 100.0, Grade::Excellent, "Excellent!"),
            (9, 90.0, Grade::Excellent, "Excellent!"),
            (7, 70.0, Grade::Great, "Great job!"),
            (5, 50.0, Grade::Good, "Good work!"),
            (4, 40.0, Grade::KeepPracticing, "Keep practicing!"),
            (0, 0.0, Grade::KeepPracticing, "Keep practicing!"),
        ];

        for (correct, percentage, grade, message) in cases {
            let mut s = session(10);
            answer_all(&mut s, correct);
            assert_eq!(s.score(), correct);
            assert_eq!(s.percentage(), percentage);
            assert_eq!(s.grade(), grade);
            assert_eq!(s.grade().message(), message);
        }
    }
}
