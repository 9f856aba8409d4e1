use quiz_core::model::Question;

use crate::countdown::COUNTDOWN_SECONDS;

/// Mutable quiz progress, owned by `QuizEngine`.
///
/// Invariant: `score <= current_index <= questions.len()`, and
/// `current_index == questions.len()` exactly when the quiz is complete.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizState {
    pub(crate) questions: Vec<Question>,
    pub(crate) current_index: usize,
    pub(crate) score: usize,
    pub(crate) remaining_seconds: u32,
    pub(crate) show_answer_modal: bool,
    pub(crate) show_summary: bool,
    pub(crate) last_answer_correct: bool,
}

impl QuizState {
    #[must_use]
    pub fn new(questions: Vec<Question>) -> Self {
        Self {
            questions,
            current_index: 0,
            score: 0,
            remaining_seconds: COUNTDOWN_SECONDS,
            show_answer_modal: false,
            show_summary: false,
            last_answer_correct: false,
        }
    }

    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.questions.len()
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    #[must_use]
    pub fn current_question(&self) -> Option<&Question> {
        self.questions.get(self.current_index)
    }

    #[must_use]
    pub fn score(&self) -> usize {
        self.score
    }

    #[must_use]
    pub fn remaining_seconds(&self) -> u32 {
        self.remaining_seconds
    }

    #[must_use]
    pub fn show_answer_modal(&self) -> bool {
        self.show_answer_modal
    }

    #[must_use]
    pub fn show_summary(&self) -> bool {
        self.show_summary
    }

    #[must_use]
    pub fn last_answer_correct(&self) -> bool {
        self.last_answer_correct
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.current_index >= self.questions.len()
    }
}
