use quiz_core::model::Question;

use super::state::QuizState;

/// Read-only copy of the published quiz state, handed to the UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizSnapshot {
    pub question: Option<Question>,
    /// 1-based number of the current question; `total` once complete.
    pub question_number: usize,
    pub total: usize,
    pub remaining_seconds: u32,
    pub score: usize,
    pub show_answer_modal: bool,
    pub show_summary: bool,
    pub last_answer_correct: bool,
    pub audio_playing: bool,
}

impl QuizSnapshot {
    pub(crate) fn capture(state: &QuizState, audio_playing: bool) -> Self {
        Self {
            question: state.current_question().cloned(),
            question_number: (state.current_index() + 1).min(state.total()),
            total: state.total(),
            remaining_seconds: state.remaining_seconds(),
            score: state.score(),
            show_answer_modal: state.show_answer_modal(),
            show_summary: state.show_summary(),
            last_answer_correct: state.last_answer_correct(),
            audio_playing,
        }
    }

    /// Snapshot of a session that has not started yet.
    #[must_use]
    pub fn fresh(questions: &[Question]) -> Self {
        Self::capture(&QuizState::new(questions.to_vec()), false)
    }
}
