use quiz_core::model::Question;
use tokio::sync::mpsc;

use crate::audio::BackgroundAudio;
use crate::countdown::{COUNTDOWN_SECONDS, Countdown, CountdownId, CountdownTick};

use super::state::QuizState;
use super::view::QuizSnapshot;

//
// ─── ENGINE ────────────────────────────────────────────────────────────────────
//

/// Single authority for quiz progress, scoring, countdown and audio.
///
/// The engine is not thread-safe by itself; all calls are expected to come
/// from one event loop (see `QuizLoop`). Countdown ticks arrive on the
/// receiver returned by `new` and must be fed back through `on_tick`.
pub struct QuizEngine {
    state: QuizState,
    countdown: Countdown,
    audio: BackgroundAudio,
}

impl QuizEngine {
    #[must_use]
    pub fn new(
        questions: Vec<Question>,
        audio: BackgroundAudio,
    ) -> (Self, mpsc::UnboundedReceiver<CountdownTick>) {
        let (countdown, ticks) = Countdown::new();
        let engine = Self {
            state: QuizState::new(questions),
            countdown,
            audio,
        };
        (engine, ticks)
    }

    #[must_use]
    pub fn state(&self) -> &QuizState {
        &self.state
    }

    #[must_use]
    pub fn snapshot(&self) -> QuizSnapshot {
        QuizSnapshot::capture(&self.state, self.audio.is_playing())
    }

    #[must_use]
    pub fn active_countdown(&self) -> Option<CountdownId> {
        self.countdown.active_id()
    }

    #[must_use]
    pub fn is_audio_playing(&self) -> bool {
        self.audio.is_playing()
    }

    //
    // ─── ANSWERS ───────────────────────────────────────────────────────────────
    //

    /// Grade `selected` against the current question and advance.
    pub fn submit_answer(&mut self, selected: &str) {
        let Some(question) = self.state.current_question() else {
            log::warn!("answer submitted after the quiz completed; ignoring");
            return;
        };
        let is_correct = question.is_correct(selected);
        self.advance(is_correct);
    }

    /// Countdown expiry: always an incorrect answer.
    pub fn on_timeout(&mut self) {
        if self.state.is_complete() {
            log::warn!("timeout after the quiz completed; ignoring");
            return;
        }
        log::debug!("question {} timed out", self.state.current_index + 1);
        self.advance(false);
    }

    fn advance(&mut self, is_correct: bool) {
        self.state.last_answer_correct = is_correct;
        if is_correct {
            self.state.score += 1;
        }

        self.stop_countdown();
        self.state.current_index += 1;

        if self.state.is_complete() {
            self.state.show_summary = true;
            self.stop_background_audio();
            log::info!(
                "quiz complete: {}/{}",
                self.state.score,
                self.state.total()
            );
        } else {
            self.state.show_answer_modal = true;
            self.start_countdown();
        }
    }

    /// Close the correct/incorrect indicator.
    pub fn dismiss_modal(&mut self) {
        self.state.show_answer_modal = false;
    }

    /// Back to the first question with a zero score.
    ///
    /// Background audio is stopped and not resumed; the countdown and
    /// `remaining_seconds` are left as they are.
    pub fn restart(&mut self) {
        self.state.current_index = 0;
        self.state.score = 0;
        self.state.show_summary = false;
        self.stop_background_audio();
        log::info!("quiz restarted");
    }

    //
    // ─── COUNTDOWN ─────────────────────────────────────────────────────────────
    //

    pub fn start_countdown(&mut self) {
        self.state.remaining_seconds = COUNTDOWN_SECONDS;
        self.countdown.start();
    }

    pub fn stop_countdown(&mut self) {
        self.countdown.stop();
    }

    /// Apply one countdown tick. Ticks from a cancelled countdown are dropped.
    pub fn on_tick(&mut self, tick: CountdownTick) {
        if !self.countdown.is_current(tick.id) {
            return;
        }
        if self.state.remaining_seconds > 0 {
            self.state.remaining_seconds -= 1;
        } else {
            self.stop_countdown();
            self.on_timeout();
        }
    }

    //
    // ─── AUDIO ─────────────────────────────────────────────────────────────────
    //

    pub fn play_background_audio(&mut self) {
        self.audio.play();
    }

    pub fn stop_background_audio(&mut self) {
        self.audio.stop();
    }

    //
    // ─── VIEW LIFECYCLE ────────────────────────────────────────────────────────
    //

    /// The quiz view became visible.
    pub fn begin(&mut self, play_audio: bool) {
        if play_audio {
            self.play_background_audio();
        }
        self.start_countdown();
        log::info!("quiz started with {} questions", self.state.total());
    }

    /// The quiz view was dismissed.
    pub fn teardown(&mut self) {
        self.stop_countdown();
        self.stop_background_audio();
    }
}

impl Drop for QuizEngine {
    fn drop(&mut self) {
        self.teardown();
    }
}
