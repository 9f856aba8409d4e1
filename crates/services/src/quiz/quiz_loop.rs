use futures::{Stream, StreamExt};
use quiz_core::model::Question;
use tokio::sync::{mpsc, watch};

use crate::audio::BackgroundAudio;
use crate::countdown::CountdownTick;

use super::engine::QuizEngine;
use super::view::QuizSnapshot;

/// User input forwarded by the rendering layer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum QuizIntent {
    Answer(String),
    DismissModal,
    Restart,
    PlayAudio,
    StopAudio,
}

/// Serializes UI intents and countdown ticks onto one engine.
///
/// Every handled event publishes a fresh `QuizSnapshot` to subscribers.
pub struct QuizLoop {
    engine: QuizEngine,
    ticks: mpsc::UnboundedReceiver<CountdownTick>,
    snapshots: watch::Sender<QuizSnapshot>,
    autoplay: bool,
}

impl QuizLoop {
    #[must_use]
    pub fn new(questions: Vec<Question>, audio: BackgroundAudio) -> Self {
        let (engine, ticks) = QuizEngine::new(questions, audio);
        let (snapshots, _) = watch::channel(engine.snapshot());
        Self {
            engine,
            ticks,
            snapshots,
            autoplay: true,
        }
    }

    /// Whether background audio starts together with the first question.
    #[must_use]
    pub fn with_autoplay(mut self, autoplay: bool) -> Self {
        self.autoplay = autoplay;
        self
    }

    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<QuizSnapshot> {
        self.snapshots.subscribe()
    }

    /// Run until `intents` ends, then tear the session down.
    pub async fn run<S>(mut self, mut intents: S)
    where
        S: Stream<Item = QuizIntent> + Unpin,
    {
        self.engine.begin(self.autoplay);
        self.publish();

        loop {
            tokio::select! {
                intent = intents.next() => match intent {
                    Some(intent) => self.apply(intent),
                    None => break,
                },
                Some(tick) = self.ticks.recv() => self.engine.on_tick(tick),
            }
            self.publish();
        }

        self.engine.teardown();
        self.publish();
        log::debug!("quiz loop finished");
    }

    fn apply(&mut self, intent: QuizIntent) {
        log::debug!("quiz intent: {intent:?}");
        match intent {
            QuizIntent::Answer(selected) => self.engine.submit_answer(&selected),
            QuizIntent::DismissModal => self.engine.dismiss_modal(),
            QuizIntent::Restart => self.engine.restart(),
            QuizIntent::PlayAudio => self.engine.play_background_audio(),
            QuizIntent::StopAudio => self.engine.stop_background_audio(),
        }
    }

    fn publish(&self) {
        self.snapshots.send_replace(self.engine.snapshot());
    }
}
