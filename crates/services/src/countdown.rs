use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};

/// Seconds on the clock when a question starts.
pub const COUNTDOWN_SECONDS: u32 = 30;

const TICK_PERIOD: Duration = Duration::from_secs(1);

/// Identifies one scheduled countdown. Each `Countdown::start` issues a new id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CountdownId(u64);

/// One elapsed second of the countdown identified by `id`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountdownTick {
    pub id: CountdownId,
}

struct ActiveCountdown {
    id: CountdownId,
    task: JoinHandle<()>,
}

/// Owner of the single repeating tick task.
///
/// Ticks are delivered over a channel rather than mutating state directly so
/// the consumer can apply them on its own event loop. A tick whose id is no
/// longer current must be ignored by the consumer; `is_current` answers that.
pub struct Countdown {
    ticks: mpsc::UnboundedSender<CountdownTick>,
    next_id: u64,
    active: Option<ActiveCountdown>,
}

impl Countdown {
    #[must_use]
    pub fn new() -> (Self, mpsc::UnboundedReceiver<CountdownTick>) {
        let (ticks, rx) = mpsc::unbounded_channel();
        let countdown = Self {
            ticks,
            next_id: 0,
            active: None,
        };
        (countdown, rx)
    }

    /// Cancel any running countdown and schedule a fresh one.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn start(&mut self) -> CountdownId {
        self.stop();

        self.next_id += 1;
        let id = CountdownId(self.next_id);
        let ticks = self.ticks.clone();
        let task = tokio::spawn(async move {
            let mut interval = tokio::time::interval_at(Instant::now() + TICK_PERIOD, TICK_PERIOD);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                interval.tick().await;
                if ticks.send(CountdownTick { id }).is_err() {
                    break;
                }
            }
        });

        self.active = Some(ActiveCountdown { id, task });
        id
    }

    /// Cancel the running countdown. Returns whether one was running.
    pub fn stop(&mut self) -> bool {
        match self.active.take() {
            Some(active) => {
                active.task.abort();
                true
            }
            None => false,
        }
    }

    #[must_use]
    pub fn active_id(&self) -> Option<CountdownId> {
        self.active.as_ref().map(|active| active.id)
    }

    #[must_use]
    pub fn is_current(&self, id: CountdownId) -> bool {
        self.active_id() == Some(id)
    }
}

impl Drop for Countdown {
    fn drop(&mut self) {
        self.stop();
    }
}
