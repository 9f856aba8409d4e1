#![forbid(unsafe_code)]

pub mod assets;
pub mod audio;
pub mod countdown;
pub mod error;
pub mod quiz;

pub use assets::{AssetSource, DirAssetSource, InMemoryAssets};
pub use audio::{AudioClip, AudioSink, BACKGROUND_TRACK, BackgroundAudio, Playback};
pub use countdown::{COUNTDOWN_SECONDS, Countdown, CountdownId, CountdownTick};
pub use error::{AssetError, AudioError};
pub use quiz::{QuizEngine, QuizIntent, QuizLoop, QuizSnapshot, QuizState};
