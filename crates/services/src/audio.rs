use std::path::Path;
use std::sync::Arc;

use crate::assets::AssetSource;
use crate::error::AudioError;

/// Logical name of the looping background track.
pub const BACKGROUND_TRACK: &str = "kahoot_lobby_music_80s_edition.mp3";

/// A loaded audio asset ready to hand to a sink.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioClip {
    name: String,
    mime: &'static str,
    bytes: Vec<u8>,
}

impl AudioClip {
    /// # Errors
    ///
    /// Returns `AudioError::Unsupported` when the name has no known audio extension.
    pub fn new(name: impl Into<String>, bytes: Vec<u8>) -> Result<Self, AudioError> {
        let name = name.into();
        let mime = mime_for(&name).ok_or_else(|| AudioError::Unsupported { name: name.clone() })?;
        Ok(Self { name, mime, bytes })
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn mime(&self) -> &'static str {
        self.mime
    }

    #[must_use]
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }
}

fn mime_for(name: &str) -> Option<&'static str> {
    let ext = Path::new(name).extension()?.to_str()?.to_ascii_lowercase();
    match ext.as_str() {
        "mp3" => Some("audio/mpeg"),
        "wav" => Some("audio/wav"),
        "ogg" => Some("audio/ogg"),
        "m4a" => Some("audio/mp4"),
        _ => None,
    }
}

/// Something that can loop a clip until told to stop.
pub trait AudioSink {
    /// # Errors
    ///
    /// Returns `AudioError::Sink` when playback cannot be started.
    fn play_looping(&self, clip: &AudioClip) -> Result<Box<dyn Playback>, AudioError>;
}

/// A live playback started by an `AudioSink`.
pub trait Playback {
    fn stop(&mut self);
}

/// Owns the single background track and its playback handle.
///
/// Playback is best effort: load or sink failures are logged and leave the
/// track stopped.
pub struct BackgroundAudio {
    track: String,
    assets: Arc<dyn AssetSource>,
    sink: Box<dyn AudioSink>,
    playing: Option<Box<dyn Playback>>,
}

impl BackgroundAudio {
    #[must_use]
    pub fn new(
        track: impl Into<String>,
        assets: Arc<dyn AssetSource>,
        sink: Box<dyn AudioSink>,
    ) -> Self {
        Self {
            track: track.into(),
            assets,
            sink,
            playing: None,
        }
    }

    #[must_use]
    pub fn track(&self) -> &str {
        &self.track
    }

    #[must_use]
    pub fn is_playing(&self) -> bool {
        self.playing.is_some()
    }

    /// Start looping the track, replacing any playback already running.
    pub fn play(&mut self) {
        self.stop();
        match self.start() {
            Ok(playback) => {
                log::debug!("background audio started: {}", self.track);
                self.playing = Some(playback);
            }
            Err(err) => log::warn!("background audio unavailable: {err}"),
        }
    }

    pub fn stop(&mut self) {
        if let Some(mut playback) = self.playing.take() {
            playback.stop();
            log::debug!("background audio stopped: {}", self.track);
        }
    }

    fn start(&self) -> Result<Box<dyn Playback>, AudioError> {
        let bytes = self.assets.load(&self.track)?;
        let clip = AudioClip::new(self.track.clone(), bytes)?;
        self.sink.play_looping(&clip)
    }
}

impl Drop for BackgroundAudio {
    fn drop(&mut self) {
        self.stop();
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::{AudioClip, AudioSink, Playback};
    use crate::error::AudioError;

    /// Records sink activity so tests can assert on the playback lifecycle.
    #[derive(Debug, Default)]
    pub struct SinkLog {
        pub started: Vec<String>,
        pub stopped: usize,
    }

    impl SinkLog {
        pub fn live(&self) -> usize {
            self.started.len() - self.stopped
        }
    }

    #[derive(Clone, Default)]
    pub struct RecordingSink {
        pub log: Rc<RefCell<SinkLog>>,
        pub fail: bool,
    }

    struct RecordingPlayback {
        log: Rc<RefCell<SinkLog>>,
    }

    impl Playback for RecordingPlayback {
        fn stop(&mut self) {
            self.log.borrow_mut().stopped += 1;
        }
    }

    impl AudioSink for RecordingSink {
        fn play_looping(&self, clip: &AudioClip) -> Result<Box<dyn Playback>, AudioError> {
            if self.fail {
                return Err(AudioError::Sink("device busy".to_string()));
            }
            self.log.borrow_mut().started.push(clip.name().to_string());
            Ok(Box::new(RecordingPlayback {
                log: Rc::clone(&self.log),
            }))
        }
    }
}
