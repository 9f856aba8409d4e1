//! Background audio played through the webview.
//!
//! The clip is embedded as a base64 data URL in a looping `<audio>` element,
//! so no file needs to be served to the webview.

mod scripts;

use std::rc::Rc;
use std::sync::atomic::{AtomicU64, Ordering};

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use dioxus::document::{Document, document};
use services::{AudioClip, AudioError, AudioSink, Playback};

use scripts::{audio_play_script, audio_stop_script};

static NEXT_PLAYBACK_KEY: AtomicU64 = AtomicU64::new(1);

#[must_use]
pub fn data_url(clip: &AudioClip) -> String {
    format!("data:{};base64,{}", clip.mime(), STANDARD.encode(clip.bytes()))
}

#[derive(Debug, Default, Clone, Copy)]
pub struct WebviewAudioSink;

impl WebviewAudioSink {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl AudioSink for WebviewAudioSink {
    fn play_looping(&self, clip: &AudioClip) -> Result<Box<dyn Playback>, AudioError> {
        if clip.bytes().is_empty() {
            return Err(AudioError::Sink(format!("{} has no data", clip.name())));
        }
        let key = NEXT_PLAYBACK_KEY.fetch_add(1, Ordering::Relaxed);
        let document = document();
        let _ = document.eval(audio_play_script(key, &data_url(clip)));
        log::debug!(
            "webview audio #{key} started: {} ({} bytes)",
            clip.name(),
            clip.bytes().len()
        );
        Ok(Box::new(WebviewPlayback { key, document }))
    }
}

/// Handle for one `<audio>` element; stopping only affects that element.
///
/// The document is captured at start so `stop` also works while the view is
/// being torn down.
struct WebviewPlayback {
    key: u64,
    document: Rc<dyn Document>,
}

impl Playback for WebviewPlayback {
    fn stop(&mut self) {
        let _ = self.document.eval(audio_stop_script(self.key));
        log::debug!("webview audio #{} stopped", self.key);
    }
}
