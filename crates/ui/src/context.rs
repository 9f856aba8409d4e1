use std::sync::Arc;

use quiz_core::model::Question;
use services::AssetSource;

pub trait UiApp: Send + Sync {
    fn questions(&self) -> Vec<Question>;
    fn assets(&self) -> Arc<dyn AssetSource>;

    /// Start the background track together with the first question.
    fn autoplay_audio(&self) -> bool;
}

#[derive(Clone)]
pub struct AppContext {
    questions: Arc<[Question]>,
    assets: Arc<dyn AssetSource>,
    autoplay_audio: bool,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            questions: app.questions().into(),
            assets: app.assets(),
            autoplay_audio: app.autoplay_audio(),
        }
    }

    #[must_use]
    pub fn questions(&self) -> Vec<Question> {
        self.questions.to_vec()
    }

    #[must_use]
    pub fn assets(&self) -> Arc<dyn AssetSource> {
        Arc::clone(&self.assets)
    }

    #[must_use]
    pub fn autoplay_audio(&self) -> bool {
        self.autoplay_audio
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
