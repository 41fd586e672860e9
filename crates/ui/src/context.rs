use std::sync::Arc;

use services::WordSource;

pub trait UiApp: Send + Sync {
    fn word_source(&self) -> Arc<dyn WordSource>;
    fn session_size(&self) -> usize;
}

#[derive(Clone)]
pub struct AppContext {
    word_source: Arc<dyn WordSource>,
    session_size: usize,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            word_source: app.word_source(),
            session_size: app.session_size(),
        }
    }

    #[must_use]
    pub fn word_source(&self) -> Arc<dyn WordSource> {
        Arc::clone(&self.word_source)
    }

    #[must_use]
    pub fn session_size(&self) -> usize {
        self.session_size
    }
}

/// Build an `AppContext` from a UI-facing app implementation.
///
/// Called by the binary before launch; views read the result with `use_context`.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
