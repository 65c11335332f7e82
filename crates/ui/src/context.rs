use std::sync::Arc;

use services::CookTimerService;

use crate::platform::ChimePlayerRef;

/// Composition seam between the desktop binary and the views.
pub trait UiApp: Send + Sync {
    fn app_title(&self) -> &str;

    fn cook_service(&self) -> Arc<CookTimerService>;
    fn chime_player(&self) -> ChimePlayerRef;
}

#[derive(Clone)]
pub struct AppContext {
    title: String,
    cook_service: Arc<CookTimerService>,
    chime_player: ChimePlayerRef,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            title: app.app_title().to_string(),
            cook_service: app.cook_service(),
            chime_player: app.chime_player(),
        }
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn cook_service(&self) -> Arc<CookTimerService> {
        Arc::clone(&self.cook_service)
    }

    #[must_use]
    pub fn chime_player(&self) -> ChimePlayerRef {
        Arc::clone(&self.chime_player)
    }
}

// This context is provided by the application composition root (`crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
