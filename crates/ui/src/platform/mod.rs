use std::sync::Arc;

mod desktop;

/// Plays the completion chime. Implementations must not block the UI.
pub trait ChimePlayer: Send + Sync {
    fn play(&self);
}

pub type ChimePlayerRef = Arc<dyn ChimePlayer>;

pub use desktop::DesktopChimePlayer;

/// No-op player for tests and headless runs.
pub struct SilentChimePlayer;

impl ChimePlayer for SilentChimePlayer {
    fn play(&self) {}
}
