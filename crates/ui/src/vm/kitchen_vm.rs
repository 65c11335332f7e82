use std::sync::Arc;

use eggsy_core::model::{ProfileId, SessionMode, TickOutcome};
use services::{CookSnapshot, CookTimerService};

use crate::vm::time_fmt::format_clock;

/// Everything the kitchen screen can ask for.
///
/// The real one-second ticker and the test harness both dispatch these;
/// there is no second path into the session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KitchenIntent {
    Start(ProfileId),
    Tick,
    Cancel,
    Reset,
    ToggleMute,
    CelebrationOver,
}

/// Presentation-side handle around the timer service: applies intents and
/// caches the snapshot the views render from.
#[derive(Clone)]
pub struct KitchenVm {
    service: Arc<CookTimerService>,
    snapshot: CookSnapshot,
}

impl KitchenVm {
    #[must_use]
    pub fn new(service: Arc<CookTimerService>) -> Self {
        let snapshot = service.snapshot();
        Self { service, snapshot }
    }

    /// Apply an intent and refresh the snapshot. The return value is only
    /// meaningful for `Tick`; every other intent reports `Ignored`.
    pub fn apply(&mut self, intent: KitchenIntent) -> TickOutcome {
        let outcome = match intent {
            KitchenIntent::Start(id) => {
                self.service.start(id);
                TickOutcome::Ignored
            }
            KitchenIntent::Tick => self.service.tick(),
            KitchenIntent::Cancel => {
                self.service.cancel();
                TickOutcome::Ignored
            }
            KitchenIntent::Reset => {
                self.service.reset();
                TickOutcome::Ignored
            }
            KitchenIntent::ToggleMute => {
                self.service.toggle_mute();
                TickOutcome::Ignored
            }
            KitchenIntent::CelebrationOver => {
                self.service.clear_celebration();
                TickOutcome::Ignored
            }
        };
        self.snapshot = self.service.snapshot();
        outcome
    }

    #[must_use]
    pub fn snapshot(&self) -> &CookSnapshot {
        &self.snapshot
    }

    #[must_use]
    pub fn mode(&self) -> SessionMode {
        self.snapshot.mode
    }

    /// Remaining time formatted as `M:SS`.
    #[must_use]
    pub fn remaining_label(&self) -> String {
        format_clock(self.snapshot.remaining_seconds)
    }

    #[must_use]
    pub fn celebration_seconds(&self) -> u32 {
        self.service.celebration_seconds()
    }
}
