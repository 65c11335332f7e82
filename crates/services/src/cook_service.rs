use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

use tracing::{debug, info};

use eggsy_core::Clock;
use eggsy_core::model::{CookSession, CookSettings, EggProfile, ProfileId, TickOutcome};
use eggsy_core::rng::Dice;

use crate::dice::ThreadDice;
use crate::snapshot::CookSnapshot;

struct SessionState {
    session: CookSession,
    dice: Box<dyn Dice + Send>,
}

/// Owns the countdown session and everything it needs to advance.
///
/// All operations take `&self`; the session and its dice sit behind one
/// mutex so a tick is fully applied before the next caller gets in.
pub struct CookTimerService {
    state: Mutex<SessionState>,
    clock: Clock,
    settings: CookSettings,
    muted: AtomicBool,
}

impl CookTimerService {
    #[must_use]
    pub fn new(clock: Clock, settings: CookSettings, dice: Box<dyn Dice + Send>) -> Self {
        Self {
            state: Mutex::new(SessionState {
                session: CookSession::new(),
                dice,
            }),
            clock,
            muted: AtomicBool::new(settings.muted()),
            settings,
        }
    }

    /// Service with the production `rand`-backed dice.
    #[must_use]
    pub fn with_thread_dice(clock: Clock, settings: CookSettings) -> Self {
        Self::new(clock, settings, Box::new(ThreadDice))
    }

    /// Start cooking the catalog entry behind `id`. An unknown id or a
    /// non-idle session leaves the state untouched.
    pub fn start(&self, id: ProfileId) -> bool {
        let Some(profile) = EggProfile::get(id) else {
            debug!(%id, "start ignored: unknown profile");
            return false;
        };

        let applied = self
            .lock()
            .session
            .start(profile.clone(), self.clock.now());
        if applied {
            info!(
                profile = profile.name(),
                minutes = profile.duration_minutes(),
                "cook started"
            );
        }
        applied
    }

    /// Advance the countdown by one second. See [`CookSession::tick`].
    pub fn tick(&self) -> TickOutcome {
        let mut state = self.lock();
        let SessionState { session, dice } = &mut *state;
        let outcome = session.tick(dice.as_mut(), self.settings.chatter_percent(), self.clock.now());
        match outcome {
            TickOutcome::Completed => info!("egg ready"),
            TickOutcome::Ticking => {
                debug!(remaining = session.remaining_seconds(), "tick");
            }
            TickOutcome::Ignored => {}
        }
        outcome
    }

    /// Abandon a running cook without completion effects.
    pub fn cancel(&self) -> bool {
        let applied = self.lock().session.cancel();
        if applied {
            info!("cook canceled");
        }
        applied
    }

    /// Clear a finished (or idle) session back to the picker.
    pub fn reset(&self) {
        self.lock().session.reset();
    }

    /// Lower the celebration flag once the confetti window has passed.
    pub fn clear_celebration(&self) {
        self.lock().session.clear_celebration();
    }

    /// Flip the chime mute and return the new value. Affects nothing but
    /// the completion chime.
    pub fn toggle_mute(&self) -> bool {
        let muted = !self.muted.fetch_xor(true, Ordering::AcqRel);
        debug!(muted, "mute toggled");
        muted
    }

    #[must_use]
    pub fn muted(&self) -> bool {
        self.muted.load(Ordering::Acquire)
    }

    /// How long the confetti overlay stays up after completion.
    #[must_use]
    pub fn celebration_seconds(&self) -> u32 {
        self.settings.celebration_seconds()
    }

    /// Current state, projected for the presentation layer.
    #[must_use]
    pub fn snapshot(&self) -> CookSnapshot {
        CookSnapshot::capture(&self.lock().session, self.muted())
    }

    fn lock(&self) -> MutexGuard<'_, SessionState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
