use chrono::{DateTime, Utc};

use crate::messages;
use crate::model::parade::Parade;
use crate::model::profile::EggProfile;
use crate::rng::Dice;

//
// ─── MODES & OUTCOMES ──────────────────────────────────────────────────────────
//

/// Where the countdown currently stands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionMode {
    /// No egg selected; the picker is showing.
    Idle,
    /// Counting down.
    Running,
    /// The countdown hit zero and the result is on display.
    Completed,
}

/// What a single call to [`CookSession::tick`] did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    /// The countdown advanced and the session is still running.
    Ticking,
    /// This tick moved the session from Running to Completed. Emitted at
    /// most once per cook; completion effects key off this value.
    Completed,
    /// The session was not running; nothing changed.
    Ignored,
}

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

/// The countdown state machine: Idle → Running → Completed → Idle.
///
/// Every operation is a synchronous, total transition. Calls that arrive
/// in the wrong mode are guarded no-ops rather than errors, because the
/// input surface (three buttons) cannot produce anything else worth
/// reporting.
#[derive(Clone, Debug, PartialEq)]
pub struct CookSession {
    profile: Option<EggProfile>,
    remaining_seconds: u32,
    mode: SessionMode,
    status_message: &'static str,
    celebrating: bool,
    started_at: Option<DateTime<Utc>>,
    completed_at: Option<DateTime<Utc>>,
    parade: Parade,
}

impl Default for CookSession {
    fn default() -> Self {
        Self::new()
    }
}

impl CookSession {
    #[must_use]
    pub fn new() -> Self {
        Self {
            profile: None,
            remaining_seconds: 0,
            mode: SessionMode::Idle,
            status_message: "",
            celebrating: false,
            started_at: None,
            completed_at: None,
            parade: Parade::new(),
        }
    }

    /// Begin cooking the given egg. Valid only from Idle; returns whether
    /// the transition applied.
    pub fn start(&mut self, profile: EggProfile, now: DateTime<Utc>) -> bool {
        if self.mode != SessionMode::Idle {
            return false;
        }

        self.remaining_seconds = profile.duration_seconds();
        self.profile = Some(profile);
        self.mode = SessionMode::Running;
        self.status_message = messages::SOAKING;
        self.celebrating = false;
        self.started_at = Some(now);
        self.completed_at = None;
        self.parade = Parade::new();
        true
    }

    /// Advance the countdown by one second.
    ///
    /// While running: decrements the clock, walks the parade, and lets the
    /// dice decide whether the status line rotates (`chatter_percent` in
    /// 0..=100). The tick that reaches zero flips the session to Completed,
    /// raises the celebration flag, and returns [`TickOutcome::Completed`],
    /// exactly once per cook. In any other mode this is a no-op.
    pub fn tick(
        &mut self,
        dice: &mut dyn Dice,
        chatter_percent: u8,
        now: DateTime<Utc>,
    ) -> TickOutcome {
        if self.mode != SessionMode::Running {
            return TickOutcome::Ignored;
        }

        self.remaining_seconds = self.remaining_seconds.saturating_sub(1);
        self.parade.advance();

        if self.remaining_seconds == 0 {
            self.mode = SessionMode::Completed;
            self.status_message = messages::READY;
            self.celebrating = true;
            self.completed_at = Some(now);
            return TickOutcome::Completed;
        }

        if dice.chance(f64::from(chatter_percent) / 100.0) {
            self.status_message = messages::COOKING[dice.pick_index(messages::COOKING.len())];
        }
        TickOutcome::Ticking
    }

    /// Abandon a running cook. Returns the session to Idle defaults without
    /// any completion effect; returns whether the transition applied.
    ///
    /// Cancel is symmetric with [`CookSession::reset`]: the partial
    /// countdown is discarded, not preserved.
    pub fn cancel(&mut self) -> bool {
        if self.mode != SessionMode::Running {
            return false;
        }
        *self = Self::new();
        true
    }

    /// Clear everything back to Idle defaults. Valid from Completed or
    /// Idle; a running cook must be cancelled instead.
    pub fn reset(&mut self) {
        if self.mode == SessionMode::Running {
            return;
        }
        *self = Self::new();
    }

    /// Lower the celebration flag once the confetti window has passed.
    pub fn clear_celebration(&mut self) {
        self.celebrating = false;
    }

    //
    // ─── READS ─────────────────────────────────────────────────────────────
    //

    #[must_use]
    pub fn mode(&self) -> SessionMode {
        self.mode
    }

    #[must_use]
    pub fn profile(&self) -> Option<&EggProfile> {
        self.profile.as_ref()
    }

    #[must_use]
    pub fn remaining_seconds(&self) -> u32 {
        self.remaining_seconds
    }

    /// Elapsed share of the cook, in percent: exactly 0 at start, exactly
    /// 100 at completion, non-decreasing in between. 0 while Idle.
    #[must_use]
    pub fn progress_percent(&self) -> f64 {
        let Some(profile) = &self.profile else {
            return 0.0;
        };
        let total = f64::from(profile.duration_seconds());
        let elapsed = total - f64::from(self.remaining_seconds);
        elapsed / total * 100.0
    }

    #[must_use]
    pub fn status_message(&self) -> &'static str {
        self.status_message
    }

    #[must_use]
    pub fn is_celebrating(&self) -> bool {
        self.celebrating
    }

    #[must_use]
    pub fn started_at(&self) -> Option<DateTime<Utc>> {
        self.started_at
    }

    #[must_use]
    pub fn completed_at(&self) -> Option<DateTime<Utc>> {
        self.completed_at
    }

    #[must_use]
    pub fn parade(&self) -> &Parade {
        &self.parade
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
