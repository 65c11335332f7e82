use thiserror::Error;

/// Validated launch settings for the timer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CookSettings {
    muted: bool,
    chatter_percent: u8,
    celebration_seconds: u32,
}

/// Unvalidated settings as collected from flags and environment.
#[derive(Clone, Copy, Debug, Default)]
pub struct CookSettingsDraft {
    pub muted: Option<bool>,
    pub chatter_percent: Option<u8>,
    pub celebration_seconds: Option<u32>,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SettingsError {
    #[error("chatter percent must be at most 100, got {provided}")]
    InvalidChatterPercent { provided: u8 },

    #[error("celebration seconds must be between 1 and 60, got {provided}")]
    InvalidCelebrationSeconds { provided: u32 },
}

const DEFAULT_CHATTER_PERCENT: u8 = 10;
const DEFAULT_CELEBRATION_SECONDS: u32 = 3;

impl CookSettingsDraft {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate the draft into usable settings, applying defaults for
    /// anything left unset.
    ///
    /// # Errors
    ///
    /// Returns `SettingsError` if the chatter percent exceeds 100 or the
    /// celebration window is outside 1..=60 seconds.
    pub fn validate(self) -> Result<CookSettings, SettingsError> {
        let chatter_percent = self.chatter_percent.unwrap_or(DEFAULT_CHATTER_PERCENT);
        if chatter_percent > 100 {
            return Err(SettingsError::InvalidChatterPercent {
                provided: chatter_percent,
            });
        }

        let celebration_seconds = self
            .celebration_seconds
            .unwrap_or(DEFAULT_CELEBRATION_SECONDS);
        if !(1..=60).contains(&celebration_seconds) {
            return Err(SettingsError::InvalidCelebrationSeconds {
                provided: celebration_seconds,
            });
        }

        Ok(CookSettings {
            muted: self.muted.unwrap_or(false),
            chatter_percent,
            celebration_seconds,
        })
    }
}

impl CookSettings {
    /// Whether the completion chime starts out muted. Mute affects only
    /// the chime, never the countdown.
    #[must_use]
    pub fn muted(&self) -> bool {
        self.muted
    }

    /// Chance per tick, in percent, that the status message rotates.
    #[must_use]
    pub fn chatter_percent(&self) -> u8 {
        self.chatter_percent
    }

    /// How long the confetti overlay stays up after completion.
    #[must_use]
    pub fn celebration_seconds(&self) -> u32 {
        self.celebration_seconds
    }
}

impl Default for CookSettings {
    fn default() -> Self {
        Self {
            muted: false,
            chatter_percent: DEFAULT_CHATTER_PERCENT,
            celebration_seconds: DEFAULT_CELEBRATION_SECONDS,
        }
    }
}
