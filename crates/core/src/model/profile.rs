use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use thiserror::Error;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ProfileError {
    #[error("profile name cannot be empty")]
    EmptyName,

    #[error("cooking duration must be a positive number of minutes")]
    ZeroDuration,
}

//
// ─── PROFILE ID ────────────────────────────────────────────────────────────────
//

/// Identifies an egg profile by its position in the fixed catalog.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ProfileId(usize);

impl ProfileId {
    /// Creates a new `ProfileId`
    #[must_use]
    pub fn new(id: usize) -> Self {
        Self(id)
    }

    /// Returns the underlying catalog index
    #[must_use]
    pub fn value(&self) -> usize {
        self.0
    }
}

impl fmt::Debug for ProfileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ProfileId({})", self.0)
    }
}

impl fmt::Display for ProfileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Error type for parsing a `ProfileId` from string
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseProfileIdError;

impl fmt::Display for ParseProfileIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "failed to parse ProfileId from string")
    }
}

impl std::error::Error for ParseProfileIdError {}

impl FromStr for ProfileId {
    type Err = ParseProfileIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<usize>()
            .map(ProfileId::new)
            .map_err(|_| ParseProfileIdError)
    }
}

//
// ─── EGG PROFILE ───────────────────────────────────────────────────────────────
//

/// One egg-cooking preset: a name, a duration, and a one-line pitch.
///
/// Profiles are immutable; the running catalog is a fixed set of three.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EggProfile {
    name: String,
    duration_minutes: u32,
    description: String,
}

impl EggProfile {
    /// Build a profile, validating its fields.
    ///
    /// # Errors
    ///
    /// Returns `ProfileError::EmptyName` if the name is blank and
    /// `ProfileError::ZeroDuration` if the duration is zero minutes.
    pub fn new(
        name: &str,
        duration_minutes: u32,
        description: &str,
    ) -> Result<Self, ProfileError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ProfileError::EmptyName);
        }
        if duration_minutes == 0 {
            return Err(ProfileError::ZeroDuration);
        }

        Ok(Self {
            name: name.to_string(),
            duration_minutes,
            description: description.trim().to_string(),
        })
    }

    /// The fixed catalog of egg styles, in menu order.
    #[must_use]
    pub fn catalog() -> &'static [EggProfile] {
        static CATALOG: OnceLock<Vec<EggProfile>> = OnceLock::new();
        CATALOG.get_or_init(|| {
            [
                ("Soft & runny", 6, "Silky yolk, perfect for dipping!"),
                ("Medium", 8, "Just the right balance of soft & firm!"),
                ("Hard-boiled", 12, "Firm, protein-packed, and ready to go!"),
            ]
            .into_iter()
            .map(|(name, minutes, description)| {
                EggProfile::new(name, minutes, description)
                    .expect("catalog entries should be valid")
            })
            .collect()
        })
    }

    /// Looks up a catalog entry; `None` for an out-of-range id.
    #[must_use]
    pub fn get(id: ProfileId) -> Option<&'static EggProfile> {
        Self::catalog().get(id.value())
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn duration_minutes(&self) -> u32 {
        self.duration_minutes
    }

    #[must_use]
    pub fn duration_seconds(&self) -> u32 {
        self.duration_minutes * 60
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
