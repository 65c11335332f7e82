use eggsy_core::model::{CookSession, SessionMode};

/// Positions of the decorative walkers, in percent of card width.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParadePositions {
    pub chick: f32,
    pub bunny: f32,
    pub hen: f32,
}

/// Immutable view of the session handed to the presentation layer.
///
/// The UI renders snapshots and nothing else; it never reaches into the
/// session directly.
#[derive(Clone, Debug, PartialEq)]
pub struct CookSnapshot {
    pub mode: SessionMode,
    pub profile_name: Option<String>,
    pub duration_minutes: Option<u32>,
    pub remaining_seconds: u32,
    pub progress_percent: f64,
    pub status_message: &'static str,
    pub celebrating: bool,
    pub muted: bool,
    pub parade: ParadePositions,
}

impl CookSnapshot {
    pub(crate) fn capture(session: &CookSession, muted: bool) -> Self {
        Self {
            mode: session.mode(),
            profile_name: session.profile().map(|p| p.name().to_string()),
            duration_minutes: session.profile().map(|p| p.duration_minutes()),
            remaining_seconds: session.remaining_seconds(),
            progress_percent: session.progress_percent(),
            status_message: session.status_message(),
            celebrating: session.is_celebrating(),
            muted,
            parade: ParadePositions {
                chick: session.parade().chick_percent(),
                bunny: session.parade().bunny_percent(),
                hen: session.parade().hen_percent(),
            },
        }
    }
}
