#![forbid(unsafe_code)]

//! Orchestration layer for the Eggsy timer: owns the session, its random
//! source and clock, and projects snapshots for the presentation layer.

pub mod cook_service;
pub mod dice;
pub mod snapshot;

pub use eggsy_core::Clock;

pub use cook_service::CookTimerService;
pub use dice::ThreadDice;
pub use snapshot::{CookSnapshot, ParadePositions};
