#![forbid(unsafe_code)]

//! Pure domain logic for the Eggsy egg-cooking timer.
//!
//! Everything in here is synchronous and side-effect free: the countdown
//! state machine, the fixed egg catalog, the status-message pool, and the
//! determinism seams (`Clock`, `Dice`) that keep services and tests honest.

pub mod messages;
pub mod model;
pub mod rng;
pub mod time;

pub use time::Clock;
