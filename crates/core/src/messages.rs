//! Fixed status lines shown while the egg cooks.
//!
//! The pool never changes at runtime, so everything here is `&'static str`.

/// Shown immediately after the countdown starts.
pub const SOAKING: &str = "Your egg is soaking in the hot tub... 🛁";

/// Shown once the countdown reaches zero.
pub const READY: &str = "Ta-da! Your egg is ready, chef! Crack me open with love! 😘";

/// Rotated in at random while the countdown runs.
pub const COOKING: [&str; 6] = [
    "Ohh, it's getting warm in here! But don't worry, I'll be yummy soon! 😚",
    "Just a little more patience... I promise it'll be worth it! 😘",
    "Almost there! Getting nice and cozy! 🥰",
    "Dancing with my animal friends while I cook! 💃",
    "The bunnies are cheering me on! 🐰✨",
    "Look at those cute chicks running around! 🐥",
];
