mod kitchen_vm;
mod time_fmt;

pub use kitchen_vm::{KitchenIntent, KitchenVm};
pub use time_fmt::format_clock;
