pub mod clock;
pub mod colors;
pub mod date;
pub mod formatting;
pub mod logging;
pub mod time;

pub use formatting::format_duration;
