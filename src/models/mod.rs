pub mod break_entry;
pub mod day_summary;
pub mod time_entry;

pub use break_entry::BreakEntry;
pub use day_summary::{DailySummary, WeeklySummary, WorkStatus};
pub use time_entry::{TimeEntry, TimeSpan};
