use chrono::{DateTime, Local};
use serde::Serialize;
use uuid::Uuid;

/// One work session. `clock_out == None` means the session is still open.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimeEntry {
    pub id: String,
    pub clock_in: DateTime<Local>,
    pub clock_out: Option<DateTime<Local>>,
}

impl TimeEntry {
    /// Entry with a fresh UUID, as created on clock-in or manual entry.
    pub fn new(clock_in: DateTime<Local>, clock_out: Option<DateTime<Local>>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            clock_in,
            clock_out,
        }
    }

    pub fn is_open(&self) -> bool {
        self.clock_out.is_none()
    }

    /// First 8 characters of the id, enough to address an entry from the CLI.
    pub fn short_id(&self) -> &str {
        self.id.get(..8).unwrap_or(&self.id)
    }
}

/// The timestamp pair every duration function works on.
///
/// Full entries convert into it; a pair of values being edited can be built
/// directly without an id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TimeSpan {
    pub clock_in: DateTime<Local>,
    pub clock_out: Option<DateTime<Local>>,
}

impl TimeSpan {
    pub fn new(clock_in: DateTime<Local>, clock_out: Option<DateTime<Local>>) -> Self {
        Self {
            clock_in,
            clock_out,
        }
    }
}

impl From<&TimeEntry> for TimeSpan {
    fn from(entry: &TimeEntry) -> Self {
        Self {
            clock_in: entry.clock_in,
            clock_out: entry.clock_out,
        }
    }
}

impl From<TimeEntry> for TimeSpan {
    fn from(entry: TimeEntry) -> Self {
        Self::from(&entry)
    }
}
