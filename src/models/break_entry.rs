use chrono::{DateTime, Local};
use serde::Serialize;

/// Gap between the end of one session and the start of the next one on the
/// same accounting day. Derived, never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BreakEntry {
    pub start: DateTime<Local>,
    pub end: DateTime<Local>,
    pub duration_ms: i64,
}

impl BreakEntry {
    pub fn between(start: DateTime<Local>, end: DateTime<Local>) -> Self {
        Self {
            start,
            end,
            duration_ms: (end - start).num_milliseconds(),
        }
    }
}
