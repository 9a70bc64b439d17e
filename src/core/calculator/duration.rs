use crate::models::time_entry::TimeSpan;
use tracing::debug;

/// Completed duration of a session in milliseconds.
///
/// An open session yields 0. The result is not clamped: a span whose
/// clock-out precedes its clock-in gives a negative value.
pub fn entry_duration(span: impl Into<TimeSpan>) -> i64 {
    let span = span.into();
    let Some(out) = span.clock_out else {
        return 0;
    };

    let ms = (out - span.clock_in).num_milliseconds();
    if ms < 0 {
        debug!(clock_in = %span.clock_in, clock_out = %out, "negative entry duration");
    }
    ms
}
