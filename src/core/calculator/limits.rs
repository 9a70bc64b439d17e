//! Daily limit arithmetic used by callers of the engine.

pub const MS_PER_HOUR: f64 = 3_600_000.0;

pub fn limit_ms(limit_hours: f64) -> i64 {
    (limit_hours * MS_PER_HOUR).round() as i64
}

/// Time left before reaching the limit. Negative once the limit is exceeded.
pub fn remaining_ms(limit_hours: f64, worked_ms: i64) -> i64 {
    limit_ms(limit_hours) - worked_ms
}

pub fn overtime_ms(limit_hours: f64, worked_ms: i64) -> i64 {
    (worked_ms - limit_ms(limit_hours)).max(0)
}
