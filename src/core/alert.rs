//! Forgotten clock-out detection.
//!
//! A cheap local pre-check decides whether the open session is long enough to
//! be suspicious; only then is the (possibly remote, possibly slow) predicate
//! consulted. The predicate is opaque to this crate.

use crate::config::Config;
use crate::core::calculator::limits::limit_ms;
use crate::errors::{AppError, AppResult};
use crate::models::time_entry::TimeEntry;
use chrono::{DateTime, Duration, Local, NaiveTime, Timelike};
use serde::Serialize;
use tracing::debug;

/// What the predicate gets to see.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClockOutAlertInput {
    /// JSON array of the closed entries, excluding the open one.
    pub historical_data: String,
    /// RFC 3339
    pub current_time: String,
    pub daily_work_hour_limit: f64,
}

pub trait ClockOutPredicate {
    fn forgot_to_clock_out(&self, input: &ClockOutAlertInput) -> AppResult<bool>;
}

/// The open entry, when it has run longer than the daily limit plus `grace`.
pub fn needs_alert_check(
    entries: &[TimeEntry],
    limit_hours: f64,
    grace: Duration,
    now: DateTime<Local>,
) -> Option<&TimeEntry> {
    let open = entries.iter().find(|e| e.is_open())?;
    let worked = (now - open.clock_in).num_milliseconds();
    let threshold = limit_ms(limit_hours) + grace.num_milliseconds();

    if worked > threshold { Some(open) } else { None }
}

pub fn build_alert_input(
    entries: &[TimeEntry],
    open: &TimeEntry,
    limit_hours: f64,
    now: DateTime<Local>,
) -> AppResult<ClockOutAlertInput> {
    let history: Vec<&TimeEntry> = entries
        .iter()
        .filter(|e| e.id != open.id && !e.is_open())
        .collect();

    Ok(ClockOutAlertInput {
        historical_data: serde_json::to_string(&history)?,
        current_time: now.to_rfc3339(),
        daily_work_hour_limit: limit_hours,
    })
}

/// `Ok(true)` when the predicate thinks the user forgot to clock out.
/// Sessions below the pre-check threshold never reach the predicate.
pub fn check_forgotten_clock_out(
    entries: &[TimeEntry],
    cfg: &Config,
    now: DateTime<Local>,
    predicate: &impl ClockOutPredicate,
) -> AppResult<bool> {
    let grace = Duration::minutes(cfg.alert_grace_minutes);
    let Some(open) = needs_alert_check(entries, cfg.daily_work_hour_limit, grace, now) else {
        return Ok(false);
    };

    debug!(entry = open.short_id(), "open session past the daily limit, asking predicate");
    let input = build_alert_input(entries, open, cfg.daily_work_hour_limit, now)?;
    predicate.forgot_to_clock_out(&input)
}

/// Offline stand-in for the remote heuristic. Conservative: it only fires
/// when history exists and the current time of day is at least `margin`
/// past the latest clock-out time of day ever recorded.
pub struct TypicalClockOutHeuristic {
    pub margin: Duration,
}

impl TypicalClockOutHeuristic {
    pub fn new(margin_minutes: i64) -> Self {
        Self {
            margin: Duration::minutes(margin_minutes),
        }
    }
}

fn seconds_of_day(t: NaiveTime) -> i64 {
    i64::from(t.num_seconds_from_midnight())
}

impl ClockOutPredicate for TypicalClockOutHeuristic {
    fn forgot_to_clock_out(&self, input: &ClockOutAlertInput) -> AppResult<bool> {
        #[derive(serde::Deserialize)]
        struct Past {
            clock_out: Option<DateTime<Local>>,
        }

        let history: Vec<Past> = serde_json::from_str(&input.historical_data)?;
        let now = DateTime::parse_from_rfc3339(&input.current_time)
            .map_err(|e| AppError::Alert(format!("bad current time: {e}")))?
            .with_timezone(&Local);

        let Some(latest) = history
            .iter()
            .filter_map(|p| p.clock_out)
            .map(|t| seconds_of_day(t.time()))
            .max()
        else {
            return Ok(false);
        };

        Ok(seconds_of_day(now.time()) >= latest + self.margin.num_seconds())
    }
}
