mod common;
use common::{at, closed, open};

use chrono::Duration;
use std::cell::RefCell;
use timeflow::config::Config;
use timeflow::core::alert::{
    ClockOutAlertInput, ClockOutPredicate, TypicalClockOutHeuristic, build_alert_input,
    check_forgotten_clock_out, needs_alert_check,
};
use timeflow::errors::{AppError, AppResult};

/// Records what it was asked and answers with a fixed value.
struct Recorder {
    answer: bool,
    seen: RefCell<Vec<ClockOutAlertInput>>,
}

impl Recorder {
    fn new(answer: bool) -> Self {
        Self {
            answer,
            seen: RefCell::new(Vec::new()),
        }
    }
}

impl ClockOutPredicate for Recorder {
    fn forgot_to_clock_out(&self, input: &ClockOutAlertInput) -> AppResult<bool> {
        self.seen.borrow_mut().push(input.clone());
        Ok(self.answer)
    }
}

struct Failing;

impl ClockOutPredicate for Failing {
    fn forgot_to_clock_out(&self, _input: &ClockOutAlertInput) -> AppResult<bool> {
        Err(AppError::Alert("service unavailable".into()))
    }
}

fn cfg() -> Config {
    Config {
        daily_work_hour_limit: 8.0,
        alert_grace_minutes: 15,
        ..Config::default()
    }
}

#[test]
fn test_precheck_threshold() {
    let entries = vec![open("o", at(15, 9, 0))];
    let grace = Duration::minutes(15);

    assert!(needs_alert_check(&entries, 8.0, grace, at(15, 17, 15)).is_none());
    assert_eq!(
        needs_alert_check(&entries, 8.0, grace, at(15, 17, 16)).map(|e| e.id.as_str()),
        Some("o")
    );

    let none_open = vec![closed("c", at(15, 9, 0), at(15, 12, 0))];
    assert!(needs_alert_check(&none_open, 8.0, grace, at(16, 9, 0)).is_none());
}

#[test]
fn test_predicate_not_consulted_below_threshold() {
    let entries = vec![open("o", at(15, 9, 0))];
    let predicate = Recorder::new(true);

    let alert = check_forgotten_clock_out(&entries, &cfg(), at(15, 12, 0), &predicate).unwrap();

    assert!(!alert);
    assert!(predicate.seen.borrow().is_empty());
}

#[test]
fn test_predicate_receives_history_without_open_entry() {
    let entries = vec![
        closed("c1", at(11, 9, 0), at(11, 17, 0)),
        closed("c2", at(12, 9, 0), at(12, 17, 30)),
        open("o", at(15, 8, 0)),
    ];
    let predicate = Recorder::new(true);
    let now = at(15, 19, 0);

    assert!(check_forgotten_clock_out(&entries, &cfg(), now, &predicate).unwrap());

    let seen = predicate.seen.borrow();
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0].current_time, now.to_rfc3339());
    assert_eq!(seen[0].daily_work_hour_limit, 8.0);
    assert!(seen[0].historical_data.contains("c1"));
    assert!(seen[0].historical_data.contains("c2"));
    assert!(!seen[0].historical_data.contains("\"o\""));
}

#[test]
fn test_alert_input_serializes_camel_case() {
    let entries = vec![
        closed("c1", at(11, 9, 0), at(11, 17, 0)),
        open("o", at(15, 8, 0)),
    ];
    let input = build_alert_input(&entries, &entries[1], 7.5, at(15, 18, 0)).unwrap();
    let json = serde_json::to_value(&input).unwrap();

    assert!(json.get("historicalData").is_some());
    assert!(json.get("currentTime").is_some());
    assert_eq!(json["dailyWorkHourLimit"], 7.5);
}

#[test]
fn test_predicate_errors_are_propagated() {
    let entries = vec![open("o", at(15, 8, 0))];
    let err = check_forgotten_clock_out(&entries, &cfg(), at(15, 20, 0), &Failing).unwrap_err();
    assert!(matches!(err, AppError::Alert(_)));
}

#[test]
fn test_typical_clock_out_heuristic() {
    let heuristic = TypicalClockOutHeuristic::new(60);
    let history = vec![
        closed("c1", at(11, 9, 0), at(11, 17, 0)),
        closed("c2", at(12, 9, 0), at(12, 17, 30)),
        open("o", at(15, 8, 0)),
    ];

    let ask = |now| {
        let input = build_alert_input(&history, &history[2], 8.0, now).unwrap();
        heuristic.forgot_to_clock_out(&input).unwrap()
    };

    // latest usual clock-out is 17:30, margin one hour
    assert!(!ask(at(15, 18, 0)));
    assert!(ask(at(15, 18, 30)));
    assert!(ask(at(15, 21, 0)));
}

#[test]
fn test_heuristic_without_history_never_fires() {
    let heuristic = TypicalClockOutHeuristic::new(0);
    let entries = vec![open("o", at(15, 8, 0))];
    let input = build_alert_input(&entries, &entries[0], 8.0, at(15, 23, 0)).unwrap();

    assert!(!heuristic.forgot_to_clock_out(&input).unwrap());
}
