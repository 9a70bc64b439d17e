use crate::cli::commands::{command_clock, open_pool};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::alert::{TypicalClockOutHeuristic, check_forgotten_clock_out};
use crate::core::calculator::limits::MS_PER_HOUR;
use crate::core::logic::Core;
use crate::db::queries::load_all_entries;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{header, warning};
use crate::utils::clock::{Clock, FixedClock};
use crate::utils::colors::{paint_overtime, paint_remaining};
use crate::utils::formatting::{
    format_date_time, format_duration, format_duration_f64, format_signed_duration, format_time,
    pad_right,
};
use crate::utils::time::parse_instant;

/// Clock card: current state, worked today, remaining and overtime.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Status { no_alert, at } = cmd {
        let mut clock = command_clock();
        if let Some(s) = at {
            let t = parse_instant(s, clock.now().date_naive())
                .ok_or_else(|| AppError::InvalidTime(s.clone()))?;
            clock = FixedClock(t);
        }
        let now = clock.now();

        let pool = open_pool(cfg)?;
        let entries = load_all_entries(&pool)?;
        let status = Core::work_status(&entries, cfg.daily_work_hour_limit, &clock);

        header(format!("Status · {}", format_time(&now)));

        match &status.open_entry {
            Some(e) => println!(
                "🟢 Clocked in since {} [{}]",
                format_date_time(&e.clock_in),
                e.short_id()
            ),
            None => println!("⚪ Clocked out"),
        }

        println!(
            "{} {}",
            pad_right("Worked today", 14),
            format_duration(status.worked_today)
        );
        println!(
            "{} {}",
            pad_right("Break today", 14),
            format_duration(status.break_today)
        );
        println!(
            "{} {}  (limit {})",
            pad_right("Remaining", 14),
            paint_remaining(status.remaining, &format_signed_duration(status.remaining)),
            format_duration_f64(cfg.daily_work_hour_limit * MS_PER_HOUR)
        );
        println!(
            "{} {}",
            pad_right("Overtime", 14),
            paint_overtime(status.overtime, &format_duration(status.overtime))
        );

        if !*no_alert && status.open_entry.is_some() {
            let heuristic = TypicalClockOutHeuristic::new(cfg.alert_margin_minutes);
            match check_forgotten_clock_out(&entries, cfg, now, &heuristic) {
                Ok(true) => warning(
                    "Did you forget to clock out? You have been clocked in for a while. Run `timeflow out` to end the session.",
                ),
                Ok(false) => {}
                Err(e) => warning(format!("Could not check if you forgot to clock out: {e}")),
            }
        }
    }
    Ok(())
}
