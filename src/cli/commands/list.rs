use crate::cli::commands::{command_clock, open_pool};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::calculator::duration::entry_duration;
use crate::core::logic::Core;
use crate::db::queries::load_all_entries;
use crate::errors::AppResult;
use crate::models::time_entry::TimeEntry;
use crate::ui::messages::header;
use crate::utils::clock::Clock;
use crate::utils::colors::{dim_placeholder, paint_in_out};
use crate::utils::date::resolve_day;
use crate::utils::formatting::{format_date_time, format_day, format_duration, pad_right};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { date } = cmd {
        let today = command_clock().now().date_naive();
        let day = resolve_day(date.as_ref(), today)?;

        let pool = open_pool(cfg)?;
        let entries = load_all_entries(&pool)?;
        let history = Core::history(&entries, day);

        header(format!("History · {}", format_day(&day)));

        if history.is_empty() {
            println!("No entries for {}", day);
            return Ok(());
        }

        print_entries(&history);
    }
    Ok(())
}

pub(crate) fn print_entries(entries: &[TimeEntry]) {
    println!(
        "{} {} {} {}",
        pad_right("ID", 9),
        pad_right("CLOCK IN", 24),
        pad_right("CLOCK OUT", 24),
        "DURATION"
    );

    for e in entries {
        let clock_in = pad_right(&format_date_time(&e.clock_in), 24);
        let clock_out = pad_right(
            &e.clock_out
                .as_ref()
                .map_or_else(|| "In progress".to_string(), format_date_time),
            24,
        );

        println!(
            "{} {} {} {}",
            pad_right(e.short_id(), 9),
            paint_in_out(&clock_in, true),
            paint_in_out(&clock_out, false),
            dim_placeholder(&format_duration(entry_duration(e)))
        );
    }
}
