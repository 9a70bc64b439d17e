use crate::cli::commands::{command_clock, open_pool};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::calculator::duration::entry_duration;
use crate::core::entries::EntryLogic;
use crate::errors::AppResult;
use crate::ui::messages::success;
use crate::utils::clock::Clock;
use crate::utils::formatting::{format_date_time, format_duration};
use crate::utils::time::parse_optional_instant;

/// Handle `in` and `out`.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let now = command_clock().now();

    match cmd {
        Commands::In { at } => {
            let at = parse_optional_instant(at.as_ref(), now.date_naive())?.unwrap_or(now);
            let mut pool = open_pool(cfg)?;
            let entry = EntryLogic::clock_in(&mut pool, at)?;
            success(format!(
                "Clocked in at {} [{}]",
                format_date_time(&entry.clock_in),
                entry.short_id()
            ));
        }
        Commands::Out { at } => {
            let at = parse_optional_instant(at.as_ref(), now.date_naive())?.unwrap_or(now);
            let mut pool = open_pool(cfg)?;
            let entry = EntryLogic::clock_out(&mut pool, at)?;
            success(format!(
                "Clocked out at {} [{}], session {}",
                format_date_time(&at),
                entry.short_id(),
                format_duration(entry_duration(&entry))
            ));
        }
        _ => {}
    }

    Ok(())
}
