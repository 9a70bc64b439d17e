use crate::cli::commands::{command_clock, open_pool};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::entries::EntryLogic;
use crate::errors::AppResult;
use crate::ui::messages::success;
use crate::utils::clock::Clock;
use crate::utils::formatting::format_date_time;
use crate::utils::time::parse_optional_instant;

/// Manual entry: a whole session, an open session, or the clock-out of the
/// running one.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        clock_in,
        clock_out,
    } = cmd
    {
        let today = command_clock().now().date_naive();
        let start = parse_optional_instant(clock_in.as_ref(), today)?;
        let end = parse_optional_instant(clock_out.as_ref(), today)?;

        let mut pool = open_pool(cfg)?;
        let entry = EntryLogic::save_manual(&mut pool, start, end)?;

        let out = entry
            .clock_out
            .as_ref()
            .map_or_else(|| "in progress".to_string(), format_date_time);
        success(format!(
            "Entry {} saved: {} → {}",
            entry.short_id(),
            format_date_time(&entry.clock_in),
            out
        ));
    }

    Ok(())
}
