use crate::cli::commands::{command_clock, open_pool};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::calculator::duration::entry_duration;
use crate::core::entries::EntryLogic;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;
use crate::utils::clock::Clock;
use crate::utils::formatting::format_duration;
use crate::utils::time::parse_instant;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Edit {
        id,
        clock_in,
        clock_out,
    } = cmd
    {
        let today = command_clock().now().date_naive();
        let start =
            parse_instant(clock_in, today).ok_or_else(|| AppError::InvalidTime(clock_in.clone()))?;
        let end = parse_instant(clock_out, today)
            .ok_or_else(|| AppError::InvalidTime(clock_out.clone()))?;

        let mut pool = open_pool(cfg)?;
        let entry = EntryLogic::update(&mut pool, id, start, end)?;

        success(format!(
            "✏️ Entry {} updated ({}).",
            entry.short_id(),
            format_duration(entry_duration(&entry))
        ));
    }

    Ok(())
}
