use crate::cli::commands::{command_clock, open_pool};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::export::{ExportLogic, default_file_name};
use crate::db::queries::load_all_entries;
use crate::errors::AppResult;
use crate::utils::clock::Clock;
use crate::utils::date::resolve_day;
use std::path::PathBuf;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        date,
        force,
    } = cmd
    {
        let now = command_clock().now();
        let day = resolve_day(date.as_ref(), now.date_naive())?;
        let path = file
            .as_ref()
            .map(PathBuf::from)
            .unwrap_or_else(|| default_file_name(day, *format));

        let pool = open_pool(cfg)?;
        let entries = load_all_entries(&pool)?;
        ExportLogic::export(&entries, day, now, *format, &path, *force)?;
    }
    Ok(())
}
