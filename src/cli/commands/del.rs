use crate::cli::commands::open_pool;
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::config::ConfigLogic;
use crate::core::entries::EntryLogic;
use crate::db::log::{AuditOp, audit};
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};
use crate::ui::prompt::confirm;

/// Delete one entry by id prefix, or with `--all` every entry plus the
/// settings. Asks first unless `--yes` is given.
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    let Commands::Del { id, all, yes } = &cli.command else {
        return Ok(());
    };

    let single = id.as_deref().filter(|_| !*all);

    if !*yes {
        match single {
            Some(id) => warning(format!("Entry {id} will be deleted permanently.")),
            None => warning("ALL entries will be deleted permanently and the settings reset."),
        }
        if !confirm("Continue?")? {
            info("Operation cancelled.");
            return Ok(());
        }
    }

    let mut pool = open_pool(cfg)?;

    match single {
        Some(id) => {
            let entry = EntryLogic::delete(&mut pool, id)?;
            success(format!("Entry {} has been deleted.", entry.short_id()));
        }
        None => {
            let removed = EntryLogic::reset(&mut pool)?;
            success(format!("All entries have been deleted ({removed})."));

            if cli.test {
                info("Test mode: configuration file not updated.");
            } else {
                let mut cfg = cfg.clone();
                ConfigLogic::reset_settings(&mut cfg, &Config::config_file())?;
                audit(&pool.conn, AuditOp::Config, "", "settings restored to defaults")?;
            }
            success(format!(
                "Settings restored to defaults (daily limit {} h).",
                Config::default().daily_work_hour_limit
            ));
        }
    }

    Ok(())
}
