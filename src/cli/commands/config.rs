use crate::cli::commands::open_pool;
use crate::cli::parser::{Cli, Commands};
use crate::config::{Config, validate_limit};
use crate::core::config::ConfigLogic;
use crate::db::log::{AuditOp, audit};
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};

/// Handle the `config` subcommand
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        edit_config,
        editor,
        set_limit,
    } = &cli.command
    {
        let path = Config::config_file();
        let mut cfg = cfg.clone();

        if let Some(hours) = set_limit {
            if cli.test {
                validate_limit(*hours)?;
                cfg.daily_work_hour_limit = *hours;
                info("Test mode: configuration file not updated.");
            } else {
                ConfigLogic::set_limit(&mut cfg, *hours, &path)?;
                let logged = open_pool(&cfg).and_then(|pool| {
                    audit(
                        &pool.conn,
                        AuditOp::Config,
                        "",
                        &format!("daily_work_hour_limit set to {hours}"),
                    )
                });
                if let Err(e) = logged {
                    warning(format!("Failed to write internal log: {e}"));
                }
            }
            success(format!("Daily work-hour limit set to {hours} h."));
        }

        if *print_config {
            println!("📄 Current configuration:\n");
            println!("{}", ConfigLogic::print(&cfg)?);
        }

        if *edit_config {
            if !path.exists() {
                cfg.save_to(&path)?;
            }
            ConfigLogic::edit(&path, editor)?;
            success(format!("Configuration file edited: {}", path.display()));
        }
    }

    Ok(())
}
