use crate::config::{Config, validate_limit};
use crate::errors::{AppError, AppResult};
use std::path::Path;
use std::process::Command;

pub struct ConfigLogic;

impl ConfigLogic {
    pub fn print(cfg: &Config) -> AppResult<String> {
        Ok(serde_yaml::to_string(cfg)?)
    }

    /// Open the config file in `editor`, `$EDITOR`, `$VISUAL` or a platform
    /// default, in that order.
    pub fn edit(path: &Path, editor: &Option<String>) -> AppResult<()> {
        let ed = editor
            .clone()
            .or_else(|| std::env::var("EDITOR").ok())
            .or_else(|| std::env::var("VISUAL").ok())
            .unwrap_or_else(|| {
                if cfg!(target_os = "windows") {
                    "notepad".into()
                } else {
                    "nano".into()
                }
            });

        let status = Command::new(&ed)
            .arg(path)
            .status()
            .map_err(|e| AppError::Config(format!("cannot start editor '{ed}': {e}")))?;

        if !status.success() {
            return Err(AppError::Config(format!("editor '{ed}' exited with {status}")));
        }
        Ok(())
    }

    /// Put every user setting back to its default and persist it to `path`.
    /// The database location and the log level are kept.
    pub fn reset_settings(cfg: &mut Config, path: &Path) -> AppResult<()> {
        *cfg = Config {
            database: cfg.database.clone(),
            log_level: cfg.log_level.clone(),
            ..Config::default()
        };
        cfg.save_to(path)
    }

    /// Change the daily work-hour limit and persist it to `path`.
    pub fn set_limit(cfg: &mut Config, hours: f64, path: &Path) -> AppResult<()> {
        validate_limit(hours)?;
        cfg.daily_work_hour_limit = hours;
        cfg.save_to(path)
    }
}
