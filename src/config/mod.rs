use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_database")]
    pub database: String,
    #[serde(default = "default_daily_limit")]
    pub daily_work_hour_limit: f64,
    #[serde(default = "default_alert_grace")]
    pub alert_grace_minutes: i64,
    #[serde(default = "default_alert_margin")]
    pub alert_margin_minutes: i64,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_database() -> String {
    Config::database_file().to_string_lossy().to_string()
}
fn default_daily_limit() -> f64 {
    8.0
}
fn default_alert_grace() -> i64 {
    15
}
fn default_alert_margin() -> i64 {
    60
}
fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: default_database(),
            daily_work_hour_limit: default_daily_limit(),
            alert_grace_minutes: default_alert_grace(),
            alert_margin_minutes: default_alert_margin(),
            log_level: default_log_level(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        dirs::config_dir()
            .or_else(dirs::home_dir)
            .unwrap_or_else(|| PathBuf::from("."))
            .join("timeflow")
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("timeflow.yaml")
    }

    /// Return the full path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("timeflow.sqlite")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        let cfg: Config = serde_yaml::from_str(&content)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn save_to(&self, path: &Path) -> AppResult<()> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }
        fs::write(path, serde_yaml::to_string(self)?)?;
        Ok(())
    }

    pub fn validate(&self) -> AppResult<()> {
        validate_limit(self.daily_work_hour_limit)?;
        if self.alert_grace_minutes < 0 || self.alert_margin_minutes < 0 {
            return Err(AppError::Config(
                "alert_grace_minutes and alert_margin_minutes must not be negative".into(),
            ));
        }
        Ok(())
    }

    /// `--db` value: absolute paths are kept, bare names live in the config dir.
    pub fn resolve_database(name: &str) -> String {
        let p = Path::new(name);
        if p.is_absolute() {
            p.to_string_lossy().to_string()
        } else {
            Self::config_dir().join(p).to_string_lossy().to_string()
        }
    }

    /// Initialize configuration file and database location.
    /// In test mode the config file is left untouched.
    pub fn init_all(custom_db: Option<String>, is_test: bool) -> AppResult<Self> {
        let mut cfg = if is_test {
            Self::default()
        } else {
            Self::load()?
        };

        if let Some(name) = custom_db {
            cfg.database = Self::resolve_database(&name);
        }

        if !is_test {
            cfg.save_to(&Self::config_file())?;
        }

        if let Some(parent) = Path::new(&cfg.database).parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        Ok(cfg)
    }
}

/// The daily work-hour limit must be a positive, finite number of hours.
pub fn validate_limit(hours: f64) -> AppResult<()> {
    if hours.is_finite() && hours > 0.0 {
        Ok(())
    } else {
        Err(AppError::Config(format!(
            "daily_work_hour_limit must be a positive number of hours, got {hours}"
        )))
    }
}
