pub mod add;
pub mod clock;
pub mod config;
pub mod del;
pub mod edit;
pub mod export;
pub mod init;
pub mod list;
pub mod log;
pub mod status;
pub mod summary;

use crate::config::Config;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::utils::clock::{Clock, FixedClock, SystemClock};

pub(crate) fn open_pool(cfg: &Config) -> AppResult<DbPool> {
    DbPool::open(&cfg.database)
}

/// The wall clock is read once per command so every figure printed by that
/// command refers to the same instant.
pub(crate) fn command_clock() -> FixedClock {
    FixedClock(SystemClock.now())
}
