use crate::cli::parser::Cli;
use crate::config::Config;
use crate::db::log::{AuditOp, audit};
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{success, warning};

/// Handle the `init` command
///
/// This initializes:
///  - the config directory and file (skipped in test mode)
///  - the SQLite database and its schema
pub fn handle(cli: &Cli) -> AppResult<()> {
    let cfg = Config::init_all(cli.db.clone(), cli.test)?;

    println!("⚙️  Initializing TimeFlow…");
    if !cli.test {
        println!("📄 Config file : {}", Config::config_file().display());
    }
    println!("🗄️  Database    : {}", &cfg.database);

    let pool = DbPool::open(&cfg.database)?;

    if let Err(e) = audit(
        &pool.conn,
        AuditOp::Init,
        "",
        &format!("Database initialized at {}", &cfg.database),
    ) {
        warning(format!("Failed to write internal log: {e}"));
    }

    success("TimeFlow initialization completed!");
    Ok(())
}
