//! Schema migrations, tracked through SQLite's `user_version` pragma.

use crate::errors::{AppError, AppResult};
use rusqlite::Connection;
use tracing::info;

/// Ordered schema steps. Step `n` upgrades `user_version` from `n` to `n + 1`.
const MIGRATIONS: &[(&str, &str)] = &[
    (
        "create_entries",
        r#"
        CREATE TABLE IF NOT EXISTS entries (
            seq         INTEGER PRIMARY KEY AUTOINCREMENT,
            id          TEXT NOT NULL UNIQUE,
            clock_in    TEXT NOT NULL,
            clock_out   TEXT NULL,
            created_at  TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_entries_clock_in ON entries(clock_in);
        "#,
    ),
    (
        "create_log",
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    ),
];

fn schema_version(conn: &Connection) -> rusqlite::Result<usize> {
    conn.query_row("PRAGMA user_version", [], |row| row.get::<_, i64>(0))
        .map(|v| v.max(0) as usize)
}

/// Apply every migration newer than the database's schema version.
pub fn run_pending_migrations(conn: &Connection) -> AppResult<()> {
    let current = schema_version(conn)?;

    if current > MIGRATIONS.len() {
        return Err(AppError::Migration(format!(
            "database schema version {current} is newer than this program ({})",
            MIGRATIONS.len()
        )));
    }

    for (idx, (name, sql)) in MIGRATIONS.iter().enumerate().skip(current) {
        conn.execute_batch(sql)
            .map_err(|e| AppError::Migration(format!("{name}: {e}")))?;
        conn.execute_batch(&format!("PRAGMA user_version = {}", idx + 1))?;
        info!(migration = name, version = idx + 1, "migration applied");
    }

    Ok(())
}
