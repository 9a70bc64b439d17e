//! Audit trail of every write, kept in the `log` table.

use crate::errors::AppResult;
use chrono::Local;
use rusqlite::{Connection, params};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuditOp {
    Init,
    ClockIn,
    ClockOut,
    Add,
    Edit,
    Del,
    Reset,
    Config,
}

impl AuditOp {
    pub fn as_str(self) -> &'static str {
        match self {
            AuditOp::Init => "init",
            AuditOp::ClockIn => "clock_in",
            AuditOp::ClockOut => "clock_out",
            AuditOp::Add => "add",
            AuditOp::Edit => "edit",
            AuditOp::Del => "del",
            AuditOp::Reset => "reset",
            AuditOp::Config => "config",
        }
    }
}

/// Append one audit row. `target` is the short id of the entry touched, or
/// empty for operations on the whole collection.
pub fn audit(conn: &Connection, op: AuditOp, target: &str, message: &str) -> AppResult<()> {
    conn.prepare_cached(
        "INSERT INTO log (date, operation, target, message) VALUES (?1, ?2, ?3, ?4)",
    )?
    .execute(params![Local::now().to_rfc3339(), op.as_str(), target, message])?;

    debug!(operation = op.as_str(), target, message, "audit");
    Ok(())
}
