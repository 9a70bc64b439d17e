//! Every write to the entry collection goes through here.
//!
//! The engine accepts any data it is given; this layer is what keeps the
//! stored collection sane: at most one open entry, clock-out strictly after
//! clock-in.

use crate::db::log::{AuditOp, audit};
use crate::db::pool::DbPool;
use crate::db::queries::{
    delete_all_entries, delete_entry, find_entry_by_prefix, find_open_entry, insert_entry,
    update_entry,
};
use crate::errors::{AppError, AppResult};
use crate::models::time_entry::TimeEntry;
use chrono::{DateTime, Local};

pub struct EntryLogic;

fn ensure_ordered(clock_in: DateTime<Local>, clock_out: DateTime<Local>) -> AppResult<()> {
    if clock_out > clock_in {
        Ok(())
    } else {
        Err(AppError::ClockOutBeforeClockIn {
            clock_in: clock_in.to_rfc3339(),
            clock_out: clock_out.to_rfc3339(),
        })
    }
}

impl EntryLogic {
    /// Start a new session at `at`.
    pub fn clock_in(pool: &mut DbPool, at: DateTime<Local>) -> AppResult<TimeEntry> {
        if let Some(open) = find_open_entry(pool)? {
            return Err(AppError::AlreadyClockedIn(open.clock_in.to_rfc3339()));
        }

        let entry = TimeEntry::new(at, None);
        insert_entry(&pool.conn, &entry)?;
        audit(
            &pool.conn,
            AuditOp::ClockIn,
            entry.short_id(),
            &format!("Clocked in at {}", at.to_rfc3339()),
        )?;

        Ok(entry)
    }

    /// Close the open session at `at`.
    pub fn clock_out(pool: &mut DbPool, at: DateTime<Local>) -> AppResult<TimeEntry> {
        let mut entry = find_open_entry(pool)?.ok_or(AppError::NotClockedIn)?;
        ensure_ordered(entry.clock_in, at)?;

        entry.clock_out = Some(at);
        update_entry(&pool.conn, &entry)?;
        audit(
            &pool.conn,
            AuditOp::ClockOut,
            entry.short_id(),
            &format!("Clocked out at {}", at.to_rfc3339()),
        )?;

        Ok(entry)
    }

    /// Manual entry.
    ///
    /// - clocked in and `clock_out` given → closes the open session at `clock_out`
    /// - not clocked in and `clock_in` given → new session, closed when
    ///   `clock_out` is given, open otherwise
    pub fn save_manual(
        pool: &mut DbPool,
        clock_in: Option<DateTime<Local>>,
        clock_out: Option<DateTime<Local>>,
    ) -> AppResult<TimeEntry> {
        let open = find_open_entry(pool)?;

        match (open, clock_in, clock_out) {
            (Some(_), _, Some(out)) => Self::clock_out(pool, out),
            (Some(open), _, None) => Err(AppError::AlreadyClockedIn(open.clock_in.to_rfc3339())),
            (None, Some(start), end) => {
                if let Some(end) = end {
                    ensure_ordered(start, end)?;
                }

                let entry = TimeEntry::new(start, end);
                insert_entry(&pool.conn, &entry)?;
                audit(
                    &pool.conn,
                    AuditOp::Add,
                    entry.short_id(),
                    &format!(
                        "Manual entry {} → {}",
                        start.to_rfc3339(),
                        end.map_or_else(|| "open".to_string(), |t| t.to_rfc3339())
                    ),
                )?;

                Ok(entry)
            }
            (None, None, _) => Err(AppError::NothingToDo(
                "a clock-in time is required when not clocked in".into(),
            )),
        }
    }

    /// Rewrite both timestamps of a closed entry.
    pub fn update(
        pool: &mut DbPool,
        id: &str,
        clock_in: DateTime<Local>,
        clock_out: DateTime<Local>,
    ) -> AppResult<TimeEntry> {
        let mut entry = find_entry_by_prefix(pool, id)?;
        if entry.is_open() {
            return Err(AppError::OpenEntryNotEditable(entry.short_id().to_string()));
        }
        ensure_ordered(clock_in, clock_out)?;

        entry.clock_in = clock_in;
        entry.clock_out = Some(clock_out);
        update_entry(&pool.conn, &entry)?;
        audit(
            &pool.conn,
            AuditOp::Edit,
            entry.short_id(),
            &format!(
                "Entry set to {} → {}",
                clock_in.to_rfc3339(),
                clock_out.to_rfc3339()
            ),
        )?;

        Ok(entry)
    }

    pub fn delete(pool: &mut DbPool, id: &str) -> AppResult<TimeEntry> {
        let entry = find_entry_by_prefix(pool, id)?;
        delete_entry(&pool.conn, &entry.id)?;
        audit(&pool.conn, AuditOp::Del, entry.short_id(), "Entry deleted")?;
        Ok(entry)
    }

    /// Delete every entry; returns how many were removed.
    pub fn reset(pool: &mut DbPool) -> AppResult<usize> {
        let removed = delete_all_entries(&pool.conn)?;
        audit(
            &pool.conn,
            AuditOp::Reset,
            "",
            &format!("All entries deleted ({removed})"),
        )?;
        Ok(removed)
    }
}
