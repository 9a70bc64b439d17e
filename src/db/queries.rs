use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::time_entry::TimeEntry;
use crate::utils::time::parse_stored;
use chrono::Local;
use rusqlite::{Connection, OptionalExtension, Row, params};

struct EntryRow {
    id: String,
    clock_in: String,
    clock_out: Option<String>,
}

fn map_row(row: &Row) -> rusqlite::Result<EntryRow> {
    Ok(EntryRow {
        id: row.get("id")?,
        clock_in: row.get("clock_in")?,
        clock_out: row.get("clock_out")?,
    })
}

impl EntryRow {
    fn into_entry(self) -> AppResult<TimeEntry> {
        let clock_in = parse_stored(&self.clock_in)?;
        let clock_out = self.clock_out.as_deref().map(parse_stored).transpose()?;
        Ok(TimeEntry {
            id: self.id,
            clock_in,
            clock_out,
        })
    }
}

fn collect(rows: impl Iterator<Item = rusqlite::Result<EntryRow>>) -> AppResult<Vec<TimeEntry>> {
    let mut out = Vec::new();
    for r in rows {
        out.push(r?.into_entry()?);
    }
    Ok(out)
}

/// Every entry, in insertion order.
pub fn load_all_entries(pool: &DbPool) -> AppResult<Vec<TimeEntry>> {
    let mut stmt = pool
        .conn
        .prepare("SELECT id, clock_in, clock_out FROM entries ORDER BY seq ASC")?;
    let rows = stmt.query_map([], map_row)?;
    collect(rows)
}

/// The open entry, if any. With several open entries (which the mutation
/// layer prevents) the earliest inserted one is returned.
pub fn find_open_entry(pool: &DbPool) -> AppResult<Option<TimeEntry>> {
    let row = pool
        .conn
        .query_row(
            "SELECT id, clock_in, clock_out FROM entries
             WHERE clock_out IS NULL
             ORDER BY seq ASC
             LIMIT 1",
            [],
            map_row,
        )
        .optional()?;

    row.map(EntryRow::into_entry).transpose()
}

/// Resolve an entry from its full id or a unique prefix of it.
pub fn find_entry_by_prefix(pool: &DbPool, prefix: &str) -> AppResult<TimeEntry> {
    let prefix = prefix.trim();
    if prefix.is_empty() {
        return Err(AppError::EntryNotFound(prefix.to_string()));
    }

    let mut stmt = pool.conn.prepare(
        "SELECT id, clock_in, clock_out FROM entries
         WHERE substr(id, 1, length(?1)) = ?1
         ORDER BY seq ASC
         LIMIT 2",
    )?;
    let rows = stmt.query_map([prefix], map_row)?;
    let mut found = collect(rows)?;

    match found.len() {
        0 => Err(AppError::EntryNotFound(prefix.to_string())),
        1 => Ok(found.remove(0)),
        _ => Err(AppError::AmbiguousEntryId(prefix.to_string())),
    }
}

pub fn insert_entry(conn: &Connection, entry: &TimeEntry) -> AppResult<()> {
    conn.execute(
        "INSERT INTO entries (id, clock_in, clock_out, created_at)
         VALUES (?1, ?2, ?3, ?4)",
        params![
            entry.id,
            entry.clock_in.to_rfc3339(),
            entry.clock_out.map(|t| t.to_rfc3339()),
            Local::now().to_rfc3339(),
        ],
    )?;
    Ok(())
}

/// Rewrite both timestamps of an entry.
pub fn update_entry(conn: &Connection, entry: &TimeEntry) -> AppResult<()> {
    let changed = conn.execute(
        "UPDATE entries SET clock_in = ?1, clock_out = ?2 WHERE id = ?3",
        params![
            entry.clock_in.to_rfc3339(),
            entry.clock_out.map(|t| t.to_rfc3339()),
            entry.id,
        ],
    )?;

    if changed == 0 {
        return Err(AppError::EntryNotFound(entry.id.clone()));
    }
    Ok(())
}

pub fn delete_entry(conn: &Connection, id: &str) -> AppResult<()> {
    let changed = conn.execute("DELETE FROM entries WHERE id = ?1", [id])?;
    if changed == 0 {
        return Err(AppError::EntryNotFound(id.to_string()));
    }
    Ok(())
}

/// Remove every entry; returns how many were deleted.
pub fn delete_all_entries(conn: &Connection) -> AppResult<usize> {
    Ok(conn.execute("DELETE FROM entries", [])?)
}

/// Audit log rows as `(id, date, operation, target, message)`, oldest first.
pub fn load_log(pool: &DbPool) -> AppResult<Vec<(i64, String, String, String, String)>> {
    let mut stmt = pool.conn.prepare_cached(
        "SELECT id, date, operation, IFNULL(target, ''), message FROM log ORDER BY id ASC",
    )?;

    let rows = stmt.query_map([], |row| {
        Ok((
            row.get(0)?,
            row.get(1)?,
            row.get(2)?,
            row.get(3)?,
            row.get(4)?,
        ))
    })?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}
