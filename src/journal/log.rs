use crate::errors::AppResult;
use crate::journal::JournalPool;
use crate::ui::messages::warning;
use chrono::Local;
use rusqlite::Connection;
use rusqlite::params;

/// Write one line into the `log` table.
pub fn jlog(conn: &Connection, operation: &str, target: &str, message: &str) -> AppResult<()> {
    let now = Local::now().to_rfc3339();

    let mut stmt = conn.prepare_cached(
        "INSERT INTO log (date, operation, target, message)
         VALUES (?1, ?2, ?3, ?4)",
    )?;

    stmt.execute(params![now, operation, target, message])?;

    Ok(())
}

/// Journal write that never fails the caller: a missing or broken journal
/// only costs a warning.
pub fn jlog_or_warn(journal: Option<&JournalPool>, operation: &str, target: &str, message: &str) {
    let Some(pool) = journal else {
        return;
    };
    if let Err(e) = jlog(&pool.conn, operation, target, message) {
        warning(format!("Failed to write journal entry: {}", e));
    }
}
