//! SQLite connection wrapper (lightweight for CLI usage).

use crate::errors::AppResult;
use crate::journal::migrate::run_pending_migrations;
use crate::ui::messages::warning;
use rusqlite::Connection;
use std::fs;
use std::path::Path;

pub struct JournalPool {
    pub conn: Connection,
}

impl JournalPool {
    /// Open the journal at `path`, creating its directory and schema if needed.
    pub fn open(path: &str) -> AppResult<Self> {
        let p = Path::new(path);
        if let Some(dir) = p.parent()
            && !dir.as_os_str().is_empty()
        {
            fs::create_dir_all(dir)?;
        }

        let conn = Connection::open(p)?;
        run_pending_migrations(&conn)?;
        Ok(Self { conn })
    }

    /// Open the journal, or warn and carry on without one.
    pub fn open_or_warn(path: &str) -> Option<Self> {
        match Self::open(path) {
            Ok(pool) => Some(pool),
            Err(e) => {
                warning(format!("Journal unavailable ({}): {}", path, e));
                None
            }
        }
    }

    /// In-memory journal, used by tests.
    pub fn in_memory() -> AppResult<Self> {
        let conn = Connection::open_in_memory()?;
        run_pending_migrations(&conn)?;
        Ok(Self { conn })
    }
}
