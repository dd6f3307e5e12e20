//! Business logic behind each subcommand.
//!
//! Handlers in `cli::commands` parse arguments and call into here; the
//! logic structs own the user-facing messages and the journal entries.

pub mod backup;
pub mod check;
pub mod config;
pub mod list;
pub mod log;
pub mod mark;
pub mod notify;
pub mod rekey;
pub mod stats;

use crate::config::Config;
use crate::errors::AppResult;
use crate::journal::JournalPool;
use crate::ledger::{LedgerStore, SharedLedger};

/// Load the configured ledger behind its single-writer handle.
pub fn open_ledger(cfg: &Config) -> AppResult<SharedLedger> {
    let store = LedgerStore::load(cfg.ledger_path(), cfg.key_mode)?;
    Ok(SharedLedger::new(store))
}

/// Open the configured journal; `None` when it cannot be opened.
pub fn open_journal(cfg: &Config) -> Option<JournalPool> {
    JournalPool::open_or_warn(&cfg.journal_path().to_string_lossy())
}
