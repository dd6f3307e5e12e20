//! Operations journal kept in SQLite alongside the ledger.

pub mod log;
pub mod migrate;
pub mod pool;

pub use log::{jlog, jlog_or_warn};
pub use pool::JournalPool;
