//! Attendance ledger: the CSV-backed table and the duplicate guard.

pub mod artifact;
pub mod rekey;
pub mod schema;
pub mod shared;
pub mod store;

pub use artifact::ArtifactStore;
pub use rekey::{RekeyReport, load_mapping};
pub use shared::SharedLedger;
pub use store::{DuplicateKey, LedgerStore};
