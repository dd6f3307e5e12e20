//! One handler per subcommand.

pub mod backup;
pub mod check;
pub mod config;
pub mod export;
pub mod init;
pub mod list;
pub mod log;
pub mod mark;
pub mod notify;
pub mod rekey;
pub mod stats;
