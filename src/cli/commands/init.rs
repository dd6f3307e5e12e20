use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::journal::{JournalPool, jlog_or_warn};
use crate::ledger::LedgerStore;
use crate::ui::messages::{info, success};
use std::fs;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory and file (skipped in test mode)
///  - an empty ledger with the canonical header, if none exists
///  - the images directory
///  - the journal schema and its pending migrations
pub fn handle(cli: &Cli) -> AppResult<()> {
    let cfg = Config::init_all(cli.ledger.clone(), cli.test)?;

    let ledger_path = cfg.ledger_path();
    let journal_path = cfg.journal_path();

    println!("⚙️  Initializing rAttendance…");
    println!("📄 Config file : {}", Config::config_file().display());
    println!("🗒️  Ledger      : {}", ledger_path.display());
    println!("🗄️  Journal     : {}", journal_path.display());

    let store = LedgerStore::load(&ledger_path, cfg.key_mode)?;
    if store.create_if_missing()? {
        success(format!("Ledger created at {}", ledger_path.display()));
    } else {
        info(format!("Ledger already present ({} rows)", store.len()));
    }

    fs::create_dir_all(cfg.images_path())?;

    let journal = JournalPool::open(&journal_path.to_string_lossy())?;
    jlog_or_warn(
        Some(&journal),
        "init",
        &ledger_path.to_string_lossy(),
        "Ledger and journal initialized",
    );

    success("rAttendance initialization completed!");
    Ok(())
}
