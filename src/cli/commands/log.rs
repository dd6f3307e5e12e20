use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::log::LogLogic;
use crate::errors::AppResult;
use crate::journal::JournalPool;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if matches!(cmd, Commands::Log { print: true }) {
        let pool = JournalPool::open(&cfg.journal_path().to_string_lossy())?;
        LogLogic::print_log(&pool)?;
    }

    Ok(())
}
