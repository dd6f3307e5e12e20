use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::backup::BackupLogic;
use crate::core::open_journal;
use crate::errors::AppResult;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Backup {
        file,
        compress,
        force,
    } = cmd
    {
        let journal = open_journal(cfg);
        BackupLogic::backup(
            &cfg.ledger_path(),
            journal.as_ref(),
            file,
            *compress,
            *force,
        )?;
    }

    Ok(())
}
