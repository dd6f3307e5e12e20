use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::rekey::RekeyLogic;
use crate::core::{open_journal, open_ledger};
use crate::errors::AppResult;
use crate::utils::path::expand_tilde;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Rekey { map } = cmd {
        let ledger = open_ledger(cfg)?;
        let journal = open_journal(cfg);
        RekeyLogic::run(&ledger, journal.as_ref(), &expand_tilde(map))?;
    }
    Ok(())
}
