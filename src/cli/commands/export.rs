use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::{open_journal, open_ledger};
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::journal::jlog_or_warn;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        range,
        force,
    } = cmd
    {
        let ledger = open_ledger(cfg)?;
        let rows = ExportLogic::export(&ledger, *format, file, range.as_deref(), *force)?;

        if rows > 0 {
            let journal = open_journal(cfg);
            jlog_or_warn(
                journal.as_ref(),
                "export",
                file,
                &format!("{} records exported as {}", rows, format.as_str()),
            );
        }
    }
    Ok(())
}
