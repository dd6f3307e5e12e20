use crate::config::Config;
use crate::core::check::CheckLogic;
use crate::errors::AppResult;
use crate::ledger::LedgerStore;
use crate::ui::messages::warning;

pub fn handle(cfg: &Config) -> AppResult<()> {
    let path = cfg.ledger_path();
    if !path.exists() {
        warning(format!("No ledger at {}. Run `init` or mark someone first.", path.display()));
        return Ok(());
    }

    let store = LedgerStore::load(&path, cfg.key_mode)?;
    CheckLogic::run(&store);
    Ok(())
}
