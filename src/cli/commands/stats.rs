use crate::config::Config;
use crate::core::open_ledger;
use crate::core::stats::StatsLogic;
use crate::errors::AppResult;

pub fn handle(cfg: &Config) -> AppResult<()> {
    let ledger = open_ledger(cfg)?;
    StatsLogic::print(&ledger.aggregate()?);
    Ok(())
}
