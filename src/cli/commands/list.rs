use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::list::ListLogic;
use crate::core::open_ledger;
use crate::errors::{AppError, AppResult};
use crate::export::range::parse_period;
use crate::utils::date;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List {
        date: date_arg,
        period,
        now,
    } = cmd
    {
        let bounds = if *now {
            let d = date::today();
            Some((d, d))
        } else if let Some(raw) = date_arg {
            let d = date::parse_date(raw).ok_or_else(|| AppError::InvalidDate(raw.clone()))?;
            Some((d, d))
        } else {
            parse_period(period.as_deref())?
        };

        let title = match bounds {
            Some((from, to)) if from == to => from.to_string(),
            Some((from, to)) => format!("{} to {}", from, to),
            None => "all dates".to_string(),
        };

        let ledger = open_ledger(cfg)?;
        let records = ledger.with_store(|store| Ok(store.query_range(bounds)))?;
        ListLogic::print(&title, &records);
    }
    Ok(())
}
