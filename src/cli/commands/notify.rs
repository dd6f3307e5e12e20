use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::notify::NotifyLogic;
use crate::core::{open_journal, open_ledger};
use crate::errors::{AppError, AppResult};
use crate::models::RosterEntry;
use crate::notify::{EnvCredentials, Notifier, SmtpMailer};
use crate::utils::date;
use crate::utils::path::expand_tilde;
use std::time::Duration;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Notify {
        to,
        name,
        status,
        roster,
        date: date_arg,
    } = cmd
    {
        let mailer = SmtpMailer::new(
            cfg.smtp_host.clone(),
            cfg.smtp_port,
            Duration::from_secs(cfg.smtp_timeout_secs),
        );
        let notifier = Notifier::new(mailer, EnvCredentials::default());
        let journal = open_journal(cfg);

        match (to, name, status, roster) {
            (Some(to), Some(name), Some(status), None) => {
                NotifyLogic::send_one(&notifier, journal.as_ref(), &cfg.sender, to, name, *status)?;
            }
            (None, _, _, Some(roster_file)) => {
                let day = date::date_or_today(date_arg.as_ref()).map_err(AppError::InvalidDate)?;
                let entries = RosterEntry::load_all(&expand_tilde(roster_file))?;
                let ledger = open_ledger(cfg)?;

                let summary = NotifyLogic::send_absences(
                    &notifier,
                    journal.as_ref(),
                    &ledger,
                    &entries,
                    &cfg.sender,
                    day,
                )?;

                if summary.sent == 0 && !summary.failed.is_empty() {
                    return Err(AppError::Other(format!(
                        "all {} notices failed",
                        summary.failed.len()
                    )));
                }
            }
            _ => {
                return Err(AppError::Other(
                    "use either --to/--name/--status or --roster".into(),
                ));
            }
        }
    }
    Ok(())
}
