use crate::errors::{AppError, AppResult};
use crate::journal::{JournalPool, jlog_or_warn};
use crate::ledger::SharedLedger;
use crate::models::{AttendanceStatus, RosterEntry};
use crate::notify::{CredentialProvider, MailTransport, Notifier};
use crate::ui::messages::{bullet, error, info, success, warning};
use chrono::NaiveDate;

/// Outcome of a roster run.
#[derive(Debug, Default)]
pub struct NotifySummary {
    pub sent: usize,
    pub failed: Vec<(String, String)>,
    pub skipped: Vec<String>,
}

pub struct NotifyLogic;

impl NotifyLogic {
    /// Send one status mail. A transport failure is returned to the caller
    /// after it has been journaled.
    pub fn send_one<T: MailTransport, C: CredentialProvider>(
        notifier: &Notifier<T, C>,
        journal: Option<&JournalPool>,
        sender: &str,
        to: &str,
        name: &str,
        status: AttendanceStatus,
    ) -> AppResult<()> {
        require_sender(sender)?;

        match notifier.send(sender, to, name, status) {
            Ok(()) => {
                success(format!("Sent '{}' notice to {} <{}>", status, name, to));
                jlog_or_warn(journal, "notify_sent", to, &format!("{} marked {}", name, status));
                Ok(())
            }
            Err(e) => {
                jlog_or_warn(journal, "notify_failed", to, &e.cause);
                Err(AppError::Notify(e))
            }
        }
    }

    /// Mail every roster entry that has no record on `date`.
    ///
    /// Sends are independent: a failure is recorded and the loop moves on.
    pub fn send_absences<T: MailTransport, C: CredentialProvider>(
        notifier: &Notifier<T, C>,
        journal: Option<&JournalPool>,
        ledger: &SharedLedger,
        roster: &[RosterEntry],
        sender: &str,
        date: NaiveDate,
    ) -> AppResult<NotifySummary> {
        let absent = ledger.with_store(|store| Ok(store.absentees(roster, date)))?;
        let mut summary = NotifySummary::default();

        if absent.is_empty() {
            info(format!("No absentees on {}.", date));
            return Ok(summary);
        }
        require_sender(sender)?;

        info(format!("{} absentees on {}:", absent.len(), date));

        for entry in &absent {
            if entry.email.is_empty() {
                bullet(format!("{}: no email address, skipped", entry.name));
                summary.skipped.push(entry.name.clone());
                continue;
            }

            match notifier.send(sender, &entry.email, &entry.name, AttendanceStatus::Absent) {
                Ok(()) => {
                    bullet(format!("{} <{}>: sent", entry.name, entry.email));
                    jlog_or_warn(
                        journal,
                        "notify_sent",
                        &entry.email,
                        &format!("{} marked absent on {}", entry.name, date),
                    );
                    summary.sent += 1;
                }
                Err(e) => {
                    bullet(format!("{} <{}>: failed ({})", entry.name, entry.email, e.cause));
                    jlog_or_warn(journal, "notify_failed", &entry.email, &e.cause);
                    summary.failed.push((entry.email.clone(), e.cause));
                }
            }
        }

        println!();
        if summary.failed.is_empty() {
            success(format!("{} notices sent.", summary.sent));
        } else {
            error(format!(
                "{} sent, {} failed.",
                summary.sent,
                summary.failed.len()
            ));
        }
        if !summary.skipped.is_empty() {
            warning(format!("{} roster entries have no email.", summary.skipped.len()));
        }

        Ok(summary)
    }
}

fn require_sender(sender: &str) -> AppResult<()> {
    if sender.trim().is_empty() {
        return Err(AppError::Config(
            "no sender address: set `sender` in the config file".into(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::LedgerStore;
    use crate::models::KeyMode;
    use crate::notify::{NotifyError, NotifyResult, OutgoingMail, Secret, StaticCredentials};
    use std::cell::RefCell;
    use tempfile::tempdir;

    /// Fails every mail addressed to `reject`.
    #[derive(Default)]
    struct FakeMailer {
        reject: String,
        sent: RefCell<Vec<OutgoingMail>>,
    }

    impl MailTransport for FakeMailer {
        fn deliver(&self, mail: &OutgoingMail, _user: &str, _secret: &Secret) -> NotifyResult {
            if mail.to == self.reject {
                return Err(NotifyError::new("recipient rejected"));
            }
            self.sent.borrow_mut().push(mail.clone());
            Ok(())
        }
    }

    fn entry(id: &str, name: &str, email: &str) -> RosterEntry {
        RosterEntry {
            student_id: id.into(),
            name: name.into(),
            email: email.into(),
        }
    }

    #[test]
    fn one_failure_does_not_stop_the_rest() {
        let dir = tempdir().unwrap();
        let date = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
        let mut store = LedgerStore::load(dir.path().join("a.csv"), KeyMode::StudentId).unwrap();
        store.mark("S1", "Alice", date, "09:00:00", "").unwrap();
        let ledger = SharedLedger::new(store);

        let roster = vec![
            entry("S1", "Alice", "alice@school.test"),
            entry("S2", "Bob", "bob@school.test"),
            entry("S3", "Carol", "carol@school.test"),
            entry("S4", "Dan", ""),
        ];

        let mailer = FakeMailer {
            reject: "bob@school.test".into(),
            ..Default::default()
        };
        let notifier = Notifier::new(mailer, StaticCredentials::new("x"));
        let journal = JournalPool::in_memory().unwrap();

        let summary = NotifyLogic::send_absences(
            &notifier,
            Some(&journal),
            &ledger,
            &roster,
            "office@school.test",
            date,
        )
        .unwrap();

        assert_eq!(summary.sent, 1);
        assert_eq!(summary.failed.len(), 1);
        assert_eq!(summary.skipped, vec!["Dan".to_string()]);

        let sent = notifier.transport().sent.borrow();
        assert_eq!(sent[0].to, "carol@school.test");
        assert_eq!(sent[0].body, "Hello Carol, You are marked absent today.");

        let failed: i64 = journal
            .conn
            .query_row(
                "SELECT COUNT(*) FROM log WHERE operation = 'notify_failed'",
                [],
                |r| r.get(0),
            )
            .unwrap();
        assert_eq!(failed, 1);
    }

    #[test]
    fn single_send_needs_a_sender() {
        let notifier = Notifier::new(FakeMailer::default(), StaticCredentials::new("x"));
        let err = NotifyLogic::send_one(
            &notifier,
            None,
            "",
            "a@b.test",
            "Alice",
            AttendanceStatus::Present,
        )
        .unwrap_err();
        assert!(matches!(err, AppError::Config(_)));
        assert!(notifier.transport().sent.borrow().is_empty());
    }
}
