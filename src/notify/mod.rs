//! Notifier gateway: one status mail per call, no retries, no shared session.

pub mod credentials;
pub mod template;
pub mod transport;

pub use credentials::{CredentialProvider, EnvCredentials, Secret, StaticCredentials};
pub use transport::{MailTransport, OutgoingMail, SmtpMailer};

use crate::models::AttendanceStatus;
use thiserror::Error;

/// Any delivery failure, reported with a human-readable cause.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{cause}")]
pub struct NotifyError {
    pub cause: String,
}

impl NotifyError {
    pub fn new(cause: impl Into<String>) -> Self {
        Self {
            cause: cause.into(),
        }
    }
}

pub type NotifyResult = Result<(), NotifyError>;

/// Composes the status mail and hands it to a transport.
///
/// The secret for the sender account is fetched from `credentials` on every
/// call; nothing is cached between sends.
pub struct Notifier<T: MailTransport, C: CredentialProvider> {
    transport: T,
    credentials: C,
}

impl<T: MailTransport, C: CredentialProvider> Notifier<T, C> {
    pub fn new(transport: T, credentials: C) -> Self {
        Self {
            transport,
            credentials,
        }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn send(
        &self,
        sender: &str,
        recipient: &str,
        subject_name: &str,
        status: AttendanceStatus,
    ) -> NotifyResult {
        let secret = self
            .credentials
            .credential(sender)
            .map_err(|e| NotifyError::new(e.to_string()))?;

        let mail = OutgoingMail {
            from: sender.to_string(),
            to: recipient.to_string(),
            subject: template::subject(status),
            body: template::body(subject_name, status),
        };

        self.transport.deliver(&mail, sender, &secret)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Default)]
    struct Recorder {
        sent: RefCell<Vec<(OutgoingMail, String)>>,
        fail_with: Option<String>,
    }

    impl MailTransport for Recorder {
        fn deliver(&self, mail: &OutgoingMail, _user: &str, secret: &Secret) -> NotifyResult {
            if let Some(cause) = &self.fail_with {
                return Err(NotifyError::new(cause.clone()));
            }
            self.sent
                .borrow_mut()
                .push((mail.clone(), secret.expose().to_string()));
            Ok(())
        }
    }

    #[test]
    fn sends_fixed_template_with_provided_secret() {
        let n = Notifier::new(Recorder::default(), StaticCredentials::new("app-pass"));

        n.send(
            "office@school.test",
            "alice@school.test",
            "Alice",
            AttendanceStatus::Absent,
        )
        .unwrap();

        let sent = n.transport().sent.borrow();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].0.to, "alice@school.test");
        assert_eq!(sent[0].0.body, "Hello Alice, You are marked absent today.");
        assert_eq!(sent[0].1, "app-pass");
    }

    #[test]
    fn transport_failure_is_reported_not_retried() {
        let rec = Recorder {
            fail_with: Some("authentication rejected".into()),
            ..Default::default()
        };
        let n = Notifier::new(rec, StaticCredentials::new("x"));

        let err = n
            .send("a@b.test", "c@d.test", "Bob", AttendanceStatus::Present)
            .unwrap_err();
        assert_eq!(err.cause, "authentication rejected");
        assert!(n.transport().sent.borrow().is_empty());
    }

    #[test]
    fn missing_credential_is_a_notify_error() {
        let n = Notifier::new(
            Recorder::default(),
            EnvCredentials::from_var("RATTENDANCE_TEST_UNSET_SECRET_VAR"),
        );

        let err = n
            .send("a@b.test", "c@d.test", "Bob", AttendanceStatus::Absent)
            .unwrap_err();
        assert!(err.cause.contains("RATTENDANCE_TEST_UNSET_SECRET_VAR"));
    }
}
