//! Mail delivery seam and the SMTP implementation behind it.

use super::{NotifyError, NotifyResult, Secret};
use lettre::message::{Mailbox, header::ContentType};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{Message, SmtpTransport, Transport};
use std::error::Error;
use std::io;
use std::time::Duration;

/// A fully composed plain-text mail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutgoingMail {
    pub from: String,
    pub to: String,
    pub subject: String,
    pub body: String,
}

pub trait MailTransport {
    /// Deliver one mail, authenticating as `user`.
    fn deliver(&self, mail: &OutgoingMail, user: &str, secret: &Secret) -> NotifyResult;
}

/// SMTP with STARTTLS. A new session is opened and closed for every mail.
#[derive(Debug, Clone)]
pub struct SmtpMailer {
    host: String,
    port: u16,
    timeout: Duration,
}

impl SmtpMailer {
    pub fn new(host: impl Into<String>, port: u16, timeout: Duration) -> Self {
        Self {
            host: host.into(),
            port,
            timeout,
        }
    }
}

impl MailTransport for SmtpMailer {
    fn deliver(&self, mail: &OutgoingMail, user: &str, secret: &Secret) -> NotifyResult {
        let from: Mailbox = mail
            .from
            .parse()
            .map_err(|e| NotifyError::new(format!("invalid sender '{}': {e}", mail.from)))?;
        let to: Mailbox = mail
            .to
            .parse()
            .map_err(|e| NotifyError::new(format!("invalid recipient '{}': {e}", mail.to)))?;

        let message = Message::builder()
            .from(from)
            .to(to)
            .subject(mail.subject.clone())
            .header(ContentType::TEXT_PLAIN)
            .body(mail.body.clone())
            .map_err(|e| NotifyError::new(format!("cannot build message: {e}")))?;

        let mailer = SmtpTransport::starttls_relay(&self.host)
            .map_err(|e| NotifyError::new(format!("cannot reach {}: {e}", self.host)))?
            .port(self.port)
            .credentials(Credentials::new(
                user.to_string(),
                secret.expose().to_string(),
            ))
            .timeout(Some(self.timeout))
            .build();

        mailer.send(&message).map(|_| ()).map_err(|e| {
            if e.is_timeout() || timed_out(&e) {
                NotifyError::new("timeout")
            } else {
                NotifyError::new(e.to_string())
            }
        })
    }
}

/// A socket read timeout surfaces as `WouldBlock` on Unix and `TimedOut`
/// elsewhere, somewhere down the source chain.
fn timed_out(err: &(dyn Error + 'static)) -> bool {
    let mut current = Some(err);
    while let Some(e) = current {
        if let Some(io_err) = e.downcast_ref::<io::Error>()
            && matches!(
                io_err.kind(),
                io::ErrorKind::TimedOut | io::ErrorKind::WouldBlock
            )
        {
            return true;
        }
        current = e.source();
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::TcpListener;
    use std::thread;
    use std::time::Instant;

    fn mail() -> OutgoingMail {
        OutgoingMail {
            from: "school@example.com".into(),
            to: "parent@example.com".into(),
            subject: "Attendance".into(),
            body: "Hello".into(),
        }
    }

    #[test]
    fn silent_server_is_reported_as_timeout() {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let port = listener.local_addr().unwrap().port();

        // Accept, then never send the greeting.
        let server = thread::spawn(move || {
            let (stream, _) = listener.accept().unwrap();
            thread::sleep(Duration::from_secs(3));
            drop(stream);
        });

        let mailer = SmtpMailer::new("127.0.0.1", port, Duration::from_millis(500));
        let started = Instant::now();
        let err = mailer
            .deliver(&mail(), "school@example.com", &Secret::new("pw"))
            .unwrap_err();

        assert_eq!(err.cause, "timeout");
        assert!(started.elapsed() < Duration::from_secs(3));
        server.join().unwrap();
    }

    #[test]
    fn io_timeouts_are_found_down_the_chain() {
        #[derive(Debug)]
        struct Wrapped(io::Error);

        impl std::fmt::Display for Wrapped {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "network error")
            }
        }

        impl Error for Wrapped {
            fn source(&self) -> Option<&(dyn Error + 'static)> {
                Some(&self.0)
            }
        }

        let blocked = Wrapped(io::Error::from(io::ErrorKind::WouldBlock));
        let refused = Wrapped(io::Error::from(io::ErrorKind::ConnectionRefused));
        assert!(timed_out(&blocked));
        assert!(!timed_out(&refused));
    }
}
