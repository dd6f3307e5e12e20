//! Where the sender's SMTP secret comes from.

use crate::errors::{AppError, AppResult};
use std::fmt;

/// Environment variable read by the default provider.
pub const PASSWORD_ENV: &str = "RATTENDANCE_SMTP_PASSWORD";

/// A secret value that never shows up in `Debug` output.
#[derive(Clone)]
pub struct Secret(String);

impl Secret {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Secret(***)")
    }
}

/// Resolves the secret for a sender account at send time.
pub trait CredentialProvider {
    fn credential(&self, account: &str) -> AppResult<Secret>;
}

/// Reads the secret from an environment variable.
#[derive(Debug, Clone)]
pub struct EnvCredentials {
    var: String,
}

impl EnvCredentials {
    pub fn from_var(var: impl Into<String>) -> Self {
        Self { var: var.into() }
    }
}

impl Default for EnvCredentials {
    fn default() -> Self {
        Self::from_var(PASSWORD_ENV)
    }
}

impl CredentialProvider for EnvCredentials {
    fn credential(&self, account: &str) -> AppResult<Secret> {
        match std::env::var(&self.var) {
            Ok(v) if !v.is_empty() => Ok(Secret::new(v)),
            _ => Err(AppError::Credential(format!(
                "no secret for '{account}': set {}",
                self.var
            ))),
        }
    }
}

/// A secret supplied directly by the caller.
#[derive(Debug, Clone)]
pub struct StaticCredentials(Secret);

impl StaticCredentials {
    pub fn new(value: impl Into<String>) -> Self {
        Self(Secret::new(value))
    }
}

impl CredentialProvider for StaticCredentials {
    fn credential(&self, _account: &str) -> AppResult<Secret> {
        Ok(self.0.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_hides_secret() {
        let s = Secret::new("hunter2");
        assert_eq!(format!("{s:?}"), "Secret(***)");
        assert_eq!(s.expose(), "hunter2");
    }
}
