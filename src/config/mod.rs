use crate::errors::{AppError, AppResult};
use crate::models::KeyMode;
use crate::ui::messages::success;
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::PathBuf;

pub mod migrate; // use submodule at src/config/migrate.rs

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_ledger")]
    pub ledger: String,
    #[serde(default = "default_journal")]
    pub journal: String,
    #[serde(default = "default_images_dir")]
    pub images_dir: String,
    #[serde(default)]
    pub key_mode: KeyMode,
    #[serde(default = "default_smtp_host")]
    pub smtp_host: String,
    #[serde(default = "default_smtp_port")]
    pub smtp_port: u16,
    #[serde(default = "default_smtp_timeout_secs")]
    pub smtp_timeout_secs: u64,
    #[serde(default)]
    pub sender: String,
}

fn default_ledger() -> String {
    Config::ledger_file().to_string_lossy().to_string()
}
fn default_journal() -> String {
    Config::journal_file().to_string_lossy().to_string()
}
fn default_images_dir() -> String {
    Config::config_dir()
        .join("images")
        .to_string_lossy()
        .to_string()
}
pub(crate) fn default_smtp_host() -> String {
    "smtp.gmail.com".to_string()
}
pub(crate) fn default_smtp_port() -> u16 {
    587
}
pub(crate) fn default_smtp_timeout_secs() -> u64 {
    10
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ledger: default_ledger(),
            journal: default_journal(),
            images_dir: default_images_dir(),
            key_mode: KeyMode::default(),
            smtp_host: default_smtp_host(),
            smtp_port: default_smtp_port(),
            smtp_timeout_secs: default_smtp_timeout_secs(),
            sender: String::new(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("rattendance")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".rattendance")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rattendance.conf")
    }

    /// Return the default path of the attendance ledger
    pub fn ledger_file() -> PathBuf {
        Self::config_dir().join("attendance.csv")
    }

    /// Return the default path of the SQLite journal
    pub fn journal_file() -> PathBuf {
        Self::config_dir().join("rattendance.sqlite")
    }

    pub fn ledger_path(&self) -> PathBuf {
        expand_tilde(&self.ledger)
    }

    pub fn journal_path(&self) -> PathBuf {
        expand_tilde(&self.journal)
    }

    pub fn images_path(&self) -> PathBuf {
        expand_tilde(&self.images_dir)
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();

        if path.exists() {
            let content = fs::read_to_string(&path)
                .map_err(|e| AppError::ConfigLoad(format!("{}: {e}", path.display())))?;
            serde_yaml::from_str(&content)
                .map_err(|e| AppError::ConfigLoad(format!("{}: {e}", path.display())))
        } else {
            Ok(Config::default())
        }
    }

    /// Write this configuration to the standard config file
    pub fn save(&self) -> AppResult<()> {
        let yaml = serde_yaml::to_string(self).map_err(|_| AppError::ConfigSave)?;
        fs::create_dir_all(Self::config_dir())?;
        fs::write(Self::config_file(), yaml).map_err(|_| AppError::ConfigSave)
    }

    /// A `--ledger` value as stored: relative names live in the config directory.
    pub fn resolve_ledger(name: &str) -> String {
        let p = expand_tilde(name);
        let ledger = if p.is_absolute() {
            p
        } else {
            Self::config_dir().join(p)
        };
        ledger.to_string_lossy().to_string()
    }

    /// Initialize the configuration directory and file.
    ///
    /// A relative `custom_ledger` is resolved with `resolve_ledger`.
    pub fn init_all(custom_ledger: Option<String>, is_test: bool) -> AppResult<Config> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        let mut config = if Self::config_file().exists() {
            Self::load()?
        } else {
            Config::default()
        };

        if let Some(name) = custom_ledger {
            config.ledger = Self::resolve_ledger(&name);
        }

        if !is_test {
            config.save()?;
            success(format!("Config file: {}", Self::config_file().display()));
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_file_takes_defaults() {
        let cfg: Config = serde_yaml::from_str("key_mode: name
sender: office@school.test
").unwrap();
        assert_eq!(cfg.key_mode, KeyMode::Name);
        assert_eq!(cfg.sender, "office@school.test");
        assert_eq!(cfg.smtp_port, 587);
        assert_eq!(cfg.smtp_timeout_secs, 10);
        assert!(cfg.ledger.ends_with("attendance.csv"));
    }

    #[test]
    fn absolute_ledger_is_kept() {
        let abs = std::env::temp_dir().join("class_b.csv");
        let abs = abs.to_string_lossy().to_string();
        assert_eq!(Config::resolve_ledger(&abs), abs);
    }
}
