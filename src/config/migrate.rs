use crate::errors::{AppError, AppResult};
use crate::journal::migrate::{is_applied, mark_applied};
use crate::models::KeyMode;
use crate::ui::messages::{info, success};
use rusqlite::Connection;
use serde_yaml::{Mapping, Value};
use std::fs;
use std::path::Path;

const VERSION_SMTP_FIELDS: &str = "20240901_0002_add_notifier_settings";

/// Every key a complete config file carries.
const EXPECTED_FIELDS: [&str; 8] = [
    "ledger",
    "journal",
    "images_dir",
    "key_mode",
    "smtp_host",
    "smtp_port",
    "smtp_timeout_secs",
    "sender",
];

fn read_mapping(conf_file: &Path) -> AppResult<Mapping> {
    let content = fs::read_to_string(conf_file)
        .map_err(|e| AppError::ConfigLoad(format!("{}: {e}", conf_file.display())))?;

    match serde_yaml::from_str::<Value>(&content) {
        Ok(Value::Mapping(map)) => Ok(map),
        Ok(Value::Null) => Ok(Mapping::new()),
        Ok(_) => Err(AppError::Config(format!(
            "{} is not a YAML mapping",
            conf_file.display()
        ))),
        Err(e) => Err(AppError::ConfigLoad(format!("{}: {e}", conf_file.display()))),
    }
}

/// Keys absent from the config file at `conf_file`.
pub fn missing_fields(conf_file: &Path) -> AppResult<Vec<&'static str>> {
    let map = read_mapping(conf_file)?;
    Ok(EXPECTED_FIELDS
        .iter()
        .copied()
        .filter(|k| !map.contains_key(Value::String(k.to_string())))
        .collect())
}

fn default_value(field: &str) -> Value {
    let defaults = super::Config::default();
    match field {
        "ledger" => Value::String(defaults.ledger),
        "journal" => Value::String(defaults.journal),
        "images_dir" => Value::String(defaults.images_dir),
        "key_mode" => Value::String(KeyMode::default().code().to_string()),
        "smtp_host" => Value::String(defaults.smtp_host),
        "smtp_port" => Value::Number(defaults.smtp_port.into()),
        "smtp_timeout_secs" => Value::Number(defaults.smtp_timeout_secs.into()),
        _ => Value::String(String::new()),
    }
}

/// Add missing notifier and ledger settings to the config file, once.
///
/// Returns the keys that were added. The migration is recorded in the
/// journal, so a second run is a no-op.
pub fn migrate_add_missing_fields(conn: &Connection, conf_file: &Path) -> AppResult<Vec<String>> {
    if is_applied(conn, VERSION_SMTP_FIELDS)? {
        return Ok(Vec::new());
    }

    let mut added = Vec::new();

    if conf_file.exists() {
        let mut map = read_mapping(conf_file)?;

        for field in EXPECTED_FIELDS {
            let key = Value::String(field.to_string());
            if !map.contains_key(&key) {
                map.insert(key, default_value(field));
                added.push(field.to_string());
            }
        }

        if !added.is_empty() {
            let serialized = serde_yaml::to_string(&Value::Mapping(map))
                .map_err(|e| AppError::Config(format!("serialize error: {e}")))?;
            fs::write(conf_file, serialized).map_err(|_| AppError::ConfigSave)?;
        }
    }

    let message = if added.is_empty() {
        "Config already complete".to_string()
    } else {
        format!("Added config fields: {}", added.join(", "))
    };
    mark_applied(conn, VERSION_SMTP_FIELDS, &message)?;

    if added.is_empty() {
        info(format!("Migration {} recorded, nothing to add.", VERSION_SMTP_FIELDS));
    } else {
        success(format!(
            "Migration applied: {}: {}.",
            VERSION_SMTP_FIELDS, message
        ));
    }

    Ok(added)
}
