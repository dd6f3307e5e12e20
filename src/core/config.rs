use crate::config::Config;
use crate::config::migrate::{migrate_add_missing_fields, missing_fields};
use crate::errors::{AppError, AppResult};
use crate::journal::JournalPool;
use crate::ui::messages::{bullet, error, info, success, warning};
use std::path::Path;
use std::process::Command;

pub struct ConfigLogic;

impl ConfigLogic {
    /// Print the effective configuration (file values plus defaults).
    pub fn print(cfg: &Config) -> AppResult<()> {
        let yaml = serde_yaml::to_string(cfg)
            .map_err(|e| AppError::Config(format!("serialize error: {e}")))?;
        println!("📄 Current configuration:\n");
        println!("{}", yaml);
        Ok(())
    }

    /// List keys missing from the file. Returns how many are missing.
    pub fn check(path: &Path) -> AppResult<usize> {
        if !path.exists() {
            warning(format!(
                "No config file at {}; defaults are in use. Run `init` to create it.",
                path.display()
            ));
            return Ok(0);
        }

        let missing = missing_fields(path)?;
        if missing.is_empty() {
            success("Configuration file is complete.");
        } else {
            warning(format!("{} fields missing (defaults apply):", missing.len()));
            for field in &missing {
                bullet(field);
            }
            info("Run `config --migrate` to write them into the file.");
        }
        Ok(missing.len())
    }

    pub fn migrate(pool: &JournalPool, path: &Path) -> AppResult<Vec<String>> {
        migrate_add_missing_fields(&pool.conn, path)
    }

    /// Open the config file in `editor`, falling back to the platform default.
    pub fn edit(path: &Path, editor: Option<&str>) -> AppResult<()> {
        let default_editor = std::env::var("EDITOR")
            .or_else(|_| std::env::var("VISUAL"))
            .unwrap_or_else(|_| {
                if cfg!(target_os = "windows") {
                    "notepad".to_string()
                } else {
                    "nano".to_string()
                }
            });

        let editor_to_use = editor.map(str::to_string).unwrap_or_else(|| default_editor.clone());

        if run_editor(&editor_to_use, path) {
            success(format!(
                "Configuration file edited successfully using '{}'",
                editor_to_use
            ));
            return Ok(());
        }

        warning(format!(
            "Editor '{}' not available, falling back to '{}'",
            editor_to_use, default_editor
        ));

        if editor_to_use != default_editor && run_editor(&default_editor, path) {
            success(format!(
                "Configuration file edited successfully using fallback '{}'",
                default_editor
            ));
            return Ok(());
        }

        error(format!(
            "Failed to edit configuration file using '{}'",
            default_editor
        ));
        Err(AppError::Config(format!("no usable editor for {}", path.display())))
    }
}

fn run_editor(editor: &str, path: &Path) -> bool {
    matches!(Command::new(editor).arg(path).status(), Ok(s) if s.success())
}
