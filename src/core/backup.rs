use crate::errors::{AppError, AppResult};
use crate::export::ensure_writable;
use crate::journal::{JournalPool, jlog_or_warn};
use crate::ui::messages::{info, success};
use crate::utils::path::{expand_tilde, is_absolute};
use std::fs;
use std::path::{Path, PathBuf};
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

pub struct BackupLogic;

impl BackupLogic {
    /// Copy the ledger to `dest_file`, optionally zipped. Returns the path
    /// actually written.
    pub fn backup(
        ledger: &Path,
        journal: Option<&JournalPool>,
        dest_file: &str,
        compress: bool,
        force: bool,
    ) -> AppResult<PathBuf> {
        if !is_absolute(dest_file) {
            return Err(AppError::Other(format!(
                "backup file path must be absolute: {dest_file}"
            )));
        }
        let dest = expand_tilde(dest_file);

        // 1️⃣ Check ledger exists
        if !ledger.exists() {
            return Err(AppError::storage(ledger, "ledger not found, nothing to back up"));
        }

        // 2️⃣ Ensure destination folder exists
        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent)?;
        }

        let final_path = if compress {
            let zip_path = dest.with_extension("zip");
            ensure_writable(&zip_path, force)?;
            compress_into(ledger, &zip_path)?;
            zip_path
        } else {
            ensure_writable(&dest, force)?;
            fs::copy(ledger, &dest)?;
            dest
        };

        success(format!("Backup created: {}", final_path.display()));

        jlog_or_warn(
            journal,
            "backup",
            &final_path.to_string_lossy(),
            if compress {
                "Backup created and compressed"
            } else {
                "Backup created"
            },
        );

        Ok(final_path)
    }
}

/// Write `src` as the single entry of a new zip archive at `zip_path`.
fn compress_into(src: &Path, zip_path: &Path) -> AppResult<()> {
    let entry_name = src
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| "attendance.csv".to_string());

    let file = fs::File::create(zip_path)?;
    let mut zip = ZipWriter::new(file);

    let options = SimpleFileOptions::default().compression_method(zip::CompressionMethod::Deflated);

    zip.start_file(entry_name, options)
        .map_err(std::io::Error::other)?;

    let mut f = fs::File::open(src)?;
    std::io::copy(&mut f, &mut zip)?;
    zip.finish().map_err(std::io::Error::other)?;

    info(format!("Compressed: {}", zip_path.display()));

    Ok(())
}
