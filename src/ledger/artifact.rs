//! Storage for captured attendance photos.
//!
//! The ledger only keeps a reference string; this module turns a byte blob
//! plus a suggested file name into a stable path under `images_dir`.

use crate::errors::AppResult;
use chrono::NaiveDateTime;
use std::fs;
use std::path::{Path, PathBuf};

const DEFAULT_EXTENSION: &str = "jpg";

pub struct ArtifactStore {
    dir: PathBuf,
}

impl ArtifactStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Save `bytes` as `{student}_{YYYYmmdd_HHMMSS}.{ext}` and return the path.
    ///
    /// The content is written as-is; it is never decoded.
    pub fn store(
        &self,
        bytes: &[u8],
        suggested_name: &str,
        student_id: &str,
        moment: NaiveDateTime,
    ) -> AppResult<String> {
        fs::create_dir_all(&self.dir)?;

        let ext = Path::new(suggested_name)
            .extension()
            .and_then(|e| e.to_str())
            .filter(|e| !e.is_empty())
            .map(|e| e.to_ascii_lowercase())
            .unwrap_or_else(|| DEFAULT_EXTENSION.to_string());

        let stem = format!(
            "{}_{}",
            sanitize(student_id),
            moment.format("%Y%m%d_%H%M%S")
        );

        let mut target = self.dir.join(format!("{stem}.{ext}"));
        let mut n = 1;
        while target.exists() {
            target = self.dir.join(format!("{stem}_{n}.{ext}"));
            n += 1;
        }

        fs::write(&target, bytes)?;
        Ok(target.to_string_lossy().to_string())
    }
}

/// Keep file names portable: letters, digits, `-` and `_` only.
fn sanitize(id: &str) -> String {
    let cleaned: String = id
        .trim()
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect();

    if cleaned.is_empty() {
        "unknown".to_string()
    } else {
        cleaned
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use tempfile::tempdir;

    fn moment() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 5, 1)
            .unwrap()
            .and_hms_opt(9, 0, 0)
            .unwrap()
    }

    #[test]
    fn names_file_after_student_and_moment() {
        let dir = tempdir().unwrap();
        let store = ArtifactStore::new(dir.path().join("images"));

        let first = store.store(b"\xFF\xD8", "snap.PNG", "S/1", moment()).unwrap();
        let second = store.store(b"\xFF\xD8", "snap.png", "S/1", moment()).unwrap();

        assert!(first.ends_with("S_1_20240501_090000.png"));
        assert!(second.ends_with("S_1_20240501_090000_1.png"));
        assert_eq!(fs::read(&first).unwrap(), b"\xFF\xD8");
    }

    #[test]
    fn falls_back_to_jpg_and_unknown() {
        let dir = tempdir().unwrap();
        let store = ArtifactStore::new(dir.path());

        let p = store.store(b"x", "camera_frame", "", moment()).unwrap();
        assert!(p.ends_with("unknown_20240501_090000.jpg"));
    }
}
