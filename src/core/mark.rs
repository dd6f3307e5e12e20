use crate::errors::{AppError, AppResult};
use crate::journal::{JournalPool, jlog_or_warn};
use crate::ledger::{ArtifactStore, SharedLedger};
use crate::models::{KeyMode, MarkOutcome};
use crate::ui::messages::{success, warning};
use crate::utils::date::today;
use crate::utils::time::parse_time;
use chrono::NaiveDate;
use std::fs;
use std::path::Path;

/// Where the image reference of a new row comes from.
pub enum ImageSource<'a> {
    None,
    /// Stored verbatim.
    Reference(&'a str),
    /// Copied into the artifact store first.
    Photo(&'a Path),
}

/// One attendance mark as collected by the CLI.
pub struct MarkRequest<'a> {
    pub student_id: &'a str,
    pub name: &'a str,
    pub date: NaiveDate,
    pub time: String,
    pub image: ImageSource<'a>,
}

pub struct MarkLogic;

impl MarkLogic {
    /// Record one attendance event.
    ///
    /// The duplicate check, the photo copy and the append all run under the
    /// ledger lock. A rejected or unsaved mark leaves no photo behind.
    pub fn mark(
        ledger: &SharedLedger,
        artifacts: &ArtifactStore,
        journal: Option<&JournalPool>,
        req: &MarkRequest<'_>,
    ) -> AppResult<MarkOutcome> {
        let outcome = ledger.with_store(|store| {
            let identity = match store.key_mode() {
                KeyMode::StudentId => req.student_id.trim(),
                KeyMode::Name => req.name.trim(),
            };

            let skip_image = identity.is_empty() || store.is_marked(identity, req.date);
            let (image_ref, copied) = if skip_image {
                (String::new(), false)
            } else {
                resolve_image(artifacts, req)?
            };

            let result =
                store.mark(req.student_id, req.name, req.date, &req.time, &image_ref);
            if result.is_err() && copied {
                let _ = fs::remove_file(&image_ref);
            }
            result
        })?;

        match &outcome {
            MarkOutcome::Marked {
                student_id,
                name,
                date,
                time,
            } => {
                success(format!(
                    "Marked {} ({}) present on {} at {}",
                    display_id(student_id),
                    name,
                    date,
                    time
                ));
                jlog_or_warn(
                    journal,
                    "mark",
                    student_id,
                    &format!("{} marked on {} at {}", name, date, time),
                );
            }
            MarkOutcome::AlreadyMarked { student_id, date } => {
                let when = if *date == today() {
                    "today".to_string()
                } else {
                    format!("on {}", date)
                };
                warning(format!(
                    "{} is already marked {}. Nothing written.",
                    display_id(student_id),
                    when
                ));
                jlog_or_warn(
                    journal,
                    "duplicate",
                    student_id,
                    &format!("Rejected second mark for {}", date),
                );
            }
        }

        Ok(outcome)
    }
}

fn display_id(student_id: &str) -> &str {
    if student_id.is_empty() { "-" } else { student_id }
}

/// The image reference for the row, and whether a photo was copied for it.
fn resolve_image(artifacts: &ArtifactStore, req: &MarkRequest<'_>) -> AppResult<(String, bool)> {
    match req.image {
        ImageSource::None => Ok((String::new(), false)),
        ImageSource::Reference(r) => Ok((r.trim().to_string(), false)),
        ImageSource::Photo(path) => {
            let bytes = fs::read(path).map_err(|e| {
                AppError::Other(format!("cannot read photo {}: {}", path.display(), e))
            })?;
            let at = parse_time(&req.time)
                .ok_or_else(|| AppError::InvalidTime(req.time.clone()))?;
            let suggested = path
                .file_name()
                .map(|n| n.to_string_lossy().to_string())
                .unwrap_or_default();

            let owner = if req.student_id.trim().is_empty() {
                req.name
            } else {
                req.student_id
            };
            let stored = artifacts.store(&bytes, &suggested, owner, req.date.and_time(at))?;
            Ok((stored, true))
        }
    }
}
