use crate::errors::AppResult;
use crate::journal::{JournalPool, jlog_or_warn};
use crate::ledger::{RekeyReport, SharedLedger, load_mapping};
use crate::ui::messages::{bullet, info, success, warning};
use std::path::Path;

pub struct RekeyLogic;

impl RekeyLogic {
    /// Fill missing student ids from a `Name, StudentID` mapping file.
    pub fn run(
        ledger: &SharedLedger,
        journal: Option<&JournalPool>,
        map_file: &Path,
    ) -> AppResult<RekeyReport> {
        let mapping = load_mapping(map_file)?;
        info(format!(
            "Loaded {} name mappings from {}",
            mapping.len(),
            map_file.display()
        ));

        let report = ledger.with_store(|store| store.rekey(&mapping))?;

        if report.updated == 0 {
            info("No rows needed a student id.");
        } else {
            success(format!("{} rows now carry a student id.", report.updated));
            jlog_or_warn(
                journal,
                "rekey",
                &map_file.to_string_lossy(),
                &format!(
                    "{} rows updated, {} names unmapped",
                    report.updated,
                    report.unmapped.len()
                ),
            );
        }

        if !report.unmapped.is_empty() {
            warning(format!("{} names have no mapping:", report.unmapped.len()));
            for name in &report.unmapped {
                bullet(name);
            }
        }

        Ok(report)
    }
}
