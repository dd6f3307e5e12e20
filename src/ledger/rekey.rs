//! One-time migration of name-keyed ledgers to student ids.

use crate::errors::{AppError, AppResult};
use crate::ledger::LedgerStore;
use serde::Deserialize;
use std::collections::{BTreeSet, HashMap};
use std::path::Path;

#[derive(Debug, Deserialize)]
struct MappingRow {
    #[serde(rename = "Name")]
    name: String,
    #[serde(rename = "StudentID")]
    student_id: String,
}

/// Outcome of a rekey pass.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct RekeyReport {
    pub updated: usize,
    pub unmapped: Vec<String>,
}

/// Read a `Name, StudentID` mapping file. Later rows override earlier ones.
pub fn load_mapping(path: &Path) -> AppResult<HashMap<String, String>> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(path)
        .map_err(|e| AppError::storage(path, format!("cannot open mapping: {e}")))?;

    let mut out = HashMap::new();
    for (i, row) in rdr.deserialize::<MappingRow>().enumerate() {
        let row = row.map_err(|e| AppError::storage(path, format!("mapping row {}: {e}", i + 1)))?;
        if !row.name.is_empty() && !row.student_id.is_empty() {
            out.insert(row.name, row.student_id);
        }
    }
    Ok(out)
}

impl LedgerStore {
    /// Fill empty `StudentID` cells from `mapping`, keyed by `Name`.
    ///
    /// Rows that already carry an id are left alone. The table is persisted
    /// only when at least one row changed.
    pub fn rekey(&mut self, mapping: &HashMap<String, String>) -> AppResult<RekeyReport> {
        let mut report = RekeyReport::default();
        let mut unmapped = BTreeSet::new();

        for rec in self.records.iter_mut().filter(|r| r.student_id.is_empty()) {
            match mapping.get(&rec.name) {
                Some(id) => {
                    rec.student_id = id.clone();
                    report.updated += 1;
                }
                None => {
                    unmapped.insert(rec.name.clone());
                }
            }
        }

        if report.updated > 0 {
            self.persist()?;
        }

        report.unmapped = unmapped.into_iter().collect();
        Ok(report)
    }
}
