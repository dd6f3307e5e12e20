use crate::errors::{AppError, AppResult};
use crate::models::KeyMode;
use serde::Deserialize;
use std::path::Path;

/// A student expected in class, with the address absence mails go to.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RosterEntry {
    #[serde(rename = "StudentID", default)]
    pub student_id: String,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Email", default)]
    pub email: String,
}

impl RosterEntry {
    pub fn identity(&self, mode: KeyMode) -> &str {
        match mode {
            KeyMode::StudentId => &self.student_id,
            KeyMode::Name => &self.name,
        }
    }

    /// Read a roster CSV (`StudentID, Name, Email` header).
    pub fn load_all(path: &Path) -> AppResult<Vec<RosterEntry>> {
        let mut rdr = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_path(path)
            .map_err(|e| AppError::storage(path, format!("cannot open roster: {e}")))?;

        let mut out = Vec::new();
        for (i, row) in rdr.deserialize::<RosterEntry>().enumerate() {
            let entry =
                row.map_err(|e| AppError::storage(path, format!("roster row {}: {e}", i + 1)))?;
            out.push(entry);
        }
        Ok(out)
    }
}
