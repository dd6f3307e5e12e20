use super::key_mode::KeyMode;
use chrono::NaiveDate;
use serde::Serialize;

/// One attendance event, i.e. one row of the ledger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AttendanceRecord {
    pub student_id: String, // ⇔ StudentID (may be empty in name-keyed ledgers)
    pub name: String,       // ⇔ Name
    pub date: NaiveDate,    // ⇔ Date  (TEXT "YYYY-MM-DD")
    pub time: String,       // ⇔ Time  (TEXT "HH:MM:SS", informational)
    pub image_ref: String,  // ⇔ Image (path/handle, never opened)
}

impl AttendanceRecord {
    pub fn new(
        student_id: impl Into<String>,
        name: impl Into<String>,
        date: NaiveDate,
        time: impl Into<String>,
        image_ref: impl Into<String>,
    ) -> Self {
        Self {
            student_id: student_id.into(),
            name: name.into(),
            date,
            time: time.into(),
            image_ref: image_ref.into(),
        }
    }

    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }

    /// Identity half of the duplicate-guard key.
    pub fn identity(&self, mode: KeyMode) -> &str {
        match mode {
            KeyMode::StudentId => &self.student_id,
            KeyMode::Name => &self.name,
        }
    }

    /// Row values in canonical column order (StudentID, Name, Date, Time, Image).
    pub fn to_row(&self) -> Vec<String> {
        vec![
            self.student_id.clone(),
            self.name.clone(),
            self.date_str(),
            self.time.clone(),
            self.image_ref.clone(),
        ]
    }
}
