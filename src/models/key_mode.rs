use serde::{Deserialize, Serialize};

/// Which identity field the duplicate guard pairs with the date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyMode {
    /// `(StudentID, Date)`, the current ledger layout.
    #[default]
    StudentId,
    /// `(Name, Date)`, used by ledgers written before ids were collected.
    Name,
}

impl KeyMode {
    pub fn code(&self) -> &'static str {
        match self {
            KeyMode::StudentId => "student_id",
            KeyMode::Name => "name",
        }
    }

    pub fn column(&self) -> &'static str {
        match self {
            KeyMode::StudentId => "StudentID",
            KeyMode::Name => "Name",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_spelling_matches_code() {
        let mode: KeyMode = serde_yaml::from_str("name").unwrap();
        assert_eq!(mode, KeyMode::Name);
        assert_eq!(serde_yaml::to_string(&KeyMode::StudentId).unwrap().trim(), "student_id");
        assert!(serde_yaml::from_str::<KeyMode>("email").is_err());
    }
}
