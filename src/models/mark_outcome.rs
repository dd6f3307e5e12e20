use chrono::NaiveDate;

/// Result of a single `mark` call. Both variants are normal outcomes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MarkOutcome {
    Marked {
        student_id: String,
        name: String,
        date: NaiveDate,
        time: String,
    },
    AlreadyMarked {
        student_id: String,
        date: NaiveDate,
    },
}

impl MarkOutcome {
    pub fn is_marked(&self) -> bool {
        matches!(self, MarkOutcome::Marked { .. })
    }
}
