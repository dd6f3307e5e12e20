//! Ledger column layout and load-time reconciliation.
//!
//! Older dashboards wrote different column sets (`Name, Roll/ID, Date, Time`,
//! then `StudentID, Name, Date, Time`). Whatever the file carries is mapped
//! onto the canonical set once, at load: missing columns read as empty,
//! unknown columns are dropped on the next write.

use csv::StringRecord;

/// Canonical columns, in persisted order.
pub const CANONICAL_COLUMNS: [&str; 5] = ["StudentID", "Name", "Date", "Time", "Image"];

pub const COL_STUDENT_ID: usize = 0;
pub const COL_NAME: usize = 1;
pub const COL_DATE: usize = 2;
pub const COL_TIME: usize = 3;
pub const COL_IMAGE: usize = 4;

/// Header spellings from earlier releases that carry a canonical column.
const COLUMN_ALIASES: &[(&str, &str)] = &[("Roll/ID", "StudentID")];

/// What reconciliation changed relative to the file on disk.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Reconciliation {
    pub added: Vec<&'static str>,
    pub dropped: Vec<String>,
    pub renamed: Vec<(String, &'static str)>,
}

impl Reconciliation {
    pub fn is_clean(&self) -> bool {
        self.added.is_empty() && self.dropped.is_empty() && self.renamed.is_empty()
    }

    /// A file without any id column can only have been keyed by name.
    pub fn lacks_student_id(&self) -> bool {
        self.added.contains(&CANONICAL_COLUMNS[COL_STUDENT_ID])
    }
}

/// Position of each canonical column inside a file's rows.
#[derive(Debug, Clone, Default)]
pub struct ColumnMap {
    indices: [Option<usize>; 5],
}

impl ColumnMap {
    /// Value of canonical column `col` in `row`, empty when the file lacks it.
    pub fn value<'r>(&self, row: &'r StringRecord, col: usize) -> &'r str {
        self.indices[col]
            .and_then(|i| row.get(i))
            .map(str::trim)
            .unwrap_or("")
    }
}

fn canonical_index(name: &str) -> Option<usize> {
    CANONICAL_COLUMNS.iter().position(|c| *c == name)
}

fn resolve_alias(name: &str) -> Option<&'static str> {
    COLUMN_ALIASES
        .iter()
        .find(|(alias, _)| *alias == name)
        .map(|(_, canonical)| *canonical)
}

/// Map a file header onto the canonical columns.
///
/// First occurrence wins when two headers resolve to the same column.
pub fn reconcile(headers: &StringRecord) -> (ColumnMap, Reconciliation) {
    let mut map = ColumnMap::default();
    let mut report = Reconciliation::default();

    for (i, raw) in headers.iter().enumerate() {
        let name = raw.trim();
        if name.is_empty() {
            continue;
        }

        let (target, alias) = match canonical_index(name) {
            Some(idx) => (Some(idx), None),
            None => match resolve_alias(name) {
                Some(canon) => (canonical_index(canon), Some(canon)),
                None => (None, None),
            },
        };

        match target {
            Some(idx) if map.indices[idx].is_none() => {
                map.indices[idx] = Some(i);
                if let Some(canon) = alias {
                    report.renamed.push((name.to_string(), canon));
                }
            }
            _ => report.dropped.push(name.to_string()),
        }
    }

    for (idx, col) in CANONICAL_COLUMNS.iter().enumerate() {
        if map.indices[idx].is_none() {
            report.added.push(*col);
        }
    }

    (map, report)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header(cols: &[&str]) -> StringRecord {
        StringRecord::from(cols.to_vec())
    }

    #[test]
    fn canonical_header_is_clean() {
        let (_, rep) = reconcile(&header(&CANONICAL_COLUMNS));
        assert!(rep.is_clean());
    }

    #[test]
    fn missing_image_is_added_and_extra_dropped() {
        let h = header(&["StudentID", "Name", "Date", "Time", "Confidence"]);
        let (map, rep) = reconcile(&h);

        assert_eq!(rep.added, vec!["Image"]);
        assert_eq!(rep.dropped, vec!["Confidence".to_string()]);

        let row = StringRecord::from(vec!["S1", "Alice", "2024-05-01", "09:00:00", "0.93"]);
        assert_eq!(map.value(&row, COL_IMAGE), "");
        assert_eq!(map.value(&row, COL_NAME), "Alice");
    }

    #[test]
    fn roll_id_header_feeds_student_id() {
        let h = header(&["Name", "Roll/ID", "Date", "Time"]);
        let (map, rep) = reconcile(&h);

        assert_eq!(rep.renamed, vec![("Roll/ID".to_string(), "StudentID")]);
        assert!(!rep.lacks_student_id());

        let row = StringRecord::from(vec!["Test User", "101", "2024-05-01", "10:00:00"]);
        assert_eq!(map.value(&row, COL_STUDENT_ID), "101");
    }

    #[test]
    fn name_keyed_layout_lacks_student_id() {
        let (_, rep) = reconcile(&header(&["Name", "Date", "Time"]));
        assert!(rep.lacks_student_id());
        assert_eq!(rep.added, vec!["StudentID", "Image"]);
    }

    #[test]
    fn headers_are_trimmed_and_first_duplicate_wins() {
        let h = header(&[" StudentID ", "Name", "Roll/ID", "Date"]);
        let (map, rep) = reconcile(&h);

        assert_eq!(rep.dropped, vec!["Roll/ID".to_string()]);
        let row = StringRecord::from(vec!["S9", "Bob", "77", "2024-01-02"]);
        assert_eq!(map.value(&row, COL_STUDENT_ID), "S9");
    }
}
