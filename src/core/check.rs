use crate::ledger::{DuplicateKey, LedgerStore};
use crate::ui::messages::{bullet, header, info, success, warning};

/// What `check` found in a loaded ledger.
#[derive(Debug)]
pub struct CheckReport {
    pub rows: usize,
    pub schema_clean: bool,
    pub duplicates: Vec<DuplicateKey>,
}

impl CheckReport {
    pub fn is_healthy(&self) -> bool {
        self.schema_clean && self.duplicates.is_empty()
    }
}

pub struct CheckLogic;

impl CheckLogic {
    /// Report schema reconciliation and key collisions. Nothing is written.
    pub fn run(store: &LedgerStore) -> CheckReport {
        header(format!("Ledger check: {}", store.path().display()));

        info(format!(
            "{} rows, keyed by ({}, Date)",
            store.len(),
            store.key_mode().column()
        ));

        let rec = store.reconciliation();
        if rec.is_clean() {
            success("Columns match the canonical layout.");
        } else {
            warning("Columns differ from the canonical layout (fixed on the next write):");
            for col in &rec.added {
                bullet(format!("missing column '{}' reads as empty", col));
            }
            for col in &rec.dropped {
                bullet(format!("extra column '{}' will be dropped", col));
            }
            for (from, to) in &rec.renamed {
                bullet(format!("column '{}' is read as '{}'", from, to));
            }
            if rec.lacks_student_id() {
                bullet("no student ids: use `key_mode: name` or run `rekey --map FILE`");
            }
        }

        let duplicates = store.duplicates();
        if duplicates.is_empty() {
            success("No duplicate keys.");
        } else {
            warning(format!("{} duplicate keys:", duplicates.len()));
            for d in &duplicates {
                bullet(format!("{} on {} ({} rows)", d.identity, d.date, d.count));
            }
        }

        CheckReport {
            rows: store.len(),
            schema_clean: rec.is_clean(),
            duplicates,
        }
    }
}
