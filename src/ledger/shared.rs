//! Single-writer handle over a `LedgerStore`.
//!
//! Every mark and every read takes the same lock, so the duplicate check and
//! the append happen as one step and readers never see a half-written table.

use crate::errors::{AppError, AppResult};
use crate::ledger::LedgerStore;
use crate::models::{AttendanceRecord, MarkOutcome};
use chrono::NaiveDate;
use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, MutexGuard};

#[derive(Debug, Clone)]
pub struct SharedLedger {
    inner: Arc<Mutex<LedgerStore>>,
}

impl SharedLedger {
    pub fn new(store: LedgerStore) -> Self {
        Self {
            inner: Arc::new(Mutex::new(store)),
        }
    }

    fn lock(&self) -> AppResult<MutexGuard<'_, LedgerStore>> {
        self.inner
            .lock()
            .map_err(|_| AppError::Other("ledger lock poisoned".into()))
    }

    pub fn mark(
        &self,
        student_id: &str,
        name: &str,
        date: NaiveDate,
        time: &str,
        image_ref: &str,
    ) -> AppResult<MarkOutcome> {
        self.lock()?.mark(student_id, name, date, time, image_ref)
    }

    pub fn query(&self, date: Option<NaiveDate>) -> AppResult<Vec<AttendanceRecord>> {
        Ok(self.lock()?.query(date))
    }

    pub fn aggregate(&self) -> AppResult<BTreeMap<NaiveDate, usize>> {
        Ok(self.lock()?.aggregate())
    }

    pub fn export(&self) -> AppResult<Vec<u8>> {
        self.lock()?.export()
    }

    /// Run `f` against the store while holding the lock.
    pub fn with_store<F, T>(&self, f: F) -> AppResult<T>
    where
        F: FnOnce(&mut LedgerStore) -> AppResult<T>,
    {
        let mut guard = self.lock()?;
        f(&mut guard)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::KeyMode;
    use std::thread;
    use tempfile::tempdir;

    #[test]
    fn concurrent_marks_for_one_key_record_once() {
        let dir = tempdir().unwrap();
        let store = LedgerStore::load(dir.path().join("a.csv"), KeyMode::StudentId).unwrap();
        let ledger = SharedLedger::new(store);
        let date = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();

        let handles: Vec<_> = (0..8)
            .map(|i| {
                let l = ledger.clone();
                thread::spawn(move || {
                    l.mark("S1", "Alice", date, &format!("09:00:0{i}"), "")
                        .unwrap()
                })
            })
            .collect();

        let marked = handles
            .into_iter()
            .map(|h| h.join().unwrap())
            .filter(MarkOutcome::is_marked)
            .count();

        assert_eq!(marked, 1);
        assert_eq!(ledger.query(Some(date)).unwrap().len(), 1);
    }

    #[test]
    fn snapshot_reads_go_through_the_lock() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("a.csv");
        let ledger = SharedLedger::new(LedgerStore::load(&path, KeyMode::StudentId).unwrap());
        let date = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();

        ledger.mark("S1", "Alice", date, "09:00:00", "img1").unwrap();
        ledger.mark("S2", "Bob", date, "09:01:00", "").unwrap();

        let bytes = ledger.export().unwrap();
        assert_eq!(bytes, std::fs::read(&path).unwrap());
        assert_eq!(ledger.aggregate().unwrap()[&date], 2);
    }
}
