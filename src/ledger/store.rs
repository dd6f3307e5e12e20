//! CSV-backed attendance ledger.

use crate::errors::{AppError, AppResult};
use crate::ledger::schema::{
    self, CANONICAL_COLUMNS, COL_DATE, COL_IMAGE, COL_NAME, COL_STUDENT_ID, COL_TIME,
    Reconciliation,
};
use crate::models::{AttendanceRecord, KeyMode, MarkOutcome, RosterEntry};
use crate::utils::time::parse_time;
use chrono::NaiveDate;
use std::collections::BTreeMap;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// A key that appears more than once in a loaded ledger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateKey {
    pub identity: String,
    pub date: NaiveDate,
    pub count: usize,
}

/// Owns the in-memory table and its backing file.
///
/// Rows are kept in file order. The only write path is `mark`, which appends
/// one row and persists the whole table.
#[derive(Debug)]
pub struct LedgerStore {
    pub(super) path: PathBuf,
    pub(super) key_mode: KeyMode,
    pub(super) records: Vec<AttendanceRecord>,
    pub(super) reconciliation: Reconciliation,
}

impl LedgerStore {
    /// Load the ledger at `path`, or start an empty one if the file is absent.
    ///
    /// Columns are reconciled against the canonical set here, once.
    pub fn load(path: impl AsRef<Path>, key_mode: KeyMode) -> AppResult<Self> {
        let path = path.as_ref().to_path_buf();

        if !path.exists() {
            return Ok(Self {
                path,
                key_mode,
                records: Vec::new(),
                reconciliation: Reconciliation::default(),
            });
        }

        let mut rdr = csv::ReaderBuilder::new()
            .trim(csv::Trim::Headers)
            .from_path(&path)
            .map_err(|e| AppError::storage(&path, format!("cannot open ledger: {e}")))?;

        let headers = rdr
            .headers()
            .map_err(|e| AppError::storage(&path, format!("cannot read header: {e}")))?
            .clone();

        let (columns, reconciliation) = schema::reconcile(&headers);

        let mut records = Vec::new();
        for (i, row) in rdr.records().enumerate() {
            let line = i + 1;
            let row = row.map_err(|e| AppError::storage(&path, format!("row {line}: {e}")))?;

            let raw_date = columns.value(&row, COL_DATE);
            let date = NaiveDate::parse_from_str(raw_date, "%Y-%m-%d").map_err(|_| {
                AppError::storage(&path, format!("row {line}: invalid Date '{raw_date}'"))
            })?;

            // An absent Time column reads as empty; anything else must parse.
            let raw_time = columns.value(&row, COL_TIME);
            if !raw_time.trim().is_empty() && parse_time(raw_time).is_none() {
                return Err(AppError::storage(
                    &path,
                    format!("row {line}: invalid Time '{raw_time}'"),
                ));
            }

            records.push(AttendanceRecord::new(
                columns.value(&row, COL_STUDENT_ID),
                columns.value(&row, COL_NAME),
                date,
                raw_time,
                columns.value(&row, COL_IMAGE),
            ));
        }

        Ok(Self {
            path,
            key_mode,
            records,
            reconciliation,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn key_mode(&self) -> KeyMode {
        self.key_mode
    }

    pub fn reconciliation(&self) -> &Reconciliation {
        &self.reconciliation
    }

    pub fn records(&self) -> &[AttendanceRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// True if `identity` already has a row on `date` under the active key.
    ///
    /// An empty identity never matches: blank cells are not a key.
    pub fn is_marked(&self, identity: &str, date: NaiveDate) -> bool {
        if identity.is_empty() {
            return false;
        }
        self.records
            .iter()
            .any(|r| r.date == date && r.identity(self.key_mode) == identity)
    }

    /// Record one attendance event unless the key is already present.
    ///
    /// On a duplicate nothing is written. If persisting fails the appended
    /// row is rolled back so memory and disk stay in step.
    pub fn mark(
        &mut self,
        student_id: &str,
        name: &str,
        date: NaiveDate,
        time: &str,
        image_ref: &str,
    ) -> AppResult<MarkOutcome> {
        let candidate = AttendanceRecord::new(student_id.trim(), name.trim(), date, time, image_ref);

        let identity = candidate.identity(self.key_mode);
        if identity.is_empty() {
            return Err(AppError::InvalidIdentity(format!(
                "{} must not be empty",
                self.key_mode.column()
            )));
        }

        if self.is_marked(identity, date) {
            return Ok(MarkOutcome::AlreadyMarked {
                student_id: candidate.student_id,
                date,
            });
        }

        self.records.push(candidate);
        if let Err(e) = self.persist() {
            self.records.pop();
            return Err(e);
        }

        let rec = &self.records[self.records.len() - 1];
        Ok(MarkOutcome::Marked {
            student_id: rec.student_id.clone(),
            name: rec.name.clone(),
            date: rec.date,
            time: rec.time.clone(),
        })
    }

    /// All records, or only those on `date`, in insertion order.
    pub fn query(&self, date: Option<NaiveDate>) -> Vec<AttendanceRecord> {
        match date {
            Some(d) => self.query_range(Some((d, d))),
            None => self.query_range(None),
        }
    }

    /// Records whose date falls in `[from, to]`, in insertion order.
    pub fn query_range(&self, bounds: Option<(NaiveDate, NaiveDate)>) -> Vec<AttendanceRecord> {
        self.records
            .iter()
            .filter(|r| match bounds {
                Some((from, to)) => r.date >= from && r.date <= to,
                None => true,
            })
            .cloned()
            .collect()
    }

    /// Rows per date. Keys come back in date order.
    pub fn aggregate(&self) -> BTreeMap<NaiveDate, usize> {
        let mut out = BTreeMap::new();
        for r in &self.records {
            *out.entry(r.date).or_insert(0) += 1;
        }
        out
    }

    /// The full table in its persisted CSV form.
    pub fn export(&self) -> AppResult<Vec<u8>> {
        encode_csv(&self.records)
    }

    /// Keys that already occur more than once (legacy or hand-edited files).
    pub fn duplicates(&self) -> Vec<DuplicateKey> {
        let mut counts: BTreeMap<(NaiveDate, String), usize> = BTreeMap::new();
        for r in &self.records {
            let identity = r.identity(self.key_mode);
            if identity.is_empty() {
                continue;
            }
            *counts.entry((r.date, identity.to_string())).or_insert(0) += 1;
        }

        counts
            .into_iter()
            .filter(|(_, n)| *n > 1)
            .map(|((date, identity), count)| DuplicateKey {
                identity,
                date,
                count,
            })
            .collect()
    }

    /// Roster entries with no row on `date`, in roster order.
    ///
    /// An entry with a blank key cannot be matched and is reported absent.
    pub fn absentees(&self, roster: &[RosterEntry], date: NaiveDate) -> Vec<RosterEntry> {
        roster
            .iter()
            .filter(|e| !self.is_marked(e.identity(self.key_mode), date))
            .cloned()
            .collect()
    }

    /// Write the whole table next to the ledger, then swap it in.
    pub(super) fn persist(&self) -> AppResult<()> {
        if let Some(dir) = self.path.parent()
            && !dir.as_os_str().is_empty()
        {
            fs::create_dir_all(dir)?;
        }

        let tmp = temp_path(&self.path);
        {
            let mut wtr = csv::Writer::from_path(&tmp)
                .map_err(|e| AppError::storage(&tmp, format!("cannot create: {e}")))?;
            write_table(&mut wtr, &self.records)?;
        }

        fs::rename(&tmp, &self.path).map_err(|e| {
            let _ = fs::remove_file(&tmp);
            AppError::storage(&self.path, format!("cannot replace ledger: {e}"))
        })
    }

    /// Write an empty table with the canonical header if no file exists yet.
    pub fn create_if_missing(&self) -> AppResult<bool> {
        if self.path.exists() {
            return Ok(false);
        }
        self.persist()?;
        Ok(true)
    }
}

/// Encode `records` with the canonical header, as stored on disk.
pub fn encode_csv(records: &[AttendanceRecord]) -> AppResult<Vec<u8>> {
    let mut wtr = csv::Writer::from_writer(Vec::new());
    write_table(&mut wtr, records)?;
    wtr.into_inner()
        .map_err(|e| AppError::Export(format!("CSV buffer error: {e}")))
}

fn write_table<W: Write>(wtr: &mut csv::Writer<W>, records: &[AttendanceRecord]) -> AppResult<()> {
    wtr.write_record(CANONICAL_COLUMNS)?;
    for r in records {
        wtr.write_record(r.to_row())?;
    }
    wtr.flush()?;
    Ok(())
}

fn temp_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_else(|| "ledger.csv".into());
    name.push(".tmp");
    path.with_file_name(name)
}
