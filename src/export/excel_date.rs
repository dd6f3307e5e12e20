// src/export/excel_date.rs

use crate::utils::time::parse_time;
use chrono::{NaiveDate, Timelike};

pub(crate) const DATE_NUM_FORMAT: &str = "yyyy-mm-dd";
pub(crate) const TIME_NUM_FORMAT: &str = "hh:mm:ss";

/// Excel serial for a calendar date (days since 1899-12-30).
pub(crate) fn date_serial(d: NaiveDate) -> f64 {
    let epoch = NaiveDate::from_ymd_opt(1899, 12, 30).unwrap_or(NaiveDate::MIN);
    (d - epoch).num_days() as f64
}

/// Excel serial for a time of day (fraction of a day), if `s` parses.
pub(crate) fn time_serial(s: &str) -> Option<f64> {
    parse_time(s).map(|t| t.num_seconds_from_midnight() as f64 / 86400.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_serials() {
        let d = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
        assert_eq!(date_serial(d), 45413.0);
        assert_eq!(time_serial("12:00:00"), Some(0.5));
        assert_eq!(time_serial("noon"), None);
    }
}
