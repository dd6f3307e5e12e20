// src/export/range.rs

use crate::errors::{AppError, AppResult};
use crate::utils::date::month_last_day;
use chrono::NaiveDate;

/// Parse a period expression into inclusive date bounds.
///
/// `None` or `"all"` means no filter. Otherwise supports:
/// - YYYY
/// - YYYY-MM
/// - YYYY-MM-DD
/// - YYYY:YYYY
/// - YYYY-MM:YYYY-MM
/// - YYYY-MM-DD:YYYY-MM-DD
pub fn parse_period(period: Option<&str>) -> AppResult<Option<(NaiveDate, NaiveDate)>> {
    match period.map(str::trim) {
        None => Ok(None),
        Some(p) if p.eq_ignore_ascii_case("all") => Ok(None),
        Some(p) => parse_range(p).map(Some),
    }
}

pub(crate) fn parse_range(r: &str) -> AppResult<(NaiveDate, NaiveDate)> {
    let bad = || AppError::InvalidDate(format!("unsupported period '{r}'"));

    let (start, end) = match r.split_once(':') {
        Some((s, e)) => {
            let (s, e) = (s.trim(), e.trim());
            if s.len() != e.len() {
                return Err(AppError::InvalidDate(format!(
                    "start and end of '{r}' must have the same format"
                )));
            }
            (first_day(s).ok_or_else(bad)?, last_day(e).ok_or_else(bad)?)
        }
        None => (first_day(r).ok_or_else(bad)?, last_day(r).ok_or_else(bad)?),
    };

    if start > end {
        return Err(AppError::InvalidDate(format!("period '{r}' ends before it starts")));
    }
    Ok((start, end))
}

fn year_month(s: &str) -> Option<(i32, u32)> {
    let (y, m) = s.split_once('-')?;
    Some((y.parse().ok()?, m.parse().ok()?))
}

fn first_day(s: &str) -> Option<NaiveDate> {
    match s.len() {
        4 => NaiveDate::from_ymd_opt(s.parse().ok()?, 1, 1),
        7 => {
            let (y, m) = year_month(s)?;
            NaiveDate::from_ymd_opt(y, m, 1)
        }
        10 => NaiveDate::parse_from_str(s, "%Y-%m-%d").ok(),
        _ => None,
    }
}

fn last_day(s: &str) -> Option<NaiveDate> {
    match s.len() {
        4 => NaiveDate::from_ymd_opt(s.parse().ok()?, 12, 31),
        7 => {
            let (y, m) = year_month(s)?;
            NaiveDate::from_ymd_opt(y, m, month_last_day(y, m)?)
        }
        10 => NaiveDate::parse_from_str(s, "%Y-%m-%d").ok(),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn single_periods() {
        assert_eq!(parse_range("2024").unwrap(), (d("2024-01-01"), d("2024-12-31")));
        assert_eq!(parse_range("2024-02").unwrap(), (d("2024-02-01"), d("2024-02-29")));
        assert_eq!(parse_range("2024-05-01").unwrap(), (d("2024-05-01"), d("2024-05-01")));
    }

    #[test]
    fn ranges_and_all() {
        assert_eq!(
            parse_range("2024-05:2024-06").unwrap(),
            (d("2024-05-01"), d("2024-06-30"))
        );
        assert_eq!(parse_period(Some("all")).unwrap(), None);
        assert_eq!(parse_period(None).unwrap(), None);
    }

    #[test]
    fn rejects_mixed_or_reversed() {
        assert!(parse_range("2024:2024-05").is_err());
        assert!(parse_range("2024-06:2024-05").is_err());
        assert!(parse_range("2024-13").is_err());
        assert!(parse_range("May").is_err());
    }
}
