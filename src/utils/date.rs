use chrono::{Datelike, Months, NaiveDate};

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
}

/// Parse `--date`, falling back to today when absent.
pub fn date_or_today(s: Option<&String>) -> Result<NaiveDate, String> {
    match s {
        Some(raw) => parse_date(raw).ok_or_else(|| raw.to_string()),
        None => Ok(today()),
    }
}

pub fn month_last_day(y: i32, m: u32) -> Option<u32> {
    NaiveDate::from_ymd_opt(y, m, 1)?
        .checked_add_months(Months::new(1))?
        .pred_opt()
        .map(|d| d.day())
}

pub fn weekday_short(d: NaiveDate) -> String {
    d.format("%a").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leap_february() {
        assert_eq!(month_last_day(2024, 2), Some(29));
        assert_eq!(month_last_day(2100, 2), Some(28));
        assert_eq!(month_last_day(2024, 13), None);
    }

    #[test]
    fn rejects_other_layouts() {
        assert!(parse_date("2024-05-01").is_some());
        assert!(parse_date("01/05/2024").is_none());
    }
}
