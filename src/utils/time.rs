//! Time utilities: parsing HH:MM[:SS] and stamping the current time.

use crate::errors::{AppError, AppResult};
use chrono::NaiveTime;

pub const TIME_FORMAT: &str = "%H:%M:%S";

/// Accepts `HH:MM:SS` or `HH:MM` (seconds default to 00).
pub fn parse_time(t: &str) -> Option<NaiveTime> {
    let t = t.trim();
    NaiveTime::parse_from_str(t, TIME_FORMAT)
        .or_else(|_| NaiveTime::parse_from_str(t, "%H:%M"))
        .ok()
}

pub fn now_time() -> NaiveTime {
    chrono::Local::now().time()
}

pub fn format_time(t: NaiveTime) -> String {
    t.format(TIME_FORMAT).to_string()
}

/// Parse `--time`, falling back to the current time, as `HH:MM:SS`.
pub fn time_or_now(input: Option<&String>) -> AppResult<String> {
    match input {
        Some(s) => parse_time(s)
            .map(format_time)
            .ok_or_else(|| AppError::InvalidTime(s.to_string())),
        None => Ok(format_time(now_time())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_to_seconds() {
        assert_eq!(time_or_now(Some(&"9:05".to_string())).unwrap(), "09:05:00");
        assert_eq!(
            time_or_now(Some(&"09:05:07".to_string())).unwrap(),
            "09:05:07"
        );
        assert!(time_or_now(Some(&"25:00".to_string())).is_err());
    }
}
