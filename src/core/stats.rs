use crate::ui::messages::{header, info};
use crate::utils::colors::{CYAN, RESET};
use crate::utils::date::weekday_short;
use crate::utils::formatting::{bar, bold};
use chrono::NaiveDate;
use std::collections::BTreeMap;

const BAR_WIDTH: usize = 30;

pub struct StatsLogic;

impl StatsLogic {
    /// One line per date: `YYYY-MM-DD Day  count  bar`.
    pub fn lines(per_date: &BTreeMap<NaiveDate, usize>) -> Vec<String> {
        let max = per_date.values().copied().max().unwrap_or(0);
        let count_w = max.to_string().len();

        per_date
            .iter()
            .map(|(date, n)| {
                format!(
                    "{} {}  {:>count_w$}  {}",
                    date.format("%Y-%m-%d"),
                    weekday_short(*date),
                    n,
                    bar(*n, max, BAR_WIDTH),
                )
            })
            .collect()
    }

    pub fn print(per_date: &BTreeMap<NaiveDate, usize>) {
        if per_date.is_empty() {
            info("The ledger is empty.");
            return;
        }

        header("Attendance per day");
        for line in Self::lines(per_date) {
            println!("{CYAN}{line}{RESET}");
        }

        let total: usize = per_date.values().sum();
        println!();
        println!(
            "{} {} records over {} days",
            bold("Total:"),
            total,
            per_date.len()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lines_follow_date_order() {
        let mut per_date = BTreeMap::new();
        per_date.insert(NaiveDate::from_ymd_opt(2024, 5, 2).unwrap(), 1);
        per_date.insert(NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(), 2);

        let lines = StatsLogic::lines(&per_date);
        assert!(lines[0].starts_with("2024-05-01 Wed  2"));
        assert!(lines[1].starts_with("2024-05-02 Thu  1"));
        assert_eq!(lines[0].chars().filter(|c| *c == '█').count(), BAR_WIDTH);
    }
}
