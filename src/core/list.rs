use crate::models::AttendanceRecord;
use crate::ui::messages::{header, info};
use crate::utils::colors::{RESET, YELLOW};
use crate::utils::date::weekday_short;
use crate::utils::formatting::truncate;
use crate::utils::table::Table;

/// Image references can be long paths; keep the table readable.
const IMAGE_MAX: usize = 40;

pub struct ListLogic;

impl ListLogic {
    /// Render `records` as a table, in the order they were recorded.
    pub fn render(records: &[AttendanceRecord]) -> String {
        let mut table = Table::with_headers(&["#", "StudentID", "Name", "Date", "Day", "Time", "Image"]);

        for (i, r) in records.iter().enumerate() {
            table.add_row(vec![
                (i + 1).to_string(),
                placeholder(&r.student_id),
                r.name.clone(),
                r.date_str(),
                weekday_short(r.date),
                r.time.clone(),
                placeholder(&truncate(&r.image_ref, IMAGE_MAX)),
            ]);
        }

        table.render()
    }

    pub fn print(title: &str, records: &[AttendanceRecord]) {
        if records.is_empty() {
            info(format!("No attendance records for {}.", title));
            return;
        }

        header(format!("Attendance: {}", title));

        for line in Self::render(records).lines() {
            println!("{}", line.trim_end());
        }

        let missing_ids = records.iter().filter(|r| r.student_id.is_empty()).count();
        println!();
        println!("Records: {}", records.len());
        if missing_ids > 0 {
            println!("{YELLOW}Without StudentID: {missing_ids}{RESET}");
        }
    }
}

fn placeholder(value: &str) -> String {
    if value.trim().is_empty() {
        "--".to_string()
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn keeps_insertion_order() {
        let d = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
        let rows = vec![
            AttendanceRecord::new("S2", "Bob", d, "09:10:00", ""),
            AttendanceRecord::new("S1", "Alice", d, "09:00:00", "img1"),
        ];

        let out = ListLogic::render(&rows);
        let lines: Vec<&str> = out.lines().collect();
        assert!(lines[2].contains("Bob"));
        assert!(lines[3].contains("Alice"));
        assert!(lines[2].contains("Wed"));
        assert!(lines[2].trim_end().ends_with("--"));
    }
}
