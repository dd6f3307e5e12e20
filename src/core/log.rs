use crate::errors::{AppError, AppResult};
use crate::journal::JournalPool;
use crate::ui::messages::info;
use crate::utils::formatting::truncate;
use ansi_term::Colour;
use regex::Regex;

/// Visible width of the `operation (target)` column.
const OP_MAX: usize = 60;

fn ansi_pattern() -> AppResult<Regex> {
    Regex::new(r"\x1B\[[0-9;]*[mK]").map_err(|e| AppError::Other(e.to_string()))
}

fn strip_ansi(re: &Regex, s: &str) -> String {
    re.replace_all(s, "").into_owned()
}

/// ANSI colour for a journal operation
fn color_for_operation(op: &str) -> Colour {
    match op {
        "mark" => Colour::Green,
        "duplicate" => Colour::Yellow,
        "notify_sent" => Colour::Cyan,
        "notify_failed" => Colour::Red,
        "export" | "backup" => Colour::Blue,
        "rekey" | "migration_applied" => Colour::Purple,
        "init" => Colour::RGB(255, 153, 51),
        _ => Colour::White,
    }
}

struct Entry {
    id: i64,
    date: String,
    operation: String,
    op_target: String,
    message: String,
}

pub struct LogLogic;

impl LogLogic {
    pub fn print_log(pool: &JournalPool) -> AppResult<()> {
        let mut stmt = pool.conn.prepare_cached(
            "SELECT id, date, operation, target, message FROM log ORDER BY id ASC",
        )?;

        let rows = stmt.query_map([], |row| {
            let id: i64 = row.get(0)?;
            let raw_date: String = row.get(1)?;
            let operation: String = row.get(2)?;
            let target: Option<String> = row.get(3)?;
            let message: String = row.get(4)?;

            let date = chrono::DateTime::parse_from_rfc3339(&raw_date)
                .map(|dt| dt.format("%FT%T%:z").to_string())
                .unwrap_or(raw_date);

            let target = target.unwrap_or_default();
            let op_target = if target.is_empty() {
                operation.clone()
            } else {
                format!("{operation} ({target})")
            };

            Ok(Entry {
                id,
                date,
                operation,
                op_target,
                message,
            })
        })?;

        let mut entries = Vec::new();
        for r in rows {
            entries.push(r?);
        }

        if entries.is_empty() {
            info("The journal is empty.");
            return Ok(());
        }

        let re = ansi_pattern()?;

        let op_w = entries
            .iter()
            .map(|e| e.op_target.chars().count())
            .max()
            .unwrap_or(10)
            .min(OP_MAX);
        let id_w = entries
            .iter()
            .map(|e| e.id.to_string().len())
            .max()
            .unwrap_or(1);
        let date_w = entries.iter().map(|e| e.date.len()).max().unwrap_or(10);

        println!("📜 Journal:\n");

        for e in entries {
            let color = color_for_operation(&e.operation);

            // Cut the plain text first, then colour only the operation word.
            let visible = truncate(&e.op_target, OP_MAX);
            let colored = match visible.split_once(' ') {
                Some((op_word, rest)) => format!("{} {}", color.paint(op_word), rest),
                None => color.paint(visible.as_str()).to_string(),
            };

            let padding = " ".repeat(op_w.saturating_sub(strip_ansi(&re, &colored).chars().count()));

            println!(
                "{:>id_w$}: {:<date_w$} | {}{} => {}",
                e.id,
                e.date,
                colored,
                padding,
                e.message,
                id_w = id_w,
                date_w = date_w
            );
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_colour_codes() {
        let re = ansi_pattern().unwrap();
        let painted = Colour::Green.paint("mark").to_string();
        assert_ne!(painted, "mark");
        assert_eq!(strip_ansi(&re, &painted), "mark");
    }

    #[test]
    fn prints_seeded_journal() {
        let pool = JournalPool::in_memory().unwrap();
        crate::journal::jlog(&pool.conn, "mark", "S1", "Alice marked").unwrap();
        LogLogic::print_log(&pool).unwrap();
    }
}
