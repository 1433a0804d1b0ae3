use crate::db::log::{LogEntry, load_log};
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::utils::formatting::{truncate, visible_len};
use ansi_term::Colour;

const OP_MAX_WIDTH: usize = 60;

/// Colour of the operation column
fn color_for_operation(op: &str) -> Colour {
    match op {
        "checkin" => Colour::Green,
        "clear" => Colour::Red,
        "rollover" => Colour::Yellow,
        "migration_applied" => Colour::Purple,
        "load_error" | "save_error" => Colour::RGB(255, 80, 80),
        "init" => Colour::RGB(255, 153, 51),
        _ => Colour::White,
    }
}

/// "operation (target)" with only the operation coloured, cut to 60
/// visible columns.
fn op_target_cell(entry: &LogEntry) -> String {
    let plain = if entry.target.is_empty() {
        entry.operation.clone()
    } else {
        format!("{} ({})", entry.operation, entry.target)
    };
    let visible = truncate(&plain, OP_MAX_WIDTH);
    let color = color_for_operation(&entry.operation);

    match visible.split_once(' ') {
        Some((op_word, rest)) => format!("{} {}", color.paint(op_word), rest),
        None => color.paint(visible.as_str()).to_string(),
    }
}

pub struct LogLogic;

impl LogLogic {
    /// Render the internal log, one line per entry.
    pub fn render(entries: &[LogEntry]) -> Vec<String> {
        let cells: Vec<String> = entries.iter().map(op_target_cell).collect();

        let op_w = cells.iter().map(|c| visible_len(c)).max().unwrap_or(10);
        let id_w = entries
            .iter()
            .map(|e| e.id.to_string().len())
            .max()
            .unwrap_or(1);
        let date_w = entries.iter().map(|e| e.date.len()).max().unwrap_or(10);

        entries
            .iter()
            .zip(cells)
            .map(|(e, cell)| {
                let date = chrono::DateTime::parse_from_rfc3339(&e.date)
                    .map(|dt| dt.format("%FT%T%:z").to_string())
                    .unwrap_or_else(|_| e.date.clone());
                let padding = " ".repeat(op_w.saturating_sub(visible_len(&cell)));
                format!(
                    "{:>id_w$}: {:<date_w$} | {}{} => {}",
                    e.id,
                    date,
                    cell,
                    padding,
                    e.message,
                    id_w = id_w,
                    date_w = date_w
                )
            })
            .collect()
    }

    pub fn print_log(pool: &DbPool) -> AppResult<()> {
        let entries = load_log(&pool.conn)?;

        println!("📜 Internal log:\n");
        if entries.is_empty() {
            println!("(empty)");
            return Ok(());
        }

        for line in Self::render(&entries) {
            println!("{}", line);
        }
        Ok(())
    }
}
