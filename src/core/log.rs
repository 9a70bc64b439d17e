use crate::db::pool::DbPool;
use crate::db::queries::load_log;
use crate::errors::AppResult;
use ansi_term::Colour;
use regex::Regex;
use std::sync::LazyLock;

static ANSI_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\x1B\[[0-9;]*[mK]").expect("static ANSI pattern"));

fn strip_ansi(s: &str) -> String {
    ANSI_RE.replace_all(s, "").into_owned()
}

/// Colour for each audited operation
fn color_for_operation(op: &str) -> Colour {
    match op {
        "clock_in" | "add" => Colour::Green,
        "clock_out" => Colour::Cyan,
        "del" | "reset" => Colour::Red,
        "edit" => Colour::Yellow,
        "config" => Colour::Blue,
        "init" => Colour::RGB(255, 153, 51),
        _ => Colour::White,
    }
}

const OP_WIDTH_MAX: usize = 40;

pub struct LogLogic;

impl LogLogic {
    /// Render the audit log, one line per row.
    pub fn render(pool: &DbPool) -> AppResult<Vec<String>> {
        let rows = load_log(pool)?;

        let id_w = rows
            .iter()
            .map(|(id, ..)| id.to_string().len())
            .max()
            .unwrap_or(1);
        let date_w = rows.iter().map(|(_, d, ..)| d.len()).max().unwrap_or(10);
        let op_w = rows
            .iter()
            .map(|(_, _, op, target, _)| op.len() + target.len() + 3)
            .max()
            .unwrap_or(10)
            .min(OP_WIDTH_MAX);

        let mut lines = Vec::with_capacity(rows.len());
        for (id, raw_date, operation, target, message) in rows {
            let date = chrono::DateTime::parse_from_rfc3339(&raw_date)
                .map(|dt| dt.format("%FT%T%:z").to_string())
                .unwrap_or(raw_date);

            let mut op_target = color_for_operation(&operation).paint(&operation).to_string();
            if !target.is_empty() {
                op_target.push_str(&format!(" ({target})"));
            }

            let padding = " ".repeat(op_w.saturating_sub(strip_ansi(&op_target).len()));

            lines.push(format!(
                "{:>id_w$}: {:<date_w$} | {}{} => {}",
                id,
                date,
                op_target,
                padding,
                message,
                id_w = id_w,
                date_w = date_w
            ));
        }

        Ok(lines)
    }
}
