use crate::db::pool::DbPool;
use crate::errors::AppResult;
use ansi_term::Colour;
use regex::Regex;

/// Maximum visible width of the "operation (target)" column.
const OP_MAX_WIDTH: usize = 60;

fn strip_ansi(re: &Regex, s: &str) -> String {
    re.replace_all(s, "").into_owned()
}

/// Restituisce il colore ANSI in base all'operazione
fn color_for_operation(op: &str) -> Colour {
    match op {
        "add" => Colour::Green,
        "del" | "clear" => Colour::Red,
        "edit" => Colour::Yellow,
        "master" | "services" => Colour::Cyan,
        "export" => Colour::Blue,
        "migration_applied" => Colour::Purple,
        "init" => Colour::RGB(255, 153, 51), // arancione
        _ => Colour::White,
    }
}

struct LogRow {
    id: i64,
    date: String,
    operation: String,
    target: String,
    message: String,
}

impl LogRow {
    fn visible_op(&self) -> String {
        let op_target = if self.target.is_empty() {
            self.operation.clone()
        } else {
            format!("{} ({})", self.operation, self.target)
        };

        if op_target.chars().count() > OP_MAX_WIDTH {
            let mut s: String = op_target.chars().take(OP_MAX_WIDTH - 3).collect();
            s.push_str("...");
            s
        } else {
            op_target
        }
    }

    /// Only the operation word is colored, the target stays plain.
    fn colored_op(&self) -> String {
        let visible = self.visible_op();
        let color = color_for_operation(&self.operation);
        match visible.split_once(' ') {
            Some((op, rest)) => format!("{} {}", color.paint(op), rest),
            None => color.paint(visible.as_str()).to_string(),
        }
    }
}

pub struct LogLogic;

impl LogLogic {
    fn load(pool: &DbPool) -> AppResult<Vec<LogRow>> {
        let mut stmt = pool.conn.prepare_cached(
            "SELECT id, date, operation, IFNULL(target, ''), message FROM log ORDER BY id ASC",
        )?;

        let rows = stmt.query_map([], |row| {
            let raw_date: String = row.get(1)?;
            let date = chrono::DateTime::parse_from_rfc3339(&raw_date)
                .map(|dt| dt.format("%FT%T%:z").to_string())
                .unwrap_or(raw_date);

            Ok(LogRow {
                id: row.get(0)?,
                date,
                operation: row.get(2)?,
                target: row.get(3)?,
                message: row.get(4)?,
            })
        })?;

        let mut out = Vec::new();
        for r in rows {
            out.push(r?);
        }
        Ok(out)
    }

    pub fn print_log(pool: &DbPool) -> AppResult<()> {
        let entries = Self::load(pool)?;

        if entries.is_empty() {
            println!("📜 Internal log is empty.");
            return Ok(());
        }

        let re = Regex::new(r"\x1B\[[0-9;]*[mK]").expect("static ANSI regex");

        let op_w = entries
            .iter()
            .map(|r| r.visible_op().chars().count())
            .max()
            .unwrap_or(10);
        let id_w = entries
            .iter()
            .map(|r| r.id.to_string().len())
            .max()
            .unwrap_or(1);
        let date_w = entries.iter().map(|r| r.date.len()).max().unwrap_or(10);

        println!("📜 Internal log:\n");

        for row in &entries {
            let colored = row.colored_op();
            // padding calcolato sulla larghezza reale SENZA ANSI
            let padding = " ".repeat(op_w.saturating_sub(strip_ansi(&re, &colored).chars().count()));

            println!(
                "{:>id_w$}: {:<date_w$} | {}{} => {}",
                row.id,
                row.date,
                colored,
                padding,
                row.message,
                id_w = id_w,
                date_w = date_w
            );
        }

        Ok(())
    }
}
