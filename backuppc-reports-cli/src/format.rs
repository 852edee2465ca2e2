//! Text table rendering and output helpers shared by the commands.

use std::fmt::Write as _;

/// ANSI color code for values out of range
pub const RED: &str = "\x1b[31m";
/// ANSI bold
pub const BOLD: &str = "\x1b[1m";
/// ANSI reset
pub const RESET: &str = "\x1b[0m";

/// Widest line a rendered table may produce
pub const MAX_TABLE_WIDTH: usize = 120;

/// One table cell, optionally flagged as out of range
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    text: String,
    alert: bool,
}

impl Cell {
    /// Plain cell
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            alert: false,
        }
    }

    /// Cell highlighted when `alert` is set
    pub fn flagged(text: impl Into<String>, alert: bool) -> Self {
        Self {
            text: text.into(),
            alert,
        }
    }
}

/// Rendered line width of a bordered table with these column widths
#[must_use]
pub const fn table_width(widths: &[usize]) -> usize {
    let mut total = 1;
    let mut i = 0;
    while i < widths.len() {
        total += widths[i] + 3;
        i += 1;
    }
    total
}

/// Wraps `value` in red when it is out of range and color is enabled
#[must_use]
pub fn highlight(value: &str, out_of_range: bool, color: bool) -> String {
    if out_of_range && color {
        format!("{RED}{value}{RESET}")
    } else {
        value.to_string()
    }
}

/// Splits text into lines of at most `width` characters, breaking on
/// whitespace where possible.
#[must_use]
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let mut word: Vec<char> = word.chars().collect();
        while word.len() > width {
            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
            }
            let rest = word.split_off(width);
            lines.push(word.into_iter().collect());
            word = rest;
        }

        let current_len = current.chars().count();
        if current_len > 0 && current_len + 1 + word.len() > width {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.extend(word);
    }

    if !current.is_empty() || lines.is_empty() {
        lines.push(current);
    }
    lines
}

/// Natural column widths: the longest cell or header in each column
#[must_use]
pub fn natural_widths(header: &[&str], rows: &[Vec<Cell>]) -> Vec<usize> {
    let columns = header
        .len()
        .max(rows.iter().map(Vec::len).max().unwrap_or(0));
    (0..columns)
        .map(|i| {
            let head = header.get(i).map_or(0, |h| h.chars().count());
            rows.iter()
                .filter_map(|row| row.get(i))
                .map(|cell| cell.text.chars().count())
                .fold(head, usize::max)
        })
        .collect()
}

/// Renders a bordered table with fixed column widths.
///
/// Cells longer than their column wrap onto extra lines. Header may be
/// empty for a table of label/value pairs.
#[must_use]
pub fn render_table(header: &[&str], rows: &[Vec<Cell>], widths: &[usize], color: bool) -> String {
    let mut output = String::new();
    let rule = |fill: char| -> String {
        let mut line = String::from("+");
        for width in widths {
            line.extend(std::iter::repeat_n(fill, width + 2));
            line.push('+');
        }
        line
    };

    let _ = writeln!(output, "{}", rule('-'));
    if !header.is_empty() {
        let cells: Vec<Cell> = header.iter().map(|h| Cell::plain(*h)).collect();
        write_row(&mut output, &cells, widths, color);
        let _ = writeln!(output, "{}", rule('='));
    }
    for row in rows {
        write_row(&mut output, row, widths, color);
        let _ = writeln!(output, "{}", rule('-'));
    }

    output.trim_end().to_string()
}

fn write_row(output: &mut String, row: &[Cell], widths: &[usize], color: bool) {
    let wrapped: Vec<Vec<String>> = widths
        .iter()
        .enumerate()
        .map(|(i, width)| row.get(i).map_or_else(|| vec![String::new()], |c| wrap(&c.text, *width)))
        .collect();
    let height = wrapped.iter().map(Vec::len).max().unwrap_or(1);

    for line in 0..height {
        output.push('|');
        for (i, width) in widths.iter().enumerate() {
            let text = wrapped[i].get(line).map_or("", String::as_str);
            let pad = width.saturating_sub(text.chars().count());
            let alert = row.get(i).is_some_and(|c| c.alert);
            let _ = write!(
                output,
                " {}{} |",
                highlight(text, alert, color),
                " ".repeat(pad)
            );
        }
        output.push('\n');
    }
}

/// Escape a CSV field according to RFC 4180
#[must_use]
pub fn escape_csv_field(field: &str) -> String {
    if field.contains(',') || field.contains('"') || field.contains('\n') || field.contains('\r') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}
