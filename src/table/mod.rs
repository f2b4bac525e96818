//! ASCII box table formatter
//!
//! Turns rows of values into fixed-width lines for the plaintext output:
//!
//! ```text
//! +-----------+------------+
//! | SERVICES  |  DOWNTIME  |
//! +-----------+------------+
//! | Service A | 2AM to 3AM |
//! +-----------+------------+
//! ```
//!
//! Cells longer than the wrap width are word-wrapped onto extra physical
//! lines. Structured tables and tables found in free-form markdown both go
//! through [`format`].

mod wrap;

pub use wrap::wrap;

use crate::error::{MissiveError, Result};
use crate::models::{Alignment, Table};

/// Default maximum content width of a column before wrapping
pub const DEFAULT_WRAP_WIDTH: usize = 30;

/// A column of a formatted table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    /// Header label, shown upper-cased
    pub label: String,
    /// Alignment of the data cells
    pub align: Alignment,
}

impl Column {
    pub fn new(label: impl Into<String>, align: Alignment) -> Self {
        Self {
            label: label.into(),
            align,
        }
    }
}

/// Format `rows` under `columns` as box-drawn lines
///
/// Every row must have exactly one value per column.
pub fn format(columns: &[Column], rows: &[Vec<String>], wrap_width: usize) -> Result<Vec<String>> {
    if columns.is_empty() {
        return Ok(Vec::new());
    }

    for (index, row) in rows.iter().enumerate() {
        if row.len() != columns.len() {
            return Err(MissiveError::TableWidth {
                row: index + 1,
                expected: columns.len(),
                found: row.len(),
            });
        }
    }

    let headers: Vec<String> = columns.iter().map(|c| c.label.to_uppercase()).collect();
    let wrapped: Vec<Vec<Vec<String>>> = rows
        .iter()
        .map(|row| row.iter().map(|cell| wrap(cell, wrap_width)).collect())
        .collect();

    let mut widths: Vec<usize> = headers.iter().map(|h| char_len(h)).collect();
    for row in &wrapped {
        for (width, fragments) in widths.iter_mut().zip(row) {
            for fragment in fragments {
                *width = (*width).max(char_len(fragment));
            }
        }
    }
    for width in &mut widths {
        *width += 2;
    }

    let separator = separator_line(&widths);
    let mut lines = Vec::with_capacity(rows.len() * 2 + 4);

    lines.push(separator.clone());
    let mut header = String::from("|");
    for (label, &width) in headers.iter().zip(&widths) {
        header.push_str(&center(label, width));
        header.push('|');
    }
    lines.push(header);
    lines.push(separator.clone());

    for row in &wrapped {
        let height = row.iter().map(Vec::len).max().unwrap_or(1);
        for index in 0..height {
            let mut line = String::from("|");
            for ((fragments, &width), column) in row.iter().zip(&widths).zip(columns) {
                let fragment = fragments.get(index).map(String::as_str).unwrap_or("");
                line.push(' ');
                line.push_str(&align(fragment, width - 2, column.align));
                line.push(' ');
                line.push('|');
            }
            lines.push(line);
        }
    }

    if !rows.is_empty() {
        lines.push(separator);
    }

    Ok(lines)
}

/// Format a structured table
///
/// The first row's keys define the columns; every later row must carry the
/// same keys in the same order.
pub fn format_table(table: &Table, wrap_width: usize) -> Result<Vec<String>> {
    let keys = table.keys();

    for (index, row) in table.data.iter().enumerate().skip(1) {
        let row_keys: Vec<&str> = row.iter().map(|e| e.key.as_str()).collect();
        if row_keys != keys {
            return Err(MissiveError::TableShape {
                row: index + 1,
                expected: keys.join(", "),
                found: row_keys.join(", "),
            });
        }
    }

    let columns: Vec<Column> = keys
        .iter()
        .map(|key| Column::new(*key, table.columns.alignment(key)))
        .collect();
    let rows: Vec<Vec<String>> = table
        .data
        .iter()
        .map(|row| row.iter().map(|e| e.value.clone()).collect())
        .collect();

    format(&columns, &rows, wrap_width)
}

fn char_len(s: &str) -> usize {
    s.chars().count()
}

fn separator_line(widths: &[usize]) -> String {
    let mut line = String::from("+");
    for &width in widths {
        line.push_str(&"-".repeat(width));
        line.push('+');
    }
    line
}

fn align(text: &str, width: usize, alignment: Alignment) -> String {
    let pad = " ".repeat(width.saturating_sub(char_len(text)));
    match alignment {
        Alignment::Left => format!("{}{}", text, pad),
        Alignment::Right => format!("{}{}", pad, text),
    }
}

fn center(text: &str, width: usize) -> String {
    let total = width.saturating_sub(char_len(text));
    let left = total / 2;
    format!("{}{}{}", " ".repeat(left), text, " ".repeat(total - left))
}
