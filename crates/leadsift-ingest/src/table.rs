//! CSV to text-table rendering.
//!
//! The first CSV record is the header. Rows are rendered under a 0-based
//! row-index column, every column right-aligned to its widest cell and
//! separated by two spaces, so each CSV row stays on exactly one line of the
//! output. Missing or empty cells render as `NaN`; newlines, carriage
//! returns and tabs inside quoted cells are written as `\n`, `\r` and `\t`.

use std::io::Read;
use std::path::Path;

const MISSING: &str = "NaN";
const COLUMN_GAP: &str = "  ";

/// Parse a CSV file and render it as a text table.
pub fn extract_csv(path: &Path) -> Result<String, String> {
    let file = std::fs::File::open(path).map_err(|e| e.to_string())?;
    render_csv(file)
}

/// Parse CSV from a reader and render it as a text table.
///
/// Rows shorter than the header are padded with `NaN`; a row longer than the
/// header is an error.
pub fn render_csv<R: Read>(reader: R) -> Result<String, String> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let headers: Vec<String> = csv_reader
        .headers()
        .map_err(|e| e.to_string())?
        .iter()
        .map(escape_cell)
        .collect();
    if headers.is_empty() {
        return Err("No columns to parse from file".to_string());
    }

    let mut rows = Vec::new();
    for (index, record) in csv_reader.records().enumerate() {
        let record = record.map_err(|e| e.to_string())?;
        if record.len() > headers.len() {
            // Line numbers are 1-based and count the header line.
            return Err(format!(
                "Expected {} fields in line {}, saw {}",
                headers.len(),
                index + 2,
                record.len()
            ));
        }
        let mut row: Vec<String> = record
            .iter()
            .map(|cell| {
                if cell.is_empty() {
                    MISSING.to_string()
                } else {
                    escape_cell(cell)
                }
            })
            .collect();
        row.resize(headers.len(), MISSING.to_string());
        rows.push(row);
    }

    Ok(render_table(&headers, &rows))
}

/// Render headers and rows as a right-aligned text table with a row index.
///
/// A table with no rows renders as a short summary listing its columns.
pub fn render_table(headers: &[String], rows: &[Vec<String>]) -> String {
    if rows.is_empty() {
        return format!(
            "Empty DataFrame\nColumns: [{}]\nIndex: []",
            headers.join(", ")
        );
    }

    let index_labels: Vec<String> = (0..rows.len()).map(|i| i.to_string()).collect();
    let index_width = index_labels.iter().map(|l| width(l)).max().unwrap_or(0);

    let column_widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(col, header)| {
            rows.iter()
                .filter_map(|row| row.get(col))
                .map(|cell| width(cell))
                .chain(std::iter::once(width(header)))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let mut lines = Vec::with_capacity(rows.len() + 1);

    let mut header_line = " ".repeat(index_width);
    for (header, &w) in headers.iter().zip(&column_widths) {
        header_line.push_str(COLUMN_GAP);
        header_line.push_str(&pad_left(header, w));
    }
    lines.push(header_line);

    for (label, row) in index_labels.iter().zip(rows) {
        let mut line = pad_right(label, index_width);
        for (cell, &w) in row.iter().zip(&column_widths) {
            line.push_str(COLUMN_GAP);
            line.push_str(&pad_left(cell, w));
        }
        lines.push(line);
    }

    lines.join("\n")
}

/// Escape the characters that would break a cell across output lines.
fn escape_cell(cell: &str) -> String {
    let mut out = String::with_capacity(cell.len());
    for c in cell.chars() {
        match c {
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            _ => out.push(c),
        }
    }
    out
}

fn width(s: &str) -> usize {
    s.chars().count()
}

fn pad_left(s: &str, w: usize) -> String {
    format!("{}{}", " ".repeat(w.saturating_sub(width(s))), s)
}

fn pad_right(s: &str, w: usize) -> String {
    format!("{}{}", s, " ".repeat(w.saturating_sub(width(s))))
}
