//! Plain column table for CLI outputs.
//! Widths are computed on visible text, so colored cells stay aligned.

use unicode_width::UnicodeWidthStr;

pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
    /// Visible text per cell, ANSI aside, used for width computation.
    plain_rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new<S: Into<String>>(headers: Vec<S>) -> Self {
        Self {
            headers: headers.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
            plain_rows: Vec::new(),
        }
    }

    /// Add a row. `plain` must match `cells` with ANSI escapes removed.
    pub fn add_row(&mut self, cells: Vec<String>, plain: Vec<String>) {
        self.plain_rows.push(plain);
        self.rows.push(cells);
    }

    pub fn render(&self) -> String {
        let mut widths: Vec<usize> = self
            .headers
            .iter()
            .map(|h| UnicodeWidthStr::width(h.as_str()))
            .collect();

        for row in &self.plain_rows {
            for (i, cell) in row.iter().enumerate() {
                widths[i] = widths[i].max(UnicodeWidthStr::width(cell.as_str()));
            }
        }

        let mut out = String::new();

        for (i, h) in self.headers.iter().enumerate() {
            out.push_str(h);
            out.push_str(&" ".repeat(widths[i] - UnicodeWidthStr::width(h.as_str()) + 2));
        }
        out.push('\n');

        for (i, w) in widths.iter().enumerate() {
            out.push_str(&"-".repeat(*w));
            if i + 1 < widths.len() {
                out.push_str("  ");
            }
        }
        out.push('\n');

        for (row, plain) in self.rows.iter().zip(&self.plain_rows) {
            for (i, cell) in row.iter().enumerate() {
                out.push_str(cell);
                let pad = widths[i] - UnicodeWidthStr::width(plain[i].as_str()) + 2;
                out.push_str(&" ".repeat(pad));
            }
            out.push('\n');
        }

        out
    }
}
