//! Table rendering utilities for CLI outputs.
//! Widths are measured on the visible text, so colored cells line up.

use crate::utils::formatting::{pad_left, pad_right, separator_line, visible_width};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Right,
}

pub struct Column {
    pub header: String,
    pub align: Align,
}

impl Column {
    pub fn left(header: &str) -> Self {
        Self {
            header: header.to_string(),
            align: Align::Left,
        }
    }

    pub fn right(header: &str) -> Self {
        Self {
            header: header.to_string(),
            align: Align::Right,
        }
    }
}

pub struct Table {
    pub columns: Vec<Column>,
    pub rows: Vec<Vec<String>>,
    pub separator: String,
}

impl Table {
    pub fn new(columns: Vec<Column>, separator: &str) -> Self {
        Self {
            columns,
            rows: Vec::new(),
            separator: separator.to_string(),
        }
    }

    pub fn add_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    fn widths(&self) -> Vec<usize> {
        self.columns
            .iter()
            .enumerate()
            .map(|(i, col)| {
                self.rows
                    .iter()
                    .filter_map(|r| r.get(i))
                    .map(|c| visible_width(c))
                    .chain(std::iter::once(visible_width(&col.header)))
                    .max()
                    .unwrap_or(0)
            })
            .collect()
    }

    fn render_line(&self, cells: &[String], widths: &[usize]) -> String {
        let mut line = String::new();
        for (i, col) in self.columns.iter().enumerate() {
            let cell = cells.get(i).map(String::as_str).unwrap_or("");
            let padded = match col.align {
                Align::Left => pad_right(cell, widths[i]),
                Align::Right => pad_left(cell, widths[i]),
            };
            if i > 0 {
                line.push_str("  ");
            }
            line.push_str(&padded);
        }
        line.trim_end().to_string()
    }

    pub fn render(&self) -> String {
        let widths = self.widths();
        let total = widths.iter().sum::<usize>() + 2 * widths.len().saturating_sub(1);

        let headers: Vec<String> = self.columns.iter().map(|c| c.header.clone()).collect();

        let mut out = String::new();
        out.push_str(&self.render_line(&headers, &widths));
        out.push('\n');
        out.push_str(&separator_line(&self.separator, total.max(1)));
        out.push('\n');

        for row in &self.rows {
            out.push_str(&self.render_line(row, &widths));
            out.push('\n');
        }

        out
    }
}
