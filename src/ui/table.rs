//! Table rendering for formatted output.
//!
//! Cells may span several lines (wrapped descriptions, library lists);
//! every line of a row is padded to the tallest cell.

use console::measure_text_width;

/// A box-drawn table.
#[derive(Debug)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
    column_widths: Vec<usize>,
    row_separators: bool,
}

impl Table {
    /// Create a new table with the given headers.
    pub fn new(headers: Vec<&str>) -> Self {
        let headers: Vec<String> = headers.iter().map(|s| s.to_string()).collect();
        let column_widths = headers.iter().map(|h| cell_width(h)).collect();

        Self {
            headers,
            rows: Vec::new(),
            column_widths,
            row_separators: false,
        }
    }

    /// Draw a separator between data rows.
    pub fn with_row_separators(mut self) -> Self {
        self.row_separators = true;
        self
    }

    /// Add a row to the table. Cells beyond the header count are ignored.
    pub fn add_row(&mut self, row: Vec<&str>) {
        let row: Vec<String> = row
            .iter()
            .take(self.headers.len())
            .map(|s| s.to_string())
            .collect();

        for (i, cell) in row.iter().enumerate() {
            self.column_widths[i] = self.column_widths[i].max(cell_width(cell));
        }

        self.rows.push(row);
    }

    /// Get the number of rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Check if the table is empty.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Render the table as a string.
    pub fn render(&self) -> String {
        let mut lines = Vec::new();

        lines.push(self.render_border('┌', '┬', '┐'));
        lines.extend(self.render_row(&self.headers));
        lines.push(self.render_border('├', '┼', '┤'));

        for (i, row) in self.rows.iter().enumerate() {
            if i > 0 && self.row_separators {
                lines.push(self.render_border('├', '┼', '┤'));
            }
            lines.extend(self.render_row(row));
        }

        lines.push(self.render_border('└', '┴', '┘'));
        lines.join("\n")
    }

    fn render_border(&self, left: char, mid: char, right: char) -> String {
        let segments: Vec<String> = self
            .column_widths
            .iter()
            .map(|width| "─".repeat(width + 2))
            .collect();
        format!("{}{}{}", left, segments.join(&mid.to_string()), right)
    }

    fn render_row(&self, row: &[String]) -> Vec<String> {
        let cells: Vec<Vec<&str>> = (0..self.column_widths.len())
            .map(|i| row.get(i).map(|c| c.lines().collect()).unwrap_or_default())
            .collect();
        let height = cells.iter().map(Vec::len).max().unwrap_or(0).max(1);

        (0..height)
            .map(|line| {
                let mut s = String::from("│");
                for (i, width) in self.column_widths.iter().enumerate() {
                    let text = cells[i].get(line).copied().unwrap_or("");
                    let padding = width.saturating_sub(measure_text_width(text));
                    s.push(' ');
                    s.push_str(text);
                    s.push_str(&" ".repeat(padding));
                    s.push_str(" │");
                }
                s
            })
            .collect()
    }
}

/// Display width of the widest line of a cell.
fn cell_width(cell: &str) -> usize {
    cell.lines().map(measure_text_width).max().unwrap_or(0)
}
