//! Box-drawn console tables.

use console::measure_text_width;

/// A simple table for console output.
#[derive(Debug)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
    column_widths: Vec<usize>,
}

impl Table {
    pub fn new<S: AsRef<str>>(headers: &[S]) -> Self {
        let headers: Vec<String> = headers.iter().map(|s| s.as_ref().to_string()).collect();
        let column_widths = headers.iter().map(|h| measure_text_width(h)).collect();

        Self {
            headers,
            rows: Vec::new(),
            column_widths,
        }
    }

    /// Add a row. Cells beyond the header count are dropped.
    pub fn add_row<S: AsRef<str>>(&mut self, row: &[S]) {
        let row: Vec<String> = row
            .iter()
            .take(self.headers.len())
            .map(|s| s.as_ref().to_string())
            .collect();

        for (width, cell) in self.column_widths.iter_mut().zip(&row) {
            *width = (*width).max(measure_text_width(cell));
        }

        self.rows.push(row);
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn render(&self) -> String {
        let mut output = String::new();

        output.push_str(&self.render_border('┌', '┬', '┐'));
        output.push('\n');
        output.push_str(&self.render_row(&self.headers));
        output.push('\n');
        output.push_str(&self.render_border('├', '┼', '┤'));
        output.push('\n');

        for row in &self.rows {
            output.push_str(&self.render_row(row));
            output.push('\n');
        }

        output.push_str(&self.render_border('└', '┴', '┘'));
        output
    }

    fn render_border(&self, left: char, mid: char, right: char) -> String {
        let segments: Vec<String> = self
            .column_widths
            .iter()
            .map(|width| "─".repeat(width + 2))
            .collect();
        format!("{}{}{}", left, segments.join(&mid.to_string()), right)
    }

    fn render_row(&self, row: &[String]) -> String {
        let mut s = String::from("│");

        for (i, width) in self.column_widths.iter().enumerate() {
            let cell = row.get(i).map(String::as_str).unwrap_or("");
            // Pad by display width so styled cells line up.
            let padding = width.saturating_sub(measure_text_width(cell));
            s.push_str(&format!(" {}{} │", cell, " ".repeat(padding)));
        }

        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_table_renders_headers() {
        let table = Table::new(&["Build Slave", "CMake"]);
        assert!(table.is_empty());
        let output = table.render();
        assert!(output.contains("Build Slave"));
        assert!(output.contains("CMake"));
    }

    #[test]
    fn rows_widen_columns() {
        let mut table = Table::new(&["Host", "CMake"]);
        table.add_row(&["alpha-build", "3.10"]);
        assert_eq!(table.row_count(), 1);
        assert_eq!(
            table.render(),
            "┌─────────────┬───────┐\n\
             │ Host        │ CMake │\n\
             ├─────────────┼───────┤\n\
             │ alpha-build │ 3.10  │\n\
             └─────────────┴───────┘"
        );
    }

    #[test]
    fn short_rows_are_padded() {
        let mut table = Table::new(&["Host", "CMake", "Ninja"]);
        table.add_row(&["beta"]);
        let output = table.render();
        assert!(output.contains("│ beta │       │       │"));
    }

    #[test]
    fn styled_cells_align_by_display_width() {
        let mut table = Table::new(&["Tool"]);
        let styled = console::style("N/A").dim().force_styling(true).to_string();
        table.add_row(&[styled.as_str()]);
        let rendered = table.render();
        let last_row = rendered.lines().nth(3).unwrap();
        assert!(last_row.ends_with("N/A\u{1b}[0m  │"));
    }
}
