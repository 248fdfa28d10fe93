/// A simple left-aligned text table for console output
pub struct Table {
    rows: Vec<Vec<String>>,
    col_widths: Vec<usize>,
    separator: String,
}

impl Table {
    /// Create an empty table with `columns` columns, joined by `separator`
    pub fn new(columns: usize, separator: &str) -> Self {
        Table {
            rows: Vec::new(),
            col_widths: vec![0; columns],
            separator: separator.to_string(),
        }
    }

    /// Add a row to the table
    pub fn add_row(&mut self, row: Vec<&str>) {
        let row_strings: Vec<String> = row.iter().map(|s| s.to_string()).collect();

        // Update column widths if needed
        for (i, col) in row_strings.iter().enumerate() {
            if i < self.col_widths.len() {
                self.col_widths[i] = self.col_widths[i].max(col.chars().count());
            }
        }

        self.rows.push(row_strings);
    }

    /// Render every row, one per line
    pub fn render(&self) -> String {
        let mut output = String::new();
        for row in &self.rows {
            output.push_str(&self.render_row(row));
            output.push('\n');
        }
        output
    }

    /// Render a single row, padding every column except the last
    fn render_row(&self, row: &[String]) -> String {
        let mut line = String::new();
        let columns = row.len().min(self.col_widths.len());
        for (i, col) in row.iter().take(columns).enumerate() {
            if i + 1 < columns {
                let width = self.col_widths[i];
                line.push_str(&format!("{:<width$}", col, width = width));
                line.push_str(&self.separator);
            } else {
                line.push_str(col);
            }
        }
        line
    }
}
