/// A simple text-based table generator for the terminal board
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
    col_widths: Vec<usize>,
}

impl Table {
    /// Create a new table with the given headers
    pub fn new(headers: Vec<&str>) -> Self {
        let col_widths = headers.iter().map(|h| display_width(h)).collect();
        let headers = headers.iter().map(|h| h.to_string()).collect();
        Table {
            headers,
            rows: Vec::new(),
            col_widths,
        }
    }

    /// Add a row to the table
    pub fn add_row(&mut self, row: Vec<String>) {
        for (i, col) in row.iter().enumerate() {
            if i < self.col_widths.len() {
                self.col_widths[i] = self.col_widths[i].max(display_width(col));
            }
        }

        self.rows.push(row);
    }

    /// Render the table as a formatted string
    pub fn render(&self) -> String {
        let mut output = String::new();

        output.push_str(&self.render_row(&self.headers));
        output.push('\n');

        output.push_str(&self.render_separator());
        output.push('\n');

        for row in &self.rows {
            output.push_str(&self.render_row(row));
            output.push('\n');
        }

        output
    }

    /// Render a single row, padding by character count so `₩` and the markers line up
    fn render_row(&self, row: &[String]) -> String {
        let mut line = String::new();
        for (i, col) in row.iter().enumerate() {
            if i < self.col_widths.len() {
                let padding = self.col_widths[i].saturating_sub(display_width(col));
                line.push_str(col);
                if i < row.len() - 1 {
                    line.push_str(&" ".repeat(padding));
                    line.push_str(" | ");
                }
            }
        }
        line
    }

    /// Render a separator line
    fn render_separator(&self) -> String {
        let mut line = String::new();
        for (i, &width) in self.col_widths.iter().enumerate() {
            line.push_str(&"-".repeat(width));
            if i < self.col_widths.len() - 1 {
                line.push_str("-+-");
            }
        }
        line
    }
}

fn display_width(text: &str) -> usize {
    text.chars().count()
}
