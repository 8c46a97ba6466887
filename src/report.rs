//! Plain-text table rendering for rankings.
//!
//! Columns are as wide as their widest cell or header, cells are
//! left-aligned, and columns are separated by a fixed gap.
//!
//! ```
//! use u_topsis::report::Table;
//!
//! let mut table = Table::new(["Name", "Score"]);
//! table.add_row(["Mobile 3", "0.69"]);
//! table.add_row(["Mobile 12", "0.31"]);
//!
//! assert_eq!(
//!     table.render(),
//!     "Name         Score\nMobile 3     0.69\nMobile 12    0.31"
//! );
//! ```

use std::fmt;

/// Default number of spaces between columns.
pub const DEFAULT_GAP: usize = 4;

/// A header row plus data rows, rendered with aligned columns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
    gap: usize,
}

impl Table {
    /// Creates a table with the given header labels.
    pub fn new<I, S>(headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            headers: headers.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
            gap: DEFAULT_GAP,
        }
    }

    /// Sets the number of spaces between columns.
    pub fn with_gap(mut self, gap: usize) -> Self {
        self.gap = gap;
        self
    }

    /// Appends a data row.
    ///
    /// Rows shorter than the header are padded with empty cells; longer
    /// rows add unlabeled columns.
    pub fn add_row<I, S>(&mut self, cells: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.rows.push(cells.into_iter().map(Into::into).collect());
        self
    }

    /// Number of data rows (excluding the header).
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns `true` if there are no data rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    fn column_widths(&self) -> Vec<usize> {
        let n_cols = self
            .rows
            .iter()
            .map(Vec::len)
            .chain(std::iter::once(self.headers.len()))
            .max()
            .unwrap_or(0);

        let mut widths = vec![0; n_cols];
        for row in std::iter::once(&self.headers).chain(&self.rows) {
            for (w, cell) in widths.iter_mut().zip(row) {
                *w = (*w).max(cell.chars().count());
            }
        }
        widths
    }

    fn write_line(
        &self,
        f: &mut impl fmt::Write,
        cells: &[String],
        widths: &[usize],
    ) -> fmt::Result {
        let mut line = String::new();
        for (col, &width) in widths.iter().enumerate() {
            if col > 0 {
                line.extend(std::iter::repeat(' ').take(self.gap));
            }
            let cell = cells.get(col).map(String::as_str).unwrap_or("");
            line.push_str(cell);
            let pad = width - cell.chars().count();
            line.extend(std::iter::repeat(' ').take(pad));
        }
        f.write_str(line.trim_end())
    }

    /// Renders the table. Lines are joined with `\n` and carry no
    /// trailing whitespace.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let widths = self.column_widths();
        self.write_line(f, &self.headers, &widths)?;
        for row in &self.rows {
            f.write_str("\n")?;
            self.write_line(f, row, &widths)?;
        }
        Ok(())
    }
}
