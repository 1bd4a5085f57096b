//! Status table grid and the cell grid builder.
//!
//! A [`StatusTable`] is a sparse 2-D grid of optional cells rebuilt from
//! scratch on every display refresh. Writes beyond the current bounds grow
//! the grid; it never shrinks, and absent cells render blank. The builder
//! assembles a table from heterogeneous status producers, emitting a header
//! row whenever a producer's header differs from the previously emitted one.

use crate::state::types::{StatusCell, StatusLine};

/// Sparse 2-D grid of formatted text cells addressed by `(row, col)`.
#[derive(Clone, Debug, Default)]
pub struct StatusTable {
    rows: Vec<Vec<Option<StatusCell>>>,
    /// Number of leading header rows emitted by the builder.
    header_rows: usize,
}

impl StatusTable {
    /// Empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Write a cell, growing the grid as needed. Never shrinks.
    pub fn set(&mut self, row: usize, col: usize, cell: StatusCell) {
        if self.rows.len() <= row {
            self.rows.resize_with(row + 1, Vec::new);
        }
        let r = &mut self.rows[row];
        if r.len() <= col {
            r.resize_with(col + 1, || None);
        }
        r[col] = Some(cell);
    }

    /// Write a plain-severity text cell.
    pub fn set_text(&mut self, row: usize, col: usize, text: impl Into<String>) {
        self.set(row, col, StatusCell::plain(text));
    }

    /// Write a whole line starting at column 0 of `row`.
    pub fn set_line(&mut self, row: usize, line: StatusLine) {
        for (col, cell) in line.cells.into_iter().enumerate() {
            self.set(row, col, cell);
        }
    }

    /// Read a cell; `None` for anything outside the written grid.
    pub fn cell(&self, row: usize, col: usize) -> Option<&StatusCell> {
        self.rows.get(row).and_then(|r| r.get(col))?.as_ref()
    }

    /// Number of rows the grid has grown to.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Widest row, in cells.
    pub fn col_count(&self) -> usize {
        self.rows.iter().map(Vec::len).max().unwrap_or(0)
    }

    /// Number of leading header rows (set by the builder).
    pub fn header_rows(&self) -> usize {
        self.header_rows
    }

    /// Record how many leading rows are headers.
    pub fn set_header_rows(&mut self, n: usize) {
        self.header_rows = n;
    }

    /// Number of content rows below the headers.
    pub fn content_rows(&self) -> usize {
        self.row_count().saturating_sub(self.header_rows)
    }

    /// Materialize a row as a [`StatusLine`], filling absent cells with
    /// blanks so column indices stay aligned.
    pub fn line(&self, row: usize) -> StatusLine {
        let Some(r) = self.rows.get(row) else {
            return StatusLine::new();
        };
        StatusLine {
            cells: r
                .iter()
                .map(|c| c.clone().unwrap_or_default())
                .collect(),
        }
    }

    /// True when nothing has been written at all.
    pub fn is_blank(&self) -> bool {
        self.rows
            .iter()
            .all(|r| r.iter().all(|c| c.as_ref().is_none_or(|c| c.text.is_empty())))
    }
}

/// A per-entity status producer consumed by the grid builder.
///
/// Producers return structured cells rather than preformatted delimited
/// strings, so the builder never re-parses display text.
pub trait StatusSource {
    /// Column headers appropriate to this producer (e.g. the air-brake and
    /// vacuum-brake header sets differ).
    fn header(&self) -> Vec<&'static str>;

    /// Current status line, or `None` when the entity has nothing to report.
    fn status(&self) -> Option<StatusLine>;
}

/// Assemble a table from an ordered set of producers.
///
/// A header row is emitted before the first entity and again whenever a
/// producer's header set differs from the previously emitted one;
/// consecutive entities sharing a header get it once. A producer returning
/// `None` still consumes a row, which renders blank.
pub fn build_table(sources: &[&dyn StatusSource]) -> StatusTable {
    let mut table = StatusTable::new();
    let mut row = 0usize;
    let mut last_header: Option<Vec<&'static str>> = None;
    let mut header_rows = 0usize;

    for src in sources {
        let header = src.header();
        if last_header.as_ref() != Some(&header) {
            for (col, h) in header.iter().enumerate() {
                table.set_text(row, col, *h);
            }
            if row == 0 {
                header_rows = 1;
            }
            last_header = Some(header);
            row += 1;
        }
        match src.status() {
            Some(line) => table.set_line(row, line),
            None => {
                // Blank row, not an error: grow the grid without content.
                table.set_text(row, 0, "");
            }
        }
        row += 1;
    }

    table.set_header_rows(header_rows);
    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::types::Severity;

    struct Fake {
        header: Vec<&'static str>,
        status: Option<StatusLine>,
    }

    impl StatusSource for Fake {
        fn header(&self) -> Vec<&'static str> {
            self.header.clone()
        }
        fn status(&self) -> Option<StatusLine> {
            self.status.clone()
        }
    }

    /// What: Writes beyond bounds grow the grid and never shrink it
    ///
    /// - Input: A write at (5, 3) then a write at (0, 0)
    /// - Output: Row/col counts reflect the furthest write
    #[test]
    fn table_grows_never_shrinks() {
        let mut t = StatusTable::new();
        t.set(5, 3, StatusCell::plain("x"));
        assert_eq!(t.row_count(), 6);
        assert_eq!(t.col_count(), 4);
        t.set_text(0, 0, "y");
        assert_eq!(t.row_count(), 6);
        assert_eq!(t.col_count(), 4);
        assert!(t.cell(2, 2).is_none());
    }

    /// What: Absent cells materialize as blanks with column alignment kept
    ///
    /// - Input: A row with only column 2 written
    /// - Output: `line()` yields three cells, first two empty
    #[test]
    fn table_line_fills_blanks() {
        let mut t = StatusTable::new();
        t.set(0, 2, StatusCell::with_severity("BC 55", Severity::Caution));
        let line = t.line(0);
        assert_eq!(line.len(), 3);
        assert_eq!(line.cells[0].text, "");
        assert_eq!(line.cells[2].text, "BC 55");
        assert!(t.line(9).is_empty());
    }

    /// What: Consecutive producers with identical headers share one header row
    ///
    /// - Input: Two air-brake cars then one vacuum-brake car
    /// - Output: Exactly two header rows, at the expected positions
    #[test]
    fn builder_dedups_consecutive_headers() {
        let air = vec!["Car", "BC", "BP"];
        let vac = vec!["Car", "Vac"];
        let a = Fake {
            header: air.clone(),
            status: Some(StatusLine::from_fields(["1001", "0", "90"])),
        };
        let b = Fake {
            header: air.clone(),
            status: Some(StatusLine::from_fields(["1002", "0", "90"])),
        };
        let c = Fake {
            header: vac,
            status: Some(StatusLine::from_fields(["1003", "21"])),
        };
        let t = build_table(&[&a, &b, &c]);
        // header, car, car, header, car
        assert_eq!(t.row_count(), 5);
        assert_eq!(t.cell(0, 1).map(|c| c.text.as_str()), Some("BC"));
        assert_eq!(t.cell(1, 0).map(|c| c.text.as_str()), Some("1001"));
        assert_eq!(t.cell(2, 0).map(|c| c.text.as_str()), Some("1002"));
        assert_eq!(t.cell(3, 1).map(|c| c.text.as_str()), Some("Vac"));
        assert_eq!(t.cell(4, 0).map(|c| c.text.as_str()), Some("1003"));
        assert_eq!(t.header_rows(), 1);
    }

    /// What: A producer with no status yields a blank row, not an error
    ///
    /// - Input: Producer returning `None` between two reporting producers
    /// - Output: Middle row exists and is blank
    #[test]
    fn builder_missing_producer_renders_blank_row() {
        let h = vec!["Car", "BC"];
        let a = Fake {
            header: h.clone(),
            status: Some(StatusLine::from_fields(["1001", "0"])),
        };
        let b = Fake {
            header: h.clone(),
            status: None,
        };
        let c = Fake {
            header: h,
            status: Some(StatusLine::from_fields(["1003", "12"])),
        };
        let t = build_table(&[&a, &b, &c]);
        assert_eq!(t.row_count(), 4);
        assert_eq!(t.cell(2, 0).map(|c| c.text.as_str()), Some(""));
        assert_eq!(t.cell(3, 0).map(|c| c.text.as_str()), Some("1003"));
    }
}
