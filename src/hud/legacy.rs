//! Ingestion of legacy tab-delimited producer strings.
//!
//! Older producers emit one string per entity: fields separated by tabs with
//! an optional trailing three-character color sentinel. This module converts
//! such strings into structured [`StatusLine`]s so the rest of the engine
//! never re-parses display text. Parsing never fails: a string with no
//! delimiters degrades to a single trailing cell.

use crate::state::types::{Severity, StatusCell, StatusLine};

/// Parse a legacy tab-delimited status string.
///
/// Inputs: `raw` producer string, e.g. `"1002\t55 psi\t90 psi\t!!!"`.
///
/// Output: a [`StatusLine`]. A recognized trailing sentinel is stripped and
/// its severity applied to every cell of the line; a malformed string (no
/// tabs) becomes a single cell.
pub fn parse_status_line(raw: &str) -> StatusLine {
    let mut fields: Vec<&str> = raw.split('\t').collect();

    let mut severity = Severity::Normal;
    if let Some(last) = fields.last()
        && let Some(sev) = Severity::from_sentinel(last.trim())
    {
        severity = sev;
        fields.pop();
    }

    StatusLine {
        cells: fields
            .into_iter()
            .map(|f| StatusCell::with_severity(f, severity))
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// What: Tab-delimited string with a trailing sentinel parses and colors
    ///
    /// - Input: Three fields plus `"!!!"`
    /// - Output: Three Critical cells, sentinel stripped
    #[test]
    fn legacy_sentinel_stripped_and_applied() {
        let line = parse_status_line("1002\tBC 55\tBP 90\t!!!");
        assert_eq!(line.len(), 3);
        assert!(line.cells.iter().all(|c| c.severity == Severity::Critical));
        assert_eq!(line.cells[2].text, "BP 90");
    }

    /// What: A string without delimiters degrades to one trailing cell
    ///
    /// - Input: Plain text, no tabs
    /// - Output: Single Normal cell holding the whole string
    #[test]
    fn legacy_malformed_string_is_single_cell() {
        let line = parse_status_line("no delimiters here");
        assert_eq!(line.len(), 1);
        assert_eq!(line.cells[0].text, "no delimiters here");
        assert_eq!(line.cells[0].severity, Severity::Normal);
    }

    /// What: A lone sentinel string strips to an empty line
    ///
    /// - Input: Just `"$$$"`
    /// - Output: No cells left after stripping
    #[test]
    fn legacy_lone_sentinel() {
        let line = parse_status_line("$$$");
        assert!(line.is_empty());
    }

    /// What: Sentinel-looking text in a middle field is left alone
    ///
    /// - Input: `"!!!"` as a middle field, plain last field
    /// - Output: Normal severity, all fields kept
    #[test]
    fn legacy_sentinel_only_matches_trailing_field() {
        let line = parse_status_line("a\t!!!\tb");
        assert_eq!(line.len(), 3);
        assert_eq!(line.cells[1].text, "!!!");
        assert!(line.cells.iter().all(|c| c.severity == Severity::Normal));
    }
}
