//! Column fitter: split an over-wide status line into column pages.
//!
//! Cells occupy a fixed on-screen width (the font's average glyph advance
//! times [`CELL_WIDTH_CHARS`]), so fitting is a deterministic walk over cell
//! boundaries. Continuation pages repeat cell 0 (the entity identifier) as a
//! pinned leading column so every page stays self-describing; the pinned
//! repeat does not count against the page budget.

use crate::state::types::StatusLine;

/// Configured column width in characters; every cell renders at this width.
pub const CELL_WIDTH_CHARS: usize = 10;

/// Split `line` into column pages for a viewport `chars_per_line` wide.
///
/// Inputs:
/// - `line`: the cell sequence to split
/// - `reserved_chars`: leading columns already consumed on every page
///   (indent, margin)
/// - `chars_per_line`: character columns the viewport can hold (clamped to
///   at least 1)
///
/// Output: the ordered page sequence. A line that fits yields one page.
/// Pages never split a cell; pages after the first start with a clone of
/// cell 0. A lone cell wider than the budget stands alone on its page, so
/// every page carries at least one content cell and the walk terminates.
/// The function is pure: identical inputs give identical output.
pub fn column_paging(
    line: &StatusLine,
    reserved_chars: usize,
    chars_per_line: usize,
) -> Vec<StatusLine> {
    let budget = chars_per_line.max(1).saturating_sub(reserved_chars).max(1);

    if line.is_empty() {
        return vec![StatusLine::new()];
    }

    let mut pages: Vec<StatusLine> = Vec::new();
    let mut current = StatusLine::new();
    let mut used = 0usize;

    for cell in &line.cells {
        let w = CELL_WIDTH_CHARS;
        // Content cells on the current page, not counting a pinned lead.
        let content_cells = if pages.is_empty() {
            current.len()
        } else {
            current.len().saturating_sub(1)
        };
        if used + w > budget && content_cells > 0 {
            // Close at the last cell boundary that fits and pin cell 0 on
            // the next page. The pinned repeat is outside the budget.
            pages.push(current);
            current = StatusLine::new().push(line.cells[0].clone());
            used = 0;
        }
        current = current.push(cell.clone());
        used += w;
    }
    pages.push(current);
    pages
}

/// Total column pages the cursor should report for a set of rows.
///
/// Different rows may need different page counts; the worst case wins. When
/// every row fits on a single page there is nothing to page through and the
/// total is 0, which keeps the navigation overlay hidden.
pub fn total_column_pages<'a, I>(lines: I, reserved_chars: usize, chars_per_line: usize) -> usize
where
    I: IntoIterator<Item = &'a StatusLine>,
{
    let max = lines
        .into_iter()
        .map(|l| column_paging(l, reserved_chars, chars_per_line).len())
        .max()
        .unwrap_or(0);
    if max <= 1 { 0 } else { max }
}

/// The page of `line` to display for a cursor column page.
///
/// `col_page == 0` is the default view (page 1); rows needing fewer pages
/// than the cursor's current page clamp to their own last page.
pub fn page_for_cursor(
    line: &StatusLine,
    col_page: usize,
    reserved_chars: usize,
    chars_per_line: usize,
) -> StatusLine {
    let pages = column_paging(line, reserved_chars, chars_per_line);
    let idx = col_page.max(1).min(pages.len()) - 1;
    pages[idx].clone()
}
