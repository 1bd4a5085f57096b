//! HUD text pagination engine.
//!
//! Takes the current consist's status records, builds a [`table::StatusTable`]
//! for the active tab, fits it to the viewport ([`rows`], [`columns`]), and
//! updates the pagination cursor's totals. The whole cycle runs once per
//! rendered frame on the update path; cursor mutations from input are applied
//! before the rebuild in the same frame, so navigation feels immediate.

pub mod columns;
pub mod legacy;
pub mod rows;
pub mod table;

use crate::state::app_state::HudState;
use crate::state::types::StatusLine;

/// Viewport geometry supplied each frame by the front end.
///
/// Measured in pixels with font cell metrics; the TUI front end builds one
/// from the terminal area with 1x1 cells. Derived counts clamp to at least 1
/// so a degenerate viewport never divides by zero.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Viewport {
    /// Display area width in pixels.
    pub width_px: u32,
    /// Display area height in pixels.
    pub height_px: u32,
    /// Average glyph advance of the active font, in pixels.
    pub glyph_width_px: u32,
    /// Line height of the active font, in pixels.
    pub line_height_px: u32,
}

impl Viewport {
    /// Viewport for a character-cell terminal area.
    pub fn from_cells(width: u16, height: u16) -> Self {
        Self {
            width_px: u32::from(width),
            height_px: u32::from(height),
            glyph_width_px: 1,
            line_height_px: 1,
        }
    }

    /// Text rows the viewport can hold, at least 1.
    pub fn rows_visible(&self) -> usize {
        (self.height_px / self.line_height_px.max(1)).max(1) as usize
    }

    /// Character columns per line, at least 1.
    pub fn chars_per_line(&self) -> usize {
        (self.width_px / self.glyph_width_px.max(1)).max(1) as usize
    }
}

/// Rebuild the active tab's table and recompute pagination totals.
///
/// Runs once per frame after input handling. Updates the cursor's totals
/// from the new content and viewport, clamps its current indices, and
/// records the last tab that produced non-blank content.
pub fn refresh(app: &mut HudState, viewport: &Viewport) {
    let table = crate::consist::table_for_tab(&app.train, app.tab, app.cursor.loco_page);

    let paging = rows::row_paging(
        table.content_rows(),
        table.header_rows(),
        viewport.rows_visible(),
    );
    app.cursor.total_row_pages = paging.total_pages;
    app.cursor.total_loco_pages = app.train.locomotive_count();
    app.cursor.clamp_to_totals();

    // Column totals come from the rows actually in view: headers plus the
    // current row page. Different rows may need different page counts; the
    // worst case wins.
    let lines = visible_lines(&table, &paging, app.cursor.row_page);
    app.cursor.total_col_pages =
        columns::total_column_pages(lines.iter(), 0, viewport.chars_per_line());
    app.cursor.clamp_to_totals();

    if !table.is_blank() {
        app.last_text_tab = app.tab;
    }
    app.row_paging = paging;
    app.table = table;
}

/// Header rows plus the content rows of the given row page, materialized.
pub fn visible_lines(
    table: &table::StatusTable,
    paging: &rows::RowPaging,
    row_page: usize,
) -> Vec<StatusLine> {
    let hdr = table.header_rows();
    let (start, end) = paging.page_bounds(row_page, table.content_rows());
    let mut lines: Vec<StatusLine> = (0..hdr).map(|r| table.line(r)).collect();
    lines.extend((start..end).map(|r| table.line(hdr + r)));
    lines
}
