//! The 2-D pagination cursor driven by navigation commands.
//!
//! The cursor tracks the current row-page, column-page, and locomotive-page
//! indices plus a full-screen flag. Totals are recomputed every refresh from
//! the viewport and content sizes; navigation clamps against those totals and
//! never wraps. There is exactly one cursor per running viewer and it is
//! passed explicitly into the refresh and input-handling paths.

use crate::state::types::HudTab;

/// Mutable pagination state for the HUD window.
///
/// Invariant: every current index stays within `[lower bound, total]`;
/// `row_page` is 1-based, `col_page` uses 0 for the default (unpaginated)
/// view and 1-based values for explicit column pages, and `loco_page` uses 0
/// for the all-locomotives aggregate view.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageCursor {
    /// Current row page, 1-based.
    pub row_page: usize,
    /// Total row pages for the current content and viewport.
    pub total_row_pages: usize,
    /// Current column page; 0 means the default unpaginated view.
    pub col_page: usize,
    /// Total column pages; 0 when every row fits the viewport width.
    pub total_col_pages: usize,
    /// Current locomotive page; 0 means the aggregate view.
    pub loco_page: usize,
    /// Total locomotive pages (number of locomotives in the consist).
    pub total_loco_pages: usize,
    /// Whether the HUD covers the whole terminal instead of its band.
    pub full_screen: bool,
}

impl Default for PageCursor {
    fn default() -> Self {
        Self {
            row_page: 1,
            total_row_pages: 1,
            col_page: 0,
            total_col_pages: 0,
            loco_page: 0,
            total_loco_pages: 0,
            full_screen: false,
        }
    }
}

impl PageCursor {
    /// Advance one row page, clamped at the last page.
    ///
    /// Callers gate this on any pinned fixed-size sub-view; the cursor itself
    /// only clamps.
    pub fn page_down(&mut self) {
        self.row_page = (self.row_page + 1).min(self.total_row_pages.max(1));
    }

    /// Go back one row page, clamped at page 1.
    pub fn page_up(&mut self) {
        self.row_page = self.row_page.saturating_sub(1).max(1);
    }

    /// Advance one column page, clamped at the last column page.
    pub fn page_right(&mut self) {
        self.col_page = (self.col_page + 1).min(self.total_col_pages);
    }

    /// Go back one column page; 0 restores the default view.
    pub fn page_left(&mut self) {
        self.col_page = self.col_page.saturating_sub(1);
    }

    /// Advance to the next locomotive page, clamped.
    ///
    /// Callers gate this on the consist allowing locomotive paging.
    pub fn next_loco(&mut self) {
        self.loco_page = (self.loco_page + 1).min(self.total_loco_pages);
    }

    /// Go back one locomotive page; 0 is the aggregate view.
    pub fn prev_loco(&mut self) {
        self.loco_page = self.loco_page.saturating_sub(1);
    }

    /// Flip the full-screen flag and return to the first page in both axes.
    pub fn toggle_full_screen(&mut self) {
        self.full_screen = !self.full_screen;
        self.row_page = 1;
        self.col_page = 0;
    }

    /// Reset for a tab switch.
    ///
    /// Totals collapse until the next refresh recomputes them; the
    /// locomotive sub-cursor starts on the first locomotive only for the
    /// Locomotive tab.
    pub fn reset(&mut self, tab: HudTab) {
        self.row_page = 1;
        self.total_row_pages = 1;
        self.col_page = 0;
        self.total_col_pages = 0;
        self.loco_page = if tab == HudTab::Locomotive { 1 } else { 0 };
    }

    /// Clamp current indices after totals were recomputed by a refresh.
    pub fn clamp_to_totals(&mut self) {
        self.row_page = self.row_page.min(self.total_row_pages.max(1));
        self.col_page = self.col_page.min(self.total_col_pages);
        self.loco_page = self.loco_page.min(self.total_loco_pages);
    }

    /// Whether the navigation overlay should be shown at all.
    ///
    /// The overlay auto-hides unless there is something to page through, with
    /// the Locomotive tab also showing it for multi-locomotive consists and
    /// for a steam lead (whose detail view is always paged).
    pub fn controls_visible(&self, tab: HudTab, multi_loco: bool, steam_lead: bool) -> bool {
        self.total_row_pages > 1
            || self.total_col_pages > 0
            || (tab == HudTab::Locomotive && (multi_loco || steam_lead))
    }
}
