//! Central `HudState` container.

use std::path::PathBuf;

use crate::consist::Train;
use crate::hud::rows::RowPaging;
use crate::hud::table::StatusTable;
use crate::state::cursor::PageCursor;
use crate::state::types::{HudTab, SavedView};

/// State shared by the event, refresh, and UI layers.
///
/// Mutated by input handling first, then by the per-frame refresh, then read
/// by the renderer; the frame loop guarantees that single-writer ordering so
/// no synchronization is needed.
#[derive(Debug)]
pub struct HudState {
    /// Current consist and train-level state.
    pub train: Train,
    /// Active HUD tab.
    pub tab: HudTab,
    /// Last tab that rendered non-blank content (persisted).
    pub last_text_tab: HudTab,
    /// Pagination cursor; survives refreshes, reset on tab switch.
    pub cursor: PageCursor,
    /// A fixed-size sub-view is pinned; row paging is disabled while set.
    pub sub_view_pinned: bool,
    /// Table built by the latest refresh for the renderer.
    pub table: StatusTable,
    /// Row paging computed by the latest refresh.
    pub row_paging: RowPaging,
    /// Whether to render the keybindings footer.
    pub show_keybinds_footer: bool,
    /// Path where the view state is persisted as JSON.
    pub view_state_path: PathBuf,
    /// Dirty flag indicating the view state needs to be saved.
    pub view_dirty: bool,
    /// Frames rendered so far; drives the demo feed.
    pub frame: u64,
}

impl Default for HudState {
    /// Construct a default state around the demo consist.
    fn default() -> Self {
        Self {
            train: Train::demo(),
            tab: HudTab::Common,
            last_text_tab: HudTab::Common,
            cursor: PageCursor::default(),
            sub_view_pinned: false,
            table: StatusTable::new(),
            row_paging: RowPaging {
                rows_per_page: 1,
                total_pages: 1,
            },
            show_keybinds_footer: true,
            view_state_path: crate::theme::view_state_path(),
            view_dirty: false,
            frame: 0,
        }
    }
}

impl HudState {
    /// Switch to `tab`, resetting the pagination cursor and marking the
    /// view state dirty for persistence.
    pub fn set_tab(&mut self, tab: HudTab) {
        if self.tab == tab {
            return;
        }
        self.tab = tab;
        self.cursor.reset(tab);
        self.sub_view_pinned = false;
        self.view_dirty = true;
    }

    /// The two persisted integers.
    pub fn saved_view(&self) -> SavedView {
        SavedView {
            active_tab: self.tab.index(),
            last_text_tab: self.last_text_tab.index(),
        }
    }

    /// Restore a persisted view. The cursor resets for the restored tab;
    /// it is never persisted itself.
    pub fn apply_saved_view(&mut self, view: SavedView) {
        self.tab = HudTab::from_index(view.active_tab);
        self.last_text_tab = HudTab::from_index(view.last_text_tab);
        self.cursor.reset(self.tab);
    }

    /// Restore the persisted view state from `view_state_path`, if present.
    pub fn load_view_state(&mut self) {
        if let Ok(s) = std::fs::read_to_string(&self.view_state_path)
            && let Ok(view) = serde_json::from_str::<SavedView>(&s)
        {
            self.apply_saved_view(view);
        }
    }

    /// Write the view state when it changed since the last flush.
    pub fn maybe_flush_view(&mut self) {
        if !self.view_dirty {
            return;
        }
        if let Ok(s) = serde_json::to_string(&self.saved_view()) {
            let _ = std::fs::write(&self.view_state_path, s);
            self.view_dirty = false;
        }
    }
}
