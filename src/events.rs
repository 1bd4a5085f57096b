//! Keyboard handling for the HUD.
//!
//! Converts raw `crossterm` key events into mutations on [`HudState`]: tab
//! switching, row/column/locomotive paging, full-screen toggle, and quit.
//! All handlers are synchronous; paging commands clamp inside the cursor and
//! out-of-range presses are silent no-ops. Gating lives here: row paging is
//! disabled while a fixed-size sub-view is pinned, and locomotive paging is
//! disabled for single-locomotive consists.

use crossterm::event::{Event as CEvent, KeyCode, KeyEventKind, KeyModifiers};

use crate::state::{HudState, HudTab};

/// Dispatch a single input event, mutating [`HudState`].
///
/// Returns `true` to signal the application should exit.
pub fn handle_event(ev: CEvent, app: &mut HudState) -> bool {
    let CEvent::Key(ke) = ev else {
        return false;
    };
    if ke.kind != KeyEventKind::Press {
        return false;
    }

    match ke.code {
        KeyCode::Char('c') if ke.modifiers.contains(KeyModifiers::CONTROL) => return true,
        KeyCode::Char('q') | KeyCode::Esc => return true,

        KeyCode::Tab => app.set_tab(app.tab.next()),
        KeyCode::BackTab => app.set_tab(app.tab.prev()),
        KeyCode::Char(c @ '1'..='5') => {
            let idx = (c as usize) - ('1' as usize);
            app.set_tab(HudTab::from_index(idx));
        }

        KeyCode::PageDown => {
            if !app.sub_view_pinned {
                app.cursor.page_down();
            }
        }
        KeyCode::PageUp => app.cursor.page_up(),
        KeyCode::Right => app.cursor.page_right(),
        KeyCode::Left => app.cursor.page_left(),

        KeyCode::Char('n') | KeyCode::Char(']') => {
            if app.train.loco_paging_allowed() {
                app.cursor.next_loco();
            }
        }
        KeyCode::Char('p') | KeyCode::Char('[') => {
            if app.train.loco_paging_allowed() {
                app.cursor.prev_loco();
            }
        }

        KeyCode::Char('f') => app.cursor.toggle_full_screen(),
        KeyCode::Char('b') => {
            if app.tab == HudTab::Brake {
                app.sub_view_pinned = !app.sub_view_pinned;
            }
        }
        _ => {}
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consist::CarKind;
    use crate::state::types::LocoKind;
    use crossterm::event::{KeyEvent, KeyEventState};

    fn key(code: KeyCode) -> CEvent {
        CEvent::Key(KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        })
    }

    /// What: Quit keys end the loop, others do not
    ///
    /// - Input: `q`, `Esc`, `Ctrl+C`, and a paging key
    /// - Output: `true` for the first three, `false` otherwise
    #[test]
    fn events_quit_keys() {
        let mut app = HudState::default();
        assert!(handle_event(key(KeyCode::Char('q')), &mut app));
        assert!(handle_event(key(KeyCode::Esc), &mut app));
        let ctrl_c = CEvent::Key(KeyEvent {
            code: KeyCode::Char('c'),
            modifiers: KeyModifiers::CONTROL,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        });
        assert!(handle_event(ctrl_c, &mut app));
        assert!(!handle_event(key(KeyCode::PageDown), &mut app));
    }

    /// What: Key releases are ignored
    ///
    /// - Input: A `q` release event
    /// - Output: No exit
    #[test]
    fn events_ignores_release() {
        let mut app = HudState::default();
        let release = CEvent::Key(KeyEvent {
            code: KeyCode::Char('q'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        });
        assert!(!handle_event(release, &mut app));
    }

    /// What: Tab keys cycle tabs and digits jump directly
    ///
    /// - Input: `Tab`, then `4`
    /// - Output: Consist tab, then Brake tab
    #[test]
    fn events_tab_switching() {
        let mut app = HudState::default();
        handle_event(key(KeyCode::Tab), &mut app);
        assert_eq!(app.tab, HudTab::Consist);
        handle_event(key(KeyCode::Char('4')), &mut app);
        assert_eq!(app.tab, HudTab::Brake);
    }

    /// What: Row paging is gated by the pinned sub-view
    ///
    /// - Input: PageDown with and without the pin
    /// - Output: No movement while pinned, movement after unpinning
    #[test]
    fn events_page_down_gated_by_pin() {
        let mut app = HudState::default();
        app.cursor.total_row_pages = 3;
        app.sub_view_pinned = true;
        handle_event(key(KeyCode::PageDown), &mut app);
        assert_eq!(app.cursor.row_page, 1);
        app.sub_view_pinned = false;
        handle_event(key(KeyCode::PageDown), &mut app);
        assert_eq!(app.cursor.row_page, 2);
    }

    /// What: Locomotive paging is a permanent no-op for one locomotive
    ///
    /// - Input: A single-locomotive consist and repeated Next/Prev presses
    /// - Output: `loco_page` and its total never move
    #[test]
    fn events_single_loco_paging_disabled() {
        let mut app = HudState::default();
        app.train
            .cars
            .retain(|c| !matches!(c.kind, CarKind::Loco(LocoKind::Electric)));
        assert_eq!(app.train.locomotive_count(), 1);
        let before = app.cursor;
        for _ in 0..4 {
            handle_event(key(KeyCode::Char('n')), &mut app);
            handle_event(key(KeyCode::Char('p')), &mut app);
        }
        assert_eq!(app.cursor, before);
    }

    /// What: The pin toggle only applies on the Brake tab
    ///
    /// - Input: `b` on Common, then `b` on Brake
    /// - Output: Unpinned, then pinned
    #[test]
    fn events_pin_only_on_brake_tab() {
        let mut app = HudState::default();
        handle_event(key(KeyCode::Char('b')), &mut app);
        assert!(!app.sub_view_pinned);
        app.set_tab(HudTab::Brake);
        handle_event(key(KeyCode::Char('b')), &mut app);
        assert!(app.sub_view_pinned);
    }
}
