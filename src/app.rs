//! Application runtime: terminal lifecycle and the frame-driven event loop.
//!
//! The loop is single-writer by construction: input handling mutates
//! [`HudState`] first, then the draw pass rebuilds the status table against
//! the current viewport, so cursor changes are visible in the same frame.

use std::time::Duration;

/// Runtime result type.
type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

use crossterm::{
    event::{self, Event as CEvent},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use tokio::{select, sync::mpsc};

use crate::args::Args;
use crate::consist::Train;
use crate::state::{HudState, HudTab};
use crate::theme::Settings;
use crate::ui::ui;

fn setup_terminal() -> Result<()> {
    enable_raw_mode()?;
    execute!(std::io::stdout(), EnterAlternateScreen)?;
    Ok(())
}

fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    execute!(std::io::stdout(), LeaveAlternateScreen)?;
    Ok(())
}

/// Start the HUD runtime and run the main event loop.
///
/// - Loads settings, the optional snapshot, and the persisted view state
/// - Spawns the input poll thread and the feed tick task
/// - Drives rendering via `ratatui` and delegates input to `events`
///
/// Returns `Ok(())` on normal shutdown or an error if initialization fails.
pub async fn run(args: Args) -> Result<()> {
    let settings = Settings::load();

    let mut app = HudState::default();
    app.show_keybinds_footer = settings.show_keybinds_footer;
    app.set_tab(HudTab::from_index(settings.default_tab));
    app.view_dirty = false;
    if let Some(path) = &args.snapshot {
        app.train = Train::from_snapshot(path)?;
        tracing::info!(path = %path.display(), cars = app.train.cars.len(), "snapshot loaded");
    }
    app.load_view_state();

    setup_terminal()?;
    let mut terminal = Terminal::new(CrosstermBackend::new(std::io::stdout()))?;

    let (event_tx, mut event_rx) = mpsc::unbounded_channel::<CEvent>();
    std::thread::spawn(move || {
        loop {
            if let Ok(true) = event::poll(Duration::from_millis(50))
                && let Ok(ev) = event::read()
            {
                let _ = event_tx.send(ev);
            }
        }
    });

    let (tick_tx, mut tick_rx) = mpsc::unbounded_channel::<()>();
    let refresh_ms = settings.refresh_ms;
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(Duration::from_millis(refresh_ms));
        loop {
            interval.tick().await;
            if tick_tx.send(()).is_err() {
                break;
            }
        }
    });

    loop {
        let _ = terminal.draw(|f| ui(f, &mut app));

        select! {
            Some(ev) = event_rx.recv() => {
                if crate::events::handle_event(ev, &mut app) {
                    break;
                }
            }
            Some(()) = tick_rx.recv() => {
                app.frame = app.frame.wrapping_add(1);
                if !args.freeze {
                    app.train.tick(app.frame);
                }
                app.maybe_flush_view();
            }
            else => {}
        }
    }

    app.maybe_flush_view();
    restore_terminal()?;
    Ok(())
}
