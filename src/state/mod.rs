//! HUD state: the central container, the pagination cursor, and value types.

pub mod app_state;
pub mod cursor;
pub mod types;

pub use app_state::HudState;
pub use cursor::PageCursor;
pub use types::{
    BrakeSystem, HudTab, LocoKind, SavedView, Severity, StatusCell, StatusLine,
};
