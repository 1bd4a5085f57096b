//! Library entry for railhud exposing core logic for integration tests.

pub mod args;
pub mod consist;
pub mod events;
pub mod hud;
pub mod state;
pub mod theme;
pub mod ui;
pub mod util;
