//! Color palette, severity mapping, and config-directory paths.
//!
//! The palette is a small, opinionated set of colors used throughout the
//! HUD. Severities map onto the accent colors here so the mapping lives in
//! one table-driven place and the renderer stays mechanical.

use ratatui::style::Color;
use std::path::PathBuf;

use crate::state::types::Severity;

/// Application theme palette used by rendering code.
pub struct Theme {
    /// Primary background color for the canvas.
    pub base: Color,
    /// Slightly lighter background layer used behind panels.
    pub mantle: Color,
    /// Subtle surface color for borders of unfocused components.
    pub surface1: Color,
    /// Muted overlay color for titles and secondary chrome.
    pub overlay1: Color,
    /// Primary foreground text color.
    pub text: Color,
    /// Secondary text for less prominent content.
    pub subtext0: Color,
    /// Accent for emphasized headings and the active tab.
    pub mauve: Color,
    /// Accent for header rows and identifiers.
    pub lavender: Color,
    /// Info severity (cyan family).
    pub sapphire: Color,
    /// Caution severity.
    pub yellow: Color,
    /// Critical severity.
    pub red: Color,
    /// Positive state color.
    pub green: Color,
}

/// Construct a [`Color::Rgb`] from an 8-bit RGB triplet.
fn hex(rgb: (u8, u8, u8)) -> Color {
    Color::Rgb(rgb.0, rgb.1, rgb.2)
}

/// Return the application's default theme palette.
pub fn theme() -> Theme {
    Theme {
        base: hex((0x1e, 0x1e, 0x2e)),
        mantle: hex((0x18, 0x18, 0x25)),
        surface1: hex((0x45, 0x47, 0x5a)),
        overlay1: hex((0x7f, 0x84, 0x9c)),
        text: hex((0xcd, 0xd6, 0xf4)),
        subtext0: hex((0xa6, 0xad, 0xc8)),
        mauve: hex((0xcb, 0xa6, 0xf7)),
        lavender: hex((0xb4, 0xbe, 0xfe)),
        sapphire: hex((0x74, 0xc7, 0xec)),
        yellow: hex((0xf9, 0xe2, 0xaf)),
        red: hex((0xf3, 0x8b, 0xa8)),
        green: hex((0xa6, 0xe3, 0xa1)),
    }
}

impl Theme {
    /// Color for a status cell's severity.
    pub fn severity_color(&self, severity: Severity) -> Color {
        match severity {
            Severity::Normal => self.text,
            Severity::Info => self.sapphire,
            Severity::Caution => self.yellow,
            Severity::Critical => self.red,
        }
    }
}

/// Configuration directory (`$XDG_CONFIG_HOME/railhud` or
/// `~/.config/railhud`), created on first use.
pub fn config_dir() -> PathBuf {
    let base = std::env::var_os("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .or_else(|| std::env::var_os("HOME").map(|h| PathBuf::from(h).join(".config")))
        .unwrap_or_else(|| PathBuf::from("."));
    let dir = base.join("railhud");
    let _ = std::fs::create_dir_all(&dir);
    dir
}

/// Log directory under the config directory.
pub fn logs_dir() -> PathBuf {
    let dir = config_dir().join("logs");
    let _ = std::fs::create_dir_all(&dir);
    dir
}

/// Path of the persisted view state (active tab, last non-blank tab).
pub fn view_state_path() -> PathBuf {
    config_dir().join("view_state.json")
}

/// Path of the user settings file.
pub fn settings_path() -> PathBuf {
    config_dir().join("railhud.conf")
}

/// User settings loaded at startup from a key=value `.conf` file.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Settings {
    /// Refresh interval of the HUD feed tick, milliseconds.
    pub refresh_ms: u64,
    /// Default tab index when no view state is persisted.
    pub default_tab: usize,
    /// Whether to render the keybindings footer.
    pub show_keybinds_footer: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            refresh_ms: 200,
            default_tab: 0,
            show_keybinds_footer: true,
        }
    }
}

impl Settings {
    /// Parse settings from `.conf` text; unknown keys are ignored and
    /// malformed values keep their defaults.
    pub fn parse(text: &str) -> Self {
        let mut s = Self::default();
        for line in text.lines() {
            if crate::util::skip_comment_or_empty(line) {
                continue;
            }
            let Some((key, value)) = crate::util::parse_key_value(line) else {
                continue;
            };
            match key.as_str() {
                "refresh_ms" => {
                    if let Ok(v) = value.parse::<u64>() {
                        s.refresh_ms = v.clamp(50, 5000);
                    }
                }
                "default_tab" => {
                    if let Ok(v) = value.parse::<usize>() {
                        s.default_tab = v;
                    }
                }
                "show_keybinds_footer" => {
                    s.show_keybinds_footer = matches!(value.as_str(), "true" | "1" | "yes");
                }
                _ => {}
            }
        }
        s
    }

    /// Load settings from the default path, falling back to defaults when
    /// the file is absent or unreadable.
    pub fn load() -> Self {
        match std::fs::read_to_string(settings_path()) {
            Ok(text) => Self::parse(&text),
            Err(_) => Self::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// What: Settings parsing honors known keys, comments, and clamping
    ///
    /// - Input: A conf body with comments, valid keys, and an out-of-range
    ///   refresh value
    /// - Output: Parsed values with refresh clamped into its band
    #[test]
    fn theme_settings_parse() {
        let text = "# comment\nrefresh_ms = 10\ndefault_tab=3\nshow_keybinds_footer = no\nunknown = x\n";
        let s = Settings::parse(text);
        assert_eq!(s.refresh_ms, 50);
        assert_eq!(s.default_tab, 3);
        assert!(!s.show_keybinds_footer);
    }

    /// What: Empty settings text yields pure defaults
    ///
    /// - Input: Empty string
    /// - Output: `Settings::default()`
    #[test]
    fn theme_settings_defaults() {
        assert_eq!(Settings::parse(""), Settings::default());
    }

    /// What: Every severity maps to a distinct palette color
    ///
    /// - Input: All four severities
    /// - Output: Four distinct colors
    #[test]
    fn theme_severity_colors_distinct() {
        let th = theme();
        let colors = [
            th.severity_color(Severity::Normal),
            th.severity_color(Severity::Info),
            th.severity_color(Severity::Caution),
            th.severity_color(Severity::Critical),
        ];
        for i in 0..colors.len() {
            for j in (i + 1)..colors.len() {
                assert_ne!(colors[i], colors[j]);
            }
        }
    }
}
