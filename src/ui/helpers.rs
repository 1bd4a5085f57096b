//! UI helper utilities for cell formatting and the navigation overlay.

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};
use unicode_width::UnicodeWidthChar;

use crate::hud::columns::CELL_WIDTH_CHARS;
use crate::state::cursor::PageCursor;
use crate::state::types::{HudTab, Severity, StatusLine};
use crate::theme::Theme;

/// What: Fit cell text into the fixed cell width.
///
/// Inputs:
/// - `text`: Cell content
///
/// Output:
/// - A string of display width exactly [`CELL_WIDTH_CHARS`]: truncated at a
///   character boundary if over-wide, space-padded if narrow.
///
/// Details:
/// - Width is measured with `unicode-width`, so wide glyphs count as two
///   columns and never straddle the cell edge.
pub fn fit_cell(text: &str) -> String {
    let budget = CELL_WIDTH_CHARS.saturating_sub(1); // one column gutter
    let mut out = String::new();
    let mut used = 0usize;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        out.push(ch);
        used += w;
    }
    while used < CELL_WIDTH_CHARS {
        out.push(' ');
        used += 1;
    }
    out
}

/// Render one status line as fixed-width colored spans.
pub fn line_spans(line: &StatusLine, th: &Theme, header: bool) -> Line<'static> {
    let spans: Vec<Span<'static>> = line
        .cells
        .iter()
        .map(|c| {
            let style = if header {
                Style::default()
                    .fg(th.lavender)
                    .add_modifier(Modifier::BOLD)
            } else {
                severity_style(th, c.severity)
            };
            Span::styled(fit_cell(&c.text), style)
        })
        .collect();
    Line::from(spans)
}

/// Style for a cell severity.
pub fn severity_style(th: &Theme, severity: Severity) -> Style {
    let style = Style::default().fg(th.severity_color(severity));
    if severity == Severity::Critical {
        style.add_modifier(Modifier::BOLD)
    } else {
        style
    }
}

/// Tab bar line with the active tab highlighted.
pub fn tab_bar(th: &Theme, active: HudTab) -> Line<'static> {
    let mut spans: Vec<Span<'static>> = Vec::new();
    for (i, tab) in HudTab::ALL.iter().enumerate() {
        let style = if *tab == active {
            Style::default().fg(th.mauve).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(th.overlay1)
        };
        spans.push(Span::styled(format!(" {} {}", i + 1, tab.title()), style));
        spans.push(Span::raw(" "));
    }
    Line::from(spans)
}

/// What: Navigation overlay labels for the current cursor.
///
/// Inputs:
/// - `cursor`: Current pagination cursor
/// - `tab`: Active tab
/// - `multi_loco` / `steam_lead`: Consist properties feeding the
///   visibility rule
///
/// Output:
/// - `None` when the overlay auto-hides; otherwise spans such as
///   `"PgDn (2/5)  PgRt (1/3)  Loco (1/2)"`.
pub fn nav_labels(
    cursor: &PageCursor,
    tab: HudTab,
    multi_loco: bool,
    steam_lead: bool,
    th: &Theme,
) -> Option<Line<'static>> {
    if !cursor.controls_visible(tab, multi_loco, steam_lead) {
        return None;
    }
    let label = Style::default().fg(th.overlay1);
    let value = Style::default().fg(th.text);
    let mut spans: Vec<Span<'static>> = Vec::new();
    if cursor.total_row_pages > 1 {
        spans.push(Span::styled("PgUp/PgDn ", label));
        spans.push(Span::styled(
            format!("({}/{})", cursor.row_page, cursor.total_row_pages),
            value,
        ));
        spans.push(Span::raw("  "));
    }
    if cursor.total_col_pages > 0 {
        spans.push(Span::styled("\u{2190}/\u{2192} ", label));
        spans.push(Span::styled(
            format!("({}/{})", cursor.col_page, cursor.total_col_pages),
            value,
        ));
        spans.push(Span::raw("  "));
    }
    if tab == HudTab::Locomotive && (multi_loco || steam_lead) {
        spans.push(Span::styled("Loco ", label));
        spans.push(Span::styled(
            format!("({}/{})", cursor.loco_page, cursor.total_loco_pages),
            value,
        ));
    }
    Some(Line::from(spans))
}
