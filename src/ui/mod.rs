//! HUD rendering: tab bar, paginated status table, and keybinding footer.
//!
//! The draw pass measures the table block's inner area, refreshes the
//! pagination engine against that viewport, and renders the visible
//! (row-page, column-page) slice. Input handling has already run for the
//! frame, so the cursor the renderer sees is current.

pub mod helpers;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::hud::{self, Viewport};
use crate::state::HudState;
use crate::theme::theme;

/// Draw one frame of the HUD into `f`.
pub fn ui(f: &mut Frame, app: &mut HudState) {
    let th = theme();
    let area = f.area();

    // Background
    f.render_widget(Block::default().style(Style::default().bg(th.base)), area);

    let footer_h: u16 = if app.show_keybinds_footer && !app.cursor.full_screen {
        4
    } else {
        0
    };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(3),
            Constraint::Length(footer_h),
        ])
        .split(area);

    f.render_widget(Paragraph::new(helpers::tab_bar(&th, app.tab)), chunks[0]);

    // The inner area inside the borders drives the viewport maths; the line
    // fitter reserves the navigation overlay line itself.
    let table_area = chunks[1];
    let inner_w = table_area.width.saturating_sub(2).max(1);
    let inner_h = table_area.height.saturating_sub(2).max(1);
    let viewport = Viewport::from_cells(inner_w, inner_h);
    hud::refresh(app, &viewport);

    let visible = hud::visible_lines(&app.table, &app.row_paging, app.cursor.row_page);
    let hdr = app.table.header_rows();
    let mut lines: Vec<Line<'static>> = Vec::with_capacity(visible.len() + 1);
    for (i, line) in visible.iter().enumerate() {
        let shown = if app.cursor.col_page == 0 {
            // Default view: the full line, clipped at the right edge.
            line.clone()
        } else {
            hud::columns::page_for_cursor(line, app.cursor.col_page, 0, viewport.chars_per_line())
        };
        lines.push(helpers::line_spans(&shown, &th, i < hdr));
    }
    if let Some(nav) = helpers::nav_labels(
        &app.cursor,
        app.tab,
        app.train.loco_paging_allowed(),
        app.train.steam_lead(),
        &th,
    ) {
        lines.push(nav);
    }

    let mut title = format!(" {} ", app.tab.title());
    if app.sub_view_pinned {
        title.push_str("[pinned] ");
    }
    let table_widget = Paragraph::new(lines)
        .style(Style::default().fg(th.text).bg(th.base))
        .block(
            Block::default()
                .title(Span::styled(
                    title,
                    Style::default().fg(th.mauve).add_modifier(Modifier::BOLD),
                ))
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(th.surface1)),
        );
    f.render_widget(table_widget, table_area);

    if footer_h > 0 {
        render_footer(f, chunks[2], app, &th);
    }
}

/// Keybindings footer in three lines plus the train designation.
fn render_footer(
    f: &mut Frame,
    area: ratatui::prelude::Rect,
    app: &HudState,
    th: &crate::theme::Theme,
) {
    let label = Style::default().fg(th.overlay1);
    let keys = Style::default().fg(th.subtext0);

    let l1: Vec<Span> = vec![
        Span::styled("GLOBALS:", label),
        Span::styled(" q/Ctrl+C=quit", keys),
        Span::raw("  "),
        Span::styled("f=fullscreen", keys),
    ];
    let l2: Vec<Span> = vec![
        Span::styled("TABS:", label),
        Span::styled(" Tab/S-Tab=switch", keys),
        Span::raw("  "),
        Span::styled("1-5=jump", keys),
    ];
    let l3: Vec<Span> = vec![
        Span::styled("PAGES:", label),
        Span::styled(" PgUp/PgDn=rows", keys),
        Span::raw("  "),
        Span::styled("\u{2190}/\u{2192}=columns", keys),
        Span::raw("  "),
        Span::styled("n/p=loco", keys),
        Span::raw("  "),
        Span::styled("b=pin", keys),
    ];
    let l4: Vec<Span> = vec![Span::styled(
        app.train.name.clone(),
        Style::default().fg(th.green),
    )];

    let footer = Paragraph::new(vec![
        Line::from(l1),
        Line::from(l2),
        Line::from(l3),
        Line::from(l4),
    ])
    .style(Style::default().fg(th.subtext0).bg(th.mantle));
    f.render_widget(footer, area);
}
