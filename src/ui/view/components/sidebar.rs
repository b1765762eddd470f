//! Sidebar navigation component
//!
//! Renders the navigation entries and maps clicks back to them. Both use
//! [`sidebar_layout`] so what is drawn is what is clickable.

use super::super::state::ViewState;
use super::super::tabs::SidebarEntry;
use super::super::utils::{ACCENT, SIDEBAR_ACTIVE_BG, SIDEBAR_BG};
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

pub const SIDEBAR_TITLE: &str = "Gradebook";

/// Where each part of the sidebar sits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SidebarLayout {
    pub title: Rect,
    /// One single-line rectangle per entry, top to bottom.
    pub entries: Vec<(SidebarEntry, Rect)>,
}

pub fn sidebar_layout(area: Rect) -> SidebarLayout {
    let entries = SidebarEntry::all();

    // Title, a two-row slot per entry, and an extra gap before "Log out".
    let mut constraints = vec![Constraint::Length(3)];
    for entry in &entries {
        if *entry == SidebarEntry::Logout {
            constraints.push(Constraint::Length(1));
        }
        constraints.push(Constraint::Length(2));
    }
    constraints.push(Constraint::Min(0));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .horizontal_margin(1)
        .constraints(constraints)
        .split(area);

    let mut slots = Vec::with_capacity(entries.len());
    let mut index = 1;
    for entry in entries {
        if entry == SidebarEntry::Logout {
            index += 1;
        }
        let chunk = chunks[index];
        slots.push((
            entry,
            Rect {
                height: chunk.height.min(1),
                ..chunk
            },
        ));
        index += 1;
    }

    SidebarLayout {
        title: chunks[0],
        entries: slots,
    }
}

/// The entry under a mouse position, if any.
pub fn hit_test(area: Rect, column: u16, row: u16) -> Option<SidebarEntry> {
    sidebar_layout(area)
        .entries
        .into_iter()
        .find(|(_, rect)| {
            rect.height > 0
                && row == rect.y
                && column >= rect.x && column < rect.x.saturating_add(rect.width)
        })
        .map(|(entry, _)| entry)
}

pub fn render_sidebar(f: &mut Frame, area: Rect, state: &ViewState) {
    f.render_widget(
        Block::default().style(Style::default().bg(SIDEBAR_BG)),
        area,
    );

    let layout = sidebar_layout(area);

    let title = Paragraph::new(Line::from(vec![Span::styled(
        SIDEBAR_TITLE,
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    )]))
    .block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(Color::Gray)),
    );
    f.render_widget(title, layout.title);

    for (entry, rect) in layout.entries {
        let line = match entry {
            SidebarEntry::Tab(tab) if tab == state.active_tab() => Line::from(vec![
                Span::styled("\u{258C}", Style::default().fg(ACCENT)),
                Span::styled(
                    format!(" {}  {}", tab.hotkey(), tab),
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                ),
            ])
            .style(Style::default().bg(SIDEBAR_ACTIVE_BG)),
            SidebarEntry::Tab(tab) => Line::from(Span::styled(
                format!("  {}  {}", tab.hotkey(), tab),
                Style::default().fg(Color::White),
            )),
            SidebarEntry::Logout => Line::from(Span::styled(
                format!("  L  {}", entry.label()),
                Style::default().fg(Color::LightRed),
            )),
        };
        f.render_widget(Paragraph::new(line), rect);
    }
}
