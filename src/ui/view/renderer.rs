//! View main renderer
//!
//! A pure function of the view state: sidebar on the left, the active tab's
//! panel on the right.

use super::components::{dashboard, footer, header, reports, roster, sidebar, upload};
use super::state::ViewState;
use super::tabs::ActiveTab;
use super::utils::CONTENT_BG;
use crate::consts::cli_consts::ui::SIDEBAR_WIDTH;
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::prelude::Style;
use ratatui::widgets::Block;

/// Splits the frame into (sidebar, content).
pub fn split_main(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(SIDEBAR_WIDTH), Constraint::Fill(1)])
        .split(area);
    (chunks[0], chunks[1])
}

pub fn render_view(f: &mut Frame, state: &ViewState) {
    let (sidebar_area, content_area) = split_main(f.area());

    if state.with_background_color {
        f.render_widget(
            Block::default().style(Style::default().bg(CONTENT_BG)),
            content_area,
        );
    }

    sidebar::render_sidebar(f, sidebar_area, state);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Fill(1),
            Constraint::Length(2),
        ])
        .horizontal_margin(2)
        .split(content_area);

    header::render_header(f, chunks[0], state);
    match state.active_tab() {
        ActiveTab::Dashboard => dashboard::render_dashboard_tab(f, chunks[1], state),
        ActiveTab::Students => roster::render_roster_tab(f, chunks[1], &roster::STUDENTS),
        ActiveTab::Courses => roster::render_roster_tab(f, chunks[1], &roster::COURSES),
        ActiveTab::Reports => reports::render_reports_tab(f, chunks[1]),
        ActiveTab::Upload => upload::render_upload_tab(f, chunks[1]),
    }
    footer::render_footer(f, chunks[2]);
}
