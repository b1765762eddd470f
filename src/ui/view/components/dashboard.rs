//! Dashboard tab component
//!
//! Renders the four stat cards and the two distribution panels

use super::super::state::ViewState;
use super::super::utils::{AT_RISK_COLOR, AVERAGE_COLOR, COURSES_COLOR, STUDENTS_COLOR, split_title};
use crate::summary::{Series, StatValues};
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph};

pub const LOADING_TEXT: &str = "Loading data...";

pub fn render_dashboard_tab(f: &mut Frame, area: Rect, state: &ViewState) {
    let (title_area, body) = split_title(area);

    let mut title = vec![Span::styled(
        "Dashboard",
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    )];
    if let Some(received_at) = state.summary_received_at() {
        title.push(Span::styled(
            format!("  Updated {}", received_at.format("%H:%M:%S")),
            Style::default().fg(Color::DarkGray),
        ));
    }
    f.render_widget(Paragraph::new(Line::from(title)), title_area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(5), Constraint::Fill(1)])
        .split(body);

    render_stat_cards(f, chunks[0], &StatValues::from_summary(state.summary()));

    let panels = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[1]);

    let summary = state.summary();
    render_series_panel(
        f,
        panels[0],
        "Grade Distribution",
        summary.and_then(|s| s.grade_distribution.as_ref()),
    );
    render_series_panel(
        f,
        panels[1],
        "Department Performance",
        summary.and_then(|s| s.department_performance.as_ref()),
    );
}

fn render_stat_cards(f: &mut Frame, area: Rect, values: &StatValues) {
    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 4); 4])
        .split(area);

    let entries = [
        ("Total Students", &values.total_students, STUDENTS_COLOR),
        ("Total Courses", &values.total_courses, COURSES_COLOR),
        ("Average Grade", &values.average_grade, AVERAGE_COLOR),
        ("At-Risk Students", &values.at_risk_count, AT_RISK_COLOR),
    ];

    for ((title, value, color), card) in entries.into_iter().zip(cards.iter()) {
        let block = Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(color))
            .padding(Padding::horizontal(1));
        let paragraph = Paragraph::new(Line::from(Span::styled(
            value.as_str(),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )))
        .block(block)
        .alignment(Alignment::Left);
        f.render_widget(paragraph, *card);
    }
}

/// Raw JSON dump of the series, or the loading placeholder while absent.
fn render_series_panel(f: &mut Frame, area: Rect, title: &str, series: Option<&Series>) {
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan))
        .padding(Padding::uniform(1));

    let paragraph = match series {
        Some(series) => Paragraph::new(series.to_pretty_json()).style(Style::default().fg(Color::White)),
        None => Paragraph::new(LOADING_TEXT)
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::DarkGray)),
    };
    f.render_widget(paragraph.block(block), area);
}
