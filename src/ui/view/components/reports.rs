//! Reports tab component

use super::super::utils::split_title;
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph, Wrap};

/// (title, description) of each report card, left to right.
pub const REPORT_CARDS: [(&str, &str); 3] = [
    (
        "Grade Distribution",
        "View the distribution of grades by course and department",
    ),
    (
        "Department Performance",
        "Compare performance metrics across departments",
    ),
    ("Course Trends", "Analyze grade trends across terms"),
];

pub fn render_reports_tab(f: &mut Frame, area: Rect) {
    let (title_area, body) = split_title(area);
    f.render_widget(
        Paragraph::new(Span::styled(
            "Reports",
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
        title_area,
    );

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(8), Constraint::Min(0)])
        .split(body);
    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 3); 3])
        .split(rows[0]);

    for ((title, description), card) in REPORT_CARDS.iter().zip(cards.iter()) {
        let block = Block::default()
            .title(Span::styled(
                *title,
                Style::default()
                    .fg(Color::LightBlue)
                    .add_modifier(Modifier::BOLD),
            ))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::Gray))
            .padding(Padding::uniform(1));
        let paragraph = Paragraph::new(Line::from(*description))
            .style(Style::default().fg(Color::Gray))
            .wrap(Wrap { trim: true })
            .block(block);
        f.render_widget(paragraph, *card);
    }
}
