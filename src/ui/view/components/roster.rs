//! Students and courses tab components
//!
//! Both tabs share one layout: a search box, an add button and a table that
//! has no data source yet, so it always shows its empty-state row.

use super::super::utils::{BUTTON_BG, split_title};
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph, Row, Table};

/// Static description of one roster tab.
#[derive(Debug, Clone, Copy)]
pub struct RosterSpec {
    pub title: &'static str,
    pub search_placeholder: &'static str,
    pub add_label: &'static str,
    pub columns: [&'static str; 5],
    pub empty_message: &'static str,
}

pub const STUDENTS: RosterSpec = RosterSpec {
    title: "Students",
    search_placeholder: "Search students...",
    add_label: "Add Student",
    columns: ["Student ID", "Name", "Department", "GPA", "Actions"],
    empty_message: "No students found",
};

pub const COURSES: RosterSpec = RosterSpec {
    title: "Courses",
    search_placeholder: "Search courses...",
    add_label: "Add Course",
    columns: ["Code", "Name", "Department", "Credits", "Actions"],
    empty_message: "No courses found",
};

pub fn render_roster_tab(f: &mut Frame, area: Rect, spec: &RosterSpec) {
    let (title_area, body) = split_title(area);
    f.render_widget(
        Paragraph::new(Span::styled(
            spec.title,
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
        title_area,
    );

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Fill(1)])
        .split(body);

    render_toolbar(f, chunks[0], spec);
    render_table(f, chunks[1], spec);
}

fn render_toolbar(f: &mut Frame, area: Rect, spec: &RosterSpec) {
    let button_width = spec.add_label.len() as u16 + 6;
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(50),
            Constraint::Fill(1),
            Constraint::Length(button_width),
        ])
        .split(area);

    let search = Paragraph::new(Span::styled(
        spec.search_placeholder,
        Style::default().fg(Color::DarkGray),
    ))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::Gray)),
    );
    f.render_widget(search, chunks[0]);

    let button = Paragraph::new(Line::from(format!("+ {}", spec.add_label)))
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(Color::White)
                .bg(BUTTON_BG)
                .add_modifier(Modifier::BOLD),
        )
        .block(Block::default().borders(Borders::ALL).border_type(BorderType::Rounded));
    f.render_widget(button, chunks[2]);
}

fn render_table(f: &mut Frame, area: Rect, spec: &RosterSpec) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(inner);

    let header = Row::new(spec.columns)
        .style(
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )
        .bottom_margin(1);
    let table = Table::new(Vec::<Row>::new(), [Constraint::Ratio(1, 5); 5]).header(header);
    f.render_widget(table, rows[0]);

    let empty = Paragraph::new(spec.empty_message)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(empty, rows[2]);
}
