//! Upload tab component

use super::super::utils::{BUTTON_BG, centered_rect, split_title};
use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph, Wrap};

pub const DROP_ZONE_HINT: &str =
    "Drag and drop your CSV or Excel file here, or click to select one";

pub fn render_upload_tab(f: &mut Frame, area: Rect) {
    let (title_area, body) = split_title(area);
    f.render_widget(
        Paragraph::new(Span::styled(
            "Import Data",
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
        title_area,
    );

    let lines = vec![
        Line::from(Span::styled("^", Style::default().fg(Color::DarkGray))),
        Line::from(""),
        Line::from(Span::styled(
            "Import Grades",
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(DROP_ZONE_HINT, Style::default().fg(Color::Gray))),
        Line::from(""),
        Line::from(Span::styled(
            "  Select File  ",
            Style::default()
                .fg(Color::White)
                .bg(BUTTON_BG)
                .add_modifier(Modifier::BOLD),
        )),
    ];

    let drop_zone = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .border_style(Style::default().fg(Color::DarkGray)),
        );
    f.render_widget(drop_zone, centered_rect(body.width, 11, body));
}
