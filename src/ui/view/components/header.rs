//! View header component
//!
//! Renders the client name and the backend the session talks to

use super::super::state::ViewState;
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

pub fn render_header(f: &mut Frame, area: Rect, state: &ViewState) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_type(BorderType::Thick)
        .border_style(Style::default().fg(Color::DarkGray));

    let title = Paragraph::new(format!("GRADEBOOK v{}", env!("CARGO_PKG_VERSION")))
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .block(block.clone());
    f.render_widget(title, chunks[0]);

    let endpoint = Paragraph::new(format!("API {}", state.environment.api_url()))
        .alignment(Alignment::Right)
        .style(Style::default().fg(Color::Gray))
        .block(block);
    f.render_widget(endpoint, chunks[1]);
}
