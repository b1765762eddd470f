//! View utility functions
//!
//! Palette and small helpers shared across components

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::prelude::Color;

/// Sidebar background.
pub const SIDEBAR_BG: Color = Color::Rgb(26, 58, 108);
/// Highlight behind the active sidebar entry.
pub const SIDEBAR_ACTIVE_BG: Color = Color::Rgb(72, 97, 137);
/// Accent bar marking the active sidebar entry.
pub const ACCENT: Color = Color::Rgb(248, 160, 28);
/// Dark background behind the content area.
pub const CONTENT_BG: Color = Color::Rgb(16, 20, 24);
/// Buttons.
pub const BUTTON_BG: Color = Color::Rgb(59, 130, 246);

pub const STUDENTS_COLOR: Color = Color::LightBlue;
pub const COURSES_COLOR: Color = Color::LightGreen;
pub const AVERAGE_COLOR: Color = Color::LightYellow;
pub const AT_RISK_COLOR: Color = Color::LightRed;

/// A rectangle of at most `width` x `height`, centered in `area`.
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// Title line on top, the rest below.
pub fn split_title(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Fill(1)])
        .split(area);
    (chunks[0], chunks[1])
}
