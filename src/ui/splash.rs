//! Splash screen rendering module.

use crate::ui::view::utils::{ACCENT, SIDEBAR_ACTIVE_BG, centered_rect};
use ratatui::Frame;
use ratatui::layout::Alignment;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph};

pub const LOGO_NAME: &str = r#"
   ██████╗ ██████╗  █████╗ ██████╗ ███████╗██████╗  ██████╗  ██████╗ ██╗  ██╗
  ██╔════╝ ██╔══██╗██╔══██╗██╔══██╗██╔════╝██╔══██╗██╔═══██╗██╔═══██╗██║ ██╔╝
  ██║  ███╗██████╔╝███████║██║  ██║█████╗  ██████╔╝██║   ██║██║   ██║█████╔╝
  ██║   ██║██╔══██╗██╔══██║██║  ██║██╔══╝  ██╔══██╗██║   ██║██║   ██║██╔═██╗
  ╚██████╔╝██║  ██║██║  ██║██████╔╝███████╗██████╔╝╚██████╔╝╚██████╔╝██║  ██╗
   ╚═════╝ ╚═╝  ╚═╝╚═╝  ╚═╝╚═════╝ ╚══════╝╚═════╝  ╚═════╝  ╚═════╝ ╚═╝  ╚═╝
"#;

pub const SKIP_HINT: &str = "Press any key to continue";

pub fn render_splash(f: &mut Frame) {
    let logo = LOGO_NAME.trim_matches('\n');
    let logo_width = logo.lines().map(|l| l.chars().count()).max().unwrap_or(0) as u16;

    let mut lines: Vec<Line> = logo
        .lines()
        .map(|line| Line::styled(line, Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)))
        .collect();
    lines.push(Line::default());
    lines.push(Line::from(vec![
        Span::styled("Grade management dashboard", Style::default().fg(Color::White)),
        Span::styled(
            format!("  Version {}", env!("CARGO_PKG_VERSION")),
            Style::default()
                .fg(Color::LightBlue)
                .add_modifier(Modifier::ITALIC),
        ),
    ]));
    lines.push(Line::default());
    lines.push(Line::styled(SKIP_HINT, Style::default().fg(Color::DarkGray)));

    // Borders and one row or column of padding on each side.
    let card = centered_rect(logo_width + 4, lines.len() as u16 + 4, f.area());
    let splash = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(SIDEBAR_ACTIVE_BG))
            .padding(Padding::uniform(1)),
    );
    f.render_widget(splash, card);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn splash_shows_version() {
        let mut terminal = Terminal::new(TestBackend::new(100, 20)).unwrap();
        terminal.draw(render_splash).unwrap();
        let buffer = terminal.backend().buffer();
        let text: String = (0..buffer.area.height)
            .flat_map(|y| (0..buffer.area.width).map(move |x| (x, y)))
            .map(|pos| buffer[pos].symbol().to_string())
            .collect();
        assert!(text.contains(&format!("Version {}", env!("CARGO_PKG_VERSION"))));
        assert!(text.contains("Grade management dashboard"));
        assert!(text.contains(SKIP_HINT));
    }
}
