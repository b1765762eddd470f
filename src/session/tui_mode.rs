//! TUI mode execution

use super::{
    SessionData,
    messages::{print_logout_redirect, print_session_exit_success, print_session_starting},
};
use crate::logging::{LogTarget, default_log_path, init_logging};
use crate::ui::{self, Navigation};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::{error::Error, io};
use tracing::info;

/// Runs the application in TUI mode
///
/// This function handles:
/// 1. File logging, since the UI owns the terminal
/// 2. Terminal setup and cleanup
/// 3. UI application initialization and execution
///
/// # Returns
/// * `Ok(())` - TUI mode completed successfully
/// * `Err` - TUI mode failed
pub async fn run_tui_mode(session: SessionData) -> Result<(), Box<dyn Error>> {
    let log_path = default_log_path()?;
    init_logging(&LogTarget::File(log_path))?;

    // Print session start message
    print_session_starting("TUI", &session.environment);
    info!(api_url = %session.environment.api_url(), "Starting TUI session");

    // Terminal setup
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;

    // Initialize the terminal with Crossterm backend
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let app = ui::App::new(
        session.environment,
        session.fetcher,
        session.event_receiver,
        session.ui_config,
    );

    let result = ui::run(&mut terminal, app).await;

    // Clean up the terminal after running the application
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    // Handle the result
    match result? {
        Navigation::Quit => {}
        Navigation::Logout { redirect_to } => print_logout_redirect(&redirect_to),
    }
    print_session_exit_success();

    Ok(())
}
