//! Headless mode execution

use super::{
    SessionData,
    messages::{print_session_exit_success, print_session_starting},
};
use crate::logging::{LogTarget, init_logging};
use crate::summary::{Series, StatValues};
use crate::ui::view::ViewState;
use crate::ui::view::components::dashboard::LOADING_TEXT;
use std::error::Error;
use std::fmt::Write;

/// Runs the application in headless mode
///
/// Mounts the view once, waits for the mount fetch and prints the dashboard
/// tab as plain text. A failed fetch is logged to stderr and the defaults are
/// printed, same as the TUI would show.
///
/// # Returns
/// * `Ok(())` - The dashboard was printed
/// * `Err` - Logging could not be initialized
pub async fn run_headless_mode(session: SessionData) -> Result<(), Box<dyn Error>> {
    init_logging(&LogTarget::Stderr)?;
    print_session_starting("headless", &session.environment);

    let state = load_dashboard(session).await;
    print!("{}", dashboard_text(&state));

    print_session_exit_success();
    Ok(())
}

/// Mounts a fresh view and applies the outcome of its first fetch.
pub async fn load_dashboard(session: SessionData) -> ViewState {
    let SessionData {
        environment,
        ui_config,
        fetcher,
        mut event_receiver,
    } = session;

    let mut state = ViewState::new(environment, ui_config);
    if let Some(request) = state.mount() {
        let _ = fetcher.dispatch(request);
        if let Some(event) = event_receiver.recv().await {
            state.apply_event(event);
        }
    }
    state
}

/// The dashboard tab as plain text.
pub fn dashboard_text(state: &ViewState) -> String {
    let values = StatValues::from_summary(state.summary());
    let summary = state.summary();

    let mut out = String::new();
    match state.summary_received_at() {
        Some(received_at) => {
            let _ = writeln!(out, "Dashboard (updated {})", received_at.format("%H:%M:%S"));
        }
        None => out.push_str("Dashboard\n"),
    }
    let _ = writeln!(out, "  Total Students:   {}", values.total_students);
    let _ = writeln!(out, "  Total Courses:    {}", values.total_courses);
    let _ = writeln!(out, "  Average Grade:    {}", values.average_grade);
    let _ = writeln!(out, "  At-Risk Students: {}", values.at_risk_count);

    write_series(
        &mut out,
        "Grade Distribution",
        summary.and_then(|s| s.grade_distribution.as_ref()),
    );
    write_series(
        &mut out,
        "Department Performance",
        summary.and_then(|s| s.department_performance.as_ref()),
    );
    out
}

fn write_series(out: &mut String, title: &str, series: Option<&Series>) {
    let body = series.map_or_else(|| LOADING_TEXT.to_string(), Series::to_pretty_json);
    let _ = writeln!(out, "\n{}\n{}", title, body);
}
