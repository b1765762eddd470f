//! View state update logic
//!
//! Applies fetch outcomes, in the order they arrive, to the view state.

use super::state::ViewState;
use crate::events::Event;
use tracing::{debug, error};

impl ViewState {
    /// Advance the animation tick.
    pub fn update(&mut self) {
        self.tick = self.tick.wrapping_add(1);
    }

    /// Apply one fetch outcome.
    ///
    /// A loaded summary replaces the current one whatever request it answers,
    /// so a slow early response can overwrite a newer one. A failure goes to
    /// the operator log and leaves the view untouched.
    pub fn apply_event(&mut self, event: Event) {
        match event {
            Event::SummaryLoaded {
                request,
                summary,
                received_at,
            } => {
                debug!(
                    request = request.id,
                    latest = self.requests_issued(),
                    "Applied dashboard summary"
                );
                self.set_summary(summary, received_at);
            }
            Event::SummaryFailed { request, error } => {
                error!(request = request.id, %error, "Failed to fetch dashboard summary");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::environment::Environment;
    use crate::events::Event;
    use crate::logging::test_support::CapturedLogs;
    use crate::summary::DashboardSummary;
    use crate::ui::app::UIConfig;
    use crate::ui::view::state::ViewState;
    use crate::ui::view::tabs::ActiveTab;

    fn summary_with_students(total_students: u64) -> DashboardSummary {
        DashboardSummary {
            total_students,
            ..Default::default()
        }
    }

    fn new_state() -> ViewState {
        ViewState::new(Environment::Local, UIConfig::default())
    }

    #[test]
    fn loaded_summary_replaces_previous_wholesale() {
        let mut state = new_state();
        let first = state.mount().unwrap();
        state.apply_event(Event::loaded(
            first,
            DashboardSummary {
                total_students: 10,
                at_risk_count: 4,
                ..Default::default()
            },
        ));

        state.select_tab(ActiveTab::Courses);
        let second = state.select_tab(ActiveTab::Dashboard).unwrap();
        state.apply_event(Event::loaded(second, summary_with_students(11)));

        let summary = state.summary().unwrap();
        assert_eq!(summary.total_students, 11);
        // Not merged with the earlier payload.
        assert_eq!(summary.at_risk_count, 0);
        assert!(state.summary_received_at().is_some());
    }

    #[test]
    fn last_applied_response_wins_regardless_of_send_order() {
        let mut state = new_state();
        let first = state.mount().unwrap();
        state.select_tab(ActiveTab::Students);
        let second = state.select_tab(ActiveTab::Dashboard).unwrap();

        // The second request answers first, then the slow first one lands.
        state.apply_event(Event::loaded(second, summary_with_students(200)));
        state.apply_event(Event::loaded(first, summary_with_students(100)));

        assert_eq!(state.requests_issued(), 2);
        assert_eq!(state.summary().unwrap().total_students, 100);
    }

    #[test]
    fn late_response_applies_after_leaving_dashboard() {
        let mut state = new_state();
        let request = state.mount().unwrap();
        state.select_tab(ActiveTab::Reports);

        state.apply_event(Event::loaded(request, summary_with_students(9)));

        assert_eq!(state.active_tab(), ActiveTab::Reports);
        assert_eq!(state.summary().unwrap().total_students, 9);
    }

    #[test]
    fn failure_leaves_absence_untouched_and_logs_once() {
        let logs = CapturedLogs::default();
        let mut state = new_state();
        let request = state.mount().unwrap();

        logs.capture(|| {
            state.apply_event(Event::failed(request, "connection refused"));
        });

        assert!(state.summary().is_none());
        let text = logs.contents();
        assert_eq!(text.lines().filter(|l| l.contains("ERROR")).count(), 1);
        assert!(text.contains("Failed to fetch dashboard summary"));
        assert!(text.contains("connection refused"));
    }

    #[test]
    fn failure_keeps_stale_summary() {
        let mut state = new_state();
        let first = state.mount().unwrap();
        state.apply_event(Event::loaded(first, summary_with_students(33)));
        let received_at = state.summary_received_at();

        state.select_tab(ActiveTab::Upload);
        let second = state.select_tab(ActiveTab::Dashboard).unwrap();
        state.apply_event(Event::failed(second, "HTTP error with status 500"));

        assert_eq!(state.summary().unwrap().total_students, 33);
        assert_eq!(state.summary_received_at(), received_at);
    }
}
