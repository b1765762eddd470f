//! View state management
//!
//! The single container the UI loop mutates: which tab is selected and the
//! last summary received.

use super::tabs::ActiveTab;
use crate::environment::Environment;
use crate::events::FetchRequest;
use crate::summary::DashboardSummary;
use crate::ui::app::UIConfig;
use chrono::{DateTime, Local};

#[derive(Debug)]
pub struct ViewState {
    /// The environment the session talks to, shown in the header.
    pub environment: Environment,
    /// Whether to enable background colors
    pub with_background_color: bool,
    /// Animation tick counter
    pub tick: usize,

    active_tab: ActiveTab,
    /// Last summary applied. Stays in place, possibly stale, until another
    /// one is applied.
    summary: Option<DashboardSummary>,
    summary_received_at: Option<DateTime<Local>>,
    requests_issued: u64,
}

impl ViewState {
    pub fn new(environment: Environment, ui_config: UIConfig) -> Self {
        Self {
            environment,
            with_background_color: ui_config.with_background_color,
            tick: 0,
            active_tab: ActiveTab::default(),
            summary: None,
            summary_received_at: None,
            requests_issued: 0,
        }
    }

    pub fn active_tab(&self) -> ActiveTab {
        self.active_tab
    }

    pub fn summary(&self) -> Option<&DashboardSummary> {
        self.summary.as_ref()
    }

    pub fn summary_received_at(&self) -> Option<DateTime<Local>> {
        self.summary_received_at
    }

    pub fn requests_issued(&self) -> u64 {
        self.requests_issued
    }

    /// Called once when the view first appears. Requests the summary if the
    /// initial tab is the dashboard.
    pub fn mount(&mut self) -> Option<FetchRequest> {
        if self.active_tab == ActiveTab::Dashboard {
            Some(self.issue_request())
        } else {
            None
        }
    }

    /// Switch tabs. Returns a request only when the tab actually changes and
    /// the new tab is the dashboard; re-selecting the current tab is a no-op.
    pub fn select_tab(&mut self, tab: ActiveTab) -> Option<FetchRequest> {
        if tab == self.active_tab {
            return None;
        }
        self.active_tab = tab;
        if tab == ActiveTab::Dashboard {
            Some(self.issue_request())
        } else {
            None
        }
    }

    pub fn select_next(&mut self) -> Option<FetchRequest> {
        self.select_tab(self.active_tab.next())
    }

    pub fn select_previous(&mut self) -> Option<FetchRequest> {
        self.select_tab(self.active_tab.previous())
    }

    pub(super) fn set_summary(&mut self, summary: DashboardSummary, received_at: DateTime<Local>) {
        self.summary = Some(summary);
        self.summary_received_at = Some(received_at);
    }

    fn issue_request(&mut self) -> FetchRequest {
        self.requests_issued += 1;
        FetchRequest {
            id: self.requests_issued,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_state() -> ViewState {
        ViewState::new(Environment::Local, UIConfig::default())
    }

    #[test]
    fn starts_on_dashboard_without_summary() {
        let state = new_state();
        assert_eq!(state.active_tab(), ActiveTab::Dashboard);
        assert!(state.summary().is_none());
        assert_eq!(state.requests_issued(), 0);
    }

    #[test]
    fn mount_requests_summary_for_dashboard() {
        let mut state = new_state();
        assert_eq!(state.mount(), Some(FetchRequest { id: 1 }));
    }

    #[test]
    fn non_dashboard_tabs_never_request() {
        let mut state = new_state();
        state.mount();
        for tab in [
            ActiveTab::Students,
            ActiveTab::Courses,
            ActiveTab::Reports,
            ActiveTab::Upload,
        ] {
            assert_eq!(state.select_tab(tab), None);
            assert_eq!(state.active_tab(), tab);
        }
        assert_eq!(state.requests_issued(), 1);
    }

    #[test]
    fn every_return_to_dashboard_requests_again() {
        let mut state = new_state();
        state.mount();

        state.select_tab(ActiveTab::Reports);
        assert_eq!(
            state.select_tab(ActiveTab::Dashboard),
            Some(FetchRequest { id: 2 })
        );
        state.select_tab(ActiveTab::Students);
        assert_eq!(
            state.select_tab(ActiveTab::Dashboard),
            Some(FetchRequest { id: 3 })
        );
    }

    #[test]
    fn reselecting_current_tab_is_not_a_change() {
        let mut state = new_state();
        state.mount();
        assert_eq!(state.select_tab(ActiveTab::Dashboard), None);
        assert_eq!(state.requests_issued(), 1);
    }

    #[test]
    fn cycling_requests_when_landing_on_dashboard() {
        let mut state = new_state();
        assert_eq!(state.select_previous(), None);
        assert_eq!(state.active_tab(), ActiveTab::Upload);
        assert_eq!(state.select_next(), Some(FetchRequest { id: 1 }));
        assert_eq!(state.active_tab(), ActiveTab::Dashboard);
    }
}
