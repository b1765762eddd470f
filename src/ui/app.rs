//! Main application state and UI loop
//!
//! Contains the App struct and main UI event handling logic

use crate::consts::cli_consts::ui::{splash_duration, tick};
use crate::environment::Environment;
use crate::events::{Event as FetchEvent, FetchRequest};
use crate::ui::splash::render_splash;
use crate::ui::view::components::sidebar::hit_test;
use crate::ui::view::renderer::split_main;
use crate::ui::view::{ActiveTab, SidebarEntry, ViewState, render_view};
use crate::workers::SummaryFetcher;
use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::Rect;
use ratatui::{Frame, Terminal, backend::Backend};
use std::time::Instant;
use tokio::sync::mpsc;
use tracing::{debug, info};

/// UI configuration data grouped by concern
#[derive(Debug, Clone, Default)]
pub struct UIConfig {
    pub with_background_color: bool,
}

impl UIConfig {
    pub fn new(with_background_color: bool) -> Self {
        Self {
            with_background_color,
        }
    }
}

/// The different screens in the application.
#[derive(Debug)]
pub enum Screen {
    /// Splash screen shown at the start of the application.
    Splash,
    /// Sidebar and tab panels.
    View(Box<ViewState>),
}

/// How the UI loop ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Navigation {
    /// The user quit; nothing else to do.
    Quit,
    /// The user chose "Log out" and should be sent to `redirect_to`.
    Logout { redirect_to: String },
}

/// Application state
pub struct App {
    /// When the splash screen first appeared.
    splash_start: Instant,

    /// The environment in which the application is running.
    environment: Environment,

    /// The current screen being displayed in the application.
    current_screen: Screen,

    /// Spawns summary requests issued by the view.
    fetcher: SummaryFetcher,

    /// Receives fetch outcomes from spawned requests.
    event_receiver: mpsc::Receiver<FetchEvent>,

    ui_config: UIConfig,

    /// Size of the last drawn frame, needed to map mouse clicks.
    frame_area: Rect,
}

impl App {
    /// Creates a new instance of the application.
    pub fn new(
        environment: Environment,
        fetcher: SummaryFetcher,
        event_receiver: mpsc::Receiver<FetchEvent>,
        ui_config: UIConfig,
    ) -> Self {
        Self {
            splash_start: Instant::now(),
            environment,
            current_screen: Screen::Splash,
            fetcher,
            event_receiver,
            ui_config,
            frame_area: Rect::default(),
        }
    }

    /// Leaves the splash screen and mounts the view.
    pub fn show_view(&mut self) {
        let mut state = ViewState::new(self.environment.clone(), self.ui_config.clone());
        let request = state.mount();
        self.current_screen = Screen::View(Box::new(state));
        self.dispatch(request);
    }

    fn dispatch(&self, request: Option<FetchRequest>) {
        if let Some(request) = request {
            // Never awaited: outcomes come back through the event channel.
            let _ = self.fetcher.dispatch(request);
        }
    }

    fn select(&mut self, tab: ActiveTab) {
        if let Screen::View(state) = &mut self.current_screen {
            let request = state.select_tab(tab);
            self.dispatch(request);
        }
    }

    /// Moves the selection one sidebar entry down, or up.
    fn step(&mut self, forward: bool) {
        if let Screen::View(state) = &mut self.current_screen {
            let request = if forward {
                state.select_next()
            } else {
                state.select_previous()
            };
            self.dispatch(request);
        }
    }

    fn activate(&mut self, entry: SidebarEntry) -> Option<Navigation> {
        match entry {
            SidebarEntry::Tab(tab) => {
                self.select(tab);
                None
            }
            SidebarEntry::Logout => {
                let redirect_to = self.environment.logout_url();
                info!(%redirect_to, "Logging out");
                Some(Navigation::Logout { redirect_to })
            }
        }
    }

    /// Applies a key press. Returns how the loop should end, if it should.
    pub fn handle_key(&mut self, key: KeyEvent) -> Option<Navigation> {
        // Skip events that are not KeyEventKind::Press
        if key.kind == KeyEventKind::Release {
            return None;
        }

        if matches!(key.code, KeyCode::Esc | KeyCode::Char('q')) {
            return Some(Navigation::Quit);
        }

        if matches!(self.current_screen, Screen::Splash) {
            // Any other key skips the splash screen
            self.show_view();
            return None;
        }

        match key.code {
            KeyCode::Char('l') | KeyCode::Char('L') => self.activate(SidebarEntry::Logout),
            KeyCode::Tab | KeyCode::Down | KeyCode::Char('j') => {
                self.step(true);
                None
            }
            KeyCode::BackTab | KeyCode::Up | KeyCode::Char('k') => {
                self.step(false);
                None
            }
            KeyCode::Char(c) => {
                if let Some(tab) = ActiveTab::from_hotkey(c) {
                    self.select(tab);
                }
                None
            }
            _ => None,
        }
    }

    /// Applies a mouse event. Only left clicks on sidebar entries do anything.
    pub fn handle_mouse(&mut self, mouse: MouseEvent) -> Option<Navigation> {
        if !matches!(self.current_screen, Screen::View(_)) {
            return None;
        }
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return None;
        }
        let (sidebar_area, _) = split_main(self.frame_area);
        let entry = hit_test(sidebar_area, mouse.column, mouse.row)?;
        self.activate(entry)
    }

    /// Applies every fetch outcome that has arrived, in arrival order.
    pub fn drain_events(&mut self) {
        while let Ok(event) = self.event_receiver.try_recv() {
            debug!(%event, "Fetch outcome received");
            if let Screen::View(state) = &mut self.current_screen {
                state.apply_event(event);
            }
        }
        if let Screen::View(state) = &mut self.current_screen {
            state.update();
        }
    }

    fn splash_expired(&self) -> bool {
        matches!(self.current_screen, Screen::Splash)
            && self.splash_start.elapsed() >= splash_duration()
    }
}

/// Runs the application UI in a loop, handling events and rendering the appropriate screen.
pub async fn run<B: Backend>(
    terminal: &mut Terminal<B>,
    mut app: App,
) -> std::io::Result<Navigation> {
    loop {
        app.drain_events();

        let completed = terminal.draw(|f| render(f, &app.current_screen))?;
        app.frame_area = completed.area;

        // Handle splash-to-view transition
        if app.splash_expired() {
            app.show_view();
            continue;
        }

        if event::poll(tick())? {
            let navigation = match event::read()? {
                Event::Key(key) => app.handle_key(key),
                Event::Mouse(mouse) => app.handle_mouse(mouse),
                _ => None,
            };
            if let Some(navigation) = navigation {
                return Ok(navigation);
            }
        }
    }
}

/// Renders the current screen based on the application state.
fn render(f: &mut Frame, screen: &Screen) {
    match screen {
        Screen::Splash => render_splash(f),
        Screen::View(state) => render_view(f, state),
    }
}
