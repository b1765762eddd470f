//! Session setup and initialization

use crate::api::{GradebookApi, GradebookClient};
use crate::consts::cli_consts::EVENT_QUEUE_SIZE;
use crate::environment::Environment;
use crate::events::Event;
use crate::ui::UIConfig;
use crate::workers::SummaryFetcher;
use std::error::Error;
use std::sync::Arc;
use tokio::sync::mpsc;

/// Session data for both TUI and headless modes
pub struct SessionData {
    /// The backend this session talks to
    pub environment: Environment,
    pub ui_config: UIConfig,
    /// Spawns summary requests; holds the sending half of the event channel
    pub fetcher: SummaryFetcher,
    /// Receives fetch outcomes
    pub event_receiver: mpsc::Receiver<Event>,
}

/// Sets up a session against the real HTTP backend.
///
/// # Returns
/// * `Ok(SessionData)` - Successfully set up session
/// * `Err` - The HTTP client could not be built
pub fn setup_session(
    environment: Environment,
    with_background_color: bool,
) -> Result<SessionData, Box<dyn Error>> {
    let client = GradebookClient::new(environment)?;
    Ok(setup_session_with_api(
        Arc::new(client),
        with_background_color,
    ))
}

/// Wires the event channel and fetcher around any [`GradebookApi`].
pub fn setup_session_with_api(
    api: Arc<dyn GradebookApi>,
    with_background_color: bool,
) -> SessionData {
    let environment = api.environment().clone();
    let (event_sender, event_receiver) = mpsc::channel::<Event>(EVENT_QUEUE_SIZE);
    SessionData {
        environment,
        ui_config: UIConfig::new(with_background_color),
        fetcher: SummaryFetcher::new(api, event_sender),
        event_receiver,
    }
}
