//! Dashboard summary fetching

use super::core::EventSender;
use crate::api::GradebookApi;
use crate::events::{Event, FetchRequest};
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::debug;

/// Issues summary requests in the background and reports their outcome.
///
/// Every dispatched request runs to completion: nothing is de-duplicated or
/// cancelled, and outcomes reach the UI loop in whatever order they finish.
#[derive(Clone)]
pub struct SummaryFetcher {
    api: Arc<dyn GradebookApi>,
    event_sender: EventSender,
}

impl SummaryFetcher {
    pub fn new(api: Arc<dyn GradebookApi>, sender: mpsc::Sender<Event>) -> Self {
        Self {
            api,
            event_sender: EventSender::new(sender),
        }
    }

    /// Spawn the request on the runtime.
    pub fn dispatch(&self, request: FetchRequest) -> JoinHandle<()> {
        debug!(
            request = request.id,
            url = %self.api.environment().dashboard_summary_url(),
            "Requesting dashboard summary"
        );
        let api = Arc::clone(&self.api);
        let event_sender = self.event_sender.clone();
        tokio::spawn(async move {
            let event = Self::fetch(api.as_ref(), request).await;
            event_sender.send_event(event).await;
        })
    }

    /// Perform one request and turn the result into an event.
    pub async fn fetch(api: &dyn GradebookApi, request: FetchRequest) -> Event {
        match api.dashboard_summary().await {
            Ok(summary) => Event::loaded(request, summary),
            Err(e) => Event::failed(request, e),
        }
    }
}
