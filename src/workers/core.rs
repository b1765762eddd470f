//! Core worker utilities

use crate::events::Event;
use tokio::sync::mpsc;

/// Delivers fetch outcomes to the UI loop.
#[derive(Clone)]
pub struct EventSender {
    sender: mpsc::Sender<Event>,
}

impl EventSender {
    pub fn new(sender: mpsc::Sender<Event>) -> Self {
        Self { sender }
    }

    /// Send an event. A closed receiver means the UI has exited, so the
    /// outcome is dropped.
    pub async fn send_event(&self, event: Event) {
        let request = event.request();
        if self.sender.send(event).await.is_err() {
            tracing::debug!(request = request.id, "UI loop gone, dropping fetch outcome");
        }
    }
}
