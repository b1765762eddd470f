//! Event System
//!
//! Outcomes of background fetches, delivered to the UI loop.

use crate::summary::DashboardSummary;
use chrono::{DateTime, Local};
use std::fmt::Display;

/// One request for the dashboard summary. Numbers increase in the order
/// requests are issued; they say nothing about the order responses arrive in.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct FetchRequest {
    pub id: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    SummaryLoaded {
        request: FetchRequest,
        summary: DashboardSummary,
        received_at: DateTime<Local>,
    },
    SummaryFailed {
        request: FetchRequest,
        error: String,
    },
}

impl Event {
    pub fn loaded(request: FetchRequest, summary: DashboardSummary) -> Self {
        Self::SummaryLoaded {
            request,
            summary,
            received_at: Local::now(),
        }
    }

    pub fn failed(request: FetchRequest, error: impl Display) -> Self {
        Self::SummaryFailed {
            request,
            error: error.to_string(),
        }
    }

    pub fn request(&self) -> FetchRequest {
        match self {
            Event::SummaryLoaded { request, .. } | Event::SummaryFailed { request, .. } => *request,
        }
    }
}

impl Display for Event {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Event::SummaryLoaded {
                request,
                received_at,
                ..
            } => write!(
                f,
                "Summary #{} loaded at {}",
                request.id,
                received_at.format("%Y-%m-%d %H:%M:%S")
            ),
            Event::SummaryFailed { request, error } => {
                write!(f, "Summary #{} failed: {}", request.id, error)
            }
        }
    }
}
