use crate::api::error::ApiError;
use crate::environment::Environment;
use crate::summary::DashboardSummary;

pub(crate) mod client;
pub use client::GradebookClient;
pub mod error;

#[cfg(test)]
use mockall::automock;

/// The backend calls the dashboard makes.
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait GradebookApi: Send + Sync {
    fn environment(&self) -> &Environment;

    /// Fetches the aggregate statistics for the dashboard tab.
    async fn dashboard_summary(&self) -> Result<DashboardSummary, ApiError>;
}
