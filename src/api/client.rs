//! Gradebook API Client
//!
//! A thin HTTP client for the grade-management backend.

use crate::api::GradebookApi;
use crate::api::error::ApiError;
use crate::consts::cli_consts::http;
use crate::environment::Environment;
use crate::summary::DashboardSummary;
use reqwest::{Client, ClientBuilder, Response};

// User-Agent string with client version
const USER_AGENT: &str = concat!("gradebook-dashboard/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone)]
pub struct GradebookClient {
    client: Client,
    environment: Environment,
}

impl GradebookClient {
    pub fn new(environment: Environment) -> Result<Self, ApiError> {
        let client = ClientBuilder::new()
            .connect_timeout(http::connect_timeout())
            .timeout(http::request_timeout())
            .user_agent(USER_AGENT)
            .build()?;
        Ok(Self {
            client,
            environment,
        })
    }

    async fn handle_response_status(response: Response) -> Result<Response, ApiError> {
        if !response.status().is_success() {
            return Err(ApiError::from_response(response).await);
        }
        Ok(response)
    }

    async fn get_json(&self, url: &str) -> Result<DashboardSummary, ApiError> {
        let response = self
            .client
            .get(url)
            .header("Accept", "application/json")
            .send()
            .await?;

        let response = Self::handle_response_status(response).await?;
        let body = response.bytes().await?;
        Ok(DashboardSummary::from_json(&body)?)
    }
}

#[async_trait::async_trait]
impl GradebookApi for GradebookClient {
    fn environment(&self) -> &Environment {
        &self.environment
    }

    async fn dashboard_summary(&self) -> Result<DashboardSummary, ApiError> {
        let url = self.environment.dashboard_summary_url();
        self.get_json(&url).await
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;
    use tokio::sync::oneshot;

    /// Serves exactly one HTTP response and reports the request line it saw.
    async fn serve_once(
        status_line: &'static str,
        body: &'static str,
    ) -> (Environment, oneshot::Receiver<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let (request_tx, request_rx) = oneshot::channel();

        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut request = Vec::new();
            let mut buf = [0u8; 1024];
            while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = socket.read(&mut buf).await.unwrap();
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&buf[..n]);
            }
            let response = format!(
                "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status_line,
                body.len(),
                body
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.ok();
            let text = String::from_utf8_lossy(&request).to_string();
            let _ = request_tx.send(text);
        });

        let environment = Environment::Custom {
            api_url: format!("http://{}", addr),
        };
        (environment, request_rx)
    }

    #[tokio::test]
    /// Should GET the fixed summary path and decode the body.
    async fn test_fetches_and_decodes_summary() {
        let (environment, request_rx) = serve_once(
            "200 OK",
            r#"{"total_students": 12, "total_courses": 3, "average_grade": 81.25, "at_risk_count": 1}"#,
        )
        .await;
        let client = GradebookClient::new(environment).unwrap();

        let summary = client.dashboard_summary().await.unwrap();
        assert_eq!(summary.total_students, 12);
        assert_eq!(summary.average_grade, 81.25);

        let request = request_rx.await.unwrap();
        assert!(request.starts_with("GET /api/dashboard HTTP/1.1"));
        assert!(request.to_lowercase().contains("user-agent: gradebook-dashboard/"));
    }

    #[tokio::test]
    /// A non-success status is an error even when the body is JSON.
    async fn test_error_status_is_http_error() {
        let (environment, _request_rx) =
            serve_once("500 Internal Server Error", r#"{"error": "boom"}"#).await;
        let client = GradebookClient::new(environment).unwrap();

        match client.dashboard_summary().await {
            Err(ApiError::Http { status, message }) => {
                assert_eq!(status, 500);
                assert!(message.contains("boom"));
            }
            other => panic!("Expected HTTP error, got {:?}", other),
        }
    }

    #[tokio::test]
    /// A body that is not JSON is a decode error.
    async fn test_non_json_body_is_decode_error() {
        let (environment, _request_rx) = serve_once("200 OK", "<html>Sign in</html>").await;
        let client = GradebookClient::new(environment).unwrap();

        let result = client.dashboard_summary().await;
        assert!(matches!(result, Err(ApiError::Decode(_))));
    }

    #[tokio::test]
    /// Connection failures surface as transport errors.
    async fn test_unreachable_backend_is_reqwest_error() {
        // Bind then drop to get a port nothing listens on.
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = GradebookClient::new(Environment::Custom {
            api_url: format!("http://{}", addr),
        })
        .unwrap();
        let result = client.dashboard_summary().await;
        assert!(matches!(result, Err(ApiError::Reqwest(_))));
    }
}
