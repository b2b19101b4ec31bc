use std::future::Future;
use std::time::Duration;

use reqwest::header::AUTHORIZATION;
use reqwest::{Client, StatusCode};
use serde_json::Value;

use herald_common::error::PollError;

/// Source of raw homework status payloads.
pub trait StatusSource {
    /// Fetch every status change since `from_date` (Unix seconds).
    fn fetch(&self, from_date: i64) -> impl Future<Output = Result<Value, PollError>> + Send;
}

/// HTTP client for the homework status endpoint.
///
/// Performs exactly one request per call. Retrying is the poll loop's job.
pub struct StatusEndpointClient {
    client: Client,
    endpoint: String,
    token: String,
}

impl StatusEndpointClient {
    pub fn new(endpoint: String, token: String, timeout: Duration) -> reqwest::Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            endpoint,
            token,
        })
    }
}

impl StatusSource for StatusEndpointClient {
    async fn fetch(&self, from_date: i64) -> Result<Value, PollError> {
        tracing::debug!(endpoint = %self.endpoint, from_date, "Requesting homework statuses");

        let response = self
            .client
            .get(&self.endpoint)
            .header(AUTHORIZATION, format!("OAuth {}", self.token))
            .query(&[("from_date", from_date)])
            .send()
            .await
            .map_err(|e| PollError::Transport(e.to_string()))?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(PollError::UnexpectedStatus {
                status: status.as_u16(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| PollError::Transport(e.to_string()))?;

        serde_json::from_slice(&body).map_err(|e| PollError::MalformedPayload(e.to_string()))
    }
}
