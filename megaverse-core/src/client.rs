use std::future::Future;

use serde_json::Value;
use tracing::{debug, instrument};

use crate::error::MegaverseError;

pub const DEFAULT_BASE_URL: &str = "https://challenge.crossmint.io/api";

/// Status and decoded body of a single API call.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: Value,
}

impl ApiResponse {
    pub fn new(status: u16, body: Value) -> Self {
        Self { status, body }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn is_rate_limited(&self) -> bool {
        self.status == 429
    }
}

/// The remote calls the fetcher and placer depend on.
///
/// Non-2xx statuses are returned as values; only transport and decoding
/// failures are errors.
pub trait MegaverseApi: Send + Sync {
    fn get_goal(
        &self,
        candidate_id: &str,
    ) -> impl Future<Output = Result<ApiResponse, MegaverseError>> + Send;

    fn create(
        &self,
        endpoint: &str,
        body: &Value,
    ) -> impl Future<Output = Result<ApiResponse, MegaverseError>> + Send;
}

/// Client for the Crossmint megaverse API.
pub struct MegaverseClient {
    http: reqwest::Client,
    base_url: String,
}

impl MegaverseClient {
    /// Creates a new client against the public challenge API.
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Creates a new client with a custom base URL.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn goal_url(&self, candidate_id: &str) -> String {
        format!("{}/map/{}/goal", self.base_url, candidate_id)
    }

    fn endpoint_url(&self, endpoint: &str) -> String {
        format!("{}/{}", self.base_url, endpoint)
    }
}

impl Default for MegaverseClient {
    fn default() -> Self {
        Self::new()
    }
}

/// How a response body is decoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BodyMode {
    /// A 2xx body must be JSON.
    Strict,
    /// The body is informational; non-JSON text is kept as a string.
    Lenient,
}

fn decode_body(success: bool, text: String, mode: BodyMode) -> Result<Value, MegaverseError> {
    if text.trim().is_empty() {
        return Ok(Value::Null);
    }

    if success && mode == BodyMode::Strict {
        return Ok(serde_json::from_str(&text)?);
    }

    Ok(serde_json::from_str(&text).unwrap_or(Value::String(text)))
}

async fn read_response(
    response: reqwest::Response,
    mode: BodyMode,
) -> Result<ApiResponse, MegaverseError> {
    let status = response.status();
    let text = response.text().await?;
    let body = decode_body(status.is_success(), text, mode)?;

    Ok(ApiResponse::new(status.as_u16(), body))
}

impl MegaverseApi for MegaverseClient {
    #[instrument(skip(self))]
    async fn get_goal(&self, candidate_id: &str) -> Result<ApiResponse, MegaverseError> {
        debug!("Requesting goal map");

        let response = self.http.get(self.goal_url(candidate_id)).send().await?;
        read_response(response, BodyMode::Strict).await
    }

    #[instrument(skip(self, body))]
    async fn create(&self, endpoint: &str, body: &Value) -> Result<ApiResponse, MegaverseError> {
        debug!(%body, "Sending create request");

        let response = self
            .http
            .post(self.endpoint_url(endpoint))
            .header("Content-Type", "application/json")
            .json(body)
            .send()
            .await?;
        read_response(response, BodyMode::Lenient).await
    }
}
