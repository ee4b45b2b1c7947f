//! HTTP dispatcher for the completion endpoint.

use crate::{GenerationPayload, NexusConfig, post_with_retries};
use nexus_core::{GenerationRequest, RawResponse, RetryPolicy};
use nexus_error::{ClientResult, DecodeError, TransportError, TransportErrorKind};
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, error, instrument};

/// Timeout applied to each POST attempt.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Client for a Groq-style text completion endpoint.
///
/// Holds the endpoint URL, the bearer token, and the retry policy. Each
/// [`generate`](Self::generate) call builds a fresh wire payload, POSTs it,
/// and retries transport failures with exponential backoff before handing
/// the decoded payload back to the caller.
#[derive(Debug, Clone)]
pub struct NexusClient {
    client: Client,
    api_key: String,
    api_url: String,
    retry: RetryPolicy,
}

impl NexusClient {
    /// Creates a new client for the given endpoint.
    #[instrument(skip(api_key, api_url, retry))]
    pub fn new(
        api_key: impl Into<String>,
        api_url: impl Into<String>,
        retry: RetryPolicy,
    ) -> Self {
        let client = Client::new();
        let api_url = api_url.into();

        debug!(url = %api_url, max_retries = *retry.max_retries(), "Created client");

        Self {
            client,
            api_key: api_key.into(),
            api_url,
            retry,
        }
    }

    /// Creates a client from resolved configuration.
    pub fn from_config(config: &NexusConfig) -> Self {
        Self::new(
            config.api_key().clone(),
            config.api_url().clone(),
            config.retry().clone(),
        )
    }

    /// Sends a generation request and returns the decoded payload.
    ///
    /// Transport failures (connection errors, timeouts, non-2xx statuses)
    /// are retried per the client's [`RetryPolicy`]; a body that fails to
    /// decode as JSON after a successful transport call surfaces
    /// immediately as a decode error.
    ///
    /// # Errors
    ///
    /// Returns an error once the retry budget is exhausted or the response
    /// body is not valid JSON.
    #[instrument(skip(self, req), fields(url = %self.api_url))]
    pub async fn generate(&self, req: &GenerationRequest) -> ClientResult<RawResponse> {
        let payload = GenerationPayload::from(req);

        debug!(
            max_tokens = *payload.max_tokens(),
            temperature = *payload.temperature(),
            "Sending request"
        );

        post_with_retries(&self.retry, || self.post_once(&payload)).await
    }

    /// One POST attempt: send, check status, decode.
    async fn post_once(&self, payload: &GenerationPayload) -> ClientResult<RawResponse> {
        let response = self
            .client
            .post(&self.api_url)
            .timeout(REQUEST_TIMEOUT)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(payload)
            .send()
            .await
            .map_err(|e| {
                error!(error = ?e, "HTTP request failed");
                let kind = if e.is_timeout() {
                    TransportErrorKind::Timeout(e.to_string())
                } else {
                    TransportErrorKind::Connection(e.to_string())
                };
                TransportError::new(kind)
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            error!(status = %status, error = %error_text, "API error");

            return Err(TransportError::new(TransportErrorKind::Http {
                status_code: status.as_u16(),
                message: error_text,
            })
            .into());
        }

        let raw: RawResponse = response.json().await.map_err(|e| {
            error!(error = ?e, "Failed to decode response body");
            DecodeError::new(format!("Failed to parse JSON: {}", e))
        })?;

        debug!("Received response");
        Ok(raw)
    }

    /// Returns the endpoint URL.
    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    /// Returns the retry policy.
    pub fn retry(&self) -> &RetryPolicy {
        &self.retry
    }
}
