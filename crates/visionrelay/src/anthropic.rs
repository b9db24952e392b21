use crate::config::RelayConfig;
use crate::prelude::*;
use visionrelay_core::analyze::{MessagesRequest, MessagesResponse};

pub const ANTHROPIC_VERSION: &str = "2023-06-01";

/// Thin client for the Anthropic Messages API. One call per request, no retries.
#[derive(Debug, Clone)]
pub struct AnthropicClient {
    http: reqwest::Client,
    base_url: String,
}

impl AnthropicClient {
    pub fn new(config: &RelayConfig) -> Result<Self, Error> {
        use reqwest::header::{HeaderMap, HeaderName, HeaderValue, CONTENT_TYPE};

        let mut headers = HeaderMap::new();
        let mut api_key = HeaderValue::from_str(&config.api_key)
            .map_err(|e| Error::Config(f!("Invalid API key header value: {e}")))?;
        api_key.set_sensitive(true);
        headers.insert(HeaderName::from_static("x-api-key"), api_key);
        headers.insert(
            HeaderName::from_static("anthropic-version"),
            HeaderValue::from_static(ANTHROPIC_VERSION),
        );
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| Error::Config(f!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            http,
            base_url: config.anthropic_url.clone(),
        })
    }

    pub async fn create_message(
        &self,
        request: &MessagesRequest,
    ) -> Result<MessagesResponse, Error> {
        let url = f!("{}/v1/messages", self.base_url);

        let response = self
            .http
            .post(&url)
            .json(request)
            .send()
            .await
            .map_err(|e| Error::Network(f!("Failed to call {url}: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Upstream {
                status: status.as_u16(),
                body,
            });
        }

        response
            .json::<MessagesResponse>()
            .await
            .map_err(|e| Error::InvalidResponse(e.to_string()))
    }
}
