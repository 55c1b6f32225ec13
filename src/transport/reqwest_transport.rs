//! reqwest implementation of [`FormTransport`].

use std::time::Duration;

use async_trait::async_trait;
use http::header::{ACCEPT, CONTENT_TYPE};
use reqwest::Client;
use url::Url;

use super::{FormTransport, HttpReply};
use crate::error::ReviewKitError;

const JSON_MEDIA_TYPE: &str = "application/json";

/// Posts form payloads to a server rooted at a base URL.
#[derive(Debug, Clone)]
pub struct HttpFormTransport {
    client: Client,
    base_url: Url,
}

impl HttpFormTransport {
    /// Builds a transport for `base_url` with a per-request timeout.
    ///
    /// # Errors
    ///
    /// Returns [`ReviewKitError::Configuration`] when the URL cannot be
    /// parsed or the HTTP client cannot be built.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ReviewKitError> {
        let parsed = Url::parse(base_url).map_err(|error| ReviewKitError::Configuration {
            message: format!("invalid base URL '{base_url}': {error}"),
        })?;
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|error| ReviewKitError::Configuration {
                message: format!("failed to configure HTTP client: {error}"),
            })?;

        Ok(Self {
            client,
            base_url: parsed,
        })
    }

    fn endpoint(&self, path: &str) -> Result<Url, ReviewKitError> {
        self.base_url
            .join(path)
            .map_err(|error| ReviewKitError::Configuration {
                message: format!("invalid endpoint path '{path}': {error}"),
            })
    }
}

#[async_trait]
impl FormTransport for HttpFormTransport {
    async fn post_json(
        &self,
        path: &str,
        body: &serde_json::Value,
    ) -> Result<HttpReply, ReviewKitError> {
        let endpoint = self.endpoint(path)?;
        tracing::debug!(%endpoint, "posting form payload");

        let response = self
            .client
            .post(endpoint)
            .header(CONTENT_TYPE, JSON_MEDIA_TYPE)
            .header(ACCEPT, JSON_MEDIA_TYPE)
            .json(body)
            .send()
            .await
            .map_err(|error| ReviewKitError::Network {
                message: format!("request to {path} failed: {error}"),
            })?;

        let status = response.status().as_u16();
        let text = response
            .text()
            .await
            .map_err(|error| ReviewKitError::Network {
                message: format!("reading response from {path} failed: {error}"),
            })?;

        Ok(HttpReply::new(status, text))
    }
}
