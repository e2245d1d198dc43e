//! Fetching JSON documents over HTTP.
//!
//! The client never talks to the network directly. It holds a [`JsonFetcher`],
//! which production code satisfies with [`HttpJsonFetcher`] and tests satisfy
//! with canned payloads.

use async_trait::async_trait;
use log::{debug, trace};
use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue};
use serde_json::Value;

use crate::client_config::ClientConfig;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Reqwest error: {0}")]
    Reqwest(#[from] reqwest::Error),
    #[error("Unexpected status {status} from {url}")]
    Status { url: String, status: u16 },
    #[error("Serde error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("Invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),
}

/// Retrieves and decodes a JSON document.
#[async_trait]
pub trait JsonFetcher: Send + Sync {
    /// Issues a GET for `url` and returns the decoded body.
    async fn get_json(&self, url: &str) -> Result<Value, Error>;
}

/// [`JsonFetcher`] backed by a shared `reqwest::Client`.
///
/// Every request carries the GitHub media type, the configured user agent and,
/// when a token is configured, a bearer `Authorization` header.
#[derive(Clone, Debug)]
pub struct HttpJsonFetcher {
    http: reqwest::Client,
}

impl HttpJsonFetcher {
    /// Create a new fetcher.
    ///
    /// # Arguments
    ///
    /// * `client_config` - Supplies the user agent and the optional token.
    ///
    /// # Returns
    ///
    /// A fetcher, or an error if the token is not a valid header value or the
    /// underlying HTTP client cannot be built.
    pub fn new(client_config: &ClientConfig) -> Result<Self, Error> {
        let mut headers = HeaderMap::new();
        headers.insert(
            ACCEPT,
            HeaderValue::from_static("application/vnd.github+json"),
        );
        if let Some(token) = &client_config.token {
            let mut value = HeaderValue::from_str(&format!("Bearer {token}"))?;
            value.set_sensitive(true);
            headers.insert(AUTHORIZATION, value);
        }

        let http = reqwest::Client::builder()
            .user_agent(client_config.get_user_agent())
            .default_headers(headers)
            .build()?;
        Ok(Self { http })
    }
}

#[async_trait]
impl JsonFetcher for HttpJsonFetcher {
    async fn get_json(&self, url: &str) -> Result<Value, Error> {
        debug!("Fetching {url}");
        let response = self.http.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            debug!("Request to {url} failed with status {status}");
            return Err(Error::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        trace!("Response body {body} for {url}");

        let value = serde_json::from_str(&body)?;
        Ok(value)
    }
}
