//! Configuration management for the GitHub organization client.
//!
//! This module provides the `ClientConfig` struct, which names the organization
//! to query and describes how to reach the GitHub REST API. It supports both
//! direct configuration and environment variable-based configuration.
//!
//! # Configuration Sources
//!
//! - **Direct Configuration**: `ClientConfig::new` with defaults, then override fields
//! - **Environment Variables**: `ClientConfig::from_env`
//!
//! # Examples
//!
//! ## Direct Configuration
//!
//! ```rust
//! use github_org_client::client_config::ClientConfig;
//!
//! let mut config = ClientConfig::new("google");
//! config.token = Some("ghp_example".to_string());
//! assert_eq!(config.api_url, "https://api.github.com");
//! ```
//!
//! ## Environment Variable Configuration
//!
//! ```rust,no_run
//! use github_org_client::client_config::ClientConfig;
//!
//! // Requires the GITHUB_ORG environment variable
//! let config = ClientConfig::from_env()?;
//! # Ok::<(), github_org_client::client_config::Error>(())
//! ```

use url::Url;

/// Public GitHub REST endpoint.
pub const DEFAULT_API_URL: &str = "https://api.github.com";

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Environment variable is not set: {1}")]
    EnvVar(std::env::VarError, String),
    #[error("Url parse error: {0}")]
    UrlParse(#[from] url::ParseError),
    #[error("API url cannot be used as a base: {0}")]
    CannotBeABase(String),
}

/// Configuration settings for the GitHub organization client.
///
/// # Required Fields
///
/// - `org`: The organization login, e.g. `"google"`
///
/// # Optional Fields
///
/// - `token`: Personal access token, sent as a bearer token
/// - `user_agent`: Overrides the default `github-org-client/<version>`
#[derive(Clone, Debug)]
pub struct ClientConfig {
    /// The login of the organization to query.
    pub org: String,

    /// Base URL of the GitHub REST API.
    ///
    /// Defaults to `https://api.github.com`. GitHub Enterprise installations
    /// use something like `https://github.example.com/api/v3`.
    pub api_url: String,

    /// Optional token for authenticated requests.
    ///
    /// Unauthenticated requests work for public data but are subject to a much
    /// lower rate limit.
    pub token: Option<String>,

    /// Value for the `User-Agent` header. GitHub rejects requests without one.
    pub user_agent: Option<String>,
}

impl ClientConfig {
    /// Create a configuration for `org` against the public GitHub API.
    pub fn new(org: impl Into<String>) -> Self {
        Self {
            org: org.into(),
            api_url: DEFAULT_API_URL.to_string(),
            token: None,
            user_agent: None,
        }
    }

    /// Create a new configuration from environment variables.
    ///
    /// | Variable            | Field        |
    /// |---------------------|--------------|
    /// | `GITHUB_ORG`        | `org` (required) |
    /// | `GITHUB_API_URL`    | `api_url`    |
    /// | `GITHUB_TOKEN`      | `token`      |
    /// | `GITHUB_USER_AGENT` | `user_agent` |
    ///
    /// # Returns
    ///
    /// A new configuration instance.
    pub fn from_env() -> Result<Self, Error> {
        let org = std::env::var("GITHUB_ORG")
            .map_err(|e| Error::EnvVar(e, "GITHUB_ORG".to_string()))?;
        let api_url = std::env::var("GITHUB_API_URL").unwrap_or(DEFAULT_API_URL.to_string());
        let token = std::env::var("GITHUB_TOKEN").ok();
        let user_agent = std::env::var("GITHUB_USER_AGENT").ok();
        Ok(Self {
            org,
            api_url,
            token,
            user_agent,
        })
    }

    /// Returns the URL of the organization resource.
    ///
    /// The organization name is appended as `orgs/{org}` to whatever path
    /// `api_url` already has, so both `https://api.github.com` and
    /// `https://github.example.com/api/v3/` work.
    ///
    /// # Examples
    ///
    /// - `api_url` `https://api.github.com`, `org` `google` gives
    ///   `https://api.github.com/orgs/google`.
    /// - `api_url` `https://github.example.com/api/v3/`, `org` `infra` gives
    ///   `https://github.example.com/api/v3/orgs/infra`.
    pub fn org_url(&self) -> Result<Url, Error> {
        let mut url = Url::parse(&self.api_url)?;
        url.path_segments_mut()
            .map_err(|_| Error::CannotBeABase(self.api_url.clone()))?
            .pop_if_empty()
            .push("orgs")
            .push(&self.org);
        Ok(url)
    }

    /// Returns the user agent to send, falling back to the crate name and version.
    pub(crate) fn get_user_agent(&self) -> String {
        self.user_agent.clone().unwrap_or_else(|| {
            concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")).to_string()
        })
    }
}
