//! # GitHub organization client
//!
//! A small client for reading an organization's metadata and public
//! repositories from the GitHub REST API.
//!
//! - [`nested::access_nested_map`] resolves key paths inside JSON documents.
//! - [`memo::Memo`] caches a computed value per owning instance.
//! - [`fetch::JsonFetcher`] is the seam through which documents are retrieved.
//! - [`GithubOrgClient`] ties the three together.
//!
//! # Examples
//!
//! ```rust,no_run
//! use github_org_client::{ClientConfig, GithubOrgClient};
//!
//! # async fn run() -> Result<(), github_org_client::Error> {
//! let client = GithubOrgClient::new(ClientConfig::new("google"))?;
//! let apache = client.public_repos(Some("apache-2.0")).await?;
//! println!("{} repositories are Apache-2.0 licensed", apache.len());
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod client_config;
pub mod convert;
pub mod fetch;
pub mod memo;
pub mod nested;

pub use client::{GithubOrgClient, has_license};
pub use client_config::ClientConfig;

/// Different types of errors that can occur when using the client.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Nested(#[from] nested::Error),
    #[error("Fetch error: {0}")]
    Fetch(#[from] fetch::Error),
    #[error("Configuration error: {0}")]
    Config(#[from] client_config::Error),
    #[error("Unexpected payload: {0}")]
    UnexpectedPayload(String),
}
