//! # GitHub organization client
//!
//! [`GithubOrgClient`] answers questions about one organization: its metadata,
//! where its repositories are listed, and which of those repositories carry a
//! given license. Both remote documents are fetched at most once per client
//! and then served from [`Memo`] slots owned by the client.

use log::{debug, trace};
use serde_json::Value;
use url::Url;

use crate::Error;
use crate::client_config::ClientConfig;
use crate::fetch::{HttpJsonFetcher, JsonFetcher};
use crate::memo::Memo;
use crate::nested::access_nested_map;

/// Client for a single GitHub organization.
pub struct GithubOrgClient<F = HttpJsonFetcher> {
    client_config: ClientConfig,
    fetcher: F,
    org_cache: Memo<Value>,
    repos_cache: Memo<Value>,
}

impl GithubOrgClient<HttpJsonFetcher> {
    /// Create a new client that talks to GitHub over HTTP.
    ///
    /// # Arguments
    ///
    /// * `client_config` - The organization and API settings.
    ///
    /// # Returns
    ///
    /// A new client, or an error if the HTTP fetcher cannot be built.
    pub fn new(client_config: ClientConfig) -> Result<Self, Error> {
        let fetcher = HttpJsonFetcher::new(&client_config)?;
        Ok(Self::with_fetcher(client_config, fetcher))
    }
}

impl<F: JsonFetcher> GithubOrgClient<F> {
    /// Create a client that retrieves documents through `fetcher`.
    pub fn with_fetcher(client_config: ClientConfig, fetcher: F) -> Self {
        Self {
            client_config,
            fetcher,
            org_cache: Memo::new(),
            repos_cache: Memo::new(),
        }
    }

    pub fn org_name(&self) -> &str {
        &self.client_config.org
    }

    /// The organization resource URL, `{api_url}/orgs/{org}`.
    pub fn org_url(&self) -> Result<Url, Error> {
        Ok(self.client_config.org_url()?)
    }

    /// Organization metadata.
    ///
    /// The first successful call fetches the organization document; later calls
    /// return the cached document. A failed fetch is not cached.
    pub async fn org(&self) -> Result<&Value, Error> {
        self.org_cache.get_or_try_compute(|| self.fetch_org()).await
    }

    /// The URL listing the organization's public repositories.
    ///
    /// Read from the `repos_url` field of [`GithubOrgClient::org`].
    pub async fn public_repos_url(&self) -> Result<String, Error> {
        let org = self.org().await?;
        let repos_url = access_nested_map(org, ["repos_url"])?;
        repos_url
            .as_str()
            .map(str::to_string)
            .ok_or_else(|| Error::UnexpectedPayload(format!("repos_url is not a string: {repos_url}")))
    }

    /// The raw repository list, fetched from [`GithubOrgClient::public_repos_url`].
    ///
    /// Cached the same way as [`GithubOrgClient::org`].
    pub async fn repos_payload(&self) -> Result<&Value, Error> {
        self.repos_cache
            .get_or_try_compute(|| self.fetch_repos())
            .await
    }

    /// Names of the organization's public repositories.
    ///
    /// # Arguments
    ///
    /// * `license` - When set, only repositories for which [`has_license`]
    ///   holds are returned.
    ///
    /// # Returns
    ///
    /// Repository names in the order the API listed them.
    pub async fn public_repos(&self, license: Option<&str>) -> Result<Vec<String>, Error> {
        let payload = self.repos_payload().await?;
        let repos = payload.as_array().ok_or_else(|| {
            Error::UnexpectedPayload("repository list is not an array".to_string())
        })?;

        let mut names = Vec::new();
        for repo in repos {
            if license.is_some_and(|license_key| !has_license(repo, license_key)) {
                continue;
            }
            let name = access_nested_map(repo, ["name"])?;
            let name = name.as_str().ok_or_else(|| {
                Error::UnexpectedPayload(format!("repository name is not a string: {name}"))
            })?;
            names.push(name.to_string());
        }
        debug!(
            "Organization {} has {} matching repositories",
            self.client_config.org,
            names.len()
        );
        Ok(names)
    }

    async fn fetch_org(&self) -> Result<Value, Error> {
        let url = self.org_url()?;
        debug!("Fetching organization {} from {url}", self.client_config.org);
        Ok(self.fetcher.get_json(url.as_str()).await?)
    }

    async fn fetch_repos(&self) -> Result<Value, Error> {
        let url = self.public_repos_url().await?;
        debug!(
            "Fetching repositories of organization {} from {url}",
            self.client_config.org
        );
        Ok(self.fetcher.get_json(&url).await?)
    }
}

/// Whether `repo.license.key` equals `license_key`.
///
/// A repository without a license, including one whose `license` is `null`,
/// simply does not match.
pub fn has_license(repo: &Value, license_key: &str) -> bool {
    match access_nested_map(repo, ["license", "key"]) {
        Ok(key) => key.as_str() == Some(license_key),
        Err(e) => {
            trace!("Repository has no license key: {e}");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::{StaticFetcher, setup};
    use serde_json::json;

    const ORG_URL: &str = "https://api.github.com/orgs/google";
    const REPOS_URL: &str = "https://api.github.com/orgs/google/repos";

    fn test_client(fetcher: StaticFetcher) -> GithubOrgClient<StaticFetcher> {
        GithubOrgClient::with_fetcher(ClientConfig::new("google"), fetcher)
    }

    fn google_fetcher() -> StaticFetcher {
        StaticFetcher::new()
            .with(ORG_URL, json!({"login": "google", "repos_url": REPOS_URL}))
            .with(
                REPOS_URL,
                json!([
                    {"name": "Google", "license": {"key": "apache-2.0"}},
                    {"name": "Twitter"},
                ]),
            )
    }

    #[tokio::test]
    async fn test_org() {
        setup();
        for org_name in ["google", "abc"] {
            let org_url = format!("https://api.github.com/orgs/{org_name}");
            let fetcher = StaticFetcher::new().with(&org_url, json!({"login": org_name}));
            let client = GithubOrgClient::with_fetcher(ClientConfig::new(org_name), fetcher);

            assert_eq!(client.org_name(), org_name);
            assert_eq!(client.org().await.unwrap(), &json!({"login": org_name}));
            client.org().await.unwrap();
            assert_eq!(client.fetcher.calls(), vec![org_url]);
        }
    }

    #[tokio::test]
    async fn test_public_repos_url() {
        setup();
        let fetcher = StaticFetcher::new().with(ORG_URL, json!({"repos_url": "World"}));
        let client = test_client(fetcher);
        assert_eq!(client.public_repos_url().await.unwrap(), "World");
    }

    #[tokio::test]
    async fn test_public_repos_url_missing() {
        let client = test_client(StaticFetcher::new().with(ORG_URL, json!({"login": "google"})));
        match client.public_repos_url().await {
            Err(Error::Nested(e)) => assert_eq!(e.key(), "repos_url"),
            other => panic!("expected a missing key, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_public_repos() {
        setup();
        let client = test_client(google_fetcher());

        assert_eq!(
            client.public_repos(None).await.unwrap(),
            vec!["Google", "Twitter"]
        );
        client.public_repos(None).await.unwrap();
        assert_eq!(client.fetcher.calls(), vec![ORG_URL, REPOS_URL]);
    }

    #[tokio::test]
    async fn test_public_repos_with_license() {
        let client = test_client(google_fetcher());

        assert_eq!(
            client.public_repos(Some("apache-2.0")).await.unwrap(),
            vec!["Google"]
        );
        assert!(client.public_repos(Some("XLICENSE")).await.unwrap().is_empty());
        assert_eq!(client.fetcher.calls().len(), 2);
    }

    #[tokio::test]
    async fn test_public_repos_rejects_non_array() {
        let fetcher = StaticFetcher::new()
            .with(ORG_URL, json!({"repos_url": REPOS_URL}))
            .with(REPOS_URL, json!({"message": "rate limited"}));
        let client = test_client(fetcher);
        assert!(matches!(
            client.public_repos(None).await,
            Err(Error::UnexpectedPayload(_))
        ));
    }

    #[tokio::test]
    async fn test_public_repos_missing_name() {
        let fetcher = StaticFetcher::new()
            .with(ORG_URL, json!({"repos_url": REPOS_URL}))
            .with(REPOS_URL, json!([{"id": 1}]));
        let client = test_client(fetcher);
        match client.public_repos(None).await {
            Err(Error::Nested(e)) => assert_eq!(e.key(), "name"),
            other => panic!("expected a missing key, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_failed_fetch_is_retried() {
        setup();
        let fetcher = StaticFetcher::new();
        let client = test_client(fetcher);

        assert!(matches!(client.org().await, Err(Error::Fetch(_))));
        assert!(client.org_cache.get().is_none());

        client.fetcher.insert(ORG_URL, json!({"login": "google"}));
        assert_eq!(client.org().await.unwrap(), &json!({"login": "google"}));
        assert_eq!(client.fetcher.calls(), vec![ORG_URL, ORG_URL]);
    }

    #[tokio::test]
    async fn test_clients_cache_independently() {
        let first = test_client(google_fetcher());
        let second = test_client(google_fetcher());

        first.org().await.unwrap();
        assert!(first.org_cache.get().is_some());
        assert!(second.org_cache.get().is_none());
        assert!(second.fetcher.calls().is_empty());
    }

    #[test]
    fn test_has_license() {
        let cases = [
            (json!({"license": {"key": "my_license"}}), "my_license", true),
            (json!({"license": {"key": "other_license"}}), "my_license", false),
            (json!({"license": null}), "my_license", false),
            (json!({"name": "unlicensed"}), "my_license", false),
            (json!({"license": {"key": 7}}), "7", false),
        ];
        for (repo, license_key, expected) in cases {
            assert_eq!(
                has_license(&repo, license_key),
                expected,
                "repo {repo}, license {license_key}"
            );
        }
    }
}
