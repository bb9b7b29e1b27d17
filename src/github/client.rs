//! GitHub API client implementation

use crate::config::Config;
use crate::core::{LookupError, LookupResult};
use crate::di::ReleaseSource;
use crate::github::types::{ReleaseRecord, RepoName};
use async_trait::async_trait;
use reqwest::{header, Client as HttpClient};
use tracing::debug;

/// Client for the GitHub releases API.
///
/// Requests are anonymous, so only public repositories can be looked
/// up. Rate limiting, retries and pagination are the caller's problem;
/// this client issues exactly one request per lookup.
pub struct GitHubClient {
    http_client: HttpClient,
    api_url: String,
}

impl GitHubClient {
    /// Create a new GitHub client from the given options.
    pub fn new(config: &Config) -> LookupResult<Self> {
        let mut headers = header::HeaderMap::new();
        headers.insert(header::USER_AGENT, header::HeaderValue::from_static("gh-latest"));
        headers.insert(
            header::ACCEPT,
            header::HeaderValue::from_static("application/vnd.github.v3+json"),
        );

        let http_client = HttpClient::builder()
            .default_headers(headers)
            .timeout(config.timeout)
            .build()?;

        Ok(Self {
            http_client,
            api_url: config.api_url.trim_end_matches('/').to_string(),
        })
    }

    /// Fetch the latest release tag for a repository.
    ///
    /// Issues a single GET against `/repos/{owner}/{name}/releases/latest`
    /// and extracts `tag_name` from the JSON body.
    pub async fn latest_release_tag(&self, repo: &RepoName) -> LookupResult<String> {
        let url = format!("{}/repos/{}/releases/latest", self.api_url, repo);
        debug!(%repo, %url, "fetching latest release");

        let response = self
            .http_client
            .get(&url)
            .send()
            .await?
            .error_for_status()?;

        let body = response.text().await?;
        let record: ReleaseRecord = serde_json::from_str(&body)?;

        match record.tag() {
            Some(tag) => Ok(tag.to_string()),
            None => Err(LookupError::MissingVersion { body }),
        }
    }
}

#[async_trait]
impl ReleaseSource for GitHubClient {
    async fn latest_release_tag(&self, repo: &RepoName) -> LookupResult<String> {
        Self::latest_release_tag(self, repo).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_client(api_url: &str) -> GitHubClient {
        GitHubClient::new(&Config {
            api_url: api_url.to_string(),
            ..Config::default()
        })
        .unwrap()
    }

    fn repo(name: &str) -> RepoName {
        name.parse().unwrap()
    }

    #[test]
    fn test_client_trims_trailing_slash() {
        let client = test_client("https://api.github.com/");
        assert_eq!(client.api_url, "https://api.github.com");
    }

    #[tokio::test]
    async fn test_latest_release_tag() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/repos/ansible/ansible/releases/latest"))
            .and(header("accept", "application/vnd.github.v3+json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "tag_name": "v1.0.0",
                "name": "v1.0.0",
                "prerelease": false,
            })))
            .mount(&mock_server)
            .await;

        let client = test_client(&mock_server.uri());
        let tag = client
            .latest_release_tag(&repo("ansible/ansible"))
            .await
            .unwrap();
        assert_eq!(tag, "v1.0.0");
    }

    #[tokio::test]
    async fn test_latest_release_tag_non_json_body() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/repos/ansible/ansible/releases/latest"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not-json"))
            .mount(&mock_server)
            .await;

        let client = test_client(&mock_server.uri());
        let err = client
            .latest_release_tag(&repo("ansible/ansible"))
            .await
            .unwrap_err();
        assert!(matches!(err, LookupError::MalformedResponse(_)));
    }

    #[tokio::test]
    async fn test_latest_release_tag_missing_version_keeps_body() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/repos/ansible/ansible/releases/latest"))
            .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"name": "nightly"}"#))
            .mount(&mock_server)
            .await;

        let client = test_client(&mock_server.uri());
        let err = client
            .latest_release_tag(&repo("ansible/ansible"))
            .await
            .unwrap_err();
        assert!(matches!(err, LookupError::MissingVersion { .. }));
        assert!(err.to_string().contains(r#"{"name": "nightly"}"#));
    }

    #[tokio::test]
    async fn test_latest_release_tag_empty_tag_is_missing_version() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/repos/ansible/ansible/releases/latest"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({ "tag_name": "" })),
            )
            .mount(&mock_server)
            .await;

        let client = test_client(&mock_server.uri());
        let err = client
            .latest_release_tag(&repo("ansible/ansible"))
            .await
            .unwrap_err();
        assert!(matches!(err, LookupError::MissingVersion { .. }));
    }

    #[tokio::test]
    async fn test_latest_release_tag_not_found_status() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/repos/ansible/no-such-repo/releases/latest"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&mock_server)
            .await;

        let client = test_client(&mock_server.uri());
        let err = client
            .latest_release_tag(&repo("ansible/no-such-repo"))
            .await
            .unwrap_err();
        assert!(matches!(err, LookupError::Upstream(_)));
    }
}
