//! Trait definitions for dependency injection

use crate::core::LookupResult;
use crate::github::types::RepoName;
use async_trait::async_trait;

/// Trait for fetching release information
///
/// Implementations should be thread-safe (Send + Sync). The contract
/// mirrors the upstream API: one request per call, no retries, failure
/// on anything but a usable tag.
#[async_trait]
pub trait ReleaseSource: Send + Sync {
    /// Get the latest release tag for a repository
    async fn latest_release_tag(&self, repo: &RepoName) -> LookupResult<String>;
}
