//! Mock implementations of service traits for testing

use super::traits::ReleaseSource;
use crate::core::{LookupError, LookupResult};
use crate::github::types::RepoName;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Mock release source for testing
///
/// Serves tags from an in-memory map and records the order in which
/// repositories were requested. Unknown repositories behave like an
/// upstream response without a tag.
#[derive(Clone, Default)]
pub struct MockReleaseSource {
    tags: HashMap<String, String>,
    requests: Arc<Mutex<Vec<String>>>,
}

impl MockReleaseSource {
    /// Create an empty mock source
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a tag to serve for a repository
    pub fn with_tag(mut self, repo: &str, tag: &str) -> Self {
        self.tags.insert(repo.to_string(), tag.to_string());
        self
    }

    /// Repositories requested so far, in call order
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl ReleaseSource for MockReleaseSource {
    async fn latest_release_tag(&self, repo: &RepoName) -> LookupResult<String> {
        self.requests.lock().unwrap().push(repo.to_string());

        self.tags
            .get(repo.as_str())
            .cloned()
            .ok_or_else(|| LookupError::MissingVersion {
                body: "{}".to_string(),
            })
    }
}
