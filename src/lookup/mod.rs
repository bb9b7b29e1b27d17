//! The latest-release lookup operation.

use crate::core::{LookupError, LookupResult};
use crate::di::ReleaseSource;
use crate::github::types::RepoName;
use tracing::debug;

/// Look up the latest release tag for each repository.
///
/// Repositories are processed strictly one after another, and each name
/// is validated immediately before its request goes out. The returned
/// sequence has the same length and order as `repos`. On any failure
/// the whole call fails; no partial result is returned.
///
/// # Example
///
/// ```no_run
/// use gh_latest::{latest_release_tags, Config, GitHubClient};
///
/// # async fn example() -> gh_latest::LookupResult<()> {
/// let client = GitHubClient::new(&Config::from_env())?;
/// let repos = vec!["ansible/ansible".to_string()];
/// let versions = latest_release_tags(&client, &repos).await?;
/// println!("{}", versions[0]);
/// # Ok(())
/// # }
/// ```
pub async fn latest_release_tags(
    source: &dyn ReleaseSource,
    repos: &[String],
) -> LookupResult<Vec<String>> {
    if repos.is_empty() {
        return Err(LookupError::EmptyInput);
    }

    let mut versions = Vec::with_capacity(repos.len());

    for repo in repos {
        let repo: RepoName = repo.parse()?;
        debug!(%repo, "github version lookup");

        let version = source.latest_release_tag(&repo).await?;
        versions.push(version);
    }

    Ok(versions)
}
