//! gh-latest
//!
//! This crate looks up the latest tagged release of public GitHub
//! repositories. The library exposes a single lookup operation over the
//! GitHub releases API; the `gh-latest` binary is a thin CLI on top of it.
//!
//! The release tag is returned exactly as the repository defines it. Most
//! repositories use the `vX.X.X` convention while some use `X.X.X` or
//! something else entirely; callers strip prefixes or reformat themselves.

pub use crate::config::Config;
pub use crate::core::{LookupError, LookupResult};
pub use crate::di::ReleaseSource;
pub use crate::github::{GitHubClient, ReleaseRecord, RepoName};
pub use crate::lookup::latest_release_tags;

/// Error types and result alias.
pub mod core;

/// Client construction options.
pub mod config;

/// GitHub API client and wire types.
pub mod github;

/// Dependency injection infrastructure.
pub mod di;

/// The latest-release lookup operation.
pub mod lookup;
