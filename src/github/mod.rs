//! GitHub integration for release lookups
//!
//! This module provides the client used to query the GitHub releases
//! API and the wire types it exchanges:
//! - Validated `owner/name` repository identifiers
//! - The decoded latest-release record

pub mod client;
pub mod types;

pub use client::GitHubClient;
pub use types::{ReleaseRecord, RepoName};
