//! GitHub API type definitions

use crate::core::LookupError;
use regex::Regex;
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

/// Shape check for repository names: lowercase alphanumeric owner with
/// hyphens, a single separating slash, and a non-whitespace name.
fn repo_name_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^[a-z0-9-]+/[a-z0-9\S]+$").expect("hard-coded pattern compiles")
    })
}

/// A validated `owner/name` repository identifier.
///
/// Construction is the only validation point: an existing `RepoName`
/// always matches the accepted shape and can be substituted into API
/// URLs without further checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoName(String);

impl RepoName {
    /// The full `owner/name` string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for RepoName {
    type Err = LookupError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if !repo_name_pattern().is_match(s) {
            return Err(LookupError::InvalidRepoName(s.to_string()));
        }
        Ok(Self(s.to_string()))
    }
}

impl fmt::Display for RepoName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The decoded body of a latest-release response.
///
/// Only the fields this crate consumes are declared; GitHub sends many
/// more. `tag_name` stays optional so that a parseable body without the
/// field is distinguishable from an unparseable one.
#[derive(Debug, Clone, Deserialize)]
pub struct ReleaseRecord {
    /// Tag label of the release, exactly as the repository defines it.
    pub tag_name: Option<String>,
}

impl ReleaseRecord {
    /// The release tag, if present and non-empty.
    pub fn tag(&self) -> Option<&str> {
        self.tag_name.as_deref().filter(|tag| !tag.is_empty())
    }
}
