use thiserror::Error;

pub type LookupResult<T> = Result<T, LookupError>;

#[derive(Error, Debug)]
pub enum LookupError {
    #[error("at least one repository name must be specified")]
    EmptyInput,

    #[error("repository name is incorrectly formatted: {0}")]
    InvalidRepoName(String),

    /// The HTTP exchange failed: transport error or non-success status.
    /// Requests are never retried.
    #[error("GitHub API request failed: {0}")]
    Upstream(#[from] reqwest::Error),

    #[error("error parsing JSON from GitHub API response: {0}")]
    MalformedResponse(#[from] serde_json::Error),

    /// The response parsed as JSON but carried no usable release tag.
    /// The raw body is kept for diagnosis.
    #[error("error extracting version from GitHub API response:\n{body}")]
    MissingVersion { body: String },
}
