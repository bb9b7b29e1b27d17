use std::env;
use std::time::Duration;

/// Default base URL of the GitHub REST API.
const DEFAULT_API_URL: &str = "https://api.github.com";

/// Options for constructing a [`GitHubClient`](crate::github::GitHubClient).
///
/// The lookup itself needs no configuration file and none is read. The
/// defaults cover normal use; `GITHUB_API_URL` can point the client at a
/// different base URL (a proxy, a GitHub Enterprise host, a test server).
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the GitHub REST API.
    pub api_url: String,

    /// Timeout applied to each HTTP request.
    pub timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            timeout: Duration::from_secs(30),
        }
    }
}

impl Config {
    /// Build a config from the environment, falling back to defaults.
    pub fn from_env() -> Self {
        let api_url = env::var("GITHUB_API_URL")
            .ok()
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());

        Self {
            api_url,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.api_url, "https://api.github.com");
        assert_eq!(config.timeout, Duration::from_secs(30));
    }

    #[test]
    fn test_config_from_env_without_override() {
        env::remove_var("GITHUB_API_URL");
        let config = Config::from_env();
        assert_eq!(config.api_url, "https://api.github.com");
    }
}
