use std::env::vars;

use log::info;
use serde::Deserialize;

/// Default location of the authentication backend.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8080";

/// Where the controller sends its requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BusinessConfig {
    pub api_base_url: String,
}

/// Environment variables understood by [`BusinessConfig::from_env`].
#[derive(Debug, Default, Deserialize)]
struct RawConfig {
    authwindow_api_url: Option<String>,
}

impl BusinessConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            api_base_url: base_url.into(),
        }
    }

    /// Reads `AUTHWINDOW_API_URL`, falling back to [`DEFAULT_API_BASE_URL`].
    pub fn from_env() -> Self {
        let raw: RawConfig = serde_env::from_iter(vars()).unwrap_or_default();
        Self::from_raw(raw)
    }

    fn from_raw(raw: RawConfig) -> Self {
        match raw.authwindow_api_url {
            Some(url) if !url.trim().is_empty() => {
                info!("Using provided AUTHWINDOW_API_URL: {url}");
                Self::new(url.trim())
            }
            _ => Self::default(),
        }
    }

    /// Joins `path` onto the base URL without doubling the slash.
    pub fn api_url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.api_base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

impl Default for BusinessConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE_URL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_env::from_iter;

    #[test]
    fn default_points_at_localhost() {
        let config = BusinessConfig::default();
        assert_eq!(config.api_base_url, "http://localhost:8080");
        assert_eq!(config.api_url("/login"), "http://localhost:8080/login");
    }

    #[test]
    fn api_url_handles_trailing_slash() {
        let config = BusinessConfig::new("http://auth.internal/");
        assert_eq!(config.api_url("register"), "http://auth.internal/register");
        assert_eq!(config.api_url("/register"), "http://auth.internal/register");
    }

    #[test]
    fn env_override_is_used() {
        let raw: RawConfig = from_iter(vec![("AUTHWINDOW_API_URL", "http://10.0.0.2:9000")])
            .expect("RawConfig should deserialize");

        let config = BusinessConfig::from_raw(raw);
        assert_eq!(config.api_base_url, "http://10.0.0.2:9000");
    }

    #[test]
    fn blank_env_value_falls_back_to_default() {
        let raw: RawConfig =
            from_iter(vec![("AUTHWINDOW_API_URL", "  ")]).expect("RawConfig should deserialize");

        assert_eq!(BusinessConfig::from_raw(raw), BusinessConfig::default());
    }

    #[test]
    fn missing_env_value_falls_back_to_default() {
        let raw: RawConfig =
            from_iter(Vec::<(&str, &str)>::new()).expect("RawConfig should deserialize");

        assert_eq!(BusinessConfig::from_raw(raw), BusinessConfig::default());
    }
}
