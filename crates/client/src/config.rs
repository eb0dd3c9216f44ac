//! Client configuration.

use std::time::Duration;

/// Default request timeout for all API calls.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Configuration for an [`crate::ApiClient`].
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Backend origin, e.g. `https://api.aaaj.fr`. The `/api/v1` prefix is
    /// appended by the client.
    pub base_url: String,
    pub timeout: Duration,
}

/// Errors reading configuration from the environment.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("missing environment variable {0}")]
    MissingVar(&'static str),

    #[error("invalid value '{value}' for {name}")]
    InvalidVar { name: &'static str, value: String },
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Read configuration from the environment (a `.env` file is honored
    /// if present): `AAAJ_API_URL` is required, `AAAJ_API_TIMEOUT_SECS`
    /// optional.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let base_url =
            std::env::var("AAAJ_API_URL").map_err(|_| ConfigError::MissingVar("AAAJ_API_URL"))?;

        let timeout = match std::env::var("AAAJ_API_TIMEOUT_SECS") {
            Ok(value) => {
                let secs: u64 = value.parse().map_err(|_| ConfigError::InvalidVar {
                    name: "AAAJ_API_TIMEOUT_SECS",
                    value,
                })?;
                Duration::from_secs(secs)
            }
            Err(_) => DEFAULT_TIMEOUT,
        };

        Ok(Self { base_url, timeout })
    }

    /// Versioned API root all endpoint paths are joined onto.
    pub fn api_root(&self) -> String {
        format!("{}/api/v1", self.base_url.trim_end_matches('/'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_root_normalizes_trailing_slash() {
        assert_eq!(
            ClientConfig::new("https://api.aaaj.fr/").api_root(),
            "https://api.aaaj.fr/api/v1"
        );
        assert_eq!(
            ClientConfig::new("http://localhost:3000").api_root(),
            "http://localhost:3000/api/v1"
        );
    }

    #[test]
    fn from_env_requires_the_api_url() {
        // Sequenced in one test: env vars are process-global.
        std::env::remove_var("AAAJ_API_URL");
        assert!(matches!(
            ClientConfig::from_env(),
            Err(ConfigError::MissingVar("AAAJ_API_URL"))
        ));

        std::env::set_var("AAAJ_API_URL", "http://localhost:3000");
        std::env::set_var("AAAJ_API_TIMEOUT_SECS", "30");
        let config = ClientConfig::from_env().unwrap();
        assert_eq!(config.base_url, "http://localhost:3000");
        assert_eq!(config.timeout, Duration::from_secs(30));

        std::env::set_var("AAAJ_API_TIMEOUT_SECS", "not-a-number");
        assert!(matches!(
            ClientConfig::from_env(),
            Err(ConfigError::InvalidVar { .. })
        ));

        std::env::remove_var("AAAJ_API_URL");
        std::env::remove_var("AAAJ_API_TIMEOUT_SECS");
    }
}
