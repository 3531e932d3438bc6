use std::path::Path;
use std::time::Duration;
use serde::{Serialize, Deserialize};

/// User agent sent when the config does not name one.
pub const DEFAULT_USER_AGENT: &str = concat!("trade-tools/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("Missing configuration: {0}")]
    MissingConfig(String),
    #[error("Failed to read configuration: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse configuration: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Settings for [`HttpApiClient`](crate::client::http::HttpApiClient).
///
/// ```toml
/// base_url = "https://api.demotradepro.example/v1"
/// api_key = "secret"
/// timeout_secs = 10
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ClientConfig {
    pub base_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    /// Whole-request timeout. `None` leaves reqwest's default (no timeout).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

fn default_user_agent() -> String {
    DEFAULT_USER_AGENT.to_string()
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: None,
            timeout_secs: None,
            user_agent: default_user_agent(),
        }
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = Some(secs);
        self
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }

    /// Parse and validate a TOML document.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: ClientConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_toml_str(&raw)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let base = self.base_url.trim();
        if base.is_empty() {
            return Err(ConfigError::MissingConfig("base_url".into()));
        }
        if !(base.starts_with("http://") || base.starts_with("https://")) {
            return Err(ConfigError::InvalidConfig(format!(
                "base_url must be an http(s) URL, got '{}'",
                self.base_url
            )));
        }
        if self.timeout_secs == Some(0) {
            return Err(ConfigError::InvalidConfig("timeout_secs must be greater than zero".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_config() {
        let cfg = ClientConfig::from_toml_str(
            r#"
            base_url = "https://api.example.com/v1"
            api_key = "k-123"
            timeout_secs = 5
            user_agent = "demo/1.0"
            "#,
        )
        .expect("config should parse");
        assert_eq!(cfg.base_url, "https://api.example.com/v1");
        assert_eq!(cfg.api_key.as_deref(), Some("k-123"));
        assert_eq!(cfg.timeout(), Some(Duration::from_secs(5)));
        assert_eq!(cfg.user_agent, "demo/1.0");
    }

    #[test]
    fn optional_fields_default() {
        let cfg = ClientConfig::from_toml_str(r#"base_url = "http://localhost:8080""#).unwrap();
        assert_eq!(cfg, ClientConfig::new("http://localhost:8080"));
        assert!(cfg.timeout().is_none());
    }

    #[test]
    fn rejects_missing_or_bad_base_url() {
        assert!(matches!(
            ClientConfig::from_toml_str(r#"base_url = """#),
            Err(ConfigError::MissingConfig(_))
        ));
        assert!(matches!(
            ClientConfig::from_toml_str(r#"base_url = "ftp://example.com""#),
            Err(ConfigError::InvalidConfig(_))
        ));
        assert!(matches!(
            ClientConfig::from_toml_str("api_key = \"k\""),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn rejects_zero_timeout() {
        let cfg = ClientConfig::new("https://example.com").with_timeout(0);
        assert!(matches!(cfg.validate(), Err(ConfigError::InvalidConfig(_))));
    }
}
