//! TOML-based configuration for Linkboard
//!
//! Server, storage and LinkedIn settings are read from `linkboard.toml`.
//! Every section and field is optional; a missing file yields the defaults,
//! which match a local development setup (API on port 8000, UI served by
//! trunk on 8080 or a dev server on 3000).
//!
//! A few environment variables override the file after loading (see
//! [`LinkboardConfig::apply_env_overrides`]). `.env` is honoured through
//! `dotenvy`.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info};

/// Root configuration structure loaded from linkboard.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LinkboardConfig {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub storage: StorageConfig,

    #[serde(default)]
    pub linkedin: LinkedInConfig,
}

// ============= Server Configuration =============

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// `pretty` or `json`
    #[serde(default = "default_log_format")]
    pub log_format: String,

    /// Origins allowed by the CORS layer; `*` allows any origin
    #[serde(default = "default_cors_origins")]
    pub cors_origins: Vec<String>,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

fn default_cors_origins() -> Vec<String> {
    vec![
        "http://localhost:3000".to_string(),
        "http://127.0.0.1:8080".to_string(),
        "http://localhost:8080".to_string(),
    ]
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            log_level: default_log_level(),
            log_format: default_log_format(),
            cors_origins: default_cors_origins(),
        }
    }
}

impl ServerConfig {
    /// `host:port` as accepted by `TcpListener::bind`
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

// ============= Storage Configuration =============

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Holds the encrypted credential file and its key
    #[serde(default = "default_config_dir")]
    pub config_dir: PathBuf,

    /// Holds the cached profile/posts/articles JSON files
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
}

fn default_config_dir() -> PathBuf {
    PathBuf::from("config")
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("data")
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            config_dir: default_config_dir(),
            data_dir: default_data_dir(),
        }
    }
}

// ============= LinkedIn Configuration =============

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinkedInConfig {
    #[serde(default = "default_api_base")]
    pub api_base: String,

    #[serde(default = "default_oauth_base")]
    pub oauth_base: String,

    #[serde(default = "default_redirect_uri")]
    pub redirect_uri: String,

    #[serde(default = "default_scopes")]
    pub scopes: Vec<String>,

    #[serde(default = "default_cache_ttl_hours")]
    pub cache_ttl_hours: u64,

    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    /// Use `LINKEDIN_CLIENT_ID`/`LINKEDIN_CLIENT_SECRET`/`LINKEDIN_ACCESS_TOKEN`
    /// when no credentials have been saved
    #[serde(default)]
    pub env_credentials: bool,
}

fn default_api_base() -> String {
    "https://api.linkedin.com/v2".to_string()
}

fn default_oauth_base() -> String {
    "https://www.linkedin.com/oauth/v2".to_string()
}

fn default_redirect_uri() -> String {
    "http://localhost:8000/api/auth/callback".to_string()
}

fn default_scopes() -> Vec<String> {
    vec![
        "r_liteprofile".to_string(),
        "r_emailaddress".to_string(),
        "w_member_social".to_string(),
    ]
}

fn default_cache_ttl_hours() -> u64 {
    24
}

fn default_request_timeout_secs() -> u64 {
    30
}

impl Default for LinkedInConfig {
    fn default() -> Self {
        Self {
            api_base: default_api_base(),
            oauth_base: default_oauth_base(),
            redirect_uri: default_redirect_uri(),
            scopes: default_scopes(),
            cache_ttl_hours: default_cache_ttl_hours(),
            request_timeout_secs: default_request_timeout_secs(),
            env_credentials: false,
        }
    }
}

impl LinkedInConfig {
    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_hours * 60 * 60)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

// ============= Loading =============

/// Errors that can occur during configuration loading
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read configuration file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Invalid value for environment variable '{0}': {1}")]
    InvalidEnvVar(String, String),

    #[error("Validation error: {0}")]
    ValidationError(String),
}

impl LinkboardConfig {
    /// Load configuration from a TOML file.
    ///
    /// A missing file is not an error: the defaults are used instead.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();

        let config = if path.exists() {
            info!("Loading configuration from {:?}", path);
            let content = fs::read_to_string(path)?;
            Self::from_toml_str(&content)?
        } else {
            debug!("No configuration file at {:?}, using defaults", path);
            Self::default()
        };

        config.validate()?;
        Ok(config)
    }

    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Load `.env` (if present) and apply environment overrides on top of the file
    pub fn apply_env_overrides(&mut self) -> Result<(), ConfigError> {
        dotenvy::dotenv().ok();

        if let Ok(host) = std::env::var("LINKBOARD_HOST") {
            self.server.host = host;
        }
        if let Ok(port) = std::env::var("LINKBOARD_PORT") {
            self.server.port = port
                .parse()
                .map_err(|_| ConfigError::InvalidEnvVar("LINKBOARD_PORT".to_string(), port))?;
        }
        if let Ok(level) = std::env::var("LINKBOARD_LOG") {
            self.server.log_level = level;
        }

        self.validate()
    }

    /// Validate the configuration for internal consistency
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !matches!(self.server.log_format.as_str(), "pretty" | "json") {
            return Err(ConfigError::ValidationError(format!(
                "server.log_format must be 'pretty' or 'json', got '{}'",
                self.server.log_format
            )));
        }

        if self.linkedin.cache_ttl_hours == 0 {
            return Err(ConfigError::ValidationError(
                "linkedin.cache_ttl_hours must be at least 1".to_string(),
            ));
        }

        for (name, url) in [
            ("linkedin.api_base", &self.linkedin.api_base),
            ("linkedin.oauth_base", &self.linkedin.oauth_base),
            ("linkedin.redirect_uri", &self.linkedin.redirect_uri),
        ] {
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                return Err(ConfigError::ValidationError(format!(
                    "{} must be an http(s) URL, got '{}'",
                    name, url
                )));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_uses_defaults() {
        let config = LinkboardConfig::from_toml_str("").expect("empty config should parse");

        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 8000);
        assert_eq!(config.storage.config_dir, PathBuf::from("config"));
        assert_eq!(config.linkedin.cache_ttl_hours, 24);
        assert_eq!(config.linkedin.scopes.len(), 3);
        assert!(!config.linkedin.env_credentials);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_sections_keep_other_defaults() {
        let config = LinkboardConfig::from_toml_str(
            r#"
[server]
port = 9100

[linkedin]
cache_ttl_hours = 2
env_credentials = true
"#,
        )
        .unwrap();

        assert!(config.linkedin.env_credentials);

        assert_eq!(config.server.port, 9100);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.linkedin.cache_ttl(), Duration::from_secs(7200));
        assert_eq!(config.linkedin.api_base, "https://api.linkedin.com/v2");
    }

    #[test]
    fn test_missing_file_loads_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = LinkboardConfig::load(dir.path().join("nope.toml")).unwrap();
        assert_eq!(config.server.bind_address(), "127.0.0.1:8000");
    }

    #[test]
    fn test_invalid_log_format_rejected() {
        let config = LinkboardConfig::from_toml_str(
            r#"
[server]
log_format = "xml"
"#,
        )
        .unwrap();
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ValidationError(_))
        ));
    }

    #[test]
    fn test_zero_ttl_rejected() {
        let mut config = LinkboardConfig::default();
        config.linkedin.cache_ttl_hours = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_non_http_api_base_rejected() {
        let mut config = LinkboardConfig::default();
        config.linkedin.api_base = "ftp://example.com".to_string();
        assert!(config.validate().is_err());
    }
}
