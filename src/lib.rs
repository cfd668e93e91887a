//! # Linkboard
//!
//! Backend for a LinkedIn profile, content and engagement dashboard.
//!
//! ## Overview
//!
//! Linkboard can be used in two ways:
//!
//! 1. **As a standalone server** - Run the `linkboard-server` binary
//! 2. **As a library** - Build the router around your own [`LinkedInSource`]
//!
//! ### Basic Example
//!
//! ```rust,ignore
//! use linkboard::{api::routes::build_router, AppState, LinkboardConfig};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = LinkboardConfig::load("linkboard.toml")?;
//!     let state = AppState::from_config(config)?;
//!     let listener = tokio::net::TcpListener::bind("127.0.0.1:8000").await?;
//!     axum::serve(listener, build_router(state)).await?;
//!     Ok(())
//! }
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `ui` | Serve the compiled Leptos dashboard from `ui/dist` |
//! | `swagger-ui` | Interactive API docs at `/swagger-ui/` |
//!
//! ## Modules
//!
//! - [`api`] - REST API handlers and routes
//! - [`linkedin`] - LinkedIn client, OAuth, cache-first service, analytics
//! - [`storage`] - Encrypted credentials and the JSON data cache
//! - [`types`] - Domain types and error handling
//! - [`utils`] - `linkboard.toml` configuration

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(rustdoc::missing_crate_level_docs)]

/// HTTP API handlers and routes.
pub mod api;
/// Command-line interface.
pub mod cli;
/// LinkedIn REST client, OAuth and analytics.
pub mod linkedin;
/// Credential and cache persistence.
pub mod storage;
/// Core types (profile, content, analytics, errors).
pub mod types;
/// Configuration utilities (TOML).
pub mod utils;

// Re-export commonly used types
pub use linkedin::{DashboardService, LinkedInClient, LinkedInSource};
pub use storage::{CredentialStore, DataCache};
pub use types::{AppError, Result};
pub use utils::toml_config::LinkboardConfig;

use linkedin::oauth::PendingStates;
use std::sync::Arc;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    /// Effective configuration
    pub config: Arc<LinkboardConfig>,
    /// Encrypted credential store
    pub credentials: Arc<CredentialStore>,
    /// Cache-first LinkedIn data access
    pub service: DashboardService,
    /// OAuth `state` values issued by `/api/auth/login` and not yet redeemed
    pub oauth_states: Arc<PendingStates>,
    /// Shared HTTP client for the OAuth token exchange
    pub http: reqwest::Client,
}

impl AppState {
    /// Open the stores named by `config` and wire them to `source`
    pub fn new(config: LinkboardConfig, source: Arc<dyn LinkedInSource>) -> Result<Self> {
        let credentials = Arc::new(
            CredentialStore::open(&config.storage.config_dir)?
                .with_env_fallback(config.linkedin.env_credentials),
        );
        let cache = Arc::new(DataCache::open(&config.storage.data_dir)?);
        let service = DashboardService::new(
            credentials.clone(),
            cache,
            source,
            config.linkedin.cache_ttl(),
        );
        let http = reqwest::Client::builder()
            .timeout(config.linkedin.request_timeout())
            .build()
            .map_err(|e| AppError::Internal(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self {
            config: Arc::new(config),
            credentials,
            service,
            oauth_states: Arc::new(PendingStates::new()),
            http,
        })
    }

    /// State backed by the real LinkedIn API
    pub fn from_config(config: LinkboardConfig) -> Result<Self> {
        let client = LinkedInClient::from_config(&config.linkedin)?;
        Self::new(config, Arc::new(client))
    }
}
