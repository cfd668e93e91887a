//! Configuration utilities.

/// `linkboard.toml` loading, defaults and environment overrides.
pub mod toml_config;
