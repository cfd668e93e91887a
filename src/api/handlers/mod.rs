//! API request handlers.
//!
//! This module contains all HTTP request handlers organized by functionality.

/// LinkedIn OAuth login and callback handlers.
pub mod auth;
/// Credential storage and configuration status handlers.
pub mod config;
/// Profile, posts, articles and analytics handlers.
pub mod linkedin;
