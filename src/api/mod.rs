//! HTTP API Handlers and Routes
//!
//! This module provides the REST API layer for Linkboard, built on the Axum web framework.
//!
//! # Module Structure
//!
//! - [`api::handlers`](crate::api::handlers) - Request handlers for each endpoint
//! - [`api::routes`](crate::api::routes) - Route definitions and router configuration
//!
//! # API Endpoints
//!
//! ## Configuration (`/api/config`)
//! - `GET /api/config/status` - Whether credentials are stored
//! - `GET /api/config/credentials` - Stored credentials (404 when none)
//! - `POST /api/config/credentials` - Save credentials
//! - `DELETE /api/config/credentials` - Remove credentials and cached data
//!
//! ## LinkedIn (`/api/linkedin`)
//! - `GET /api/linkedin/profile` - Member profile
//! - `GET /api/linkedin/posts` - Member posts
//! - `GET /api/linkedin/articles` - Member articles
//! - `GET /api/linkedin/analytics` - Engagement analytics (`null` without content)
//!
//! All four answer 401 until credentials are configured and are served from
//! the on-disk cache while it is fresh.
//!
//! ## OAuth (`/api/auth`)
//! - `GET /api/auth/login` - Redirect to LinkedIn consent
//! - `GET /api/auth/callback` - Exchange the code and store the access token
//!
//! ## Misc
//! - `GET /` - Welcome message
//! - `GET /health` - Health check
//! - `GET /api-docs/openapi.json` - OpenAPI document
//!
//! # OpenAPI Documentation
//!
//! When the `swagger-ui` feature is enabled, interactive API documentation
//! is available at `/swagger-ui/`.

/// Request and response handlers for all API endpoints.
pub mod handlers;
/// Router configuration and route definitions.
pub mod routes;
/// Embedded dashboard assets.
#[cfg(feature = "ui")]
pub mod ui;
