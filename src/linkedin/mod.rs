//! LinkedIn integration: REST client, OAuth flow, cache-first service and
//! analytics aggregation.

pub mod analytics;
pub mod client;
pub mod oauth;
pub mod service;

pub use client::{LinkedInClient, LinkedInSource};
pub use service::DashboardService;
