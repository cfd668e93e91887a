//! Global application state

use crate::api::HttpBackend;
use leptos::prelude::*;

/// Backend URL used when none was baked in at build time
pub const DEFAULT_API_BASE: &str = "http://localhost:8000";

/// Global application state
#[derive(Clone, Copy)]
pub struct AppState {
    /// API base URL
    pub api_base: RwSignal<String>,
    /// Navigation drawer on small viewports
    pub drawer_open: RwSignal<bool>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            api_base: RwSignal::new(
                option_env!("LINKBOARD_API_URL")
                    .unwrap_or(DEFAULT_API_BASE)
                    .trim_end_matches('/')
                    .to_string(),
            ),
            drawer_open: RwSignal::new(false),
        }
    }

    /// HTTP backend for the current base URL
    pub fn backend(&self) -> HttpBackend {
        HttpBackend::new(self.api_base.get_untracked())
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
