#![allow(dead_code)]

pub mod mocks;

use axum_test::TestServer;
use linkboard::{api::routes::build_router, AppState, LinkboardConfig, LinkedInSource};
use std::sync::Arc;
use tempfile::TempDir;

/// A server over temporary storage; keep `dir` alive for the test's duration
pub struct TestApp {
    pub dir: TempDir,
    pub state: AppState,
    pub server: TestServer,
}

pub fn config_in(dir: &TempDir) -> LinkboardConfig {
    let mut config = LinkboardConfig::default();
    config.storage.config_dir = dir.path().join("config");
    config.storage.data_dir = dir.path().join("data");
    config.linkedin.env_credentials = false;
    config
}

pub fn test_app_with(config: LinkboardConfig, dir: TempDir, source: Arc<dyn LinkedInSource>) -> TestApp {
    let state = AppState::new(config, source).expect("state should build");
    let server = TestServer::new(build_router(state.clone())).expect("test server");
    TestApp { dir, state, server }
}

pub fn test_app(source: Arc<dyn LinkedInSource>) -> TestApp {
    let dir = tempfile::tempdir().expect("temp dir");
    let config = config_in(&dir);
    test_app_with(config, dir, source)
}
