//! Common test utilities and fixtures for integration tests.
//!
//! Each TestContext gets its own sets file under the system temp directory,
//! removed again when the context is dropped.

pub mod fixtures;

use std::path::PathBuf;

use axum::Router;
use axum_test::TestServer;
use uuid::Uuid;

use flashlearn_backend::services::store::SetStore;
use flashlearn_backend::{router, AppState};

/// Test context owning a temporary sets file and the router built on it.
pub struct TestContext {
    pub data_path: PathBuf,
    app: Router,
}

impl TestContext {
    /// Create a context starting from the default library.
    pub fn new() -> Self {
        let data_path = std::env::temp_dir()
            .join(format!("flashlearn-test-{}", Uuid::new_v4()))
            .join("sets.json");
        Self::with_path(data_path)
    }

    /// Create a context on an existing (or missing) sets file.
    pub fn with_path(data_path: PathBuf) -> Self {
        let store = SetStore::open(&data_path).expect("Failed to open test store");
        let app = router(AppState::new(store));
        Self { data_path, app }
    }

    /// Get the router for use with axum-test.
    pub fn router(&self) -> Router {
        self.app.clone()
    }

    pub fn server(&self) -> TestServer {
        TestServer::new(self.router()).expect("Failed to start test server")
    }

    /// Reload the sets file the way a restarted server would.
    pub fn reopen(&self) -> SetStore {
        SetStore::open(&self.data_path).expect("Failed to reopen test store")
    }
}

impl Drop for TestContext {
    fn drop(&mut self) {
        if let Some(dir) = self.data_path.parent() {
            let _ = std::fs::remove_dir_all(dir);
        }
    }
}
