//! Common test utilities for integration tests.
//!
//! Tests run against the builtin scenario catalog; no external services are
//! required.

pub mod fixtures;

use std::sync::Arc;

use axum::Router;
use axum_test::TestServer;

use pronunciation_backend::{build_router, AppState};
use pronunciation_core::{Catalog, MatchThresholds};

/// Test context wrapping the application state.
pub struct TestContext {
    app: Router,
}

impl TestContext {
    /// Create a test context with the builtin catalog and default thresholds.
    pub fn new() -> Self {
        Self::with_thresholds(MatchThresholds::default())
    }

    /// Create a test context with custom thresholds.
    pub fn with_thresholds(thresholds: MatchThresholds) -> Self {
        let catalog = Catalog::builtin().expect("builtin catalog must load");
        let state = AppState {
            catalog: Arc::new(catalog),
            thresholds,
        };

        Self {
            app: build_router(state),
        }
    }

    /// Get the router for use with axum-test.
    pub fn router(&self) -> Router {
        self.app.clone()
    }

    /// Start a test server for this context.
    pub fn server(&self) -> TestServer {
        TestServer::new(self.router()).expect("failed to start test server")
    }
}
