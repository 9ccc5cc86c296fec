//! Common test utilities and fixtures for integration tests.
//!
//! The service keeps everything in memory, so each test gets a fresh
//! controller and needs no external setup.

pub mod fixtures;

use axum::Router;
use axum_test::TestServer;

use study_assistant_backend::controller::InteractionController;
use study_assistant_backend::{app, AppState};
use study_core::OutlineOptions;

/// Test context wrapping a router backed by a fresh controller.
pub struct TestContext {
    app: Router,
}

impl TestContext {
    /// Create a new test context with default outline options.
    pub fn new() -> Self {
        Self::with_outline_options(OutlineOptions::default())
    }

    /// Create a new test context with custom outline options.
    pub fn with_outline_options(options: OutlineOptions) -> Self {
        let state = AppState::new(InteractionController::new(options));
        Self { app: app(state) }
    }

    /// Get the router for use with axum-test.
    pub fn router(&self) -> Router {
        self.app.clone()
    }

    /// Start an in-process test server.
    pub fn server(&self) -> TestServer {
        TestServer::new(self.router()).unwrap()
    }
}
