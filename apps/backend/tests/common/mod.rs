//! Common test utilities and fixtures for integration tests.
//!
//! Tests run against an in-memory document store, so no external services are needed.

pub mod fixtures;

use axum::Router;
use axum_test::TestServer;
use quiz_core::MemoryStore;

use quiz_flashcards_backend::{router, AppState};

/// Test context holding the router built over a prepared store.
pub struct TestContext {
    app: Router,
}

impl TestContext {
    /// Create a context serving the given documents.
    pub fn with_documents<N: Into<String>>(documents: impl IntoIterator<Item = (N, String)>) -> Self {
        let store = documents
            .into_iter()
            .fold(MemoryStore::new(), |store, (name, content)| {
                store.with_document(name, content)
            });

        Self::with_store(store)
    }

    /// Create a context over an arbitrary store.
    pub fn with_store(store: impl quiz_core::DocumentStore + 'static) -> Self {
        Self {
            app: router(AppState::new(store)),
        }
    }

    /// Get the router for use with axum-test.
    pub fn router(&self) -> Router {
        self.app.clone()
    }

    /// Start a test server for this context.
    pub fn server(&self) -> TestServer {
        TestServer::new(self.router()).expect("Failed to start test server")
    }
}
