//! Application state container shared across Axum route handlers and middleware.
//!
//! Holds the database connection and the bearer secret the auth gate checks against.
//! Handlers receive it through Axum's `State<T>` extractor.

use sea_orm::DatabaseConnection;
use std::sync::Arc;

/// Central application state shared across the server.
///
/// Cloning is cheap: the connection is a pool handle and the token is reference counted.
#[derive(Clone)]
pub struct AppState {
    db: DatabaseConnection,
    api_token: Arc<str>,
}

impl AppState {
    /// Creates a new `AppState` from a database connection and the configured bearer secret.
    pub fn new(db: DatabaseConnection, api_token: impl Into<Arc<str>>) -> Self {
        Self {
            db,
            api_token: api_token.into(),
        }
    }

    /// Returns a shared reference to the internal `DatabaseConnection`.
    pub fn db(&self) -> &DatabaseConnection {
        &self.db
    }

    /// The bearer secret every request must present.
    pub fn api_token(&self) -> &str {
        &self.api_token
    }
}
