//! Application state shared across all request handlers.
//!
//! Initialized once during startup and cloned into each handler through Axum's state
//! extraction. Every field is cheap to clone: the connection is a pool handle and the
//! rest sit behind `Arc`.

use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::server::{config::Config, token::TokenIssuer};

#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Signs tokens at login and verifies them in `AuthGuard`.
    pub issuer: Arc<dyn TokenIssuer>,

    /// Cookie names, session lifetime and domain used by the auth endpoints.
    pub config: Arc<Config>,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `issuer` - Token issuer shared by login and the request guard
    /// - `config` - Loaded application configuration
    pub fn new(db: DatabaseConnection, issuer: Arc<dyn TokenIssuer>, config: Config) -> Self {
        Self {
            db,
            issuer,
            config: Arc::new(config),
        }
    }
}
