//! Async connection pool for Diesel PostgreSQL connections.
//!
//! Wraps `diesel-async` and `bb8`; connections use the pure-Rust
//! tokio-postgres driver, so no native client library is linked.

use std::time::Duration;

use diesel_async::AsyncPgConnection;
use diesel_async::pooled_connection::AsyncDieselConnectionManager;
use diesel_async::pooled_connection::bb8::Pool;

/// Shared async connection pool handed to repository adapters.
pub type DbPool = Pool<AsyncPgConnection>;

/// Errors that can occur during pool operations.
///
/// Checkout failures never surface here: repositories map them straight to
/// their own port error when a connection is requested.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PoolError {
    /// Failed to build the connection pool.
    #[error("failed to build connection pool: {message}")]
    Build { message: String },
}

impl PoolError {
    /// Create a build error with the given message.
    pub fn build(message: impl Into<String>) -> Self {
        Self::Build {
            message: message.into(),
        }
    }
}

/// Build a connection pool for the given database URL.
pub async fn build_pool(database_url: &str, max_size: u32) -> Result<DbPool, PoolError> {
    let manager = AsyncDieselConnectionManager::<AsyncPgConnection>::new(database_url);
    Pool::builder()
        .max_size(max_size)
        .connection_timeout(Duration::from_secs(30))
        .build(manager)
        .await
        .map_err(|error| PoolError::build(error.to_string()))
}
