//! Port for listing persistence.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::Listing;

/// Errors raised by listing repository adapters.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ListingRepositoryError {
    /// Repository connection could not be established.
    #[error("listing repository connection failed: {message}")]
    Connection { message: String },
    /// Query or mutation failed during execution.
    #[error("listing repository query failed: {message}")]
    Query { message: String },
}

impl ListingRepositoryError {
    /// Create a connection error with the given message.
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    /// Create a query error with the given message.
    pub fn query(message: impl Into<String>) -> Self {
        Self::Query {
            message: message.into(),
        }
    }
}

/// Port for reading and writing listing records.
///
/// Single-record operations are assumed atomic; there is no cross-record
/// transaction surface because the domain never needs one.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ListingRepository: Send + Sync {
    /// Persist a freshly created listing.
    async fn insert(&self, listing: &Listing) -> Result<(), ListingRepositoryError>;

    /// Point lookup by identifier.
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Listing>, ListingRepositoryError>;

    /// All active listings, newest-created first; ties break by id descending.
    async fn list_active(&self) -> Result<Vec<Listing>, ListingRepositoryError>;

    /// Overwrite the stored record for an existing listing.
    async fn update(&self, listing: &Listing) -> Result<(), ListingRepositoryError>;

    /// Remove a listing permanently.
    async fn delete(&self, id: Uuid) -> Result<(), ListingRepositoryError>;
}
