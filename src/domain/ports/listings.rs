//! Driving ports for the listing lifecycle.
//!
//! These five operations are the stable contract both presentation adapters
//! honour regardless of transport.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{Actor, Error, Listing};

/// Input for creating a listing.
///
/// The price arrives as the raw string the caller submitted; parsing and the
/// positivity check belong to the service so every adapter gets the same
/// `InvalidPrice` behaviour.
#[derive(Debug, Clone)]
pub struct CreateListingRequest {
    pub title: String,
    pub description: String,
    pub price: String,
}

/// Partial update input; absent fields retain their prior values.
#[derive(Debug, Clone, Default)]
pub struct UpdateListingRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub price: Option<String>,
}

/// Read-side listing operations.
#[async_trait]
pub trait ListingsQuery: Send + Sync {
    /// All active listings, newest-created first.
    async fn list_active(&self) -> Result<Vec<Listing>, Error>;

    /// Lookup by identifier; `None` signals "missing" explicitly.
    async fn get_by_id(&self, listing_id: Uuid) -> Result<Option<Listing>, Error>;
}

/// Write-side listing operations with ownership authorization.
#[async_trait]
pub trait ListingsCommand: Send + Sync {
    /// Create a listing owned by the acting user.
    async fn create(&self, actor: &Actor, request: CreateListingRequest)
    -> Result<Listing, Error>;

    /// Partially update a listing; only the seller may do so.
    async fn update(
        &self,
        actor: &Actor,
        listing_id: Uuid,
        request: UpdateListingRequest,
    ) -> Result<Listing, Error>;

    /// Permanently remove a listing; only the seller may do so.
    async fn delete(&self, actor: &Actor, listing_id: Uuid) -> Result<(), Error>;
}
