//! In-memory listing repository.
//!
//! Serves local development when no `DATABASE_URL` is configured and the
//! adapter test suites. Ordering matches the Diesel adapter: creation time
//! descending, ties broken by id descending.

use std::cmp::Reverse;
use std::sync::Mutex;

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::Listing;
use crate::domain::ports::{ListingRepository, ListingRepositoryError};

/// Listing repository backed by a mutex-guarded vector.
#[derive(Debug, Default)]
pub struct InMemoryListingRepository {
    listings: Mutex<Vec<Listing>>,
}

impl InMemoryListingRepository {
    /// Create an empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the store with existing listings, bypassing the service layer.
    pub fn seed(&self, listings: impl IntoIterator<Item = Listing>) {
        if let Ok(mut guard) = self.listings.lock() {
            guard.extend(listings);
        }
    }

    fn with_listings<T>(
        &self,
        f: impl FnOnce(&mut Vec<Listing>) -> T,
    ) -> Result<T, ListingRepositoryError> {
        let mut guard = self
            .listings
            .lock()
            .map_err(|_| ListingRepositoryError::query("listing store lock poisoned"))?;
        Ok(f(&mut guard))
    }
}

#[async_trait]
impl ListingRepository for InMemoryListingRepository {
    async fn insert(&self, listing: &Listing) -> Result<(), ListingRepositoryError> {
        let listing = listing.clone();
        self.with_listings(move |listings| listings.push(listing))
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Listing>, ListingRepositoryError> {
        self.with_listings(|listings| listings.iter().find(|l| l.id() == id).cloned())
    }

    async fn list_active(&self) -> Result<Vec<Listing>, ListingRepositoryError> {
        self.with_listings(|listings| {
            let mut active: Vec<Listing> = listings
                .iter()
                .filter(|l| l.is_active())
                .cloned()
                .collect();
            active.sort_by_key(|l| Reverse((l.created_at(), l.id())));
            active
        })
    }

    async fn update(&self, listing: &Listing) -> Result<(), ListingRepositoryError> {
        let updated = listing.clone();
        self.with_listings(move |listings| {
            if let Some(stored) = listings.iter_mut().find(|l| l.id() == updated.id()) {
                *stored = updated;
            }
        })
    }

    async fn delete(&self, id: Uuid) -> Result<(), ListingRepositoryError> {
        self.with_listings(|listings| listings.retain(|l| l.id() != id))
    }
}
