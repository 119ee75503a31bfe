//! Listing domain services.
//!
//! The single authority for listing invariants: price validity, seller
//! immutability, and the ownership rule on mutation. Adapters never touch
//! the repository directly.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use serde_json::json;
use tracing::info;
use uuid::Uuid;

use crate::domain::ports::{
    CreateListingRequest, ListingRepository, ListingRepositoryError, ListingsCommand,
    ListingsQuery, UpdateListingRequest,
};
use crate::domain::{Actor, Error, Listing, ListingChanges, ListingDraft, Price, PriceError};

fn map_repository_error(error: ListingRepositoryError) -> Error {
    match error {
        ListingRepositoryError::Connection { message } => {
            Error::service_unavailable(format!("listing repository unavailable: {message}"))
        }
        ListingRepositoryError::Query { message } => {
            Error::internal(format!("listing repository error: {message}"))
        }
    }
}

fn map_price_error(error: PriceError) -> Error {
    Error::invalid_price(error.to_string()).with_details(json!({ "field": "price" }))
}

/// Read-side service over the listing repository.
#[derive(Clone)]
pub struct ListingQueryService<R> {
    repository: Arc<R>,
}

impl<R> ListingQueryService<R> {
    /// Create a new query service with the listing repository.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> ListingsQuery for ListingQueryService<R>
where
    R: ListingRepository,
{
    async fn list_active(&self) -> Result<Vec<Listing>, Error> {
        self.repository
            .list_active()
            .await
            .map_err(map_repository_error)
    }

    async fn get_by_id(&self, listing_id: Uuid) -> Result<Option<Listing>, Error> {
        self.repository
            .find_by_id(listing_id)
            .await
            .map_err(map_repository_error)
    }
}

/// Write-side service enforcing authentication and ownership.
#[derive(Clone)]
pub struct ListingCommandService<R> {
    repository: Arc<R>,
}

impl<R> ListingCommandService<R> {
    /// Create a new command service with the listing repository.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }
}

impl<R> ListingCommandService<R>
where
    R: ListingRepository,
{
    /// Load a listing and verify the actor owns it.
    async fn load_owned(&self, actor: &Actor, listing_id: Uuid) -> Result<Listing, Error> {
        let user = actor.require_user()?;
        let listing = self
            .repository
            .find_by_id(listing_id)
            .await
            .map_err(map_repository_error)?
            .ok_or_else(|| Error::not_found(format!("listing {listing_id} not found")))?;
        if listing.seller().id != user.id {
            return Err(Error::forbidden(
                "You are not authorized to modify this listing.",
            ));
        }
        Ok(listing)
    }
}

#[async_trait]
impl<R> ListingsCommand for ListingCommandService<R>
where
    R: ListingRepository,
{
    async fn create(
        &self,
        actor: &Actor,
        request: CreateListingRequest,
    ) -> Result<Listing, Error> {
        let user = actor.require_user()?;
        let price = Price::parse(&request.price).map_err(map_price_error)?;

        let listing = Listing::new(ListingDraft {
            id: Uuid::new_v4(),
            title: request.title,
            description: request.description,
            price,
            seller: user.clone(),
            created_at: Utc::now(),
            is_active: true,
        });

        self.repository
            .insert(&listing)
            .await
            .map_err(map_repository_error)?;

        info!(listing_id = %listing.id(), seller = %user.id, "listing created");
        Ok(listing)
    }

    async fn update(
        &self,
        actor: &Actor,
        listing_id: Uuid,
        request: UpdateListingRequest,
    ) -> Result<Listing, Error> {
        let mut listing = self.load_owned(actor, listing_id).await?;

        let price = request
            .price
            .as_deref()
            .map(Price::parse)
            .transpose()
            .map_err(map_price_error)?;

        listing.apply(ListingChanges {
            title: request.title,
            description: request.description,
            price,
        });

        // Last-write-wins on concurrent updates; no version check.
        self.repository
            .update(&listing)
            .await
            .map_err(map_repository_error)?;

        info!(listing_id = %listing.id(), "listing updated");
        Ok(listing)
    }

    async fn delete(&self, actor: &Actor, listing_id: Uuid) -> Result<(), Error> {
        let listing = self.load_owned(actor, listing_id).await?;

        // Hard delete: the record is removed outright, not soft-deactivated.
        self.repository
            .delete(listing.id())
            .await
            .map_err(map_repository_error)?;

        info!(listing_id = %listing.id(), "listing deleted");
        Ok(())
    }
}

#[cfg(test)]
#[path = "listing_service_tests.rs"]
mod tests;
