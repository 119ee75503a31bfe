//! PostgreSQL-backed `ListingRepository` implementation using Diesel.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use uuid::Uuid;

use crate::domain::Listing;
use crate::domain::ports::{ListingRepository, ListingRepositoryError};

use super::models::{ListingRow, listing_to_changes, listing_to_new_row, row_to_listing};
use super::pool::DbPool;
use super::schema::listings;

/// Diesel-backed implementation of the listing repository port.
#[derive(Clone)]
pub struct DieselListingRepository {
    pool: DbPool,
}

impl DieselListingRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    async fn connection(
        &self,
    ) -> Result<
        diesel_async::pooled_connection::bb8::PooledConnection<'_, diesel_async::AsyncPgConnection>,
        ListingRepositoryError,
    > {
        self.pool
            .get()
            .await
            .map_err(|error| ListingRepositoryError::connection(error.to_string()))
    }
}

fn map_diesel_error(error: diesel::result::Error) -> ListingRepositoryError {
    match error {
        diesel::result::Error::DatabaseError(
            diesel::result::DatabaseErrorKind::ClosedConnection,
            info,
        ) => ListingRepositoryError::connection(info.message().to_owned()),
        other => ListingRepositoryError::query(other.to_string()),
    }
}

#[async_trait]
impl ListingRepository for DieselListingRepository {
    async fn insert(&self, listing: &Listing) -> Result<(), ListingRepositoryError> {
        let mut conn = self.connection().await?;
        let new_row = listing_to_new_row(listing)?;

        diesel::insert_into(listings::table)
            .values(&new_row)
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        Ok(())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Listing>, ListingRepositoryError> {
        let mut conn = self.connection().await?;

        let row = listings::table
            .find(id)
            .select(ListingRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        row.map(row_to_listing).transpose()
    }

    async fn list_active(&self) -> Result<Vec<Listing>, ListingRepositoryError> {
        let mut conn = self.connection().await?;

        let rows = listings::table
            .filter(listings::is_active.eq(true))
            .order((listings::created_at.desc(), listings::id.desc()))
            .select(ListingRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        rows.into_iter().map(row_to_listing).collect()
    }

    async fn update(&self, listing: &Listing) -> Result<(), ListingRepositoryError> {
        let mut conn = self.connection().await?;
        let changes = listing_to_changes(listing)?;

        diesel::update(listings::table.find(listing.id()))
            .set(&changes)
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<(), ListingRepositoryError> {
        let mut conn = self.connection().await?;

        diesel::delete(listings::table.find(id))
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        Ok(())
    }
}
