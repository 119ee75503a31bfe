//! Row models and conversions between storage rows and domain listings.
//!
//! Prices cross the boundary as `bigdecimal::BigDecimal` (Diesel's NUMERIC
//! mapping) and are converted to the domain's `rust_decimal` type through
//! their canonical string forms.

use std::str::FromStr;

use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use uuid::Uuid;

use crate::domain::ports::ListingRepositoryError;
use crate::domain::{Listing, ListingDraft, Price, SellerRef, UserId};

use super::schema::listings;

/// A listing row as read from the database.
#[derive(Debug, Queryable, Selectable, Identifiable)]
#[diesel(table_name = listings)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct ListingRow {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub price: BigDecimal,
    pub seller_id: Uuid,
    pub seller_email: Option<String>,
    pub created_at: DateTime<Utc>,
    pub is_active: bool,
}

/// Insertable row for a freshly created listing.
#[derive(Debug, Insertable)]
#[diesel(table_name = listings)]
pub struct NewListingRow {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub price: BigDecimal,
    pub seller_id: Uuid,
    pub seller_email: Option<String>,
    pub created_at: DateTime<Utc>,
    pub is_active: bool,
}

/// Changeset for listing updates; seller and creation time never change.
#[derive(Debug, AsChangeset)]
#[diesel(table_name = listings)]
pub struct ListingRowChanges {
    pub title: String,
    pub description: String,
    pub price: BigDecimal,
    pub is_active: bool,
}

pub(super) fn price_to_numeric(price: Price) -> Result<BigDecimal, ListingRepositoryError> {
    BigDecimal::from_str(&price.as_decimal().to_string())
        .map_err(|err| ListingRepositoryError::query(format!("encode price: {err}")))
}

fn numeric_to_price(value: &BigDecimal) -> Result<Price, ListingRepositoryError> {
    let decimal = rust_decimal::Decimal::from_str(&value.to_string())
        .map_err(|err| ListingRepositoryError::query(format!("decode price: {err}")))?;
    Price::new(decimal)
        .map_err(|err| ListingRepositoryError::query(format!("stored price invalid: {err}")))
}

/// Convert a database row into a domain listing.
pub(super) fn row_to_listing(row: ListingRow) -> Result<Listing, ListingRepositoryError> {
    let ListingRow {
        id,
        title,
        description,
        price,
        seller_id,
        seller_email,
        created_at,
        is_active,
    } = row;

    Ok(Listing::new(ListingDraft {
        id,
        title,
        description,
        price: numeric_to_price(&price)?,
        seller: SellerRef {
            id: UserId::from_uuid(seller_id),
            email: seller_email,
        },
        created_at,
        is_active,
    }))
}

/// Build an insertable row from a domain listing.
pub(super) fn listing_to_new_row(
    listing: &Listing,
) -> Result<NewListingRow, ListingRepositoryError> {
    Ok(NewListingRow {
        id: listing.id(),
        title: listing.title().to_owned(),
        description: listing.description().to_owned(),
        price: price_to_numeric(listing.price())?,
        seller_id: *listing.seller().id.as_uuid(),
        seller_email: listing.seller().email.clone(),
        created_at: listing.created_at(),
        is_active: listing.is_active(),
    })
}

/// Build the update changeset from a domain listing.
pub(super) fn listing_to_changes(
    listing: &Listing,
) -> Result<ListingRowChanges, ListingRepositoryError> {
    Ok(ListingRowChanges {
        title: listing.title().to_owned(),
        description: listing.description().to_owned(),
        price: price_to_numeric(listing.price())?,
        is_active: listing.is_active(),
    })
}
