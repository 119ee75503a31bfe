//! Listings JSON API handlers.
//!
//! ```text
//! GET    /api/listings
//! POST   /api/listings
//! GET    /api/listings/{id}
//! PUT    /api/listings/{id}
//! DELETE /api/listings/{id}
//! ```
//!
//! The mobile client consumes this surface; it mirrors the HTML adapter
//! over the identical service contract.

use actix_web::{HttpResponse, delete, get, post, put, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::ports::{CreateListingRequest, UpdateListingRequest};
use crate::domain::{Error, Listing};
use crate::inbound::http::ApiResult;
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;

/// Serialized listing representation.
///
/// The price is a decimal-formatted string and the timestamp is RFC 3339,
/// matching what the mobile client already parses.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ListingBody {
    #[schema(format = "uuid")]
    pub id: String,
    pub title: String,
    pub description: String,
    #[schema(example = "49.99")]
    pub price: String,
    #[schema(format = "uuid")]
    pub seller_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seller_email: Option<String>,
    #[schema(format = "date-time")]
    pub created_at: String,
}

impl From<Listing> for ListingBody {
    fn from(listing: Listing) -> Self {
        Self {
            id: listing.id().to_string(),
            title: listing.title().to_owned(),
            description: listing.description().to_owned(),
            price: listing.price().to_string(),
            seller_id: listing.seller().id.to_string(),
            seller_email: listing.seller().email.clone(),
            created_at: listing.created_at().to_rfc3339(),
        }
    }
}

/// Request payload for creating a listing.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct CreateListingBody {
    pub title: String,
    pub description: String,
    #[schema(example = "49.99")]
    pub price: String,
}

/// Request payload for partially updating a listing.
///
/// Omitted fields retain their stored values.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
pub struct UpdateListingBody {
    pub title: Option<String>,
    pub description: Option<String>,
    pub price: Option<String>,
}

/// List all active listings, newest first.
#[utoipa::path(
    get,
    path = "/api/listings",
    responses(
        (status = 200, description = "Active listings", body = [ListingBody]),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["listings"],
    operation_id = "listListings"
)]
#[get("/listings")]
pub async fn list_listings(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<ListingBody>>> {
    let listings = state.listings_query.list_active().await?;
    Ok(web::Json(
        listings.into_iter().map(ListingBody::from).collect(),
    ))
}

/// Create a listing owned by the session user.
#[utoipa::path(
    post,
    path = "/api/listings",
    request_body = CreateListingBody,
    responses(
        (status = 201, description = "Listing created", body = ListingBody),
        (status = 400, description = "Invalid price or payload", body = Error),
        (status = 401, description = "Authentication required", body = Error)
    ),
    tags = ["listings"],
    operation_id = "createListing"
)]
#[post("/listings")]
pub async fn create_listing(
    state: web::Data<HttpState>,
    session: SessionContext,
    payload: web::Json<CreateListingBody>,
) -> ApiResult<HttpResponse> {
    let actor = session.actor()?;
    let body = payload.into_inner();
    let listing = state
        .listings_command
        .create(
            &actor,
            CreateListingRequest {
                title: body.title,
                description: body.description,
                price: body.price,
            },
        )
        .await?;
    Ok(HttpResponse::Created().json(ListingBody::from(listing)))
}

/// Fetch a single listing by id.
#[utoipa::path(
    get,
    path = "/api/listings/{id}",
    params(("id" = Uuid, Path, description = "Listing identifier")),
    responses(
        (status = 200, description = "Listing", body = ListingBody),
        (status = 404, description = "No such listing", body = Error)
    ),
    tags = ["listings"],
    operation_id = "getListing"
)]
#[get("/listings/{id}")]
pub async fn get_listing(
    state: web::Data<HttpState>,
    path: web::Path<Uuid>,
) -> ApiResult<web::Json<ListingBody>> {
    let listing_id = path.into_inner();
    let listing = state
        .listings_query
        .get_by_id(listing_id)
        .await?
        .ok_or_else(|| Error::not_found(format!("listing {listing_id} not found")))?;
    Ok(web::Json(ListingBody::from(listing)))
}

/// Partially update a listing owned by the session user.
#[utoipa::path(
    put,
    path = "/api/listings/{id}",
    params(("id" = Uuid, Path, description = "Listing identifier")),
    request_body = UpdateListingBody,
    responses(
        (status = 200, description = "Updated listing", body = ListingBody),
        (status = 400, description = "Invalid price or payload", body = Error),
        (status = 401, description = "Authentication required", body = Error),
        (status = 403, description = "Not the seller", body = Error),
        (status = 404, description = "No such listing", body = Error)
    ),
    tags = ["listings"],
    operation_id = "updateListing"
)]
#[put("/listings/{id}")]
pub async fn update_listing(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<Uuid>,
    payload: web::Json<UpdateListingBody>,
) -> ApiResult<web::Json<ListingBody>> {
    let actor = session.actor()?;
    let body = payload.into_inner();
    let listing = state
        .listings_command
        .update(
            &actor,
            path.into_inner(),
            UpdateListingRequest {
                title: body.title,
                description: body.description,
                price: body.price,
            },
        )
        .await?;
    Ok(web::Json(ListingBody::from(listing)))
}

/// Permanently delete a listing owned by the session user.
#[utoipa::path(
    delete,
    path = "/api/listings/{id}",
    params(("id" = Uuid, Path, description = "Listing identifier")),
    responses(
        (status = 204, description = "Listing deleted"),
        (status = 401, description = "Authentication required", body = Error),
        (status = 403, description = "Not the seller", body = Error),
        (status = 404, description = "No such listing", body = Error)
    ),
    tags = ["listings"],
    operation_id = "deleteListing"
)]
#[delete("/listings/{id}")]
pub async fn delete_listing(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<Uuid>,
) -> ApiResult<HttpResponse> {
    let actor = session.actor()?;
    state
        .listings_command
        .delete(&actor, path.into_inner())
        .await?;
    Ok(HttpResponse::NoContent().finish())
}

#[cfg(test)]
#[path = "listings_api_tests.rs"]
mod tests;
