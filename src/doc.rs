//! OpenAPI document for the listings JSON API.

use utoipa::OpenApi;

use crate::domain::error::{Error, ErrorCode};
use crate::inbound::http::listings_api;

/// Aggregated OpenAPI surface for tooling and client generation.
#[derive(OpenApi)]
#[openapi(
    info(title = "Marketplace listings API", version = "0.1.0"),
    paths(
        listings_api::list_listings,
        listings_api::create_listing,
        listings_api::get_listing,
        listings_api::update_listing,
        listings_api::delete_listing,
    ),
    components(schemas(
        Error,
        ErrorCode,
        listings_api::ListingBody,
        listings_api::CreateListingBody,
        listings_api::UpdateListingBody,
    )),
    tags((name = "listings", description = "Listing lifecycle operations"))
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use utoipa::OpenApi;

    use super::*;

    #[test]
    fn document_includes_all_listing_paths() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&str> = doc.paths.paths.keys().map(String::as_str).collect();
        assert!(paths.contains(&"/api/listings"));
        assert!(paths.contains(&"/api/listings/{id}"));
    }
}
