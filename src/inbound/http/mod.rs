//! HTTP inbound adapters: server-rendered pages and the JSON API.

use actix_web::web;

use crate::domain::Error;

pub mod error;
pub mod listings_api;
pub mod pages;
pub mod session;
pub mod state;
#[cfg(test)]
pub mod test_utils;

pub use error::ApiResult;

/// JSON extractor configuration for the API scope.
///
/// Payload shape failures (missing fields, wrong types, invalid JSON) get
/// the same structured error body every other failure kind emits.
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        Error::invalid_request(format!("invalid request body: {err}")).into()
    })
}

/// Register both presentation adapters on an actix application.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .app_data(json_config())
            .service(listings_api::list_listings)
            .service(listings_api::create_listing)
            .service(listings_api::get_listing)
            .service(listings_api::update_listing)
            .service(listings_api::delete_listing),
    )
    .service(pages::index)
    .service(pages::create_form)
    .service(pages::create_submit)
    .service(pages::edit_form)
    .service(pages::edit_submit)
    .service(pages::delete_confirm)
    .service(pages::delete_submit);
}
