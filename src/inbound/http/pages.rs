//! Server-rendered HTML pages for the listing lifecycle.
//!
//! ```text
//! GET  /                       listing feed
//! GET  /listings/create        create form
//! POST /listings/create        create submission
//! GET  /listings/{id}/edit     edit form
//! POST /listings/{id}/edit     edit submission
//! GET  /listings/{id}/delete   delete confirmation
//! POST /listings/{id}/delete   perform deletion
//! ```
//!
//! Templates are deliberately tiny escaped-string builders; layout and
//! styling belong to the real template layer, which is out of scope here.
//! Anonymous callers are redirected to the external `/login` page, form
//! validation failures re-render the form with the submitted values, and
//! ownership failures surface an error page.

use actix_web::http::{StatusCode, header};
use actix_web::{HttpResponse, get, post, web};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::ports::{CreateListingRequest, UpdateListingRequest};
use crate::domain::{Actor, Error, ErrorCode, Listing};
use crate::inbound::http::ApiResult;
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;

/// Form fields shared by the create and edit pages.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ListingForm {
    pub title: String,
    pub description: String,
    pub price: String,
}

const LOGIN_PATH: &str = "/login";

fn escape(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            other => escaped.push(other),
        }
    }
    escaped
}

fn layout(title: &str, body: &str) -> String {
    format!(
        "<!doctype html>\n<html>\n<head><meta charset=\"utf-8\"><title>{}</title></head>\n\
         <body>\n{}\n</body>\n</html>\n",
        escape(title),
        body
    )
}

fn html_page(status: StatusCode, title: &str, body: &str) -> HttpResponse {
    HttpResponse::build(status)
        .content_type("text/html; charset=utf-8")
        .body(layout(title, body))
}

fn redirect_to(location: &str) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, location))
        .finish()
}

fn error_page(status: StatusCode, message: &str) -> HttpResponse {
    html_page(
        status,
        "Error",
        &format!("<h1>{}</h1><p>{}</p>", status.as_u16(), escape(message)),
    )
}

fn listing_form(action: &str, heading: &str, form: &ListingForm, error: Option<&str>) -> String {
    let error_html = error
        .map(|message| format!("<p class=\"error\">{}</p>", escape(message)))
        .unwrap_or_default();
    format!(
        "<h1>{heading}</h1>\n{error_html}\n\
         <form method=\"post\" action=\"{action}\">\n\
         <label>Title <input name=\"title\" value=\"{title}\"></label>\n\
         <label>Description <textarea name=\"description\">{description}</textarea></label>\n\
         <label>Price <input name=\"price\" value=\"{price}\"></label>\n\
         <button type=\"submit\">Save</button>\n\
         </form>\n",
        heading = escape(heading),
        action = escape(action),
        title = escape(&form.title),
        description = escape(&form.description),
        price = escape(&form.price),
    )
}

fn listing_card(listing: &Listing) -> String {
    format!(
        "<li><a href=\"/listings/{id}/edit\">{title}</a> &mdash; {price} \
         <p>{description}</p></li>",
        id = listing.id(),
        title = escape(listing.title()),
        price = escape(&listing.price().to_string()),
        description = escape(listing.description()),
    )
}

/// Map failures that are not form-validation errors to HTML responses.
fn map_page_error(error: Error) -> HttpResponse {
    match error.code() {
        ErrorCode::Unauthorized => redirect_to(LOGIN_PATH),
        ErrorCode::Forbidden => error_page(StatusCode::FORBIDDEN, error.message()),
        ErrorCode::NotFound => error_page(StatusCode::NOT_FOUND, error.message()),
        ErrorCode::InvalidRequest | ErrorCode::InvalidPrice => {
            error_page(StatusCode::BAD_REQUEST, error.message())
        }
        ErrorCode::ServiceUnavailable => {
            error_page(StatusCode::SERVICE_UNAVAILABLE, "Please try again later.")
        }
        ErrorCode::InternalError => {
            error_page(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
        }
    }
}

/// Display all active listings.
#[get("/")]
pub async fn index(state: web::Data<HttpState>) -> ApiResult<HttpResponse> {
    let listings = match state.listings_query.list_active().await {
        Ok(listings) => listings,
        Err(error) => return Ok(map_page_error(error)),
    };
    let cards: String = listings.iter().map(listing_card).collect();
    let body = format!(
        "<h1>Listings</h1>\n<p><a href=\"/listings/create\">Sell something</a></p>\n<ul>\n{cards}\n</ul>"
    );
    Ok(html_page(StatusCode::OK, "Listings", &body))
}

/// Show the create-listing form.
#[get("/listings/create")]
pub async fn create_form(session: SessionContext) -> ApiResult<HttpResponse> {
    let actor = session.actor()?;
    if actor.user().is_none() {
        return Ok(redirect_to(LOGIN_PATH));
    }
    let body = listing_form(
        "/listings/create",
        "New listing",
        &ListingForm::default(),
        None,
    );
    Ok(html_page(StatusCode::OK, "New listing", &body))
}

/// Create a listing from a form submission.
#[post("/listings/create")]
pub async fn create_submit(
    state: web::Data<HttpState>,
    session: SessionContext,
    form: web::Form<ListingForm>,
) -> ApiResult<HttpResponse> {
    let actor = session.actor()?;
    let form = form.into_inner();
    let result = state
        .listings_command
        .create(
            &actor,
            CreateListingRequest {
                title: form.title.clone(),
                description: form.description.clone(),
                price: form.price.clone(),
            },
        )
        .await;

    match result {
        Ok(_) => Ok(redirect_to("/")),
        Err(error) if error.code() == ErrorCode::InvalidPrice => {
            // Re-render with the submitted values so nothing is lost.
            let body = listing_form(
                "/listings/create",
                "New listing",
                &form,
                Some(error.message()),
            );
            Ok(html_page(StatusCode::BAD_REQUEST, "New listing", &body))
        }
        Err(error) => Ok(map_page_error(error)),
    }
}

/// Load a listing for its seller, mapping ownership failures like update.
async fn load_for_edit(
    state: &HttpState,
    actor: &Actor,
    listing_id: Uuid,
) -> Result<Listing, Error> {
    let user = actor.require_user()?;
    let listing = state
        .listings_query
        .get_by_id(listing_id)
        .await?
        .ok_or_else(|| Error::not_found(format!("listing {listing_id} not found")))?;
    if listing.seller().id != user.id {
        return Err(Error::forbidden(
            "You are not authorized to modify this listing.",
        ));
    }
    Ok(listing)
}

/// Show the edit form prefilled with the stored values.
#[get("/listings/{id}/edit")]
pub async fn edit_form(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<Uuid>,
) -> ApiResult<HttpResponse> {
    let actor = session.actor()?;
    let listing_id = path.into_inner();
    let listing = match load_for_edit(&state, &actor, listing_id).await {
        Ok(listing) => listing,
        Err(error) => return Ok(map_page_error(error)),
    };
    let form = ListingForm {
        title: listing.title().to_owned(),
        description: listing.description().to_owned(),
        price: listing.price().to_string(),
    };
    let action = format!("/listings/{listing_id}/edit");
    let body = listing_form(&action, "Edit listing", &form, None);
    Ok(html_page(StatusCode::OK, "Edit listing", &body))
}

/// Update a listing from a form submission.
#[post("/listings/{id}/edit")]
pub async fn edit_submit(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<Uuid>,
    form: web::Form<ListingForm>,
) -> ApiResult<HttpResponse> {
    let actor = session.actor()?;
    let listing_id = path.into_inner();
    let form = form.into_inner();
    let result = state
        .listings_command
        .update(
            &actor,
            listing_id,
            UpdateListingRequest {
                title: Some(form.title.clone()),
                description: Some(form.description.clone()),
                price: Some(form.price.clone()),
            },
        )
        .await;

    match result {
        Ok(_) => Ok(redirect_to("/")),
        Err(error) if error.code() == ErrorCode::InvalidPrice => {
            let action = format!("/listings/{listing_id}/edit");
            let body = listing_form(&action, "Edit listing", &form, Some(error.message()));
            Ok(html_page(StatusCode::BAD_REQUEST, "Edit listing", &body))
        }
        Err(error) => Ok(map_page_error(error)),
    }
}

/// Show the delete confirmation page.
#[get("/listings/{id}/delete")]
pub async fn delete_confirm(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<Uuid>,
) -> ApiResult<HttpResponse> {
    let actor = session.actor()?;
    let listing_id = path.into_inner();
    let listing = match load_for_edit(&state, &actor, listing_id).await {
        Ok(listing) => listing,
        Err(error) => return Ok(map_page_error(error)),
    };
    let body = format!(
        "<h1>Delete listing</h1>\n\
         <p>Delete &quot;{title}&quot; permanently?</p>\n\
         <form method=\"post\" action=\"/listings/{id}/delete\">\n\
         <button type=\"submit\">Delete</button> <a href=\"/\">Cancel</a>\n\
         </form>\n",
        title = escape(listing.title()),
        id = listing_id,
    );
    Ok(html_page(StatusCode::OK, "Delete listing", &body))
}

/// Perform the deletion after confirmation.
#[post("/listings/{id}/delete")]
pub async fn delete_submit(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<Uuid>,
) -> ApiResult<HttpResponse> {
    let actor = session.actor()?;
    match state
        .listings_command
        .delete(&actor, path.into_inner())
        .await
    {
        Ok(()) => Ok(redirect_to("/")),
        Err(error) => Ok(map_page_error(error)),
    }
}

#[cfg(test)]
#[path = "pages_tests.rs"]
mod tests;
