//! Tests for the listings JSON API adapter.

use std::sync::Arc;

use actix_web::http::StatusCode;
use actix_web::test as actix_test;
use chrono::{TimeZone, Utc};
use serde_json::{Value, json};
use uuid::Uuid;

use super::*;
use crate::domain::{ListingDraft, Price, SellerRef, UserId};
use crate::inbound::http::test_utils::{login_as, test_app};
use crate::outbound::persistence::memory::InMemoryListingRepository;

fn alice() -> SellerRef {
    SellerRef {
        id: UserId::from_uuid(Uuid::new_v4()),
        email: Some("alice@example.com".into()),
    }
}

fn bob() -> SellerRef {
    SellerRef {
        id: UserId::from_uuid(Uuid::new_v4()),
        email: Some("bob@example.com".into()),
    }
}

fn seeded_listing(seller: &SellerRef, title: &str, active: bool, day: u32) -> Listing {
    Listing::new(ListingDraft {
        id: Uuid::new_v4(),
        title: title.into(),
        description: "Wooden".into(),
        price: Price::parse("49.99").expect("valid price"),
        seller: seller.clone(),
        created_at: Utc.with_ymd_and_hms(2024, 5, day, 12, 0, 0).single().expect("ts"),
        is_active: active,
    })
}

async fn read_json(response: actix_web::dev::ServiceResponse) -> Value {
    let body = actix_test::read_body(response).await;
    serde_json::from_slice(&body).expect("json body")
}

#[actix_web::test]
async fn list_returns_active_listings_newest_first() {
    let repo = Arc::new(InMemoryListingRepository::new());
    let seller = alice();
    repo.seed([
        seeded_listing(&seller, "Older", true, 1),
        seeded_listing(&seller, "Hidden", false, 2),
        seeded_listing(&seller, "Newer", true, 3),
    ]);
    let app = actix_test::init_service(test_app(repo)).await;

    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::get().uri("/api/listings").to_request(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let value = read_json(response).await;
    let titles: Vec<&str> = value
        .as_array()
        .expect("array body")
        .iter()
        .map(|item| item.get("title").and_then(Value::as_str).expect("title"))
        .collect();
    assert_eq!(titles, vec!["Newer", "Older"]);
}

#[actix_web::test]
async fn list_serializes_the_full_representation() {
    let repo = Arc::new(InMemoryListingRepository::new());
    let seller = alice();
    repo.seed([seeded_listing(&seller, "Desk", true, 1)]);
    let app = actix_test::init_service(test_app(repo)).await;

    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::get().uri("/api/listings").to_request(),
    )
    .await;
    let value = read_json(response).await;
    let item = value.get(0).expect("one listing");
    assert_eq!(item.get("title").and_then(Value::as_str), Some("Desk"));
    assert_eq!(item.get("price").and_then(Value::as_str), Some("49.99"));
    assert_eq!(
        item.get("seller_id").and_then(Value::as_str),
        Some(seller.id.to_string().as_str())
    );
    assert_eq!(
        item.get("seller_email").and_then(Value::as_str),
        Some("alice@example.com")
    );
    assert!(
        item.get("created_at")
            .and_then(Value::as_str)
            .expect("created_at")
            .starts_with("2024-05-01T12:00:00")
    );
}

#[actix_web::test]
async fn create_requires_authentication() {
    let repo = Arc::new(InMemoryListingRepository::new());
    let app = actix_test::init_service(test_app(repo)).await;

    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::post()
            .uri("/api/listings")
            .set_json(json!({ "title": "Desk", "description": "Wooden", "price": "49.99" }))
            .to_request(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let value = read_json(response).await;
    assert_eq!(
        value.get("code").and_then(Value::as_str),
        Some("unauthorized")
    );
}

#[actix_web::test]
async fn create_returns_created_listing() {
    let repo = Arc::new(InMemoryListingRepository::new());
    let app = actix_test::init_service(test_app(repo)).await;
    let seller = alice();
    let cookie = login_as(&app, &seller).await;

    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::post()
            .uri("/api/listings")
            .cookie(cookie)
            .set_json(json!({ "title": "Desk", "description": "Wooden", "price": "49.99" }))
            .to_request(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let value = read_json(response).await;
    assert_eq!(value.get("title").and_then(Value::as_str), Some("Desk"));
    assert_eq!(
        value.get("seller_id").and_then(Value::as_str),
        Some(seller.id.to_string().as_str())
    );
}

#[actix_web::test]
async fn create_with_zero_price_is_rejected_and_not_persisted() {
    let repo = Arc::new(InMemoryListingRepository::new());
    let app = actix_test::init_service(test_app(repo)).await;
    let cookie = login_as(&app, &alice()).await;

    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::post()
            .uri("/api/listings")
            .cookie(cookie)
            .set_json(json!({ "title": "Desk", "description": "Wooden", "price": "0.00" }))
            .to_request(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let value = read_json(response).await;
    assert_eq!(
        value.get("code").and_then(Value::as_str),
        Some("invalid_price")
    );

    let list = actix_test::call_service(
        &app,
        actix_test::TestRequest::get().uri("/api/listings").to_request(),
    )
    .await;
    let listings = read_json(list).await;
    assert_eq!(listings.as_array().map(Vec::len), Some(0));
}

#[actix_web::test]
async fn create_with_missing_fields_is_a_structured_bad_request() {
    let repo = Arc::new(InMemoryListingRepository::new());
    let app = actix_test::init_service(test_app(repo)).await;
    let cookie = login_as(&app, &alice()).await;

    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::post()
            .uri("/api/listings")
            .cookie(cookie)
            .set_json(json!({ "title": "Desk" }))
            .to_request(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let value = read_json(response).await;
    assert_eq!(
        value.get("code").and_then(Value::as_str),
        Some("invalid_request")
    );
}

#[actix_web::test]
async fn update_with_wrongly_typed_field_is_a_structured_bad_request() {
    let repo = Arc::new(InMemoryListingRepository::new());
    let seller = alice();
    let listing = seeded_listing(&seller, "Desk", true, 1);
    let listing_id = listing.id();
    repo.seed([listing]);
    let app = actix_test::init_service(test_app(repo)).await;
    let cookie = login_as(&app, &seller).await;

    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::put()
            .uri(&format!("/api/listings/{listing_id}"))
            .cookie(cookie)
            .set_json(json!({ "price": 49.99 }))
            .to_request(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let value = read_json(response).await;
    assert_eq!(
        value.get("code").and_then(Value::as_str),
        Some("invalid_request")
    );
}

#[actix_web::test]
async fn get_missing_listing_is_not_found() {
    let repo = Arc::new(InMemoryListingRepository::new());
    let app = actix_test::init_service(test_app(repo)).await;

    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::get()
            .uri(&format!("/api/listings/{}", Uuid::new_v4()))
            .to_request(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let value = read_json(response).await;
    assert_eq!(value.get("code").and_then(Value::as_str), Some("not_found"));
}

#[actix_web::test]
async fn update_by_non_seller_is_forbidden_and_unapplied() {
    let repo = Arc::new(InMemoryListingRepository::new());
    let seller = alice();
    let listing = seeded_listing(&seller, "Desk", true, 1);
    let listing_id = listing.id();
    repo.seed([listing]);
    let app = actix_test::init_service(test_app(repo)).await;
    let cookie = login_as(&app, &bob()).await;

    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::put()
            .uri(&format!("/api/listings/{listing_id}"))
            .cookie(cookie)
            .set_json(json!({ "title": "Hacked" }))
            .to_request(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let detail = actix_test::call_service(
        &app,
        actix_test::TestRequest::get()
            .uri(&format!("/api/listings/{listing_id}"))
            .to_request(),
    )
    .await;
    let value = read_json(detail).await;
    assert_eq!(value.get("title").and_then(Value::as_str), Some("Desk"));
}

#[actix_web::test]
async fn update_applies_only_supplied_fields() {
    let repo = Arc::new(InMemoryListingRepository::new());
    let seller = alice();
    let listing = seeded_listing(&seller, "Desk", true, 1);
    let listing_id = listing.id();
    repo.seed([listing]);
    let app = actix_test::init_service(test_app(repo)).await;
    let cookie = login_as(&app, &seller).await;

    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::put()
            .uri(&format!("/api/listings/{listing_id}"))
            .cookie(cookie)
            .set_json(json!({ "title": "Standing desk" }))
            .to_request(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let value = read_json(response).await;
    assert_eq!(
        value.get("title").and_then(Value::as_str),
        Some("Standing desk")
    );
    assert_eq!(
        value.get("description").and_then(Value::as_str),
        Some("Wooden")
    );
    assert_eq!(value.get("price").and_then(Value::as_str), Some("49.99"));
}

#[actix_web::test]
async fn update_with_invalid_price_is_bad_request() {
    let repo = Arc::new(InMemoryListingRepository::new());
    let seller = alice();
    let listing = seeded_listing(&seller, "Desk", true, 1);
    let listing_id = listing.id();
    repo.seed([listing]);
    let app = actix_test::init_service(test_app(repo)).await;
    let cookie = login_as(&app, &seller).await;

    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::put()
            .uri(&format!("/api/listings/{listing_id}"))
            .cookie(cookie)
            .set_json(json!({ "price": "-10" }))
            .to_request(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let value = read_json(response).await;
    assert_eq!(
        value.get("code").and_then(Value::as_str),
        Some("invalid_price")
    );
}

#[actix_web::test]
async fn delete_removes_the_listing() {
    let repo = Arc::new(InMemoryListingRepository::new());
    let seller = alice();
    let listing = seeded_listing(&seller, "Desk", true, 1);
    let listing_id = listing.id();
    repo.seed([listing]);
    let app = actix_test::init_service(test_app(repo)).await;
    let cookie = login_as(&app, &seller).await;

    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::delete()
            .uri(&format!("/api/listings/{listing_id}"))
            .cookie(cookie)
            .to_request(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let detail = actix_test::call_service(
        &app,
        actix_test::TestRequest::get()
            .uri(&format!("/api/listings/{listing_id}"))
            .to_request(),
    )
    .await;
    assert_eq!(detail.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn delete_by_anonymous_caller_is_unauthorized() {
    let repo = Arc::new(InMemoryListingRepository::new());
    let seller = alice();
    let listing = seeded_listing(&seller, "Desk", true, 1);
    let listing_id = listing.id();
    repo.seed([listing]);
    let app = actix_test::init_service(test_app(repo)).await;

    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::delete()
            .uri(&format!("/api/listings/{listing_id}"))
            .to_request(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}
