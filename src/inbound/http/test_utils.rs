//! Test helpers for inbound HTTP components.

use std::sync::Arc;

use actix_session::{SessionMiddleware, storage::CookieSessionStore};
use actix_web::cookie::{Cookie, Key};
use actix_web::{App, HttpResponse, test, web};

use crate::domain::SellerRef;
use crate::inbound::http;
use crate::inbound::http::session::SessionContext;
use crate::outbound::persistence::memory::InMemoryListingRepository;
use crate::server::build_state_with_repository;

/// Build a session middleware configured for tests.
///
/// Generates a fresh signing key per invocation and disables the `Secure`
/// flag so plain-HTTP test requests carry the cookie.
pub fn test_session_middleware() -> SessionMiddleware<CookieSessionStore> {
    SessionMiddleware::builder(CookieSessionStore::default(), Key::generate())
        .cookie_name("session".to_owned())
        .cookie_secure(false)
        .build()
}

/// Application with both adapters, session middleware, and a login shortcut
/// that plays the part of the external identity layer.
pub fn test_app(
    repository: Arc<InMemoryListingRepository>,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(web::Data::new(build_state_with_repository(repository)))
        .wrap(test_session_middleware())
        .route(
            "/__login",
            web::post().to(
                |session: SessionContext, user: web::Json<SellerRef>| async move {
                    session.persist_user(&user)?;
                    Ok::<_, crate::domain::Error>(HttpResponse::Ok())
                },
            ),
        )
        .configure(http::configure)
}

/// Log the given user into a fresh session and return the cookie.
pub async fn login_as(
    app: &impl actix_web::dev::Service<
        actix_http::Request,
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
    >,
    user: &SellerRef,
) -> Cookie<'static> {
    let res = test::call_service(
        app,
        test::TestRequest::post()
            .uri("/__login")
            .set_json(user)
            .to_request(),
    )
    .await;
    assert!(res.status().is_success());
    res.response()
        .cookies()
        .find(|cookie| cookie.name() == "session")
        .expect("session cookie")
        .into_owned()
}
