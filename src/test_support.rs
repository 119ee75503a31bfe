//! Test support utilities exposed behind the `test-support` feature.
//!
//! Integration tests stand in for the external identity layer with a login
//! route that writes the same session keys it would.

use actix_session::{SessionMiddleware, storage::CookieSessionStore};
use actix_web::cookie::Key;
use actix_web::{HttpResponse, web};

use crate::domain::{Error, SellerRef};
use crate::inbound::http::session::SessionContext;

/// Session middleware with a fresh key and the `Secure` flag disabled so
/// plain-HTTP test requests carry the cookie.
pub fn session_middleware() -> SessionMiddleware<CookieSessionStore> {
    SessionMiddleware::builder(CookieSessionStore::default(), Key::generate())
        .cookie_name("session".to_owned())
        .cookie_secure(false)
        .build()
}

/// Persist the posted identity into the session, as the identity layer would.
pub async fn login_as(
    session: SessionContext,
    user: web::Json<SellerRef>,
) -> Result<HttpResponse, Error> {
    session.persist_user(&user)?;
    Ok(HttpResponse::Ok().finish())
}
