//! Session helpers to keep HTTP handlers free of framework-specific logic.
//!
//! The external identity layer writes `user_id` (and optionally
//! `user_email`) into the shared session cookie. This wrapper recovers an
//! [`Actor`] from those keys; nothing in this core ever issues credentials.

use actix_session::Session;
use actix_web::{FromRequest, HttpRequest, dev::Payload};
use futures_util::future::LocalBoxFuture;

use crate::domain::{Actor, Error, SellerRef, UserId};

pub(crate) const USER_ID_KEY: &str = "user_id";
pub(crate) const USER_EMAIL_KEY: &str = "user_email";

/// Newtype wrapper that exposes higher-level session operations.
#[derive(Clone)]
pub struct SessionContext(Session);

impl SessionContext {
    /// Construct a new wrapper from the underlying Actix session.
    pub fn new(session: Session) -> Self {
        Self(session)
    }

    /// Persist the authenticated user's identity in the session cookie.
    pub fn persist_user(&self, user: &SellerRef) -> Result<(), Error> {
        self.0
            .insert(USER_ID_KEY, user.id.to_string())
            .map_err(|error| Error::internal(format!("failed to persist session: {error}")))?;
        if let Some(email) = &user.email {
            self.0
                .insert(USER_EMAIL_KEY, email.clone())
                .map_err(|error| Error::internal(format!("failed to persist session: {error}")))?;
        }
        Ok(())
    }

    /// Recover the acting identity; a missing or malformed session yields
    /// [`Actor::Anonymous`] rather than an error.
    pub fn actor(&self) -> Result<Actor, Error> {
        let raw_id = self
            .0
            .get::<String>(USER_ID_KEY)
            .map_err(|error| Error::internal(format!("failed to read session: {error}")))?;
        let Some(raw_id) = raw_id else {
            return Ok(Actor::Anonymous);
        };
        let id = match UserId::parse(&raw_id) {
            Ok(id) => id,
            Err(error) => {
                tracing::warn!("invalid user id in session cookie: {error}");
                return Ok(Actor::Anonymous);
            }
        };
        let email = self
            .0
            .get::<String>(USER_EMAIL_KEY)
            .map_err(|error| Error::internal(format!("failed to read session: {error}")))?;
        Ok(Actor::Authenticated(SellerRef { id, email }))
    }
}

impl FromRequest for SessionContext {
    type Error = actix_web::Error;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let fut = Session::from_request(req, payload);
        Box::pin(async move { fut.await.map(SessionContext::new) })
    }
}
