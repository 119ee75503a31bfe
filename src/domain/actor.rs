//! Caller identity threaded into every service call.
//!
//! Identity issuance lives in an external collaborator; this core only sees
//! an [`Actor`] recovered from the session cookie. There is no ambient
//! "current user" state anywhere in the crate.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::Error;

/// Stable user identifier supplied by the identity collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(Uuid);

impl UserId {
    /// Wrap an already-validated UUID.
    pub fn from_uuid(id: Uuid) -> Self {
        Self(id)
    }

    /// Parse an identifier from its textual form.
    pub fn parse(raw: &str) -> Result<Self, uuid::Error> {
        Uuid::parse_str(raw).map(Self)
    }

    /// Access the underlying UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Reference to the user identity owning or acting on listings.
///
/// The contact email is a snapshot taken from the identity collaborator; it
/// feeds the API serializer and nothing else.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SellerRef {
    pub id: UserId,
    pub email: Option<String>,
}

impl SellerRef {
    /// Build a reference from an identifier without a contact email.
    pub fn from_id(id: UserId) -> Self {
        Self { id, email: None }
    }
}

/// The identity performing a service operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Actor {
    /// No session identity present.
    Anonymous,
    /// Authenticated user recovered from the session.
    Authenticated(SellerRef),
}

impl Actor {
    /// The authenticated user, if any.
    pub fn user(&self) -> Option<&SellerRef> {
        match self {
            Self::Anonymous => None,
            Self::Authenticated(user) => Some(user),
        }
    }

    /// Require an authenticated user or fail with `Unauthorized`.
    pub fn require_user(&self) -> Result<&SellerRef, Error> {
        self.user()
            .ok_or_else(|| Error::unauthorized("Authentication required"))
    }
}
