//! Listing entity and its validation rules.
//!
//! Fields are private so the entity invariants hold by construction: the
//! price is always positive, and `seller`, `created_at`, and `id` cannot
//! change after creation. Partial updates go through [`Listing::apply`].

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::domain::actor::SellerRef;

/// Validation errors for listing prices.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PriceError {
    /// The input does not parse as a decimal number.
    #[error("Price must be a decimal number.")]
    Unparsable,
    /// The price is zero or negative.
    #[error("Price must be greater than zero.")]
    NotPositive,
}

/// Positive fixed-point decimal price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Price(Decimal);

impl Price {
    /// Validate and wrap a decimal amount.
    pub fn new(amount: Decimal) -> Result<Self, PriceError> {
        if amount <= Decimal::ZERO {
            return Err(PriceError::NotPositive);
        }
        Ok(Self(amount))
    }

    /// Parse a price from user input such as `"49.99"`.
    pub fn parse(raw: &str) -> Result<Self, PriceError> {
        let amount = Decimal::from_str(raw.trim()).map_err(|_| PriceError::Unparsable)?;
        Self::new(amount)
    }

    /// Access the underlying decimal amount.
    pub fn as_decimal(&self) -> Decimal {
        self.0
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Field values for constructing a listing, either fresh or from storage.
#[derive(Debug, Clone)]
pub struct ListingDraft {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub price: Price,
    pub seller: SellerRef,
    pub created_at: DateTime<Utc>,
    pub is_active: bool,
}

/// Partial update with explicit present/absent markers.
///
/// None of the listing fields are nullable, so an absent field always means
/// "retain the prior value"; there is no "explicitly cleared" state.
#[derive(Debug, Clone, Default)]
pub struct ListingChanges {
    pub title: Option<String>,
    pub description: Option<String>,
    pub price: Option<Price>,
}

impl ListingChanges {
    /// Whether the update would change nothing.
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.description.is_none() && self.price.is_none()
    }
}

/// A marketplace item owned by a seller.
#[derive(Debug, Clone, PartialEq)]
pub struct Listing {
    id: Uuid,
    title: String,
    description: String,
    price: Price,
    seller: SellerRef,
    created_at: DateTime<Utc>,
    is_active: bool,
}

impl Listing {
    /// Construct a listing from validated parts.
    pub fn new(draft: ListingDraft) -> Self {
        let ListingDraft {
            id,
            title,
            description,
            price,
            seller,
            created_at,
            is_active,
        } = draft;
        Self {
            id,
            title,
            description,
            price,
            seller,
            created_at,
            is_active,
        }
    }

    /// Apply a partial update; absent fields retain their prior values.
    pub fn apply(&mut self, changes: ListingChanges) {
        let ListingChanges {
            title,
            description,
            price,
        } = changes;
        if let Some(title) = title {
            self.title = title;
        }
        if let Some(description) = description {
            self.description = description;
        }
        if let Some(price) = price {
            self.price = price;
        }
    }

    /// Opaque listing identifier.
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Short item title.
    pub fn title(&self) -> &str {
        self.title.as_str()
    }

    /// Free-text item description.
    pub fn description(&self) -> &str {
        self.description.as_str()
    }

    /// Asking price, always positive.
    pub fn price(&self) -> Price {
        self.price
    }

    /// The owning user identity.
    pub fn seller(&self) -> &SellerRef {
        &self.seller
    }

    /// Creation timestamp, set exactly once.
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Whether the listing appears in the public feed.
    pub fn is_active(&self) -> bool {
        self.is_active
    }
}
