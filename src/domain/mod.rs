//! Domain entities, validation, and listing services.
//!
//! Everything in this module is transport agnostic. Inbound adapters map
//! domain outcomes to HTML pages or JSON responses; outbound adapters
//! implement the repository port against PostgreSQL or memory.

pub mod actor;
pub mod error;
pub mod listing;
pub mod listing_service;
pub mod ports;

pub use self::actor::{Actor, SellerRef, UserId};
pub use self::error::{Error, ErrorCode};
pub use self::listing::{Listing, ListingChanges, ListingDraft, Price, PriceError};
pub use self::listing_service::{ListingCommandService, ListingQueryService};
