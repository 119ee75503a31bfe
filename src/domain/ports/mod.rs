//! Domain ports: traits the adapters plug into.
//!
//! Driving ports ([`ListingsQuery`], [`ListingsCommand`]) are what inbound
//! adapters call; the driven port ([`ListingRepository`]) is what outbound
//! persistence adapters implement.

pub mod listing_repository;
pub mod listings;

pub use self::listing_repository::{ListingRepository, ListingRepositoryError};
#[cfg(test)]
pub use self::listing_repository::MockListingRepository;
pub use self::listings::{
    CreateListingRequest, ListingsCommand, ListingsQuery, UpdateListingRequest,
};
