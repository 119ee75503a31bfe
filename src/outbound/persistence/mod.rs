//! Persistence adapters for the listing repository port.
//!
//! The Diesel adapter is the production entity store; the in-memory adapter
//! backs local development without a database and the adapter test suites.

pub mod diesel_listing_repository;
pub mod memory;
pub mod models;
pub mod pool;
pub mod schema;

pub use diesel_listing_repository::DieselListingRepository;
pub use memory::InMemoryListingRepository;
pub use pool::{DbPool, PoolError, build_pool};
