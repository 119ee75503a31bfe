//! Marketplace backend library modules.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod outbound;
pub mod server;
#[cfg(feature = "test-support")]
pub mod test_support;

/// Public OpenAPI surface for the JSON API.
pub use doc::ApiDoc;
