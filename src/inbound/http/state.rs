//! Shared HTTP adapter state.
//!
//! Handlers accept this state via `actix_web::web::Data` so they only depend
//! on the domain ports and stay testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{ListingsCommand, ListingsQuery};

/// Dependency bundle for both presentation adapters.
#[derive(Clone)]
pub struct HttpState {
    pub listings_query: Arc<dyn ListingsQuery>,
    pub listings_command: Arc<dyn ListingsCommand>,
}

impl HttpState {
    /// Construct state from the listing port implementations.
    pub fn new(
        listings_query: Arc<dyn ListingsQuery>,
        listings_command: Arc<dyn ListingsCommand>,
    ) -> Self {
        Self {
            listings_query,
            listings_command,
        }
    }
}
