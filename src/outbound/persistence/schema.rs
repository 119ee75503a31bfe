//! Diesel table definitions for the PostgreSQL schema.
//!
//! These definitions must match the database migrations exactly; Diesel uses
//! them for compile-time query validation and type-safe SQL generation.

diesel::table! {
    /// Marketplace listings.
    ///
    /// `seller_id` references the identity collaborator's user store;
    /// `seller_email` is a snapshot taken at creation for API serialization.
    listings (id) {
        /// Primary key: UUID v4 identifier.
        id -> Uuid,
        /// Short item title.
        title -> Varchar,
        /// Free-text item description.
        description -> Text,
        /// Asking price, NUMERIC(10, 2), always positive.
        price -> Numeric,
        /// Owning user identifier.
        seller_id -> Uuid,
        /// Seller contact email captured at creation.
        seller_email -> Nullable<Varchar>,
        /// Record creation timestamp, set once.
        created_at -> Timestamptz,
        /// Whether the listing appears in the public feed.
        is_active -> Bool,
    }
}
