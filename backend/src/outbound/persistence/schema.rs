//! Diesel table definitions for the PostgreSQL schema.
//!
//! These definitions must match the database migrations exactly. They are
//! used by Diesel for compile-time query validation and type-safe SQL
//! generation.

diesel::table! {
    /// Users table backing the CRUD API.
    ///
    /// The `id` column is the primary key, assigned by the `SERIAL`
    /// sequence. Name and email are free text with no uniqueness
    /// constraints.
    users (id) {
        /// Primary key assigned on insert.
        id -> Int4,
        /// Display name.
        name -> Text,
        /// Contact address.
        email -> Text,
    }
}
