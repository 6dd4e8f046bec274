//! PostgreSQL persistence adapter using Diesel ORM.
//!
//! The repository implementation only translates between Diesel row models
//! and domain types; no business logic resides here. Row structs
//! (`models.rs`) and the schema definition (`schema.rs`) are internal
//! implementation details, never exposed to the domain layer. Connections
//! are managed via a `bb8` pool with native async support through
//! `diesel-async`.

mod diesel_user_repository;
mod models;
mod pool;
mod schema;

pub use diesel_user_repository::DieselUserRepository;
pub use pool::{DbPool, PoolConfig, PoolError};
