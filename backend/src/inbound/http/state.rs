//! Shared HTTP adapter state.
//!
//! Handlers accept this state via `actix_web::web::Data` so they depend
//! only on the repository port and remain testable without a database.

use std::sync::Arc;

use crate::domain::ports::UserRepository;

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// Storage port backing the user CRUD handlers.
    pub users: Arc<dyn UserRepository>,
}

impl HttpState {
    /// Construct state from a repository implementation.
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }
}
