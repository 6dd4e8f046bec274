//! Port abstraction for user persistence adapters and their errors.

use async_trait::async_trait;

use crate::domain::{User, UserDraft};

/// Persistence errors raised by user repository adapters.
///
/// Messages carry the underlying driver text so callers can surface it.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UserPersistenceError {
    /// A pooled connection could not be obtained.
    #[error("user repository connection failed: {message}")]
    Connection { message: String },

    /// A statement failed during execution.
    #[error("user repository query failed: {message}")]
    Query { message: String },
}

impl UserPersistenceError {
    /// Create a connection error with the given message.
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    /// Create a query error with the given message.
    pub fn query(message: impl Into<String>) -> Self {
        Self::Query {
            message: message.into(),
        }
    }
}

/// Storage operations behind the user CRUD handlers.
///
/// Each method issues exactly one statement. `update` and `delete` report
/// the number of rows affected and treat a missing row as zero, not as an
/// error.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Fetch all users in storage-native order.
    async fn list(&self) -> Result<Vec<User>, UserPersistenceError>;

    /// Fetch a user by identifier.
    async fn find_by_id(&self, id: i32) -> Result<Option<User>, UserPersistenceError>;

    /// Insert a new row and return it with the generated identifier.
    async fn create(&self, draft: &UserDraft) -> Result<User, UserPersistenceError>;

    /// Overwrite name and email for the matching row.
    async fn update(&self, id: i32, draft: &UserDraft) -> Result<usize, UserPersistenceError>;

    /// Remove the matching row.
    async fn delete(&self, id: i32) -> Result<usize, UserPersistenceError>;
}
