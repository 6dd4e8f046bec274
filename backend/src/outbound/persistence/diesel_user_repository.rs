//! PostgreSQL-backed `UserRepository` implementation using Diesel ORM.
//!
//! Each port method issues a single statement. Insert retrieves the
//! generated identifier via `RETURNING`; update and delete report affected
//! row counts and leave "row missing" decisions to the caller.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use tracing::debug;

use crate::domain::ports::{UserPersistenceError, UserRepository};
use crate::domain::{User, UserDraft};

use super::models::{NewUserRow, UserRow, UserRowChanges};
use super::pool::{DbPool, PoolError};
use super::schema::users;

/// Diesel-backed implementation of the `UserRepository` port.
#[derive(Clone)]
pub struct DieselUserRepository {
    pool: DbPool,
}

impl DieselUserRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

/// Map pool errors to port connection errors.
fn map_pool_error(error: PoolError) -> UserPersistenceError {
    match error {
        PoolError::Checkout { message } | PoolError::Build { message } => {
            UserPersistenceError::connection(message)
        }
    }
}

/// Map Diesel errors to port query errors.
///
/// The driver text is kept in the message; clients receive it verbatim.
fn map_diesel_error(error: diesel::result::Error) -> UserPersistenceError {
    debug!(%error, "diesel operation failed");
    UserPersistenceError::query(error.to_string())
}

#[async_trait]
impl UserRepository for DieselUserRepository {
    async fn list(&self) -> Result<Vec<User>, UserPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<UserRow> = users::table
            .select(UserRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(rows.into_iter().map(User::from).collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<User>, UserPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: Option<UserRow> = users::table
            .find(id)
            .select(UserRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        Ok(row.map(User::from))
    }

    async fn create(&self, draft: &UserDraft) -> Result<User, UserPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let new_row = NewUserRow {
            name: &draft.name,
            email: &draft.email,
        };

        let row: UserRow = diesel::insert_into(users::table)
            .values(&new_row)
            .returning(UserRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(User::from(row))
    }

    async fn update(&self, id: i32, draft: &UserDraft) -> Result<usize, UserPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let changes = UserRowChanges {
            name: &draft.name,
            email: &draft.email,
        };

        diesel::update(users::table.find(id))
            .set(&changes)
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)
    }

    async fn delete(&self, id: i32) -> Result<usize, UserPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        diesel::delete(users::table.find(id))
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)
    }
}
