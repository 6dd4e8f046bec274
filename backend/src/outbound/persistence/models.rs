//! Internal Diesel row models for the `users` table.

use diesel::prelude::*;

use crate::domain::User;

use super::schema::users;

/// Row as read from (or returned by) the `users` table.
#[derive(Debug, PartialEq, Eq, Queryable, Selectable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct UserRow {
    pub id: i32,
    pub name: String,
    pub email: String,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        let UserRow { id, name, email } = row;
        Self { id, name, email }
    }
}

/// Insert payload; the identifier comes from the table's sequence.
#[derive(Debug, Insertable)]
#[diesel(table_name = users)]
pub struct NewUserRow<'a> {
    pub name: &'a str,
    pub email: &'a str,
}

/// Changeset overwriting the mutable columns of an existing row.
#[derive(Debug, AsChangeset)]
#[diesel(table_name = users)]
pub struct UserRowChanges<'a> {
    pub name: &'a str,
    pub email: &'a str,
}
