//! User data model.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Application user.
///
/// The identifier is assigned by the storage layer's sequence and never
/// changes once a row exists. Name and email are free text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct User {
    /// Stable identifier assigned on creation.
    #[schema(example = 1)]
    pub id: i32,
    /// Display name shown to other users.
    #[schema(example = "Ada Lovelace")]
    pub name: String,
    /// Contact address. Not validated or deduplicated.
    #[schema(example = "ada@example.com")]
    pub email: String,
}

/// Identifier-less request-body form of [`User`].
///
/// Missing fields decode to empty strings and unknown fields (including a
/// client-supplied `id`) are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct UserDraft {
    #[schema(example = "Ada Lovelace")]
    pub name: String,
    #[schema(example = "ada@example.com")]
    pub email: String,
}
