//! Users API handlers.
//!
//! ```text
//! GET    /api/v1/users
//! GET    /api/v1/users/{id}
//! POST   /api/v1/users      {"name":"Ann","email":"ann@x.com"}
//! PUT    /api/v1/users/{id} {"name":"Ann","email":"ann@x.com"}
//! DELETE /api/v1/users/{id}
//! ```
//!
//! Each handler issues exactly one storage call and maps its outcome to a
//! status code. Failure folding differs per operation; see the individual
//! handlers.

use actix_web::{HttpResponse, delete, get, post, put, web};
use tracing::warn;

use crate::domain::ports::UserPersistenceError;
use crate::domain::{Error, User, UserDraft};
use crate::inbound::http::ApiResult;
use crate::inbound::http::state::HttpState;

fn storage_error(err: UserPersistenceError) -> Error {
    Error::internal(err.to_string())
}

/// List all users.
#[utoipa::path(
    get,
    path = "/api/v1/users",
    responses(
        (status = 200, description = "All users in storage-native order", body = [User]),
        (status = 500, description = "Storage failure", body = Error)
    ),
    tags = ["users"],
    operation_id = "listUsers"
)]
#[get("/users")]
pub async fn list_users(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<User>>> {
    let users = state.users.list().await.map_err(storage_error)?;
    Ok(web::Json(users))
}

/// Fetch a single user by identifier.
///
/// Zero matching rows, an identifier the storage layer cannot bind, and
/// any other storage failure all fold into 404.
#[utoipa::path(
    get,
    path = "/api/v1/users/{id}",
    params(("id" = i32, Path, description = "User ID")),
    responses(
        (status = 200, description = "Matching user", body = User),
        (status = 404, description = "User not found", body = Error)
    ),
    tags = ["users"],
    operation_id = "getUser"
)]
#[get("/users/{id}")]
pub async fn get_user(
    state: web::Data<HttpState>,
    id: web::Path<String>,
) -> ApiResult<web::Json<User>> {
    let Ok(id) = id.parse::<i32>() else {
        return Err(Error::not_found("User not found"));
    };

    match state.users.find_by_id(id).await {
        Ok(Some(user)) => Ok(web::Json(user)),
        Ok(None) => Err(Error::not_found("User not found")),
        Err(err) => {
            warn!(%err, id, "user lookup failed");
            Err(Error::not_found("User not found"))
        }
    }
}

/// Create a new user.
///
/// The storage layer assigns the identifier; the response carries the full
/// record including it.
#[utoipa::path(
    post,
    path = "/api/v1/users",
    request_body = UserDraft,
    responses(
        (status = 201, description = "Created user with assigned identifier", body = User),
        (status = 400, description = "Request body does not decode", body = Error),
        (status = 500, description = "Storage failure", body = Error)
    ),
    tags = ["users"],
    operation_id = "createUser"
)]
#[post("/users")]
pub async fn create_user(
    state: web::Data<HttpState>,
    draft: web::Json<UserDraft>,
) -> ApiResult<HttpResponse> {
    let created = state.users.create(&draft).await.map_err(storage_error)?;
    Ok(HttpResponse::Created().json(created))
}

/// Overwrite name and email for an existing user.
///
/// A missing row updates nothing; the submitted record is echoed back at
/// 200 regardless of rows affected.
#[utoipa::path(
    put,
    path = "/api/v1/users/{id}",
    params(("id" = i32, Path, description = "User ID")),
    request_body = UserDraft,
    responses(
        (status = 200, description = "Submitted record with the path identifier", body = User),
        (status = 400, description = "Non-numeric identifier or undecodable body", body = Error),
        (status = 500, description = "Storage failure", body = Error)
    ),
    tags = ["users"],
    operation_id = "updateUser"
)]
#[put("/users/{id}")]
pub async fn update_user(
    state: web::Data<HttpState>,
    id: web::Path<String>,
    draft: web::Json<UserDraft>,
) -> ApiResult<web::Json<User>> {
    let id: i32 = id
        .parse()
        .map_err(|_| Error::invalid_request("Invalid ID"))?;
    let draft = draft.into_inner();

    state
        .users
        .update(id, &draft)
        .await
        .map_err(storage_error)?;

    Ok(web::Json(User {
        id,
        name: draft.name,
        email: draft.email,
    }))
}

/// Delete a user.
///
/// An identifier the storage layer cannot bind matches no rows; the
/// response is 204 whether or not a row existed.
#[utoipa::path(
    delete,
    path = "/api/v1/users/{id}",
    params(("id" = i32, Path, description = "User ID")),
    responses(
        (status = 204, description = "No content"),
        (status = 500, description = "Storage failure", body = Error)
    ),
    tags = ["users"],
    operation_id = "deleteUser"
)]
#[delete("/users/{id}")]
pub async fn delete_user(
    state: web::Data<HttpState>,
    id: web::Path<String>,
) -> ApiResult<HttpResponse> {
    if let Ok(id) = id.parse::<i32>() {
        state.users.delete(id).await.map_err(storage_error)?;
    }
    Ok(HttpResponse::NoContent().finish())
}
