//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers the user CRUD endpoints, the health probes, and
//! the request/response schemas. The generated specification backs the
//! Swagger UI served at `/docs` in debug builds.

use utoipa::OpenApi;

use crate::domain::{Error, ErrorCode, User, UserDraft};

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "User API",
        description = "CRUD interface for the user resource."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::users::list_users,
        crate::inbound::http::users::get_user,
        crate::inbound::http::users::create_user,
        crate::inbound::http::users::update_user,
        crate::inbound::http::users::delete_user,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(User, UserDraft, Error, ErrorCode)),
    tags(
        (name = "users", description = "Operations related to users"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
