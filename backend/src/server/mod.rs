//! Server construction and route wiring.

mod config;

pub use config::{DatabaseSettings, ServerConfig};

use std::sync::Arc;

use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

#[cfg(debug_assertions)]
use crate::doc::ApiDoc;
use crate::inbound::http::error::json_error_handler;
use crate::inbound::http::health::{HealthState, live, ready};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::users::{create_user, delete_user, get_user, list_users, update_user};
use crate::middleware::RequestLog;
use crate::outbound::persistence::DieselUserRepository;

fn build_app(
    http_state: web::Data<HttpState>,
    health_state: web::Data<HealthState>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    // Explicit route table: the versioned scope registers each handler.
    let api = web::scope("/api/v1")
        .app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .service(list_users)
        .service(get_user)
        .service(create_user)
        .service(update_user)
        .service(delete_user);

    let app = App::new()
        .app_data(http_state)
        .app_data(health_state)
        .wrap(RequestLog)
        .service(api)
        .service(ready)
        .service(live);

    #[cfg(debug_assertions)]
    let app = app.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));

    app
}

/// Construct an Actix HTTP server using the provided health state and
/// configuration.
///
/// The repository adapter is built here from the pool and handed to the
/// handlers through [`HttpState`]; handlers never touch the pool directly.
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(
    health_state: web::Data<HealthState>,
    config: ServerConfig,
) -> std::io::Result<Server> {
    let ServerConfig { bind_addr, db_pool } = config;

    let users = Arc::new(DieselUserRepository::new(db_pool));
    let http_state = web::Data::new(HttpState::new(users));
    let server_health_state = health_state.clone();

    let server = HttpServer::new(move || {
        build_app(http_state.clone(), server_health_state.clone())
    })
    .bind(bind_addr)?
    .run();

    health_state.mark_ready();
    Ok(server)
}
