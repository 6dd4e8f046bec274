//! Service entry-point: configuration, schema initialisation, and serving.

use std::env;
use std::net::SocketAddr;

use actix_web::web;
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use backend::inbound::http::health::HealthState;
use backend::outbound::persistence::{DbPool, PoolConfig};
use backend::server::{DatabaseSettings, ServerConfig, create_server};

/// Schema and seed migrations compiled into the binary and applied once at
/// startup.
const MIGRATIONS: EmbeddedMigrations = embed_migrations!();

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = DatabaseSettings::load_from_iter(env::args_os())
        .map_err(|e| std::io::Error::other(format!("database configuration error: {e}")))?;
    let database_url = settings.connection_url();

    run_migrations(database_url.clone()).await?;

    let pool = DbPool::new(PoolConfig::new(database_url))
        .await
        .map_err(|e| std::io::Error::other(format!("database pool initialisation failed: {e}")))?;

    info!(host = %settings.host, database = %settings.name, "database ready");

    let health_state = web::Data::new(HealthState::new());
    let config = ServerConfig::new(SocketAddr::from(([0, 0, 0, 0], 8080)), pool);
    let server = create_server(health_state, config)?;
    server.await
}

/// Apply pending migrations over a blocking connection.
///
/// This is also the startup connectivity check: an unreachable database
/// fails the process before the listener binds.
async fn run_migrations(database_url: String) -> std::io::Result<()> {
    tokio::task::spawn_blocking(move || -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        use diesel::Connection;

        let mut conn = diesel::PgConnection::establish(&database_url)?;
        conn.run_pending_migrations(MIGRATIONS)?;
        Ok(())
    })
    .await
    .map_err(|e| std::io::Error::other(format!("migration task failed: {e}")))?
    .map_err(|e| std::io::Error::other(format!("database initialisation failed: {e}")))
}
