use std::net::SocketAddr;

use axum::Router;
use configs::{AppConfig, DatabaseConfig};
use migration::MigratorTrait;
use sea_orm::DatabaseConnection;
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::routes;
use crate::state::ServerState;

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Connect the pool and, when enabled, apply pending migrations.
pub async fn connect_database(cfg: &DatabaseConfig) -> anyhow::Result<DatabaseConnection> {
    let db = models::db::connect_with_config(cfg).await?;
    if cfg.auto_migrate {
        migration::Migrator::up(&db, None).await?;
        info!(event = "migrations_applied", "database schema up to date");
    }
    Ok(db)
}

/// Router over an already connected database.
pub fn build_app(db: DatabaseConnection) -> Router {
    routes::build_router(ServerState::new(db), build_cors())
}

/// Public entry: load configuration, build the app and run the HTTP server
pub async fn run() -> anyhow::Result<()> {
    let cfg = AppConfig::load_and_validate()?;
    run_with_config(cfg).await
}

pub async fn run_with_config(cfg: AppConfig) -> anyhow::Result<()> {
    let db = connect_database(&cfg.database).await?;
    let app = build_app(db);

    let addr: SocketAddr = format!("{}:{}", cfg.server.host, cfg.server.port).parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, "listening");
    axum::serve(listener, app).await?;
    Ok(())
}
