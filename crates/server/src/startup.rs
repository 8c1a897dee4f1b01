use std::{net::SocketAddr, sync::Arc};

use axum::Router;
use configs::{AppConfig, ServerConfig};
use migration::MigratorTrait;
use tower_http::cors::CorsLayer;
use tracing::{info, warn};

use crate::errors::StartupError;
use crate::routes::{self, AppState};
use service::vehicle::{repo::seaorm::SeaOrmVehicleRepository, VehicleRepository};

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

fn bind_addr(server: &ServerConfig) -> Result<SocketAddr, StartupError> {
    format!("{}:{}", server.host, server.port)
        .parse()
        .map_err(|e| StartupError::InvalidConfig(format!("bad listen address {}:{}: {e}", server.host, server.port)))
}

/// Build the application router for an already-constructed repository.
pub fn app(repo: Arc<dyn VehicleRepository>) -> Router {
    routes::build_router(AppState::new(repo), build_cors())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "cannot listen for Ctrl+C; graceful shutdown disabled");
        std::future::pending::<()>().await;
    }
    info!("shutdown signal received");
}

/// Public entry: load configuration and run the HTTP server.
pub async fn run() -> Result<(), StartupError> {
    let cfg = AppConfig::load_and_validate().map_err(|e| StartupError::InvalidConfig(e.to_string()))?;
    run_with_config(cfg).await
}

/// Connect, migrate, and serve until Ctrl+C.
pub async fn run_with_config(cfg: AppConfig) -> Result<(), StartupError> {
    let db = models::db::connect_with_config(&cfg.database)
        .await
        .map_err(|e| StartupError::Database(e.to_string()))?;

    if cfg.database.auto_migrate {
        migration::Migrator::up(&db, None)
            .await
            .map_err(|e| StartupError::Migration(e.to_string()))?;
        info!("migrations applied");
    }

    let repo: Arc<dyn VehicleRepository> = Arc::new(SeaOrmVehicleRepository::new(db));
    let app = app(repo);

    let addr = bind_addr(&cfg.server)?;
    info!(%addr, "starting vehicle registry");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!("server stopped");
    Ok(())
}
