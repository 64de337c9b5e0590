//! SeatSync Gateway Library
//!
//! This crate provides the HTTP REST API over the embedded account service.

pub mod config;
pub mod extractors;
pub mod handlers;
pub mod openapi;
pub mod routes;
pub mod state;

use std::net::SocketAddr;

use tracing::info;

use crate::config::GatewayConfig;
use crate::routes::create_router;
use crate::state::AppState;

/// Run the HTTP server with the given configuration.
pub async fn run_server(config: GatewayConfig) -> Result<(), Box<dyn std::error::Error>> {
    // Wire account services (connects and migrates when backed by a database)
    let accounts = account_service_lib::bootstrap(&config.accounts).await?;
    info!(storage = ?config.accounts.storage, "Account services ready");

    let state = AppState::new(accounts);
    let app = create_router(state);

    let addr: SocketAddr = config.server.addr().parse()?;
    info!("{} listening on {}", config.server.service_name, addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
