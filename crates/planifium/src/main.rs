//! A course-set and schedule-conflict API over the Planifium course catalog.
//!
//! Lets a student assemble a bounded set of course offerings for a term and
//! query whether any two scheduled activities in that set collide in time.

mod catalog;
mod config;
mod schedule;
mod server;
mod sets;
mod types;

use std::sync::Arc;

use anyhow::Result;
use tracing::info;

use crate::catalog::CatalogClient;
use crate::config::AppConfig;
use crate::schedule::ScheduleAssembler;
use crate::sets::CourseSetStore;
use crate::types::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let config = AppConfig::from_env();
    info!(
        catalog_base_url = %config.catalog.base_url,
        "Starting planifium API server"
    );

    let catalog = CatalogClient::with_config(config.catalog.clone())?;
    let state = Arc::new(AppState {
        sets: CourseSetStore::new(),
        assembler: ScheduleAssembler::new(catalog),
    });

    let router = server::create_router(state);
    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    info!("Listening on {}", config.bind_addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("Shutdown signal received");
    }
}
