pub mod alerting; // Alert emission + policy
pub mod api; // HTTP surface for the dashboard
pub mod care; // Health record intake
pub mod config;
pub mod db;
pub mod import; // Bulk CSV health record import
pub mod models;
pub mod staffing; // Staff credential issuing
pub mod vitals; // Normalizer, risk scorer, status classifier

use std::sync::Arc;

use thiserror::Error;
use tracing_subscriber::EnvFilter;

use crate::api::{ApiContext, ServerError};
use crate::config::{ConfigError, ServiceConfig};
use crate::db::{DatabaseError, SqliteStore};

#[derive(Error, Debug)]
pub enum StartupError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Database(#[from] DatabaseError),
    #[error(transparent)]
    Server(#[from] ServerError),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Run the service until Ctrl-C.
pub async fn run() -> Result<(), StartupError> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .init();

    tracing::info!("{} starting v{}", config::APP_NAME, config::APP_VERSION);

    let config = ServiceConfig::from_env()?;
    if let Some(parent) = config.database_path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let store = SqliteStore::open(&config.database_path)?;
    tracing::info!(
        path = %config.database_path.display(),
        alert_policy = config.alert_policy.as_str(),
        "Record store ready"
    );

    let ctx = ApiContext::new(Arc::new(store), config.alert_policy);
    let mut server = api::start_server(ctx, config.socket_addr()).await?;

    tokio::signal::ctrl_c().await?;
    tracing::info!("Interrupt received, shutting down");
    server.shutdown();
    server.wait().await;

    Ok(())
}
