//! notepad-api - HTTP server for notepad

use tracing::{info, warn};

use notepad_api::logging::{init_tracing, LogSettings};
use notepad_api::services::accounts;
use notepad_api::{router, AppConfig, AppState};
use notepad_core::SessionRepository;
use notepad_crypto::PasswordParams;
use notepad_db::{log_pool_metrics, Database, PoolConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let _log_guard = init_tracing(&LogSettings::from_env())?;

    let config = AppConfig::from_env();
    let addr = config.bind_addr()?;

    // Connect to database
    info!("Connecting to database...");
    let db = Database::connect_with_config(
        &config.database_url,
        PoolConfig::new().max_connections(config.db_max_connections),
    )
    .await?;
    info!("Database connected");

    info!("Running database migrations...");
    db.migrate().await?;
    info!("Database migrations complete");

    let purged = db.sessions.purge_expired(chrono::Utc::now()).await?;
    if purged > 0 {
        info!(result_count = purged, "Purged expired sessions");
    }
    log_pool_metrics(db.pool());

    let seed_user = config.seed_user.clone();
    let state = AppState::new(db, config, &PasswordParams::default())?;

    if let Some(seed) = seed_user {
        match accounts::ensure_seed_user(&state, &seed).await {
            Ok(true) => info!(email = %seed.email, "Seed user created"),
            Ok(false) => info!(email = %seed.email, "Seed user already exists"),
            Err(e) => warn!(error = %e, "Seed user not created"),
        }
    }

    let app = router(state);

    // Start server
    info!("Starting server on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
