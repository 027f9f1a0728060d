//! Ticket Import Server - Main Entry Point

use anyhow::Result;
use std::sync::Arc;
use tracing::{info, warn};

use import_server::premium::{
    HttpPremiumClient, PremiumLookup, PremiumTier, StaticPremiumClient, TimeoutLookup,
};
use import_server::{api, config};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "import_server=debug,tower_http=debug".into()),
        )
        .json()
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = config::Config::from_env()?;

    info!(
        version = env!("CARGO_PKG_VERSION"),
        admins = config.admins.len(),
        forced_whitelabel = config.force_whitelabel.len(),
        "Starting Ticket Import Server"
    );

    let premium: Arc<dyn PremiumLookup> = match (&config.premium_service_url, config.debug) {
        (Some(url), false) => {
            info!(url = %url, "Using premium lookup service");
            Arc::new(TimeoutLookup::new(
                HttpPremiumClient::new(url.as_str())?,
                config.premium_lookup_timeout(),
            ))
        }
        _ => {
            warn!("Debug mode: every user is treated as whitelabel");
            Arc::new(StaticPremiumClient::new(PremiumTier::Whitelabel))
        }
    };

    let bind_address = config.bind_address.clone();
    let state = api::AppState::new(config, premium);
    let app = api::create_router(state);

    let listener = tokio::net::TcpListener::bind(&bind_address).await?;
    info!(address = %bind_address, "Server listening");

    // Graceful shutdown handler
    let shutdown_signal = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!(error = %e, "Failed to listen for shutdown signal");
            std::future::pending::<()>().await;
        }
        info!("Received shutdown signal, cleaning up...");
    };

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal)
        .await?;

    info!("Server shutdown complete");

    Ok(())
}
