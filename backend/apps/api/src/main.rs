//! API Server Entry Point
//!
//! Application entry point and server initialization.
//! Uses `anyhow` for startup errors, but application-level
//! errors should use `kernel::error::AppError`.

mod app;
mod config;

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use admin::ProvisionAccountsUseCase;
use anyhow::Context;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::app::{Stores, build_router};
use crate::config::AppConfig;

const RATE_LIMIT_PURGE_INTERVAL: Duration = Duration::from_secs(10 * 60);

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "api=info,admin=info,contact=info,backoffice=info,tower_http=info".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let mut config = AppConfig::from_env().context("Invalid configuration")?;

    kernel::error::support::set_support_contact(config.site.support_email.clone());

    let stores = Stores::with_mock_data();

    // Admin accounts live in memory; provision them on every start
    let provisioned = ProvisionAccountsUseCase::new(
        Arc::new(stores.admins.clone()),
        Arc::new(config.admin.clone()),
    )
    .execute(config.bootstrap_admin.take())
    .await
    .context("Failed to provision admin accounts")?;

    if provisioned == 0 {
        tracing::warn!("No admin account configured; set ADMIN_USERNAME and ADMIN_PASSWORD");
    }

    tracing::info!(
        site = %config.site.site_name,
        bookings = config.site.features.bookings_enabled,
        careers = config.site.features.careers_enabled,
        "Site features"
    );

    let app = build_router(&config, &stores);

    // Periodic cleanup: forget idle rate-limit clients
    let config = Arc::new(config);
    {
        let stores = stores.clone();
        let config = config.clone();
        tokio::spawn(async move {
            let mut interval = tokio::time::interval(RATE_LIMIT_PURGE_INTERVAL);
            loop {
                interval.tick().await;
                stores.purge_rate_limits(&config);
            }
        });
    }

    // Start server
    let addr = config.bind_addr;
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}
