//! RealPro — application entry point.

use realpro_app::{App, AppConfig};
use realpro_store::JsonFileStore;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("realpro=info".parse().unwrap()),
        )
        .json()
        .init();

    let path = std::env::var("REALPRO_STORE").unwrap_or_else(|_| "realpro.json".into());
    tracing::info!(%path, "Opening RealPro store");

    let store = match JsonFileStore::open(&path).await {
        Ok(store) => store,
        Err(error) => {
            tracing::error!(%error, "Failed to open store");
            std::process::exit(1);
        }
    };

    let app = App::new(store, AppConfig::default());

    match app.is_authenticated().await {
        Ok(true) => tracing::info!("Active session found"),
        Ok(false) => tracing::info!("No active session"),
        Err(error) => tracing::warn!(%error, "Session check failed"),
    }

    match app.dashboard().await {
        Ok(dashboard) => tracing::info!(
            total = dashboard.stats.total,
            open = dashboard.stats.open,
            in_progress = dashboard.stats.in_progress,
            closed = dashboard.stats.closed,
            high_priority = dashboard.stats.high_priority,
            "Ticket summary"
        ),
        Err(error) => tracing::warn!(%error, "Dashboard load failed"),
    }
}
