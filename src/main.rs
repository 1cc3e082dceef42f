//! SciQuest registration backend
//!
//! Main application entry point

use tokio::net::TcpListener;
use tokio::signal;
use tracing::info;

use sciquest::config::Settings;
use sciquest::handlers::build_router;
use sciquest::state::AppState;
use sciquest::utils::logging;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    // Load configuration
    let settings = Settings::new()?;
    settings.validate()?;

    // Initialize logging; the guard keeps the file writer alive.
    let _guard = logging::init_logging(&settings.logging)?;

    info!("Starting SciQuest registration backend...");

    // Storage backend and services
    let state = AppState::new(settings.clone()).await?;

    // Seed the configured admin account
    state.services.auth_service.ensure_admin_user().await?;

    let app = build_router(state);

    let address = format!("{}:{}", settings.server.host, settings.server.port);
    let listener = TcpListener::bind(&address).await?;
    info!("Server listening on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("SciQuest backend has been shut down.");

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c().await.expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received");
}
