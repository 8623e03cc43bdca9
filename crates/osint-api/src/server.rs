//! API server runner.

use osint_core::OsintError;
use tokio::net::TcpListener;
use tracing::info;

use crate::config::ServerConfig;
use crate::routes::create_app;
use crate::state::AppState;

/// Bind the listen address and serve until Ctrl-C.
pub async fn serve(config: &ServerConfig, state: AppState) -> Result<(), OsintError> {
    let app = create_app(state, config);

    let listener = TcpListener::bind(config.listen)
        .await
        .map_err(|e| OsintError::Config(format!("failed to bind {}: {e}", config.listen)))?;

    info!(addr = %config.listen, "OSINT API listening");
    if let Some(dir) = &config.static_dir {
        info!(dir = %dir.display(), "serving frontend");
    }

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| OsintError::Internal(format!("server error: {e}")))?;

    info!("OSINT API stopped");
    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("shutdown requested");
    }
}
