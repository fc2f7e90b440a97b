//! mm2q web front end.
//!
//! - `GET /` form, `POST /` result or re-rendered form with a message
//! - `POST /v1/compute` JSON API
//! - Config from `MM2Q_CONFIG` or `mm2q.yaml`, defaults when neither exists
//! - Graceful shutdown on Ctrl-C / SIGTERM

use tracing_subscriber::{fmt, EnvFilter};

use mm2q_core::error::{Mm2Error, Result};
use mm2q_web::{app_state, config, router};

#[tokio::main]
async fn main() -> Result<()> {
    fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let env_path = std::env::var("MM2Q_CONFIG").ok();
    let cfg = config::load(env_path.as_deref())?;
    let listen = cfg.server.listen_addr()?;

    let state = app_state::AppState::new(cfg);
    let app = router::build_router(state);

    tracing::info!(%listen, "mm2q-web starting");
    let listener = tokio::net::TcpListener::bind(listen)
        .await
        .map_err(|e| Mm2Error::Internal(format!("bind {listen} failed: {e}")))?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| Mm2Error::Internal(format!("server failed: {e}")))?;

    tracing::info!("mm2q-web stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!(error = %e, "failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    tracing::info!("signal received, starting graceful shutdown");
}
