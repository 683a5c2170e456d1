//! Worldbook host: load config, select and open storage, ensure tables, serve HTTP.
//!
//! Configuration comes from `config/app.json` (or `WORLDBOOK_CONFIG`) with environment
//! overrides; see the `worldbook::config` module for the variable names.

use tokio::net::TcpListener;
use worldbook::{app_router, load_from_env, validate, AppState, Storage, ALL_DEFS};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("worldbook=info,worldbook_host=info")),
        )
        .init();

    let config = load_from_env()?;
    let target = validate(&config)?;
    let storage = match Storage::connect(&target).await {
        Ok(s) => s,
        Err(e) => {
            tracing::error!(error = %e, "storage selection failed");
            return Err(e.into());
        }
    };
    storage.ensure_tables(ALL_DEFS).await?;

    let addr = format!("{}:{}", config.server.hostname, config.server.port);
    let state = AppState::new(storage.clone(), config);
    let app = app_router(state);

    let listener = TcpListener::bind(&addr).await?;
    tracing::info!(
        mode = %storage.mode(),
        "worldbook listening on http://{}",
        listener.local_addr()?
    );
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    storage.close().await;
    tracing::info!("shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!(error = %e, "ctrl-c handler unavailable");
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
                tracing::warn!(error = %e, "SIGTERM handler unavailable");
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
    tracing::info!("shutdown signal received");
}
