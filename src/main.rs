use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use intake_api::auth::JwtKeys;
use intake_api::database::{DatabaseManager, PgStore};
use intake_api::{app, config, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present so cargo run picks up DATABASE_URL, JWT_SECRET, etc.
    let _ = dotenvy::dotenv();

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("intake_api=info,tower_http=info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let config = config::config();
    tracing::info!("Starting Intake API in {:?} mode", config.environment);
    config.validate()?;

    let pool = DatabaseManager::connect(&config.database)?;
    let store = PgStore::new(pool);
    let jwt = JwtKeys::from_config(&config.security)?;

    let state = AppState::new(Arc::new(store.clone()), Arc::new(jwt));
    let app = app(state, config);

    let bind_addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", bind_addr))?;

    tracing::info!("Server started on {}", bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    DatabaseManager::close(store.pool()).await;
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(error) = tokio::signal::ctrl_c().await {
            tracing::warn!(?error, "failed to listen for ctrl-c");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(error) => {
                tracing::warn!(?error, "failed to listen for SIGTERM");
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
