/**
 * Server Initialization
 *
 * # Initialization Process
 *
 * 1. Open the document store (`config::load_database`)
 * 2. Build `AppState` around it
 * 3. Assemble the router
 *
 * `serve` then runs the router until Ctrl-C or SIGTERM and closes the
 * database pool once in-flight requests have drained.
 */

use axum::Router;
use sqlx::PgPool;
use tokio::net::TcpListener;

use crate::backend::routes::router::create_router;
use crate::backend::server::config::load_database;
use crate::backend::server::state::AppState;
use crate::backend::store::StoreError;
use crate::shared::config::AppConfig;

/// Router plus the pool it depends on
pub struct App {
    pub router: Router<()>,
    pub pool: Option<PgPool>,
}

/// Create and configure the Axum application
pub async fn create_app(config: &AppConfig) -> Result<App, StoreError> {
    tracing::info!("Initializing MetaBlog backend server");

    let database = load_database(config).await?;
    let app_state = AppState::new(config, database.store);
    let router = create_router(app_state, config);

    tracing::info!("Router configured");

    Ok(App {
        router,
        pool: database.pool,
    })
}

/// Serve the application until a shutdown signal arrives
pub async fn serve(listener: TcpListener, app: App) -> std::io::Result<()> {
    axum::serve(listener, app.router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    if let Some(pool) = app.pool {
        tracing::info!("Closing database pool");
        pool.close().await;
    }

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
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

    tracing::info!("Shutdown signal received");
}
