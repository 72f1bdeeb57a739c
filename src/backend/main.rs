/**
 * MetaBlog Server Entry Point
 */

use metablog::backend::server::{create_app, serve};
use metablog::shared::AppConfig;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env file if present
    dotenv::dotenv().ok();

    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(&env_filter))
        .init();

    let config = AppConfig::from_env()?;
    tracing::info!(
        "Starting with environment {:?}, token validity {} days",
        config.environment,
        config.token_ttl_days
    );

    let app = create_app(&config).await?;

    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Server listening at PORT:---> {}", config.port);

    serve(listener, app).await?;

    Ok(())
}
