/**
 * Server Configuration
 *
 * Opens the document store selected by the configuration:
 * - `DATABASE_URL` set: a PostgreSQL pool, migrated and pinged
 * - `DATABASE_URL` unset: the in-memory store, with a warning
 *
 * # Error Handling
 *
 * Connection and ping failures abort startup. Migration failures are
 * logged and startup continues, since the schema may already be in place.
 */

use std::sync::Arc;

use sqlx::PgPool;

use crate::backend::store::{DocumentStore, MemoryStore, PgStore, StoreError};
use crate::shared::config::AppConfig;

/// The opened store plus the pool to close on shutdown, if any
pub struct DatabaseConfig {
    pub store: Arc<dyn DocumentStore>,
    pub pool: Option<PgPool>,
}

/// Open and verify the configured document store
pub async fn load_database(config: &AppConfig) -> Result<DatabaseConfig, StoreError> {
    let Some(database_url) = config.database_url.as_deref() else {
        tracing::warn!("DATABASE_URL not set. Records will be kept in memory only.");
        return Ok(DatabaseConfig {
            store: Arc::new(MemoryStore::new()),
            pool: None,
        });
    };

    tracing::info!("Connecting to database...");
    let pool = PgPool::connect(database_url).await.map_err(|e| {
        tracing::error!("Failed to create database connection pool: {:?}", e);
        StoreError::Database(e)
    })?;
    tracing::info!("Database connection pool created successfully");

    let store = PgStore::new(pool.clone());

    tracing::info!("Running database migrations...");
    match store.migrate().await {
        Ok(()) => tracing::info!("Database migrations completed successfully"),
        Err(e) => {
            tracing::error!("Failed to run database migrations: {}", e);
            tracing::warn!("Continuing without migrations - database might not be up to date");
        }
    }

    store.ping().await?;
    tracing::info!("Pinged the database. Connection is healthy.");

    Ok(DatabaseConfig {
        store: Arc::new(store),
        pool: Some(pool),
    })
}
