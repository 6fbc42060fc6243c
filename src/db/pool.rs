use sqlx::{postgres::PgPoolOptions, PgPool};
use std::time::Duration;

/// Create a connection pool to the hosted Postgres database.
///
/// Hosted projects cap connections per role, so the pool stays small and
/// does not hold idle connections open.
pub async fn create_pool(database_url: &str) -> Result<PgPool, sqlx::Error> {
    tracing::info!("Creating database connection pool...");

    let pool = PgPoolOptions::new()
        .max_connections(5)
        .min_connections(0)
        .acquire_timeout(Duration::from_secs(10))
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .connect(database_url)
        .await?;

    tracing::info!("Database connection pool created successfully");

    Ok(pool)
}
