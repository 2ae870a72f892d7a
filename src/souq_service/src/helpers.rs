use secrecy::ExposeSecret;
use souq_adapters::config::PostgresSettings;
use sqlx::{PgPool, postgres::PgPoolOptions};

/// Create a connection pool from the given settings and run all pending
/// migrations. The caller decides whether a failure here is fatal.
pub async fn configure_postgresql(settings: &PostgresSettings) -> Result<PgPool, sqlx::Error> {
    let pg_pool = get_postgres_pool(settings).await?;

    sqlx::migrate!("../../souq-server/migrations")
        .run(&pg_pool)
        .await?;

    Ok(pg_pool)
}

/// Create a PostgreSQL connection pool
///
/// # Arguments
/// * `settings` - Database url and pool sizing
///
/// # Returns
/// Result containing the PgPool or an error
pub async fn get_postgres_pool(settings: &PostgresSettings) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(settings.max_connections)
        .connect(settings.url.expose_secret())
        .await
}
