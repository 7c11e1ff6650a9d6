pub mod models;

use sqlx::{postgres::PgPoolOptions, PgPool};

use crate::config;

/// Open the shared connection pool. Called once at startup; repositories
/// receive clones and never manage the pool lifecycle themselves.
pub async fn connect_pool() -> anyhow::Result<PgPool> {
    let db = &config::config().database;
    if db.url.is_empty() {
        anyhow::bail!("DATABASE_URL is not set");
    }

    let pool = PgPoolOptions::new()
        .max_connections(db.max_connections)
        .connect(&db.url)
        .await?;

    tracing::info!("connected to database");
    Ok(pool)
}

/// Pings the pool to ensure connectivity.
pub async fn health_check(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}
