//! PostgreSQL adapters.
//!
//! - `PostgresAssessmentRepository` - assessments and the email delivery log
//! - `connect` - pool construction from `DatabaseConfig`

mod assessment_repository;

pub use assessment_repository::PostgresAssessmentRepository;

use sqlx::postgres::{PgPool, PgPoolOptions};

use crate::config::DatabaseConfig;

/// Opens a connection pool and optionally applies the bundled migrations.
pub async fn connect(url: &str, config: &DatabaseConfig) -> Result<PgPool, sqlx::Error> {
    tracing::info!(
        max_connections = config.max_connections,
        "Connecting to database"
    );

    let pool = PgPoolOptions::new()
        .min_connections(config.min_connections)
        .max_connections(config.max_connections)
        .acquire_timeout(config.acquire_timeout())
        .idle_timeout(config.idle_timeout())
        .max_lifetime(config.max_lifetime())
        .connect(url)
        .await?;

    if config.run_migrations {
        sqlx::migrate!("./migrations").run(&pool).await?;
        tracing::info!("Database migrations applied");
    }

    Ok(pool)
}
