use persistence::db::{DatabaseConfig, create_postgres_pool, run_migrations};
use sqlx::PgPool;
use std::{env, path::Path};

/// Initialize database connection pool from environment variables
///
/// Environment variables:
/// - DATABASE_URL: PostgreSQL connection string (required)
/// - DATABASE_MAX_CONNECTIONS: Pool size (default: 5)
/// - DATABASE_MIGRATIONS_PATH: SQL migrations directory, applied at startup
///   when present (default: "./migrations")
///
/// # Errors
/// Returns error if the connection or a migration fails
pub async fn init_database() -> anyhow::Result<PgPool> {
    let db_url = env::var("DATABASE_URL").expect("DATABASE_URL must be set");
    let max_connections = parse_max_connections(env::var("DATABASE_MAX_CONNECTIONS").ok());

    let config = DatabaseConfig::new(db_url).with_max_connections(max_connections);
    let pool = create_postgres_pool(&config).await?;

    let migrations_path =
        env::var("DATABASE_MIGRATIONS_PATH").unwrap_or_else(|_| "./migrations".to_string());
    if Path::new(&migrations_path).is_dir() {
        run_migrations(&pool, &migrations_path).await?;
        tracing::info!("Applied migrations from {migrations_path}");
    } else {
        tracing::info!("No migrations directory at {migrations_path}, skipping");
    }

    Ok(pool)
}

fn parse_max_connections(raw: Option<String>) -> u32 {
    raw.and_then(|v| v.trim().parse::<u32>().ok())
        .filter(|n| *n > 0)
        .unwrap_or(5)
}
