pub mod categories;
pub mod pool;
pub mod questions;

use sqlx::migrate::Migrator;

pub use pool::create_pool;

/// Schema and seed migrations embedded from `./migrations`
pub static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Apply any pending migrations
pub async fn run_migrations(pool: &sqlx::SqlitePool) -> Result<(), sqlx::migrate::MigrateError> {
    tracing::info!("Running database migrations...");
    MIGRATOR.run(pool).await?;
    tracing::info!("Migrations complete");
    Ok(())
}
