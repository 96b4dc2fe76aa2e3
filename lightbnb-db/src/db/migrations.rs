//! Embedded schema migrations

use sqlx::migrate::Migrator;
use sqlx::PgPool;

use crate::error::Result;

/// Migrations under `lightbnb-db/migrations`, compiled into the binary
pub static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Create or upgrade the users/properties/reservations/reviews schema.
pub async fn run(pool: &PgPool) -> Result<()> {
    tracing::info!("Running LightBnB migrations...");
    MIGRATOR.run(pool).await?;
    tracing::info!("Migrations complete");
    Ok(())
}
