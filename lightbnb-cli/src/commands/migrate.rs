//! Migrate command - create or upgrade the schema

use anyhow::{Context, Result};
use lightbnb_db::db::migrations;

use super::ConnectOptions;

pub async fn run_migrate(connect: &ConnectOptions) -> Result<()> {
    let pool = connect.open_pool().await?;
    migrations::run(&pool)
        .await
        .context("Failed to run migrations")?;
    eprintln!("✅ Schema up to date");
    Ok(())
}
