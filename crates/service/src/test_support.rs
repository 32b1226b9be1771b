#![cfg(test)]
use sea_orm::DatabaseConnection;
use migration::MigratorTrait;
use models::db::{connect_with_config, DatabaseConfig};

/// A private, migrated in-memory database. One pooled connection, because
/// each `sqlite::memory:` connection opens a separate database.
pub async fn get_db() -> Result<DatabaseConnection, anyhow::Error> {
    let cfg = DatabaseConfig {
        url: "sqlite::memory:".into(),
        max_connections: 1,
        min_connections: 1,
        ..Default::default()
    };
    let db = connect_with_config(&cfg).await?;
    migration::Migrator::up(&db, None).await?;
    Ok(db)
}

/// [`get_db`] loaded with the demo data set.
pub async fn seeded_db() -> Result<DatabaseConnection, anyhow::Error> {
    let db = get_db().await?;
    crate::seed::seed(&db).await?;
    Ok(db)
}
