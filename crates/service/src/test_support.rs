#![cfg(test)]
use migration::MigratorTrait;
use models::db::{connect_with_config, sqlite_memory_config};
use sea_orm::DatabaseConnection;

use models::Vehicle;

/// Fresh in-memory SQLite with migrations applied; one per test.
pub async fn get_db() -> Result<DatabaseConnection, anyhow::Error> {
    let db = connect_with_config(&sqlite_memory_config()).await?;
    migration::Migrator::up(&db, None).await?;
    Ok(db)
}

/// The four vehicles used across service tests, ids 1..=4.
pub fn seed_vehicles() -> Vec<Vehicle> {
    vec![
        Vehicle { id: 1, year: 2000, make: "honda".into(), model: "civic".into() },
        Vehicle { id: 2, year: 2001, make: "honda".into(), model: "accord".into() },
        Vehicle { id: 3, year: 2002, make: "BMW".into(), model: "i8".into() },
        Vehicle { id: 4, year: 2003, make: "Tesla".into(), model: "model X".into() },
    ]
}
