#![cfg(test)]
use migration::MigratorTrait;
use models::db::{connect_with_config, in_memory_config};
use sea_orm::DatabaseConnection;

/// A fresh in-memory database with every migration applied.
pub async fn get_db() -> Result<DatabaseConnection, anyhow::Error> {
    let db = connect_with_config(&in_memory_config()).await?;
    migration::Migrator::up(&db, None).await?;
    Ok(db)
}

pub async fn seed_category(db: &DatabaseConnection, name: &str, price: i64) -> Result<models::category::Model, anyhow::Error> {
    let input = models::category::CreateCategoryRequest { name: name.into(), description: String::new(), price };
    Ok(models::category::create(db, &input).await?)
}

pub async fn seed_user(db: &DatabaseConnection, email: &str, balance: i64) -> Result<models::user::Model, anyhow::Error> {
    let input = models::user::CreateUserRequest { name: "Test User".into(), email: email.into(), balance };
    Ok(models::user::create(db, &input).await?)
}
