//! Migrator registering entity-specific migrations in dependency order.
//! Indexes are applied last.
pub use sea_orm_migration::prelude::*;

mod m20250101_000001_create_user;
mod m20250101_000002_create_category;
mod m20250101_000003_create_exercise_plan;
mod m20250101_000004_create_exercise_plan_item;
mod m20250101_000005_create_meal_plan;
mod m20250101_000006_create_meal_plan_item;
mod m20250101_000007_create_subscription;
mod m20250101_000008_create_user_subscription;
mod m20250101_000009_create_user_plan;
mod m20250101_000010_create_review;
mod m20250101_000011_add_indexes;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250101_000001_create_user::Migration),
            Box::new(m20250101_000002_create_category::Migration),
            Box::new(m20250101_000003_create_exercise_plan::Migration),
            Box::new(m20250101_000004_create_exercise_plan_item::Migration),
            Box::new(m20250101_000005_create_meal_plan::Migration),
            Box::new(m20250101_000006_create_meal_plan_item::Migration),
            Box::new(m20250101_000007_create_subscription::Migration),
            Box::new(m20250101_000008_create_user_subscription::Migration),
            Box::new(m20250101_000009_create_user_plan::Migration),
            Box::new(m20250101_000010_create_review::Migration),
            // Indexes should always be applied last
            Box::new(m20250101_000011_add_indexes::Migration),
        ]
    }
}
