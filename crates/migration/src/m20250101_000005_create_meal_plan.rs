//! Create `meal_plan` table with FK to `category`.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(MealPlan::Table)
                    .if_not_exists()
                    .col(pk_auto(MealPlan::Id))
                    .col(string_len(MealPlan::Name, 128).not_null())
                    .col(text(MealPlan::Description).not_null())
                    .col(integer(MealPlan::DailyCalories).not_null().default(0))
                    .col(integer(MealPlan::CategoryId).not_null())
                    .col(timestamp_with_time_zone(MealPlan::CreatedAt).not_null())
                    .col(timestamp_with_time_zone(MealPlan::UpdatedAt).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_meal_plan_category")
                            .from(MealPlan::Table, MealPlan::CategoryId)
                            .to(Category::Table, Category::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(MealPlan::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum MealPlan { Table, Id, Name, Description, DailyCalories, CategoryId, CreatedAt, UpdatedAt }

#[derive(DeriveIden)]
enum Category { Table, Id }
