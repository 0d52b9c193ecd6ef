//! Create `exercise_plan` table with FK to `category`.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ExercisePlan::Table)
                    .if_not_exists()
                    .col(pk_auto(ExercisePlan::Id))
                    .col(string_len(ExercisePlan::Name, 128).not_null())
                    .col(text(ExercisePlan::Description).not_null())
                    .col(integer(ExercisePlan::DurationWeeks).not_null())
                    .col(integer(ExercisePlan::CategoryId).not_null())
                    .col(timestamp_with_time_zone(ExercisePlan::CreatedAt).not_null())
                    .col(timestamp_with_time_zone(ExercisePlan::UpdatedAt).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_exercise_plan_category")
                            .from(ExercisePlan::Table, ExercisePlan::CategoryId)
                            .to(Category::Table, Category::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(ExercisePlan::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum ExercisePlan { Table, Id, Name, Description, DurationWeeks, CategoryId, CreatedAt, UpdatedAt }

#[derive(DeriveIden)]
enum Category { Table, Id }
