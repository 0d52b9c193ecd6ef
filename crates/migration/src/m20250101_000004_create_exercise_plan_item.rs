use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ExercisePlanItem::Table)
                    .if_not_exists()
                    .col(pk_auto(ExercisePlanItem::Id))
                    .col(string_len(ExercisePlanItem::Name, 128).not_null())
                    .col(integer(ExercisePlanItem::Sets).not_null())
                    .col(integer(ExercisePlanItem::Reps).not_null())
                    .col(string_len(ExercisePlanItem::DurationMinutes, 32).not_null())
                    .col(string_len(ExercisePlanItem::EquipmentNeeded, 255).not_null())
                    .col(string_len(ExercisePlanItem::DayOfWeek, 16).not_null())
                    .col(integer(ExercisePlanItem::ExercisePlanId).not_null())
                    .col(timestamp_with_time_zone(ExercisePlanItem::CreatedAt).not_null())
                    .col(timestamp_with_time_zone(ExercisePlanItem::UpdatedAt).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_exercise_plan_item_plan")
                            .from(ExercisePlanItem::Table, ExercisePlanItem::ExercisePlanId)
                            .to(ExercisePlan::Table, ExercisePlan::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(ExercisePlanItem::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum ExercisePlanItem {
    Table,
    Id,
    Name,
    Sets,
    Reps,
    DurationMinutes,
    EquipmentNeeded,
    DayOfWeek,
    ExercisePlanId,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum ExercisePlan { Table, Id }
