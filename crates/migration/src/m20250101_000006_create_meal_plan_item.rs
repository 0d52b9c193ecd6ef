use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(MealPlanItem::Table)
                    .if_not_exists()
                    .col(pk_auto(MealPlanItem::Id))
                    .col(string_len(MealPlanItem::Name, 128).not_null())
                    .col(text(MealPlanItem::Description).not_null())
                    .col(double(MealPlanItem::Calories).not_null())
                    .col(double(MealPlanItem::Protein).not_null())
                    .col(double(MealPlanItem::Carbs).not_null())
                    .col(integer(MealPlanItem::MealPlanId).not_null())
                    .col(timestamp_with_time_zone(MealPlanItem::CreatedAt).not_null())
                    .col(timestamp_with_time_zone(MealPlanItem::UpdatedAt).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_meal_plan_item_plan")
                            .from(MealPlanItem::Table, MealPlanItem::MealPlanId)
                            .to(MealPlan::Table, MealPlan::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(MealPlanItem::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum MealPlanItem { Table, Id, Name, Description, Calories, Protein, Carbs, MealPlanId, CreatedAt, UpdatedAt }

#[derive(DeriveIden)]
enum MealPlan { Table, Id }
