use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

/// (index name, table, column) for every plain foreign-key index.
fn fk_indexes() -> Vec<(&'static str, Alias, Alias)> {
    [
        ("idx_exercise_plan_category", "exercise_plan", "category_id"),
        ("idx_exercise_plan_item_plan", "exercise_plan_item", "exercise_plan_id"),
        ("idx_meal_plan_category", "meal_plan", "category_id"),
        ("idx_meal_plan_item_plan", "meal_plan_item", "meal_plan_id"),
        ("idx_subscription_category", "subscription", "category_id"),
        ("idx_user_subscription_user", "user_subscription", "user_id"),
        ("idx_review_user", "review", "user_id"),
        ("idx_review_category", "review", "category_id"),
    ]
    .into_iter()
    .map(|(name, table, col)| (name, Alias::new(table), Alias::new(col)))
    .collect()
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for (name, table, col) in fk_indexes() {
            manager
                .create_index(Index::create().name(name).table(table).col(col).to_owned())
                .await?;
        }

        // UserPlan: one access row per (user, category)
        manager
            .create_index(
                Index::create()
                    .name("uniq_user_plan_user_category")
                    .table(UserPlan::Table)
                    .col(UserPlan::UserId)
                    .col(UserPlan::CategoryId)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("uniq_user_plan_user_category").table(UserPlan::Table).to_owned())
            .await?;
        for (name, table, _) in fk_indexes() {
            manager
                .drop_index(Index::drop().name(name).table(table).to_owned())
                .await?;
        }
        Ok(())
    }
}

#[derive(DeriveIden)]
enum UserPlan { Table, UserId, CategoryId }
