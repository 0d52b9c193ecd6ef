//! Create `user_plan` table: category access granted by a payment.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(UserPlan::Table)
                    .if_not_exists()
                    .col(pk_auto(UserPlan::Id))
                    .col(integer(UserPlan::UserId).not_null())
                    .col(integer(UserPlan::CategoryId).not_null())
                    .col(timestamp_with_time_zone(UserPlan::CreatedAt).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_user_plan_user")
                            .from(UserPlan::Table, UserPlan::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_user_plan_category")
                            .from(UserPlan::Table, UserPlan::CategoryId)
                            .to(Category::Table, Category::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(UserPlan::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum UserPlan { Table, Id, UserId, CategoryId, CreatedAt }

#[derive(DeriveIden)]
enum User { Table, Id }

#[derive(DeriveIden)]
enum Category { Table, Id }
