//! Create `subscription` table: purchasable, time-limited access to a category.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Subscription::Table)
                    .if_not_exists()
                    .col(pk_auto(Subscription::Id))
                    .col(string_len(Subscription::Name, 128).not_null())
                    .col(text(Subscription::Description).not_null())
                    .col(big_integer(Subscription::Price).not_null())
                    .col(integer(Subscription::DurationDays).not_null())
                    .col(integer(Subscription::CategoryId).not_null())
                    .col(timestamp_with_time_zone(Subscription::CreatedAt).not_null())
                    .col(timestamp_with_time_zone(Subscription::UpdatedAt).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_subscription_category")
                            .from(Subscription::Table, Subscription::CategoryId)
                            .to(Category::Table, Category::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Subscription::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Subscription { Table, Id, Name, Description, Price, DurationDays, CategoryId, CreatedAt, UpdatedAt }

#[derive(DeriveIden)]
enum Category { Table, Id }
