use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(UserSubscription::Table)
                    .if_not_exists()
                    .col(pk_auto(UserSubscription::Id))
                    .col(integer(UserSubscription::UserId).not_null())
                    .col(integer(UserSubscription::SubscriptionId).not_null())
                    .col(timestamp_with_time_zone(UserSubscription::StartedAt).not_null())
                    .col(timestamp_with_time_zone(UserSubscription::ExpiresAt).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_user_subscription_user")
                            .from(UserSubscription::Table, UserSubscription::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_user_subscription_subscription")
                            .from(UserSubscription::Table, UserSubscription::SubscriptionId)
                            .to(Subscription::Table, Subscription::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(UserSubscription::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum UserSubscription { Table, Id, UserId, SubscriptionId, StartedAt, ExpiresAt }

#[derive(DeriveIden)]
enum User { Table, Id }

#[derive(DeriveIden)]
enum Subscription { Table, Id }
