//! Wallet payments granting category access.
//!
//! Each payment runs in a single transaction: existence checks, the
//! conditional debit and the access grant either all commit or all roll
//! back. Inside the transaction only `txn` is used for queries.

use sea_orm::{ConnectionTrait, DatabaseConnection, TransactionTrait};
use tracing::{info, instrument};

use models::{category, subscription, user, user_plan, user_subscription};
use crate::{errors::ServiceError, lookup};

/// The user buys permanent access to a category for themselves.
#[instrument(skip(db))]
pub async fn pay_category(db: &DatabaseConnection, user_id: i32, category_id: i32) -> Result<user_plan::Model, ServiceError> {
    buy_access(db, user_id, user_id, category_id).await
}

/// `payer_id` buys category access as a present for `recipient_id`.
#[instrument(skip(db))]
pub async fn present_category(
    db: &DatabaseConnection,
    payer_id: i32,
    category_id: i32,
    recipient_id: i32,
) -> Result<user_plan::Model, ServiceError> {
    buy_access(db, payer_id, recipient_id, category_id).await
}

async fn buy_access(db: &DatabaseConnection, payer_id: i32, recipient_id: i32, category_id: i32) -> Result<user_plan::Model, ServiceError> {
    let txn = db.begin().await?;

    lookup::by_id::<user::Entity, _>(&txn, payer_id, "user").await?;
    if recipient_id != payer_id {
        lookup::by_id::<user::Entity, _>(&txn, recipient_id, "recipient").await?;
    }
    let category = lookup::by_id::<category::Entity, _>(&txn, category_id, "category").await?;

    if user_plan::has_access(&txn, recipient_id, category_id).await? {
        return Err(ServiceError::Conflict("category already purchased".into()));
    }
    let access = charge_and_grant(&txn, payer_id, recipient_id, &category).await?;

    txn.commit().await?;
    info!(payer_id, recipient_id, category_id, price = category.price, "category access purchased");
    Ok(access)
}

/// Debit the payer and grant the recipient. A concurrent purchase that
/// committed first trips the `(user_id, category_id)` unique index, which
/// surfaces as `Conflict`.
async fn charge_and_grant<C: ConnectionTrait>(txn: &C, payer_id: i32, recipient_id: i32, category: &category::Model) -> Result<user_plan::Model, ServiceError> {
    if !user::debit(txn, payer_id, category.price).await? {
        return Err(ServiceError::InsufficientFunds(format!("balance does not cover price {}", category.price)));
    }
    Ok(user_plan::grant(txn, recipient_id, category.id).await?)
}

/// The user buys a time-limited subscription; the subscription's category
/// is granted as well unless already held.
#[instrument(skip(db))]
pub async fn pay_subscription(db: &DatabaseConnection, user_id: i32, subscription_id: i32) -> Result<user_subscription::Model, ServiceError> {
    let txn = db.begin().await?;

    lookup::by_id::<user::Entity, _>(&txn, user_id, "user").await?;
    let sub = lookup::by_id::<subscription::Entity, _>(&txn, subscription_id, "subscription").await?;

    if user_subscription::find_active(&txn, user_id, subscription_id).await?.is_some() {
        return Err(ServiceError::Conflict("subscription already active".into()));
    }
    if !user::debit(&txn, user_id, sub.price).await? {
        return Err(ServiceError::InsufficientFunds(format!("balance does not cover price {}", sub.price)));
    }
    let bought = user_subscription::create(&txn, user_id, &sub).await?;
    if !user_plan::has_access(&txn, user_id, sub.category_id).await? {
        user_plan::grant(&txn, user_id, sub.category_id).await?;
    }

    txn.commit().await?;
    info!(user_id, subscription_id, price = sub.price, expires_at = %bought.expires_at, "subscription purchased");
    Ok(bought)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{get_db, seed_category, seed_user};
    use sea_orm::EntityTrait;

    async fn balance(db: &DatabaseConnection, id: i32) -> i64 {
        user::Entity::find_by_id(id).one(db).await.unwrap().unwrap().balance
    }

    #[tokio::test]
    async fn payment_debits_price_and_grants_once() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let u = seed_user(&db, "payer@example.com", 1000).await?;
        let cat = seed_category(&db, "Yoga", 400).await?;

        pay_category(&db, u.id, cat.id).await?;
        assert_eq!(balance(&db, u.id).await, 600);
        assert!(user_plan::has_access(&db, u.id, cat.id).await?);

        let again = pay_category(&db, u.id, cat.id).await.unwrap_err();
        assert!(matches!(again, ServiceError::Conflict(_)));
        assert_eq!(balance(&db, u.id).await, 600);
        Ok(())
    }

    #[tokio::test]
    async fn insufficient_balance_changes_nothing() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let u = seed_user(&db, "poor@example.com", 100).await?;
        let cat = seed_category(&db, "Boxing", 400).await?;

        let err = pay_category(&db, u.id, cat.id).await.unwrap_err();
        assert!(matches!(err, ServiceError::InsufficientFunds(_)));
        assert_eq!(balance(&db, u.id).await, 100);
        assert!(!user_plan::has_access(&db, u.id, cat.id).await?);
        Ok(())
    }

    #[tokio::test]
    async fn unknown_entities_are_not_found() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let u = seed_user(&db, "who@example.com", 100).await?;
        let cat = seed_category(&db, "Boxing", 10).await?;

        assert!(matches!(pay_category(&db, u.id + 1, cat.id).await, Err(ServiceError::NotFound(_))));
        assert!(matches!(pay_category(&db, u.id, cat.id + 1).await, Err(ServiceError::NotFound(_))));
        assert!(matches!(present_category(&db, u.id, cat.id, u.id + 1).await, Err(ServiceError::NotFound(_))));
        assert!(matches!(pay_subscription(&db, u.id, 77).await, Err(ServiceError::NotFound(_))));
        assert_eq!(balance(&db, u.id).await, 100);
        Ok(())
    }

    #[tokio::test]
    async fn present_grants_recipient_and_charges_payer() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let payer = seed_user(&db, "giver@example.com", 500).await?;
        let friend = seed_user(&db, "friend@example.com", 0).await?;
        let cat = seed_category(&db, "Running", 250).await?;

        present_category(&db, payer.id, cat.id, friend.id).await?;
        assert_eq!(balance(&db, payer.id).await, 250);
        assert_eq!(balance(&db, friend.id).await, 0);
        assert!(user_plan::has_access(&db, friend.id, cat.id).await?);
        assert!(!user_plan::has_access(&db, payer.id, cat.id).await?);

        let twice = present_category(&db, payer.id, cat.id, friend.id).await.unwrap_err();
        assert!(matches!(twice, ServiceError::Conflict(_)));
        assert_eq!(balance(&db, payer.id).await, 250);
        Ok(())
    }

    #[tokio::test]
    async fn subscription_payment_grants_category() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let u = seed_user(&db, "sub@example.com", 1000).await?;
        let cat = seed_category(&db, "Swimming", 0).await?;
        let sub = subscription::create(
            &db,
            &subscription::CreateSubscriptionRequest {
                name: "Quarter".into(),
                description: String::new(),
                price: 300,
                duration_days: 90,
                category_id: cat.id,
            },
        )
        .await?;

        let bought = pay_subscription(&db, u.id, sub.id).await?;
        assert_eq!((bought.expires_at - bought.started_at).num_days(), 90);
        assert_eq!(balance(&db, u.id).await, 700);
        assert!(user_plan::has_access(&db, u.id, cat.id).await?);

        let again = pay_subscription(&db, u.id, sub.id).await.unwrap_err();
        assert!(matches!(again, ServiceError::Conflict(_)));
        assert_eq!(balance(&db, u.id).await, 700);
        Ok(())
    }

    #[tokio::test]
    async fn grant_losing_a_race_is_a_conflict() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let u = seed_user(&db, "racer@example.com", 1000).await?;
        let cat = seed_category(&db, "Cycling", 400).await?;

        // the rival request commits its grant after our access check passed
        user_plan::grant(&db, u.id, cat.id).await?;

        let txn = db.begin().await?;
        let err = charge_and_grant(&txn, u.id, u.id, &cat).await.unwrap_err();
        assert!(matches!(err, ServiceError::Conflict(_)));
        txn.rollback().await?;
        assert_eq!(balance(&db, u.id).await, 1000);
        Ok(())
    }

    #[tokio::test]
    async fn out_of_range_subscription_is_rejected_without_charge() -> Result<(), anyhow::Error> {
        use sea_orm::{ActiveModelTrait, Set};

        let db = get_db().await?;
        let u = seed_user(&db, "forever@example.com", 1000).await?;
        let cat = seed_category(&db, "Pilates", 0).await?;
        let now = chrono::Utc::now().fixed_offset();
        let sub = subscription::ActiveModel {
            name: Set("Forever".into()),
            description: Set(String::new()),
            price: Set(100),
            duration_days: Set(i32::MAX),
            category_id: Set(cat.id),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
        .insert(&db)
        .await?;

        let err = pay_subscription(&db, u.id, sub.id).await.unwrap_err();
        assert!(matches!(err, ServiceError::Model(models::errors::ModelError::Validation(_))));
        assert_eq!(balance(&db, u.id).await, 1000);
        Ok(())
    }
}
