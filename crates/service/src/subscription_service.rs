use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, IntoActiveModel, QueryOrder};
use tracing::instrument;

use models::{
    category,
    subscription::{self, CreateSubscriptionRequest, UpdateSubscriptionRequest},
};
use crate::{errors::ServiceError, lookup};

#[instrument(skip(db, input), fields(category_id = input.category_id))]
pub async fn create_subscription(db: &DatabaseConnection, input: &CreateSubscriptionRequest) -> Result<subscription::Model, ServiceError> {
    lookup::by_id::<category::Entity, _>(db, input.category_id, "category").await?;
    Ok(subscription::create(db, input).await?)
}

pub async fn list_subscriptions(db: &DatabaseConnection) -> Result<Vec<subscription::Model>, ServiceError> {
    Ok(subscription::Entity::find().order_by_asc(subscription::Column::Id).all(db).await?)
}

pub async fn get_subscription(db: &DatabaseConnection, id: i32) -> Result<subscription::Model, ServiceError> {
    lookup::by_id::<subscription::Entity, _>(db, id, "subscription").await
}

#[instrument(skip(db, input))]
pub async fn update_subscription(db: &DatabaseConnection, id: i32, input: &UpdateSubscriptionRequest) -> Result<subscription::Model, ServiceError> {
    let mut am = get_subscription(db, id).await?.into_active_model();
    if let Some(category_id) = input.category_id {
        lookup::by_id::<category::Entity, _>(db, category_id, "category").await?;
    }
    subscription::apply_update(&mut am, input)?;
    Ok(am.update(db).await?)
}

#[instrument(skip(db))]
pub async fn delete_subscription(db: &DatabaseConnection, id: i32) -> Result<(), ServiceError> {
    let res = subscription::Entity::delete_by_id(id).exec(db).await?;
    if res.rows_affected == 0 {
        return Err(ServiceError::not_found("subscription"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{get_db, seed_category};

    #[tokio::test]
    async fn subscription_crud_service() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let cat = seed_category(&db, "Cardio", 0).await?;

        let mut input = CreateSubscriptionRequest {
            name: "Monthly".into(),
            description: String::new(),
            price: 990,
            duration_days: 0,
            category_id: cat.id,
        };
        assert!(matches!(create_subscription(&db, &input).await, Err(ServiceError::Model(_))));

        input.duration_days = 30;
        let sub = create_subscription(&db, &input).await?;
        assert_eq!(get_subscription(&db, sub.id).await?.duration_days, 30);

        let updated = update_subscription(&db, sub.id, &UpdateSubscriptionRequest { price: Some(500), ..Default::default() }).await?;
        assert_eq!(updated.price, 500);
        assert_eq!(updated.name, "Monthly");

        assert_eq!(list_subscriptions(&db).await?.len(), 1);
        delete_subscription(&db, sub.id).await?;
        assert!(list_subscriptions(&db).await?.is_empty());
        Ok(())
    }
}
