use chrono::{DateTime, FixedOffset};
use common::pagination::Pagination;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, IntoActiveModel, QueryFilter, QueryOrder};
use serde::Serialize;
use tracing::instrument;

use models::{
    category, exercise_plan, meal_plan, subscription,
    user::{self, CreateUserRequest, UpdateUserRequest},
    user_plan, user_subscription,
};
use crate::{errors::ServiceError, lookup};

/// A user together with the plans of every category they hold.
#[derive(Debug, Serialize)]
pub struct UserWithPlans {
    pub user: user::Model,
    pub exercise_plans: Vec<exercise_plan::Model>,
    pub meal_plans: Vec<meal_plan::Model>,
}

#[derive(Debug, Serialize)]
pub struct UserWithCategories {
    pub user: user::Model,
    pub categories: Vec<category::Model>,
}

#[derive(Debug, Serialize)]
pub struct SubscriptionStatus {
    pub subscription: subscription::Model,
    pub started_at: DateTime<FixedOffset>,
    pub expires_at: DateTime<FixedOffset>,
    pub active: bool,
}

#[derive(Debug, Serialize)]
pub struct UserWithSubscriptions {
    pub user: user::Model,
    pub subscriptions: Vec<SubscriptionStatus>,
}

/// Register a user; emails are unique (case-insensitive).
#[instrument(skip(db, input))]
pub async fn create_user(db: &DatabaseConnection, input: &CreateUserRequest) -> Result<user::Model, ServiceError> {
    let email = user::validate_email(&input.email)?;
    if user::find_by_email(db, &email).await?.is_some() {
        return Err(ServiceError::Conflict("email already registered".into()));
    }
    Ok(user::create(db, input).await?)
}

/// Users ordered by id, one page at a time when `page` is given.
pub async fn list_users(db: &DatabaseConnection, page: Option<Pagination>) -> Result<(Vec<user::Model>, u64), ServiceError> {
    lookup::paged(db, user::Entity::find().order_by_asc(user::Column::Id), page).await
}

pub async fn get_user(db: &DatabaseConnection, id: i32) -> Result<user::Model, ServiceError> {
    lookup::by_id::<user::Entity, _>(db, id, "user").await
}

#[instrument(skip(db, input))]
pub async fn update_user(db: &DatabaseConnection, id: i32, input: &UpdateUserRequest) -> Result<user::Model, ServiceError> {
    let existing = get_user(db, id).await?;
    if let Some(email) = &input.email {
        let email = user::validate_email(email)?;
        if let Some(other) = user::find_by_email(db, &email).await? {
            if other.id != existing.id {
                return Err(ServiceError::Conflict("email already registered".into()));
            }
        }
    }
    let mut am = existing.into_active_model();
    user::apply_update(&mut am, input)?;
    Ok(am.update(db).await?)
}

#[instrument(skip(db))]
pub async fn delete_user(db: &DatabaseConnection, id: i32) -> Result<(), ServiceError> {
    let res = user::Entity::delete_by_id(id).exec(db).await?;
    if res.rows_affected == 0 {
        return Err(ServiceError::not_found("user"));
    }
    Ok(())
}

pub async fn user_with_categories(db: &DatabaseConnection, id: i32) -> Result<UserWithCategories, ServiceError> {
    let user = get_user(db, id).await?;
    let ids = user_plan::category_ids(db, id).await?;
    let categories = category::Entity::find()
        .filter(category::Column::Id.is_in(ids))
        .order_by_asc(category::Column::Id)
        .all(db)
        .await?;
    Ok(UserWithCategories { user, categories })
}

pub async fn user_with_plans(db: &DatabaseConnection, id: i32) -> Result<UserWithPlans, ServiceError> {
    let user = get_user(db, id).await?;
    let ids = user_plan::category_ids(db, id).await?;
    let exercise_plans = exercise_plan::Entity::find()
        .filter(exercise_plan::Column::CategoryId.is_in(ids.clone()))
        .order_by_asc(exercise_plan::Column::Id)
        .all(db)
        .await?;
    let meal_plans = meal_plan::Entity::find()
        .filter(meal_plan::Column::CategoryId.is_in(ids))
        .order_by_asc(meal_plan::Column::Id)
        .all(db)
        .await?;
    Ok(UserWithPlans { user, exercise_plans, meal_plans })
}

/// Every subscription the user has bought, expired ones included.
pub async fn user_with_subscriptions(db: &DatabaseConnection, id: i32) -> Result<UserWithSubscriptions, ServiceError> {
    let user = get_user(db, id).await?;
    let now = models::now();
    let rows = user_subscription::Entity::find()
        .filter(user_subscription::Column::UserId.eq(id))
        .order_by_asc(user_subscription::Column::StartedAt)
        .find_also_related(subscription::Entity)
        .all(db)
        .await?;
    let subscriptions = rows
        .into_iter()
        .filter_map(|(us, sub)| {
            sub.map(|subscription| SubscriptionStatus {
                active: us.is_active_at(now),
                started_at: us.started_at,
                expires_at: us.expires_at,
                subscription,
            })
        })
        .collect();
    Ok(UserWithSubscriptions { user, subscriptions })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{get_db, seed_category};

    fn new_user(email: &str) -> CreateUserRequest {
        CreateUserRequest { name: "Svc User".into(), email: email.into(), balance: 1000 }
    }

    #[tokio::test]
    async fn user_crud_service() -> Result<(), anyhow::Error> {
        let db = get_db().await?;

        let u = create_user(&db, &new_user("svc@example.com")).await?;
        assert_eq!(u.email, "svc@example.com");
        assert!(matches!(create_user(&db, &new_user("SVC@example.com")).await, Err(ServiceError::Conflict(_))));

        let found = get_user(&db, u.id).await?;
        assert_eq!(found.id, u.id);

        let updated = update_user(&db, u.id, &UpdateUserRequest { name: Some("New Name".into()), ..Default::default() }).await?;
        assert_eq!(updated.name, "New Name");
        assert_eq!(updated.balance, 1000);

        // pagination
        create_user(&db, &new_user("u2@example.com")).await?;
        create_user(&db, &new_user("u3@example.com")).await?;
        let (page1, total) = list_users(&db, Some(Pagination { page: 1, per_page: 2 })).await?;
        assert_eq!(page1.len(), 2);
        assert_eq!(total, 3);
        let (page2, _) = list_users(&db, Some(Pagination { page: 2, per_page: 2 })).await?;
        assert_eq!(page2.len(), 1);

        let taken = UpdateUserRequest { email: Some("u2@example.com".into()), ..Default::default() };
        assert!(matches!(update_user(&db, u.id, &taken).await, Err(ServiceError::Conflict(_))));

        delete_user(&db, u.id).await?;
        assert!(matches!(get_user(&db, u.id).await, Err(ServiceError::NotFound(_))));
        Ok(())
    }

    #[tokio::test]
    async fn duplicate_email_insert_maps_to_conflict() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        create_user(&db, &new_user("twin@example.com")).await?;

        // a concurrent registration that slipped past the email lookup
        let err: ServiceError = user::create(&db, &new_user("twin@example.com")).await.unwrap_err().into();
        assert!(matches!(err, ServiceError::Conflict(_)));
        Ok(())
    }

    #[tokio::test]
    async fn views_follow_held_categories() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let u = create_user(&db, &new_user("views@example.com")).await?;
        let held = seed_category(&db, "Held", 0).await?;
        let other = seed_category(&db, "Other", 0).await?;
        for cat in [&held, &other] {
            exercise_plan::create(
                &db,
                &exercise_plan::CreateExercisePlanRequest {
                    name: format!("{} plan", cat.name),
                    description: String::new(),
                    duration_weeks: 4,
                    category_id: cat.id,
                },
            )
            .await?;
        }
        user_plan::grant(&db, u.id, held.id).await?;

        let cats = user_with_categories(&db, u.id).await?;
        assert_eq!(cats.categories.len(), 1);
        assert_eq!(cats.categories[0].id, held.id);

        let plans = user_with_plans(&db, u.id).await?;
        assert_eq!(plans.exercise_plans.len(), 1);
        assert_eq!(plans.exercise_plans[0].category_id, held.id);
        assert!(plans.meal_plans.is_empty());

        let subs = user_with_subscriptions(&db, u.id).await?;
        assert!(subs.subscriptions.is_empty());

        assert!(matches!(user_with_plans(&db, u.id + 99).await, Err(ServiceError::NotFound(_))));
        Ok(())
    }
}
