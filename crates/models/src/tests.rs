use migration::{Migrator, MigratorTrait};
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, IntoActiveModel};

use crate::errors::ModelError;
use crate::{category, db, exercise_plan, exercise_plan_item, meal_plan, subscription, user, user_plan, user_subscription};

async fn setup() -> DatabaseConnection {
    let db = db::connect_with_config(&db::in_memory_config()).await.unwrap();
    Migrator::up(&db, None).await.unwrap();
    db
}

async fn seed_category(db: &DatabaseConnection, price: i64) -> category::Model {
    category::create(
        db,
        &category::CreateCategoryRequest { name: "Strength".into(), description: "lift".into(), price },
    )
    .await
    .unwrap()
}

async fn seed_user(db: &DatabaseConnection, email: &str, balance: i64) -> user::Model {
    user::create(db, &user::CreateUserRequest { name: "Ann".into(), email: email.into(), balance })
        .await
        .unwrap()
}

#[tokio::test]
async fn user_email_is_unique() {
    let db = setup().await;
    seed_user(&db, "ann@example.com", 0).await;
    let dup = user::create(&db, &user::CreateUserRequest { name: "Other".into(), email: "ANN@example.com".into(), balance: 0 }).await;
    assert!(matches!(dup, Err(ModelError::Conflict(_))));
    assert!(user::find_by_email(&db, "Ann@Example.com").await.unwrap().is_some());
}

#[tokio::test]
async fn debit_never_overdraws() {
    let db = setup().await;
    let u = seed_user(&db, "ann@example.com", 100).await;
    assert!(user::debit(&db, u.id, 60).await.unwrap());
    assert!(!user::debit(&db, u.id, 60).await.unwrap());
    let after = user::Entity::find_by_id(u.id).one(&db).await.unwrap().unwrap();
    assert_eq!(after.balance, 40);
    assert!(!user::debit(&db, u.id + 100, 1).await.unwrap());
}

#[tokio::test]
async fn partial_update_keeps_other_fields() {
    let db = setup().await;
    let cat = seed_category(&db, 500).await;
    let mut am = cat.clone().into_active_model();
    category::apply_update(&mut am, &category::UpdateCategoryRequest { price: Some(750), ..Default::default() }).unwrap();
    let updated = am.update(&db).await.unwrap();
    assert_eq!(updated.price, 750);
    assert_eq!(updated.name, cat.name);
    assert_eq!(updated.description, cat.description);
}

#[tokio::test]
async fn deleting_category_cascades_to_plans_and_items() {
    let db = setup().await;
    let cat = seed_category(&db, 0).await;
    let plan = exercise_plan::create(
        &db,
        &exercise_plan::CreateExercisePlanRequest {
            name: "Beginner".into(),
            description: String::new(),
            duration_weeks: 4,
            category_id: cat.id,
        },
    )
    .await
    .unwrap();
    exercise_plan_item::create(
        &db,
        &exercise_plan_item::CreateExercisePlanItemRequest {
            name: "Squat".into(),
            sets: 3,
            reps: 10,
            day_of_week: "monday".into(),
            exercise_plan_id: plan.id,
            ..Default::default()
        },
    )
    .await
    .unwrap();
    meal_plan::create(
        &db,
        &meal_plan::CreateMealPlanRequest {
            name: "Bulk".into(),
            description: String::new(),
            daily_calories: 3000,
            category_id: cat.id,
        },
    )
    .await
    .unwrap();

    category::Entity::delete_by_id(cat.id).exec(&db).await.unwrap();

    assert!(exercise_plan::Entity::find().all(&db).await.unwrap().is_empty());
    assert!(exercise_plan_item::Entity::find().all(&db).await.unwrap().is_empty());
    assert!(meal_plan::Entity::find().all(&db).await.unwrap().is_empty());
}

#[tokio::test]
async fn plan_with_unknown_category_is_rejected() {
    let db = setup().await;
    let res = exercise_plan::create(
        &db,
        &exercise_plan::CreateExercisePlanRequest {
            name: "Orphan".into(),
            description: String::new(),
            duration_weeks: 1,
            category_id: 999,
        },
    )
    .await;
    assert!(res.is_err());
}

#[tokio::test]
async fn user_plan_is_unique_per_category() {
    let db = setup().await;
    let u = seed_user(&db, "ann@example.com", 0).await;
    let cat = seed_category(&db, 0).await;
    assert!(!user_plan::has_access(&db, u.id, cat.id).await.unwrap());
    user_plan::grant(&db, u.id, cat.id).await.unwrap();
    assert!(user_plan::has_access(&db, u.id, cat.id).await.unwrap());
    assert!(matches!(user_plan::grant(&db, u.id, cat.id).await, Err(ModelError::Conflict(_))));
    assert_eq!(user_plan::category_ids(&db, u.id).await.unwrap(), vec![cat.id]);
}

#[tokio::test]
async fn subscription_expiry_follows_duration() {
    let db = setup().await;
    let u = seed_user(&db, "ann@example.com", 0).await;
    let cat = seed_category(&db, 0).await;
    let sub = subscription::create(
        &db,
        &subscription::CreateSubscriptionRequest {
            name: "Monthly".into(),
            description: String::new(),
            price: 990,
            duration_days: 30,
            category_id: cat.id,
        },
    )
    .await
    .unwrap();
    let us = user_subscription::create(&db, u.id, &sub).await.unwrap();
    assert_eq!((us.expires_at - us.started_at).num_days(), 30);
    assert!(user_subscription::find_active(&db, u.id, sub.id).await.unwrap().is_some());
    assert_eq!(user_subscription::list_by_user(&db, u.id).await.unwrap().len(), 1);
}
