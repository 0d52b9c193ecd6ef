//! Workout plans and their line items.

use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, IntoActiveModel, QueryFilter, QueryOrder};
use tracing::instrument;

use models::{
    category,
    exercise_plan::{self, CreateExercisePlanRequest, UpdateExercisePlanRequest},
    exercise_plan_item::{self, CreateExercisePlanItemRequest, UpdateExercisePlanItemRequest},
};
use crate::{errors::ServiceError, lookup};

#[instrument(skip(db, input), fields(category_id = input.category_id))]
pub async fn create_plan(db: &DatabaseConnection, input: &CreateExercisePlanRequest) -> Result<exercise_plan::Model, ServiceError> {
    lookup::by_id::<category::Entity, _>(db, input.category_id, "category").await?;
    Ok(exercise_plan::create(db, input).await?)
}

pub async fn list_plans(db: &DatabaseConnection) -> Result<Vec<exercise_plan::Model>, ServiceError> {
    Ok(exercise_plan::Entity::find().order_by_asc(exercise_plan::Column::Id).all(db).await?)
}

pub async fn get_plan(db: &DatabaseConnection, id: i32) -> Result<exercise_plan::Model, ServiceError> {
    lookup::by_id::<exercise_plan::Entity, _>(db, id, "exercise plan").await
}

#[instrument(skip(db, input))]
pub async fn update_plan(db: &DatabaseConnection, id: i32, input: &UpdateExercisePlanRequest) -> Result<exercise_plan::Model, ServiceError> {
    let mut am = get_plan(db, id).await?.into_active_model();
    if let Some(category_id) = input.category_id {
        lookup::by_id::<category::Entity, _>(db, category_id, "category").await?;
    }
    exercise_plan::apply_update(&mut am, input)?;
    Ok(am.update(db).await?)
}

#[instrument(skip(db))]
pub async fn delete_plan(db: &DatabaseConnection, id: i32) -> Result<(), ServiceError> {
    let res = exercise_plan::Entity::delete_by_id(id).exec(db).await?;
    if res.rows_affected == 0 {
        return Err(ServiceError::not_found("exercise plan"));
    }
    Ok(())
}

/// Items of one plan; the plan itself must exist.
pub async fn list_plan_items(db: &DatabaseConnection, plan_id: i32) -> Result<Vec<exercise_plan_item::Model>, ServiceError> {
    get_plan(db, plan_id).await?;
    Ok(exercise_plan_item::Entity::find()
        .filter(exercise_plan_item::Column::ExercisePlanId.eq(plan_id))
        .order_by_asc(exercise_plan_item::Column::Id)
        .all(db)
        .await?)
}

#[instrument(skip(db, input), fields(plan_id = input.exercise_plan_id))]
pub async fn create_item(db: &DatabaseConnection, input: &CreateExercisePlanItemRequest) -> Result<exercise_plan_item::Model, ServiceError> {
    get_plan(db, input.exercise_plan_id).await?;
    Ok(exercise_plan_item::create(db, input).await?)
}

pub async fn list_items(db: &DatabaseConnection) -> Result<Vec<exercise_plan_item::Model>, ServiceError> {
    Ok(exercise_plan_item::Entity::find().order_by_asc(exercise_plan_item::Column::Id).all(db).await?)
}

pub async fn get_item(db: &DatabaseConnection, id: i32) -> Result<exercise_plan_item::Model, ServiceError> {
    lookup::by_id::<exercise_plan_item::Entity, _>(db, id, "exercise plan item").await
}

#[instrument(skip(db, input))]
pub async fn update_item(db: &DatabaseConnection, id: i32, input: &UpdateExercisePlanItemRequest) -> Result<exercise_plan_item::Model, ServiceError> {
    let mut am = get_item(db, id).await?.into_active_model();
    if let Some(plan_id) = input.exercise_plan_id {
        get_plan(db, plan_id).await?;
    }
    exercise_plan_item::apply_update(&mut am, input)?;
    Ok(am.update(db).await?)
}

#[instrument(skip(db))]
pub async fn delete_item(db: &DatabaseConnection, id: i32) -> Result<(), ServiceError> {
    let res = exercise_plan_item::Entity::delete_by_id(id).exec(db).await?;
    if res.rows_affected == 0 {
        return Err(ServiceError::not_found("exercise plan item"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{get_db, seed_category};

    fn plan_input(category_id: i32) -> CreateExercisePlanRequest {
        CreateExercisePlanRequest { name: "Beginner".into(), description: String::new(), duration_weeks: 6, category_id }
    }

    #[tokio::test]
    async fn plan_requires_existing_category() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let err = create_plan(&db, &plan_input(42)).await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)));
        Ok(())
    }

    #[tokio::test]
    async fn plan_and_items_flow() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let cat = seed_category(&db, "Strength", 0).await?;
        let plan = create_plan(&db, &plan_input(cat.id)).await?;

        let item = create_item(
            &db,
            &CreateExercisePlanItemRequest {
                name: "Deadlift".into(),
                sets: 5,
                reps: 5,
                day_of_week: "FRIDAY".into(),
                exercise_plan_id: plan.id,
                ..Default::default()
            },
        )
        .await?;
        assert_eq!(item.day_of_week, "Friday");

        let bad_day = UpdateExercisePlanItemRequest { day_of_week: Some("Caturday".into()), ..Default::default() };
        assert!(matches!(update_item(&db, item.id, &bad_day).await, Err(ServiceError::Model(_))));

        let moved = UpdateExercisePlanItemRequest { exercise_plan_id: Some(plan.id + 1), ..Default::default() };
        assert!(matches!(update_item(&db, item.id, &moved).await, Err(ServiceError::NotFound(_))));

        let reps = UpdateExercisePlanItemRequest { reps: Some(8), ..Default::default() };
        let updated = update_item(&db, item.id, &reps).await?;
        assert_eq!(updated.reps, 8);
        assert_eq!(updated.sets, 5);

        assert_eq!(list_plan_items(&db, plan.id).await?.len(), 1);
        delete_plan(&db, plan.id).await?;
        assert!(list_items(&db).await?.is_empty());
        assert!(matches!(list_plan_items(&db, plan.id).await, Err(ServiceError::NotFound(_))));
        Ok(())
    }
}
