//! Meal plans and their line items.

use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, IntoActiveModel, QueryFilter, QueryOrder};
use tracing::instrument;

use models::{
    category,
    meal_plan::{self, CreateMealPlanRequest, UpdateMealPlanRequest},
    meal_plan_item::{self, CreateMealPlanItemRequest, UpdateMealPlanItemRequest},
};
use crate::{errors::ServiceError, lookup};

#[instrument(skip(db, input), fields(category_id = input.category_id))]
pub async fn create_meal_plan(db: &DatabaseConnection, input: &CreateMealPlanRequest) -> Result<meal_plan::Model, ServiceError> {
    lookup::by_id::<category::Entity, _>(db, input.category_id, "category").await?;
    Ok(meal_plan::create(db, input).await?)
}

pub async fn list_meal_plans(db: &DatabaseConnection) -> Result<Vec<meal_plan::Model>, ServiceError> {
    Ok(meal_plan::Entity::find().order_by_asc(meal_plan::Column::Id).all(db).await?)
}

pub async fn get_meal_plan(db: &DatabaseConnection, id: i32) -> Result<meal_plan::Model, ServiceError> {
    lookup::by_id::<meal_plan::Entity, _>(db, id, "meal plan").await
}

#[instrument(skip(db, input))]
pub async fn update_meal_plan(db: &DatabaseConnection, id: i32, input: &UpdateMealPlanRequest) -> Result<meal_plan::Model, ServiceError> {
    let mut am = get_meal_plan(db, id).await?.into_active_model();
    if let Some(category_id) = input.category_id {
        lookup::by_id::<category::Entity, _>(db, category_id, "category").await?;
    }
    meal_plan::apply_update(&mut am, input)?;
    Ok(am.update(db).await?)
}

#[instrument(skip(db))]
pub async fn delete_meal_plan(db: &DatabaseConnection, id: i32) -> Result<(), ServiceError> {
    let res = meal_plan::Entity::delete_by_id(id).exec(db).await?;
    if res.rows_affected == 0 {
        return Err(ServiceError::not_found("meal plan"));
    }
    Ok(())
}

pub async fn list_meal_plan_items(db: &DatabaseConnection, meal_plan_id: i32) -> Result<Vec<meal_plan_item::Model>, ServiceError> {
    get_meal_plan(db, meal_plan_id).await?;
    Ok(meal_plan_item::Entity::find()
        .filter(meal_plan_item::Column::MealPlanId.eq(meal_plan_id))
        .order_by_asc(meal_plan_item::Column::Id)
        .all(db)
        .await?)
}

#[instrument(skip(db, input), fields(meal_plan_id = input.meal_plan_id))]
pub async fn create_item(db: &DatabaseConnection, input: &CreateMealPlanItemRequest) -> Result<meal_plan_item::Model, ServiceError> {
    get_meal_plan(db, input.meal_plan_id).await?;
    Ok(meal_plan_item::create(db, input).await?)
}

pub async fn list_items(db: &DatabaseConnection) -> Result<Vec<meal_plan_item::Model>, ServiceError> {
    Ok(meal_plan_item::Entity::find().order_by_asc(meal_plan_item::Column::Id).all(db).await?)
}

pub async fn get_item(db: &DatabaseConnection, id: i32) -> Result<meal_plan_item::Model, ServiceError> {
    lookup::by_id::<meal_plan_item::Entity, _>(db, id, "meal plan item").await
}

#[instrument(skip(db, input))]
pub async fn update_item(db: &DatabaseConnection, id: i32, input: &UpdateMealPlanItemRequest) -> Result<meal_plan_item::Model, ServiceError> {
    let mut am = get_item(db, id).await?.into_active_model();
    if let Some(meal_plan_id) = input.meal_plan_id {
        get_meal_plan(db, meal_plan_id).await?;
    }
    meal_plan_item::apply_update(&mut am, input)?;
    Ok(am.update(db).await?)
}

#[instrument(skip(db))]
pub async fn delete_item(db: &DatabaseConnection, id: i32) -> Result<(), ServiceError> {
    let res = meal_plan_item::Entity::delete_by_id(id).exec(db).await?;
    if res.rows_affected == 0 {
        return Err(ServiceError::not_found("meal plan item"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{get_db, seed_category};

    #[tokio::test]
    async fn meal_items_validate_nutrients() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let cat = seed_category(&db, "Nutrition", 0).await?;
        let plan = create_meal_plan(
            &db,
            &CreateMealPlanRequest { name: "Cut".into(), description: String::new(), daily_calories: 1800, category_id: cat.id },
        )
        .await?;

        let mut input = CreateMealPlanItemRequest {
            name: "Oats".into(),
            calories: 350.0,
            protein: 12.5,
            carbs: 60.0,
            meal_plan_id: plan.id,
            ..Default::default()
        };
        let item = create_item(&db, &input).await?;
        assert_eq!(item.protein, 12.5);

        input.carbs = -1.0;
        assert!(matches!(create_item(&db, &input).await, Err(ServiceError::Model(_))));

        input.carbs = 1.0;
        input.meal_plan_id = plan.id + 10;
        assert!(matches!(create_item(&db, &input).await, Err(ServiceError::NotFound(_))));

        assert_eq!(list_meal_plan_items(&db, plan.id).await?.len(), 1);
        delete_item(&db, item.id).await?;
        assert!(matches!(get_item(&db, item.id).await, Err(ServiceError::NotFound(_))));
        Ok(())
    }
}
