use axum::{extract::{Path, State}, Json};
use axum_extra::extract::WithRejection;
use tracing::info;

use common::types::Deleted;
use models::{
    meal_plan::{self, CreateMealPlanRequest, UpdateMealPlanRequest},
    meal_plan_item,
};
use service::meal_plan_service;

use crate::{
    errors::JsonApiError,
    routes::{JsonBody, PathParam},
    state::ServerState,
};

#[utoipa::path(
    post, path = "/mealPlan", tag = "meal",
    request_body = CreateMealPlanRequest,
    responses((status = 200, description = "Created"), (status = 400, description = "Validation Error"), (status = 404, description = "Category Not Found"))
)]
pub async fn create(
    State(state): State<ServerState>,
    WithRejection(Json(input), _): JsonBody<CreateMealPlanRequest>,
) -> Result<Json<meal_plan::Model>, JsonApiError> {
    let p = meal_plan_service::create_meal_plan(&state.db, &input).await?;
    info!(id = p.id, category_id = p.category_id, "created meal plan");
    Ok(Json(p))
}

#[utoipa::path(get, path = "/mealPlan", tag = "meal", responses((status = 200, description = "List OK")))]
pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<meal_plan::Model>>, JsonApiError> {
    Ok(Json(meal_plan_service::list_meal_plans(&state.db).await?))
}

#[utoipa::path(
    get, path = "/mealPlan/{id}", tag = "meal",
    params(("id" = i32, Path, description = "Meal plan id")),
    responses((status = 200, description = "OK"), (status = 404, description = "Not Found"))
)]
pub async fn get(
    State(state): State<ServerState>,
    WithRejection(Path(id), _): PathParam<i32>,
) -> Result<Json<meal_plan::Model>, JsonApiError> {
    Ok(Json(meal_plan_service::get_meal_plan(&state.db, id).await?))
}

#[utoipa::path(
    patch, path = "/mealPlan/{id}", tag = "meal",
    params(("id" = i32, Path, description = "Meal plan id")),
    request_body = UpdateMealPlanRequest,
    responses((status = 200, description = "Updated"), (status = 400, description = "Validation Error"), (status = 404, description = "Not Found"))
)]
pub async fn update(
    State(state): State<ServerState>,
    WithRejection(Path(id), _): PathParam<i32>,
    WithRejection(Json(input), _): JsonBody<UpdateMealPlanRequest>,
) -> Result<Json<meal_plan::Model>, JsonApiError> {
    let p = meal_plan_service::update_meal_plan(&state.db, id, &input).await?;
    info!(id, "updated meal plan");
    Ok(Json(p))
}

#[utoipa::path(
    delete, path = "/mealPlan/{id}", tag = "meal",
    params(("id" = i32, Path, description = "Meal plan id")),
    responses((status = 200, description = "Deleted"), (status = 404, description = "Not Found"))
)]
pub async fn delete(
    State(state): State<ServerState>,
    WithRejection(Path(id), _): PathParam<i32>,
) -> Result<Json<Deleted>, JsonApiError> {
    meal_plan_service::delete_meal_plan(&state.db, id).await?;
    info!(id, "deleted meal plan");
    Ok(Json(Deleted::default()))
}

#[utoipa::path(
    get, path = "/mealPlan/{id}/items", tag = "meal",
    params(("id" = i32, Path, description = "Meal plan id")),
    responses((status = 200, description = "Items of the meal plan"), (status = 404, description = "Not Found"))
)]
pub async fn items_of_plan(
    State(state): State<ServerState>,
    WithRejection(Path(id), _): PathParam<i32>,
) -> Result<Json<Vec<meal_plan_item::Model>>, JsonApiError> {
    Ok(Json(meal_plan_service::list_meal_plan_items(&state.db, id).await?))
}
