use axum::{extract::{Path, State}, Json};
use axum_extra::extract::WithRejection;
use tracing::info;

use common::types::Deleted;
use models::meal_plan_item::{self, CreateMealPlanItemRequest, UpdateMealPlanItemRequest};
use service::meal_plan_service;

use crate::{
    errors::JsonApiError,
    routes::{JsonBody, PathParam},
    state::ServerState,
};

#[utoipa::path(
    post, path = "/mealPlanItems", tag = "meal",
    request_body = CreateMealPlanItemRequest,
    responses((status = 200, description = "Created"), (status = 400, description = "Validation Error"), (status = 404, description = "Meal Plan Not Found"))
)]
pub async fn create(
    State(state): State<ServerState>,
    WithRejection(Json(input), _): JsonBody<CreateMealPlanItemRequest>,
) -> Result<Json<meal_plan_item::Model>, JsonApiError> {
    let item = meal_plan_service::create_item(&state.db, &input).await?;
    info!(id = item.id, meal_plan_id = item.meal_plan_id, "created meal plan item");
    Ok(Json(item))
}

#[utoipa::path(get, path = "/mealPlanItems", tag = "meal", responses((status = 200, description = "List OK")))]
pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<meal_plan_item::Model>>, JsonApiError> {
    Ok(Json(meal_plan_service::list_items(&state.db).await?))
}

#[utoipa::path(
    get, path = "/mealPlanItems/{id}", tag = "meal",
    params(("id" = i32, Path, description = "Meal plan item id")),
    responses((status = 200, description = "OK"), (status = 404, description = "Not Found"))
)]
pub async fn get(
    State(state): State<ServerState>,
    WithRejection(Path(id), _): PathParam<i32>,
) -> Result<Json<meal_plan_item::Model>, JsonApiError> {
    Ok(Json(meal_plan_service::get_item(&state.db, id).await?))
}

#[utoipa::path(
    patch, path = "/mealPlanItems/{id}", tag = "meal",
    params(("id" = i32, Path, description = "Meal plan item id")),
    request_body = UpdateMealPlanItemRequest,
    responses((status = 200, description = "Updated"), (status = 400, description = "Validation Error"), (status = 404, description = "Not Found"))
)]
pub async fn update(
    State(state): State<ServerState>,
    WithRejection(Path(id), _): PathParam<i32>,
    WithRejection(Json(input), _): JsonBody<UpdateMealPlanItemRequest>,
) -> Result<Json<meal_plan_item::Model>, JsonApiError> {
    let item = meal_plan_service::update_item(&state.db, id, &input).await?;
    info!(id, "updated meal plan item");
    Ok(Json(item))
}

#[utoipa::path(
    delete, path = "/mealPlanItems/{id}", tag = "meal",
    params(("id" = i32, Path, description = "Meal plan item id")),
    responses((status = 200, description = "Deleted"), (status = 404, description = "Not Found"))
)]
pub async fn delete(
    State(state): State<ServerState>,
    WithRejection(Path(id), _): PathParam<i32>,
) -> Result<Json<Deleted>, JsonApiError> {
    meal_plan_service::delete_item(&state.db, id).await?;
    info!(id, "deleted meal plan item");
    Ok(Json(Deleted::default()))
}
