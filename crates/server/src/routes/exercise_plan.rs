use axum::{extract::{Path, State}, Json};
use axum_extra::extract::WithRejection;
use tracing::info;

use common::types::Deleted;
use models::{
    exercise_plan::{self, CreateExercisePlanRequest, UpdateExercisePlanRequest},
    exercise_plan_item::{self, CreateExercisePlanItemRequest, UpdateExercisePlanItemRequest},
};
use service::exercise_plan_service;

use crate::{
    errors::JsonApiError,
    routes::{JsonBody, PathParam},
    state::ServerState,
};

#[utoipa::path(
    post, path = "/plan", tag = "plan",
    request_body = CreateExercisePlanRequest,
    responses((status = 200, description = "Created"), (status = 400, description = "Validation Error"), (status = 404, description = "Category Not Found"))
)]
pub async fn create(
    State(state): State<ServerState>,
    WithRejection(Json(input), _): JsonBody<CreateExercisePlanRequest>,
) -> Result<Json<exercise_plan::Model>, JsonApiError> {
    let p = exercise_plan_service::create_plan(&state.db, &input).await?;
    info!(id = p.id, category_id = p.category_id, "created exercise plan");
    Ok(Json(p))
}

#[utoipa::path(get, path = "/plan", tag = "plan", responses((status = 200, description = "List OK")))]
pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<exercise_plan::Model>>, JsonApiError> {
    Ok(Json(exercise_plan_service::list_plans(&state.db).await?))
}

#[utoipa::path(
    get, path = "/plan/{id}", tag = "plan",
    params(("id" = i32, Path, description = "Plan id")),
    responses((status = 200, description = "OK"), (status = 404, description = "Not Found"))
)]
pub async fn get(
    State(state): State<ServerState>,
    WithRejection(Path(id), _): PathParam<i32>,
) -> Result<Json<exercise_plan::Model>, JsonApiError> {
    Ok(Json(exercise_plan_service::get_plan(&state.db, id).await?))
}

#[utoipa::path(
    patch, path = "/plan/{id}", tag = "plan",
    params(("id" = i32, Path, description = "Plan id")),
    request_body = UpdateExercisePlanRequest,
    responses((status = 200, description = "Updated"), (status = 400, description = "Validation Error"), (status = 404, description = "Not Found"))
)]
pub async fn update(
    State(state): State<ServerState>,
    WithRejection(Path(id), _): PathParam<i32>,
    WithRejection(Json(input), _): JsonBody<UpdateExercisePlanRequest>,
) -> Result<Json<exercise_plan::Model>, JsonApiError> {
    let p = exercise_plan_service::update_plan(&state.db, id, &input).await?;
    info!(id, "updated exercise plan");
    Ok(Json(p))
}

#[utoipa::path(
    delete, path = "/plan/{id}", tag = "plan",
    params(("id" = i32, Path, description = "Plan id")),
    responses((status = 200, description = "Deleted"), (status = 404, description = "Not Found"))
)]
pub async fn delete(
    State(state): State<ServerState>,
    WithRejection(Path(id), _): PathParam<i32>,
) -> Result<Json<Deleted>, JsonApiError> {
    exercise_plan_service::delete_plan(&state.db, id).await?;
    info!(id, "deleted exercise plan");
    Ok(Json(Deleted::default()))
}

#[utoipa::path(
    get, path = "/plan/{id}/items", tag = "plan",
    params(("id" = i32, Path, description = "Plan id")),
    responses((status = 200, description = "Items of the plan"), (status = 404, description = "Not Found"))
)]
pub async fn items_of_plan(
    State(state): State<ServerState>,
    WithRejection(Path(id), _): PathParam<i32>,
) -> Result<Json<Vec<exercise_plan_item::Model>>, JsonApiError> {
    Ok(Json(exercise_plan_service::list_plan_items(&state.db, id).await?))
}

#[utoipa::path(
    post, path = "/plan/planItem", tag = "plan",
    request_body = CreateExercisePlanItemRequest,
    responses((status = 200, description = "Created"), (status = 400, description = "Validation Error"), (status = 404, description = "Plan Not Found"))
)]
pub async fn create_item(
    State(state): State<ServerState>,
    WithRejection(Json(input), _): JsonBody<CreateExercisePlanItemRequest>,
) -> Result<Json<exercise_plan_item::Model>, JsonApiError> {
    let item = exercise_plan_service::create_item(&state.db, &input).await?;
    info!(id = item.id, plan_id = item.exercise_plan_id, "created exercise plan item");
    Ok(Json(item))
}

#[utoipa::path(get, path = "/plan/planItem", tag = "plan", responses((status = 200, description = "List OK")))]
pub async fn list_items(State(state): State<ServerState>) -> Result<Json<Vec<exercise_plan_item::Model>>, JsonApiError> {
    Ok(Json(exercise_plan_service::list_items(&state.db).await?))
}

#[utoipa::path(
    get, path = "/plan/planItem/{id}", tag = "plan",
    params(("id" = i32, Path, description = "Plan item id")),
    responses((status = 200, description = "OK"), (status = 404, description = "Not Found"))
)]
pub async fn get_item(
    State(state): State<ServerState>,
    WithRejection(Path(id), _): PathParam<i32>,
) -> Result<Json<exercise_plan_item::Model>, JsonApiError> {
    Ok(Json(exercise_plan_service::get_item(&state.db, id).await?))
}

#[utoipa::path(
    patch, path = "/plan/planItem/{id}", tag = "plan",
    params(("id" = i32, Path, description = "Plan item id")),
    request_body = UpdateExercisePlanItemRequest,
    responses((status = 200, description = "Updated"), (status = 400, description = "Validation Error"), (status = 404, description = "Not Found"))
)]
pub async fn update_item(
    State(state): State<ServerState>,
    WithRejection(Path(id), _): PathParam<i32>,
    WithRejection(Json(input), _): JsonBody<UpdateExercisePlanItemRequest>,
) -> Result<Json<exercise_plan_item::Model>, JsonApiError> {
    let item = exercise_plan_service::update_item(&state.db, id, &input).await?;
    info!(id, "updated exercise plan item");
    Ok(Json(item))
}

#[utoipa::path(
    delete, path = "/plan/planItem/{id}", tag = "plan",
    params(("id" = i32, Path, description = "Plan item id")),
    responses((status = 200, description = "Deleted"), (status = 404, description = "Not Found"))
)]
pub async fn delete_item(
    State(state): State<ServerState>,
    WithRejection(Path(id), _): PathParam<i32>,
) -> Result<Json<Deleted>, JsonApiError> {
    exercise_plan_service::delete_item(&state.db, id).await?;
    info!(id, "deleted exercise plan item");
    Ok(Json(Deleted::default()))
}
