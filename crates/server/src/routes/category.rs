use axum::{extract::{Path, State}, http::StatusCode, Json};
use axum_extra::extract::WithRejection;
use tracing::info;

use common::types::Deleted;
use models::category::{self, CreateCategoryRequest, UpdateCategoryRequest};
use service::category_service;

use crate::{
    errors::JsonApiError,
    routes::{JsonBody, PathParam},
    state::ServerState,
};

#[utoipa::path(
    post, path = "/category", tag = "category",
    request_body = CreateCategoryRequest,
    responses((status = 201, description = "Created"), (status = 400, description = "Validation Error"))
)]
pub async fn create(
    State(state): State<ServerState>,
    WithRejection(Json(input), _): JsonBody<CreateCategoryRequest>,
) -> Result<(StatusCode, Json<category::Model>), JsonApiError> {
    let c = category_service::create_category(&state.db, &input).await?;
    info!(id = c.id, name = %c.name, "created category");
    Ok((StatusCode::CREATED, Json(c)))
}

#[utoipa::path(get, path = "/category", tag = "category", responses((status = 200, description = "List OK")))]
pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<category::Model>>, JsonApiError> {
    Ok(Json(category_service::list_categories(&state.db).await?))
}

#[utoipa::path(
    get, path = "/category/{id}", tag = "category",
    params(("id" = i32, Path, description = "Category id")),
    responses((status = 200, description = "OK"), (status = 404, description = "Not Found"))
)]
pub async fn get(
    State(state): State<ServerState>,
    WithRejection(Path(id), _): PathParam<i32>,
) -> Result<Json<category::Model>, JsonApiError> {
    Ok(Json(category_service::get_category(&state.db, id).await?))
}

#[utoipa::path(
    patch, path = "/category/{id}", tag = "category",
    params(("id" = i32, Path, description = "Category id")),
    request_body = UpdateCategoryRequest,
    responses((status = 200, description = "Updated"), (status = 400, description = "Validation Error"), (status = 404, description = "Not Found"))
)]
pub async fn update(
    State(state): State<ServerState>,
    WithRejection(Path(id), _): PathParam<i32>,
    WithRejection(Json(input), _): JsonBody<UpdateCategoryRequest>,
) -> Result<Json<category::Model>, JsonApiError> {
    let c = category_service::update_category(&state.db, id, &input).await?;
    info!(id, "updated category");
    Ok(Json(c))
}

#[utoipa::path(
    delete, path = "/category/{id}", tag = "category",
    params(("id" = i32, Path, description = "Category id")),
    responses((status = 200, description = "Deleted"), (status = 404, description = "Not Found"))
)]
pub async fn delete(
    State(state): State<ServerState>,
    WithRejection(Path(id), _): PathParam<i32>,
) -> Result<Json<Deleted>, JsonApiError> {
    category_service::delete_category(&state.db, id).await?;
    info!(id, "deleted category");
    Ok(Json(Deleted::default()))
}
