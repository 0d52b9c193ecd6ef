use axum::{extract::{Path, State}, Json};
use axum_extra::extract::WithRejection;
use tracing::info;

use common::types::Deleted;
use models::subscription::{self, CreateSubscriptionRequest, UpdateSubscriptionRequest};
use service::subscription_service;

use crate::{
    errors::JsonApiError,
    routes::{JsonBody, PathParam},
    state::ServerState,
};

#[utoipa::path(
    post, path = "/sub", tag = "subscription",
    request_body = CreateSubscriptionRequest,
    responses((status = 200, description = "Created"), (status = 400, description = "Validation Error"), (status = 404, description = "Category Not Found"))
)]
pub async fn create(
    State(state): State<ServerState>,
    WithRejection(Json(input), _): JsonBody<CreateSubscriptionRequest>,
) -> Result<Json<subscription::Model>, JsonApiError> {
    let s = subscription_service::create_subscription(&state.db, &input).await?;
    info!(id = s.id, category_id = s.category_id, "created subscription");
    Ok(Json(s))
}

#[utoipa::path(get, path = "/sub", tag = "subscription", responses((status = 200, description = "List OK")))]
pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<subscription::Model>>, JsonApiError> {
    Ok(Json(subscription_service::list_subscriptions(&state.db).await?))
}

#[utoipa::path(
    get, path = "/sub/{id}", tag = "subscription",
    params(("id" = i32, Path, description = "Subscription id")),
    responses((status = 200, description = "OK"), (status = 404, description = "Not Found"))
)]
pub async fn get(
    State(state): State<ServerState>,
    WithRejection(Path(id), _): PathParam<i32>,
) -> Result<Json<subscription::Model>, JsonApiError> {
    Ok(Json(subscription_service::get_subscription(&state.db, id).await?))
}

#[utoipa::path(
    patch, path = "/sub/{id}", tag = "subscription",
    params(("id" = i32, Path, description = "Subscription id")),
    request_body = UpdateSubscriptionRequest,
    responses((status = 200, description = "Updated"), (status = 400, description = "Validation Error"), (status = 404, description = "Not Found"))
)]
pub async fn update(
    State(state): State<ServerState>,
    WithRejection(Path(id), _): PathParam<i32>,
    WithRejection(Json(input), _): JsonBody<UpdateSubscriptionRequest>,
) -> Result<Json<subscription::Model>, JsonApiError> {
    let s = subscription_service::update_subscription(&state.db, id, &input).await?;
    info!(id, "updated subscription");
    Ok(Json(s))
}

#[utoipa::path(
    delete, path = "/sub/{id}", tag = "subscription",
    params(("id" = i32, Path, description = "Subscription id")),
    responses((status = 200, description = "Deleted"), (status = 404, description = "Not Found"))
)]
pub async fn delete(
    State(state): State<ServerState>,
    WithRejection(Path(id), _): PathParam<i32>,
) -> Result<Json<Deleted>, JsonApiError> {
    subscription_service::delete_subscription(&state.db, id).await?;
    info!(id, "deleted subscription");
    Ok(Json(Deleted::default()))
}
