use axum::{extract::{Path, Query, State}, http::StatusCode, Json};
use axum_extra::extract::WithRejection;
use serde::{Deserialize, Serialize};
use tracing::info;

use common::{pagination::PageQuery, types::Message};
use models::review::{self, CreateReviewRequest, UpdateReviewRequest};
use service::review_service;

use crate::{
    errors::JsonApiError,
    routes::{JsonBody, PathParam, QueryParam},
    state::ServerState,
};

#[derive(Debug, Serialize)]
pub struct ReviewCreated {
    pub message: String,
    pub review_id: i32,
}

#[derive(Debug, Serialize)]
pub struct ReviewList {
    pub reviews: Vec<review::Model>,
    pub total: u64,
}

/// `?user_id=` identifying the acting user on mutations.
#[derive(Debug, Default, Deserialize)]
pub struct OwnerQuery {
    pub user_id: Option<i32>,
}

#[utoipa::path(
    post, path = "/reviews", tag = "reviews",
    request_body = CreateReviewRequest,
    responses((status = 201, description = "Created"), (status = 400, description = "Validation Error"), (status = 404, description = "User or Category Not Found"))
)]
pub async fn create(
    State(state): State<ServerState>,
    WithRejection(Json(input), _): JsonBody<CreateReviewRequest>,
) -> Result<(StatusCode, Json<ReviewCreated>), JsonApiError> {
    let r = review_service::create_review(&state.db, &input).await?;
    info!(id = r.id, user_id = r.user_id, category_id = r.category_id, "created review");
    Ok((StatusCode::CREATED, Json(ReviewCreated { message: "review created".into(), review_id: r.id })))
}

#[utoipa::path(
    get, path = "/reviews", tag = "reviews",
    params(
        ("page" = Option<u32>, Query, description = "1-based page"),
        ("per_page" = Option<u32>, Query, description = "Page size, 1..=100")
    ),
    responses((status = 200, description = "List OK"))
)]
pub async fn list(
    State(state): State<ServerState>,
    WithRejection(Query(q), _): QueryParam<PageQuery>,
) -> Result<Json<ReviewList>, JsonApiError> {
    let (reviews, total) = review_service::list_reviews(&state.db, q.into_pagination()).await?;
    Ok(Json(ReviewList { reviews, total }))
}

#[utoipa::path(
    get, path = "/reviews/{id}", tag = "reviews",
    params(("id" = i32, Path, description = "Review id")),
    responses((status = 200, description = "OK"), (status = 404, description = "Not Found"))
)]
pub async fn get(
    State(state): State<ServerState>,
    WithRejection(Path(id), _): PathParam<i32>,
) -> Result<Json<review::Model>, JsonApiError> {
    Ok(Json(review_service::get_review(&state.db, id).await?))
}

#[utoipa::path(
    get, path = "/reviews/user/{userID}", tag = "reviews",
    params(("userID" = i32, Path, description = "Author id")),
    responses((status = 200, description = "Reviews by the user"))
)]
pub async fn by_user(
    State(state): State<ServerState>,
    WithRejection(Path(user_id), _): PathParam<i32>,
    WithRejection(Query(q), _): QueryParam<PageQuery>,
) -> Result<Json<ReviewList>, JsonApiError> {
    let (reviews, total) = review_service::reviews_by_user(&state.db, user_id, q.into_pagination()).await?;
    info!(user_id, count = reviews.len(), "listed user reviews");
    Ok(Json(ReviewList { reviews, total }))
}

#[utoipa::path(
    get, path = "/reviews/category/{categoryID}", tag = "reviews",
    params(("categoryID" = i32, Path, description = "Category id")),
    responses((status = 200, description = "Reviews of the category"))
)]
pub async fn by_category(
    State(state): State<ServerState>,
    WithRejection(Path(category_id), _): PathParam<i32>,
    WithRejection(Query(q), _): QueryParam<PageQuery>,
) -> Result<Json<ReviewList>, JsonApiError> {
    let (reviews, total) = review_service::reviews_by_category(&state.db, category_id, q.into_pagination()).await?;
    info!(category_id, count = reviews.len(), "listed category reviews");
    Ok(Json(ReviewList { reviews, total }))
}

#[utoipa::path(
    put, path = "/reviews/{id}", tag = "reviews",
    params(
        ("id" = i32, Path, description = "Review id"),
        ("user_id" = Option<i32>, Query, description = "Author id, may be sent in the body instead")
    ),
    request_body = UpdateReviewRequest,
    responses(
        (status = 200, description = "Updated"),
        (status = 400, description = "Validation Error"),
        (status = 403, description = "Not The Author"),
        (status = 404, description = "Not Found")
    )
)]
pub async fn update(
    State(state): State<ServerState>,
    WithRejection(Path(id), _): PathParam<i32>,
    WithRejection(Query(owner), _): QueryParam<OwnerQuery>,
    WithRejection(Json(input), _): JsonBody<UpdateReviewRequest>,
) -> Result<Json<Message>, JsonApiError> {
    let user_id = owner.user_id.or(input.user_id);
    review_service::update_review(&state.db, id, user_id, &input).await?;
    info!(id, ?user_id, "updated review");
    Ok(Json(Message::new("review updated")))
}

#[utoipa::path(
    delete, path = "/reviews/{id}", tag = "reviews",
    params(
        ("id" = i32, Path, description = "Review id"),
        ("user_id" = i32, Query, description = "Author id")
    ),
    responses(
        (status = 200, description = "Deleted"),
        (status = 400, description = "Validation Error"),
        (status = 403, description = "Not The Author"),
        (status = 404, description = "Not Found")
    )
)]
pub async fn delete(
    State(state): State<ServerState>,
    WithRejection(Path(id), _): PathParam<i32>,
    WithRejection(Query(owner), _): QueryParam<OwnerQuery>,
) -> Result<Json<Message>, JsonApiError> {
    review_service::delete_review(&state.db, id, owner.user_id).await?;
    info!(id, user_id = ?owner.user_id, "deleted review");
    Ok(Json(Message::new("review deleted")))
}
