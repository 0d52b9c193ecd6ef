use axum::{extract::{Path, Query, State}, http::StatusCode, Json};
use axum_extra::extract::WithRejection;
use serde::Serialize;
use tracing::info;

use common::{pagination::PageQuery, types::Message};
use models::user::{self, CreateUserRequest, UpdateUserRequest};
use service::{
    payment_service,
    user_service::{self, UserWithCategories, UserWithPlans, UserWithSubscriptions},
};

use crate::{
    errors::JsonApiError,
    routes::{JsonBody, PathParam, QueryParam},
    state::ServerState,
};

#[derive(Debug, Serialize)]
pub struct UserCreated {
    pub message: String,
    pub user: user::Model,
}

#[derive(Debug, Serialize)]
pub struct UserList {
    pub users: Vec<user::Model>,
    pub total: u64,
}

#[utoipa::path(
    post, path = "/user", tag = "user",
    request_body = CreateUserRequest,
    responses((status = 201, description = "Created"), (status = 400, description = "Validation Error"), (status = 409, description = "Email Taken"))
)]
pub async fn create(
    State(state): State<ServerState>,
    WithRejection(Json(input), _): JsonBody<CreateUserRequest>,
) -> Result<(StatusCode, Json<UserCreated>), JsonApiError> {
    let u = user_service::create_user(&state.db, &input).await?;
    info!(id = u.id, "created user");
    Ok((StatusCode::CREATED, Json(UserCreated { message: "user created".into(), user: u })))
}

#[utoipa::path(
    get, path = "/user", tag = "user",
    params(
        ("page" = Option<u32>, Query, description = "1-based page"),
        ("per_page" = Option<u32>, Query, description = "Page size, 1..=100")
    ),
    responses((status = 200, description = "List OK"))
)]
pub async fn list(
    State(state): State<ServerState>,
    WithRejection(Query(q), _): QueryParam<PageQuery>,
) -> Result<Json<UserList>, JsonApiError> {
    let (users, total) = user_service::list_users(&state.db, q.into_pagination()).await?;
    Ok(Json(UserList { users, total }))
}

#[utoipa::path(
    get, path = "/user/{id}", tag = "user",
    params(("id" = i32, Path, description = "User id")),
    responses((status = 200, description = "OK"), (status = 404, description = "Not Found"))
)]
pub async fn get(
    State(state): State<ServerState>,
    WithRejection(Path(id), _): PathParam<i32>,
) -> Result<Json<user::Model>, JsonApiError> {
    Ok(Json(user_service::get_user(&state.db, id).await?))
}

#[utoipa::path(
    patch, path = "/user/{id}", tag = "user",
    params(("id" = i32, Path, description = "User id")),
    request_body = UpdateUserRequest,
    responses((status = 200, description = "Updated"), (status = 400, description = "Validation Error"), (status = 404, description = "Not Found"), (status = 409, description = "Email Taken"))
)]
pub async fn update(
    State(state): State<ServerState>,
    WithRejection(Path(id), _): PathParam<i32>,
    WithRejection(Json(input), _): JsonBody<UpdateUserRequest>,
) -> Result<Json<user::Model>, JsonApiError> {
    let u = user_service::update_user(&state.db, id, &input).await?;
    info!(id, "updated user");
    Ok(Json(u))
}

#[utoipa::path(
    delete, path = "/user/{id}", tag = "user",
    params(("id" = i32, Path, description = "User id")),
    responses((status = 200, description = "Deleted"), (status = 404, description = "Not Found"))
)]
pub async fn delete(
    State(state): State<ServerState>,
    WithRejection(Path(id), _): PathParam<i32>,
) -> Result<Json<Message>, JsonApiError> {
    user_service::delete_user(&state.db, id).await?;
    info!(id, "deleted user");
    Ok(Json(Message::new("user deleted")))
}

#[utoipa::path(
    post, path = "/user/payment/{userID}/{categoryID}", tag = "payment",
    params(("userID" = i32, Path, description = "Paying user"), ("categoryID" = i32, Path, description = "Category bought")),
    responses(
        (status = 200, description = "Paid"),
        (status = 400, description = "Insufficient Funds"),
        (status = 404, description = "Not Found"),
        (status = 409, description = "Already Purchased")
    )
)]
pub async fn payment(
    State(state): State<ServerState>,
    WithRejection(Path((user_id, category_id)), _): PathParam<(i32, i32)>,
) -> Result<Json<Message>, JsonApiError> {
    payment_service::pay_category(&state.db, user_id, category_id).await?;
    Ok(Json(Message::new("payment succeeded")))
}

#[utoipa::path(
    post, path = "/user/present/{userID}/{categoryID}/{secondUserID}", tag = "payment",
    params(
        ("userID" = i32, Path, description = "Paying user"),
        ("categoryID" = i32, Path, description = "Category given"),
        ("secondUserID" = i32, Path, description = "Recipient")
    ),
    responses(
        (status = 200, description = "Presented"),
        (status = 400, description = "Insufficient Funds"),
        (status = 404, description = "Not Found"),
        (status = 409, description = "Recipient Already Has Access")
    )
)]
pub async fn present(
    State(state): State<ServerState>,
    WithRejection(Path((user_id, category_id, recipient_id)), _): PathParam<(i32, i32, i32)>,
) -> Result<Json<Message>, JsonApiError> {
    payment_service::present_category(&state.db, user_id, category_id, recipient_id).await?;
    Ok(Json(Message::new("present sent")))
}

#[utoipa::path(
    post, path = "/user/sub/{userID}/{subID}", tag = "payment",
    params(("userID" = i32, Path, description = "Paying user"), ("subID" = i32, Path, description = "Subscription bought")),
    responses(
        (status = 200, description = "Subscribed"),
        (status = 400, description = "Insufficient Funds"),
        (status = 404, description = "Not Found"),
        (status = 409, description = "Already Active")
    )
)]
pub async fn pay_subscription(
    State(state): State<ServerState>,
    WithRejection(Path((user_id, subscription_id)), _): PathParam<(i32, i32)>,
) -> Result<Json<Message>, JsonApiError> {
    payment_service::pay_subscription(&state.db, user_id, subscription_id).await?;
    Ok(Json(Message::new("subscription purchased")))
}

#[utoipa::path(
    get, path = "/user/plan/{id}", tag = "user",
    params(("id" = i32, Path, description = "User id")),
    responses((status = 200, description = "User with the plans of held categories"), (status = 404, description = "Not Found"))
)]
pub async fn with_plans(
    State(state): State<ServerState>,
    WithRejection(Path(id), _): PathParam<i32>,
) -> Result<Json<UserWithPlans>, JsonApiError> {
    Ok(Json(user_service::user_with_plans(&state.db, id).await?))
}

#[utoipa::path(
    get, path = "/user/userplans/{id}", tag = "user",
    params(("id" = i32, Path, description = "User id")),
    responses((status = 200, description = "User with held categories"), (status = 404, description = "Not Found"))
)]
pub async fn with_categories(
    State(state): State<ServerState>,
    WithRejection(Path(id), _): PathParam<i32>,
) -> Result<Json<UserWithCategories>, JsonApiError> {
    Ok(Json(user_service::user_with_categories(&state.db, id).await?))
}

#[utoipa::path(
    get, path = "/user/usersub/{userID}", tag = "user",
    params(("userID" = i32, Path, description = "User id")),
    responses((status = 200, description = "User with subscriptions"), (status = 404, description = "Not Found"))
)]
pub async fn with_subscriptions(
    State(state): State<ServerState>,
    WithRejection(Path(id), _): PathParam<i32>,
) -> Result<Json<UserWithSubscriptions>, JsonApiError> {
    Ok(Json(user_service::user_with_subscriptions(&state.db, id).await?))
}
