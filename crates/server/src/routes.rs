use axum::{
    routing::{get, post},
    Json, Router,
};
use axum_extra::extract::WithRejection;
use tower::Layer;
use tower_http::{
    cors::CorsLayer,
    normalize_path::{NormalizePath, NormalizePathLayer},
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;
use utoipa::OpenApi;

use common::types::Health;

use crate::errors::JsonApiError;
use crate::openapi::ApiDoc;
use crate::state::ServerState;

pub mod category;
pub mod exercise_plan;
pub mod meal_plan;
pub mod meal_plan_item;
pub mod subscription;
pub mod user;
pub mod review;

/// `Path<T>` whose parse failures answer 400 with the JSON error body.
pub type PathParam<T> = WithRejection<axum::extract::Path<T>, JsonApiError>;
/// `Json<T>` whose rejections answer 400 with the JSON error body.
pub type JsonBody<T> = WithRejection<Json<T>, JsonApiError>;
pub type QueryParam<T> = WithRejection<axum::extract::Query<T>, JsonApiError>;

#[utoipa::path(get, path = "/health", tag = "health", responses((status = 200, description = "OK", body = crate::openapi::HealthResponse)))]
pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// Build the full application router.
pub fn build_router(state: ServerState, cors: CorsLayer) -> Router {
    let catalog = Router::new()
        .route("/category", get(category::list).post(category::create))
        .route("/category/:id", get(category::get).patch(category::update).delete(category::delete))
        .route("/plan", get(exercise_plan::list).post(exercise_plan::create))
        .route("/plan/planItem", get(exercise_plan::list_items).post(exercise_plan::create_item))
        .route(
            "/plan/planItem/:id",
            get(exercise_plan::get_item).patch(exercise_plan::update_item).delete(exercise_plan::delete_item),
        )
        .route("/plan/:id", get(exercise_plan::get).patch(exercise_plan::update).delete(exercise_plan::delete))
        .route("/plan/:id/items", get(exercise_plan::items_of_plan))
        .route("/mealPlan", get(meal_plan::list).post(meal_plan::create))
        .route("/mealPlan/:id", get(meal_plan::get).patch(meal_plan::update).delete(meal_plan::delete))
        .route("/mealPlan/:id/items", get(meal_plan::items_of_plan))
        .route("/mealPlanItems", get(meal_plan_item::list).post(meal_plan_item::create))
        .route(
            "/mealPlanItems/:id",
            get(meal_plan_item::get).patch(meal_plan_item::update).delete(meal_plan_item::delete),
        )
        .route("/sub", get(subscription::list).post(subscription::create))
        .route("/sub/:id", get(subscription::get).patch(subscription::update).delete(subscription::delete));

    let users = Router::new()
        .route("/user", get(user::list).post(user::create))
        .route("/user/:id", get(user::get).patch(user::update).delete(user::delete))
        .route("/user/payment/:userID/:categoryID", post(user::payment))
        .route("/user/present/:userID/:categoryID/:secondUserID", post(user::present))
        .route("/user/sub/:userID/:subID", post(user::pay_subscription))
        .route("/user/plan/:id", get(user::with_plans))
        .route("/user/userplans/:id", get(user::with_categories))
        .route("/user/usersub/:userID", get(user::with_subscriptions));

    let reviews = Router::new()
        .route("/reviews", get(review::list).post(review::create))
        .route("/reviews/:id", get(review::get).put(review::update).delete(review::delete))
        .route("/reviews/user/:userID", get(review::by_user))
        .route("/reviews/category/:categoryID", get(review::by_category));

    Router::new()
        .route("/health", get(health))
        .route("/api-docs/openapi.json", get(openapi_json))
        .merge(catalog)
        .merge(users)
        .merge(reviews)
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}

/// The router wrapped so `/category/` and `/category` reach the same
/// handler. Path normalisation has to run before routing, so it wraps the
/// router instead of being one of its layers.
pub fn build_app(state: ServerState, cors: CorsLayer) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(build_router(state, cors))
}
