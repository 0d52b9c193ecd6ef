use utoipa::OpenApi;
use utoipa::ToSchema;

use models::{
    category::{CreateCategoryRequest, UpdateCategoryRequest},
    exercise_plan::{CreateExercisePlanRequest, UpdateExercisePlanRequest},
    exercise_plan_item::{CreateExercisePlanItemRequest, UpdateExercisePlanItemRequest},
    meal_plan::{CreateMealPlanRequest, UpdateMealPlanRequest},
    meal_plan_item::{CreateMealPlanItemRequest, UpdateMealPlanItemRequest},
    review::{CreateReviewRequest, UpdateReviewRequest},
    subscription::{CreateSubscriptionRequest, UpdateSubscriptionRequest},
    user::{CreateUserRequest, UpdateUserRequest},
};

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(ToSchema)]
pub struct ErrorBody { pub error: String, pub message: String }

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::category::create,
        crate::routes::category::list,
        crate::routes::category::get,
        crate::routes::category::update,
        crate::routes::category::delete,
        crate::routes::exercise_plan::create,
        crate::routes::exercise_plan::list,
        crate::routes::exercise_plan::get,
        crate::routes::exercise_plan::update,
        crate::routes::exercise_plan::delete,
        crate::routes::exercise_plan::items_of_plan,
        crate::routes::exercise_plan::create_item,
        crate::routes::exercise_plan::list_items,
        crate::routes::exercise_plan::get_item,
        crate::routes::exercise_plan::update_item,
        crate::routes::exercise_plan::delete_item,
        crate::routes::meal_plan::create,
        crate::routes::meal_plan::list,
        crate::routes::meal_plan::get,
        crate::routes::meal_plan::update,
        crate::routes::meal_plan::delete,
        crate::routes::meal_plan::items_of_plan,
        crate::routes::meal_plan_item::create,
        crate::routes::meal_plan_item::list,
        crate::routes::meal_plan_item::get,
        crate::routes::meal_plan_item::update,
        crate::routes::meal_plan_item::delete,
        crate::routes::subscription::create,
        crate::routes::subscription::list,
        crate::routes::subscription::get,
        crate::routes::subscription::update,
        crate::routes::subscription::delete,
        crate::routes::user::create,
        crate::routes::user::list,
        crate::routes::user::get,
        crate::routes::user::update,
        crate::routes::user::delete,
        crate::routes::user::payment,
        crate::routes::user::present,
        crate::routes::user::pay_subscription,
        crate::routes::user::with_plans,
        crate::routes::user::with_categories,
        crate::routes::user::with_subscriptions,
        crate::routes::review::create,
        crate::routes::review::list,
        crate::routes::review::get,
        crate::routes::review::by_user,
        crate::routes::review::by_category,
        crate::routes::review::update,
        crate::routes::review::delete,
    ),
    components(
        schemas(
            HealthResponse,
            ErrorBody,
            CreateCategoryRequest,
            UpdateCategoryRequest,
            CreateExercisePlanRequest,
            UpdateExercisePlanRequest,
            CreateExercisePlanItemRequest,
            UpdateExercisePlanItemRequest,
            CreateMealPlanRequest,
            UpdateMealPlanRequest,
            CreateMealPlanItemRequest,
            UpdateMealPlanItemRequest,
            CreateSubscriptionRequest,
            UpdateSubscriptionRequest,
            CreateUserRequest,
            UpdateUserRequest,
            CreateReviewRequest,
            UpdateReviewRequest,
        )
    ),
    tags(
        (name = "health"),
        (name = "category"),
        (name = "plan"),
        (name = "meal"),
        (name = "subscription"),
        (name = "user"),
        (name = "payment"),
        (name = "reviews")
    )
)]
pub struct ApiDoc;
