//! Service layer providing business-oriented operations on top of models.
//! - Separates business logic from data access.
//! - Reuses validation and entity definitions in `models` crate.
//! - Every function returns a `ServiceError` the HTTP layer maps to a status.

pub mod errors;
pub mod lookup;
pub mod category_service;
pub mod exercise_plan_service;
pub mod meal_plan_service;
pub mod subscription_service;
pub mod user_service;
pub mod payment_service;
pub mod review_service;
#[cfg(test)]
pub mod test_support;
