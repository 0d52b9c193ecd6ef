//! Entity definitions, request payloads and row-level helpers.
//!
//! Every table has one module here holding its sea-orm entity, the JSON
//! payloads accepted by the HTTP layer and the validation that guards
//! inserts and updates.

pub mod errors;
pub mod db;
pub mod validation;
pub mod user;
pub mod category;
pub mod exercise_plan;
pub mod exercise_plan_item;
pub mod meal_plan;
pub mod meal_plan_item;
pub mod subscription;
pub mod user_subscription;
pub mod user_plan;
pub mod review;

use sea_orm::entity::prelude::DateTimeWithTimeZone;

/// Current time in the representation stored by every timestamp column.
pub fn now() -> DateTimeWithTimeZone {
    chrono::Utc::now().into()
}

#[cfg(test)]
mod tests;
