use sea_orm::{entity::prelude::*, ConnectionTrait, Set};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::errors::ModelError;
use crate::{exercise_plan, validation};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "exercise_plan_item")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub sets: i32,
    pub reps: i32,
    pub duration_minutes: String,
    pub equipment_needed: String,
    pub day_of_week: String,
    pub exercise_plan_id: i32,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    ExercisePlan,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::ExercisePlan => Entity::belongs_to(exercise_plan::Entity)
                .from(Column::ExercisePlanId)
                .to(exercise_plan::Column::Id)
                .into(),
        }
    }
}

impl ActiveModelBehavior for ActiveModel {}

#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct CreateExercisePlanItemRequest {
    pub name: String,
    pub sets: i32,
    pub reps: i32,
    #[serde(default)]
    pub duration_minutes: String,
    #[serde(default)]
    pub equipment_needed: String,
    #[serde(default)]
    pub day_of_week: String,
    pub exercise_plan_id: i32,
}

#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct UpdateExercisePlanItemRequest {
    pub name: Option<String>,
    pub sets: Option<i32>,
    pub reps: Option<i32>,
    pub duration_minutes: Option<String>,
    pub equipment_needed: Option<String>,
    pub day_of_week: Option<String>,
    pub exercise_plan_id: Option<i32>,
}

const WEEKDAYS: [&str; 7] = ["Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday", "Sunday"];

/// Empty means "any day"; otherwise an English weekday name in any case,
/// returned capitalised.
pub fn normalize_day_of_week(day: &str) -> Result<String, ModelError> {
    let d = day.trim();
    if d.is_empty() {
        return Ok(String::new());
    }
    WEEKDAYS
        .iter()
        .find(|w| w.eq_ignore_ascii_case(d))
        .map(|w| String::from(*w))
        .ok_or_else(|| ModelError::Validation(format!("invalid day_of_week: {d}")))
}

pub async fn create<C: ConnectionTrait>(db: &C, input: &CreateExercisePlanItemRequest) -> Result<Model, ModelError> {
    let now = crate::now();
    let am = ActiveModel {
        name: Set(validation::required_text("name", &input.name, 128)?),
        sets: Set(validation::positive("sets", input.sets)?),
        reps: Set(validation::positive("reps", input.reps)?),
        duration_minutes: Set(validation::optional_text("duration_minutes", &input.duration_minutes, 32)?),
        equipment_needed: Set(validation::optional_text("equipment_needed", &input.equipment_needed, 255)?),
        day_of_week: Set(normalize_day_of_week(&input.day_of_week)?),
        exercise_plan_id: Set(input.exercise_plan_id),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    };
    Ok(am.insert(db).await?)
}

pub fn apply_update(am: &mut ActiveModel, input: &UpdateExercisePlanItemRequest) -> Result<(), ModelError> {
    if let Some(name) = &input.name {
        am.name = Set(validation::required_text("name", name, 128)?);
    }
    if let Some(sets) = input.sets {
        am.sets = Set(validation::positive("sets", sets)?);
    }
    if let Some(reps) = input.reps {
        am.reps = Set(validation::positive("reps", reps)?);
    }
    if let Some(d) = &input.duration_minutes {
        am.duration_minutes = Set(validation::optional_text("duration_minutes", d, 32)?);
    }
    if let Some(e) = &input.equipment_needed {
        am.equipment_needed = Set(validation::optional_text("equipment_needed", e, 255)?);
    }
    if let Some(day) = &input.day_of_week {
        am.day_of_week = Set(normalize_day_of_week(day)?);
    }
    if let Some(plan_id) = input.exercise_plan_id {
        am.exercise_plan_id = Set(plan_id);
    }
    am.updated_at = Set(crate::now());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::normalize_day_of_week;

    #[test]
    fn weekday_names_are_capitalised() {
        assert_eq!(normalize_day_of_week("monday").unwrap(), "Monday");
        assert_eq!(normalize_day_of_week(" SUNDAY ").unwrap(), "Sunday");
        assert_eq!(normalize_day_of_week("").unwrap(), "");
        assert!(normalize_day_of_week("Funday").is_err());
    }
}
