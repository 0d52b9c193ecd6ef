use sea_orm::{entity::prelude::*, ConnectionTrait, Set};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::errors::ModelError;
use crate::{meal_plan, validation};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "meal_plan_item")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub meal_plan_id: i32,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    MealPlan,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::MealPlan => Entity::belongs_to(meal_plan::Entity)
                .from(Column::MealPlanId)
                .to(meal_plan::Column::Id)
                .into(),
        }
    }
}

impl ActiveModelBehavior for ActiveModel {}

#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct CreateMealPlanItemRequest {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub calories: f64,
    #[serde(default)]
    pub protein: f64,
    #[serde(default)]
    pub carbs: f64,
    pub meal_plan_id: i32,
}

#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct UpdateMealPlanItemRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub calories: Option<f64>,
    pub protein: Option<f64>,
    pub carbs: Option<f64>,
    pub meal_plan_id: Option<i32>,
}

pub async fn create<C: ConnectionTrait>(db: &C, input: &CreateMealPlanItemRequest) -> Result<Model, ModelError> {
    let now = crate::now();
    let am = ActiveModel {
        name: Set(validation::required_text("name", &input.name, 128)?),
        description: Set(validation::optional_text("description", &input.description, 4000)?),
        calories: Set(validation::nutrient("calories", input.calories)?),
        protein: Set(validation::nutrient("protein", input.protein)?),
        carbs: Set(validation::nutrient("carbs", input.carbs)?),
        meal_plan_id: Set(input.meal_plan_id),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    };
    Ok(am.insert(db).await?)
}

pub fn apply_update(am: &mut ActiveModel, input: &UpdateMealPlanItemRequest) -> Result<(), ModelError> {
    if let Some(name) = &input.name {
        am.name = Set(validation::required_text("name", name, 128)?);
    }
    if let Some(description) = &input.description {
        am.description = Set(validation::optional_text("description", description, 4000)?);
    }
    if let Some(v) = input.calories {
        am.calories = Set(validation::nutrient("calories", v)?);
    }
    if let Some(v) = input.protein {
        am.protein = Set(validation::nutrient("protein", v)?);
    }
    if let Some(v) = input.carbs {
        am.carbs = Set(validation::nutrient("carbs", v)?);
    }
    if let Some(plan_id) = input.meal_plan_id {
        am.meal_plan_id = Set(plan_id);
    }
    am.updated_at = Set(crate::now());
    Ok(())
}
