use sea_orm::{entity::prelude::*, ConnectionTrait, Set};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::errors::ModelError;
use crate::{category, validation};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "meal_plan")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub daily_calories: i32,
    pub category_id: i32,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Category,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Category => Entity::belongs_to(category::Entity)
                .from(Column::CategoryId)
                .to(category::Column::Id)
                .into(),
        }
    }
}

impl ActiveModelBehavior for ActiveModel {}

#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct CreateMealPlanRequest {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub daily_calories: i32,
    pub category_id: i32,
}

#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct UpdateMealPlanRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub daily_calories: Option<i32>,
    pub category_id: Option<i32>,
}

fn validate_calories(value: i32) -> Result<i32, ModelError> {
    validation::non_negative("daily_calories", value as i64).map(|v| v as i32)
}

pub async fn create<C: ConnectionTrait>(db: &C, input: &CreateMealPlanRequest) -> Result<Model, ModelError> {
    let now = crate::now();
    let am = ActiveModel {
        name: Set(validation::required_text("name", &input.name, 128)?),
        description: Set(validation::optional_text("description", &input.description, 4000)?),
        daily_calories: Set(validate_calories(input.daily_calories)?),
        category_id: Set(input.category_id),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    };
    Ok(am.insert(db).await?)
}

pub fn apply_update(am: &mut ActiveModel, input: &UpdateMealPlanRequest) -> Result<(), ModelError> {
    if let Some(name) = &input.name {
        am.name = Set(validation::required_text("name", name, 128)?);
    }
    if let Some(description) = &input.description {
        am.description = Set(validation::optional_text("description", description, 4000)?);
    }
    if let Some(calories) = input.daily_calories {
        am.daily_calories = Set(validate_calories(calories)?);
    }
    if let Some(category_id) = input.category_id {
        am.category_id = Set(category_id);
    }
    am.updated_at = Set(crate::now());
    Ok(())
}
