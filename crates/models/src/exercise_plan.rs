use sea_orm::{entity::prelude::*, ConnectionTrait, Set};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::errors::ModelError;
use crate::{category, validation};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "exercise_plan")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub duration_weeks: i32,
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
pub struct CreateExercisePlanRequest {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub duration_weeks: i32,
    pub category_id: i32,
}

#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct UpdateExercisePlanRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub duration_weeks: Option<i32>,
    pub category_id: Option<i32>,
}

pub async fn create<C: ConnectionTrait>(db: &C, input: &CreateExercisePlanRequest) -> Result<Model, ModelError> {
    let name = validation::required_text("name", &input.name, 128)?;
    let description = validation::optional_text("description", &input.description, 4000)?;
    let duration_weeks = validation::positive("duration_weeks", input.duration_weeks)?;
    let now = crate::now();
    let am = ActiveModel {
        name: Set(name),
        description: Set(description),
        duration_weeks: Set(duration_weeks),
        category_id: Set(input.category_id),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    };
    Ok(am.insert(db).await?)
}

pub fn apply_update(am: &mut ActiveModel, input: &UpdateExercisePlanRequest) -> Result<(), ModelError> {
    if let Some(name) = &input.name {
        am.name = Set(validation::required_text("name", name, 128)?);
    }
    if let Some(description) = &input.description {
        am.description = Set(validation::optional_text("description", description, 4000)?);
    }
    if let Some(weeks) = input.duration_weeks {
        am.duration_weeks = Set(validation::positive("duration_weeks", weeks)?);
    }
    if let Some(category_id) = input.category_id {
        am.category_id = Set(category_id);
    }
    am.updated_at = Set(crate::now());
    Ok(())
}
