use sea_orm::{entity::prelude::*, ConnectionTrait, Set};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::errors::ModelError;
use crate::validation;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "category")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    /// Price of permanent access, charged by the payment endpoints.
    pub price: i64,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match *self {}
    }
}

impl ActiveModelBehavior for ActiveModel {}

#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct CreateCategoryRequest {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub price: i64,
}

#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct UpdateCategoryRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<i64>,
}

pub fn validate_name(name: &str) -> Result<String, ModelError> {
    validation::required_text("name", name, 128)
}

pub async fn create<C: ConnectionTrait>(db: &C, input: &CreateCategoryRequest) -> Result<Model, ModelError> {
    let name = validate_name(&input.name)?;
    let description = validation::optional_text("description", &input.description, 4000)?;
    let price = validation::non_negative("price", input.price)?;
    let now = crate::now();
    let am = ActiveModel {
        name: Set(name),
        description: Set(description),
        price: Set(price),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    };
    Ok(am.insert(db).await?)
}

pub fn apply_update(am: &mut ActiveModel, input: &UpdateCategoryRequest) -> Result<(), ModelError> {
    if let Some(name) = &input.name {
        am.name = Set(validate_name(name)?);
    }
    if let Some(description) = &input.description {
        am.description = Set(validation::optional_text("description", description, 4000)?);
    }
    if let Some(price) = input.price {
        am.price = Set(validation::non_negative("price", price)?);
    }
    am.updated_at = Set(crate::now());
    Ok(())
}
