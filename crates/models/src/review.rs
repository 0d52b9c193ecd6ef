use sea_orm::{entity::prelude::*, ConnectionTrait, Set};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::errors::ModelError;
use crate::{category, user, validation};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "review")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub category_id: i32,
    pub user_id: i32,
    pub rating: i16,
    #[sea_orm(column_type = "Text")]
    pub content: String,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Category,
    User,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Category => Entity::belongs_to(category::Entity)
                .from(Column::CategoryId)
                .to(category::Column::Id)
                .into(),
            Relation::User => Entity::belongs_to(user::Entity).from(Column::UserId).to(user::Column::Id).into(),
        }
    }
}

impl ActiveModelBehavior for ActiveModel {}

#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct CreateReviewRequest {
    pub category_id: i32,
    pub user_id: i32,
    pub rating: i16,
    #[serde(default)]
    pub content: String,
}

/// `user_id` identifies the author when it is not passed as a query
/// parameter.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct UpdateReviewRequest {
    pub rating: Option<i16>,
    pub content: Option<String>,
    pub user_id: Option<i32>,
}

pub fn validate_rating(rating: i16) -> Result<i16, ModelError> {
    if !(1..=5).contains(&rating) {
        return Err(ModelError::Validation("rating must be between 1 and 5".into()));
    }
    Ok(rating)
}

pub async fn create<C: ConnectionTrait>(db: &C, input: &CreateReviewRequest) -> Result<Model, ModelError> {
    let now = crate::now();
    let am = ActiveModel {
        category_id: Set(input.category_id),
        user_id: Set(input.user_id),
        rating: Set(validate_rating(input.rating)?),
        content: Set(validation::required_text("content", &input.content, 2000)?),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    };
    Ok(am.insert(db).await?)
}

pub fn apply_update(am: &mut ActiveModel, input: &UpdateReviewRequest) -> Result<(), ModelError> {
    if let Some(rating) = input.rating {
        am.rating = Set(validate_rating(rating)?);
    }
    if let Some(content) = &input.content {
        am.content = Set(validation::required_text("content", content, 2000)?);
    }
    am.updated_at = Set(crate::now());
    Ok(())
}
