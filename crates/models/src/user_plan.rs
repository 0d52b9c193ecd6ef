use sea_orm::{entity::prelude::*, ConnectionTrait, QueryFilter, QuerySelect, Set};
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;
use crate::{category, user};

/// Category access held by a user, recorded by a successful payment.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "user_plan")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub user_id: i32,
    pub category_id: i32,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    User,
    Category,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::User => Entity::belongs_to(user::Entity).from(Column::UserId).to(user::Column::Id).into(),
            Relation::Category => Entity::belongs_to(category::Entity)
                .from(Column::CategoryId)
                .to(category::Column::Id)
                .into(),
        }
    }
}

impl ActiveModelBehavior for ActiveModel {}

pub async fn grant<C: ConnectionTrait>(db: &C, user_id: i32, category_id: i32) -> Result<Model, ModelError> {
    let am = ActiveModel {
        user_id: Set(user_id),
        category_id: Set(category_id),
        created_at: Set(crate::now()),
        ..Default::default()
    };
    Ok(am.insert(db).await?)
}

pub async fn has_access<C: ConnectionTrait>(db: &C, user_id: i32, category_id: i32) -> Result<bool, ModelError> {
    let found = Entity::find()
        .filter(Column::UserId.eq(user_id))
        .filter(Column::CategoryId.eq(category_id))
        .one(db)
        .await?;
    Ok(found.is_some())
}

/// Ids of all categories the user can access.
pub async fn category_ids<C: ConnectionTrait>(db: &C, user_id: i32) -> Result<Vec<i32>, ModelError> {
    let ids: Vec<i32> = Entity::find()
        .select_only()
        .column(Column::CategoryId)
        .filter(Column::UserId.eq(user_id))
        .into_tuple()
        .all(db)
        .await?;
    Ok(ids)
}
