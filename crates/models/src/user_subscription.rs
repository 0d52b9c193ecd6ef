use sea_orm::{entity::prelude::*, ConnectionTrait, QueryFilter, Set};
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;
use crate::{subscription, user};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "user_subscription")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub user_id: i32,
    pub subscription_id: i32,
    pub started_at: DateTimeWithTimeZone,
    pub expires_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    User,
    Subscription,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::User => Entity::belongs_to(user::Entity).from(Column::UserId).to(user::Column::Id).into(),
            Relation::Subscription => Entity::belongs_to(subscription::Entity)
                .from(Column::SubscriptionId)
                .to(subscription::Column::Id)
                .into(),
        }
    }
}

impl Related<subscription::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Subscription.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn is_active_at(&self, at: DateTimeWithTimeZone) -> bool {
        self.started_at <= at && at < self.expires_at
    }
}

pub async fn create<C: ConnectionTrait>(db: &C, user_id: i32, sub: &subscription::Model) -> Result<Model, ModelError> {
    let started_at = crate::now();
    let expires_at = sub.expires_from(started_at)?;
    let am = ActiveModel {
        user_id: Set(user_id),
        subscription_id: Set(sub.id),
        started_at: Set(started_at),
        expires_at: Set(expires_at),
        ..Default::default()
    };
    Ok(am.insert(db).await?)
}

/// The user's subscription to `subscription_id` that has not expired yet.
pub async fn find_active<C: ConnectionTrait>(db: &C, user_id: i32, subscription_id: i32) -> Result<Option<Model>, ModelError> {
    Ok(Entity::find()
        .filter(Column::UserId.eq(user_id))
        .filter(Column::SubscriptionId.eq(subscription_id))
        .filter(Column::ExpiresAt.gt(crate::now()))
        .one(db)
        .await?)
}

pub async fn list_by_user<C: ConnectionTrait>(db: &C, user_id: i32) -> Result<Vec<Model>, ModelError> {
    Ok(Entity::find().filter(Column::UserId.eq(user_id)).all(db).await?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn active_window_is_half_open() {
        let start = crate::now();
        let m = Model { id: 1, user_id: 1, subscription_id: 1, started_at: start, expires_at: start + Duration::days(30) };
        assert!(m.is_active_at(start));
        assert!(m.is_active_at(start + Duration::days(29)));
        assert!(!m.is_active_at(start + Duration::days(30)));
        assert!(!m.is_active_at(start - Duration::seconds(1)));
    }
}
