use chrono::Duration;
use sea_orm::{entity::prelude::*, ConnectionTrait, Set};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::errors::ModelError;
use crate::{category, validation};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "subscription")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub price: i64,
    pub duration_days: i32,
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

impl Model {
    /// Expiry of a subscription bought at `start`.
    pub fn expires_from(&self, start: DateTimeWithTimeZone) -> Result<DateTimeWithTimeZone, ModelError> {
        Duration::try_days(self.duration_days as i64)
            .and_then(|d| start.checked_add_signed(d))
            .ok_or_else(|| ModelError::Validation("duration_days out of range".into()))
    }
}

/// Longest subscription that can be sold, roughly a century.
pub const MAX_DURATION_DAYS: i32 = 36_500;

pub fn validate_duration_days(days: i32) -> Result<i32, ModelError> {
    if !(1..=MAX_DURATION_DAYS).contains(&days) {
        return Err(ModelError::Validation(format!("duration_days must be in 1..={MAX_DURATION_DAYS}")));
    }
    Ok(days)
}

#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct CreateSubscriptionRequest {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub price: i64,
    pub duration_days: i32,
    pub category_id: i32,
}

#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct UpdateSubscriptionRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<i64>,
    pub duration_days: Option<i32>,
    pub category_id: Option<i32>,
}

pub async fn create<C: ConnectionTrait>(db: &C, input: &CreateSubscriptionRequest) -> Result<Model, ModelError> {
    let now = crate::now();
    let am = ActiveModel {
        name: Set(validation::required_text("name", &input.name, 128)?),
        description: Set(validation::optional_text("description", &input.description, 4000)?),
        price: Set(validation::non_negative("price", input.price)?),
        duration_days: Set(validate_duration_days(input.duration_days)?),
        category_id: Set(input.category_id),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    };
    Ok(am.insert(db).await?)
}

pub fn apply_update(am: &mut ActiveModel, input: &UpdateSubscriptionRequest) -> Result<(), ModelError> {
    if let Some(name) = &input.name {
        am.name = Set(validation::required_text("name", name, 128)?);
    }
    if let Some(description) = &input.description {
        am.description = Set(validation::optional_text("description", description, 4000)?);
    }
    if let Some(price) = input.price {
        am.price = Set(validation::non_negative("price", price)?);
    }
    if let Some(days) = input.duration_days {
        am.duration_days = Set(validate_duration_days(days)?);
    }
    if let Some(category_id) = input.category_id {
        am.category_id = Set(category_id);
    }
    am.updated_at = Set(crate::now());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duration_days_is_bounded() {
        assert_eq!(validate_duration_days(30).unwrap(), 30);
        assert!(validate_duration_days(0).is_err());
        assert!(validate_duration_days(MAX_DURATION_DAYS + 1).is_err());
        assert!(validate_duration_days(i32::MAX).is_err());
    }

    #[test]
    fn expiry_past_calendar_range_is_an_error() {
        let now = crate::now();
        let mut sub = Model {
            id: 1,
            name: "Gold".into(),
            description: String::new(),
            price: 0,
            duration_days: 30,
            category_id: 1,
            created_at: now,
            updated_at: now,
        };
        assert_eq!(sub.expires_from(now).unwrap(), now + Duration::days(30));
        sub.duration_days = i32::MAX;
        assert!(matches!(sub.expires_from(now), Err(ModelError::Validation(_))));
    }
}
