use sea_orm::{entity::prelude::*, sea_query::Expr, ConnectionTrait, QueryFilter, Set};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::errors::ModelError;
use crate::validation;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "user")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    #[sea_orm(unique)]
    pub email: String,
    /// Wallet balance in the smallest currency unit.
    pub balance: i64,
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
pub struct CreateUserRequest {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub balance: i64,
}

#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct UpdateUserRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub balance: Option<i64>,
}

pub fn validate_name(name: &str) -> Result<String, ModelError> {
    validation::required_text("name", name, 128)
}

pub fn validate_email(email: &str) -> Result<String, ModelError> {
    let e = email.trim();
    let valid = match e.split_once('@') {
        Some((local, domain)) => !local.is_empty() && domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.'),
        None => false,
    };
    if !valid || e.len() > 255 {
        return Err(ModelError::Validation("invalid email".into()));
    }
    Ok(e.to_ascii_lowercase())
}

pub async fn create<C: ConnectionTrait>(db: &C, input: &CreateUserRequest) -> Result<Model, ModelError> {
    let name = validate_name(&input.name)?;
    let email = validate_email(&input.email)?;
    let balance = validation::non_negative("balance", input.balance)?;
    let now = crate::now();
    let am = ActiveModel {
        name: Set(name),
        email: Set(email),
        balance: Set(balance),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    };
    Ok(am.insert(db).await?)
}

/// Validate a partial update and stage the provided fields on `am`.
pub fn apply_update(am: &mut ActiveModel, input: &UpdateUserRequest) -> Result<(), ModelError> {
    if let Some(name) = &input.name {
        am.name = Set(validate_name(name)?);
    }
    if let Some(email) = &input.email {
        am.email = Set(validate_email(email)?);
    }
    if let Some(balance) = input.balance {
        am.balance = Set(validation::non_negative("balance", balance)?);
    }
    am.updated_at = Set(crate::now());
    Ok(())
}

pub async fn find_by_email<C: ConnectionTrait>(db: &C, email: &str) -> Result<Option<Model>, ModelError> {
    Ok(Entity::find()
        .filter(Column::Email.eq(email.trim().to_ascii_lowercase()))
        .one(db)
        .await?)
}

/// Subtract `amount` from the wallet only if the balance covers it.
///
/// Runs as a single conditional `UPDATE`, so concurrent debits can never
/// push the balance below zero. Returns `false` when the balance was
/// insufficient (or the user does not exist).
pub async fn debit<C: ConnectionTrait>(db: &C, id: i32, amount: i64) -> Result<bool, ModelError> {
    if amount < 0 {
        return Err(ModelError::Validation("amount must be >= 0".into()));
    }
    let res = Entity::update_many()
        .col_expr(Column::Balance, Expr::col(Column::Balance).sub(amount))
        .col_expr(Column::UpdatedAt, Expr::value(crate::now()))
        .filter(Column::Id.eq(id))
        .filter(Column::Balance.gte(amount))
        .exec(db)
        .await?;
    Ok(res.rows_affected == 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_is_normalized() {
        assert_eq!(validate_email(" Bob@Example.COM ").unwrap(), "bob@example.com");
    }

    #[test]
    fn malformed_emails_are_rejected() {
        for bad in ["", "bob", "@example.com", "bob@", "bob@localhost", "bob@.com"] {
            assert!(validate_email(bad).is_err(), "{bad} should be rejected");
        }
    }

    #[test]
    fn update_rejects_negative_balance() {
        let mut am = <ActiveModel as Default>::default();
        let input = UpdateUserRequest { balance: Some(-5), ..Default::default() };
        assert!(apply_update(&mut am, &input).is_err());
    }
}
