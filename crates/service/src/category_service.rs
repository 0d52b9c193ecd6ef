use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, IntoActiveModel, QueryOrder};
use tracing::instrument;

use models::category::{self, CreateCategoryRequest, UpdateCategoryRequest};
use crate::{errors::ServiceError, lookup};

/// Create a category.
#[instrument(skip(db, input), fields(name = %input.name))]
pub async fn create_category(db: &DatabaseConnection, input: &CreateCategoryRequest) -> Result<category::Model, ServiceError> {
    Ok(category::create(db, input).await?)
}

/// All categories ordered by id.
pub async fn list_categories(db: &DatabaseConnection) -> Result<Vec<category::Model>, ServiceError> {
    Ok(category::Entity::find().order_by_asc(category::Column::Id).all(db).await?)
}

pub async fn get_category(db: &DatabaseConnection, id: i32) -> Result<category::Model, ServiceError> {
    lookup::by_id::<category::Entity, _>(db, id, "category").await
}

/// Apply the provided fields; absent ones keep their stored value.
#[instrument(skip(db, input))]
pub async fn update_category(db: &DatabaseConnection, id: i32, input: &UpdateCategoryRequest) -> Result<category::Model, ServiceError> {
    let mut am = get_category(db, id).await?.into_active_model();
    category::apply_update(&mut am, input)?;
    Ok(am.update(db).await?)
}

/// Hard delete; plans, subscriptions, reviews and access rows cascade.
#[instrument(skip(db))]
pub async fn delete_category(db: &DatabaseConnection, id: i32) -> Result<(), ServiceError> {
    let res = category::Entity::delete_by_id(id).exec(db).await?;
    if res.rows_affected == 0 {
        return Err(ServiceError::not_found("category"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::get_db;

    #[tokio::test]
    async fn category_crud_service() -> Result<(), anyhow::Error> {
        let db = get_db().await?;

        let input = CreateCategoryRequest { name: " Yoga ".into(), description: "calm".into(), price: 300 };
        let c = create_category(&db, &input).await?;
        assert_eq!(c.name, "Yoga");

        let found = get_category(&db, c.id).await?;
        assert_eq!(found, c);

        let updated = update_category(&db, c.id, &UpdateCategoryRequest { name: Some("Pilates".into()), ..Default::default() }).await?;
        assert_eq!(updated.name, "Pilates");
        assert_eq!(updated.price, 300);

        assert_eq!(list_categories(&db).await?.len(), 1);

        delete_category(&db, c.id).await?;
        assert!(matches!(get_category(&db, c.id).await, Err(ServiceError::NotFound(_))));
        assert!(matches!(delete_category(&db, c.id).await, Err(ServiceError::NotFound(_))));
        Ok(())
    }

    #[tokio::test]
    async fn invalid_price_is_a_validation_error() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let input = CreateCategoryRequest { name: "Yoga".into(), description: String::new(), price: -1 };
        let err = create_category(&db, &input).await.unwrap_err();
        assert!(matches!(err, ServiceError::Model(models::errors::ModelError::Validation(_))));
        Ok(())
    }
}
