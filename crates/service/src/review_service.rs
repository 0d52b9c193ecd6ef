use common::pagination::Pagination;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, IntoActiveModel, QueryFilter, QueryOrder};
use tracing::{instrument, warn};

use models::{
    category,
    review::{self, CreateReviewRequest, UpdateReviewRequest},
    user,
};
use crate::{errors::ServiceError, lookup};

fn require_user_id(user_id: Option<i32>) -> Result<i32, ServiceError> {
    match user_id {
        Some(id) if id > 0 => Ok(id),
        _ => Err(ServiceError::Validation("user_id is required".into())),
    }
}

/// Load a review and make sure `user_id` wrote it.
async fn owned_review(db: &DatabaseConnection, id: i32, user_id: i32) -> Result<review::Model, ServiceError> {
    let found = get_review(db, id).await?;
    if found.user_id != user_id {
        warn!(review_id = id, user_id, owner_id = found.user_id, "review ownership check failed");
        return Err(ServiceError::Forbidden("review belongs to another user".into()));
    }
    Ok(found)
}

#[instrument(skip(db, input), fields(user_id = input.user_id, category_id = input.category_id))]
pub async fn create_review(db: &DatabaseConnection, input: &CreateReviewRequest) -> Result<review::Model, ServiceError> {
    require_user_id(Some(input.user_id))?;
    lookup::by_id::<user::Entity, _>(db, input.user_id, "user").await?;
    lookup::by_id::<category::Entity, _>(db, input.category_id, "category").await?;
    Ok(review::create(db, input).await?)
}

pub async fn list_reviews(db: &DatabaseConnection, page: Option<Pagination>) -> Result<(Vec<review::Model>, u64), ServiceError> {
    lookup::paged(db, review::Entity::find().order_by_asc(review::Column::Id), page).await
}

pub async fn get_review(db: &DatabaseConnection, id: i32) -> Result<review::Model, ServiceError> {
    lookup::by_id::<review::Entity, _>(db, id, "review").await
}

pub async fn reviews_by_user(db: &DatabaseConnection, user_id: i32, page: Option<Pagination>) -> Result<(Vec<review::Model>, u64), ServiceError> {
    let select = review::Entity::find()
        .filter(review::Column::UserId.eq(user_id))
        .order_by_asc(review::Column::Id);
    lookup::paged(db, select, page).await
}

pub async fn reviews_by_category(
    db: &DatabaseConnection,
    category_id: i32,
    page: Option<Pagination>,
) -> Result<(Vec<review::Model>, u64), ServiceError> {
    let select = review::Entity::find()
        .filter(review::Column::CategoryId.eq(category_id))
        .order_by_asc(review::Column::Id);
    lookup::paged(db, select, page).await
}

/// Update a review on behalf of `user_id`, who must be its author.
#[instrument(skip(db, input))]
pub async fn update_review(
    db: &DatabaseConnection,
    id: i32,
    user_id: Option<i32>,
    input: &UpdateReviewRequest,
) -> Result<review::Model, ServiceError> {
    let user_id = require_user_id(user_id)?;
    let mut am = owned_review(db, id, user_id).await?.into_active_model();
    review::apply_update(&mut am, input)?;
    Ok(am.update(db).await?)
}

#[instrument(skip(db))]
pub async fn delete_review(db: &DatabaseConnection, id: i32, user_id: Option<i32>) -> Result<(), ServiceError> {
    let user_id = require_user_id(user_id)?;
    owned_review(db, id, user_id).await?;
    review::Entity::delete_by_id(id).exec(db).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{get_db, seed_category, seed_user};

    #[tokio::test]
    async fn only_the_author_can_change_a_review() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let author = seed_user(&db, "author@example.com", 0).await?;
        let other = seed_user(&db, "other@example.com", 0).await?;
        let cat = seed_category(&db, "Yoga", 0).await?;

        let r = create_review(&db, &CreateReviewRequest { category_id: cat.id, user_id: author.id, rating: 4, content: "good".into() }).await?;

        let edit = UpdateReviewRequest { rating: Some(5), ..Default::default() };
        assert!(matches!(update_review(&db, r.id, Some(other.id), &edit).await, Err(ServiceError::Forbidden(_))));
        assert!(matches!(update_review(&db, r.id, None, &edit).await, Err(ServiceError::Validation(_))));
        assert!(matches!(update_review(&db, r.id, Some(0), &edit).await, Err(ServiceError::Validation(_))));

        let updated = update_review(&db, r.id, Some(author.id), &edit).await?;
        assert_eq!(updated.rating, 5);
        assert_eq!(updated.content, "good");

        assert!(matches!(delete_review(&db, r.id, Some(other.id)).await, Err(ServiceError::Forbidden(_))));
        delete_review(&db, r.id, Some(author.id)).await?;
        assert!(matches!(get_review(&db, r.id).await, Err(ServiceError::NotFound(_))));
        Ok(())
    }

    #[tokio::test]
    async fn create_checks_references_and_rating() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let u = seed_user(&db, "rater@example.com", 0).await?;
        let cat = seed_category(&db, "Yoga", 0).await?;

        let mut input = CreateReviewRequest { category_id: cat.id, user_id: 0, rating: 3, content: "ok".into() };
        assert!(matches!(create_review(&db, &input).await, Err(ServiceError::Validation(_))));
        input.user_id = u.id;
        input.category_id = cat.id + 5;
        assert!(matches!(create_review(&db, &input).await, Err(ServiceError::NotFound(_))));
        input.category_id = cat.id;
        input.rating = 9;
        assert!(matches!(create_review(&db, &input).await, Err(ServiceError::Model(_))));
        input.rating = 3;
        create_review(&db, &input).await?;
        create_review(&db, &input).await?;

        let (by_user, total) = reviews_by_user(&db, u.id, None).await?;
        assert_eq!((by_user.len(), total), (2, 2));
        let (by_cat, total) = reviews_by_category(&db, cat.id, Some(Pagination { page: 1, per_page: 1 })).await?;
        assert_eq!((by_cat.len(), total), (1, 2));
        let (all, _) = list_reviews(&db, None).await?;
        assert_eq!(all.len(), 2);
        Ok(())
    }
}
