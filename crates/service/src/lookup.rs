//! Generic read helpers shared by the per-entity services.

use common::pagination::Pagination;
use sea_orm::{ConnectionTrait, EntityTrait, PaginatorTrait, PrimaryKeyTrait, Select};

use crate::errors::ServiceError;

/// Load a row by primary key or fail with `NotFound(entity)`.
pub async fn by_id<E, C>(db: &C, id: i32, entity: &str) -> Result<E::Model, ServiceError>
where
    E: EntityTrait,
    E::PrimaryKey: PrimaryKeyTrait<ValueType = i32>,
    C: ConnectionTrait,
{
    E::find_by_id(id).one(db).await?.ok_or_else(|| ServiceError::not_found(entity))
}

/// Run `select`, one page at a time when `page` is given, and report the
/// total number of matching rows alongside.
pub async fn paged<E, C>(db: &C, select: Select<E>, page: Option<Pagination>) -> Result<(Vec<E::Model>, u64), ServiceError>
where
    E: EntityTrait,
    E::Model: Sync + 'static,
    C: ConnectionTrait,
{
    match page {
        Some(p) => {
            let (idx, per_page) = p.normalize();
            let paginator = select.paginate(db, per_page);
            let total = paginator.num_items().await?;
            let items = paginator.fetch_page(idx).await?;
            Ok((items, total))
        }
        None => {
            let items = select.all(db).await?;
            let total = items.len() as u64;
            Ok((items, total))
        }
    }
}
