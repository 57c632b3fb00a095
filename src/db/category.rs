use crate::models::{Category, CategoryOrder, CategorySortField};
use sqlx::PgPool;
use tracing::Instrument;

pub async fn fetch_active(pool: &PgPool, order: CategoryOrder) -> Result<Vec<Category>, sqlx::Error> {
    let query_span = tracing::info_span!("category_fetch_active");

    let column = match order.field {
        CategorySortField::SortOrder => "sort_order",
        CategorySortField::Name => "name",
    };
    let direction = if order.ascending { "ASC" } else { "DESC" };
    let sql = format!(
        "SELECT id, name, slug, description, sort_order, is_active FROM category \
         WHERE is_active = true ORDER BY {} {}, slug ASC",
        column, direction
    );

    sqlx::query_as::<_, Category>(&sql)
        .fetch_all(pool)
        .instrument(query_span)
        .await
        .map_err(|e| {
            tracing::error!("fetch_active categories error: {:?}", e);
            e
        })
}

pub async fn ping(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1 as health_check")
        .fetch_one(pool)
        .await
        .map(|_| ())
}
