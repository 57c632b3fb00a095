use crate::models::{Tool, ToolQuery, ToolSort};
use sqlx::{PgPool, Postgres, QueryBuilder};
use tracing::Instrument;

const TOOL_COLUMNS: &str = r#"SELECT
    t.id,
    t.name,
    t.slug,
    t.description,
    t.tagline,
    t.category_id,
    t.subcategory_id,
    c.slug AS category_slug,
    t.pricing_model,
    t.starting_price,
    t.overall_rating,
    t.ease_of_use_score,
    t.performance_score,
    t.value_for_money_score,
    t.api_available,
    t.open_source,
    t.gdpr_compliant,
    t.integrations,
    t.website_url,
    t.status,
    t.created_at,
    t.updated_at
FROM tool t
LEFT JOIN category c ON t.category_id = c.id"#;

pub async fn fetch_by_query(pool: &PgPool, query: &ToolQuery) -> Result<Vec<Tool>, sqlx::Error> {
    let query_span = tracing::info_span!(
        "tool_fetch_by_query",
        categories = query.category_slugs.len(),
        keywords = query.keywords.len(),
        limit = query.limit
    );

    let mut builder = build_select(query);
    builder
        .build_query_as::<Tool>()
        .fetch_all(pool)
        .instrument(query_span)
        .await
        .map_err(|e| {
            tracing::error!("fetch_by_query error: {:?}", e);
            e
        })
}

fn build_select(query: &ToolQuery) -> QueryBuilder<'_, Postgres> {
    let mut builder = QueryBuilder::new(TOOL_COLUMNS);

    builder.push(" WHERE t.status = ").push_bind(query.status);

    if !query.category_slugs.is_empty() {
        builder
            .push(" AND c.slug = ANY(")
            .push_bind(query.category_slugs.clone())
            .push(")");
    }
    if let Some(category_id) = query.category_id {
        builder.push(" AND t.category_id = ").push_bind(category_id);
    }
    if let Some(subcategory_id) = query.subcategory_id {
        builder.push(" AND t.subcategory_id = ").push_bind(subcategory_id);
    }
    if let Some(pricing_model) = query.pricing_model {
        builder.push(" AND t.pricing_model = ").push_bind(pricing_model);
    }
    if let Some(api_available) = query.api_available {
        builder.push(" AND t.api_available = ").push_bind(api_available);
    }
    if let Some(open_source) = query.open_source {
        builder.push(" AND t.open_source = ").push_bind(open_source);
    }
    if let Some(min_rating) = query.min_rating {
        builder.push(" AND t.overall_rating >= ").push_bind(min_rating);
    }

    if !query.keywords.is_empty() {
        builder.push(" AND (");
        for (i, keyword) in query.keywords.iter().enumerate() {
            if i > 0 {
                builder.push(" OR ");
            }
            let pattern = format!("%{}%", escape_like(keyword));
            builder
                .push("t.name ILIKE ")
                .push_bind(pattern.clone())
                .push(" OR t.description ILIKE ")
                .push_bind(pattern.clone())
                .push(" OR t.tagline ILIKE ")
                .push_bind(pattern);
        }
        builder.push(")");
    }

    builder.push(" ORDER BY ");
    for sort in std::iter::once(&query.sort).chain(query.then_by.iter()) {
        builder.push(order_clause(sort)).push(", ");
    }
    builder.push("t.name ASC, t.id ASC");

    builder.push(" LIMIT ").push_bind(query.limit as i64);
    builder
}

fn order_clause(sort: &ToolSort) -> String {
    let direction = if sort.descending { "DESC" } else { "ASC" };
    format!("t.{} {} NULLS LAST", sort.field.column(), direction)
}

fn escape_like(keyword: &str) -> String {
    keyword
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_")
}
