use sqlx::{Connection, Executor, PgConnection, PgPool};
use toolcompass::configuration::{get_configuration, DatabaseSettings};
use toolcompass::connectors::{PgToolCatalog, ToolCatalogConnector};
use toolcompass::models::{CategoryOrder, PricingModel, ToolQuery, ToolSort, ToolSortField};
use uuid::Uuid;

async fn configure_database(config: &DatabaseSettings) -> Result<PgPool, sqlx::Error> {
    let mut connection = PgConnection::connect(&config.connection_string_without_db()).await?;

    connection
        .execute(format!(r#"CREATE DATABASE "{}""#, config.database_name).as_str())
        .await?;

    let connection_pool = PgPool::connect(&config.connection_string()).await?;

    sqlx::migrate!("./migrations")
        .run(&connection_pool)
        .await?;

    Ok(connection_pool)
}

/// Fresh database with two categories and five tools, or `None` when Postgres is unreachable.
async fn seeded_catalog() -> Option<PgToolCatalog> {
    let mut configuration = get_configuration().expect("Failed to get configuration");
    configuration.database.database_name = Uuid::new_v4().to_string();

    let pool = match configure_database(&configuration.database).await {
        Ok(pool) => pool,
        Err(err) => {
            eprintln!("Skipping tests: failed to connect to postgres: {}", err);
            return None;
        }
    };

    let marketing = Uuid::new_v4();
    let sales = Uuid::new_v4();
    for (id, name, slug, sort_order, active) in [
        (marketing, "Marketing", "marketing", 1, true),
        (sales, "Ventes", "sales", 2, true),
        (Uuid::new_v4(), "Archives", "archives", 0, false),
    ] {
        sqlx::query(
            "INSERT INTO category (id, name, slug, sort_order, is_active) VALUES ($1, $2, $3, $4, $5)",
        )
        .bind(id)
        .bind(name)
        .bind(slug)
        .bind(sort_order)
        .bind(active)
        .execute(&pool)
        .await
        .expect("Failed to insert category");
    }

    for (name, category, pricing, rating, value, status) in [
        ("Brandly", marketing, "freemium", 4.9, Some(3.0), "published"),
        ("Adspark", marketing, "paid", 4.7, None, "published"),
        ("Mailwave", marketing, "free", 3.9, Some(4.8), "published"),
        ("Draftly", marketing, "free", 5.0, Some(5.0), "draft"),
        ("Pipedeal", sales, "freemium", 4.8, Some(4.1), "published"),
    ] {
        sqlx::query(
            "INSERT INTO tool (name, slug, description, category_id, pricing_model, \
             overall_rating, value_for_money_score, integrations, status) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)",
        )
        .bind(name)
        .bind(name.to_lowercase())
        .bind(format!("{} pour le marketing_digital à 100%", name))
        .bind(category)
        .bind(pricing)
        .bind(rating)
        .bind(value)
        .bind(vec!["Slack".to_string()])
        .bind(status)
        .execute(&pool)
        .await
        .expect("Failed to insert tool");
    }

    Some(PgToolCatalog::new(pool))
}

fn names(tools: &[toolcompass::models::Tool]) -> Vec<&str> {
    tools.iter().map(|tool| tool.name.as_str()).collect()
}

#[tokio::test]
async fn published_tools_filtered_by_category_slug() {
    let catalog = match seeded_catalog().await {
        Some(catalog) => catalog,
        None => return,
    };

    let mut query = ToolQuery::published(20);
    query.category_slugs = vec!["marketing".to_string()];
    let tools = catalog.query(&query).await.unwrap();

    assert_eq!(names(&tools), vec!["Brandly", "Adspark", "Mailwave"]);
    assert_eq!(tools[0].category_slug.as_deref(), Some("marketing"));
    assert_eq!(tools[0].pricing_model, Some(PricingModel::Freemium));
    assert_eq!(tools[0].integrations, vec!["Slack"]);
}

#[tokio::test]
async fn missing_scores_sort_last() {
    let catalog = match seeded_catalog().await {
        Some(catalog) => catalog,
        None => return,
    };

    let query = ToolQuery::published(20)
        .sorted_by(ToolSort::desc(ToolSortField::ValueForMoneyScore))
        .then_by(ToolSort::desc(ToolSortField::OverallRating));
    let tools = catalog.query(&query).await.unwrap();

    assert_eq!(names(&tools), vec!["Mailwave", "Pipedeal", "Brandly", "Adspark"]);
}

#[tokio::test]
async fn keywords_and_limit_apply() {
    let catalog = match seeded_catalog().await {
        Some(catalog) => catalog,
        None => return,
    };

    let mut query = ToolQuery::published(2);
    query.keywords = vec!["marketing_digital".to_string(), "100%".to_string()];
    let tools = catalog.query(&query).await.unwrap();
    assert_eq!(names(&tools), vec!["Brandly", "Pipedeal"]);

    let mut query = ToolQuery::published(20);
    query.keywords = vec!["100_".to_string()];
    assert!(catalog.query(&query).await.unwrap().is_empty());
}

#[tokio::test]
async fn only_active_categories_in_sort_order() {
    let catalog = match seeded_catalog().await {
        Some(catalog) => catalog,
        None => return,
    };

    let categories = catalog.list_categories(CategoryOrder::default()).await.unwrap();
    let slugs: Vec<&str> = categories.iter().map(|c| c.slug.as_str()).collect();
    assert_eq!(slugs, vec!["marketing", "sales"]);
    assert!(catalog.ping().await.is_ok());
}
