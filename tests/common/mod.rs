#![allow(dead_code)]

use std::net::TcpListener;
use std::sync::Arc;
use toolcompass::configuration::{AssistantSettings, DatabaseSettings, Settings};
use toolcompass::connectors::{
    ConnectorConfig, InMemoryToolCatalog, LanguageModelConnector, ToolCatalogConnector,
};
use toolcompass::models::{Category, PricingModel, Tool, ToolStatus};
use toolcompass::telemetry::{get_subscriber, init_subscriber};
use uuid::Uuid;

lazy_static::lazy_static! {
    static ref TRACING: () = {
        let level = "info".to_string();
        let name = "test".to_string();
        // TEST_LOG=1 cargo test ... to see the bunyan output
        if std::env::var("TEST_LOG").is_ok() {
            init_subscriber(get_subscriber(name, level, std::io::stdout));
        } else {
            init_subscriber(get_subscriber(name, level, std::io::sink));
        }
    };
}

pub struct TestApp {
    pub address: String,
}

pub fn test_settings() -> Settings {
    Settings {
        database: DatabaseSettings {
            enabled: false,
            username: "postgres".to_string(),
            password: "postgres".to_string(),
            host: "127.0.0.1".to_string(),
            port: 5432,
            database_name: "toolcompass".to_string(),
            max_connections: 5,
        },
        app_port: 0,
        app_host: "127.0.0.1".to_string(),
        connectors: ConnectorConfig::default(),
        assistant: AssistantSettings::default(),
    }
}

pub async fn spawn_app(
    catalog: Arc<dyn ToolCatalogConnector>,
    llm: Arc<dyn LanguageModelConnector>,
) -> TestApp {
    lazy_static::initialize(&TRACING);

    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind random port");
    let port = listener.local_addr().unwrap().port();
    let address = format!("http://127.0.0.1:{}", port);

    let server = toolcompass::startup::run(listener, test_settings(), catalog, llm)
        .await
        .expect("Failed to bind address.");
    let _ = tokio::spawn(server);

    TestApp { address }
}

pub fn category(name: &str, slug: &str, sort_order: i32) -> Category {
    Category {
        id: Uuid::new_v4(),
        name: name.to_string(),
        slug: slug.to_string(),
        description: None,
        sort_order,
        is_active: true,
    }
}

pub fn published_tool(name: &str, category_slug: &str, description: &str, rating: f64) -> Tool {
    Tool {
        id: Uuid::new_v4(),
        name: name.to_string(),
        slug: name.to_lowercase().replace(' ', "-"),
        description: Some(description.to_string()),
        category_slug: Some(category_slug.to_string()),
        pricing_model: Some(PricingModel::Freemium),
        overall_rating: rating,
        website_url: Some(format!("https://{}.example", name.to_lowercase())),
        status: ToolStatus::Published,
        ..Default::default()
    }
}

/// Five marketing tools rated 4.9, 4.7, 4.2, 3.9 and 3.5, inserted out of order.
pub fn marketing_catalog() -> InMemoryToolCatalog {
    let description = "Plateforme de marketing digital et d'emailing";
    InMemoryToolCatalog::new(
        vec![
            published_tool("Mailwave", "marketing", description, 3.9),
            published_tool("Brandly", "marketing", description, 4.9),
            published_tool("Reachly", "marketing", description, 3.5),
            published_tool("Adspark", "marketing", description, 4.7),
            published_tool("Funnelio", "marketing", description, 4.2),
            published_tool("Pipedeal", "sales", "CRM pour les équipes commerciales", 4.8),
        ],
        vec![
            category("Marketing", "marketing", 1),
            category("Ventes", "sales", 2),
        ],
    )
}
