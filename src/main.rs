use sqlx::postgres::{PgConnectOptions, PgPoolOptions, PgSslMode};
use std::net::TcpListener;
use std::sync::Arc;
use std::time::Duration;
use toolcompass::configuration::get_configuration;
use toolcompass::connectors::{
    init_language_model, InMemoryToolCatalog, PgToolCatalog, ToolCatalogConnector,
};
use toolcompass::startup::run;
use toolcompass::telemetry::{get_subscriber, init_subscriber};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let subscriber = get_subscriber("toolcompass".into(), "info".into(), std::io::stdout);
    init_subscriber(subscriber);

    let settings = get_configuration().expect("Failed to read configuration.");

    let catalog: Arc<dyn ToolCatalogConnector> = if settings.database.enabled {
        tracing::info!(
            db_host = %settings.database.host,
            db_port = settings.database.port,
            db_name = %settings.database.database_name,
            "Connecting to PostgreSQL"
        );

        let connect_options = PgConnectOptions::new()
            .host(&settings.database.host)
            .port(settings.database.port)
            .username(&settings.database.username)
            .password(&settings.database.password)
            .database(&settings.database.database_name)
            .ssl_mode(PgSslMode::Disable);

        let pg_pool = PgPoolOptions::new()
            .max_connections(settings.database.max_connections)
            .acquire_timeout(Duration::from_secs(30))
            .connect_with(connect_options)
            .await
            .expect("Failed to connect to database.");

        Arc::new(PgToolCatalog::new(pg_pool))
    } else {
        tracing::warn!("Database disabled - serving an empty in-memory catalog");
        Arc::new(InMemoryToolCatalog::empty())
    };

    let llm = init_language_model(&settings.connectors);

    let address = format!("{}:{}", settings.app_host, settings.app_port);
    tracing::info!("Start server at {:?}", &address);
    let listener =
        TcpListener::bind(&address).unwrap_or_else(|_| panic!("failed to bind to {}", address));

    run(listener, settings, catalog, llm).await?.await
}
