use crate::configuration::Settings;
use crate::connectors::{LanguageModelConnector, ToolCatalogConnector};
use crate::health::HealthChecker;
use crate::helpers::JsonResponse;
use crate::routes;
use crate::services::assistant::RecommendationOrchestrator;
use actix_cors::Cors;
use actix_web::{dev::Server, error, web, App, HttpServer};
use std::net::TcpListener;
use std::sync::Arc;
use tracing_actix_web::TracingLogger;

pub async fn run(
    listener: TcpListener,
    settings: Settings,
    catalog: Arc<dyn ToolCatalogConnector>,
    llm: Arc<dyn LanguageModelConnector>,
) -> Result<Server, std::io::Error> {
    let orchestrator = web::Data::new(RecommendationOrchestrator::new(
        catalog.clone(),
        llm.clone(),
        settings.assistant.clone(),
    ));

    let health_checker = web::Data::new(Arc::new(HealthChecker::new(catalog, llm)));

    let json_config = web::JsonConfig::default().error_handler(|err, _req| {
        let msg = match &err {
            error::JsonPayloadError::Deserialize(err) => format!(
                "Invalid request body at line {}, column {}: {}",
                err.line(),
                err.column(),
                err
            ),
            err => err.to_string(),
        };
        JsonResponse::<()>::build().bad_request(msg)
    });

    let server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .wrap(Cors::permissive())
            .service(
                web::scope("/health_check")
                    .service(routes::health_check)
                    .service(routes::health_components),
            )
            .service(
                web::scope("/assistant")
                    .service(routes::assistant::ask_handler)
                    .service(routes::assistant::suggestions_handler),
            )
            .app_data(json_config.clone())
            .app_data(orchestrator.clone())
            .app_data(health_checker.clone())
    })
    .listen(listener)?
    .run();

    Ok(server)
}
