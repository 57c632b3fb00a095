use crate::health::HealthChecker;
use actix_web::{get, web, HttpResponse};
use std::sync::Arc;

#[get("")]
pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().finish()
}

#[tracing::instrument(name = "Component health report", skip(checker))]
#[get("/components")]
pub async fn health_components(checker: web::Data<Arc<HealthChecker>>) -> HttpResponse {
    let report = checker.check_all().await;
    if report.is_healthy() {
        HttpResponse::Ok().json(report)
    } else {
        HttpResponse::ServiceUnavailable().json(report)
    }
}
