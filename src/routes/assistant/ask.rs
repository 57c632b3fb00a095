use crate::forms;
use crate::helpers::JsonResponse;
use crate::models::RecommendationResult;
use crate::services::assistant::{AskRequest, RecommendationOrchestrator};
use actix_web::{post, web, Responder, Result};
use serde_valid::Validate;

#[tracing::instrument(name = "Ask assistant", skip_all)]
#[post("/ask")]
pub async fn ask_handler(
    form: web::Json<forms::Ask>,
    orchestrator: web::Data<RecommendationOrchestrator>,
) -> Result<impl Responder> {
    if let Err(errors) = form.validate() {
        return Err(JsonResponse::<RecommendationResult>::build().form_error(errors.to_string()));
    }

    let request: AskRequest = form.into_inner().into();
    let result = orchestrator.ask(&request).await;
    tracing::info!(
        primary = result.primary.as_ref().map(|tool| tool.name.as_str()),
        alternatives = result.alternatives.len(),
        "Answered question"
    );
    Ok(web::Json(result))
}
