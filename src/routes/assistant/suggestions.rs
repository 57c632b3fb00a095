use crate::helpers::JsonResponse;
use crate::services::assistant::suggestions;
use actix_web::{route, Responder, Result};

#[tracing::instrument(name = "List assistant suggestions")]
#[route("/suggestions", method = "GET", method = "POST")]
pub async fn suggestions_handler() -> Result<impl Responder> {
    Ok(JsonResponse::build()
        .set_list(suggestions::list())
        .ok("OK"))
}
