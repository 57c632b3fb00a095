use actix_web::error::InternalError;
use actix_web::http::StatusCode;
use actix_web::web::Json;
use actix_web::{Error, HttpResponse};
use serde_derive::Serialize;

/// Envelope shared by every non-assistant JSON response.
#[derive(Serialize, Debug)]
pub struct JsonResponse<T> {
    pub status: String,
    pub message: String,
    pub code: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub list: Option<Vec<T>>,
}

pub struct JsonResponseBuilder<T>
where
    T: serde::Serialize,
{
    message: String,
    list: Option<Vec<T>>,
}

impl<T: serde::Serialize> Default for JsonResponseBuilder<T> {
    fn default() -> Self {
        Self {
            message: String::new(),
            list: None,
        }
    }
}

impl<T> JsonResponseBuilder<T>
where
    T: serde::Serialize,
{
    fn set_msg<I: Into<String>>(mut self, msg: I) -> Self {
        self.message = msg.into();
        self
    }

    pub fn set_list(mut self, list: Vec<T>) -> Self {
        self.list = Some(list);
        self
    }

    fn to_json_response(self, status: &str, code: u32) -> JsonResponse<T> {
        let message = if self.message.trim().is_empty() {
            default_message(code).to_string()
        } else {
            self.message
        };
        JsonResponse {
            status: status.to_string(),
            message,
            code,
            list: self.list,
        }
    }

    pub fn ok<I: Into<String>>(self, msg: I) -> Json<JsonResponse<T>> {
        Json(self.set_msg(msg).to_json_response("OK", 200))
    }

    fn error(self, status: StatusCode) -> Error {
        let body = self.to_json_response("Error", u32::from(status.as_u16()));
        let message = body.message.clone();
        InternalError::from_response(message, HttpResponse::build(status).json(body)).into()
    }

    pub fn bad_request<I: Into<String>>(self, msg: I) -> Error {
        self.set_msg(msg).error(StatusCode::BAD_REQUEST)
    }

    /// 400 carrying the validation report of a rejected form.
    pub fn form_error(self, errors: String) -> Error {
        self.set_msg(errors).error(StatusCode::BAD_REQUEST)
    }
}

fn default_message(code: u32) -> &'static str {
    match code {
        200 => "Success",
        400 => "Bad request",
        _ => "Internal error",
    }
}

impl<T> JsonResponse<T>
where
    T: serde::Serialize,
{
    pub fn build() -> JsonResponseBuilder<T> {
        JsonResponseBuilder::default()
    }
}
