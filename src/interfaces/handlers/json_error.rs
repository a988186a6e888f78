use actix_web::{
    error::{JsonPayloadError, PathError},
    http::StatusCode,
    web, HttpResponse, ResponseError,
};
use serde_json::json;

/// Maps body/path extractor failures to 400 instead of letting them
/// bubble up as opaque framework errors.
pub fn config_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(
        web::JsonConfig::default().error_handler(|err, _req| RequestParseError::from(err).into()),
    );
    cfg.app_data(
        web::PathConfig::default().error_handler(|err, _req| RequestParseError::from(err).into()),
    );
}

#[derive(Debug)]
pub struct RequestParseError {
    message: String,
}

impl std::fmt::Display for RequestParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl ResponseError for RequestParseError {
    fn status_code(&self) -> StatusCode {
        StatusCode::BAD_REQUEST
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(json!({ "error": self.message }))
    }
}

impl From<JsonPayloadError> for RequestParseError {
    fn from(err: JsonPayloadError) -> Self {
        RequestParseError {
            message: format!("JSON payload error: {}", err),
        }
    }
}

impl From<PathError> for RequestParseError {
    fn from(err: PathError) -> Self {
        RequestParseError {
            message: format!("Path parameter error: {}", err),
        }
    }
}
