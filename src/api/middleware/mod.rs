// HTTP middleware applied around every route
pub mod access_control;
pub mod error_normalizer;

pub use access_control::AccessControl;
pub use error_normalizer::ErrorNormalizer;

use poem::http::StatusCode;
use poem::{IntoResponse, Response};
use poem_openapi::payload::Json;

use crate::types::dto::common::ErrorResponse;

/// JSON error body response with the given status
pub(crate) fn error_response(status: StatusCode, status_text: &str, detail: impl Into<String>, path: &str) -> Response {
    Json(ErrorResponse::new(status.as_u16(), status_text, detail, path))
        .with_status(status)
        .into_response()
}
