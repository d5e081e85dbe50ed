use crate::errors::internal::{FooError, InternalError};
use crate::types::dto::common::ErrorResponse;
use poem_openapi::{ApiResponse, payload::Json};
use std::fmt;

pub const NOT_FOUND: &str = "Not Found";
pub const VALIDATION_FAILED: &str = "Validation Failed";
pub const INTERNAL_SERVER_ERROR: &str = "Internal Server Error";

/// Detail returned for infrastructure failures instead of the raw cause
const GENERIC_DETAIL: &str = "An internal error occurred";

/// Foo endpoint error responses
#[derive(ApiResponse, Debug)]
pub enum FooApiError {
    /// Request failed validation
    #[oai(status = 400)]
    ValidationFailed(Json<ErrorResponse>),

    /// Foo not found
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),

    /// Internal server error
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

impl FooApiError {
    pub fn not_found(detail: impl Into<String>, path: &str) -> Self {
        FooApiError::NotFound(Json(ErrorResponse::new(404, NOT_FOUND, detail, path)))
    }

    pub fn validation_failed(detail: impl Into<String>, path: &str) -> Self {
        FooApiError::ValidationFailed(Json(ErrorResponse::new(
            400,
            VALIDATION_FAILED,
            detail,
            path,
        )))
    }

    pub fn internal_server_error(detail: impl Into<String>, path: &str) -> Self {
        FooApiError::InternalError(Json(ErrorResponse::new(
            500,
            INTERNAL_SERVER_ERROR,
            detail,
            path,
        )))
    }

    /// Convert InternalError to FooApiError
    ///
    /// This is the explicit conversion point from internal errors to API errors.
    /// Database failures are logged with their cause but reported generically.
    pub fn from_internal_error(err: InternalError, path: &str) -> Self {
        match &err {
            InternalError::Foo(FooError::NotFound { .. }) => {
                tracing::warn!("Resource not found: {}", err);
                Self::not_found(err.to_string(), path)
            }
            InternalError::Validation(errors) => {
                tracing::warn!("Validation error: {}", errors);
                Self::validation_failed(errors.to_string(), path)
            }
            InternalError::Database(_) => {
                tracing::error!("An unexpected error occurred: {}", err);
                Self::internal_server_error(GENERIC_DETAIL, path)
            }
        }
    }

    pub fn body(&self) -> &ErrorResponse {
        match self {
            FooApiError::ValidationFailed(json) => &json.0,
            FooApiError::NotFound(json) => &json.0,
            FooApiError::InternalError(json) => &json.0,
        }
    }

    pub fn message(&self) -> String {
        self.body().detail.clone()
    }

    pub fn status_code(&self) -> u16 {
        self.body().status_code
    }
}

impl fmt::Display for FooApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}
