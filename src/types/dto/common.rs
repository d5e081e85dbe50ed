use chrono::Utc;
use poem_openapi::Object;

/// Response model for health check endpoint
#[derive(Object, Debug)]
pub struct HealthResponse {
    /// Status of the service
    pub status: String,

    /// Timestamp of the health check (ISO 8601 format)
    pub timestamp: String,
}

impl HealthResponse {
    /// A healthy status stamped with the current time
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: Utc::now().to_rfc3339(),
        }
    }
}

/// Normalized error body returned for every failure
#[derive(Object, Debug, Clone)]
#[oai(rename_all = "camelCase")]
pub struct ErrorResponse {
    /// Time the error was handled (RFC 3339, UTC)
    pub timestamp: String,

    /// HTTP status code
    pub status_code: u16,

    /// Short status description, e.g. "Not Found"
    pub status_text: String,

    /// Human-readable detail
    pub detail: String,

    /// Request path that produced the error
    pub path: String,
}

impl ErrorResponse {
    /// Build an error body stamped with the current time
    pub fn new(status_code: u16, status_text: &str, detail: impl Into<String>, path: &str) -> Self {
        Self {
            timestamp: Utc::now().to_rfc3339(),
            status_code,
            status_text: status_text.to_string(),
            detail: detail.into(),
            path: path.to_string(),
        }
    }
}
