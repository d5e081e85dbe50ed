use poem_openapi::payload::Json;
use poem_openapi::{OpenApi, Tags};

use crate::types::dto::common::HealthResponse;

/// Liveness endpoint, reachable without credentials
pub struct HealthApi;

#[derive(Tags)]
enum HealthTags {
    /// Service liveness
    Health,
}

#[OpenApi]
impl HealthApi {
    /// Report that the process is up and serving requests
    #[oai(path = "/health", method = "get", tag = "HealthTags::Health")]
    async fn health(&self) -> Json<HealthResponse> {
        Json(HealthResponse::healthy())
    }
}
