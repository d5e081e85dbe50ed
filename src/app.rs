use std::sync::Arc;

use poem::endpoint::BoxEndpoint;
use poem::middleware::Tracing;
use poem::{EndpointExt, IntoEndpoint, Response, Route};
use poem_openapi::OpenApiService;

use crate::api::middleware::{AccessControl, ErrorNormalizer};
use crate::api::{FooApi, HealthApi};
use crate::app_data::AppData;

/// Compose the full HTTP application
///
/// * `/api/...` - OpenAPI endpoints, with CORS
/// * `/swagger-ui` - Swagger UI
/// * `/api-docs` - OpenAPI document (JSON)
///
/// Access control runs inside error normalization so both share the error body.
pub fn build_app(app_data: Arc<AppData>, server_url: &str) -> BoxEndpoint<'static, Response> {
    let api_service = OpenApiService::new(
        (HealthApi, FooApi::new(Arc::clone(&app_data))),
        "Foo API",
        env!("CARGO_PKG_VERSION"),
    )
    .server(server_url);

    let ui = api_service.swagger_ui();
    let spec = api_service.spec_endpoint();

    Route::new()
        .nest(
            "/api",
            api_service
                .into_endpoint()
                .with(app_data.cors_settings.to_middleware()),
        )
        .nest("/swagger-ui", ui)
        .at("/api-docs", spec)
        .with(AccessControl::new(
            Arc::clone(&app_data.access_policy),
            Arc::clone(&app_data.user_directory),
        ))
        .with(ErrorNormalizer)
        .with(Tracing)
        .boxed()
}
