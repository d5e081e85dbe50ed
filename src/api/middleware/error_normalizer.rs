use poem::http::StatusCode;
use poem::{Endpoint, IntoResponse, Middleware, Request, Response, Result};

use crate::api::middleware::error_response;
use crate::errors::api::foo::INTERNAL_SERVER_ERROR;

/// Turns every error escaping the routes into the standard error body
///
/// Handler errors are already shaped by `FooApiError` and pass through.
/// Framework errors (bad JSON, bad path parameter, unknown route) keep a
/// client status when they have one; everything else becomes a 500. The
/// endpoint itself always returns `Ok`.
pub struct ErrorNormalizer;

impl<E: Endpoint> Middleware<E> for ErrorNormalizer {
    type Output = ErrorNormalizerEndpoint<E>;

    fn transform(&self, ep: E) -> Self::Output {
        ErrorNormalizerEndpoint { inner: ep }
    }
}

pub struct ErrorNormalizerEndpoint<E> {
    inner: E,
}

impl<E: Endpoint> Endpoint for ErrorNormalizerEndpoint<E> {
    type Output = Response;

    async fn call(&self, req: Request) -> Result<Self::Output> {
        let path = req.uri().path().to_string();

        match self.inner.call(req).await {
            Ok(output) => Ok(output.into_response()),
            Err(err) => Ok(normalize_error(err, &path)),
        }
    }
}

pub fn normalize_error(err: poem::Error, path: &str) -> Response {
    let status = err.status();
    let detail = err.to_string();
    let response = err.into_response();

    if is_json(&response) {
        return response;
    }

    if status.is_client_error() {
        tracing::warn!("Request to {} rejected with {}: {}", path, status, detail);
        let status_text = status.canonical_reason().unwrap_or("Bad Request");
        error_response(status, status_text, detail, path)
    } else {
        tracing::error!("An unexpected error occurred handling {}: {}", path, detail);
        error_response(StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_SERVER_ERROR, detail, path)
    }
}

fn is_json(response: &Response) -> bool {
    response
        .content_type()
        .is_some_and(|ct| ct.starts_with("application/json"))
}
