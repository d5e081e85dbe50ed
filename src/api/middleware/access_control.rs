use std::sync::Arc;

use poem::http::{Method, StatusCode};
use poem::web::headers::authorization::Basic;
use poem::web::headers::{Authorization, HeaderMapExt};
use poem::{Endpoint, IntoResponse, Middleware, Request, Response, Result};

use crate::api::middleware::error_response;
use crate::auth::{AccessPolicy, Decision, Principal, UserDirectory};

const WWW_AUTHENTICATE: &str = "Basic realm=\"fooapi\"";

/// HTTP Basic authentication plus path-prefix role checks
///
/// Preflight `OPTIONS` requests always pass so CORS can answer them. On
/// success the [`Principal`] is stored in the request extensions.
pub struct AccessControl {
    policy: Arc<AccessPolicy>,
    directory: Arc<UserDirectory>,
}

impl AccessControl {
    pub fn new(policy: Arc<AccessPolicy>, directory: Arc<UserDirectory>) -> Self {
        Self { policy, directory }
    }
}

impl<E: Endpoint> Middleware<E> for AccessControl {
    type Output = AccessControlEndpoint<E>;

    fn transform(&self, ep: E) -> Self::Output {
        AccessControlEndpoint {
            inner: ep,
            policy: Arc::clone(&self.policy),
            directory: Arc::clone(&self.directory),
        }
    }
}

pub struct AccessControlEndpoint<E> {
    inner: E,
    policy: Arc<AccessPolicy>,
    directory: Arc<UserDirectory>,
}

impl<E> AccessControlEndpoint<E> {
    fn principal(&self, req: &Request) -> Option<Principal> {
        let credentials = req.headers().typed_get::<Authorization<Basic>>()?;
        self.directory.authenticate(credentials.username(), credentials.password())
    }
}

impl<E: Endpoint> Endpoint for AccessControlEndpoint<E> {
    type Output = Response;

    async fn call(&self, mut req: Request) -> Result<Self::Output> {
        if *req.method() == Method::OPTIONS {
            return self.inner.call(req).await.map(IntoResponse::into_response);
        }

        let path = req.uri().path().to_string();
        let principal = self.principal(&req);

        match self.policy.decide(&path, principal.as_ref()) {
            Decision::Allow => {
                if let Some(principal) = principal {
                    tracing::debug!("Authenticated '{}' for {}", principal.username, path);
                    req.extensions_mut().insert(principal);
                }
                self.inner.call(req).await.map(IntoResponse::into_response)
            }
            Decision::Unauthenticated => {
                tracing::warn!("Unauthenticated request to {}", path);
                Ok(error_response(
                    StatusCode::UNAUTHORIZED,
                    "Unauthorized",
                    "Full authentication is required to access this resource",
                    &path,
                )
                .with_header("WWW-Authenticate", WWW_AUTHENTICATE)
                .into_response())
            }
            Decision::Forbidden => {
                tracing::warn!(
                    "Access denied to {} for '{}'",
                    path,
                    principal.map(|p| p.username).unwrap_or_default()
                );
                Ok(error_response(
                    StatusCode::FORBIDDEN,
                    "Forbidden",
                    "Access is denied",
                    &path,
                ))
            }
        }
    }
}
