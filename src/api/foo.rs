use std::sync::Arc;

use poem::Request;
use poem_openapi::{OpenApi, Tags, param::Path, payload::Json};

use crate::app_data::AppData;
use crate::errors::FooApiError;
use crate::mappers::FooMapper;
use crate::services::FooService;
use crate::types::dto::foo::{CreateFooApiResponse, FooRequest, FooResponse};

/// Foo resource endpoints
pub struct FooApi {
    foo_service: Arc<FooService>,
    mapper: FooMapper,
}

impl FooApi {
    pub fn new(app_data: Arc<AppData>) -> Self {
        Self {
            foo_service: Arc::clone(&app_data.foo_service),
            mapper: app_data.foo_mapper,
        }
    }
}

/// API tags for Foo endpoints
#[derive(Tags)]
enum FooTags {
    /// APIs for managing Foo resources
    FooManagement,
}

#[OpenApi]
impl FooApi {
    /// Create a new Foo
    #[oai(path = "/v1/foos", method = "post", tag = "FooTags::FooManagement")]
    async fn create_foo(
        &self,
        req: &Request,
        body: Json<FooRequest>,
    ) -> Result<CreateFooApiResponse, FooApiError> {
        let foo = self
            .foo_service
            .create_foo(&body.0)
            .await
            .map_err(|e| FooApiError::from_internal_error(e, req.original_uri().path()))?;

        Ok(CreateFooApiResponse::Created(Json(self.mapper.to_response(&foo))))
    }

    /// Get a Foo by its ID
    #[oai(path = "/v1/foos/:id", method = "get", tag = "FooTags::FooManagement")]
    async fn get_foo_by_id(
        &self,
        req: &Request,
        id: Path<i64>,
    ) -> Result<Json<FooResponse>, FooApiError> {
        let foo = self
            .foo_service
            .get_foo_by_id(id.0)
            .await
            .map_err(|e| FooApiError::from_internal_error(e, req.original_uri().path()))?;

        Ok(Json(self.mapper.to_response(&foo)))
    }
}
