use poem_openapi::{ApiResponse, Object};
use poem_openapi::payload::Json;

/// Request body for creating a Foo
///
/// `name` is optional on the wire so an absent field is reported by
/// validation rather than rejected by the JSON decoder.
#[derive(Object, Debug, Clone, Default)]
pub struct FooRequest {
    /// Name of the Foo (2-50 characters, not blank)
    pub name: Option<String>,
}

impl FooRequest {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: Some(name.into()) }
    }
}

/// Wire representation of a stored Foo
#[derive(Object, Debug, Clone, PartialEq, Eq)]
pub struct FooResponse {
    /// Unique identifier of the Foo
    pub id: i64,

    /// Name of the Foo
    pub name: String,
}

#[derive(ApiResponse, Debug)]
pub enum CreateFooApiResponse {
    /// Foo created
    #[oai(status = 201)]
    Created(Json<FooResponse>),
}
