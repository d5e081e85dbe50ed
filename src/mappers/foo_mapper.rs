use sea_orm::ActiveValue::{NotSet, Set};

use crate::types::db::foo;
use crate::types::dto::foo::{FooRequest, FooResponse};

/// Converts between Foo wire models and the `foos` entity
///
/// Stateless; the request is expected to have passed validation.
#[derive(Debug, Clone, Copy, Default)]
pub struct FooMapper;

impl FooMapper {
    pub fn new() -> Self {
        Self
    }

    /// Build an insertable model; the id is left for the database to assign
    pub fn to_entity(&self, request: &FooRequest) -> foo::ActiveModel {
        foo::ActiveModel {
            id: NotSet,
            name: Set(request.name.clone().unwrap_or_default()),
        }
    }

    pub fn to_response(&self, foo: &foo::Model) -> FooResponse {
        FooResponse {
            id: foo.id,
            name: foo.name.clone(),
        }
    }
}
