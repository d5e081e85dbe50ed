use thiserror::Error;

use crate::validation::ValidationErrors;

pub mod database;
pub mod foo;

pub use database::DatabaseError;
pub use foo::FooError;

/// Internal error type for store and service operations
///
/// Not exposed via API - endpoints convert to `FooApiError`.
#[derive(Error, Debug)]
pub enum InternalError {
    #[error(transparent)]
    Database(#[from] DatabaseError),

    #[error(transparent)]
    Foo(#[from] FooError),

    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationErrors),
}

impl InternalError {
    pub fn database(operation: &str, source: sea_orm::DbErr) -> InternalError {
        InternalError::Database(DatabaseError::Operation {
            operation: operation.to_string(),
            source,
        })
    }
}
