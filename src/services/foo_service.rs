use std::sync::Arc;

use crate::errors::InternalError;
use crate::errors::internal::FooError;
use crate::mappers::FooMapper;
use crate::stores::FooRepository;
use crate::types::db::foo;
use crate::types::dto::foo::FooRequest;
use crate::validation::Validate;

/// Business logic for the Foo resource
///
/// Composed explicitly from a repository and a mapper; holds no other state.
pub struct FooService {
    repository: Arc<dyn FooRepository>,
    mapper: FooMapper,
}

impl FooService {
    pub fn new(repository: Arc<dyn FooRepository>, mapper: FooMapper) -> Self {
        Self { repository, mapper }
    }

    /// Validate and persist a new Foo
    ///
    /// # Errors
    ///
    /// * `InternalError::Validation` - request failed validation, nothing was written
    /// * `InternalError::Database` - repository failure, propagated unchanged
    pub async fn create_foo(&self, request: &FooRequest) -> Result<foo::Model, InternalError> {
        request.validate()?;

        tracing::info!("Creating new Foo with name: {}", request.name.as_deref().unwrap_or_default());
        let entity = self.mapper.to_entity(request);
        let saved = self.repository.save(entity).await?;
        tracing::info!("Foo created with ID: {}", saved.id);

        Ok(saved)
    }

    /// Fetch a Foo by id
    ///
    /// # Errors
    ///
    /// * `FooError::NotFound` - no record with this id
    /// * `InternalError::Database` - repository failure
    pub async fn get_foo_by_id(&self, id: i64) -> Result<foo::Model, InternalError> {
        tracing::debug!("Fetching Foo with ID: {}", id);

        match self.repository.find_by_id(id).await? {
            Some(foo) => Ok(foo),
            None => {
                tracing::warn!("Foo not found with ID: {}", id);
                Err(FooError::NotFound { id }.into())
            }
        }
    }

    pub async fn find_foo_by_name(&self, name: &str) -> Result<Option<foo::Model>, InternalError> {
        tracing::debug!("Fetching Foo with name: {}", name);
        self.repository.find_by_name(name).await
    }
}
