use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};

use crate::errors::InternalError;
use crate::types::db::foo::{self, Entity as Foo};

/// Persistence collaborator for Foo records
#[async_trait]
pub trait FooRepository: Send + Sync {
    async fn find_by_id(&self, id: i64) -> Result<Option<foo::Model>, InternalError>;

    async fn find_by_name(&self, name: &str) -> Result<Option<foo::Model>, InternalError>;

    /// Insert a new record; the returned model carries the assigned id
    async fn save(&self, foo: foo::ActiveModel) -> Result<foo::Model, InternalError>;
}

/// SeaORM-backed repository for the `foos` table
pub struct FooStore {
    db: DatabaseConnection,
}

impl FooStore {
    /// Create a new FooStore with the given database connection
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl FooRepository for FooStore {
    async fn find_by_id(&self, id: i64) -> Result<Option<foo::Model>, InternalError> {
        Foo::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| InternalError::database("find_foo_by_id", e))
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<foo::Model>, InternalError> {
        Foo::find()
            .filter(foo::Column::Name.eq(name))
            .one(&self.db)
            .await
            .map_err(|e| InternalError::database("find_foo_by_name", e))
    }

    async fn save(&self, foo: foo::ActiveModel) -> Result<foo::Model, InternalError> {
        foo.insert(&self.db)
            .await
            .map_err(|e| InternalError::database("save_foo", e))
    }
}
