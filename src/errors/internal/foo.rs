use thiserror::Error;

#[derive(Error, Debug)]
pub enum FooError {
    #[error("Foo not found with id: {id}")]
    NotFound { id: i64 },
}
