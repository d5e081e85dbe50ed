// Stores layer - Data access and repository pattern
pub mod foo_store;

pub use foo_store::{FooRepository, FooStore};
