// Services layer - Business logic
pub mod foo_service;

pub use foo_service::FooService;
