// API layer - HTTP endpoints
pub mod foo;
pub mod health;
pub mod middleware;

pub use foo::FooApi;
pub use health::HealthApi;
