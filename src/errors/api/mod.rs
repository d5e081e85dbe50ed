// API-facing error types
pub mod foo;

pub use foo::FooApiError;

#[cfg(test)]
mod foo_test;
