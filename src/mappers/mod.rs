// Mappers layer - conversions between wire models and entities
pub mod foo_mapper;

pub use foo_mapper::FooMapper;
