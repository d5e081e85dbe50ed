// Database entities - SeaORM models
pub mod foo;
