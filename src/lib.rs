// Library exports for the binary and integration tests

pub mod api;
pub mod app;
pub mod app_data;
pub mod auth;
pub mod cli;
pub mod config;
pub mod errors;
pub mod mappers;
pub mod services;
pub mod stores;
pub mod types;
pub mod validation;

#[cfg(test)]
mod test;
