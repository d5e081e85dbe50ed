// Authentication and path-based access control
pub mod access_policy;
pub mod principal;
pub mod user_directory;

pub use access_policy::{AccessPolicy, Decision, Requirement};
pub use principal::Principal;
pub use user_directory::UserDirectory;
