// Library exports for the discussion board HTTP service
pub mod config;
pub mod errors;
pub mod models;
pub mod server;
pub mod validate;
