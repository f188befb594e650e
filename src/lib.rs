//! Storefront console
//!
//! A typed client for the storefront REST backend. Three screens (clients,
//! products, sales) keep local state in sync with the backend by replacing
//! their lists wholesale after every successful fetch.

pub mod api;
pub mod config;
pub mod console;
pub mod errors;
pub mod models;
pub mod screens;

pub use api::ApiClient;
pub use config::Config;
pub use errors::ApiError;
