//! Simple To-Do Server
//!
//! Layered architecture:
//! - domain: errors and request bodies (entities come from `todo-core`)
//! - repository: SQLite data access
//! - routes: axum handlers for the `/api` surface

pub mod config;
pub mod domain;
pub mod repository;
pub mod routes;

pub use config::ServerConfig;
pub use routes::{router, AppState};
