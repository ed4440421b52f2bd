//! Repository Layer
//!
//! SQLite-backed data access.

mod db;
mod list_repo;
mod user_repo;

#[cfg(test)]
mod tests;

pub use db::{open_db, open_in_memory, SharedConnection};
pub use list_repo::ListRepository;
pub use user_repo::UserRepository;
