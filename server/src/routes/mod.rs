//! HTTP Routes
//!
//! `/api` handlers plus static file serving for the client pages.

mod auth;
mod lists;


use std::path::Path;
use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use tower_http::services::{ServeDir, ServeFile};

use crate::domain::{ServerError, ServerResult};
use crate::repository::{ListRepository, SharedConnection, UserRepository};

/// State shared by every handler
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<UserRepository>,
    pub lists: Arc<ListRepository>,
}

impl AppState {
    pub fn new(conn: SharedConnection) -> Self {
        Self {
            users: Arc::new(UserRepository::new(conn.clone())),
            lists: Arc::new(ListRepository::new(conn)),
        }
    }
}

/// Full application router
///
/// Unknown `/api` paths answer with a JSON 404; everything else is looked up
/// in `public_dir`. Paths with no file behind them (`/login.html`, ...) get
/// `index.html`, and the client picks the page from the URL.
pub fn router(state: AppState, public_dir: &Path) -> Router {
    let api = Router::new()
        .route("/register", post(auth::register))
        .route("/login", post(auth::login))
        .route("/users/{id}/lists", get(lists::get_lists).post(lists::create_list))
        .route("/lists/{id}/items", post(lists::create_item))
        .fallback(not_found)
        .with_state(state);

    Router::new()
        .nest("/api", api)
        .fallback_service(ServeDir::new(public_dir).fallback(ServeFile::new(public_dir.join("index.html"))))
}

async fn not_found() -> ServerError {
    ServerError::not_found()
}

/// Numeric id from a path segment; anything else is a 404
fn parse_id(raw: &str) -> ServerResult<i64> {
    raw.parse().map_err(|_| ServerError::not_found())
}
