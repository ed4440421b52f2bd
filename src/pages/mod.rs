//! Pages
//!
//! One component per URL. `local` is self-contained; the others talk to the API.

mod local;
mod login;
mod register;
mod todos;

pub use local::LocalApp;
pub use login::LoginPage;
pub use register::RegisterPage;
pub use todos::TodosPage;

use todo_core::{ClientConfig, Session, SessionCache, TodoResult};

use crate::routes::{redirect, Page};
use crate::storage::BrowserStorage;

fn session_cache(config: &ClientConfig) -> SessionCache<BrowserStorage> {
    SessionCache::new(BrowserStorage::open(), config.session_key.clone())
}

/// Cache the session and move on to the to-do page
fn start_session(config: &ClientConfig, session: &Session) -> TodoResult<()> {
    session_cache(config).save(session)?;
    log::info!("Session started for {}", session.email);
    redirect(Page::Todos);
    Ok(())
}
