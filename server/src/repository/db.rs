//! Database Connection and Setup
//!
//! Opens the SQLite database and creates the schema.

use std::path::Path;
use std::sync::Arc;

use rusqlite::Connection;
use tokio::sync::Mutex;

use crate::domain::ServerResult;

/// Connection shared by all repositories
pub type SharedConnection = Arc<Mutex<Connection>>;

/// Open (or create) the database file at `path`
pub fn open_db(path: &Path) -> ServerResult<SharedConnection> {
    let conn = Connection::open(path)?;
    init_schema(&conn)?;
    tracing::info!("Database ready at {}", path.display());
    Ok(Arc::new(Mutex::new(conn)))
}

/// Fresh in-memory database, used by tests
pub fn open_in_memory() -> ServerResult<SharedConnection> {
    let conn = Connection::open_in_memory()?;
    init_schema(&conn)?;
    Ok(Arc::new(Mutex::new(conn)))
}

fn init_schema(conn: &Connection) -> ServerResult<()> {
    conn.execute_batch(
        "PRAGMA foreign_keys = ON;

        CREATE TABLE IF NOT EXISTS users (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            email TEXT NOT NULL UNIQUE,
            password TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS todo_lists (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            user_id INTEGER NOT NULL,
            title TEXT NOT NULL,
            created_at TEXT NOT NULL,
            FOREIGN KEY (user_id) REFERENCES users(id) ON DELETE CASCADE
        );

        CREATE TABLE IF NOT EXISTS todo_items (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            list_id INTEGER NOT NULL,
            content TEXT NOT NULL,
            created_at TEXT NOT NULL,
            FOREIGN KEY (list_id) REFERENCES todo_lists(id) ON DELETE CASCADE
        );

        CREATE INDEX IF NOT EXISTS idx_lists_user ON todo_lists(user_id);
        CREATE INDEX IF NOT EXISTS idx_items_list ON todo_items(list_id);",
    )?;
    Ok(())
}
