//! User Repository
//!
//! Accounts are email + plaintext password rows.

use rusqlite::{params, ErrorCode, OptionalExtension};

use super::db::SharedConnection;
use crate::domain::{ServerError, ServerResult, Session};

pub struct UserRepository {
    conn: SharedConnection,
}

impl UserRepository {
    pub fn new(conn: SharedConnection) -> Self {
        Self { conn }
    }

    /// Insert a user; a taken email is a `Conflict`
    pub async fn create(&self, email: &str, password: &str) -> ServerResult<Session> {
        let conn = self.conn.lock().await;
        match conn.execute(
            "INSERT INTO users (email, password) VALUES (?1, ?2)",
            params![email, password],
        ) {
            Ok(_) => Ok(Session::new(conn.last_insert_rowid(), email)),
            Err(rusqlite::Error::SqliteFailure(e, _)) if e.code == ErrorCode::ConstraintViolation => Err(
                ServerError::Conflict("An account with this email already exists.".to_string()),
            ),
            Err(e) => Err(e.into()),
        }
    }

    /// User whose email and password both match exactly
    pub async fn find_by_credentials(&self, email: &str, password: &str) -> ServerResult<Option<Session>> {
        let conn = self.conn.lock().await;
        let session = conn
            .query_row(
                "SELECT id, email FROM users WHERE email = ?1 AND password = ?2",
                params![email, password],
                |row| Ok(Session::new(row.get::<_, i64>(0)?, row.get::<_, String>(1)?)),
            )
            .optional()?;
        Ok(session)
    }
}
