//! List Repository
//!
//! Lists and their items. Timestamps are stored as RFC 3339 text with
//! microsecond precision so they sort lexicographically.

use chrono::{DateTime, SecondsFormat, Utc};
use rusqlite::types::Type;
use rusqlite::{params, Connection, OptionalExtension, Row};

use super::db::SharedConnection;
use crate::domain::{RemoteItem, RemoteList, ServerError, ServerResult, MAX_ITEMS};

pub struct ListRepository {
    conn: SharedConnection,
}

impl ListRepository {
    pub fn new(conn: SharedConnection) -> Self {
        Self { conn }
    }

    /// Lists of a user, newest first, each with its items oldest first
    pub async fn list_by_user(&self, user_id: i64) -> ServerResult<Vec<RemoteList>> {
        let conn = self.conn.lock().await;
        let mut stmt = conn.prepare(
            "SELECT id, user_id, title, created_at FROM todo_lists
             WHERE user_id = ?1 ORDER BY created_at DESC, id ASC",
        )?;
        let mut lists = stmt
            .query_map(params![user_id], row_to_list)?
            .collect::<Result<Vec<_>, _>>()?;

        for list in &mut lists {
            let list_id = record_id(&list.id)?;
            list.items = items_of(&conn, list_id)?;
        }
        Ok(lists)
    }

    /// Create an empty list for an existing user
    pub async fn create(&self, user_id: i64, title: &str, created_at: DateTime<Utc>) -> ServerResult<RemoteList> {
        let conn = self.conn.lock().await;
        let user_exists = conn
            .query_row("SELECT 1 FROM users WHERE id = ?1", params![user_id], |_| Ok(()))
            .optional()?
            .is_some();
        if !user_exists {
            return Err(ServerError::NotFound("User not found.".to_string()));
        }

        conn.execute(
            "INSERT INTO todo_lists (user_id, title, created_at) VALUES (?1, ?2, ?3)",
            params![user_id, title, format_timestamp(created_at)],
        )?;
        Ok(RemoteList {
            id: conn.last_insert_rowid().into(),
            user_id: Some(user_id.into()),
            title: title.to_string(),
            created_at,
            items: Vec::new(),
        })
    }

    /// Append an item, refusing once the list holds `MAX_ITEMS`
    ///
    /// The count check and the insert happen under one lock.
    pub async fn add_item(&self, list_id: i64, content: &str, created_at: DateTime<Utc>) -> ServerResult<RemoteItem> {
        let conn = self.conn.lock().await;
        let list_exists = conn
            .query_row("SELECT 1 FROM todo_lists WHERE id = ?1", params![list_id], |_| Ok(()))
            .optional()?
            .is_some();
        if !list_exists {
            return Err(ServerError::NotFound("List not found.".to_string()));
        }

        let count: i64 = conn.query_row(
            "SELECT COUNT(*) FROM todo_items WHERE list_id = ?1",
            params![list_id],
            |row| row.get(0),
        )?;
        if count >= MAX_ITEMS as i64 {
            tracing::debug!("List {} is full", list_id);
            return Err(ServerError::InvalidInput(format!(
                "Each list is limited to {} items.",
                MAX_ITEMS
            )));
        }

        conn.execute(
            "INSERT INTO todo_items (list_id, content, created_at) VALUES (?1, ?2, ?3)",
            params![list_id, content, format_timestamp(created_at)],
        )?;
        Ok(RemoteItem {
            id: Some(conn.last_insert_rowid().into()),
            list_id: Some(list_id.into()),
            content: content.to_string(),
            created_at: Some(created_at),
        })
    }
}

fn items_of(conn: &Connection, list_id: i64) -> ServerResult<Vec<RemoteItem>> {
    let mut stmt = conn.prepare(
        "SELECT id, list_id, content, created_at FROM todo_items
         WHERE list_id = ?1 ORDER BY created_at ASC, id ASC",
    )?;
    let items = stmt
        .query_map(params![list_id], row_to_item)?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(items)
}

fn row_to_list(row: &Row<'_>) -> rusqlite::Result<RemoteList> {
    Ok(RemoteList {
        id: row.get::<_, i64>(0)?.into(),
        user_id: Some(row.get::<_, i64>(1)?.into()),
        title: row.get(2)?,
        created_at: parse_timestamp(3, &row.get::<_, String>(3)?)?,
        items: Vec::new(),
    })
}

fn row_to_item(row: &Row<'_>) -> rusqlite::Result<RemoteItem> {
    Ok(RemoteItem {
        id: Some(row.get::<_, i64>(0)?.into()),
        list_id: Some(row.get::<_, i64>(1)?.into()),
        content: row.get(2)?,
        created_at: Some(parse_timestamp(3, &row.get::<_, String>(3)?)?),
    })
}

fn record_id(id: &todo_core::RecordId) -> ServerResult<i64> {
    match id {
        todo_core::RecordId::Int(id) => Ok(*id),
        todo_core::RecordId::Text(text) => Err(ServerError::Internal(format!("non-numeric row id {}", text))),
    }
}

fn format_timestamp(ts: DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Micros, true)
}

fn parse_timestamp(idx: usize, raw: &str) -> rusqlite::Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .map(|ts| ts.with_timezone(&Utc))
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, Box::new(e)))
}
