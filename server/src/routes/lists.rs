//! List / Item Handlers

use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::Utc;
use todo_core::validation::trimmed;

use super::{parse_id, AppState};
use crate::domain::{parse_body, ItemInput, ListInput, RemoteItem, RemoteList, ServerError, ServerResult};

pub async fn get_lists(State(state): State<AppState>, Path(id): Path<String>) -> ServerResult<Json<Vec<RemoteList>>> {
    let user_id = parse_id(&id)?;
    let lists = state.lists.list_by_user(user_id).await?;
    Ok(Json(lists))
}

pub async fn create_list(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Bytes,
) -> ServerResult<(StatusCode, Json<RemoteList>)> {
    let user_id = parse_id(&id)?;
    let input: ListInput = parse_body(&body)?;
    let title = trimmed(&input.title)
        .ok_or_else(|| ServerError::InvalidInput("List title is required.".to_string()))?;

    let list = state.lists.create(user_id, &title, Utc::now()).await?;
    tracing::info!("Created list {} for user {}", list.id, user_id);
    Ok((StatusCode::CREATED, Json(list)))
}

pub async fn create_item(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Bytes,
) -> ServerResult<(StatusCode, Json<RemoteItem>)> {
    let list_id = parse_id(&id)?;
    let input: ItemInput = parse_body(&body)?;
    let content = trimmed(&input.content)
        .ok_or_else(|| ServerError::InvalidInput("Item content is required.".to_string()))?;

    let item = state.lists.add_item(list_id, &content, Utc::now()).await?;
    Ok((StatusCode::CREATED, Json(item)))
}
