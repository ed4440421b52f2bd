//! Register / Login Handlers

use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use todo_core::normalize_email;

use super::AppState;
use crate::domain::{parse_body, CredentialsInput, ServerError, ServerResult, Session};

const MIN_PASSWORD_LEN: usize = 6;

pub async fn register(State(state): State<AppState>, body: Bytes) -> ServerResult<(StatusCode, Json<Session>)> {
    let input: CredentialsInput = parse_body(&body)?;
    let email = normalize_email(&input.email);
    if email.is_empty() || !email.contains('@') || input.password.chars().count() < MIN_PASSWORD_LEN {
        return Err(ServerError::InvalidInput(
            "Email and password (min 6 chars) are required.".to_string(),
        ));
    }

    let session = state.users.create(&email, &input.password).await?;
    tracing::info!("Registered user {} ({})", session.id, email);
    Ok((StatusCode::CREATED, Json(session)))
}

pub async fn login(State(state): State<AppState>, body: Bytes) -> ServerResult<Json<Session>> {
    let input: CredentialsInput = parse_body(&body)?;
    let email = normalize_email(&input.email);

    match state.users.find_by_credentials(&email, &input.password).await? {
        Some(session) => Ok(Json(session)),
        None => {
            tracing::debug!("Rejected login for {}", email);
            Err(ServerError::Unauthorized("Invalid email or password.".to_string()))
        }
    }
}
