//! User handlers.

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use cost_manager_core::{CostError, User, UserId};
use cost_manager_store::Store;

use crate::error::ApiError;
use crate::state::AppState;

/// Create user request.
#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    /// Client-chosen id.
    pub id: Option<i64>,
    /// Given name.
    pub first_name: Option<String>,
    /// Family name.
    pub last_name: Option<String>,
}

/// Register a new user with a zero total.
pub async fn create_user(
    State(state): State<Arc<AppState>>,
    body: Result<Json<CreateUserRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<User>), ApiError> {
    let Json(body) = body?;

    let (Some(id), Some(first_name), Some(last_name)) = (body.id, body.first_name, body.last_name)
    else {
        return Err(ApiError::BadRequest(
            "id, first_name and last_name are required".into(),
        ));
    };

    let user = User::new(UserId::new(id), first_name.trim(), last_name.trim());
    state.store.create_user(&user)?;

    tracing::info!(user_id = %user.id, "User created");

    Ok((StatusCode::CREATED, Json(user)))
}

/// Get a user and their running total.
pub async fn get_user(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<User>, ApiError> {
    let user_id: UserId = id.parse().map_err(CostError::from)?;

    let user = state
        .store
        .get_user(user_id)?
        .ok_or(CostError::UserNotFound(user_id))?;

    Ok(Json(user))
}
