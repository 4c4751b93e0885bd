//! Team information.

use std::sync::Arc;

use axum::extract::State;
use axum::Json;

use crate::config::TeamMember;
use crate::state::AppState;

/// List the developers of the service.
pub async fn about(State(state): State<Arc<AppState>>) -> Json<Vec<TeamMember>> {
    Json(state.config.team.clone())
}
