//! Cost ingestion handlers.

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use chrono::Utc;

use cost_manager_core::{CostInput, CostRecord};

use crate::error::ApiError;
use crate::ledger;
use crate::state::AppState;

/// Record a new cost item.
///
/// Responds `201 Created` with the stored record, including its assigned id
/// and resolved date.
pub async fn add_cost(
    State(state): State<Arc<AppState>>,
    body: Result<Json<CostInput>, JsonRejection>,
) -> Result<(StatusCode, Json<CostRecord>), ApiError> {
    let Json(input) = body?;
    let cost = input.validate()?;

    let record = ledger::add_cost(state.store.as_ref(), cost, Utc::now())?;

    Ok((StatusCode::CREATED, Json(record)))
}
