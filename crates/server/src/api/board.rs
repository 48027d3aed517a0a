//! Board API handlers.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use ticketboard_core::{
    metrics::BOARD_VIEWS, Column, GroupKey, LoadState, OrderKey, Snapshot, ViewSelection,
};
use tracing::debug;

use crate::state::AppState;

// ============================================================================
// Request/Response Types
// ============================================================================

/// Query parameters for the board view
#[derive(Debug, Deserialize)]
pub struct BoardParams {
    /// Grouping attribute, defaults to the configured one
    pub group_by: Option<String>,
    /// Ordering attribute, defaults to the configured one
    pub order_by: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct BoardResponse {
    pub state: &'static str,
    pub generation: u64,
    pub fetched_at: DateTime<Utc>,
    pub group_by: GroupKey,
    /// `null` when the requested ordering was not recognized
    pub order_by: Option<OrderKey>,
    pub total: usize,
    pub columns: Arc<Vec<Column>>,
}

/// Error response
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Load state, present when no snapshot is available
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

pub type ApiError = (StatusCode, Json<ErrorResponse>);

impl ErrorResponse {
    pub fn message(error: impl Into<String>) -> Self {
        Self {
            state: None,
            error: Some(error.into()),
        }
    }
}

/// The current snapshot, or the response for a feed that has none.
pub async fn require_snapshot(state: &AppState) -> Result<Arc<Snapshot>, ApiError> {
    match state.load_state().await {
        LoadState::Ready(snapshot) => Ok(snapshot),
        LoadState::Loading => Err((
            StatusCode::SERVICE_UNAVAILABLE,
            Json(ErrorResponse {
                state: Some("loading"),
                error: None,
            }),
        )),
        LoadState::Failed { message } => Err((
            StatusCode::BAD_GATEWAY,
            Json(ErrorResponse {
                state: Some("error"),
                error: Some(message),
            }),
        )),
    }
}

fn selection(params: &BoardParams, defaults: ViewSelection) -> Result<ViewSelection, ApiError> {
    let group_by = match params.group_by.as_deref() {
        Some(raw) => raw.parse::<GroupKey>().map_err(|e| {
            (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::message(e.to_string())),
            )
        })?,
        None => defaults.group_by,
    };
    let order_by = match params.order_by.as_deref() {
        Some(raw) => OrderKey::parse_lenient(raw),
        None => defaults.order_by,
    };
    Ok(ViewSelection::new(group_by, order_by))
}

// ============================================================================
// Handlers
// ============================================================================

/// Grouped and ordered board columns
pub async fn get_board(
    State(state): State<Arc<AppState>>,
    Query(params): Query<BoardParams>,
) -> Result<Json<BoardResponse>, ApiError> {
    let selection = selection(&params, state.config().board.default_selection())?;
    let snapshot = require_snapshot(&state).await?;

    let columns = state.columns(&snapshot, selection).await;
    BOARD_VIEWS
        .with_label_values(&[
            selection.group_by.as_str(),
            selection.order_by.map(|o| o.as_str()).unwrap_or("none"),
        ])
        .inc();
    debug!(
        group_by = %selection.group_by,
        columns = columns.len(),
        generation = snapshot.generation,
        "Served board view"
    );

    Ok(Json(BoardResponse {
        state: "ready",
        generation: snapshot.generation,
        fetched_at: snapshot.fetched_at,
        group_by: selection.group_by,
        order_by: selection.order_by,
        total: snapshot.tickets.len(),
        columns,
    }))
}
