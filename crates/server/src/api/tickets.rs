//! Ticket API handlers.

use axum::{extract::State, http::StatusCode, Json};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::Arc;
use ticketboard_core::{Ticket, User};
use tracing::info;

use super::board::{require_snapshot, ApiError, ErrorResponse};
use crate::state::AppState;

/// Response for listing tickets
#[derive(Debug, Serialize)]
pub struct ListTicketsResponse {
    pub generation: u64,
    pub fetched_at: DateTime<Utc>,
    pub source: String,
    pub total: usize,
    pub tickets: Vec<Ticket>,
    pub users: Vec<User>,
}

/// Response for a successful refresh
#[derive(Debug, Serialize)]
pub struct RefreshResponse {
    pub generation: u64,
    pub fetched_at: DateTime<Utc>,
    pub tickets: usize,
}

/// Tickets of the current snapshot, in source order
pub async fn list_tickets(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ListTicketsResponse>, ApiError> {
    let snapshot = require_snapshot(&state).await?;

    Ok(Json(ListTicketsResponse {
        generation: snapshot.generation,
        fetched_at: snapshot.fetched_at,
        source: snapshot.source.clone(),
        total: snapshot.tickets.len(),
        tickets: snapshot.tickets.clone(),
        users: snapshot.users.clone(),
    }))
}

/// Re-fetch from the configured source
pub async fn refresh(State(state): State<Arc<AppState>>) -> Result<Json<RefreshResponse>, ApiError> {
    info!("Refresh requested for source {}", state.feed().source_name());

    match state.feed().refresh().await {
        Ok(snapshot) => Ok(Json(RefreshResponse {
            generation: snapshot.generation,
            fetched_at: snapshot.fetched_at,
            tickets: snapshot.tickets.len(),
        })),
        Err(e) => Err((
            StatusCode::BAD_GATEWAY,
            Json(ErrorResponse::message(e.to_string())),
        )),
    }
}
