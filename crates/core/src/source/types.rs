//! Types for ticket source operations.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use thiserror::Error;

use crate::ticket::{PayloadError, Ticket, TicketPayload, User};

/// Errors that can occur while fetching tickets.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SourceError {
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    #[error("Request timeout")]
    Timeout,

    #[error("HTTP {status}: {body}")]
    HttpStatus { status: u16, body: String },

    #[error("Malformed payload: {0}")]
    MalformedPayload(String),

    #[error("I/O error: {0}")]
    Io(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<PayloadError> for SourceError {
    fn from(e: PayloadError) -> Self {
        SourceError::MalformedPayload(e.to_string())
    }
}

/// Trait for ticket sources.
#[async_trait]
pub trait TicketSource: Send + Sync {
    /// Short name used in logs and metric labels.
    fn name(&self) -> &str;

    /// Fetch and validate the full ticket payload.
    async fn fetch(&self) -> Result<TicketPayload, SourceError>;
}

/// Decode a JSON body into a validated payload.
pub fn decode_payload(body: &str) -> Result<TicketPayload, SourceError> {
    let payload: TicketPayload = serde_json::from_str(body)
        .map_err(|e| SourceError::MalformedPayload(format!("Failed to parse payload: {}", e)))?;
    payload.validate()?;
    Ok(payload)
}

/// An immutable, successfully loaded ticket collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    /// Increases by one on every successful load.
    pub generation: u64,
    pub fetched_at: DateTime<Utc>,
    pub source: String,
    pub tickets: Vec<Ticket>,
    pub users: Vec<User>,
}

/// Load state of the ticket collection.
///
/// The board is only computed from `Ready`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState {
    Loading,
    Failed { message: String },
    Ready(Arc<Snapshot>),
}

impl LoadState {
    /// Returns the string representation for API responses.
    pub fn as_str(&self) -> &'static str {
        match self {
            LoadState::Loading => "loading",
            LoadState::Failed { .. } => "error",
            LoadState::Ready(_) => "ready",
        }
    }

    pub fn snapshot(&self) -> Option<&Arc<Snapshot>> {
        match self {
            LoadState::Ready(snapshot) => Some(snapshot),
            _ => None,
        }
    }
}
