//! Mock ticket source for testing.

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::source::{SourceError, TicketSource};
use crate::ticket::TicketPayload;

/// Mock implementation of the TicketSource trait.
///
/// Provides controllable behavior for testing:
/// - Return a configurable payload
/// - Fail the next fetch with a given error
/// - Count fetches for assertions
///
/// # Example
///
/// ```rust,ignore
/// use ticketboard_core::testing::{fixtures, MockTicketSource};
///
/// let source = MockTicketSource::with_payload(fixtures::sample_payload());
/// source.fail_next(SourceError::Timeout).await;
///
/// assert!(source.fetch().await.is_err());
/// assert!(source.fetch().await.is_ok());
/// assert_eq!(source.fetch_count(), 2);
/// ```
#[derive(Debug, Default)]
pub struct MockTicketSource {
    /// Payload returned by successful fetches.
    payload: Arc<RwLock<TicketPayload>>,
    /// If set, the next fetch fails with this error.
    next_error: Arc<RwLock<Option<SourceError>>>,
    /// Number of fetches made.
    fetches: AtomicUsize,
}

impl MockTicketSource {
    /// Create a mock source with an empty payload.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mock source with a predefined payload.
    pub fn with_payload(payload: TicketPayload) -> Self {
        Self {
            payload: Arc::new(RwLock::new(payload)),
            ..Self::default()
        }
    }

    /// Replace the payload returned by subsequent fetches.
    pub async fn set_payload(&self, payload: TicketPayload) {
        *self.payload.write().await = payload;
    }

    /// Make the next fetch fail.
    pub async fn fail_next(&self, error: SourceError) {
        *self.next_error.write().await = Some(error);
    }

    pub fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TicketSource for MockTicketSource {
    fn name(&self) -> &str {
        "mock"
    }

    async fn fetch(&self) -> Result<TicketPayload, SourceError> {
        self.fetches.fetch_add(1, Ordering::SeqCst);

        if let Some(error) = self.next_error.write().await.take() {
            return Err(error);
        }

        let payload = self.payload.read().await.clone();
        payload.validate()?;
        Ok(payload)
    }
}
