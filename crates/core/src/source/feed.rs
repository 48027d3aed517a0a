//! Holds the current load state of a ticket source.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Instant;

use chrono::Utc;
use tokio::sync::RwLock;
use tracing::{info, warn};

use super::{LoadState, Snapshot, SourceError, TicketSource};
use crate::metrics::{FETCH_ATTEMPTS, FETCH_DURATION, SNAPSHOT_TICKETS};

/// A ticket source together with its last load outcome.
///
/// Starts in [`LoadState::Loading`]. A failed refresh only replaces the
/// state when no snapshot was ever loaded; otherwise the last snapshot stays
/// served and the error is returned to the caller.
pub struct TicketFeed {
    source: Arc<dyn TicketSource>,
    state: RwLock<LoadState>,
    generation: AtomicU64,
}

impl TicketFeed {
    pub fn new(source: Arc<dyn TicketSource>) -> Self {
        Self {
            source,
            state: RwLock::new(LoadState::Loading),
            generation: AtomicU64::new(0),
        }
    }

    pub fn source_name(&self) -> &str {
        self.source.name()
    }

    /// Current state. Snapshots are shared, so this is cheap.
    pub async fn state(&self) -> LoadState {
        self.state.read().await.clone()
    }

    /// Fetch from the source and publish the result.
    pub async fn refresh(&self) -> Result<Arc<Snapshot>, SourceError> {
        let name = self.source.name().to_string();
        let start = Instant::now();
        let result = self.source.fetch().await;
        FETCH_DURATION
            .with_label_values(&[name.as_str()])
            .observe(start.elapsed().as_secs_f64());

        match result {
            Ok(payload) => {
                FETCH_ATTEMPTS.with_label_values(&[name.as_str(), "ok"]).inc();
                let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
                let snapshot = Arc::new(Snapshot {
                    generation,
                    fetched_at: Utc::now(),
                    source: name,
                    tickets: payload.tickets,
                    users: payload.users,
                });

                let mut state = self.state.write().await;
                let newer = match &*state {
                    LoadState::Ready(current) => current.generation < generation,
                    _ => true,
                };
                if newer {
                    SNAPSHOT_TICKETS.set(snapshot.tickets.len() as i64);
                    *state = LoadState::Ready(Arc::clone(&snapshot));
                }
                info!(
                    generation,
                    tickets = snapshot.tickets.len(),
                    users = snapshot.users.len(),
                    "Loaded ticket snapshot"
                );
                Ok(snapshot)
            }
            Err(e) => {
                FETCH_ATTEMPTS.with_label_values(&[name.as_str(), "error"]).inc();
                let mut state = self.state.write().await;
                match &*state {
                    LoadState::Ready(current) => {
                        warn!(
                            "Ticket refresh failed, keeping generation {}: {}",
                            current.generation, e
                        );
                    }
                    _ => {
                        warn!("Ticket fetch failed: {}", e);
                        *state = LoadState::Failed {
                            message: e.to_string(),
                        };
                    }
                }
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{fixtures, MockTicketSource};

    #[tokio::test]
    async fn test_starts_loading() {
        let feed = TicketFeed::new(Arc::new(MockTicketSource::new()));
        assert_eq!(feed.state().await, LoadState::Loading);
    }

    #[tokio::test]
    async fn test_refresh_publishes_snapshot() {
        let source = Arc::new(MockTicketSource::with_payload(fixtures::sample_payload()));
        let feed = TicketFeed::new(source.clone());

        let snapshot = feed.refresh().await.unwrap();
        assert_eq!(snapshot.generation, 1);
        assert_eq!(snapshot.source, "mock");
        assert_eq!(snapshot.tickets.len(), fixtures::sample_payload().tickets.len());

        let state = feed.state().await;
        assert_eq!(state.snapshot().unwrap().generation, 1);
        assert_eq!(source.fetch_count(), 1);
    }

    #[tokio::test]
    async fn test_first_failure_is_error_state() {
        let source = Arc::new(MockTicketSource::new());
        source.fail_next(SourceError::Timeout).await;
        let feed = TicketFeed::new(source);

        let err = feed.refresh().await.unwrap_err();
        assert_eq!(err, SourceError::Timeout);
        assert_eq!(
            feed.state().await,
            LoadState::Failed {
                message: "Request timeout".to_string()
            }
        );
    }

    #[tokio::test]
    async fn test_failure_after_success_keeps_snapshot() {
        let source = Arc::new(MockTicketSource::with_payload(fixtures::sample_payload()));
        let feed = TicketFeed::new(source.clone());
        feed.refresh().await.unwrap();

        source
            .fail_next(SourceError::ConnectionFailed("reset".to_string()))
            .await;
        assert!(feed.refresh().await.is_err());

        let state = feed.state().await;
        assert_eq!(state.as_str(), "ready");
        assert_eq!(state.snapshot().unwrap().generation, 1);
    }

    #[tokio::test]
    async fn test_recovery_after_failure() {
        let source = Arc::new(MockTicketSource::with_payload(fixtures::sample_payload()));
        source.fail_next(SourceError::Timeout).await;
        let feed = TicketFeed::new(source);

        assert!(feed.refresh().await.is_err());
        let snapshot = feed.refresh().await.unwrap();
        assert_eq!(snapshot.generation, 1);
        assert_eq!(feed.state().await.as_str(), "ready");
    }
}
