//! Prometheus metrics for core components.
//!
//! This module provides metrics for:
//! - Ticket source (fetch attempts, fetch duration, snapshot size)
//! - Board views (by grouping and ordering selector)

use once_cell::sync::Lazy;
use prometheus::{HistogramOpts, HistogramVec, IntCounterVec, IntGauge, Opts};

// =============================================================================
// Ticket source
// =============================================================================

/// Fetch attempts by source and result.
pub static FETCH_ATTEMPTS: Lazy<IntCounterVec> = Lazy::new(|| {
    IntCounterVec::new(
        Opts::new("ticketboard_fetch_attempts_total", "Total ticket fetch attempts"),
        &["source", "result"], // result: "ok", "error"
    )
    .unwrap()
});

/// Fetch duration in seconds.
pub static FETCH_DURATION: Lazy<HistogramVec> = Lazy::new(|| {
    HistogramVec::new(
        HistogramOpts::new(
            "ticketboard_fetch_duration_seconds",
            "Duration of a ticket fetch",
        )
        .buckets(vec![0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 10.0, 30.0]),
        &["source"],
    )
    .unwrap()
});

/// Tickets in the current snapshot.
pub static SNAPSHOT_TICKETS: Lazy<IntGauge> = Lazy::new(|| {
    IntGauge::new(
        "ticketboard_snapshot_tickets",
        "Number of tickets in the current snapshot",
    )
    .unwrap()
});

// =============================================================================
// Board
// =============================================================================

/// Board views computed, by selector.
pub static BOARD_VIEWS: Lazy<IntCounterVec> = Lazy::new(|| {
    IntCounterVec::new(
        Opts::new("ticketboard_board_views_total", "Total board views computed"),
        &["group_by", "order_by"], // order_by "none" when the selector was ignored
    )
    .unwrap()
});

// =============================================================================
// Helper functions
// =============================================================================

/// Get all core metrics for registration in a registry.
pub fn all_metrics() -> Vec<Box<dyn prometheus::core::Collector>> {
    vec![
        Box::new(FETCH_ATTEMPTS.clone()),
        Box::new(FETCH_DURATION.clone()),
        Box::new(SNAPSHOT_TICKETS.clone()),
        Box::new(BOARD_VIEWS.clone()),
    ]
}
