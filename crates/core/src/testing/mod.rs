//! Testing utilities and mock implementations.
//!
//! This module provides a mock `TicketSource` and payload fixtures, so the
//! feed and the HTTP API can be exercised without a remote endpoint.
//!
//! # Example
//!
//! ```rust,ignore
//! use ticketboard_core::testing::{fixtures, MockTicketSource};
//!
//! let source = MockTicketSource::with_payload(fixtures::sample_payload());
//! let feed = TicketFeed::new(Arc::new(source));
//! feed.refresh().await?;
//! ```

mod mock_source;

pub use mock_source::MockTicketSource;

/// Test fixtures and helper functions.
pub mod fixtures {
    use crate::ticket::{Ticket, TicketPayload, User};

    /// Create a test ticket with every grouping attribute set.
    pub fn ticket(id: &str, title: &str, status: &str, user_id: &str, priority: u8) -> Ticket {
        Ticket::new(id, title)
            .with_status(status)
            .with_user(user_id)
            .with_priority(priority)
            .with_tag("Feature Request")
    }

    /// A small board resembling the remote assignment payload.
    ///
    /// Statuses: Todo (3), In progress (2), Backlog (1), plus one ticket
    /// without status. Users: usr-1 (3), usr-2 (2), usr-3 (2).
    pub fn sample_tickets() -> Vec<Ticket> {
        vec![
            ticket("CAM-1", "Update User Profile Page UI", "Todo", "usr-1", 4),
            ticket("CAM-2", "Add Multi-Language Support", "In progress", "usr-2", 3),
            ticket("CAM-3", "Optimize Database Queries", "In progress", "usr-2", 1),
            ticket("CAM-4", "Implement Email Notification System", "Todo", "usr-1", 3),
            ticket("CAM-5", "Enhance Search Functionality", "Todo", "usr-3", 0),
            ticket("CAM-6", "Third-Party Payment Gateway", "Backlog", "usr-3", 2),
            Ticket::new("CAM-7", "Create Onboarding Tutorial")
                .with_user("usr-1")
                .with_priority(1),
        ]
    }

    pub fn sample_users() -> Vec<User> {
        vec![
            User::new("usr-1", "Anoop Sharma"),
            User::new("usr-2", "Yogesh"),
            User::new("usr-3", "Shankar Kumar"),
        ]
    }

    pub fn sample_payload() -> TicketPayload {
        TicketPayload::new(sample_tickets(), sample_users())
    }
}
