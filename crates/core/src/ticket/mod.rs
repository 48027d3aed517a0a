//! Ticket data model as delivered by the remote source.

mod types;

pub use types::{PayloadError, Ticket, TicketPayload, User, MAX_PRIORITY};
