//! Board engine: partitions tickets into columns and orders each column.
//!
//! The engine is a pair of pure functions composed in sequence,
//! `order(group(tickets, group_by), order_by)`. It performs no I/O and holds
//! no state, so it can be called from any number of request handlers at once.
//! Column order for known keys is a separate pass ([`KeyOrder`]).

mod collate;
mod engine;
mod key_order;
mod keys;

pub use collate::compare_titles;
pub use engine::{group, order, view, GroupedTickets};
pub use key_order::{BoardLayout, KeyOrder};
pub use keys::{GroupKey, GroupValue, OrderKey, ViewSelection};

use thiserror::Error;

/// Errors raised while interpreting board selectors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("Unsupported group key '{0}', expected one of: status, userId, priority")]
    InvalidGroupKey(String),

    #[error("Unsupported order key '{0}', expected one of: priority, title")]
    InvalidOrderKey(String),
}
