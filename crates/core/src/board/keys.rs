//! Grouping and ordering selectors.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize, Serializer};
use tracing::warn;

use super::BoardError;
use crate::ticket::Ticket;

/// Ticket attribute used to partition the board into columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum GroupKey {
    Status,
    #[serde(alias = "user_id", alias = "user")]
    UserId,
    Priority,
}

impl GroupKey {
    pub const ALL: [GroupKey; 3] = [GroupKey::Status, GroupKey::UserId, GroupKey::Priority];

    /// Returns the selector name used on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            GroupKey::Status => "status",
            GroupKey::UserId => "userId",
            GroupKey::Priority => "priority",
        }
    }

    /// Read the selected attribute of a ticket as an opaque bucket key.
    ///
    /// Priorities are rendered as their decimal digit so that every key is a
    /// plain string. A missing attribute maps to [`GroupValue::Ungrouped`].
    pub fn value_of(&self, ticket: &Ticket) -> GroupValue {
        let key = match self {
            GroupKey::Status => ticket.status.clone(),
            GroupKey::UserId => ticket.user_id.clone(),
            GroupKey::Priority => ticket.priority.map(|p| p.to_string()),
        };
        key.map(GroupValue::Key).unwrap_or(GroupValue::Ungrouped)
    }
}

impl fmt::Display for GroupKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GroupKey {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "status" => Ok(GroupKey::Status),
            "userId" | "user_id" | "user" => Ok(GroupKey::UserId),
            "priority" => Ok(GroupKey::Priority),
            other => Err(BoardError::InvalidGroupKey(other.to_string())),
        }
    }
}

/// Ticket attribute used to sort tickets inside each column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderKey {
    /// Highest priority first.
    Priority,
    /// Title, ascending.
    Title,
}

impl OrderKey {
    pub const ALL: [OrderKey; 2] = [OrderKey::Priority, OrderKey::Title];

    pub fn as_str(&self) -> &'static str {
        match self {
            OrderKey::Priority => "priority",
            OrderKey::Title => "title",
        }
    }

    /// Parse a selector, degrading an unsupported value to `None`.
    ///
    /// `None` makes [`super::order`] keep the grouped order.
    pub fn parse_lenient(raw: &str) -> Option<OrderKey> {
        match raw.parse() {
            Ok(key) => Some(key),
            Err(e) => {
                warn!(order_by = raw, "Ignoring ordering selector: {}", e);
                None
            }
        }
    }
}

impl fmt::Display for OrderKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderKey {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "priority" => Ok(OrderKey::Priority),
            "title" => Ok(OrderKey::Title),
            other => Err(BoardError::InvalidOrderKey(other.to_string())),
        }
    }
}

/// Bucket key derived from the grouping attribute.
///
/// The engine treats keys as opaque strings; `Ungrouped` is the sentinel for
/// tickets missing the attribute and never collides with a real value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum GroupValue {
    Key(String),
    Ungrouped,
}

impl GroupValue {
    pub fn key(value: impl Into<String>) -> Self {
        GroupValue::Key(value.into())
    }

    /// The key string, or `None` for the sentinel.
    pub fn as_key(&self) -> Option<&str> {
        match self {
            GroupValue::Key(key) => Some(key),
            GroupValue::Ungrouped => None,
        }
    }

    pub fn is_ungrouped(&self) -> bool {
        matches!(self, GroupValue::Ungrouped)
    }
}

impl fmt::Display for GroupValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GroupValue::Key(key) => f.write_str(key),
            GroupValue::Ungrouped => f.write_str("(ungrouped)"),
        }
    }
}

/// Serialized as the key string, the sentinel as `null`.
impl Serialize for GroupValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            GroupValue::Key(key) => serializer.serialize_some(key),
            GroupValue::Ungrouped => serializer.serialize_none(),
        }
    }
}

/// Explicit view state: which attribute groups the board and which one
/// orders each column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ViewSelection {
    pub group_by: GroupKey,
    /// `None` when the requested ordering was not recognized.
    pub order_by: Option<OrderKey>,
}

impl Default for ViewSelection {
    fn default() -> Self {
        Self {
            group_by: GroupKey::Status,
            order_by: Some(OrderKey::Priority),
        }
    }
}

impl ViewSelection {
    pub fn new(group_by: GroupKey, order_by: Option<OrderKey>) -> Self {
        Self { group_by, order_by }
    }

    /// Parse raw selector strings. An unsupported grouping is an error, an
    /// unsupported ordering degrades to the grouped order.
    pub fn parse(group_by: &str, order_by: &str) -> Result<Self, BoardError> {
        Ok(Self {
            group_by: group_by.parse()?,
            order_by: OrderKey::parse_lenient(order_by),
        })
    }
}
