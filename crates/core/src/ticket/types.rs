//! Core ticket data types.

use std::collections::HashSet;

use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

/// Highest priority value a ticket may carry (urgent).
pub const MAX_PRIORITY: u8 = 4;

// ============================================================================
// Ticket
// ============================================================================

/// One unit of work as delivered by the remote source.
///
/// Tickets are read-only input for the board engine. The grouping attributes
/// (`status`, `user_id`, `priority`) are optional because the remote payload
/// is not guaranteed to carry them; blank strings are read as missing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ticket {
    /// Stable unique identifier (e.g. "CAM-1").
    pub id: String,
    /// Display text, used as a sort key.
    #[serde(default)]
    pub title: String,
    /// Free-text labels, display only.
    #[serde(default, deserialize_with = "deserialize_tags")]
    pub tag: Vec<String>,
    /// Workflow status label ("Todo", "In progress", ...).
    #[serde(
        default,
        deserialize_with = "deserialize_non_blank",
        skip_serializing_if = "Option::is_none"
    )]
    pub status: Option<String>,
    /// Assignee identifier.
    #[serde(
        default,
        deserialize_with = "deserialize_non_blank",
        skip_serializing_if = "Option::is_none"
    )]
    pub user_id: Option<String>,
    /// Priority 0-4 (0 = no priority, 4 = urgent).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<u8>,
}

impl Ticket {
    /// Create a ticket with only an id and a title.
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            tag: Vec::new(),
            status: None,
            user_id: None,
            priority: None,
        }
    }

    /// Set the status.
    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    /// Set the assignee.
    pub fn with_user(mut self, user_id: impl Into<String>) -> Self {
        self.user_id = Some(user_id.into());
        self
    }

    /// Set the priority.
    pub fn with_priority(mut self, priority: u8) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Add a tag.
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag.push(tag.into());
        self
    }
}

/// The remote payload carries `tag` as a list, older dumps as a bare string.
#[derive(Deserialize)]
#[serde(untagged)]
enum TagField {
    One(String),
    Many(Vec<String>),
}

fn deserialize_tags<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<TagField>::deserialize(deserializer)? {
        None => Vec::new(),
        Some(TagField::One(tag)) => vec![tag],
        Some(TagField::Many(tags)) => tags,
    })
}

fn deserialize_non_blank<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|v| !v.trim().is_empty()))
}

// ============================================================================
// Users
// ============================================================================

/// An assignee record. Only used to label assignee columns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub available: bool,
}

impl User {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            available: false,
        }
    }
}

// ============================================================================
// Payload
// ============================================================================

/// Problems found while validating a decoded payload.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PayloadError {
    #[error("ticket at index {index} has an empty id")]
    EmptyId { index: usize },

    #[error("duplicate ticket id: {0}")]
    DuplicateId(String),

    #[error("ticket {id} has priority {priority}, expected 0..={max}", max = MAX_PRIORITY)]
    PriorityOutOfRange { id: String, priority: u8 },
}

/// Shape of the remote response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicketPayload {
    pub tickets: Vec<Ticket>,
    #[serde(default)]
    pub users: Vec<User>,
}

impl TicketPayload {
    pub fn new(tickets: Vec<Ticket>, users: Vec<User>) -> Self {
        Self { tickets, users }
    }

    /// Check the invariants the board relies on: non-empty, unique ids and
    /// priorities within range.
    pub fn validate(&self) -> Result<(), PayloadError> {
        let mut seen = HashSet::with_capacity(self.tickets.len());
        for (index, ticket) in self.tickets.iter().enumerate() {
            if ticket.id.trim().is_empty() {
                return Err(PayloadError::EmptyId { index });
            }
            if !seen.insert(ticket.id.as_str()) {
                return Err(PayloadError::DuplicateId(ticket.id.clone()));
            }
            if let Some(priority) = ticket.priority {
                if priority > MAX_PRIORITY {
                    return Err(PayloadError::PriorityOutOfRange {
                        id: ticket.id.clone(),
                        priority,
                    });
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_remote_ticket() {
        let json = r#"{
            "id": "CAM-1",
            "title": "Update User Profile Page UI",
            "tag": ["Feature request"],
            "userId": "usr-1",
            "status": "Todo",
            "priority": 4
        }"#;
        let ticket: Ticket = serde_json::from_str(json).unwrap();
        assert_eq!(ticket.id, "CAM-1");
        assert_eq!(ticket.tag, vec!["Feature request".to_string()]);
        assert_eq!(ticket.user_id.as_deref(), Some("usr-1"));
        assert_eq!(ticket.status.as_deref(), Some("Todo"));
        assert_eq!(ticket.priority, Some(4));
    }

    #[test]
    fn test_deserialize_single_string_tag() {
        let json = r#"{"id": "1", "title": "Bug", "tag": "x"}"#;
        let ticket: Ticket = serde_json::from_str(json).unwrap();
        assert_eq!(ticket.tag, vec!["x".to_string()]);
    }

    #[test]
    fn test_deserialize_missing_and_null_attributes() {
        let json = r#"{"id": "1", "title": "Bug", "status": null, "tag": null}"#;
        let ticket: Ticket = serde_json::from_str(json).unwrap();
        assert!(ticket.status.is_none());
        assert!(ticket.user_id.is_none());
        assert!(ticket.priority.is_none());
        assert!(ticket.tag.is_empty());
    }

    #[test]
    fn test_blank_status_is_missing() {
        let json = r#"{"id": "1", "title": "Bug", "status": "  ", "userId": ""}"#;
        let ticket: Ticket = serde_json::from_str(json).unwrap();
        assert!(ticket.status.is_none());
        assert!(ticket.user_id.is_none());
    }

    #[test]
    fn test_negative_priority_rejected() {
        let json = r#"{"id": "1", "title": "Bug", "priority": -1}"#;
        assert!(serde_json::from_str::<Ticket>(json).is_err());
    }

    #[test]
    fn test_serialize_uses_camel_case() {
        let ticket = Ticket::new("1", "Bug").with_user("u1");
        let value = serde_json::to_value(&ticket).unwrap();
        assert_eq!(value["userId"], "u1");
        assert!(value.get("status").is_none());
    }

    #[test]
    fn test_payload_without_users() {
        let json = r#"{"tickets": [{"id": "1", "title": "Bug"}]}"#;
        let payload: TicketPayload = serde_json::from_str(json).unwrap();
        assert_eq!(payload.tickets.len(), 1);
        assert!(payload.users.is_empty());
    }

    #[test]
    fn test_validate_ok() {
        let payload = TicketPayload::new(
            vec![
                Ticket::new("1", "Bug").with_priority(0),
                Ticket::new("2", "Alpha").with_priority(4),
            ],
            vec![],
        );
        assert!(payload.validate().is_ok());
    }

    #[test]
    fn test_validate_duplicate_id() {
        let payload = TicketPayload::new(
            vec![Ticket::new("1", "Bug"), Ticket::new("1", "Alpha")],
            vec![],
        );
        assert_eq!(
            payload.validate(),
            Err(PayloadError::DuplicateId("1".to_string()))
        );
    }

    #[test]
    fn test_validate_empty_id() {
        let payload = TicketPayload::new(vec![Ticket::new("1", "a"), Ticket::new(" ", "b")], vec![]);
        assert_eq!(payload.validate(), Err(PayloadError::EmptyId { index: 1 }));
    }

    #[test]
    fn test_validate_priority_out_of_range() {
        let payload = TicketPayload::new(vec![Ticket::new("1", "Bug").with_priority(9)], vec![]);
        assert!(matches!(
            payload.validate(),
            Err(PayloadError::PriorityOutOfRange { priority: 9, .. })
        ));
    }
}
