//! Label and icon lookup per group key.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::board::{GroupKey, GroupValue};
use crate::ticket::User;

/// Display label and icon identifier for one group key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelEntry {
    pub label: String,
    pub icon: String,
}

impl LabelEntry {
    pub fn new(label: impl Into<String>, icon: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            icon: icon.into(),
        }
    }
}

/// Result of a lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedLabel {
    pub label: String,
    pub icon: String,
    /// Whether the key matched a table entry.
    pub known: bool,
}

/// Lookup table from known key to label/icon, with an explicit fallback.
///
/// Lookups try an exact match first, then a case-insensitive one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelTable {
    entries: Vec<(String, LabelEntry)>,
    fallback_icon: String,
    ungrouped: LabelEntry,
}

impl LabelTable {
    /// Create an empty table whose unknown keys render with `fallback_icon`.
    pub fn new(fallback_icon: impl Into<String>) -> Self {
        Self {
            entries: Vec::new(),
            fallback_icon: fallback_icon.into(),
            ungrouped: LabelEntry::new("Ungrouped", "minus-circle"),
        }
    }

    /// Add or replace an entry.
    pub fn with_entry(
        mut self,
        key: impl Into<String>,
        label: impl Into<String>,
        icon: impl Into<String>,
    ) -> Self {
        let key = key.into();
        let entry = LabelEntry::new(label, icon);
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, existing)) => *existing = entry,
            None => self.entries.push((key, entry)),
        }
        self
    }

    pub fn with_ungrouped(mut self, label: impl Into<String>, icon: impl Into<String>) -> Self {
        self.ungrouped = LabelEntry::new(label, icon);
        self
    }

    /// Priority columns: 0 (no priority) to 4 (urgent).
    pub fn priority() -> Self {
        Self::new("question-circle")
            .with_entry("0", "No priority", "exclamation-triangle")
            .with_entry("1", "Low", "battery-empty")
            .with_entry("2", "Medium", "battery-half")
            .with_entry("3", "High", "battery-full")
            .with_entry("4", "Urgent", "exclamation-circle")
            .with_ungrouped("No priority set", "minus-circle")
    }

    pub fn status() -> Self {
        Self::new("question-circle")
            .with_entry("Backlog", "Backlog", "cog")
            .with_entry("Todo", "Todo", "circle")
            .with_entry("In progress", "In Progress", "spinner")
            .with_entry("Done", "Done", "check")
            .with_entry("Canceled", "Canceled", "times")
            .with_entry("Cancel", "Cancel", "times")
            .with_ungrouped("No status", "minus-circle")
    }

    /// Assignee columns have no known keys; every key falls back.
    pub fn user() -> Self {
        Self::new("user").with_ungrouped("Unassigned", "user-slash")
    }

    pub fn entry(&self, key: &str) -> Option<&LabelEntry> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .or_else(|| self.entries.iter().find(|(k, _)| k.eq_ignore_ascii_case(key)))
            .map(|(_, entry)| entry)
    }

    /// Resolve a bucket key. Unknown keys use the key itself as label, or the
    /// user's name when `users` knows it.
    pub fn resolve(&self, value: &GroupValue, users: Option<&UserDirectory>) -> ResolvedLabel {
        let key = match value {
            GroupValue::Ungrouped => {
                return ResolvedLabel {
                    label: self.ungrouped.label.clone(),
                    icon: self.ungrouped.icon.clone(),
                    known: true,
                }
            }
            GroupValue::Key(key) => key,
        };

        if let Some(entry) = self.entry(key) {
            return ResolvedLabel {
                label: entry.label.clone(),
                icon: entry.icon.clone(),
                known: true,
            };
        }

        let label = users
            .and_then(|dir| dir.name(key))
            .unwrap_or(key)
            .to_string();
        ResolvedLabel {
            label,
            icon: self.fallback_icon.clone(),
            known: false,
        }
    }
}

/// Tables for each grouping attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelSet {
    pub status: LabelTable,
    pub user: LabelTable,
    pub priority: LabelTable,
}

impl Default for LabelSet {
    fn default() -> Self {
        Self {
            status: LabelTable::status(),
            user: LabelTable::user(),
            priority: LabelTable::priority(),
        }
    }
}

impl LabelSet {
    pub fn for_key(&self, group_by: GroupKey) -> &LabelTable {
        match group_by {
            GroupKey::Status => &self.status,
            GroupKey::UserId => &self.user,
            GroupKey::Priority => &self.priority,
        }
    }
}

/// Assignee id to display name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserDirectory {
    names: HashMap<String, String>,
}

impl UserDirectory {
    pub fn from_users(users: &[User]) -> Self {
        let names = users
            .iter()
            .filter(|u| !u.name.trim().is_empty())
            .map(|u| (u.id.clone(), u.name.clone()))
            .collect();
        Self { names }
    }

    pub fn name(&self, id: &str) -> Option<&str> {
        self.names.get(id).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_priority_labels() {
        let table = LabelTable::priority();
        let urgent = table.resolve(&GroupValue::key("4"), None);
        assert_eq!(urgent.label, "Urgent");
        assert_eq!(urgent.icon, "exclamation-circle");
        assert!(urgent.known);

        let none = table.resolve(&GroupValue::key("0"), None);
        assert_eq!(none.label, "No priority");
        assert_eq!(none.icon, "exclamation-triangle");
    }

    #[test]
    fn test_status_lookup_is_case_insensitive() {
        let table = LabelTable::status();
        let done = table.resolve(&GroupValue::key("done"), None);
        assert_eq!(done.label, "Done");
        assert_eq!(done.icon, "check");
        assert!(done.known);

        let progress = table.resolve(&GroupValue::key("In progress"), None);
        assert_eq!(progress.label, "In Progress");
        assert_eq!(progress.icon, "spinner");
    }

    #[test]
    fn test_unknown_key_falls_back() {
        let table = LabelTable::status();
        let resolved = table.resolve(&GroupValue::key("Review"), None);
        assert_eq!(resolved.label, "Review");
        assert_eq!(resolved.icon, "question-circle");
        assert!(!resolved.known);
    }

    #[test]
    fn test_user_fallback_uses_directory_name() {
        let users = UserDirectory::from_users(&[User::new("usr-1", "Anoop Sharma")]);
        let table = LabelTable::user();

        let named = table.resolve(&GroupValue::key("usr-1"), Some(&users));
        assert_eq!(named.label, "Anoop Sharma");
        assert_eq!(named.icon, "user");
        assert!(!named.known);

        let anonymous = table.resolve(&GroupValue::key("usr-9"), Some(&users));
        assert_eq!(anonymous.label, "usr-9");
    }

    #[test]
    fn test_known_entry_wins_over_directory() {
        let users = UserDirectory::from_users(&[User::new("Todo", "Somebody")]);
        let resolved = LabelTable::status().resolve(&GroupValue::key("Todo"), Some(&users));
        assert_eq!(resolved.label, "Todo");
    }

    #[test]
    fn test_ungrouped_entry() {
        let resolved = LabelTable::user().resolve(&GroupValue::Ungrouped, None);
        assert_eq!(resolved.label, "Unassigned");
        assert_eq!(resolved.icon, "user-slash");
    }

    #[test]
    fn test_with_entry_replaces() {
        let table = LabelTable::new("x")
            .with_entry("a", "First", "one")
            .with_entry("a", "Second", "two");
        assert_eq!(table.entry("a"), Some(&LabelEntry::new("Second", "two")));
    }

    #[test]
    fn test_directory_skips_blank_names() {
        let dir = UserDirectory::from_users(&[User::new("u1", " "), User::new("u2", "Bo")]);
        assert_eq!(dir.len(), 1);
        assert_eq!(dir.name("u1"), None);
        assert_eq!(dir.name("u2"), Some("Bo"));
        assert!(!dir.is_empty());
        assert!(UserDirectory::from_users(&[]).is_empty());
    }
}
