//! Known-key column ordering, applied after grouping.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::engine::GroupedTickets;
use super::keys::{GroupKey, GroupValue};

/// Canonical order of known group keys.
///
/// Listed keys move to the front in list order. Other buckets follow in
/// first-appearance order, and the ungrouped bucket always comes last.
/// Keys match exactly; the list is opaque to the engine.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KeyOrder(Vec<String>);

impl KeyOrder {
    pub fn new<I, S>(keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(keys.into_iter().map(Into::into).collect())
    }

    /// Urgent, High, Medium, Low, No priority.
    pub fn priority_default() -> Self {
        Self::new(["4", "3", "2", "1", "0"])
    }

    /// Leave buckets in first-appearance order.
    pub fn first_appearance() -> Self {
        Self::default()
    }

    pub fn keys(&self) -> &[String] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Reorder buckets. Bucket contents are moved untouched.
    pub fn apply(&self, grouped: GroupedTickets) -> GroupedTickets {
        let mut remaining = grouped.into_inner();
        let mut ordered = IndexMap::with_capacity(remaining.len());

        for key in &self.0 {
            let value = GroupValue::key(key.as_str());
            if let Some(bucket) = remaining.shift_remove(&value) {
                ordered.insert(value, bucket);
            }
        }

        let ungrouped = remaining.shift_remove(&GroupValue::Ungrouped);
        ordered.extend(remaining);
        if let Some(bucket) = ungrouped {
            ordered.insert(GroupValue::Ungrouped, bucket);
        }

        ordered.into()
    }
}

/// Column order per grouping attribute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardLayout {
    #[serde(default = "KeyOrder::first_appearance")]
    pub status: KeyOrder,
    #[serde(default = "KeyOrder::first_appearance")]
    pub user: KeyOrder,
    #[serde(default = "KeyOrder::priority_default")]
    pub priority: KeyOrder,
}

impl Default for BoardLayout {
    fn default() -> Self {
        Self {
            status: KeyOrder::first_appearance(),
            user: KeyOrder::first_appearance(),
            priority: KeyOrder::priority_default(),
        }
    }
}

impl BoardLayout {
    pub fn for_key(&self, group_by: GroupKey) -> &KeyOrder {
        match group_by {
            GroupKey::Status => &self.status,
            GroupKey::UserId => &self.user,
            GroupKey::Priority => &self.priority,
        }
    }
}
