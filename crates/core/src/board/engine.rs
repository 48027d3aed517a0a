//! Grouping and ordering of a ticket collection.

use indexmap::map::{IntoIter, Iter};
use indexmap::IndexMap;
use tracing::debug;

use super::collate::compare_titles;
use super::keys::{GroupKey, GroupValue, OrderKey, ViewSelection};
use crate::ticket::Ticket;

/// Tickets partitioned into buckets, in bucket insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GroupedTickets(IndexMap<GroupValue, Vec<Ticket>>);

impl GroupedTickets {
    pub fn new() -> Self {
        Self(IndexMap::new())
    }

    /// Number of buckets.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of tickets across all buckets.
    pub fn ticket_count(&self) -> usize {
        self.0.values().map(Vec::len).sum()
    }

    pub fn get(&self, key: &GroupValue) -> Option<&[Ticket]> {
        self.0.get(key).map(Vec::as_slice)
    }

    pub fn keys(&self) -> impl Iterator<Item = &GroupValue> {
        self.0.keys()
    }

    pub fn iter(&self) -> Iter<'_, GroupValue, Vec<Ticket>> {
        self.0.iter()
    }

    pub fn into_inner(self) -> IndexMap<GroupValue, Vec<Ticket>> {
        self.0
    }
}

impl From<IndexMap<GroupValue, Vec<Ticket>>> for GroupedTickets {
    fn from(map: IndexMap<GroupValue, Vec<Ticket>>) -> Self {
        Self(map)
    }
}

impl FromIterator<(GroupValue, Vec<Ticket>)> for GroupedTickets {
    fn from_iter<I: IntoIterator<Item = (GroupValue, Vec<Ticket>)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for GroupedTickets {
    type Item = (GroupValue, Vec<Ticket>);
    type IntoIter = IntoIter<GroupValue, Vec<Ticket>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a GroupedTickets {
    type Item = (&'a GroupValue, &'a Vec<Ticket>);
    type IntoIter = Iter<'a, GroupValue, Vec<Ticket>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Partition tickets by the selected attribute.
///
/// Buckets appear in first-appearance order and keep input order inside.
/// Tickets missing the attribute land in [`GroupValue::Ungrouped`].
pub fn group(tickets: &[Ticket], group_by: GroupKey) -> GroupedTickets {
    let mut buckets: IndexMap<GroupValue, Vec<Ticket>> = IndexMap::new();
    for ticket in tickets {
        buckets
            .entry(group_by.value_of(ticket))
            .or_default()
            .push(ticket.clone());
    }
    GroupedTickets(buckets)
}

/// Sort every bucket by the selected attribute into a fresh map.
///
/// With `None` the buckets are copied in their grouped order. Membership
/// and bucket order never change.
pub fn order(grouped: &GroupedTickets, order_by: Option<OrderKey>) -> GroupedTickets {
    grouped
        .iter()
        .map(|(key, bucket)| {
            let mut sorted = bucket.clone();
            if let Some(order_by) = order_by {
                sort_bucket(&mut sorted, order_by);
            }
            (key.clone(), sorted)
        })
        .collect()
}

/// `order(group(tickets, group_by), order_by)`.
pub fn view(tickets: &[Ticket], selection: ViewSelection) -> GroupedTickets {
    let grouped = group(tickets, selection.group_by);
    let ordered = order(&grouped, selection.order_by);
    debug!(
        group_by = %selection.group_by,
        order_by = ?selection.order_by,
        tickets = tickets.len(),
        buckets = ordered.len(),
        "Computed board view"
    );
    ordered
}

// `sort_by` is a stable merge sort; equal keys keep their input order.
fn sort_bucket(bucket: &mut [Ticket], order_by: OrderKey) {
    match order_by {
        // Option orders None below Some, so missing priorities end up last.
        OrderKey::Priority => bucket.sort_by(|a, b| b.priority.cmp(&a.priority)),
        OrderKey::Title => bucket.sort_by(|a, b| compare_titles(&a.title, &b.title)),
    }
}
