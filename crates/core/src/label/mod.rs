//! Presentation of board columns: labels, icons and column order.
//!
//! The engine hands over opaque bucket keys. This module decides how each
//! key is shown, including the fallback for keys it does not know.

mod table;

pub use table::{LabelEntry, LabelSet, LabelTable, ResolvedLabel, UserDirectory};

use serde::Serialize;

use crate::board::{self, BoardLayout, GroupKey, GroupValue, GroupedTickets, ViewSelection};
use crate::ticket::{Ticket, User};

/// One rendered column of the board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Column {
    /// Bucket key, `null` for the ungrouped column.
    pub key: GroupValue,
    pub label: String,
    pub icon: String,
    /// False when the label came from the fallback entry.
    pub known: bool,
    pub count: usize,
    pub tickets: Vec<Ticket>,
}

/// Turns a ticket collection and a view selection into rendered columns.
#[derive(Debug, Clone, Default)]
pub struct Presenter {
    layout: BoardLayout,
    labels: LabelSet,
}

impl Presenter {
    pub fn new(layout: BoardLayout, labels: LabelSet) -> Self {
        Self { layout, labels }
    }

    /// Group, order, apply the known-key order, then label each bucket.
    pub fn columns(
        &self,
        tickets: &[Ticket],
        users: &[User],
        selection: ViewSelection,
    ) -> Vec<Column> {
        let grouped = board::view(tickets, selection);
        let grouped = self.layout.for_key(selection.group_by).apply(grouped);
        let table = self.labels.for_key(selection.group_by);
        if selection.group_by == GroupKey::UserId {
            render(grouped, table, Some(&UserDirectory::from_users(users)))
        } else {
            render(grouped, table, None)
        }
    }
}

/// Label every bucket in mapping order. `users` only applies to assignee
/// columns.
pub fn render(
    grouped: GroupedTickets,
    table: &LabelTable,
    users: Option<&UserDirectory>,
) -> Vec<Column> {
    grouped
        .into_iter()
        .map(|(key, tickets)| {
            let resolved = table.resolve(&key, users);
            Column {
                key,
                label: resolved.label,
                icon: resolved.icon,
                known: resolved.known,
                count: tickets.len(),
                tickets,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::OrderKey;

    fn tickets() -> Vec<Ticket> {
        vec![
            Ticket::new("CAM-1", "Update profile page")
                .with_status("Todo")
                .with_user("usr-1")
                .with_priority(1),
            Ticket::new("CAM-2", "Add multi-language support")
                .with_status("In progress")
                .with_user("usr-2")
                .with_priority(3),
            Ticket::new("CAM-3", "Optimize database queries")
                .with_status("Todo")
                .with_user("usr-2")
                .with_priority(4),
            Ticket::new("CAM-4", "Dark mode toggle").with_user("usr-1"),
        ]
    }

    #[test]
    fn test_priority_columns_in_canonical_order() {
        let presenter = Presenter::default();
        let columns = presenter.columns(
            &tickets(),
            &[],
            ViewSelection::new(GroupKey::Priority, Some(OrderKey::Title)),
        );
        let labels: Vec<_> = columns.iter().map(|c| c.label.as_str()).collect();
        assert_eq!(labels, ["Urgent", "High", "Low", "No priority set"]);
        assert!(columns.last().unwrap().key.is_ungrouped());
    }

    #[test]
    fn test_status_columns_keep_appearance_order() {
        let presenter = Presenter::default();
        let columns = presenter.columns(&tickets(), &[], ViewSelection::default());
        let labels: Vec<_> = columns.iter().map(|c| c.label.as_str()).collect();
        assert_eq!(labels, ["Todo", "In Progress", "No status"]);

        let todo = &columns[0];
        assert_eq!(todo.count, 2);
        assert_eq!(todo.tickets[0].id, "CAM-3");
        assert_eq!(todo.icon, "circle");
    }

    #[test]
    fn test_user_columns_use_names() {
        let users = vec![User::new("usr-1", "Anoop Sharma"), User::new("usr-2", "Yogesh")];
        let presenter = Presenter::default();
        let columns = presenter.columns(
            &tickets(),
            &users,
            ViewSelection::new(GroupKey::UserId, Some(OrderKey::Title)),
        );
        assert_eq!(columns.len(), 2);
        assert_eq!(columns[0].label, "Anoop Sharma");
        assert_eq!(columns[0].icon, "user");
        assert!(!columns[0].known);
        let titles: Vec<_> = columns[0].tickets.iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, ["Dark mode toggle", "Update profile page"]);
    }

    #[test]
    fn test_column_serialization() {
        let presenter = Presenter::default();
        let columns = presenter.columns(&tickets(), &[], ViewSelection::default());
        let value = serde_json::to_value(&columns).unwrap();
        assert_eq!(value[0]["key"], "Todo");
        assert!(value[2]["key"].is_null());
        assert_eq!(value[0]["tickets"][0]["userId"], "usr-2");
    }

    #[test]
    fn test_status_named_like_user_keeps_its_key() {
        let tickets = vec![Ticket::new("1", "a").with_status("usr-1").with_user("usr-1")];
        let users = vec![User::new("usr-1", "Anoop Sharma")];
        let presenter = Presenter::default();

        let by_status = presenter.columns(&tickets, &users, ViewSelection::default());
        assert_eq!(by_status[0].label, "usr-1");
        assert_eq!(by_status[0].icon, "question-circle");
        assert!(!by_status[0].known);

        let by_user = presenter.columns(
            &tickets,
            &users,
            ViewSelection::new(GroupKey::UserId, None),
        );
        assert_eq!(by_user[0].label, "Anoop Sharma");
    }

    #[test]
    fn test_empty_board() {
        let columns = Presenter::default().columns(&[], &[], ViewSelection::default());
        assert!(columns.is_empty());
    }
}
