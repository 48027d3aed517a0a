use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;
use ticketboard_core::{
    Column, Config, LabelSet, LoadState, Presenter, SanitizedConfig, Snapshot, TicketFeed,
    ViewSelection,
};

/// Computed columns are keyed by snapshot generation and selection.
type ViewCache = HashMap<(u64, ViewSelection), Arc<Vec<Column>>>;

/// Shared application state
pub struct AppState {
    config: Config,
    feed: Arc<TicketFeed>,
    presenter: Presenter,
    views: RwLock<ViewCache>,
}

impl AppState {
    pub fn new(config: Config, feed: Arc<TicketFeed>) -> Self {
        let presenter = Presenter::new(config.board.layout(), LabelSet::default());
        Self {
            config,
            feed,
            presenter,
            views: RwLock::new(HashMap::new()),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn sanitized_config(&self) -> SanitizedConfig {
        SanitizedConfig::from(&self.config)
    }

    pub fn feed(&self) -> &Arc<TicketFeed> {
        &self.feed
    }

    pub async fn load_state(&self) -> LoadState {
        self.feed.state().await
    }

    /// Columns for a snapshot, computed once per (generation, selection).
    pub async fn columns(&self, snapshot: &Snapshot, selection: ViewSelection) -> Arc<Vec<Column>> {
        let key = (snapshot.generation, selection);
        if let Some(columns) = self.views.read().await.get(&key) {
            return Arc::clone(columns);
        }

        let columns = Arc::new(
            self.presenter
                .columns(&snapshot.tickets, &snapshot.users, selection),
        );

        let mut views = self.views.write().await;
        // A request still holding an older snapshot must not evict newer views.
        if views.keys().any(|(generation, _)| *generation > snapshot.generation) {
            return columns;
        }
        views.retain(|(generation, _), _| *generation >= snapshot.generation);
        views.insert(key, Arc::clone(&columns));
        columns
    }

    #[cfg(test)]
    async fn cached_views(&self) -> usize {
        self.views.read().await.len()
    }
}
