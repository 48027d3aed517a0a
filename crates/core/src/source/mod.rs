//! Ticket source abstraction.
//!
//! This module provides a `TicketSource` trait for loading the raw ticket
//! collection (remote HTTP endpoint or local JSON dump) and a `TicketFeed`
//! that tracks the loading / error / ready state the board is computed from.

mod feed;
mod file;
mod http;
mod types;

pub use feed::TicketFeed;
pub use file::FileTicketSource;
pub use http::HttpTicketSource;
pub use types::*;

use std::sync::Arc;
use std::time::Duration;

use crate::config::{SourceConfig, SourceKind};

/// Create a ticket source from configuration.
pub fn create_ticket_source(config: &SourceConfig) -> Result<Arc<dyn TicketSource>, SourceError> {
    match config.kind {
        SourceKind::Http => {
            let url = config
                .url
                .as_deref()
                .ok_or_else(|| SourceError::Internal("source.url is not set".to_string()))?;
            let timeout = Duration::from_secs(u64::from(config.timeout_secs));
            Ok(Arc::new(HttpTicketSource::new(url, timeout)?))
        }
        SourceKind::File => {
            let path = config
                .path
                .as_ref()
                .ok_or_else(|| SourceError::Internal("source.path is not set".to_string()))?;
            Ok(Arc::new(FileTicketSource::new(path)))
        }
    }
}
