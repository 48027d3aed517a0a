//! Ticket source backed by a local JSON dump.

use std::path::PathBuf;

use async_trait::async_trait;
use tracing::debug;

use super::{decode_payload, SourceError, TicketSource};
use crate::ticket::TicketPayload;

/// Reads the payload from a file on every fetch.
pub struct FileTicketSource {
    path: PathBuf,
}

impl FileTicketSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl TicketSource for FileTicketSource {
    fn name(&self) -> &str {
        "file"
    }

    async fn fetch(&self) -> Result<TicketPayload, SourceError> {
        debug!(path = %self.path.display(), "Reading tickets");
        let body = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| SourceError::Io(format!("{}: {}", self.path.display(), e)))?;
        decode_payload(&body)
    }
}
