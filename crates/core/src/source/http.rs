//! HTTP ticket source.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use super::{decode_payload, SourceError, TicketSource};
use crate::ticket::TicketPayload;

/// Fetches the ticket payload with a single GET request.
pub struct HttpTicketSource {
    client: Client,
    url: String,
}

impl HttpTicketSource {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self, SourceError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| SourceError::Internal(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            url: url.into(),
        })
    }
}

#[async_trait]
impl TicketSource for HttpTicketSource {
    fn name(&self) -> &str {
        "http"
    }

    async fn fetch(&self) -> Result<TicketPayload, SourceError> {
        debug!(url = %self.url, "Fetching tickets");

        let response = self.client.get(&self.url).send().await.map_err(|e| {
            if e.is_timeout() {
                SourceError::Timeout
            } else {
                SourceError::ConnectionFailed(e.to_string())
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SourceError::HttpStatus {
                status: status.as_u16(),
                body: body.chars().take(200).collect(),
            });
        }

        let body = response.text().await.map_err(|e| {
            if e.is_timeout() {
                SourceError::Timeout
            } else {
                SourceError::ConnectionFailed(format!("Failed to read response body: {}", e))
            }
        })?;

        let payload = decode_payload(&body)?;
        debug!(
            tickets = payload.tickets.len(),
            users = payload.users.len(),
            "Fetched tickets"
        );
        Ok(payload)
    }
}
