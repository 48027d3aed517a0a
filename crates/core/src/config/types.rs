use serde::{Deserialize, Serialize};
use std::net::IpAddr;
use std::path::PathBuf;

use crate::board::{BoardLayout, GroupKey, KeyOrder, OrderKey, ViewSelection};

/// Root configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    pub source: SourceConfig,
    #[serde(default)]
    pub board: BoardConfig,
}

/// Server configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: IpAddr,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> IpAddr {
    IpAddr::from([0, 0, 0, 0])
}

fn default_port() -> u16 {
    8080
}

/// Where tickets come from
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SourceKind {
    Http,
    File,
}

/// Ticket source configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SourceConfig {
    #[serde(default = "default_source_kind")]
    pub kind: SourceKind,
    /// Endpoint returning `{ "tickets": [...], "users": [...] }` (kind = "http")
    #[serde(default)]
    pub url: Option<String>,
    /// JSON dump with the same shape (kind = "file")
    #[serde(default)]
    pub path: Option<PathBuf>,
    /// Request timeout in seconds (default: 30)
    #[serde(default = "default_timeout")]
    pub timeout_secs: u32,
}

fn default_source_kind() -> SourceKind {
    SourceKind::Http
}

fn default_timeout() -> u32 {
    30
}

/// Board defaults and column order
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BoardConfig {
    #[serde(default = "default_group_by")]
    pub default_group_by: GroupKey,
    #[serde(default = "default_order_by")]
    pub default_order_by: OrderKey,
    #[serde(default = "KeyOrder::priority_default")]
    pub priority_order: KeyOrder,
    #[serde(default)]
    pub status_order: KeyOrder,
    #[serde(default)]
    pub user_order: KeyOrder,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            default_group_by: default_group_by(),
            default_order_by: default_order_by(),
            priority_order: KeyOrder::priority_default(),
            status_order: KeyOrder::default(),
            user_order: KeyOrder::default(),
        }
    }
}

impl BoardConfig {
    pub fn default_selection(&self) -> ViewSelection {
        ViewSelection::new(self.default_group_by, Some(self.default_order_by))
    }

    pub fn layout(&self) -> BoardLayout {
        BoardLayout {
            status: self.status_order.clone(),
            user: self.user_order.clone(),
            priority: self.priority_order.clone(),
        }
    }
}

fn default_group_by() -> GroupKey {
    GroupKey::Status
}

fn default_order_by() -> OrderKey {
    OrderKey::Priority
}

/// Sanitized config for API responses
#[derive(Debug, Clone, Serialize)]
pub struct SanitizedConfig {
    pub server: ServerConfig,
    pub source: SanitizedSourceConfig,
    pub board: BoardConfig,
}

/// Sanitized source config (URL query string stripped, it may carry keys)
#[derive(Debug, Clone, Serialize)]
pub struct SanitizedSourceConfig {
    pub kind: SourceKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
    pub timeout_secs: u32,
}

impl From<&Config> for SanitizedConfig {
    fn from(config: &Config) -> Self {
        Self {
            server: config.server.clone(),
            source: SanitizedSourceConfig {
                kind: config.source.kind,
                url: config
                    .source
                    .url
                    .as_deref()
                    .map(|url| url.split(['?', '#']).next().unwrap_or(url).to_string()),
                path: config.source.path.clone(),
                timeout_secs: config.source.timeout_secs,
            },
            board: config.board.clone(),
        }
    }
}
