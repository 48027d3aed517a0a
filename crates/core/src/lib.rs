pub mod board;
pub mod config;
pub mod label;
pub mod metrics;
pub mod source;
pub mod testing;
pub mod ticket;

pub use board::{
    group, order, view, BoardError, BoardLayout, GroupKey, GroupValue, GroupedTickets, KeyOrder,
    OrderKey, ViewSelection,
};
pub use config::{
    load_config, load_config_from_str, validate_config, BoardConfig, Config, ConfigError,
    SanitizedConfig, ServerConfig, SourceConfig, SourceKind,
};
pub use label::{Column, LabelSet, LabelTable, Presenter, UserDirectory};
pub use source::{
    create_ticket_source, FileTicketSource, HttpTicketSource, LoadState, Snapshot, SourceError,
    TicketFeed, TicketSource,
};
pub use ticket::{PayloadError, Ticket, TicketPayload, User};
