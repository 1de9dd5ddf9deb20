//! The `error` module defines the error type returned by everything around
//! `MessageRecord`. Constructing a record itself never fails.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CompereError {
    #[error("Failed to decode message payload: {0}")]
    Decode(#[source] serde_json::Error),

    #[error("Failed to encode message record: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("Failed to load configuration: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Failed to read feed: {0}")]
    Io(#[from] std::io::Error),
}
