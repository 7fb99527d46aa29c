use std::time::Duration;

use thiserror::Error;

/// A failure reported by the engine collaborator, carried as its message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct EngineError {
    pub message: String,
}

impl EngineError {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Index already exists: {0}")]
    AlreadyExists(String),

    #[error("Engine error: {0}")]
    Engine(#[from] EngineError),

    #[error("Engine did not reply within {0:?}")]
    Timeout(Duration),

    #[error("Malformed reply: {0}")]
    MalformedReply(String),
}

pub type Result<T> = std::result::Result<T, Error>;
