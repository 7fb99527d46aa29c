use async_trait::async_trait;

use crate::error::EngineError;
use crate::types::{Command, Reply};

/// Request/response channel to the search engine.
///
/// One call sends one command with its positional arguments and resolves with
/// either the engine's reply or the failure it reported.
#[async_trait]
pub trait Engine: Send + Sync {
    async fn send_command(&self, command: Command, args: &[String]) -> Result<Reply, EngineError>;
}
