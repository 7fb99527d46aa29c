use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use rsearch_core::error::EngineError;
use rsearch_core::traits::Engine;
use rsearch_core::types::{Command, Reply};

/// In-memory engine answering each command with a canned reply and
/// recording everything it was sent.
#[derive(Default)]
pub struct ScriptedEngine {
    replies: HashMap<Command, Result<Reply, EngineError>>,
    delay: Option<Duration>,
    sent: Mutex<Vec<(Command, Vec<String>)>>,
}

impl ScriptedEngine {
    pub fn new() -> Self { Self::default() }

    pub fn reply(mut self, command: Command, reply: impl Into<Reply>) -> Self {
        self.replies.insert(command, Ok(reply.into()));
        self
    }

    pub fn fail(mut self, command: Command, message: &str) -> Self {
        self.replies.insert(command, Err(EngineError::new(message)));
        self
    }

    pub fn delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn sent(&self) -> Vec<(Command, Vec<String>)> { self.sent.lock().unwrap().clone() }

    pub fn sent_commands(&self) -> Vec<Command> { self.sent().into_iter().map(|(c, _)| c).collect() }
}

#[async_trait]
impl Engine for ScriptedEngine {
    async fn send_command(&self, command: Command, args: &[String]) -> Result<Reply, EngineError> {
        self.sent.lock().unwrap().push((command, args.to_vec()));
        if let Some(d) = self.delay { tokio::time::sleep(d).await; }
        self.replies
            .get(&command)
            .cloned()
            .unwrap_or_else(|| Err(EngineError::new(format!("no scripted reply for {command}"))))
    }
}

pub fn strings(items: &[&str]) -> Vec<String> { items.iter().map(|s| s.to_string()).collect() }
