use async_trait::async_trait;
use redis::aio::MultiplexedConnection;
use redis::Value;
use tracing::debug;

use rsearch_core::error::{EngineError, Error, Result};
use rsearch_core::traits::Engine;
use rsearch_core::types::{Command, Reply};

/// A single multiplexed connection; concurrent callers share it.
#[derive(Clone)]
pub struct RedisEngine {
    conn: MultiplexedConnection,
}

impl RedisEngine {
    pub async fn connect(url: &str) -> Result<Self> {
        let client = redis::Client::open(url).map_err(|e| Error::InvalidConfig(format!("redis url {url:?}: {e}")))?;
        let conn = client
            .get_multiplexed_tokio_connection()
            .await
            .map_err(|e| Error::Engine(EngineError::new(e.to_string())))?;
        debug!(url, "connected to redis");
        Ok(Self { conn })
    }
}

#[async_trait]
impl Engine for RedisEngine {
    async fn send_command(&self, command: Command, args: &[String]) -> std::result::Result<Reply, EngineError> {
        let mut cmd = redis::cmd(command.as_str());
        for a in args {
            cmd.arg(a);
        }
        let mut conn = self.conn.clone();
        let value: Value = cmd
            .query_async(&mut conn)
            .await
            .map_err(|e| EngineError::new(e.to_string()))?;
        Ok(reply_from_value(value))
    }
}

/// Maps a raw Redis value onto the engine-neutral reply tree.
///
/// Bulk data becomes a string when it is valid UTF-8 and stays raw bytes
/// otherwise; `OK`/status replies become strings.
pub fn reply_from_value(value: Value) -> Reply {
    match value {
        Value::Nil => Reply::Nil,
        Value::Int(n) => Reply::Int(n),
        Value::Data(bytes) => match String::from_utf8(bytes) {
            Ok(s) => Reply::Str(s),
            Err(e) => Reply::Bytes(e.into_bytes()),
        },
        Value::Bulk(items) => Reply::Array(items.into_iter().map(reply_from_value).collect()),
        Value::Status(s) => Reply::Str(s),
        Value::Okay => Reply::Str("OK".to_string()),
    }
}
