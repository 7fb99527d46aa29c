//! rsearch-redis
//!
//! [`Engine`](rsearch_core::traits::Engine) implementation over a Redis
//! server with the RediSearch module loaded.

pub mod engine;

pub use engine::{reply_from_value, RedisEngine};
