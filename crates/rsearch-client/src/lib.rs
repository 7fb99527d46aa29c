//! rsearch-client
//!
//! Translates structured calls into flat engine commands and flat search
//! replies back into records. See `command` for argument assembly, `reply`
//! for decoding and `client` for the async facade over an [`Engine`].
//!
//! [`Engine`]: rsearch_core::traits::Engine

pub mod client;
pub mod command;
pub mod options;
pub mod reply;

pub use client::SearchClient;
pub use options::{ClientOptions, HighlightTags};
pub use reply::{parse_reply, ReplyMode};
