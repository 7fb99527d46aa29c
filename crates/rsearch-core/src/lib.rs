//! rsearch-core
//!
//! Shared vocabulary for the rsearch crates: the schema/query/record types,
//! the flat `Reply` tree returned by the engine, the `Engine` trait that
//! the client talks through, error types and configuration loading.
#![deny(warnings)]
#![deny(dead_code)]
#![deny(unused_variables)]
#![deny(unused_imports)]

pub mod config;
pub mod error;
pub mod traits;
pub mod types;
