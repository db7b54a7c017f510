//! Storage engine for lexicon
//!
//! This crate provides [`TermStore`], the concurrent owner of the term table,
//! and its [`StoreConfig`]. The store normalizes terms, serializes access
//! through a reader-writer lock and persists every successful mutation
//! through `lexicon-durability` before returning.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod store;

pub use config::{ConfigError, LoadPolicy, StoreConfig, DEFAULT_FILE_NAME};
pub use store::{LoadOutcome, TermStore};
