//! Lexicon: a concurrent, durably persisted term dictionary.
//!
//! This crate re-exports the public surface of the workspace crates:
//!
//! - [`TermStore`]: thread-safe owner of the term table and its snapshot file
//! - [`DictionaryHandler`]: the `define` / `add-define` / `remove-define` commands
//! - [`Whitelist`]: sender-mask authorization for the mutating commands
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use lexicon::{DictionaryHandler, Dispatcher, Request, StoreConfig, TermStore, Whitelist};
//!
//! let store = Arc::new(TermStore::open(&StoreConfig::new("/var/lib/lexicon")).unwrap());
//! let whitelist = Whitelist::new(["*!*@admin.example.org"]).unwrap();
//!
//! let mut dispatcher = Dispatcher::new();
//! dispatcher.register(DictionaryHandler::new(store, Arc::new(whitelist)));
//!
//! let request = Request::parse("!", "alice", "alice!a@example.org", "#rust", "!define rust").unwrap();
//! let mut responses = Vec::new();
//! dispatcher.dispatch(&request, &mut responses).unwrap();
//! ```

mod types;

pub use types::*;
