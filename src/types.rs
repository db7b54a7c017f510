//! Public types for the lexicon API.
//!
//! This module re-exports types from internal crates with a clean public interface.

// Data model
pub use lexicon_core::{LexiconError, Result, Term, TermTable};

// Persistence
pub use lexicon_durability::{decode, encode, SnapshotFile};

// Store and its configuration
pub use lexicon_engine::{ConfigError, LoadOutcome, LoadPolicy, StoreConfig, TermStore};

// Authorization
pub use lexicon_security::{Authorizer, Whitelist, WhitelistError};

// Command adapter
pub use lexicon_executor::{
    CommandHandler, CommandText, DictionaryCommand, DictionaryHandler, Dispatcher,
    Error as CommandError, Messages, ParamText, Request, Response, ResponseWriter,
};
