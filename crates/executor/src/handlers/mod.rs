//! Command handlers.

mod dictionary;

pub use dictionary::{DictionaryCommand, DictionaryHandler};
