//! Core types for the lexicon term dictionary
//!
//! This crate defines the data model shared by every other crate:
//! - [`Term`]: a case-normalized dictionary key
//! - [`TermTable`]: the term to definition mapping, the unit of persistence
//! - [`LexiconError`]: the error kinds of lookup, mutation and persistence

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod table;
pub mod term;

pub use error::{LexiconError, Result};
pub use table::TermTable;
pub use term::Term;
