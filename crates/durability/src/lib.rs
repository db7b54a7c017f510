//! Durability layer for lexicon
//!
//! - `codec`: gzip-compressed JSON encoding of a [`TermTable`](lexicon_core::TermTable)
//! - `file`: atomic snapshot file holding the encoded table

#![warn(missing_docs)]

pub mod codec;
pub mod file;

pub use codec::{decode, encode};
pub use file::SnapshotFile;
