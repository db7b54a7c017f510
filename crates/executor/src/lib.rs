//! Command execution layer for lexicon
//!
//! Translates dispatched chat commands into [`TermStore`](lexicon_engine::TermStore)
//! calls and formats localized replies:
//!
//! ```text
//! Request ──► Dispatcher ──► DictionaryHandler ──► TermStore
//!                                   │
//!                                   ▼
//!                        Messages ─► ResponseWriter
//! ```
//!
//! The hosting framework supplies the [`Request`], the [`ResponseWriter`]
//! and the [`Authorizer`](lexicon_security::Authorizer); this crate owns only
//! the handler bodies.

#![warn(missing_docs)]

mod convert;
mod error;
mod handler;
mod handlers;
mod messages;
mod request;
mod response;

pub use convert::convert_result;
pub use error::{Error, Result};
pub use handler::{CommandHandler, Dispatcher};
pub use handlers::{DictionaryCommand, DictionaryHandler};
pub use messages::{render, CommandText, Messages, ParamText};
pub use request::Request;
pub use response::{Response, ResponseWriter};
