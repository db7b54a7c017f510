//! Command handler interface and a minimal dispatcher.
//!
//! The hosting framework owns registration and dispatch; a handler only
//! answers three questions: does it own a command name, may this request run
//! it, and what does running it produce.

use tracing::{debug, error};

use crate::request::Request;
use crate::response::ResponseWriter;
use crate::{Error, Result};

/// A set of commands bound to one module.
pub trait CommandHandler: Send + Sync {
    /// Whether this handler owns the command `name`.
    fn matches(&self, name: &str) -> bool;

    /// Whether the sender of `request` may run its command.
    fn authorize(&self, request: &Request) -> bool;

    /// Run the command, emitting responses through `writer`.
    fn handle(&self, request: &Request, writer: &mut dyn ResponseWriter) -> Result<()>;

    /// Answer a request that failed `authorize`.
    fn deny(&self, request: &Request, _writer: &mut dyn ResponseWriter) -> Result<()> {
        Err(Error::AccessDenied {
            sender: request.sender_mask.clone(),
            command: request.command.clone(),
        })
    }

    /// Describe the handler's commands to the sender of `request`.
    fn help(&self, _request: &Request, _writer: &mut dyn ResponseWriter) -> Result<()> {
        Ok(())
    }
}

/// Routes requests to the first handler that matches.
#[derive(Default)]
pub struct Dispatcher {
    handlers: Vec<Box<dyn CommandHandler>>,
}

impl Dispatcher {
    /// Create an empty dispatcher
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a handler. Earlier handlers win on overlapping names.
    pub fn register(&mut self, handler: impl CommandHandler + 'static) -> &mut Self {
        self.handlers.push(Box::new(handler));
        self
    }

    /// Dispatch `request`.
    ///
    /// Returns `Ok(false)` if no handler owns the command.
    pub fn dispatch(&self, request: &Request, writer: &mut dyn ResponseWriter) -> Result<bool> {
        let Some(handler) = self.handlers.iter().find(|h| h.matches(&request.command)) else {
            debug!(command = %request.command, "No handler for command");
            return Ok(false);
        };

        let result = if handler.authorize(request) {
            handler.handle(request, writer)
        } else {
            debug!(command = %request.command, sender = %request.sender_mask, "Unauthorized command");
            handler.deny(request, writer)
        };

        if let Err(ref e) = result {
            if e.is_fault() {
                error!(command = %request.command, error = %e, "Command failed");
            }
        }
        result.map(|_| true)
    }

    /// Collect help from every handler.
    pub fn help(&self, request: &Request, writer: &mut dyn ResponseWriter) -> Result<()> {
        for handler in &self.handlers {
            handler.help(request, writer)?;
        }
        Ok(())
    }
}
