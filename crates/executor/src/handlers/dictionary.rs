//! Dictionary command handlers.
//!
//! Implements the three dictionary commands over a shared [`TermStore`]:
//! - `define <term>`: open to everyone, answered in the room
//! - `add-define <term> <definition...>`: privileged, answered privately
//! - `remove-define <term>`: privileged, answered privately

use std::sync::Arc;

use lexicon_engine::TermStore;
use lexicon_security::Authorizer;
use tracing::debug;

use crate::convert::convert_result;
use crate::handler::CommandHandler;
use crate::messages::{render, CommandText, Messages};
use crate::request::Request;
use crate::response::{Response, ResponseWriter};
use crate::{Error, Result};

/// The commands owned by [`DictionaryHandler`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DictionaryCommand {
    /// Look up a term
    Define,
    /// Add a term
    AddDefine,
    /// Remove a term
    RemoveDefine,
}

impl DictionaryCommand {
    /// All commands, in help order
    pub const ALL: [DictionaryCommand; 3] = [
        DictionaryCommand::Define,
        DictionaryCommand::AddDefine,
        DictionaryCommand::RemoveDefine,
    ];

    /// Resolve a (localized) command name, ignoring ASCII case.
    pub fn from_name(name: &str, messages: &Messages) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|cmd| cmd.text(messages).name.eq_ignore_ascii_case(name))
    }

    /// Localized name, description and parameters.
    pub fn text(self, messages: &Messages) -> &CommandText {
        match self {
            DictionaryCommand::Define => &messages.define,
            DictionaryCommand::AddDefine => &messages.add_define,
            DictionaryCommand::RemoveDefine => &messages.remove_define,
        }
    }

    /// Whether the sender must pass the authorizer.
    pub fn is_privileged(self) -> bool {
        !matches!(self, DictionaryCommand::Define)
    }
}

/// Handler for the dictionary commands.
///
/// Holds no state of its own beyond shared references; cheap to construct
/// whenever the host (re)loads the module.
#[derive(Clone)]
pub struct DictionaryHandler {
    store: Arc<TermStore>,
    authorizer: Arc<dyn Authorizer>,
    messages: Arc<Messages>,
}

impl DictionaryHandler {
    /// Create a handler with the default English messages.
    pub fn new(store: Arc<TermStore>, authorizer: Arc<dyn Authorizer>) -> Self {
        Self::with_messages(store, authorizer, Arc::new(Messages::default()))
    }

    /// Create a handler with a custom message table.
    pub fn with_messages(
        store: Arc<TermStore>,
        authorizer: Arc<dyn Authorizer>,
        messages: Arc<Messages>,
    ) -> Self {
        Self {
            store,
            authorizer,
            messages,
        }
    }

    fn command(&self, request: &Request) -> Result<DictionaryCommand> {
        DictionaryCommand::from_name(&request.command, &self.messages).ok_or_else(|| {
            Error::UnknownCommand {
                name: request.command.clone(),
            }
        })
    }

    fn define(&self, request: &Request, writer: &mut dyn ResponseWriter) -> Result<()> {
        let Some(term) = request.arg(0) else {
            return self.usage(DictionaryCommand::Define, request, writer);
        };

        let text = match convert_result(self.store.define(term)) {
            Ok(definition) => render(
                &self.messages.define_found,
                &[
                    ("sender", request.sender_name.as_str()),
                    ("term", term),
                    ("definition", definition.as_str()),
                ],
            ),
            Err(Error::TermNotFound { .. }) => render(
                &self.messages.define_not_found,
                &[("sender", request.sender_name.as_str()), ("term", term)],
            ),
            Err(e) => return self.fault(DictionaryCommand::Define, request, writer, e),
        };

        writer.send(Response::new(request.room(), text))?;
        Ok(())
    }

    fn add_define(&self, request: &Request, writer: &mut dyn ResponseWriter) -> Result<()> {
        let (Some(term), Some(definition)) = (request.arg(0), request.remainder(1)) else {
            return self.usage(DictionaryCommand::AddDefine, request, writer);
        };

        let template = match convert_result(self.store.add_define(term, definition)) {
            Ok(()) => &self.messages.add_success,
            Err(Error::TermExists { .. }) => &self.messages.add_already_exists,
            Err(e) => return self.fault(DictionaryCommand::AddDefine, request, writer, e),
        };

        self.reply(request, writer, render(template, &[("term", term)]))
    }

    fn remove_define(&self, request: &Request, writer: &mut dyn ResponseWriter) -> Result<()> {
        let Some(term) = request.arg(0) else {
            return self.usage(DictionaryCommand::RemoveDefine, request, writer);
        };

        let template = match convert_result(self.store.remove_define(term)) {
            Ok(()) => &self.messages.remove_success,
            Err(Error::TermNotFound { .. }) => &self.messages.remove_not_found,
            Err(e) => return self.fault(DictionaryCommand::RemoveDefine, request, writer, e),
        };

        self.reply(request, writer, render(template, &[("term", term)]))
    }

    /// Private reply to the sender.
    fn reply(&self, request: &Request, writer: &mut dyn ResponseWriter, text: String) -> Result<()> {
        writer.send(Response::new(&request.sender_name, text))?;
        Ok(())
    }

    fn usage(
        &self,
        command: DictionaryCommand,
        request: &Request,
        writer: &mut dyn ResponseWriter,
    ) -> Result<()> {
        let text = command.text(&self.messages);
        debug!(command = %text.name, args = request.arg_count(), "Missing command parameters");
        let usage = text.usage();
        let message = render(
            &self.messages.usage,
            &[("command", text.name.as_str()), ("usage", usage.as_str())],
        );
        self.reply(request, writer, message)
    }

    /// Report a store fault to the sender and hand the error back.
    ///
    /// The reply never carries the error text; it may name server paths.
    fn fault(
        &self,
        command: DictionaryCommand,
        request: &Request,
        writer: &mut dyn ResponseWriter,
        err: Error,
    ) -> Result<()> {
        // Rejected input is the caller's mistake, not a fault worth surfacing as Err.
        let is_input = matches!(err, Error::InvalidInput { .. });
        let name = command.text(&self.messages).name.as_str();
        if is_input {
            debug!(command = %name, error = %err, "Rejected command input");
        }
        let message = render(&self.messages.store_error, &[("command", name)]);
        self.reply(request, writer, message)?;
        if is_input {
            Ok(())
        } else {
            Err(err)
        }
    }
}

impl CommandHandler for DictionaryHandler {
    fn matches(&self, name: &str) -> bool {
        DictionaryCommand::from_name(name, &self.messages).is_some()
    }

    fn authorize(&self, request: &Request) -> bool {
        match DictionaryCommand::from_name(&request.command, &self.messages) {
            Some(cmd) if cmd.is_privileged() => {
                self.authorizer.is_authorized(&request.sender_mask)
            }
            Some(_) => true,
            None => false,
        }
    }

    fn handle(&self, request: &Request, writer: &mut dyn ResponseWriter) -> Result<()> {
        match self.command(request)? {
            DictionaryCommand::Define => self.define(request, writer),
            DictionaryCommand::AddDefine => self.add_define(request, writer),
            DictionaryCommand::RemoveDefine => self.remove_define(request, writer),
        }
    }

    fn deny(&self, request: &Request, writer: &mut dyn ResponseWriter) -> Result<()> {
        let command = self.command(request)?;
        let message = render(
            &self.messages.access_denied,
            &[("command", command.text(&self.messages).name.as_str())],
        );
        self.reply(request, writer, message)
    }

    fn help(&self, request: &Request, writer: &mut dyn ResponseWriter) -> Result<()> {
        for command in DictionaryCommand::ALL {
            let text = command.text(&self.messages);
            let usage = text.usage();
            let line = render(
                &self.messages.help_line,
                &[("usage", usage.as_str()), ("description", text.description.as_str())],
            );
            self.reply(request, writer, line)?;
        }
        Ok(())
    }
}
