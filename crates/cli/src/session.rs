//! A console "chat" session: one fixed sender talking to one room.

use std::io::{self, Write};

use lexicon_executor::{Dispatcher, Request, Response, ResponseWriter};
use tracing::warn;

/// Prints responses as `-> recipient: text`.
pub struct ConsoleWriter<W: Write> {
    out: W,
}

impl<W: Write> ConsoleWriter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }
}

impl<W: Write> ResponseWriter for ConsoleWriter<W> {
    fn send(&mut self, response: Response) -> io::Result<()> {
        writeln!(self.out, "-> {}: {}", response.recipient, response.text)
    }
}

pub struct Session {
    dispatcher: Dispatcher,
    prefix: String,
    nick: String,
    mask: String,
    target: String,
}

impl Session {
    pub fn new(
        dispatcher: Dispatcher,
        prefix: impl Into<String>,
        nick: impl Into<String>,
        mask: impl Into<String>,
        target: impl Into<String>,
    ) -> Self {
        Self {
            dispatcher,
            prefix: prefix.into(),
            nick: nick.into(),
            mask: mask.into(),
            target: target.into(),
        }
    }

    /// Handle one input line. Command failures are reported, not returned;
    /// only a broken writer ends the session.
    pub fn run_line(&self, line: &str, writer: &mut dyn ResponseWriter) -> io::Result<()> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(());
        }

        let Some(request) = Request::parse(&self.prefix, &self.nick, &self.mask, &self.target, line)
        else {
            let hint = format!("Commands start with '{}'. Try {}help.", self.prefix, self.prefix);
            return writer.send(Response::new(&self.nick, hint));
        };

        let result = if request.command.eq_ignore_ascii_case("help") {
            self.dispatcher.help(&request, writer).map(|_| true)
        } else {
            self.dispatcher.dispatch(&request, writer)
        };

        match result {
            Ok(true) => Ok(()),
            Ok(false) => writer.send(Response::new(
                &self.nick,
                format!("Unknown command: {}", request.command),
            )),
            Err(lexicon_executor::Error::Write { reason }) => {
                Err(io::Error::new(io::ErrorKind::Other, reason))
            }
            Err(e) => {
                warn!(error = %e, "Command failed");
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lexicon_engine::{StoreConfig, TermStore};
    use lexicon_executor::DictionaryHandler;
    use lexicon_security::Whitelist;
    use std::sync::Arc;
    use tempfile::TempDir;

    fn session(temp: &TempDir) -> Session {
        let store = Arc::new(TermStore::open(&StoreConfig::new(temp.path())).unwrap());
        let whitelist = Whitelist::new(["console!*@localhost"]).unwrap();
        let mut dispatcher = Dispatcher::new();
        dispatcher.register(DictionaryHandler::new(store, Arc::new(whitelist)));
        Session::new(dispatcher, "!", "console", "console!console@localhost", "#console")
    }

    fn run(session: &Session, line: &str) -> String {
        let mut buf = Vec::new();
        session
            .run_line(line, &mut ConsoleWriter::new(&mut buf))
            .unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_add_and_define() {
        let temp = TempDir::new().unwrap();
        let s = session(&temp);
        assert_eq!(
            run(&s, "!add-define tea a hot drink"),
            "-> console: The definition for \"tea\" has been added.\n"
        );
        assert_eq!(run(&s, "!define TEA"), "-> #console: console: a hot drink\n");
    }

    #[test]
    fn test_plain_text_gets_hint() {
        let temp = TempDir::new().unwrap();
        let s = session(&temp);
        assert_eq!(
            run(&s, "hello"),
            "-> console: Commands start with '!'. Try !help.\n"
        );
        assert_eq!(run(&s, "   "), "");
    }

    #[test]
    fn test_unknown_command() {
        let temp = TempDir::new().unwrap();
        let s = session(&temp);
        assert_eq!(run(&s, "!frobnicate"), "-> console: Unknown command: frobnicate\n");
    }

    #[test]
    fn test_help() {
        let temp = TempDir::new().unwrap();
        let s = session(&temp);
        let out = run(&s, "!help");
        assert_eq!(out.lines().count(), 3);
        assert!(out.starts_with("-> console: define <term> - "));
    }
}
