//! Command requests.
//!
//! A [`Request`] is one command invocation as the hosting framework hands it
//! over: who sent it, where, the command name and its arguments. Arguments
//! are whitespace-separated, but [`Request::remainder`] returns the raw text
//! from an argument onwards so free-form parameters keep their spacing.

/// One dispatched command invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    /// Display name of the sender (e.g. IRC nick)
    pub sender_name: String,
    /// Full sender identity used for authorization (e.g. `nick!user@host`)
    pub sender_mask: String,
    /// Room or channel the command was sent to; empty for a direct message
    pub target: String,
    /// Command name without prefix
    pub command: String,
    body: String,
    spans: Vec<(usize, usize)>,
}

impl Request {
    /// Build a request from a command name and its raw argument text.
    pub fn new(
        sender_name: impl Into<String>,
        sender_mask: impl Into<String>,
        target: impl Into<String>,
        command: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        let body = body.into();
        let spans = token_spans(&body);
        Self {
            sender_name: sender_name.into(),
            sender_mask: sender_mask.into(),
            target: target.into(),
            command: command.into(),
            body,
            spans,
        }
    }

    /// Parse a chat line such as `!add-define rust a systems language`.
    ///
    /// Returns `None` if the line does not start with `prefix` or has no
    /// command name after it.
    pub fn parse(
        prefix: &str,
        sender_name: &str,
        sender_mask: &str,
        target: &str,
        line: &str,
    ) -> Option<Self> {
        let rest = line.trim_start().strip_prefix(prefix)?;
        let (command, body) = match rest.find(char::is_whitespace) {
            Some(pos) => (&rest[..pos], &rest[pos..]),
            None => (rest, ""),
        };
        if command.is_empty() {
            return None;
        }
        Some(Self::new(sender_name, sender_mask, target, command, body))
    }

    /// Number of whitespace-separated arguments
    pub fn arg_count(&self) -> usize {
        self.spans.len()
    }

    /// Argument `index`, if present.
    pub fn arg(&self, index: usize) -> Option<&str> {
        self.spans
            .get(index)
            .map(|&(start, end)| &self.body[start..end])
    }

    /// Raw text from argument `index` to the end of the line, with trailing
    /// whitespace removed. `None` if there is no such argument.
    pub fn remainder(&self, index: usize) -> Option<&str> {
        self.spans
            .get(index)
            .map(|&(start, _)| self.body[start..].trim_end())
    }

    /// Where replies meant for the room go: the target, or the sender for a
    /// direct message.
    pub fn room(&self) -> &str {
        if self.target.is_empty() {
            &self.sender_name
        } else {
            &self.target
        }
    }
}

/// Byte spans of the whitespace-separated tokens in `text`.
fn token_spans(text: &str) -> Vec<(usize, usize)> {
    let mut spans = Vec::new();
    let mut start = None;
    for (i, c) in text.char_indices() {
        match (c.is_whitespace(), start) {
            (true, Some(s)) => {
                spans.push((s, i));
                start = None;
            }
            (false, None) => start = Some(i),
            _ => {}
        }
    }
    if let Some(s) = start {
        spans.push((s, text.len()));
    }
    spans
}
