//! Outgoing responses.

use std::io;

/// A text message addressed to a user or a room.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    /// Nick or room the message goes to
    pub recipient: String,
    /// Message text
    pub text: String,
}

impl Response {
    /// Create a response
    pub fn new(recipient: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            recipient: recipient.into(),
            text: text.into(),
        }
    }
}

/// Sink for responses, supplied by the hosting transport.
pub trait ResponseWriter {
    /// Send one response.
    fn send(&mut self, response: Response) -> io::Result<()>;
}

/// Collects responses in memory.
impl ResponseWriter for Vec<Response> {
    fn send(&mut self, response: Response) -> io::Result<()> {
        self.push(response);
        Ok(())
    }
}
