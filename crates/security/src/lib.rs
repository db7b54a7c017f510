//! Sender authorization for lexicon commands.
//!
//! This crate provides the [`Authorizer`] capability check used to gate the
//! mutating commands, and [`Whitelist`], the mask-based implementation the
//! host configures.

#![warn(missing_docs)]

use glob::{MatchOptions, Pattern, PatternError};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Decides whether a sender may run privileged commands.
///
/// `sender_mask` is the full identity of the sender as the transport reports
/// it, e.g. `nick!user@host`.
pub trait Authorizer: Send + Sync {
    /// Whether `sender_mask` is allowed.
    fn is_authorized(&self, sender_mask: &str) -> bool;
}

impl<F> Authorizer for F
where
    F: Fn(&str) -> bool + Send + Sync,
{
    fn is_authorized(&self, sender_mask: &str) -> bool {
        self(sender_mask)
    }
}

/// Error building a [`Whitelist`].
#[derive(Debug, Error)]
#[error("invalid sender mask '{mask}': {source}")]
pub struct WhitelistError {
    /// The offending mask
    pub mask: String,
    /// Pattern compilation error
    #[source]
    pub source: PatternError,
}

const MASK_MATCH: MatchOptions = MatchOptions {
    case_sensitive: false,
    require_literal_separator: false,
    require_literal_leading_dot: false,
};

/// A list of sender masks allowed to run privileged commands.
///
/// Masks use `*` (any run of characters) and `?` (one character) as
/// wildcards and are matched case-insensitively. Every other character,
/// including `[` and `]` which are legal in nicks, matches itself:
///
/// ```
/// use lexicon_security::{Authorizer, Whitelist};
///
/// let list = Whitelist::new(["*!*@admin.example.org"]).unwrap();
/// assert!(list.is_authorized("Alice!alice@ADMIN.example.org"));
/// assert!(!list.is_authorized("mallory!m@evil.example.org"));
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct Whitelist {
    masks: Vec<String>,
    patterns: Vec<Pattern>,
}

impl Whitelist {
    /// Compile a whitelist from masks.
    pub fn new<I, S>(masks: I) -> Result<Self, WhitelistError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let masks: Vec<String> = masks.into_iter().map(Into::into).collect();
        let patterns = masks
            .iter()
            .map(|mask| {
                Pattern::new(&escape_brackets(mask)).map_err(|source| WhitelistError {
                    mask: mask.clone(),
                    source,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { masks, patterns })
    }

    /// The configured masks
    pub fn masks(&self) -> &[String] {
        &self.masks
    }

    /// Whether no mask is configured (nobody is authorized)
    pub fn is_empty(&self) -> bool {
        self.masks.is_empty()
    }
}

/// Turn `[` and `]` into single-character classes so they match literally.
fn escape_brackets(mask: &str) -> String {
    let mut escaped = String::with_capacity(mask.len());
    for c in mask.chars() {
        match c {
            '[' => escaped.push_str("[[]"),
            ']' => escaped.push_str("[]]"),
            c => escaped.push(c),
        }
    }
    escaped
}

impl Authorizer for Whitelist {
    fn is_authorized(&self, sender_mask: &str) -> bool {
        self.patterns
            .iter()
            .any(|p| p.matches_with(sender_mask, MASK_MATCH))
    }
}

impl TryFrom<Vec<String>> for Whitelist {
    type Error = WhitelistError;

    fn try_from(masks: Vec<String>) -> Result<Self, Self::Error> {
        Whitelist::new(masks)
    }
}

impl From<Whitelist> for Vec<String> {
    fn from(list: Whitelist) -> Self {
        list.masks
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_mask() {
        let list = Whitelist::new(["op!op@host"]).unwrap();
        assert!(list.is_authorized("op!op@host"));
        assert!(!list.is_authorized("op!op@other"));
    }

    #[test]
    fn test_wildcards() {
        let list = Whitelist::new(["*!*@*.trusted.net", "bot?!*@*"]).unwrap();
        assert!(list.is_authorized("a!b@irc.trusted.net"));
        assert!(list.is_authorized("bot1!x@anywhere"));
        assert!(!list.is_authorized("bot12!x@anywhere"));
        assert!(!list.is_authorized("a!b@trusted.net.evil"));
    }

    #[test]
    fn test_empty_denies_everyone() {
        let list = Whitelist::default();
        assert!(list.is_empty());
        assert!(!list.is_authorized("anyone!a@b"));
    }

    #[test]
    fn test_brackets_match_literally() {
        let list = Whitelist::new(["op[m]!*@*"]).unwrap();
        assert!(list.is_authorized("op[m]!op@host"));
        assert!(list.is_authorized("OP[M]!op@host"));
        assert!(!list.is_authorized("opm!op@host"));
        assert_eq!(list.masks(), ["op[m]!*@*".to_string()]);
    }

    #[test]
    fn test_unbalanced_brackets_are_literal() {
        let list = Whitelist::new(["[away!*@*", "]x[!*@*"]).unwrap();
        assert!(list.is_authorized("[away!a@h"));
        assert!(list.is_authorized("]x[!a@h"));
        assert!(!list.is_authorized("away!a@h"));
    }

    #[test]
    fn test_invalid_mask() {
        let err = Whitelist::new(["op***!*@*"]).unwrap_err();
        assert_eq!(err.mask, "op***!*@*");
    }

    #[test]
    fn test_closure_authorizer() {
        let only_alice = |mask: &str| mask.starts_with("alice!");
        assert!(only_alice.is_authorized("alice!a@h"));
        assert!(!only_alice.is_authorized("bob!b@h"));
    }

    #[test]
    fn test_deserialize_from_toml() {
        #[derive(Deserialize)]
        struct Host {
            whitelist: Whitelist,
        }
        let host: Host = toml::from_str(r#"whitelist = ["*!*@home"]"#).unwrap();
        assert!(host.whitelist.is_authorized("me!me@home"));
        assert_eq!(host.whitelist.masks(), ["*!*@home".to_string()]);
    }
}
