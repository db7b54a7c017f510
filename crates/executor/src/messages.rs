//! Localized response templates and command descriptions.
//!
//! Every string the handlers emit comes from [`Messages`]. Templates use
//! `{name}` placeholders; the host may override any field from its config
//! file, unspecified fields keep the English defaults.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Name and description of a command parameter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParamText {
    /// Parameter name shown in usage
    pub name: String,
    /// One-line description
    pub description: String,
}

impl ParamText {
    fn new(name: &str, description: &str) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
        }
    }
}

/// Name, description and parameters of a command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandText {
    /// Command name as typed after the prefix
    pub name: String,
    /// One-line description
    pub description: String,
    /// Parameters, in order
    pub params: Vec<ParamText>,
}

impl CommandText {
    /// `name <param> <param>`
    pub fn usage(&self) -> String {
        let mut usage = self.name.clone();
        for param in &self.params {
            usage.push_str(" <");
            usage.push_str(&param.name);
            usage.push('>');
        }
        usage
    }
}

/// Response templates and command texts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Messages {
    /// `define` command
    pub define: CommandText,
    /// `add-define` command
    pub add_define: CommandText,
    /// `remove-define` command
    pub remove_define: CommandText,

    /// Lookup hit. Placeholders: `sender`, `term`, `definition`
    pub define_found: String,
    /// Lookup miss. Placeholders: `sender`, `term`
    pub define_not_found: String,
    /// Term added. Placeholders: `term`
    pub add_success: String,
    /// Term already defined. Placeholders: `term`
    pub add_already_exists: String,
    /// Term removed. Placeholders: `term`
    pub remove_success: String,
    /// Removal of an undefined term. Placeholders: `term`
    pub remove_not_found: String,
    /// Sender not authorized. Placeholders: `command`
    pub access_denied: String,
    /// Missing parameter. Placeholders: `command`, `usage`
    pub usage: String,
    /// Store fault or rejected input. Placeholders: `command`
    pub store_error: String,
    /// One help line per command. Placeholders: `usage`, `description`
    pub help_line: String,
}

impl Default for Messages {
    fn default() -> Self {
        Self {
            define: CommandText {
                name: "define".into(),
                description: "Displays the definition for a given term.".into(),
                params: vec![ParamText::new("term", "The term to look up.")],
            },
            add_define: CommandText {
                name: "add-define".into(),
                description: "Adds a new definition to the dictionary.".into(),
                params: vec![
                    ParamText::new("term", "The term to define."),
                    ParamText::new("definition", "The definition of the term."),
                ],
            },
            remove_define: CommandText {
                name: "remove-define".into(),
                description: "Removes a definition from the dictionary.".into(),
                params: vec![ParamText::new("term", "The term to remove.")],
            },
            define_found: "{sender}: {definition}".into(),
            define_not_found: "{sender}: I have no definition for \"{term}\".".into(),
            add_success: "The definition for \"{term}\" has been added.".into(),
            add_already_exists: "A definition for \"{term}\" already exists.".into(),
            remove_success: "The definition for \"{term}\" has been removed.".into(),
            remove_not_found: "There is no definition for \"{term}\".".into(),
            access_denied: "You are not allowed to use {command}.".into(),
            usage: "Missing parameters. Usage: {usage}".into(),
            store_error: "{command} failed, please try again later.".into(),
            help_line: "{usage} - {description}".into(),
        }
    }
}

/// Substitute `{name}` placeholders in `template` in a single pass.
///
/// Substituted values are not scanned again, so a definition containing
/// `{term}` is emitted literally. Unknown placeholders are left as-is.
pub fn render(template: &str, vars: &[(&str, &str)]) -> String {
    let vars: HashMap<&str, &str> = vars.iter().copied().collect();
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        match after.find('}') {
            Some(close) => match vars.get(&after[..close]) {
                Some(value) => {
                    out.push_str(value);
                    rest = &after[close + 1..];
                }
                None => {
                    out.push('{');
                    rest = after;
                }
            },
            None => {
                out.push_str(&rest[open..]);
                rest = "";
            }
        }
    }
    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_substitutes() {
        let text = render("{sender}: {definition}", &[("sender", "bob"), ("definition", "x")]);
        assert_eq!(text, "bob: x");
    }

    #[test]
    fn test_render_single_pass() {
        let text = render("{definition}", &[("definition", "see {term}"), ("term", "oops")]);
        assert_eq!(text, "see {term}");
    }

    #[test]
    fn test_render_unknown_and_unclosed() {
        assert_eq!(render("{nope} and {", &[]), "{nope} and {");
        assert_eq!(render("a {b", &[("b", "x")]), "a {b");
    }

    #[test]
    fn test_usage() {
        assert_eq!(
            Messages::default().add_define.usage(),
            "add-define <term> <definition>"
        );
    }

    #[test]
    fn test_partial_override() {
        let messages: Messages = toml::from_str(
            r#"
            define_not_found = "{sender}: keine Definition für {term}."

            [define]
            name = "definiere"
            description = "Zeigt eine Definition."
            params = [{ name = "begriff", description = "Der Begriff." }]
            "#,
        )
        .unwrap();
        assert_eq!(messages.define.name, "definiere");
        assert_eq!(messages.define.usage(), "definiere <begriff>");
        assert_eq!(messages.add_define, Messages::default().add_define);
        assert_eq!(messages.add_success, Messages::default().add_success);
    }
}
