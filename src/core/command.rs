//! # Command Parsing
//!
//! Turns one line of free text into a structured [`Command`]: a primary verb
//! plus flag/value parameters.
//!
//! Parsing is pure and total. It never fails and performs no validation of
//! which verbs or flags are legal - that is the navigator's job. Malformed
//! input degrades to an empty or partial command that the navigator then
//! rejects with a diagnostic.

use std::collections::HashMap;

/// A parsed command line.
///
/// `"members -a Core -t Core.Widget"` parses to primary `members` with
/// parameters `{"-a": "Core", "-t": "Core.Widget"}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    primary: Option<String>,
    parameters: HashMap<String, String>,
}

impl Command {
    /// Parse a raw line.
    ///
    /// Tokenizes on whitespace. The first token is the primary verb. Any
    /// later token starting with `-` is a flag consuming the next token as
    /// its value; a trailing flag with no value is dropped silently. An
    /// empty line yields a command with no primary, which is a valid no-op.
    pub fn parse(text: &str) -> Self {
        let tokens: Vec<&str> = text.split_whitespace().collect();
        let primary = tokens.first().map(|t| t.to_string());

        let mut parameters = HashMap::new();
        let mut i = 1;
        while i < tokens.len() {
            if tokens[i].starts_with('-') {
                // A flag needs a following value token
                if i + 1 >= tokens.len() {
                    break;
                }
                parameters.insert(tokens[i].to_string(), tokens[i + 1].to_string());
                i += 2;
            } else {
                i += 1;
            }
        }

        Self {
            primary,
            parameters,
        }
    }

    /// The primary verb, or `None` for an empty line.
    pub fn primary(&self) -> Option<&str> {
        self.primary.as_deref()
    }

    /// The value of a flag such as `-a`, if present.
    pub fn parameter(&self, flag: &str) -> Option<&str> {
        self.parameters.get(flag).map(String::as_str)
    }

    /// Number of parsed flag/value pairs.
    pub fn parameter_count(&self) -> usize {
        self.parameters.len()
    }
}
