//! Command-line splitting.
//!
//! Lines are split on ASCII whitespace only. There is no quoting or escaping: every visitor
//! command takes simple word arguments.

use serde::{Deserialize, Serialize};

/// A submitted line split into a command name and its arguments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedLine {
    /// First token, lowercased.
    pub name: String,
    /// Remaining tokens with their case preserved.
    pub args: Vec<String>,
}

/// Splits `line` into a [`ParsedLine`], returning `None` for blank input.
pub fn parse_line(line: &str) -> Option<ParsedLine> {
    let mut tokens = line.split_ascii_whitespace();
    let name = tokens.next()?.to_lowercase();
    Some(ParsedLine {
        name,
        args: tokens.map(str::to_string).collect(),
    })
}
