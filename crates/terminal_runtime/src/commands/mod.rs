//! Built-in command registrations.

use std::rc::Rc;

use terminal_shell::Command;
use terminal_shell_contract::ShellError;

use crate::{config::ShellConfig, ShellServices};

mod general;
mod portfolio;
mod site;

/// Every built-in command in help order.
pub(crate) fn builtin_commands(services: &ShellServices, config: &Rc<ShellConfig>) -> Vec<Command> {
    let mut commands = vec![general::help_command()];
    commands.extend(portfolio::registrations(services, config));
    commands.extend(site::registrations(services, config));
    commands.extend(general::registrations(config));
    commands
}

/// Maps a collaborator failure into the error shown in the scrollback.
fn host_error(message: String) -> ShellError {
    ShellError::unavailable(message)
}

/// Parses a 1-based item number for a list of `len` items.
fn parse_index(raw: &str, len: usize, noun: &str) -> Result<usize, ShellError> {
    let digits_only = !raw.is_empty() && raw.bytes().all(|byte| byte.is_ascii_digit());
    match raw.parse::<usize>() {
        Ok(index) if digits_only && (1..=len).contains(&index) => Ok(index),
        _ if len == 0 => Err(ShellError::invalid_argument(format!(
            "Invalid {noun} number: {raw}. There is nothing to show yet."
        ))),
        _ => Err(ShellError::invalid_argument(format!(
            "Invalid {noun} number: {raw}. Choose a number from 1 to {len}."
        ))),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn index_parsing_is_one_based_and_bounded() {
        assert_eq!(parse_index("1", 3, "project"), Ok(1));
        assert_eq!(parse_index("3", 3, "project"), Ok(3));
        assert_eq!(
            parse_index("0", 3, "project").expect_err("zero").message,
            "Invalid project number: 0. Choose a number from 1 to 3."
        );
        assert!(parse_index("4", 3, "project").is_err());
        assert!(parse_index("two", 3, "project").is_err());
        assert!(parse_index("-1", 3, "project").is_err());
        assert_eq!(
            parse_index("+2", 3, "project").expect_err("sign").message,
            "Invalid project number: +2. Choose a number from 1 to 3."
        );
        assert_eq!(
            parse_index("1", 0, "recommendation")
                .expect_err("empty")
                .message,
            "Invalid recommendation number: 1. There is nothing to show yet."
        );
    }
}
