use std::rc::Rc;

use terminal_shell::{Command, CommandContext};
use terminal_shell_contract::{
    CommandDescriptor, CommandOutput, HelpRow, ShellError, StructuredView,
};

use crate::config::ShellConfig;

pub(super) fn help_command() -> Command {
    Command::from_fn(
        CommandDescriptor::new("help", "List available commands or describe one.")
            .with_usage("help [command]"),
        |context| async move { help_output(&context) },
    )
}

pub(super) fn registrations(config: &Rc<ShellConfig>) -> Vec<Command> {
    let banner = config.clone();
    vec![
        Command::from_fn(
            CommandDescriptor::new("whoami", "Print who you are in this terminal."),
            |_| async { Ok(CommandOutput::text("visitor")) },
        ),
        Command::from_fn(
            CommandDescriptor::new("banner", "Show the welcome banner again."),
            move |_| {
                let art = banner.banner.clone();
                async move { Ok(CommandOutput::ascii(art)) }
            },
        ),
        Command::from_fn(
            CommandDescriptor::new("echo", "Print the given text.").with_usage("echo <text>"),
            |context| async move { Ok(CommandOutput::text(context.args.join(" "))) },
        ),
        Command::from_fn(
            CommandDescriptor::new("history", "Show commands entered this session."),
            |context| async move { Ok(history_output(&context)) },
        ),
        Command::from_fn(
            CommandDescriptor::new("clear", "Clear the terminal."),
            |_| async { Ok(CommandOutput::Clear) },
        ),
        Command::from_fn(
            CommandDescriptor::new("sudo", "Elevate privileges.").hidden(),
            |_| async {
                Ok(CommandOutput::warning(
                    "visitor is not in the sudoers file. This incident will be reported.",
                ))
            },
        ),
    ]
}

fn help_output(context: &CommandContext) -> Result<CommandOutput, ShellError> {
    let Some(target) = context.args.first() else {
        let rows = context
            .commands
            .iter()
            .map(|descriptor| HelpRow {
                name: descriptor.name.clone(),
                description: descriptor.description.clone(),
                usage: descriptor.usage.clone(),
            })
            .collect();
        return Ok(StructuredView::Help { rows }.into());
    };
    let descriptor = context
        .commands
        .iter()
        .find(|descriptor| descriptor.name.eq_ignore_ascii_case(target))
        .ok_or_else(|| {
            ShellError::not_found(format!(
                "No help available for '{target}'. Type 'help' for available commands."
            ))
        })?;
    let usage = descriptor.usage.as_deref().unwrap_or(&descriptor.name);
    Ok(CommandOutput::info(format!(
        "{} - {}\nUsage: {usage}",
        descriptor.name, descriptor.description
    )))
}

fn history_output(context: &CommandContext) -> CommandOutput {
    let lines: Vec<String> = context
        .history
        .iter()
        .enumerate()
        .map(|(offset, line)| format!("{:>4}  {line}", offset + 1))
        .collect();
    CommandOutput::text(lines.join("\n"))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn context(args: &[&str], history: &[&str]) -> CommandContext {
        CommandContext {
            name: "help".to_string(),
            args: args.iter().map(ToString::to_string).collect(),
            history: history.iter().map(ToString::to_string).collect(),
            commands: vec![
                CommandDescriptor::new("help", "List commands.").with_usage("help [command]"),
                CommandDescriptor::new("about", "Who I am."),
            ],
        }
    }

    #[test]
    fn help_lists_public_commands_in_order() {
        let output = help_output(&context(&[], &[])).expect("help");
        let CommandOutput::Structured(StructuredView::Help { rows }) = output else {
            panic!("expected help view");
        };
        let names: Vec<_> = rows.iter().map(|row| row.name.as_str()).collect();
        assert_eq!(names, vec!["help", "about"]);
        assert_eq!(rows[0].usage.as_deref(), Some("help [command]"));
    }

    #[test]
    fn help_for_one_command_shows_usage() {
        assert_eq!(
            help_output(&context(&["ABOUT"], &[])).expect("help about"),
            CommandOutput::info("about - Who I am.\nUsage: about")
        );
        let err = help_output(&context(&["sudo"], &[])).expect_err("hidden");
        assert_eq!(
            err.message,
            "No help available for 'sudo'. Type 'help' for available commands."
        );
    }

    #[test]
    fn history_is_numbered_oldest_first() {
        assert_eq!(
            history_output(&context(&[], &["about", "history"])),
            CommandOutput::text("   1  about\n   2  history")
        );
    }
}
