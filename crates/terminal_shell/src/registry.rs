//! Command registration and lookup.

use std::{collections::HashMap, future::Future, rc::Rc};

use futures::future::LocalBoxFuture;
use terminal_shell_contract::{CommandDescriptor, CommandOutput, ShellError};
use thiserror::Error;

/// Async command handler.
pub type CommandHandler =
    Rc<dyn Fn(CommandContext) -> LocalBoxFuture<'static, Result<CommandOutput, ShellError>>>;

/// Invocation data handed to a [`CommandHandler`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandContext {
    /// Lowercased command name.
    pub name: String,
    /// Arguments after the command name, case preserved.
    pub args: Vec<String>,
    /// Session history snapshot, oldest first, including this line.
    pub history: Vec<String>,
    /// Public command descriptors in registration order.
    pub commands: Vec<CommandDescriptor>,
}

/// A registered command.
#[derive(Clone)]
pub struct Command {
    /// Registration metadata.
    pub descriptor: CommandDescriptor,
    /// Handler invoked for each execution.
    pub handler: CommandHandler,
}

impl Command {
    /// Creates a command from a descriptor and an already boxed handler.
    pub fn new(descriptor: CommandDescriptor, handler: CommandHandler) -> Self {
        Self {
            descriptor,
            handler,
        }
    }

    /// Creates a command from a closure returning any local future.
    pub fn from_fn<F, Fut>(descriptor: CommandDescriptor, handler: F) -> Self
    where
        F: Fn(CommandContext) -> Fut + 'static,
        Fut: Future<Output = Result<CommandOutput, ShellError>> + 'static,
    {
        Self::new(
            descriptor,
            Rc::new(
                move |context| -> LocalBoxFuture<'static, Result<CommandOutput, ShellError>> {
                    Box::pin(handler(context))
                },
            ),
        )
    }

    /// Returns the command name.
    pub fn name(&self) -> &str {
        &self.descriptor.name
    }
}

impl std::fmt::Debug for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Command")
            .field("descriptor", &self.descriptor)
            .finish_non_exhaustive()
    }
}

/// Registration failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// A command with the same case-insensitive name already exists.
    #[error("duplicate command `{name}`")]
    DuplicateCommand {
        /// Rejected name.
        name: String,
    },
    /// The command name was blank or contained whitespace.
    #[error("invalid command name `{name}`")]
    InvalidName {
        /// Rejected name.
        name: String,
    },
}

/// Ordered command table keyed by lowercased name.
///
/// Built once before a session starts; sessions share it read-only.
#[derive(Debug, Clone, Default)]
pub struct CommandRegistry {
    commands: Vec<Command>,
    by_key: HashMap<String, usize>,
}

impl CommandRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers one command.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::DuplicateCommand`] when the name is already taken (ignoring case)
    /// and [`RegistryError::InvalidName`] for blank names or names containing whitespace.
    pub fn register(&mut self, command: Command) -> Result<(), RegistryError> {
        let name = command.name();
        if name.is_empty() || name.chars().any(char::is_whitespace) {
            return Err(RegistryError::InvalidName {
                name: name.to_string(),
            });
        }
        let key = name.to_lowercase();
        if self.by_key.contains_key(&key) {
            return Err(RegistryError::DuplicateCommand {
                name: name.to_string(),
            });
        }
        self.by_key.insert(key, self.commands.len());
        self.commands.push(command);
        Ok(())
    }

    /// Looks up a command by name, ignoring case.
    ///
    /// # Errors
    ///
    /// Returns a not-found [`ShellError`] carrying the visitor-facing message.
    pub fn resolve(&self, name: &str) -> Result<&Command, ShellError> {
        self.by_key
            .get(&name.to_lowercase())
            .map(|index| &self.commands[*index])
            .ok_or_else(|| {
                ShellError::not_found(format!(
                    "Command not found: {name}. Type 'help' for available commands."
                ))
            })
    }

    /// Iterates every command in registration order. Call again to restart.
    pub fn list(&self) -> std::slice::Iter<'_, Command> {
        self.commands.iter()
    }

    /// Public descriptors in registration order.
    pub fn public_descriptors(&self) -> Vec<CommandDescriptor> {
        self.list()
            .filter(|command| command.descriptor.is_public())
            .map(|command| command.descriptor.clone())
            .collect()
    }

    /// Public command names starting with `prefix`, ignoring case, in registration order.
    pub fn suggestions(&self, prefix: &str) -> Vec<String> {
        let prefix = prefix.to_lowercase();
        self.list()
            .filter(|command| command.descriptor.is_public())
            .filter(|command| command.name().to_lowercase().starts_with(&prefix))
            .map(|command| command.name().to_string())
            .collect()
    }

    /// Number of registered commands.
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Returns whether nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use terminal_shell_contract::ShellErrorCode;

    use super::*;

    pub(crate) fn echo_command(name: &str) -> Command {
        Command::from_fn(CommandDescriptor::new(name, format!("{name} command")), |context| {
            async move { Ok(CommandOutput::text(context.args.join(" "))) }
        })
    }

    pub(crate) fn registry_of(names: &[&str]) -> CommandRegistry {
        let mut registry = CommandRegistry::new();
        for name in names {
            registry.register(echo_command(name)).expect("register");
        }
        registry
    }

    #[test]
    fn resolve_ignores_case() {
        let registry = registry_of(&["projects", "About"]);
        for variant in ["about", "ABOUT", "AbOuT", "About"] {
            assert_eq!(registry.resolve(variant).expect("resolve").name(), "About");
        }
        assert_eq!(registry.resolve("PROJECTS").expect("resolve").name(), "projects");
    }

    #[test]
    fn duplicate_names_are_rejected_case_insensitively() {
        let mut registry = registry_of(&["help"]);
        let err = registry.register(echo_command("HELP")).expect_err("duplicate");
        assert_eq!(
            err,
            RegistryError::DuplicateCommand {
                name: "HELP".to_string()
            }
        );
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn blank_names_are_rejected() {
        let mut registry = CommandRegistry::new();
        assert!(matches!(
            registry.register(echo_command("two words")),
            Err(RegistryError::InvalidName { .. })
        ));
        assert!(registry.is_empty());
    }

    #[test]
    fn missing_command_reports_help_hint() {
        let registry = registry_of(&["help"]);
        let err = registry.resolve("nosuchcmd").expect_err("missing");
        assert_eq!(err.code, ShellErrorCode::NotFound);
        assert_eq!(
            err.message,
            "Command not found: nosuchcmd. Type 'help' for available commands."
        );
    }

    #[test]
    fn list_is_ordered_and_restartable() {
        let registry = registry_of(&["projects", "profile", "about"]);
        let first = registry.list().map(Command::name).collect::<Vec<_>>();
        let second = registry.list().map(Command::name).collect::<Vec<_>>();
        assert_eq!(first, vec!["projects", "profile", "about"]);
        assert_eq!(first, second);
    }

    #[test]
    fn suggestions_skip_hidden_commands() {
        let mut registry = registry_of(&["projects"]);
        registry
            .register(Command::from_fn(
                CommandDescriptor::new("private", "secret").hidden(),
                |_| async { Ok(CommandOutput::Clear) },
            ))
            .expect("register hidden");
        assert_eq!(registry.suggestions("P"), vec!["projects"]);
        assert!(registry.resolve("private").is_ok());
        assert_eq!(registry.public_descriptors().len(), 1);
    }
}
