//! Portfolio terminal runtime: configuration, built-in commands, and shell construction.
//!
//! [`build_shell`] wires the built-in commands to a [`ShellServices`] bundle and returns a ready
//! [`ShellSession`] with the welcome banner already in the scrollback.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

use std::rc::Rc;

use portfolio_host::{
    MemoryNavigationService, MemoryPortfolioSource, MemoryResumeService, MemoryThemeService,
    NavigationService, PortfolioSource, ResumeService, ThemeService,
};
use terminal_shell::{CommandRegistry, RegistryError, SessionOptions, ShellSession};
use terminal_shell_contract::{CommandOutput, EffectSink, NoopEffectSink};

mod commands;
pub mod config;

pub use config::{AdminConfig, ConfigError, EffectsConfig, ShellConfig, EMBEDDED_CONFIG_TOML};

/// Collaborators the built-in commands talk to.
#[derive(Clone)]
pub struct ShellServices {
    /// Portfolio data.
    pub portfolio: Rc<dyn PortfolioSource>,
    /// Active theme.
    pub theme: Rc<dyn ThemeService>,
    /// Resume download.
    pub resume: Rc<dyn ResumeService>,
    /// Route changes.
    pub navigation: Rc<dyn NavigationService>,
    /// Presentation notifications.
    pub effects: Rc<dyn EffectSink>,
}

impl ShellServices {
    /// In-memory services over `portfolio` with no presentation side channels.
    pub fn in_memory(portfolio: MemoryPortfolioSource) -> Self {
        Self {
            portfolio: Rc::new(portfolio),
            theme: Rc::new(MemoryThemeService::default()),
            resume: Rc::new(MemoryResumeService::default()),
            navigation: Rc::new(MemoryNavigationService::default()),
            effects: Rc::new(NoopEffectSink),
        }
    }
}

/// Builds the registry of built-in commands.
///
/// # Errors
///
/// Returns [`RegistryError`] if two built-ins collide.
pub fn build_registry(
    services: &ShellServices,
    config: &Rc<ShellConfig>,
) -> Result<CommandRegistry, RegistryError> {
    let mut registry = CommandRegistry::new();
    for command in commands::builtin_commands(services, config) {
        registry.register(command)?;
    }
    Ok(registry)
}

/// Scrollback entries printed when a session starts.
pub fn welcome_outputs(config: &ShellConfig) -> Vec<CommandOutput> {
    let mut outputs = Vec::with_capacity(2);
    if !config.banner.trim().is_empty() {
        outputs.push(CommandOutput::ascii(config.banner.clone()));
    }
    if !config.welcome.is_empty() {
        outputs.push(CommandOutput::info(config.welcome.join("\n")));
    }
    outputs
}

/// Builds a session over the built-in commands and prints the welcome banner.
///
/// # Errors
///
/// Returns [`RegistryError`] if two built-ins collide.
pub fn build_shell(services: ShellServices, config: ShellConfig) -> Result<ShellSession, RegistryError> {
    let config = Rc::new(config);
    let registry = build_registry(&services, &config)?;
    let session = ShellSession::new(
        registry,
        SessionOptions {
            max_entries: config.max_entries,
        },
    );
    for output in welcome_outputs(&config) {
        session.push_system(output);
    }
    Ok(session)
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use futures::executor::block_on;
    use pretty_assertions::assert_eq;
    use portfolio_host::NoopPortfolioSource;
    use terminal_shell::{ShellStatus, SubmitOutcome};
    use terminal_shell_contract::{ShellEffect, StructuredView, Theme};

    use super::*;

    #[derive(Default)]
    struct RecordingSink {
        effects: RefCell<Vec<ShellEffect>>,
    }

    impl EffectSink for RecordingSink {
        fn notify(&self, effect: ShellEffect) {
            self.effects.borrow_mut().push(effect);
        }
    }

    struct Fixture {
        session: ShellSession,
        theme: MemoryThemeService,
        resume: MemoryResumeService,
        navigation: MemoryNavigationService,
        sink: Rc<RecordingSink>,
    }

    fn fixture() -> Fixture {
        let theme = MemoryThemeService::default();
        let resume = MemoryResumeService::default();
        let navigation = MemoryNavigationService::default();
        let sink = Rc::new(RecordingSink::default());
        let services = ShellServices {
            portfolio: Rc::new(MemoryPortfolioSource::embedded(3).expect("portfolio")),
            theme: Rc::new(theme.clone()),
            resume: Rc::new(resume.clone()),
            navigation: Rc::new(navigation.clone()),
            effects: sink.clone(),
        };
        let session = build_shell(services, ShellConfig::load_embedded()).expect("shell");
        Fixture {
            session,
            theme,
            resume,
            navigation,
            sink,
        }
    }

    fn run(session: &ShellSession, line: &str) -> CommandOutput {
        match session.submit_line(line) {
            SubmitOutcome::Pending(pending) => block_on(pending),
            other => panic!("expected a pending command, got {other:?}"),
        }
        assert_eq!(session.status(), ShellStatus::Idle);
        session.entries().last().expect("entry").output.clone()
    }

    #[test]
    fn session_starts_with_the_welcome_banner() {
        let fixture = fixture();
        let entries = fixture.session.entries();
        assert_eq!(entries.len(), 2);
        assert!(entries.iter().all(|entry| entry.is_system()));
        assert!(matches!(entries[0].output, CommandOutput::Ascii(_)));
    }

    #[test]
    fn builtins_register_without_collisions() {
        let services = ShellServices::in_memory(MemoryPortfolioSource::embedded(1).expect("data"));
        let registry =
            build_registry(&services, &Rc::new(ShellConfig::default())).expect("registry");
        let names: Vec<_> = registry
            .public_descriptors()
            .into_iter()
            .map(|descriptor| descriptor.name)
            .collect();
        assert_eq!(names.first().map(String::as_str), Some("help"));
        assert!(names.contains(&"projects".to_string()));
        assert!(!names.contains(&"sudo".to_string()));
        assert!(registry.resolve("SUDO").is_ok());
    }

    #[test]
    fn invalid_theme_is_rejected_before_the_service() {
        let fixture = fixture();
        let output = run(&fixture.session, "theme neon");
        assert_eq!(
            output,
            CommandOutput::error("Invalid theme: neon. Available themes: light, dark, hacker")
        );
        assert_eq!(fixture.theme.current_theme(), Theme::Dark);
        assert!(fixture.sink.effects.borrow().is_empty());
    }

    #[test]
    fn valid_theme_updates_the_service_and_notifies() {
        let fixture = fixture();
        let output = run(&fixture.session, "theme HACKER");
        assert_eq!(output, CommandOutput::success("Theme changed to hacker."));
        assert_eq!(fixture.theme.current_theme(), Theme::Hacker);

        let output = run(&fixture.session, "theme dark");
        assert!(output.as_text().expect("text").contains("dark"));
        assert_eq!(fixture.theme.current_theme(), Theme::Dark);
        assert_eq!(
            fixture.sink.effects.borrow().last(),
            Some(&ShellEffect::ThemeChanged { theme: Theme::Dark })
        );
    }

    #[test]
    fn theme_without_argument_reports_current() {
        let fixture = fixture();
        let output = run(&fixture.session, "theme");
        assert!(matches!(output, CommandOutput::Info(_)));
        assert!(output.as_text().expect("text").starts_with("Current theme: dark."));
    }

    #[test]
    fn theme_reports_the_host_starting_theme() {
        let mut services =
            ShellServices::in_memory(MemoryPortfolioSource::embedded(1).expect("data"));
        services.theme = Rc::new(MemoryThemeService::new(Theme::Hacker));
        let session = build_shell(services, ShellConfig::default()).expect("shell");
        assert!(run(&session, "theme")
            .as_text()
            .expect("text")
            .starts_with("Current theme: hacker."));
    }

    #[test]
    fn unknown_command_reports_not_found() {
        let fixture = fixture();
        assert_eq!(
            run(&fixture.session, "nosuchcmd"),
            CommandOutput::error("Command not found: nosuchcmd. Type 'help' for available commands.")
        );
    }

    #[test]
    fn project_index_selects_detail_or_fails() {
        let fixture = fixture();
        let listing = run(&fixture.session, "projects");
        let CommandOutput::Structured(StructuredView::ProjectList { items }) = listing else {
            panic!("expected project list");
        };
        assert_eq!(items[0].index, 1);

        let detail = run(&fixture.session, "projects 2");
        let CommandOutput::Structured(StructuredView::ProjectDetail(card)) = detail else {
            panic!("expected project detail");
        };
        assert_eq!(card.title, items[1].title);

        let out_of_range = run(&fixture.session, "projects 99");
        assert!(matches!(out_of_range, CommandOutput::Error(_)));
        let signed = run(&fixture.session, "projects +2");
        assert!(signed
            .as_text()
            .expect("text")
            .starts_with("Invalid project number: +2."));
        let not_a_number = run(&fixture.session, "projects two");
        assert!(not_a_number
            .as_text()
            .expect("text")
            .starts_with("Invalid project number: two."));
    }

    #[test]
    fn collaborator_failures_become_execution_errors() {
        let mut services =
            ShellServices::in_memory(MemoryPortfolioSource::embedded(1).expect("data"));
        services.portfolio = Rc::new(NoopPortfolioSource);
        let session = build_shell(services, ShellConfig::default()).expect("shell");
        assert_eq!(
            run(&session, "about"),
            CommandOutput::error("Error executing command: portfolio data unavailable")
        );
        assert_eq!(run(&session, "echo still alive"), CommandOutput::text("still alive"));
    }

    #[test]
    fn admin_schedules_navigation() {
        let fixture = fixture();
        let output = run(&fixture.session, "admin");
        assert!(matches!(output, CommandOutput::Info(_)));
        assert_eq!(
            fixture.navigation.scheduled(),
            vec![("/admin".to_string(), 1500)]
        );
        assert_eq!(
            fixture.sink.effects.borrow().as_slice(),
            &[ShellEffect::Navigate {
                path: "/admin".to_string(),
                delay_ms: 1500
            }]
        );
    }

    #[test]
    fn matrix_and_resume_use_their_side_channels() {
        let fixture = fixture();
        assert!(matches!(run(&fixture.session, "matrix"), CommandOutput::Success(_)));
        assert_eq!(
            fixture.sink.effects.borrow().as_slice(),
            &[ShellEffect::MatrixRain { duration_ms: 5000 }]
        );

        assert!(matches!(run(&fixture.session, "resume"), CommandOutput::Success(_)));
        assert_eq!(
            fixture.resume.requested(),
            vec!["/assets/resume.pdf".to_string()]
        );
    }

    #[test]
    fn contact_prefers_the_configured_email() {
        let fixture = fixture();
        let CommandOutput::Structured(StructuredView::Contact { links }) =
            run(&fixture.session, "contact")
        else {
            panic!("expected contact view");
        };
        assert_eq!(links[0].url, "mailto:alex@rivera.dev");
        assert!(links.len() > 1);
    }

    #[test]
    fn clear_then_history_keeps_the_full_history() {
        let fixture = fixture();
        run(&fixture.session, "about");
        assert!(matches!(
            fixture.session.submit_line("clear"),
            SubmitOutcome::Cleared
        ));
        assert_eq!(fixture.session.entry_count(), 0);
        assert_eq!(
            run(&fixture.session, "history"),
            CommandOutput::text("   1  about\n   2  clear\n   3  history")
        );
    }

    #[test]
    fn welcome_skips_blank_sections() {
        let config = ShellConfig {
            banner: "  ".to_string(),
            welcome: Vec::new(),
            ..ShellConfig::default()
        };
        assert!(welcome_outputs(&config).is_empty());
    }
}
