use std::rc::Rc;

use terminal_shell::{Command, CommandContext};
use terminal_shell_contract::{CommandDescriptor, CommandOutput, ShellEffect, ShellError, Theme};

use super::host_error;
use crate::{config::ShellConfig, ShellServices};

pub(super) fn registrations(services: &ShellServices, config: &Rc<ShellConfig>) -> Vec<Command> {
    let resume = (services.clone(), config.clone());
    let theme = services.clone();
    let matrix = (services.clone(), config.clone());
    let admin = (services.clone(), config.clone());
    vec![
        Command::from_fn(
            CommandDescriptor::new("resume", "Download my resume."),
            move |_| resume_output(resume.0.clone(), resume.1.clone()),
        ),
        Command::from_fn(
            CommandDescriptor::new("theme", "Show or change the color theme.")
                .with_usage("theme [light|dark|hacker]"),
            move |context| theme_output(theme.clone(), context),
        ),
        Command::from_fn(
            CommandDescriptor::new("matrix", "Follow the white rabbit."),
            move |_| matrix_output(matrix.0.clone(), matrix.1.clone()),
        ),
        Command::from_fn(
            CommandDescriptor::new("admin", "Open the content admin panel."),
            move |_| admin_output(admin.0.clone(), admin.1.clone()),
        ),
    ]
}

async fn resume_output(
    services: ShellServices,
    config: Rc<ShellConfig>,
) -> Result<CommandOutput, ShellError> {
    services
        .resume
        .download(&config.resume_url)
        .await
        .map_err(host_error)?;
    Ok(CommandOutput::success(format!(
        "Downloading resume... If nothing happens, open {}",
        config.resume_url
    )))
}

async fn theme_output(
    services: ShellServices,
    context: CommandContext,
) -> Result<CommandOutput, ShellError> {
    let Some(raw) = context.args.first() else {
        return Ok(CommandOutput::info(format!(
            "Current theme: {}. Available themes: {}\nUsage: theme [light|dark|hacker]",
            services.theme.current_theme(),
            Theme::available()
        )));
    };
    let theme: Theme = raw.parse()?;
    services.theme.set_theme(theme).await.map_err(host_error)?;
    services.effects.notify(ShellEffect::ThemeChanged { theme });
    Ok(CommandOutput::success(format!("Theme changed to {theme}.")))
}

async fn matrix_output(
    services: ShellServices,
    config: Rc<ShellConfig>,
) -> Result<CommandOutput, ShellError> {
    services.effects.notify(ShellEffect::MatrixRain {
        duration_ms: config.effects.matrix_duration_ms,
    });
    Ok(CommandOutput::success("Wake up, Neo... The Matrix has you."))
}

async fn admin_output(
    services: ShellServices,
    config: Rc<ShellConfig>,
) -> Result<CommandOutput, ShellError> {
    let path = config.admin.path.clone();
    let delay_ms = config.admin.redirect_delay_ms;
    services
        .navigation
        .navigate(&path, delay_ms)
        .map_err(host_error)?;
    services
        .effects
        .notify(ShellEffect::Navigate { path, delay_ms });
    Ok(CommandOutput::info("Redirecting to the admin panel..."))
}
