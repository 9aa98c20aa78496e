//! Shared terminal command contracts used by the shell engine, the built-in command runtime, and
//! the terminal UI.
//!
//! This crate is intentionally runtime-agnostic. It defines serializable command metadata, the
//! tagged output union produced by handlers, the shell error taxonomy, and the notification
//! interface handlers use for side channels such as the matrix background.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod view;

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use view::{
    CertificateItem, ContactLink, ExperienceItem, HelpRow, ProfileCard, ProjectCard,
    RecommendationItem, SkillBar, SkillCategory, StructuredView,
};

/// Placeholder content shown while a handler has not settled yet.
pub const PROCESSING_PLACEHOLDER: &str = "Processing...";

/// Visibility policy for registered commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CommandVisibility {
    /// Command is listed in help and offered as a suggestion.
    #[default]
    Public,
    /// Command is callable but omitted from help and suggestions.
    Hidden,
}

/// Registration metadata for one command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandDescriptor {
    /// Command name as typed by the visitor. Matching is case-insensitive.
    pub name: String,
    /// One-line summary shown by `help`.
    pub description: String,
    /// Optional usage string such as `projects [number]`.
    pub usage: Option<String>,
    /// Visibility policy.
    pub visibility: CommandVisibility,
}

impl CommandDescriptor {
    /// Creates a public descriptor without usage text.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            usage: None,
            visibility: CommandVisibility::Public,
        }
    }

    /// Sets the usage string.
    pub fn with_usage(mut self, usage: impl Into<String>) -> Self {
        self.usage = Some(usage.into());
        self
    }

    /// Marks the command as hidden.
    pub fn hidden(mut self) -> Self {
        self.visibility = CommandVisibility::Hidden;
        self
    }

    /// Returns whether the command shows up in help and suggestions.
    pub fn is_public(&self) -> bool {
        self.visibility == CommandVisibility::Public
    }
}

/// Output category used by the scrollback renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OutputKind {
    /// Plain text.
    Text,
    /// Failure message.
    Error,
    /// Confirmation message.
    Success,
    /// Cautionary message.
    Warning,
    /// Informational or usage message.
    Info,
    /// Whitespace-preserving art block.
    Ascii,
    /// Pre-built structured view.
    Structured,
    /// Request to empty the scrollback.
    Clear,
}

impl OutputKind {
    /// Returns the stable class suffix used by the terminal UI.
    pub fn css_id(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Error => "error",
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Info => "info",
            Self::Ascii => "ascii",
            Self::Structured => "structured",
            Self::Clear => "clear",
        }
    }
}

/// Tagged output returned by command handlers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "content", rename_all = "kebab-case")]
pub enum CommandOutput {
    /// Plain text.
    Text(String),
    /// Failure message.
    Error(String),
    /// Confirmation message.
    Success(String),
    /// Cautionary message.
    Warning(String),
    /// Informational or usage message.
    Info(String),
    /// Whitespace-preserving art block.
    Ascii(String),
    /// Pre-built structured view placed verbatim by the renderer.
    Structured(StructuredView),
    /// Empties the scrollback instead of appending.
    Clear,
}

impl CommandOutput {
    /// Plain text output.
    pub fn text(content: impl Into<String>) -> Self {
        Self::Text(content.into())
    }

    /// Error output.
    pub fn error(content: impl Into<String>) -> Self {
        Self::Error(content.into())
    }

    /// Success output.
    pub fn success(content: impl Into<String>) -> Self {
        Self::Success(content.into())
    }

    /// Warning output.
    pub fn warning(content: impl Into<String>) -> Self {
        Self::Warning(content.into())
    }

    /// Info output.
    pub fn info(content: impl Into<String>) -> Self {
        Self::Info(content.into())
    }

    /// Ascii art output.
    pub fn ascii(content: impl Into<String>) -> Self {
        Self::Ascii(content.into())
    }

    /// Output placed in a provisional entry until its handler settles.
    pub fn processing() -> Self {
        Self::Text(PROCESSING_PLACEHOLDER.to_string())
    }

    /// Returns the output category.
    pub fn kind(&self) -> OutputKind {
        match self {
            Self::Text(_) => OutputKind::Text,
            Self::Error(_) => OutputKind::Error,
            Self::Success(_) => OutputKind::Success,
            Self::Warning(_) => OutputKind::Warning,
            Self::Info(_) => OutputKind::Info,
            Self::Ascii(_) => OutputKind::Ascii,
            Self::Structured(_) => OutputKind::Structured,
            Self::Clear => OutputKind::Clear,
        }
    }

    /// Returns the raw text payload for string-backed kinds.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text)
            | Self::Error(text)
            | Self::Success(text)
            | Self::Warning(text)
            | Self::Info(text)
            | Self::Ascii(text) => Some(text),
            Self::Structured(_) | Self::Clear => None,
        }
    }
}

impl From<StructuredView> for CommandOutput {
    fn from(view: StructuredView) -> Self {
        Self::Structured(view)
    }
}

/// Structured shell error classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ShellErrorCode {
    /// The command or a named target was not found.
    NotFound,
    /// User input violated command usage (bad theme name, non-numeric index, ...).
    InvalidArgument,
    /// A collaborator the command depends on failed or is missing.
    Unavailable,
    /// Any other handler failure.
    Execution,
}

/// Error emitted by lookup or handlers.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("{message}")]
pub struct ShellError {
    /// Error category.
    pub code: ShellErrorCode,
    /// Human-readable message.
    pub message: String,
}

impl ShellError {
    /// Creates a new shell error.
    pub fn new(code: ShellErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Unknown command or target.
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ShellErrorCode::NotFound, message)
    }

    /// Invalid user input.
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::new(ShellErrorCode::InvalidArgument, message)
    }

    /// Failed or missing collaborator.
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::new(ShellErrorCode::Unavailable, message)
    }

    /// Generic handler failure.
    pub fn execution(message: impl Into<String>) -> Self {
        Self::new(ShellErrorCode::Execution, message)
    }

    /// Text placed in the scrollback when this error reaches the dispatcher boundary.
    ///
    /// Argument and lookup errors carry a complete sentence for the visitor; everything else is
    /// reported as a failed execution.
    pub fn display_text(&self) -> String {
        match self.code {
            ShellErrorCode::NotFound | ShellErrorCode::InvalidArgument => self.message.clone(),
            ShellErrorCode::Unavailable | ShellErrorCode::Execution => {
                format!("Error executing command: {}", self.message)
            }
        }
    }

    /// Converts the error into the `error`-kind output shown in the scrollback.
    pub fn into_output(self) -> CommandOutput {
        CommandOutput::Error(self.display_text())
    }
}

/// Site color scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Theme {
    /// Light background.
    Light,
    /// Dark background.
    #[default]
    Dark,
    /// Green-on-black terminal look.
    Hacker,
}

impl Theme {
    /// Every accepted theme, in display order.
    pub const ALL: [Theme; 3] = [Theme::Light, Theme::Dark, Theme::Hacker];

    /// Returns the stable theme id.
    pub fn css_id(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
            Self::Hacker => "hacker",
        }
    }

    /// Comma-separated list of accepted theme ids.
    pub fn available() -> String {
        Self::ALL
            .iter()
            .map(|theme| theme.css_id())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.css_id())
    }
}

impl FromStr for Theme {
    type Err = ShellError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.to_ascii_lowercase().as_str() {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            "hacker" => Ok(Self::Hacker),
            _ => Err(ShellError::invalid_argument(format!(
                "Invalid theme: {raw}. Available themes: {}",
                Self::available()
            ))),
        }
    }
}

/// Notification emitted by handlers for presentation-layer side channels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum ShellEffect {
    /// Run a burst of the matrix rain background for the given duration.
    MatrixRain {
        /// Burst duration in milliseconds.
        duration_ms: u32,
    },
    /// The active theme changed.
    ThemeChanged {
        /// Newly applied theme.
        theme: Theme,
    },
    /// A navigation away from the terminal was scheduled.
    Navigate {
        /// Target route.
        path: String,
        /// Delay before the navigation happens.
        delay_ms: u32,
    },
}

/// Observer receiving [`ShellEffect`] notifications.
pub trait EffectSink {
    /// Delivers one notification. Must not call back into the shell.
    fn notify(&self, effect: ShellEffect);
}

/// Effect sink that drops every notification.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopEffectSink;

impl EffectSink for NoopEffectSink {
    fn notify(&self, _effect: ShellEffect) {}
}
