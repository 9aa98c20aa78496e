//! Terminal configuration loaded from the embedded `terminal.toml`.

use leptos::logging;
use serde::{Deserialize, Serialize};
use terminal_shell::DEFAULT_MAX_ENTRIES;
use thiserror::Error;

/// Raw TOML shipped with the crate.
pub const EMBEDDED_CONFIG_TOML: &str = include_str!("../config/terminal.toml");

const DEFAULT_PROMPT: &str = "visitor@portfolio:~$";
const DEFAULT_BANNER: &str = "[ portfolio ]";
const DEFAULT_ADMIN_PATH: &str = "/admin";
const DEFAULT_REDIRECT_DELAY_MS: u32 = 1500;
const DEFAULT_MATRIX_DURATION_MS: u32 = 5000;

/// Configuration failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The document is not valid TOML or has mistyped fields.
    #[error("failed to parse terminal config: {0}")]
    Parse(String),
    /// The prompt is blank.
    #[error("prompt must not be empty")]
    EmptyPrompt,
    /// The scrollback cap is zero.
    #[error("max_entries must be at least 1")]
    ZeroMaxEntries,
    /// The admin route is not an absolute path.
    #[error("admin path `{path}` must start with `/`")]
    InvalidAdminPath {
        /// Rejected path.
        path: String,
    },
}

/// Admin redirect settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdminConfig {
    /// Route the `admin` command navigates to.
    pub path: String,
    /// Delay before navigating.
    pub redirect_delay_ms: u32,
}

impl Default for AdminConfig {
    fn default() -> Self {
        Self {
            path: DEFAULT_ADMIN_PATH.to_string(),
            redirect_delay_ms: DEFAULT_REDIRECT_DELAY_MS,
        }
    }
}

/// Presentation effect settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EffectsConfig {
    /// Length of a matrix rain burst.
    pub matrix_duration_ms: u32,
}

impl Default for EffectsConfig {
    fn default() -> Self {
        Self {
            matrix_duration_ms: DEFAULT_MATRIX_DURATION_MS,
        }
    }
}

/// Terminal shell settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShellConfig {
    /// Prompt shown before the input and echoed commands.
    pub prompt: String,
    /// Lines printed under the banner when a session starts.
    pub welcome: Vec<String>,
    /// ASCII art banner.
    pub banner: String,
    /// Scrollback cap.
    pub max_entries: usize,
    /// Resume document handed to the resume service.
    pub resume_url: String,
    /// Email shown by `contact`; the profile email is used when unset.
    pub contact_email: Option<String>,
    /// Admin redirect settings.
    pub admin: AdminConfig,
    /// Effect settings.
    pub effects: EffectsConfig,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            prompt: DEFAULT_PROMPT.to_string(),
            welcome: vec!["Type 'help' to see available commands.".to_string()],
            banner: DEFAULT_BANNER.to_string(),
            max_entries: DEFAULT_MAX_ENTRIES,
            resume_url: "/resume.pdf".to_string(),
            contact_email: None,
            admin: AdminConfig::default(),
            effects: EffectsConfig::default(),
        }
    }
}

impl ShellConfig {
    /// Parses and validates a TOML document. Missing keys take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when parsing or validation fails.
    pub fn from_toml_str(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(raw).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Loads the embedded config, falling back to defaults when it is invalid.
    pub fn load_embedded() -> Self {
        match Self::from_toml_str(EMBEDDED_CONFIG_TOML) {
            Ok(config) => config,
            Err(err) => {
                logging::warn!("using default terminal config: {err}");
                Self::default()
            }
        }
    }

    /// Checks cross-field constraints.
    ///
    /// # Errors
    ///
    /// Returns the first violated constraint.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.prompt.trim().is_empty() {
            return Err(ConfigError::EmptyPrompt);
        }
        if self.max_entries == 0 {
            return Err(ConfigError::ZeroMaxEntries);
        }
        if !self.admin.path.starts_with('/') {
            return Err(ConfigError::InvalidAdminPath {
                path: self.admin.path.clone(),
            });
        }
        Ok(())
    }
}
