//! Configuration management for replink.
//!
//! Parses `replink.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ## Environment Variable Expansion
//!
//! String configuration values support environment variable expansion:
//!
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default
//!
//! Expanded fields:
//! - `repl.directory`
//! - `repl.html`
//! - `repl.target`

mod expand;

use std::path::{Path, PathBuf};

use replink_repl::ReplOptions;
use serde::Deserialize;

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override the playground source directory.
    pub directory: Option<PathBuf>,
    /// Override the anchor target.
    pub target: Option<String>,
    /// Override the fallback link text.
    pub default_text: Option<String>,
    /// Override the redirect page output directory.
    pub output_dir: Option<PathBuf>,
}

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "replink.toml";

/// Default redirect page output directory.
const DEFAULT_OUTPUT_DIR: &str = "public";

/// Application configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Playground link configuration.
    pub repl: ReplConfig,
    /// `CodePen` redirect page configuration.
    pub codepen: CodePenConfig,

    /// Resolved source directory (set after loading).
    #[serde(skip)]
    pub directory: Option<PathBuf>,
    /// Resolved redirect page output directory (set after loading).
    #[serde(skip)]
    pub output_dir: PathBuf,
    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

/// `[repl]` section.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ReplConfig {
    /// Source directory, relative to the config file.
    pub directory: Option<String>,
    /// Fallback link text; the library default applies when unset.
    pub default_text: Option<String>,
    /// CodeSandbox dependencies (`name` or `name@version`).
    pub dependencies: Vec<String>,
    /// HTML boilerplate for sandboxes and pens.
    pub html: String,
    /// Anchor `target` attribute.
    pub target: Option<String>,
}

/// `[codepen]` section.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct CodePenConfig {
    /// External scripts every pen loads.
    pub externals: Vec<String>,
    /// Output directory for redirect pages, relative to the config file.
    pub output_dir: String,
}

impl Default for CodePenConfig {
    fn default() -> Self {
        Self {
            externals: Vec::new(),
            output_dir: DEFAULT_OUTPUT_DIR.to_owned(),
        }
    }
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`repl.directory`").
        field: String,
        /// Error message (e.g., "${`EXAMPLES_DIR`} not set").
        message: String,
    },
}

/// Require a string field to be non-empty.
fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `replink.toml` in current directory and parents.
    ///
    /// CLI settings are applied after loading and path resolution, allowing CLI
    /// arguments to take precedence over config file values.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist, parsing fails or
    /// validation fails.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = Self::discover_config() {
            Self::load_from_file(&discovered)?
        } else {
            Self::default_with_cwd()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
        }

        Ok(config)
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(directory) = &settings.directory {
            self.directory = Some(directory.clone());
        }
        if let Some(target) = &settings.target {
            self.repl.target = Some(target.clone());
        }
        if let Some(default_text) = &settings.default_text {
            self.repl.default_text = Some(default_text.clone());
        }
        if let Some(output_dir) = &settings.output_dir {
            self.output_dir.clone_from(output_dir);
        }
    }

    /// Options for the playground link transformer and redirect generator.
    ///
    /// The library validates the directory; a config without one yields
    /// options that fail validation there.
    #[must_use]
    pub fn repl_options(&self) -> ReplOptions {
        let mut options = ReplOptions {
            dependencies: self.repl.dependencies.clone(),
            directory: self.directory.clone(),
            html: self.repl.html.clone(),
            target: self.repl.target.clone(),
            ..ReplOptions::default()
        };
        if let Some(text) = &self.repl.default_text {
            options.default_text.clone_from(text);
        }
        options
    }

    /// Search for config file in current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let mut current = std::env::current_dir().ok()?;
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Create default config with paths relative to current working directory.
    fn default_with_cwd() -> Self {
        let cwd = std::env::current_dir().unwrap_or_default();
        Self::default_with_base(&cwd)
    }

    /// Create default config with paths relative to given base directory.
    fn default_with_base(base: &Path) -> Self {
        Self {
            output_dir: base.join(DEFAULT_OUTPUT_DIR),
            ..Self::default()
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        // Expand environment variables before path resolution
        config.expand_env_vars()?;

        // Validate raw values before they turn into paths
        config.validate()?;

        let config_dir = path.parent().unwrap_or(Path::new("."));
        config.resolve_paths(config_dir);
        config.config_path = Some(path.to_path_buf());

        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        require_non_empty(&self.codepen.output_dir, "codepen.output_dir")?;
        if let Some(target) = &self.repl.target {
            require_non_empty(target, "repl.target")?;
        }
        Ok(())
    }

    /// Expand environment variable references in configuration strings.
    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        expand::expand_opt(&mut self.repl.directory, "repl.directory")?;
        expand::expand_opt(&mut self.repl.target, "repl.target")?;
        self.repl.html = expand::expand_env(&self.repl.html, "repl.html")?;
        Ok(())
    }

    /// Resolve relative paths against the config directory.
    fn resolve_paths(&mut self, config_dir: &Path) {
        self.directory = self.repl.directory.as_deref().map(|d| config_dir.join(d));
        self.output_dir = config_dir.join(&self.codepen.output_dir);
    }
}
