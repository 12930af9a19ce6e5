//! Playground link options and their validation.

use std::ffi::OsString;
use std::path::{self, Path, PathBuf};

use crate::consts::DEFAULT_TEXT;
use crate::error::ReplError;

/// Options for rewriting playground links, as supplied by the caller.
///
/// Call [`validate`](Self::validate) (or construct a
/// [`ReplTransformer`](crate::ReplTransformer), which does it for you) before use.
#[derive(Clone, Debug)]
pub struct ReplOptions {
    /// Link text for links without text of their own.
    pub default_text: String,
    /// CodeSandbox dependencies, as `name` or `name@version`.
    pub dependencies: Vec<String>,
    /// Base directory that link references are resolved against (required).
    pub directory: Option<PathBuf>,
    /// `index.html` content for CodeSandbox and `CodePen`.
    pub html: String,
    /// Anchor `target` attribute; adds `rel="noreferrer"` when set.
    pub target: Option<String>,
}

impl Default for ReplOptions {
    fn default() -> Self {
        Self {
            default_text: DEFAULT_TEXT.to_owned(),
            dependencies: Vec::new(),
            directory: None,
            html: String::new(),
            target: None,
        }
    }
}

impl ReplOptions {
    /// Create options for the given source directory.
    #[must_use]
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: Some(directory.into()),
            ..Self::default()
        }
    }

    /// Set the fallback link text.
    #[must_use]
    pub fn with_default_text(mut self, text: impl Into<String>) -> Self {
        self.default_text = text.into();
        self
    }

    /// Set CodeSandbox dependencies.
    #[must_use]
    pub fn with_dependencies<I, S>(mut self, dependencies: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.dependencies = dependencies.into_iter().map(Into::into).collect();
        self
    }

    /// Set the HTML boilerplate.
    #[must_use]
    pub fn with_html(mut self, html: impl Into<String>) -> Self {
        self.html = html.into();
        self
    }

    /// Set the anchor target.
    #[must_use]
    pub fn with_target(mut self, target: impl Into<String>) -> Self {
        self.target = Some(target.into());
        self
    }

    /// Validate the options.
    ///
    /// The directory must be set and must exist. The validated directory is
    /// absolute and always ends with a path separator.
    ///
    /// # Errors
    ///
    /// Returns [`ReplError::Config`] if the directory is missing, empty or does
    /// not exist.
    pub fn validate(self) -> Result<Options, ReplError> {
        let directory = match self.directory {
            Some(dir) if !dir.as_os_str().is_empty() => dir,
            _ => return Err(ReplError::Config("directory required".to_owned())),
        };

        if !directory.is_dir() {
            return Err(ReplError::Config(format!(
                "invalid directory: {}",
                directory.display()
            )));
        }

        let directory = path::absolute(&directory).map_err(|e| {
            ReplError::Config(format!("invalid directory: {}: {e}", directory.display()))
        })?;

        Ok(Options {
            default_text: self.default_text,
            dependencies: self.dependencies,
            directory: with_trailing_separator(directory),
            html: self.html,
            target: self.target,
        })
    }
}

/// Validated playground link options.
#[derive(Clone, Debug)]
pub struct Options {
    pub(crate) default_text: String,
    pub(crate) dependencies: Vec<String>,
    pub(crate) directory: PathBuf,
    pub(crate) html: String,
    pub(crate) target: Option<String>,
}

impl Options {
    /// Absolute source directory, ending with a path separator.
    #[must_use]
    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// Fallback link text.
    #[must_use]
    pub fn default_text(&self) -> &str {
        &self.default_text
    }

    /// CodeSandbox dependencies.
    #[must_use]
    pub fn dependencies(&self) -> &[String] {
        &self.dependencies
    }

    /// HTML boilerplate.
    #[must_use]
    pub fn html(&self) -> &str {
        &self.html
    }

    /// Anchor target, if any.
    #[must_use]
    pub fn target(&self) -> Option<&str> {
        self.target.as_deref()
    }
}

fn with_trailing_separator(directory: PathBuf) -> PathBuf {
    let mut raw: OsString = directory.into_os_string();
    let ends_with_separator = raw
        .as_encoded_bytes()
        .last()
        .is_some_and(|&b| path::is_separator(char::from(b)));
    if !ends_with_separator {
        raw.push(path::MAIN_SEPARATOR_STR);
    }
    PathBuf::from(raw)
}
