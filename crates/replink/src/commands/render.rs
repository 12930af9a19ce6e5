//! `replink render` command implementation.

use std::io::Write;
use std::path::{Path, PathBuf};

use clap::Args;
use replink_config::{CliSettings, Config};
use replink_repl::ReplTransformer;

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the render command.
#[derive(Args)]
pub(crate) struct RenderArgs {
    /// Markdown file to render.
    input: PathBuf,

    /// Write HTML to this file instead of stdout.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Directory that playground links are resolved against (overrides config).
    #[arg(short, long)]
    directory: Option<PathBuf>,

    /// Anchor target for rewritten links, e.g. `_blank` (overrides config).
    #[arg(long)]
    target: Option<String>,

    /// Text for links that have none (overrides config).
    #[arg(long)]
    default_text: Option<String>,

    /// Path to configuration file (default: auto-discover replink.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable verbose output.
    #[arg(short, long)]
    pub verbose: bool,
}

impl RenderArgs {
    /// Execute the render command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration is invalid, a linked file is missing,
    /// or the input cannot be read or the output written.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let cli_settings = CliSettings {
            directory: self.directory,
            target: self.target,
            default_text: self.default_text,
            ..Default::default()
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;

        let html = render_file(&config, &self.input)?;

        match &self.output {
            Some(path) => {
                std::fs::write(path, &html).map_err(|e| CliError::io(path.display(), e))?;
                Output::new().success(&format!("Wrote {}", path.display()));
            }
            None => {
                let mut stdout = std::io::stdout().lock();
                stdout
                    .write_all(html.as_bytes())
                    .and_then(|()| stdout.flush())
                    .map_err(|e| CliError::io("stdout", e))?;
            }
        }

        Ok(())
    }
}

/// Render one markdown file with the configured transformer.
fn render_file(config: &Config, input: &Path) -> Result<String, CliError> {
    let transformer = ReplTransformer::new(config.repl_options())?;
    let markdown =
        std::fs::read_to_string(input).map_err(|e| CliError::io(input.display(), e))?;
    Ok(transformer.render_markdown(&markdown)?)
}
