//! `replink redirects` command implementation.

use std::path::PathBuf;

use clap::Args;
use replink_config::{CliSettings, Config};
use replink_repl::RedirectPageGenerator;

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the redirects command.
#[derive(Args)]
pub(crate) struct RedirectsArgs {
    /// Site output directory (overrides config, default: public).
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Directory holding the example files (overrides config).
    #[arg(short, long)]
    directory: Option<PathBuf>,

    /// Path to configuration file (default: auto-discover replink.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable verbose output.
    #[arg(short, long)]
    pub verbose: bool,
}

impl RedirectsArgs {
    /// Execute the redirects command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration is invalid or a page cannot be written.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let cli_settings = CliSettings {
            directory: self.directory,
            output_dir: self.output_dir,
            ..Default::default()
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;

        let generator = RedirectPageGenerator::new(config.repl_options())?
            .with_externals(config.codepen.externals.clone());

        output.info(&format!(
            "Writing CodePen redirect pages to {}",
            config.output_dir.display()
        ));
        let written = generator.generate(&config.output_dir)?;
        output.success(&format!("Wrote {} redirect pages", written.len()));

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    #[test]
    fn test_execute_uses_config_output_dir() {
        let temp = tempfile::tempdir().unwrap();
        fs::create_dir(temp.path().join("examples")).unwrap();
        fs::write(temp.path().join("examples/hello.js"), "hello();\n").unwrap();
        fs::write(
            temp.path().join("replink.toml"),
            "[repl]\ndirectory = \"examples\"\n\n[codepen]\noutput_dir = \"site\"\n",
        )
        .unwrap();
        let args = RedirectsArgs {
            output_dir: None,
            directory: None,
            config: Some(temp.path().join("replink.toml")),
            verbose: false,
        };

        args.execute().unwrap();

        assert!(
            temp.path()
                .join("site/redirect-to-codepen/hello/index.html")
                .exists()
        );
    }

    #[test]
    fn test_execute_without_directory_fails() {
        let temp = tempfile::tempdir().unwrap();
        fs::write(temp.path().join("replink.toml"), "").unwrap();
        let args = RedirectsArgs {
            output_dir: Some(temp.path().join("out")),
            directory: None,
            config: Some(temp.path().join("replink.toml")),
            verbose: false,
        };

        let err = args.execute().unwrap_err();

        assert!(err.to_string().contains("directory required"), "got {err}");
    }
}
