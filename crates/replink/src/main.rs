//! replink CLI - code playground links for markdown.
//!
//! Provides commands for:
//! - `render`: Render markdown to HTML with playground links rewritten
//! - `redirects`: Write the `CodePen` redirect pages

mod commands;
mod error;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{RedirectsArgs, RenderArgs};
use output::Output;

/// replink - code playground links for markdown.
#[derive(Parser)]
#[command(name = "replink", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a markdown file to HTML, rewriting playground links.
    Render(RenderArgs),
    /// Generate `CodePen` redirect pages for every example file.
    Redirects(RedirectsArgs),
}

impl Commands {
    fn verbose(&self) -> bool {
        match self {
            Self::Render(args) => args.verbose,
            Self::Redirects(args) => args.verbose,
        }
    }
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    // --verbose enables INFO level, otherwise use RUST_LOG or default to WARN
    let filter = if cli.command.verbose() {
        EnvFilter::new("info")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Render(args) => args.execute(),
        Commands::Redirects(args) => args.execute(),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}
