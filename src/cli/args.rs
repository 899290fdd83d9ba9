//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use crate::config::Settings;

/// devflow - Scaffold agent-driven development workflows into any project.
#[derive(Debug, Parser)]
#[command(name = "devflow")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Working directory (overrides current directory)
    #[arg(short, long, global = true)]
    pub project: Option<PathBuf>,

    /// Show verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    /// Template repository to clone
    #[arg(long, global = true, hide = true, env = "DEVFLOW_TEMPLATE_URL")]
    pub template_url: Option<String>,

    /// Remote package.json used for IDE version checks
    #[arg(long, global = true, hide = true, env = "DEVFLOW_VERSION_URL")]
    pub version_url: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Resolve settings for `working_dir`, applying any URL overrides.
    pub fn settings(&self, working_dir: PathBuf) -> Settings {
        let mut settings = Settings::new(working_dir);
        if let Some(url) = &self.template_url {
            settings = settings.with_template_url(url);
        }
        if let Some(url) = &self.version_url {
            settings = settings.with_version_url(url);
        }
        settings
    }
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Install the devflow template into a project
    Init(InitArgs),

    /// Install, run and update the web IDE
    Ide(IdeArgs),

    /// Check for required and optional tools
    Check,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `init` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct InitArgs {
    /// Folder to install into (relative to the working directory)
    pub folder: Option<PathBuf>,

    /// Skip the dependency check
    #[arg(long)]
    pub skip_checks: bool,
}

/// Arguments for the `ide` command.
#[derive(Debug, Clone, clap::Args)]
pub struct IdeArgs {
    #[command(subcommand)]
    pub action: IdeAction,
}

/// What to do with the IDE.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Subcommand)]
pub enum IdeAction {
    /// Install if needed, then run the dev server
    Start,
    /// Replace the IDE with the latest published version
    Update,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
