//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use crate::cli::args::{Cli, Commands, IdeArgs};
use crate::config::Settings;
use crate::error::Result;
use crate::registry::{GitFetcher, HttpFetcher};
use crate::requirements::HostProbe;
use crate::shell::SystemRunner;
use crate::ui::UserInterface;

/// Trait for command implementations.
///
/// Each CLI subcommand implements this trait to provide its execution logic.
pub trait Command {
    /// Execute the command.
    ///
    /// # Returns
    ///
    /// A [`CommandResult`] indicating success/failure and exit code.
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// Dispatches CLI commands to their implementations.
///
/// Owns the production seams (host probe, git, HTTP, process runner) and
/// lends them to each command.
pub struct CommandDispatcher {
    settings: Settings,
    probe: HostProbe,
    git: GitFetcher,
    http: HttpFetcher,
    runner: SystemRunner,
}

impl CommandDispatcher {
    /// Create a new dispatcher for the given settings.
    pub fn new(settings: Settings) -> Self {
        Self {
            settings,
            probe: HostProbe::new(),
            git: GitFetcher::new(),
            http: HttpFetcher::new(),
            runner: SystemRunner,
        }
    }

    /// Settings commands run with.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Dispatch and execute a command.
    pub fn dispatch(&self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        match &cli.command {
            Commands::Init(args) => {
                let cmd = super::init::InitCommand::new(
                    &self.settings,
                    args.clone(),
                    &self.probe,
                    &self.git,
                );
                cmd.execute(ui)
            }
            Commands::Ide(IdeArgs { action }) => {
                let cmd = super::ide::IdeCommand::new(
                    &self.settings,
                    *action,
                    &self.git,
                    &self.http,
                    &self.runner,
                );
                cmd.execute(ui)
            }
            Commands::Check => {
                let cmd = super::check::CheckCommand::new(&self.settings, &self.probe);
                cmd.execute(ui)
            }
            Commands::Completions(args) => {
                let cmd = super::completions::CompletionsCommand::new(args.clone());
                cmd.execute(ui)
            }
        }
    }
}
