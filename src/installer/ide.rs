//! IDE installation, launch and update.
//!
//! The IDE is the template's `web` subtree, installed into the working
//! directory. Its local `package.json` version is compared against the
//! published one to decide whether an update is due.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::Settings;
use crate::error::{DevflowError, Result};
use crate::registry::{TemplateSource, VersionSource};
use crate::shell::{command_line, CommandOptions, CommandRunner};
use crate::ui::UserInterface;
use crate::updates::{is_newer, read_manifest_version};
use crate::workspace::{copy_tree, TempWorkspace};

use super::plan::{WEB_DIR, WEB_MANIFEST, WEB_NODE_MODULES};

/// Package manager used for the IDE.
const NPM: &str = "npm";

/// Local vs published IDE version.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VersionStatus {
    /// Local is at least as new as the published version.
    Current { local: String, remote: String },
    /// A newer version is published.
    Outdated { local: String, remote: String },
    /// One side could not be determined.
    Unknown,
}

impl VersionStatus {
    /// Classify a pair of optional versions.
    pub fn from_versions(local: Option<String>, remote: Option<String>) -> Self {
        match (local, remote) {
            (Some(local), Some(remote)) if is_newer(&remote, &local) => {
                VersionStatus::Outdated { local, remote }
            }
            (Some(local), Some(remote)) => VersionStatus::Current { local, remote },
            _ => VersionStatus::Unknown,
        }
    }
}

/// How `ide update` ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateOutcome {
    /// There was no IDE yet; it was installed fresh.
    Installed,
    /// The IDE was replaced with a newer version.
    Updated { from: String, to: String },
    /// Nothing to do (also when a version could not be determined).
    UpToDate,
}

/// Installs, runs and updates the IDE.
pub struct IdeInstaller<'a> {
    settings: &'a Settings,
    source: &'a dyn TemplateSource,
    versions: &'a dyn VersionSource,
    runner: &'a dyn CommandRunner,
}

impl<'a> IdeInstaller<'a> {
    /// Create an installer over the given seams.
    pub fn new(
        settings: &'a Settings,
        source: &'a dyn TemplateSource,
        versions: &'a dyn VersionSource,
        runner: &'a dyn CommandRunner,
    ) -> Self {
        Self {
            settings,
            source,
            versions,
            runner,
        }
    }

    /// Location of the IDE.
    pub fn web_dir(&self) -> PathBuf {
        self.settings.working_dir.join(WEB_DIR)
    }

    /// Compare the local manifest with the published one.
    ///
    /// The remote lookup runs on its own thread while the local manifest is
    /// read; both are joined before comparing.
    pub fn check_version(&self) -> VersionStatus {
        let manifest = self.web_dir().join(WEB_MANIFEST);
        let url = self.settings.version_url.as_str();
        let versions = self.versions;

        let (local, remote) = std::thread::scope(|scope| {
            let remote = scope.spawn(move || versions.remote_version(url));
            let local = read_manifest_version(&manifest);
            let remote = remote.join().ok().flatten();
            (local, remote)
        });

        tracing::debug!("IDE versions: local={:?} remote={:?}", local, remote);
        VersionStatus::from_versions(local, remote)
    }

    /// Install if needed, install dependencies if needed, then run the dev
    /// server until it exits.
    pub fn start(&self, ui: &mut dyn UserInterface) -> Result<()> {
        let web = self.web_dir();

        if web.exists() {
            if let VersionStatus::Outdated { local, remote } = self.check_version() {
                ui.warning(&format!(
                    "IDE update available: {} -> {}. Run `devflow ide update` to upgrade.",
                    local, remote
                ));
            }
        } else {
            ui.message("IDE not installed, installing...");
            self.install_web(ui)?;
            ui.success("IDE installed");
        }

        if !web.join(WEB_NODE_MODULES).exists() {
            ui.message("Installing IDE dependencies...");
            self.run_npm(&web, &["install"])?;
        }

        ui.message("Starting IDE dev server (Ctrl+C to stop)...");
        self.run_npm(&web, &["run", "dev"])
    }

    /// Replace the IDE with the published version when it is newer.
    pub fn update(&self, ui: &mut dyn UserInterface) -> Result<UpdateOutcome> {
        if !self.web_dir().exists() {
            ui.message("IDE not installed, installing...");
            self.install_web(ui)?;
            return Ok(UpdateOutcome::Installed);
        }

        match self.check_version() {
            VersionStatus::Outdated { local, remote } => {
                ui.message(&format!("Updating IDE {} -> {}", local, remote));
                self.install_web(ui)?;
                Ok(UpdateOutcome::Updated {
                    from: local,
                    to: remote,
                })
            }
            VersionStatus::Current { .. } | VersionStatus::Unknown => Ok(UpdateOutcome::UpToDate),
        }
    }

    /// Clone the template and (re)place the `web` subtree from it.
    fn install_web(&self, ui: &mut dyn UserInterface) -> Result<()> {
        let root = &self.settings.working_dir;
        fs::create_dir_all(root)?;

        let mut workspace = TempWorkspace::acquire(root);
        let result = self.place_web(workspace.path(), ui);
        let cleanup = workspace.cleanup();
        tracing::debug!("Temp workspace cleanup: {}", cleanup);

        result
    }

    fn place_web(&self, template: &Path, ui: &mut dyn UserInterface) -> Result<()> {
        let mut spinner = ui.start_spinner("Cloning template...");
        if let Err(e) = self.source.fetch(&self.settings.template_url, template) {
            spinner.finish_error("Clone failed");
            return Err(e);
        }
        spinner.finish_success("Template cloned");

        let source = template.join(WEB_DIR);
        if !source.is_dir() {
            return Err(DevflowError::TemplateIncomplete {
                path: PathBuf::from(WEB_DIR),
            });
        }

        let dest = self.web_dir();
        if dest.exists() {
            fs::remove_dir_all(&dest)?;
        }
        copy_tree(&source, &dest)
    }

    fn run_npm(&self, web: &Path, args: &[&str]) -> Result<()> {
        let result = self
            .runner
            .run(NPM, args, &CommandOptions::inherited_in(web))?;

        if result.success {
            Ok(())
        } else {
            Err(DevflowError::CommandFailed {
                command: command_line(NPM, args),
                code: result.exit_code,
            })
        }
    }
}
