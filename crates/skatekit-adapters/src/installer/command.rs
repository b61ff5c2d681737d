//! Runs yarn or npm to install dependencies.

use std::fmt;
use std::path::Path;
use std::process::{Command, Output};
use std::str::FromStr;

use tracing::{debug, info, instrument};

use skatekit_core::{
    application::{ApplicationError, ports::PackageInstaller},
    domain::DependencyKind,
    error::SkatekitResult,
};

/// Supported JavaScript package managers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PackageManager {
    #[default]
    Yarn,
    Npm,
}

impl PackageManager {
    pub fn program(&self) -> &'static str {
        match self {
            Self::Yarn => "yarn",
            Self::Npm => "npm",
        }
    }

    /// Arguments for installing `packages`, without version pinning.
    pub fn args<'a>(&self, packages: &[&'a str], kind: DependencyKind) -> Vec<&'a str> {
        let mut args = match (self, kind) {
            (Self::Yarn, DependencyKind::Runtime) => vec!["add"],
            (Self::Yarn, DependencyKind::Development) => vec!["add", "--dev"],
            (Self::Npm, DependencyKind::Runtime) => vec!["install"],
            (Self::Npm, DependencyKind::Development) => vec!["install", "--save-dev"],
        };
        args.extend_from_slice(packages);
        args
    }
}

impl fmt::Display for PackageManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.program())
    }
}

impl FromStr for PackageManager {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "yarn" => Ok(Self::Yarn),
            "npm" => Ok(Self::Npm),
            other => Err(format!(
                "unknown package manager '{other}', expected 'yarn' or 'npm'"
            )),
        }
    }
}

/// [`PackageInstaller`] that shells out to a package manager.
#[derive(Debug, Clone)]
pub struct CommandInstaller {
    manager: PackageManager,
    program: String,
}

impl CommandInstaller {
    pub fn new(manager: PackageManager) -> Self {
        Self {
            manager,
            program: manager.program().to_string(),
        }
    }

    /// Run a different executable with the same arguments.
    pub fn with_program(mut self, program: impl Into<String>) -> Self {
        self.program = program.into();
        self
    }

    pub fn manager(&self) -> PackageManager {
        self.manager
    }

    fn command_line(&self, args: &[&str]) -> String {
        std::iter::once(self.program.as_str())
            .chain(args.iter().copied())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl PackageInstaller for CommandInstaller {
    #[instrument(skip(self, packages), fields(manager = %self.manager, count = packages.len()))]
    fn install(
        &self,
        root: &Path,
        packages: &[&'static str],
        kind: DependencyKind,
    ) -> SkatekitResult<()> {
        let args = self.manager.args(packages, kind);
        let command = self.command_line(&args);
        debug!(%command, dir = %root.display(), "Spawning package manager");

        let output = Command::new(&self.program)
            .args(&args)
            .current_dir(root)
            .output()
            .map_err(|e| ApplicationError::ExternalToolFailed {
                command: command.clone(),
                reason: format!("could not start {}: {}", self.program, e),
            })?;

        if !output.status.success() {
            return Err(ApplicationError::ExternalToolFailed {
                command,
                reason: format!("{}: {}", output.status, error_text(&output)),
            }
            .into());
        }

        info!(%kind, "Dependencies installed");
        Ok(())
    }
}

/// Prefers stderr, falls back to stdout if stderr is empty.
fn error_text(output: &Output) -> String {
    let stderr = String::from_utf8_lossy(&output.stderr);
    if !stderr.trim().is_empty() {
        stderr.trim().to_string()
    } else {
        String::from_utf8_lossy(&output.stdout).trim().to_string()
    }
}
