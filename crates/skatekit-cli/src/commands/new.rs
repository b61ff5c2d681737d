//! Implementation of the `skatekit new` command.
//!
//! Responsibility: collect the project answers, call the core project
//! initializer, and display results. No business logic lives here.

use std::path::Path;
use std::sync::Arc;

use tracing::{debug, info, instrument};

use skatekit_adapters::CommandInstaller;
use skatekit_core::{
    application::{InputCollector, PackageInstaller, ProjectInitializer, ProjectInputs},
    domain::{AGGREGATOR_PATH, DependencyKind},
    error::SkatekitResult,
};

use crate::{
    cli::NewArgs,
    commands::{Adapters, aggregator_action, report_files, resolve_dir},
    config::AppConfig,
    error::{CliError, CliResult},
    output::{self, OutputManager},
    prompt,
};

/// Execute the `skatekit new` command.
///
/// Dispatch sequence:
/// 1. Resolve the project directory
/// 2. Collect the main component name and metadata
/// 3. Initialise the project (manifest, support files, component)
/// 4. Install dependencies unless skipped
/// 5. Print next-steps guidance
#[instrument(skip_all, fields(dir = ?args.dir))]
pub fn execute(args: NewArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let root = resolve_dir(args.dir.as_deref())?;
    let dir_name = directory_name(&root)?;

    let collector = InputCollector::new(prompt::select(args.yes)).with_author_defaults(
        config.defaults.author_name.clone(),
        config.defaults.author_email.clone(),
    );
    let project = collector.collect_project(
        &dir_name,
        ProjectInputs {
            component: args.component,
            description: args.description,
            author_name: args.author_name,
            author_email: args.author_email,
        },
    )?;
    debug!(component = %project.unit(), "Answers collected");

    let install = !(args.skip_install || config.install.skip);
    let manager = config
        .package_manager()
        .map_err(|e| CliError::ConfigError {
            message: format!("{e:#}"),
            source: None,
        })?;
    let installer = ProgressInstaller {
        inner: CommandInstaller::new(manager),
        visible: output.shows_progress(),
    };

    let adapters = Adapters::from_config(&config)?;

    output.header(&format!(
        "Creating '{}' in {}",
        project.unit(),
        root.display()
    ))?;
    info!(root = %root.display(), install, "Project initialization started");

    let report = ProjectInitializer::new(
        adapters.store,
        adapters.renderer,
        adapters.filesystem,
        Arc::new(installer),
    )
    .initialize(&project, &root, install)?;

    output.json(&report)?;
    report_files(&output, &report.files)?;
    report_files(&output, &report.unit.files)?;
    output.file(aggregator_action(report.unit.aggregator), AGGREGATOR_PATH)?;
    output.success(&format!("Project '{}' created!", project.unit()))?;

    output.print("")?;
    output.print("Next steps:")?;
    if args.dir.is_some() {
        output.print(&format!("  cd {}", root.display()))?;
    }
    if !report.installed {
        output.print(&format!("  {manager} install"))?;
    }
    output.print(&format!("  {manager} run start"))?;

    Ok(())
}

/// Last normal component of `root`, used for the default component name.
fn directory_name(root: &Path) -> CliResult<String> {
    root.components()
        .rev()
        .find_map(|c| match c {
            std::path::Component::Normal(name) => Some(name.to_string_lossy().into_owned()),
            _ => None,
        })
        .ok_or_else(|| CliError::UnnamedDirectory {
            path: root.to_path_buf(),
        })
}

// ── Installer with progress ───────────────────────────────────────────────────

/// Wraps the real installer with a spinner for each package-manager run.
struct ProgressInstaller {
    inner: CommandInstaller,
    visible: bool,
}

impl PackageInstaller for ProgressInstaller {
    fn install(
        &self,
        root: &Path,
        packages: &[&'static str],
        kind: DependencyKind,
    ) -> SkatekitResult<()> {
        let bar = output::spinner(
            self.visible,
            format!(
                "Installing {kind} dependencies with {}...",
                self.inner.manager()
            ),
        );
        let result = self.inner.install(root, packages, kind);
        bar.finish_and_clear();
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directory_name_is_last_component() {
        assert_eq!(
            directory_name(Path::new("/home/ada/widget")).unwrap(),
            "widget"
        );
    }

    #[test]
    fn root_has_no_name() {
        assert!(matches!(
            directory_name(Path::new("/")),
            Err(CliError::UnnamedDirectory { .. })
        ));
    }
}
