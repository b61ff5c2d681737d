//! Command handlers.
//!
//! Each handler translates parsed arguments into calls on the core services
//! and reports the result through the [`OutputManager`](crate::output::OutputManager).

pub mod completions;
pub mod component;
pub mod config;
pub mod new;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use skatekit_adapters::{LocalFilesystem, SimpleRenderer, TemplateSource};
use skatekit_core::application::{AggregatorOutcome, Filesystem, TemplateRenderer, TemplateStore};

use crate::{
    config::AppConfig,
    error::{CliResult, IntoCli},
    output::OutputManager,
};

/// Ports shared by the generating commands.
struct Adapters {
    store: Arc<dyn TemplateStore>,
    renderer: Arc<dyn TemplateRenderer>,
    filesystem: Arc<dyn Filesystem>,
}

impl Adapters {
    fn from_config(config: &AppConfig) -> CliResult<Self> {
        let source = TemplateSource::detect(config.templates.local_path.as_deref());
        tracing::debug!(?source, "Template source selected");

        Ok(Self {
            store: source.open()?,
            renderer: Arc::new(SimpleRenderer::new()),
            filesystem: Arc::new(LocalFilesystem::new()),
        })
    }
}

/// Absolute form of `--dir`, or the current directory.
fn resolve_dir(dir: Option<&Path>) -> CliResult<PathBuf> {
    let cwd = std::env::current_dir().with_cli_context(|| "reading the current directory")?;
    let path = match dir {
        Some(dir) => cwd.join(dir),
        None => cwd,
    };

    if path.exists() {
        path.canonicalize()
            .with_cli_context(|| format!("resolving {}", path.display()))
    } else {
        Ok(path)
    }
}

/// Report every written file relative to the project root.
fn report_files(output: &OutputManager, files: &[PathBuf]) -> CliResult<()> {
    for file in files {
        output.file("create", &file.display().to_string())?;
    }
    Ok(())
}

fn aggregator_action(outcome: AggregatorOutcome) -> &'static str {
    match outcome {
        AggregatorOutcome::Created => "create",
        AggregatorOutcome::Updated => "update",
        AggregatorOutcome::Unchanged => "identical",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aggregator_actions() {
        assert_eq!(aggregator_action(AggregatorOutcome::Created), "create");
        assert_eq!(aggregator_action(AggregatorOutcome::Updated), "update");
        assert_eq!(aggregator_action(AggregatorOutcome::Unchanged), "identical");
    }

    #[test]
    fn missing_dir_is_resolved_against_cwd() {
        let resolved = resolve_dir(Some(Path::new("surely-not-here-4821"))).unwrap();
        assert!(resolved.is_absolute());
        assert!(resolved.ends_with("surely-not-here-4821"));
    }

    #[test]
    fn existing_dir_is_canonical() {
        let dir = tempfile::tempdir().unwrap();
        let resolved = resolve_dir(Some(dir.path())).unwrap();
        assert_eq!(resolved, dir.path().canonicalize().unwrap());
    }
}
