//! `skatekit component`: generate one component in an existing project.

use tracing::{info, instrument};

use skatekit_core::{
    application::{InputCollector, UnitMaterializer},
    domain::AGGREGATOR_PATH,
};

use crate::{
    cli::ComponentArgs,
    commands::{Adapters, aggregator_action, report_files, resolve_dir},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
    prompt,
};

/// Validate the name, write the three component files and register the
/// component in `src/index.js`.
#[instrument(skip_all, fields(name = args.name.as_deref().unwrap_or("<prompt>")))]
pub fn execute(args: ComponentArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let root = resolve_dir(args.dir.as_deref())?;
    if !root.is_dir() {
        return Err(CliError::DirectoryNotFound { path: root });
    }

    let collector = InputCollector::new(prompt::select(args.yes));
    let unit = collector.collect_unit_name(args.name.as_deref())?;

    let adapters = Adapters::from_config(&config)?;
    let materializer =
        UnitMaterializer::new(adapters.store, adapters.renderer, adapters.filesystem);

    let report = materializer.materialize(&unit, &root)?;
    info!(component = %unit, files = report.files.len(), "Component created");

    output.json(&report)?;
    report_files(&output, &report.files)?;
    output.file(aggregator_action(report.aggregator), AGGREGATOR_PATH)?;
    output.success(&format!("Component '{unit}' ready"))?;

    Ok(())
}
