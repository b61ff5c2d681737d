//! Unit Materializer - writes one component and registers it.
//!
//! Workflow:
//! 1. Resolve the component template set
//! 2. Render it for the unit
//! 3. Check the aggregator would accept the unit
//! 4. Write files (overwriting existing unit files)
//! 5. Update the aggregator

use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, info, instrument};

use crate::{
    application::{
        ports::{Filesystem, TemplateRenderer, TemplateStore},
        services::aggregator_service::{AggregatorOutcome, AggregatorUpdater},
    },
    domain::{
        DomainValidator as validator, ProjectStructure, RenderContext, ResolvedTemplate,
        TemplateSet, UnitName,
    },
    error::SkatekitResult,
};

/// Result of materializing one unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnitReport {
    /// Written paths, relative to the project root.
    pub files: Vec<PathBuf>,
    pub aggregator: AggregatorOutcome,
}

pub struct UnitMaterializer {
    store: Arc<dyn TemplateStore>,
    renderer: Arc<dyn TemplateRenderer>,
    filesystem: Arc<dyn Filesystem>,
    aggregator: AggregatorUpdater,
}

impl UnitMaterializer {
    pub fn new(
        store: Arc<dyn TemplateStore>,
        renderer: Arc<dyn TemplateRenderer>,
        filesystem: Arc<dyn Filesystem>,
    ) -> Self {
        let aggregator = AggregatorUpdater::new(store.clone(), filesystem.clone());
        Self {
            store,
            renderer,
            filesystem,
            aggregator,
        }
    }

    /// Generate `unit` under `root`.
    ///
    /// Nothing is written unless every template resolves and the aggregator
    /// would accept the unit.
    #[instrument(skip_all, fields(unit = %unit, root = %root.display()))]
    pub fn materialize(&self, unit: &UnitName, root: &Path) -> SkatekitResult<UnitReport> {
        let set = TemplateSet::component();
        let templates = resolve(self.store.as_ref(), &set)?;

        let context = RenderContext::for_unit(unit);
        let structure = self.renderer.render(&templates, &context, root)?;
        validator::validate_project_structure(&structure)?;
        debug!(files = structure.file_count(), "Component rendered");

        self.aggregator.check(unit, root)?;

        let files = write_structure(self.filesystem.as_ref(), &structure)?;
        let aggregator = self.aggregator.update(unit, root)?;

        info!(%aggregator, "Component generated");
        Ok(UnitReport { files, aggregator })
    }
}

/// Pair every file in `set` with its source.
pub(crate) fn resolve(
    store: &dyn TemplateStore,
    set: &TemplateSet,
) -> SkatekitResult<Vec<ResolvedTemplate>> {
    validator::validate_template_set(set)?;

    set.files
        .iter()
        .map(|spec| -> SkatekitResult<ResolvedTemplate> {
            Ok(ResolvedTemplate {
                spec: spec.clone(),
                source: store.get(&spec.template)?,
            })
        })
        .collect()
}

/// Write every file, creating parent directories. Returns the relative paths.
pub(crate) fn write_structure(
    filesystem: &dyn Filesystem,
    structure: &ProjectStructure,
) -> SkatekitResult<Vec<PathBuf>> {
    let mut written = Vec::with_capacity(structure.file_count());

    for file in structure.files() {
        let path = structure.root().join(&file.path);
        if let Some(parent) = path.parent() {
            filesystem.create_dir_all(parent)?;
        }
        filesystem.write_file(&path, &file.content)?;
        debug!(path = %path.display(), bytes = file.size(), "File written");
        written.push(file.path.clone());
    }

    Ok(written)
}
