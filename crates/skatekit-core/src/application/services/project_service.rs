//! Project Initializer - whole-project scaffolding.
//!
//! Order of work:
//! 1. `package.json` from the manifest template merged with the project values
//! 2. Support files from the app template set
//! 3. The main component (this also creates `src/index.js`)
//! 4. Dependency installation, unless skipped
//!
//! Template problems surface before anything is written. An installer
//! failure leaves every generated file in place.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::Serialize;
use tracing::{info, instrument};

use crate::{
    application::{
        ports::{Filesystem, PackageInstaller, TemplateRenderer, TemplateStore},
        services::unit_service::{UnitMaterializer, UnitReport, resolve, write_structure},
    },
    domain::{
        DependencyKind, DomainValidator as validator, ProjectConfig, ProjectManifest,
        ProjectStructure, RenderContext, TemplateId, TemplateSet,
    },
    error::SkatekitResult,
};

/// Packages every generated project depends on at runtime.
pub const RUNTIME_DEPENDENCIES: &[&str] = &["skatejs"];

/// Build, test and documentation tooling.
pub const DEVELOPMENT_DEPENDENCIES: &[&str] = &[
    "babel-core",
    "babel-loader",
    "babel-plugin-transform-react-jsx",
    "babel-preset-es2015",
    "esdoc",
    "eslint",
    "node-sass",
    "raw-loader",
    "sass-loader",
    "webpack",
    "webpack-bundle-size-analyzer",
    "webpack-dev-server",
    "webpack-merge",
];

const MANIFEST_PATH: &str = "package.json";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectReport {
    /// Project files written besides the main component's.
    pub files: Vec<PathBuf>,
    pub unit: UnitReport,
    pub installed: bool,
}

pub struct ProjectInitializer {
    store: Arc<dyn TemplateStore>,
    renderer: Arc<dyn TemplateRenderer>,
    filesystem: Arc<dyn Filesystem>,
    installer: Arc<dyn PackageInstaller>,
    units: UnitMaterializer,
}

impl ProjectInitializer {
    pub fn new(
        store: Arc<dyn TemplateStore>,
        renderer: Arc<dyn TemplateRenderer>,
        filesystem: Arc<dyn Filesystem>,
        installer: Arc<dyn PackageInstaller>,
    ) -> Self {
        let units = UnitMaterializer::new(store.clone(), renderer.clone(), filesystem.clone());
        Self {
            store,
            renderer,
            filesystem,
            installer,
            units,
        }
    }

    #[instrument(skip_all, fields(component = %config.unit(), root = %root.display()))]
    pub fn initialize(
        &self,
        config: &ProjectConfig,
        root: &Path,
        install: bool,
    ) -> SkatekitResult<ProjectReport> {
        let manifest = self.manifest_for(config)?;

        let templates = resolve(self.store.as_ref(), &TemplateSet::app())?;
        let mut context = RenderContext::for_unit(config.unit()).with_project(config);
        // Support files describe the project the same way package.json does.
        if let Some(description) = manifest.description() {
            context = context.with_variable("PROJECT_DESCRIPTION", description);
        }
        let structure = self
            .renderer
            .render(&templates, &context, root)?
            .with_file(MANIFEST_PATH, manifest.to_canonical_json()?);
        validator::validate_project_structure(&structure)?;

        self.filesystem.create_dir_all(root)?;
        let files = write_structure(self.filesystem.as_ref(), &reorder_manifest_first(structure))?;
        info!(files = files.len(), "Project files written");

        let unit = self.units.materialize(config.unit(), root)?;

        if install {
            self.install_dependencies(root)?;
        } else {
            info!("Dependency installation skipped");
        }

        Ok(ProjectReport {
            files,
            unit,
            installed: install,
        })
    }

    fn manifest_for(&self, config: &ProjectConfig) -> SkatekitResult<ProjectManifest> {
        let template = self.store.get(&TemplateId::manifest())?;
        let mut manifest = ProjectManifest::from_template(&template)?;
        manifest.merge_project(config);
        Ok(manifest)
    }

    fn install_dependencies(&self, root: &Path) -> SkatekitResult<()> {
        info!(count = RUNTIME_DEPENDENCIES.len(), "Installing runtime dependencies");
        self.installer
            .install(root, RUNTIME_DEPENDENCIES, DependencyKind::Runtime)?;

        info!(
            count = DEVELOPMENT_DEPENDENCIES.len(),
            "Installing development dependencies"
        );
        self.installer
            .install(root, DEVELOPMENT_DEPENDENCIES, DependencyKind::Development)
    }
}

/// `package.json` is written before the support files.
fn reorder_manifest_first(structure: ProjectStructure) -> ProjectStructure {
    let mut ordered = ProjectStructure::new(structure.root());
    let (manifest, rest): (Vec<_>, Vec<_>) = structure
        .files
        .into_iter()
        .partition(|f| f.path == Path::new(MANIFEST_PATH));
    for file in manifest.into_iter().chain(rest) {
        ordered.add_file(file.path, file.content);
    }
    ordered
}
