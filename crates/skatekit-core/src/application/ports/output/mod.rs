//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `skatekit-adapters` crate provides implementations.

use std::path::Path;

use crate::domain::{DependencyKind, ProjectStructure, RenderContext, ResolvedTemplate, TemplateId};
use crate::error::SkatekitResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `skatekit_adapters::filesystem::LocalFilesystem` (production)
/// - `skatekit_adapters::filesystem::MemoryFilesystem` (testing)
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> SkatekitResult<()>;

    /// Write content to a file, replacing it if present.
    fn write_file(&self, path: &Path, content: &str) -> SkatekitResult<()>;

    /// Read a whole file as UTF-8.
    fn read_file(&self, path: &Path) -> SkatekitResult<String>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;
}

/// Port for template source lookup.
///
/// Implemented by:
/// - `skatekit_adapters::template_store::BuiltinStore` (embedded in the binary)
/// - `skatekit_adapters::template_store::DirectoryStore` (user templates on disk)
pub trait TemplateStore: Send + Sync {
    /// Raw source of one template. Missing → `ApplicationError::TemplateNotFound`.
    fn get(&self, id: &TemplateId) -> SkatekitResult<String>;

    /// Every template id the store can supply.
    fn list(&self) -> SkatekitResult<Vec<TemplateId>>;
}

/// Port for template rendering.
///
/// Implemented by:
/// - `skatekit_adapters::renderer::SimpleRenderer` (variable substitution)
pub trait TemplateRenderer: Send + Sync {
    /// Render resolved templates into a project structure.
    ///
    /// # Arguments
    ///
    /// * `templates` - Specs paired with their source
    /// * `context` - Variable substitution context
    /// * `output_root` - Root directory for output paths
    fn render(
        &self,
        templates: &[ResolvedTemplate],
        context: &RenderContext,
        output_root: &Path,
    ) -> SkatekitResult<ProjectStructure>;
}

/// One question put to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    /// Stable identifier, used by scripted prompters.
    pub key: &'static str,
    pub message: String,
    pub default: Option<String>,
}

impl Question {
    pub fn new(key: &'static str, message: impl Into<String>) -> Self {
        Self {
            key,
            message: message.into(),
            default: None,
        }
    }

    pub fn with_default(mut self, default: Option<String>) -> Self {
        self.default = default;
        self
    }
}

/// Port for interactive input.
///
/// Implementations return the default when the user just presses enter, and
/// `None` when there is neither an answer nor a default.
#[cfg_attr(test, mockall::automock)]
pub trait Prompter: Send + Sync {
    fn ask(&self, question: &Question) -> SkatekitResult<Option<String>>;
}

/// Port for the JavaScript package manager.
///
/// Implemented by `skatekit_adapters::installer::CommandInstaller`.
#[cfg_attr(test, mockall::automock)]
pub trait PackageInstaller: Send + Sync {
    /// Install `packages` into the project at `root`.
    fn install(
        &self,
        root: &Path,
        packages: &[&'static str],
        kind: DependencyKind,
    ) -> SkatekitResult<()>;
}
