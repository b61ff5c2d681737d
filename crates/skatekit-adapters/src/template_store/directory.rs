//! Templates loaded from a directory on disk.
//!
//! Layout mirrors the built-in set:
//!
//! ```text
//! <root>/
//! ├── app/
//! │   ├── package.json
//! │   ├── README.md
//! │   └── webpack/production.js ...
//! └── component/
//!     ├── component.js
//!     └── index.js ...
//! ```
//!
//! The directory is indexed once when opened; sources are read on demand.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument};
use walkdir::WalkDir;

use skatekit_core::{
    application::{ApplicationError, ports::TemplateStore},
    domain::{Generator, RelativePath, TemplateId},
    error::SkatekitResult,
};

#[derive(Debug, Clone)]
pub struct DirectoryStore {
    root: PathBuf,
    index: BTreeMap<TemplateId, PathBuf>,
}

impl DirectoryStore {
    /// Index every `<generator>/<path>` file under `root`.
    ///
    /// Files outside a known generator directory are ignored.
    #[instrument(fields(root = %root.as_ref().display()), skip(root))]
    pub fn open(root: impl AsRef<Path>) -> SkatekitResult<Self> {
        let root = root.as_ref().to_path_buf();
        if !root.is_dir() {
            return Err(ApplicationError::TemplateRootMissing { path: root }.into());
        }

        let mut index = BTreeMap::new();
        for generator in Generator::ALL {
            let dir = root.join(generator.as_str());
            if !dir.is_dir() {
                debug!(path = %dir.display(), "No templates for generator");
                continue;
            }

            for entry in WalkDir::new(&dir).min_depth(1).sort_by_file_name() {
                let entry = entry.map_err(|e| ApplicationError::FilesystemError {
                    path: dir.clone(),
                    reason: format!("directory walk error: {e}"),
                })?;
                if !entry.file_type().is_file() {
                    continue;
                }

                let Ok(relative) = entry.path().strip_prefix(&dir) else {
                    continue;
                };
                let path = RelativePath::try_new(relative)?;
                index.insert(TemplateId::new(generator, path), entry.path().to_path_buf());
            }
        }

        info!(count = index.len(), "Template directory indexed");
        Ok(Self { root, index })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl TemplateStore for DirectoryStore {
    fn get(&self, id: &TemplateId) -> SkatekitResult<String> {
        let path = self
            .index
            .get(id)
            .ok_or_else(|| ApplicationError::TemplateNotFound { id: id.to_string() })?;

        std::fs::read_to_string(path).map_err(|e| {
            ApplicationError::FilesystemError {
                path: path.clone(),
                reason: format!("Failed to read template: {e}"),
            }
            .into()
        })
    }

    fn list(&self) -> SkatekitResult<Vec<TemplateId>> {
        Ok(self.index.keys().cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use skatekit_core::error::ErrorCategory;
    use tempfile::TempDir;

    fn write(root: &Path, relative: &str, content: &str) {
        let path = root.join(relative);
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(path, content).unwrap();
    }

    #[test]
    fn indexes_nested_templates() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "component/component.js", "class {{COMPONENT_CLASS}} {}");
        write(dir.path(), "app/webpack/production.js", "// prod");
        write(dir.path(), "other/ignored.txt", "");

        let store = DirectoryStore::open(dir.path()).unwrap();
        let ids: Vec<String> = store.list().unwrap().iter().map(ToString::to_string).collect();

        assert_eq!(ids, vec!["app/webpack/production.js", "component/component.js"]);
        assert_eq!(
            store
                .get(&TemplateId::new(Generator::Component, "component.js"))
                .unwrap(),
            "class {{COMPONENT_CLASS}} {}"
        );
    }

    #[test]
    fn missing_root_is_a_configuration_error() {
        let dir = TempDir::new().unwrap();
        let err = DirectoryStore::open(dir.path().join("nope")).unwrap_err();
        assert_eq!(err.category(), ErrorCategory::Configuration);
    }

    #[test]
    fn missing_template_is_not_found() {
        let dir = TempDir::new().unwrap();
        let store = DirectoryStore::open(dir.path()).unwrap();
        let err = store.get(&TemplateId::aggregator_seed()).unwrap_err();
        assert_eq!(err.category(), ErrorCategory::Configuration);
    }
}
