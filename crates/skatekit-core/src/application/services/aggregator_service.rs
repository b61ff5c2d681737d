//! Aggregator Updater - keeps `src/index.js` in sync with the components.
//!
//! One invocation per component:
//!
//! ```text
//! NoFile ──────────────► render seed, write        → Created
//! FileExists ─► parse ─┬► AlreadyRegistered         → Unchanged (no write)
//!                      └► NeedsInsertion, write     → Updated
//! ```

use std::fmt;
use std::path::Path;
use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, info, instrument};

use crate::{
    application::ports::{Filesystem, TemplateStore},
    domain::{
        AGGREGATOR_PATH, AggregatorFile, Registration, RenderContext, TemplateId, UnitEntry,
        UnitName,
    },
    error::SkatekitResult,
};

/// What happened to the aggregator file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AggregatorOutcome {
    Created,
    Updated,
    Unchanged,
}

impl fmt::Display for AggregatorOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Created => write!(f, "created"),
            Self::Updated => write!(f, "updated"),
            Self::Unchanged => write!(f, "unchanged"),
        }
    }
}

pub struct AggregatorUpdater {
    store: Arc<dyn TemplateStore>,
    filesystem: Arc<dyn Filesystem>,
}

impl AggregatorUpdater {
    pub fn new(store: Arc<dyn TemplateStore>, filesystem: Arc<dyn Filesystem>) -> Self {
        Self { store, filesystem }
    }

    /// Fail early, without writing, if registering `unit` would be rejected.
    ///
    /// Also makes sure the seed template resolves when the file is missing.
    pub fn check(&self, unit: &UnitName, root: &Path) -> SkatekitResult<()> {
        let path = root.join(AGGREGATOR_PATH);
        if self.filesystem.exists(&path) {
            let mut file = AggregatorFile::parse(&self.filesystem.read_file(&path)?);
            file.register(UnitEntry::for_unit(unit))?;
        } else {
            self.store.get(&TemplateId::aggregator_seed())?;
        }
        Ok(())
    }

    /// Register `unit` in `<root>/src/index.js`.
    #[instrument(skip_all, fields(unit = %unit, root = %root.display()))]
    pub fn update(&self, unit: &UnitName, root: &Path) -> SkatekitResult<AggregatorOutcome> {
        let path = root.join(AGGREGATOR_PATH);

        if !self.filesystem.exists(&path) {
            let seed = self.store.get(&TemplateId::aggregator_seed())?;
            let content = RenderContext::for_unit(unit).render(&seed);

            if let Some(parent) = path.parent() {
                self.filesystem.create_dir_all(parent)?;
            }
            self.filesystem.write_file(&path, &content)?;

            info!("Aggregator created");
            return Ok(AggregatorOutcome::Created);
        }

        let mut file = AggregatorFile::parse(&self.filesystem.read_file(&path)?);
        match file.register(UnitEntry::for_unit(unit))? {
            Registration::AlreadyPresent => {
                debug!("Component already registered");
                Ok(AggregatorOutcome::Unchanged)
            }
            Registration::Inserted => {
                self.filesystem.write_file(&path, &file.render())?;
                info!("Aggregator updated");
                Ok(AggregatorOutcome::Updated)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::services::test_support::{FakeFs, FakeStore, ROOT};
    use crate::domain::DomainError;
    use crate::error::SkatekitError;

    fn updater(fs: &Arc<FakeFs>) -> AggregatorUpdater {
        AggregatorUpdater::new(FakeStore::complete(), fs.clone())
    }

    fn unit(name: &str) -> UnitName {
        UnitName::parse(name).unwrap()
    }

    #[test]
    fn creates_file_from_seed() {
        let fs = FakeFs::new();
        let outcome = updater(&fs).update(&unit("x-foo"), Path::new(ROOT)).unwrap();

        assert_eq!(outcome, AggregatorOutcome::Created);
        let content = fs.read(AGGREGATOR_PATH).unwrap();
        assert!(content.contains("import XFoo from './components/x-foo/component.js';"));
        assert!(content.contains("define(XFoo);"));
    }

    #[test]
    fn second_registration_is_unchanged_and_not_written() {
        let fs = FakeFs::new();
        let updater = updater(&fs);
        updater.update(&unit("x-foo"), Path::new(ROOT)).unwrap();
        let before = fs.read(AGGREGATOR_PATH);
        let writes = fs.write_count();

        let outcome = updater.update(&unit("x-foo"), Path::new(ROOT)).unwrap();

        assert_eq!(outcome, AggregatorOutcome::Unchanged);
        assert_eq!(fs.write_count(), writes);
        assert_eq!(fs.read(AGGREGATOR_PATH), before);
    }

    #[test]
    fn registrations_keep_invocation_order() {
        let fs = FakeFs::new();
        let updater = updater(&fs);
        updater.update(&unit("x-a"), Path::new(ROOT)).unwrap();
        let outcome = updater.update(&unit("x-b"), Path::new(ROOT)).unwrap();
        assert_eq!(outcome, AggregatorOutcome::Updated);

        let content = fs.read(AGGREGATOR_PATH).unwrap();
        let file = AggregatorFile::parse(&content);
        assert_eq!(file.registrations(), vec!["XA", "XB"]);
        assert!(content.contains("const { define } = skate;"));
        assert!(content.find("import XB").unwrap() < content.find("const { define }").unwrap());
    }

    #[test]
    fn collision_leaves_file_untouched() {
        let fs = FakeFs::new();
        let existing = "import XFoo from \"./components/x-foo/component.js\";\ndefine(XFoo);\n";
        fs.seed(AGGREGATOR_PATH, existing);

        let updater = updater(&fs);
        assert!(updater.check(&unit("x--foo"), Path::new(ROOT)).is_err());
        let err = updater
            .update(&unit("x--foo"), Path::new(ROOT))
            .unwrap_err();

        assert!(matches!(
            err,
            SkatekitError::Domain(DomainError::SymbolCollision { .. })
        ));
        assert_eq!(fs.read(AGGREGATOR_PATH).as_deref(), Some(existing));
        assert_eq!(fs.write_count(), 0);
    }

    #[test]
    fn missing_seed_is_a_configuration_error() {
        let fs = FakeFs::new();
        let updater = AggregatorUpdater::new(FakeStore::without("component/index.js"), fs.clone());

        let err = updater.check(&unit("x-foo"), Path::new(ROOT)).unwrap_err();
        assert_eq!(err.category(), crate::error::ErrorCategory::Configuration);
    }
}
