//! Template stores and store selection.
//!
//! # Resolution order
//!
//! 1. **`$SKATEKIT_TEMPLATES_DIR`**: environment variable override.
//! 2. **`templates.local_path`**: from the configuration file.
//! 3. **Built-in**: the templates compiled into the binary.
//!
//! A directory named by 1 or 2 must exist; a typo there is reported as a
//! configuration error rather than silently falling back.

mod builtin;
mod directory;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{debug, info};

use skatekit_core::{application::ports::TemplateStore, error::SkatekitResult};

pub use builtin::BuiltinStore;
pub use directory::DirectoryStore;

/// Environment variable pointing at a template directory.
pub const TEMPLATES_DIR_ENV: &str = "SKATEKIT_TEMPLATES_DIR";

/// Where templates come from for this run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateSource {
    Builtin,
    Directory(PathBuf),
}

impl TemplateSource {
    /// Pick the source from the environment and the configured path.
    pub fn detect(configured: Option<&Path>) -> Self {
        Self::choose(
            std::env::var_os(TEMPLATES_DIR_ENV).map(PathBuf::from),
            configured,
        )
    }

    fn choose(env: Option<PathBuf>, configured: Option<&Path>) -> Self {
        if let Some(dir) = env.filter(|p| !p.as_os_str().is_empty()) {
            debug!(path = %dir.display(), "Templates from ${}", TEMPLATES_DIR_ENV);
            return Self::Directory(dir);
        }
        if let Some(dir) = configured {
            debug!(path = %dir.display(), "Templates from configuration");
            return Self::Directory(dir.to_path_buf());
        }
        Self::Builtin
    }

    /// Open the store for this source.
    pub fn open(&self) -> SkatekitResult<Arc<dyn TemplateStore>> {
        match self {
            Self::Builtin => Ok(Arc::new(BuiltinStore::new())),
            Self::Directory(dir) => {
                let store = DirectoryStore::open(dir)?;
                info!(path = %dir.display(), "Using template directory");
                Ok(Arc::new(store))
            }
        }
    }
}
