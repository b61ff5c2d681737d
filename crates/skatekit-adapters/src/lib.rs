//! Infrastructure adapters for skatekit.
//!
//! This crate implements the ports defined in `skatekit-core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod filesystem;
pub mod installer;
pub mod prompt;
pub mod renderer;
pub mod template_store;

// Re-export commonly used adapters
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use installer::{CommandInstaller, PackageManager};
pub use prompt::{DefaultsPrompter, ScriptedPrompter};
pub use renderer::SimpleRenderer;
pub use template_store::{BuiltinStore, DirectoryStore, TemplateSource};
