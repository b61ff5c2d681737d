//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `skatekit-adapters` implement these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `Filesystem`: File operations
//!   - `TemplateStore`: Template source lookup
//!   - `TemplateRenderer`: Template rendering
//!   - `Prompter`: Asking the user a question
//!   - `PackageInstaller`: Running the JavaScript package manager
//!
//! - **Driving (Input) Ports**: Called by external world, implemented by application
//!   - (Defined in CLI layer, implemented by services)

pub mod output;

pub use output::{Filesystem, PackageInstaller, Prompter, Question, TemplateRenderer, TemplateStore};

#[cfg(test)]
pub use output::{MockPackageInstaller, MockPrompter};
