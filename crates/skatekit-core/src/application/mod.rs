//! Application layer for skatekit.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (InputCollector, UnitMaterializer,
//!   AggregatorUpdater, ProjectInitializer)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! business logic itself. All business rules live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

// Re-export main services
pub use services::{
    AggregatorOutcome, AggregatorUpdater, DEVELOPMENT_DEPENDENCIES, InputCollector,
    ProjectInitializer, ProjectInputs, ProjectReport, RUNTIME_DEPENDENCIES, UnitMaterializer,
    UnitReport,
};

// Re-export port traits (for adapter implementation)
pub use ports::{Filesystem, PackageInstaller, Prompter, Question, TemplateRenderer, TemplateStore};

pub use error::ApplicationError;
