// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for skatekit.
//!
//! Pure generation rules: component naming, template sets, the aggregator
//! file model and `package.json` merging. All I/O (templates, filesystem,
//! prompting, package managers) happens behind ports defined in the
//! application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, network, or external calls
//! - **Immutable values**: Names and configs never change after validation
//! - **Rich domain model**: Aggregator insertion rules live in `AggregatorFile`
//!
// Public API - what the world sees
pub mod entities;
pub mod error;
pub mod value_objects;

mod validation;

pub use entities::{
    aggregator::{AGGREGATOR_PATH, AggregatorFile, Registration, UnitEntry},
    common::RelativePath,
    manifest::ProjectManifest,
    project_structure::{FileToWrite, ProjectStructure},
    template::{
        FileSpec, Generator, RenderContext, ResolvedTemplate, TemplateContent, TemplateId,
        TemplateSet,
    },
};

pub use error::{DomainError, ErrorCategory};

pub use value_objects::{
    DEFAULT_UNIT_PREFIX, DependencyKind, ProjectConfig, UNIT_NAME_SEPARATOR, UnitMetadata,
    UnitName,
};

pub use validation::DomainValidator;
