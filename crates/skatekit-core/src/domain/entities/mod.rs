pub mod aggregator;
pub mod common;
pub mod manifest;
pub mod project_structure;
pub mod template;

pub use crate::domain::DomainError;
pub use aggregator::{AggregatorFile, UnitEntry};
pub use manifest::ProjectManifest;
pub use project_structure::ProjectStructure;
pub use template::{RenderContext, TemplateSet};
