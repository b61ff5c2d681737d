//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish
//! high-level use cases like "generate a component" or "initialize a project".

pub mod aggregator_service;
pub mod input_collector;
pub mod project_service;
pub mod unit_service;

#[cfg(test)]
pub(crate) mod test_support;

pub use aggregator_service::{AggregatorOutcome, AggregatorUpdater};
pub use input_collector::{InputCollector, ProjectInputs};
pub use project_service::{
    DEVELOPMENT_DEPENDENCIES, ProjectInitializer, ProjectReport, RUNTIME_DEPENDENCIES,
};
pub use unit_service::{UnitMaterializer, UnitReport};
