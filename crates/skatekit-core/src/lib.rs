//! Skatekit Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the skatekit
//! custom element scaffolding tool, following hexagonal (ports and adapters)
//! architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │          skatekit-cli (CLI)             │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │  (InputCollector, UnitMaterializer,     │
//! │   AggregatorUpdater, ProjectInitializer)│
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │ (Filesystem, TemplateStore, Renderer,   │
//! │  Prompter, PackageInstaller)            │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    skatekit-adapters (Infrastructure)   │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │ (UnitName, AggregatorFile, Manifest)    │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use std::path::Path;
//! use skatekit_core::{application::UnitMaterializer, domain::UnitName};
//!
//! # fn run(units: UnitMaterializer) -> skatekit_core::error::SkatekitResult<()> {
//! let unit = UnitName::parse("x-foo")?;
//! let report = units.materialize(&unit, Path::new("."))?;
//! println!("index.js: {}", report.aggregator);
//! # Ok(())
//! # }
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        AggregatorOutcome, AggregatorUpdater, InputCollector, ProjectInitializer, UnitMaterializer,
        ports::{Filesystem, PackageInstaller, Prompter, TemplateRenderer, TemplateStore},
    };
    pub use crate::domain::{
        AggregatorFile, DependencyKind, Generator, ProjectConfig, ProjectManifest,
        ProjectStructure, RenderContext, TemplateId, TemplateSet, UnitEntry, UnitMetadata,
        UnitName,
    };
    pub use crate::error::{SkatekitError, SkatekitResult};
}

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
