// ============================================================================
// domain/error.rs - DOMAIN ERRORS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors
    // ========================================================================
    #[error("A component name must be provided")]
    MissingName,

    /// The name is reported exactly as the user typed it.
    #[error("The component name must include a hyphen, was '{name}'")]
    MissingSeparator { name: String },

    /// The derived class name would not be a JavaScript identifier.
    #[error("The component name must start with a letter, was '{name}'")]
    InvalidSymbol { name: String, symbol: String },

    #[error("component '{name}' maps to class '{symbol}', which is already imported from '{existing}'")]
    SymbolCollision {
        name: String,
        symbol: String,
        existing: String,
    },

    // ========================================================================
    // Template / Manifest Defects
    // ========================================================================
    #[error("Invalid template: {0}")]
    InvalidTemplate(String),

    #[error("Invalid package.json template: {reason}")]
    InvalidManifest { reason: String },

    #[error("Duplicate path in generated output: {path}")]
    DuplicatePath { path: String },

    #[error("Absolute paths not allowed: {path}")]
    AbsolutePathNotAllowed { path: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::MissingName => vec![
                "Pass the name as an argument: skatekit component x-foo".into(),
                "Or answer the name prompt when asked".into(),
            ],
            Self::MissingSeparator { name } => vec![
                "Custom element names must contain a hyphen".into(),
                format!("Try: x-{}", name.trim()),
            ],
            Self::InvalidSymbol { symbol, .. } => vec![
                format!("'{}' is not a valid class name", symbol),
                "Start each part of the name with a letter, e.g. x-foo".into(),
            ],
            Self::SymbolCollision { symbol, existing, .. } => vec![
                format!("'{}' already defines class {}", existing, symbol),
                "Pick a name that produces a different class name".into(),
            ],
            Self::InvalidTemplate(_) | Self::InvalidManifest { .. } => vec![
                "The template set shipped with skatekit is broken".into(),
                "Check templates.local_path / SKATEKIT_TEMPLATES_DIR if you override templates"
                    .into(),
            ],
            _ => vec!["See documentation for more details".into()],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::MissingName
            | Self::MissingSeparator { .. }
            | Self::InvalidSymbol { .. }
            | Self::SymbolCollision { .. } => ErrorCategory::Validation,
            Self::InvalidTemplate(_) | Self::InvalidManifest { .. } => ErrorCategory::Configuration,
            Self::DuplicatePath { .. } | Self::AbsolutePathNotAllowed { .. } => {
                ErrorCategory::Internal
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Configuration,
    Internal,
}
