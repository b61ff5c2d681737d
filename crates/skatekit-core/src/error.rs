//! Unified error handling for Skatekit Core.
//!
//! This module provides a unified error type that wraps domain and application
//! errors, with rich context and user-actionable suggestions.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for Skatekit Core operations.
#[derive(Debug, Error, Clone)]
pub enum SkatekitError {
    /// Errors from the domain layer (invalid names, collisions, bad templates).
    #[error("{0}")]
    Domain(#[from] DomainError),

    /// Errors from the application layer (I/O, templates, external tools).
    #[error("{0}")]
    Application(#[from] ApplicationError),

    /// Configuration or setup errors.
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Unexpected internal errors (bugs).
    #[error("Internal error: {message}. This is a bug, please report it.")]
    Internal { message: String },
}

impl SkatekitError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
            Self::Configuration { message } => vec![
                format!("Configuration issue: {}", message),
                "Check your setup and try again".into(),
            ],
            Self::Internal { .. } => vec![
                "This appears to be a bug in skatekit".into(),
                "Please report this issue at: https://github.com/cosecruz/skatekit/issues".into(),
            ],
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => match e.category() {
                crate::domain::ErrorCategory::Validation => ErrorCategory::Validation,
                crate::domain::ErrorCategory::Configuration => ErrorCategory::Configuration,
                crate::domain::ErrorCategory::Internal => ErrorCategory::Internal,
            },
            Self::Application(e) => e.category(),
            Self::Configuration { .. } => ErrorCategory::Configuration,
            Self::Internal { .. } => ErrorCategory::Internal,
        }
    }
}

/// Error categories for UI display.
///
/// Mirrors the taxonomy the tool promises its users: bad input, a broken
/// installation, or a failing external package manager.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Configuration,
    ExternalTool,
    Internal,
}

/// Convenient result type alias.
pub type SkatekitResult<T> = Result<T, SkatekitError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn missing_separator_is_validation() {
        let err: SkatekitError = DomainError::MissingSeparator { name: "foo".into() }.into();
        assert_eq!(err.category(), ErrorCategory::Validation);
        assert_eq!(
            err.to_string(),
            "The component name must include a hyphen, was 'foo'"
        );
    }

    #[test]
    fn missing_template_is_configuration() {
        let err: SkatekitError = ApplicationError::TemplateNotFound {
            id: "component/component.js".into(),
        }
        .into();
        assert_eq!(err.category(), ErrorCategory::Configuration);
    }

    #[test]
    fn installer_failure_is_external_tool() {
        let err: SkatekitError = ApplicationError::ExternalToolFailed {
            command: "yarn add skatejs".into(),
            reason: "exit status 1".into(),
        }
        .into();
        assert_eq!(err.category(), ErrorCategory::ExternalTool);
        assert!(err.suggestions().iter().any(|s| s.contains("yarn add skatejs")));
    }

    #[test]
    fn filesystem_failure_is_internal() {
        let err: SkatekitError = ApplicationError::FilesystemError {
            path: PathBuf::from("src/index.js"),
            reason: "denied".into(),
        }
        .into();
        assert_eq!(err.category(), ErrorCategory::Internal);
    }
}
