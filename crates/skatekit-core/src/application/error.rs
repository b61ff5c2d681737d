//! Application layer errors.
//!
//! These errors represent failures in orchestration, not business logic.
//! Business logic errors are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// No store could supply the template.
    #[error("Template not found: {id}")]
    TemplateNotFound { id: String },

    /// A configured template directory does not exist.
    #[error("Template directory does not exist: {path}")]
    TemplateRootMissing { path: PathBuf },

    /// Template rendering failed.
    #[error("Template rendering failed: {reason}")]
    RenderingFailed { reason: String },

    /// Filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// Reading an answer from the user failed (closed stdin, terminal error).
    #[error("Could not read answer: {reason}")]
    PromptFailed { reason: String },

    /// A package manager (or other spawned tool) failed.
    #[error("`{command}` failed: {reason}")]
    ExternalToolFailed { command: String, reason: String },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::TemplateNotFound { id } => vec![
                format!("No template provides '{}'", id),
                "Check templates.local_path / SKATEKIT_TEMPLATES_DIR".into(),
                "Unset them to fall back to the built-in templates".into(),
            ],
            Self::TemplateRootMissing { path } => vec![
                format!("Create {} or point the setting elsewhere", path.display()),
                "Run: skatekit config get templates.local_path".into(),
            ],
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
            ],
            Self::PromptFailed { .. } => vec![
                "Pass values as arguments instead of answering prompts".into(),
                "Use --yes to accept every default".into(),
            ],
            Self::ExternalToolFailed { command, .. } => vec![
                format!("Re-run manually inside the project: {}", command),
                "Generated files were kept; use --skip-install to skip this step".into(),
                "Set install.package_manager to switch between yarn and npm".into(),
            ],
            Self::RenderingFailed { .. } => vec!["Check the error details above".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::TemplateNotFound { .. } | Self::TemplateRootMissing { .. } => {
                ErrorCategory::Configuration
            }
            Self::ExternalToolFailed { .. } => ErrorCategory::ExternalTool,
            Self::FilesystemError { .. } | Self::PromptFailed { .. } => ErrorCategory::Internal,
            Self::RenderingFailed { .. } => ErrorCategory::Internal,
        }
    }
}
