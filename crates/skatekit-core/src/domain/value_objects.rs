//! Value objects collected from the user and threaded through generation.
//!
//! Everything here is immutable once built. The collector produces a
//! [`ProjectConfig`] and later stages only ever read it.

use std::fmt;
use std::str::FromStr;

use heck::{ToTitleCase, ToUpperCamelCase};

use crate::domain::error::DomainError;

/// Character every unit name must contain (custom element naming rule).
pub const UNIT_NAME_SEPARATOR: char = '-';

/// Prefix used to turn a hyphen-less project directory into a valid name.
pub const DEFAULT_UNIT_PREFIX: &str = "x-";

// ============================================================================
// UnitName
// ============================================================================

/// Validated name of a generated component, e.g. `x-foo`.
///
/// Invariant: non-blank, contains [`UNIT_NAME_SEPARATOR`] and derives a
/// symbol that is a JavaScript identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct UnitName(String);

impl UnitName {
    /// Validate a raw name.
    ///
    /// Surrounding whitespace is ignored; errors quote the input verbatim.
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        let name = raw.trim();
        if name.is_empty() {
            return Err(DomainError::MissingName);
        }
        if !name.contains(UNIT_NAME_SEPARATOR) {
            return Err(DomainError::MissingSeparator {
                name: raw.to_string(),
            });
        }
        let unit = Self(name.to_string());
        let symbol = unit.symbol();
        if !is_identifier(&symbol) {
            return Err(DomainError::InvalidSymbol {
                name: raw.to_string(),
                symbol,
            });
        }
        Ok(unit)
    }

    /// Default component name for a project living in `dir_name`.
    ///
    /// `widget` becomes `x-widget`; `my-widget` is kept as is.
    pub fn default_for_project(dir_name: &str) -> String {
        if dir_name.contains(UNIT_NAME_SEPARATOR) {
            dir_name.to_string()
        } else {
            format!("{DEFAULT_UNIT_PREFIX}{dir_name}")
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Class name used in source code: `x-foo` → `XFoo`.
    pub fn symbol(&self) -> String {
        self.0.to_upper_camel_case()
    }

    /// Human readable label: `x-foo` → `X Foo`.
    pub fn label(&self) -> String {
        self.0.to_title_case()
    }

    /// Module path of the implementation file, relative to the source root.
    pub fn import_path(&self) -> String {
        format!("./components/{}/component.js", self.0)
    }
}

impl FromStr for UnitName {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for UnitName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for UnitName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// `true` for names usable as a JavaScript binding (`XFoo`, `_x`, `$el`).
pub(crate) fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    matches!(chars.next(), Some(c) if c.is_alphabetic() || c == '_' || c == '$')
        && chars.all(|c| c.is_alphanumeric() || c == '_' || c == '$')
}

// ============================================================================
// UnitMetadata
// ============================================================================

/// Optional descriptive fields attached to a generated project.
///
/// Blank values are stored as `None` so that nothing downstream ever writes
/// an empty string for a field the user skipped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UnitMetadata {
    description: Option<String>,
    author_name: Option<String>,
    author_email: Option<String>,
}

impl UnitMetadata {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_description(mut self, value: Option<String>) -> Self {
        self.description = non_blank(value);
        self
    }

    pub fn with_author_name(mut self, value: Option<String>) -> Self {
        self.author_name = non_blank(value);
        self
    }

    pub fn with_author_email(mut self, value: Option<String>) -> Self {
        self.author_email = non_blank(value);
        self
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn author_name(&self) -> Option<&str> {
        self.author_name.as_deref()
    }

    pub fn author_email(&self) -> Option<&str> {
        self.author_email.as_deref()
    }

    /// `true` when no author field was supplied.
    pub fn is_anonymous(&self) -> bool {
        self.author_name.is_none() && self.author_email.is_none()
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

// ============================================================================
// ProjectConfig
// ============================================================================

/// Everything the project initializer needs, collected up front.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectConfig {
    unit: UnitName,
    metadata: UnitMetadata,
}

impl ProjectConfig {
    pub fn new(unit: UnitName, metadata: UnitMetadata) -> Self {
        Self { unit, metadata }
    }

    pub fn unit(&self) -> &UnitName {
        &self.unit
    }

    pub fn metadata(&self) -> &UnitMetadata {
        &self.metadata
    }
}

// ============================================================================
// DependencyKind
// ============================================================================

/// Which dependency list a package is installed into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DependencyKind {
    Runtime,
    Development,
}

impl fmt::Display for DependencyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Runtime => write!(f, "runtime"),
            Self::Development => write!(f, "development"),
        }
    }
}
