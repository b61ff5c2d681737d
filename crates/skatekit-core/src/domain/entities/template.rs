//! Template sets and rendering context.
//!
//! Generation works from two fixed template sets, one per generator:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  TemplateSet (per Generator)                                │
//! │  └── Vec<FileSpec>                                          │
//! │       ├── template:    TemplateId  (where the source lives) │
//! │       ├── destination: pattern     (where output goes)      │
//! │       └── content:     Literal | Parameterized              │
//! ├─────────────────────────────────────────────────────────────┤
//! │  TemplateStore (driven port) resolves TemplateId → source   │
//! ├─────────────────────────────────────────────────────────────┤
//! │  RenderContext                                              │
//! │  └── Variable substitution: {{COMPONENT_CLASS}} -> "XFoo"   │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Decisions
//!
//! ### 1. Fixed sets, not discovered ones
//!
//! The list of files a generator writes is part of the domain: a component
//! is always an implementation, a stylesheet and a test. Stores only supply
//! the *content* for those files, so a user-provided template directory can
//! restyle the output but cannot change its shape.
//!
//! ### 2. Destinations are templates too
//!
//! `src/components/{{COMPONENT_NAME}}/component.js` is rendered with the same
//! context as the file body, then checked with [`RelativePath::try_new`] so a
//! crafted name can never write outside the project root.
//!
//! ### 3. `Literal` vs `Parameterized`
//!
//! Support files such as `.gitignore` or the style helper are copied
//! verbatim. They may legitimately contain `{{` (webpack or template
//! literals), so they never go through substitution.

use std::collections::{HashMap, HashSet};
use std::fmt;
use std::str::FromStr;

use chrono::Datelike;

use crate::domain::{
    entities::common::RelativePath,
    error::DomainError,
    value_objects::{ProjectConfig, UnitName},
};

// ============================================================================
// Generator & TemplateId
// ============================================================================

/// The two generators shipped with skatekit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Generator {
    /// Whole-project initialization.
    App,
    /// A single component.
    Component,
}

impl Generator {
    pub const ALL: [Generator; 2] = [Generator::App, Generator::Component];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::App => "app",
            Self::Component => "component",
        }
    }
}

impl fmt::Display for Generator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Generator {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "app" => Ok(Self::App),
            "component" => Ok(Self::Component),
            other => Err(DomainError::InvalidTemplate(format!(
                "unknown generator '{other}'"
            ))),
        }
    }
}

/// Location of a template source: `<generator>/<path>` under a template root.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TemplateId {
    generator: Generator,
    path: RelativePath,
}

impl TemplateId {
    pub fn new(generator: Generator, path: impl Into<RelativePath>) -> Self {
        Self {
            generator,
            path: path.into(),
        }
    }

    /// Parse the `generator/path` form used by [`fmt::Display`].
    pub fn parse(s: &str) -> Result<Self, DomainError> {
        let (generator, path) = s.split_once('/').ok_or_else(|| {
            DomainError::InvalidTemplate(format!(
                "Invalid template ID format: {s}. Expected 'generator/path'"
            ))
        })?;
        Ok(Self {
            generator: generator.parse()?,
            path: RelativePath::try_new(path)?,
        })
    }

    pub fn generator(&self) -> Generator {
        self.generator
    }

    pub fn path(&self) -> &RelativePath {
        &self.path
    }

    /// `package.json` defaults merged into every new project.
    pub fn manifest() -> Self {
        Self::new(Generator::App, "package.json")
    }

    /// Seed for `src/index.js` when the aggregator file does not exist yet.
    pub fn aggregator_seed() -> Self {
        Self::new(Generator::Component, "index.js")
    }
}

impl fmt::Display for TemplateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.generator, self.path)
    }
}

// ============================================================================
// FileSpec & TemplateSet
// ============================================================================

/// How a file's content is treated during rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateContent {
    /// Copied verbatim.
    Literal,
    /// `{{VARIABLE}}` placeholders are substituted.
    Parameterized,
}

/// One file a generator writes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileSpec {
    pub template: TemplateId,
    /// Destination pattern, relative to the project root.
    pub destination: &'static str,
    pub content: TemplateContent,
}

impl FileSpec {
    pub fn parameterized(template: TemplateId, destination: &'static str) -> Self {
        Self {
            template,
            destination,
            content: TemplateContent::Parameterized,
        }
    }

    pub fn literal(template: TemplateId, destination: &'static str) -> Self {
        Self {
            template,
            destination,
            content: TemplateContent::Literal,
        }
    }

    /// Render the destination pattern and check it stays inside the root.
    pub fn destination_for(&self, ctx: &RenderContext) -> Result<RelativePath, DomainError> {
        RelativePath::try_new(ctx.render(self.destination))
    }
}

/// The fixed list of files one generator produces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateSet {
    pub generator: Generator,
    pub files: Vec<FileSpec>,
}

impl TemplateSet {
    /// Implementation, styles and test for a single component.
    pub fn component() -> Self {
        let id = |path: &'static str| TemplateId::new(Generator::Component, path);
        Self {
            generator: Generator::Component,
            files: vec![
                FileSpec::parameterized(
                    id("component.js"),
                    "src/components/{{COMPONENT_NAME}}/component.js",
                ),
                FileSpec::parameterized(
                    id("styles.scss"),
                    "src/components/{{COMPONENT_NAME}}/styles.scss",
                ),
                FileSpec::parameterized(
                    id("test.js"),
                    "test/components/{{COMPONENT_NAME}}-test.js",
                ),
            ],
        }
    }

    /// Project support files. `package.json` and `src/index.js` are produced
    /// separately (manifest merge and aggregator registration).
    pub fn app() -> Self {
        let id = |path: &'static str| TemplateId::new(Generator::App, path);
        Self {
            generator: Generator::App,
            files: vec![
                FileSpec::parameterized(id("README.md"), "README.md"),
                FileSpec::literal(id("gitignore"), ".gitignore"),
                FileSpec::literal(id("src/util/style.js"), "src/util/style.js"),
                FileSpec::parameterized(id("webpack/development.js"), "webpack/development.js"),
                FileSpec::parameterized(id("webpack/production.js"), "webpack/production.js"),
                FileSpec::parameterized(id("demo/index.html"), "demo/index.html"),
            ],
        }
    }

    pub fn for_generator(generator: Generator) -> Self {
        match generator {
            Generator::App => Self::app(),
            Generator::Component => Self::component(),
        }
    }

    /// Every template id this set needs, including the out-of-band ones.
    pub fn required_templates(&self) -> Vec<TemplateId> {
        let mut ids: Vec<TemplateId> = self.files.iter().map(|f| f.template.clone()).collect();
        match self.generator {
            Generator::App => ids.push(TemplateId::manifest()),
            Generator::Component => ids.push(TemplateId::aggregator_seed()),
        }
        ids
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        if self.files.is_empty() {
            return Err(DomainError::InvalidTemplate(format!(
                "template set '{}' is empty",
                self.generator
            )));
        }

        let mut seen = HashSet::new();
        for file in &self.files {
            if file.template.generator() != self.generator {
                return Err(DomainError::InvalidTemplate(format!(
                    "template '{}' does not belong to generator '{}'",
                    file.template, self.generator
                )));
            }
            if !seen.insert(file.destination) {
                return Err(DomainError::DuplicatePath {
                    path: file.destination.to_string(),
                });
            }
        }

        Ok(())
    }
}

/// A [`FileSpec`] paired with the source text loaded from a store.
#[derive(Debug, Clone)]
pub struct ResolvedTemplate {
    pub spec: FileSpec,
    pub source: String,
}

// ============================================================================
// RenderContext
// ============================================================================

/// Context for template rendering.
///
/// Immutable after creation - transformations create new instances.
///
/// ## Built-in Variables
///
/// | Variable | Example | Source |
/// |----------|---------|--------|
/// | `COMPONENT_NAME` | "x-foo" | Unit name |
/// | `COMPONENT_CLASS` | "XFoo" | Computed |
/// | `COMPONENT_LABEL` | "X Foo" | Computed |
/// | `YEAR` | "2026" | System clock |
/// | `PROJECT_NAME` | "x-foo" | Project config |
/// | `PROJECT_DESCRIPTION` | "`x-foo` custom element" | Project config |
/// | `AUTHOR_NAME`, `AUTHOR_EMAIL` | "Jane" | Project config |
/// | `AUTHOR_LINE` | "Created by Jane <jane@example.com>" | Computed |
///
/// Project variables are always defined once [`RenderContext::with_project`]
/// ran; skipped metadata renders as an empty string.
#[derive(Debug, Clone)]
pub struct RenderContext {
    variables: HashMap<String, String>,
}

impl RenderContext {
    /// Context carrying the variables derived from a unit name.
    pub fn for_unit(unit: &UnitName) -> Self {
        let mut vars = HashMap::new();
        vars.insert("COMPONENT_NAME".to_string(), unit.to_string());
        vars.insert("COMPONENT_CLASS".to_string(), unit.symbol());
        vars.insert("COMPONENT_LABEL".to_string(), unit.label());
        vars.insert("YEAR".to_string(), chrono::Local::now().year().to_string());

        Self { variables: vars }
    }

    /// Add the project-level variables.
    pub fn with_project(self, config: &ProjectConfig) -> Self {
        let meta = config.metadata();
        let author_line = match (meta.author_name(), meta.author_email()) {
            (Some(name), Some(email)) => format!("Created by {name} <{email}>"),
            (Some(name), None) => format!("Created by {name}"),
            (None, Some(email)) => format!("Created by <{email}>"),
            (None, None) => String::new(),
        };

        self.with_variable("PROJECT_NAME", config.unit().as_str())
            .with_variable("PROJECT_DESCRIPTION", meta.description().unwrap_or_default())
            .with_variable("AUTHOR_NAME", meta.author_name().unwrap_or_default())
            .with_variable("AUTHOR_EMAIL", meta.author_email().unwrap_or_default())
            .with_variable("AUTHOR_LINE", author_line)
    }

    /// Add a custom variable, consuming self and returning a new context.
    pub fn with_variable(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.variables.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.variables.get(key).map(|s| s.as_str())
    }

    /// Render a template string by replacing `{{VARIABLE}}` placeholders.
    ///
    /// - `{{UNKNOWN}}` stays as literal `{{UNKNOWN}}`
    /// - values are inserted once; a value containing `{{X}}` is not expanded again
    pub fn render(&self, template: &str) -> String {
        let mut out = String::with_capacity(template.len());
        let mut rest = template;

        while let Some(start) = rest.find("{{") {
            out.push_str(&rest[..start]);
            let after = &rest[start + 2..];
            match after.find("}}") {
                Some(end) => {
                    let key = &after[..end];
                    match self.variables.get(key) {
                        Some(value) => out.push_str(value),
                        None => {
                            out.push_str("{{");
                            out.push_str(key);
                            out.push_str("}}");
                        }
                    }
                    rest = &after[end + 2..];
                }
                None => {
                    out.push_str(&rest[start..]);
                    rest = "";
                }
            }
        }

        out.push_str(rest);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::UnitMetadata;

    fn unit(name: &str) -> UnitName {
        UnitName::parse(name).unwrap()
    }

    #[test]
    fn unit_variables() {
        let ctx = RenderContext::for_unit(&unit("x-foo"));
        assert_eq!(ctx.get("COMPONENT_NAME"), Some("x-foo"));
        assert_eq!(ctx.get("COMPONENT_CLASS"), Some("XFoo"));
        assert_eq!(ctx.get("COMPONENT_LABEL"), Some("X Foo"));
        assert!(ctx.get("YEAR").is_some());
    }

    #[test]
    fn project_variables_render_absent_fields_empty() {
        let config = ProjectConfig::new(
            unit("x-app"),
            UnitMetadata::new().with_author_name(Some("Jane".into())),
        );
        let ctx = RenderContext::for_unit(config.unit()).with_project(&config);

        assert_eq!(ctx.get("PROJECT_DESCRIPTION"), Some(""));
        assert_eq!(ctx.get("AUTHOR_EMAIL"), Some(""));
        assert_eq!(ctx.get("AUTHOR_LINE"), Some("Created by Jane"));
    }

    #[test]
    fn render_leaves_unknown_placeholders() {
        let ctx = RenderContext::for_unit(&unit("x-foo"));
        assert_eq!(
            ctx.render("class {{COMPONENT_CLASS}} {{NOPE}} {{"),
            "class XFoo {{NOPE}} {{"
        );
    }

    #[test]
    fn render_does_not_expand_substituted_values() {
        let ctx =
            RenderContext::for_unit(&unit("x-foo")).with_variable("RAW", "{{COMPONENT_NAME}}");
        assert_eq!(ctx.render("{{RAW}}"), "{{COMPONENT_NAME}}");
    }

    #[test]
    fn component_destinations() {
        let ctx = RenderContext::for_unit(&unit("x-foo"));
        let paths: Vec<String> = TemplateSet::component()
            .files
            .iter()
            .map(|f| f.destination_for(&ctx).unwrap().to_string())
            .collect();

        assert_eq!(
            paths,
            vec![
                "src/components/x-foo/component.js",
                "src/components/x-foo/styles.scss",
                "test/components/x-foo-test.js",
            ]
        );
    }

    #[test]
    fn destination_cannot_escape_root() {
        let ctx = RenderContext::for_unit(&unit("../../x-evil"));
        let spec = &TemplateSet::component().files[0];
        assert!(spec.destination_for(&ctx).is_err());
    }

    #[test]
    fn builtin_sets_are_valid() {
        for generator in Generator::ALL {
            TemplateSet::for_generator(generator).validate().unwrap();
        }
    }

    #[test]
    fn required_templates_include_out_of_band_files() {
        assert!(TemplateSet::app()
            .required_templates()
            .contains(&TemplateId::manifest()));
        assert!(TemplateSet::component()
            .required_templates()
            .contains(&TemplateId::aggregator_seed()));
    }

    #[test]
    fn template_id_round_trips_through_display() {
        let id = TemplateId::new(Generator::App, "webpack/production.js");
        assert_eq!(id.to_string(), "app/webpack/production.js");
        assert_eq!(TemplateId::parse("app/webpack/production.js").unwrap(), id);
        assert!(TemplateId::parse("nope").is_err());
        assert!(TemplateId::parse("widget/a.js").is_err());
    }
}
