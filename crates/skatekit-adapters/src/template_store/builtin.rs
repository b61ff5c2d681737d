//! Templates compiled into the binary.

use skatekit_core::{
    application::{ApplicationError, ports::TemplateStore},
    domain::{Generator, TemplateId},
    error::SkatekitResult,
};

/// `(generator, path, source)` for every shipped template.
const BUILTIN: &[(Generator, &str, &str)] = &[
    (
        Generator::App,
        "package.json",
        include_str!("../../templates/app/package.json"),
    ),
    (
        Generator::App,
        "README.md",
        include_str!("../../templates/app/README.md"),
    ),
    (
        Generator::App,
        "gitignore",
        include_str!("../../templates/app/gitignore"),
    ),
    (
        Generator::App,
        "src/util/style.js",
        include_str!("../../templates/app/src/util/style.js"),
    ),
    (
        Generator::App,
        "webpack/development.js",
        include_str!("../../templates/app/webpack/development.js"),
    ),
    (
        Generator::App,
        "webpack/production.js",
        include_str!("../../templates/app/webpack/production.js"),
    ),
    (
        Generator::App,
        "demo/index.html",
        include_str!("../../templates/app/demo/index.html"),
    ),
    (
        Generator::Component,
        "component.js",
        include_str!("../../templates/component/component.js"),
    ),
    (
        Generator::Component,
        "styles.scss",
        include_str!("../../templates/component/styles.scss"),
    ),
    (
        Generator::Component,
        "test.js",
        include_str!("../../templates/component/test.js"),
    ),
    (
        Generator::Component,
        "index.js",
        include_str!("../../templates/component/index.js"),
    ),
];

/// Read-only store over the embedded templates.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinStore;

impl BuiltinStore {
    pub fn new() -> Self {
        Self
    }
}

impl TemplateStore for BuiltinStore {
    fn get(&self, id: &TemplateId) -> SkatekitResult<String> {
        BUILTIN
            .iter()
            .find(|(generator, path, _)| {
                *generator == id.generator() && id.path().to_slash_string() == *path
            })
            .map(|(_, _, source)| (*source).to_string())
            .ok_or_else(|| ApplicationError::TemplateNotFound { id: id.to_string() }.into())
    }

    fn list(&self) -> SkatekitResult<Vec<TemplateId>> {
        Ok(BUILTIN
            .iter()
            .map(|(generator, path, _)| TemplateId::new(*generator, *path))
            .collect())
    }
}
