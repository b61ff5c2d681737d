//! `package.json` generation.
//!
//! The template ships a partial manifest (scripts, license, engines...). The
//! collected project values are merged on top and the result is written with
//! keys in the conventional npm order so diffs against hand-edited manifests
//! stay small.

use serde_json::{Map, Value};

use crate::domain::{error::DomainError, value_objects::ProjectConfig};

/// Well-known top level keys, in the order they are written.
const KEY_ORDER: &[&str] = &[
    "$schema",
    "name",
    "displayName",
    "version",
    "private",
    "description",
    "keywords",
    "homepage",
    "bugs",
    "repository",
    "funding",
    "license",
    "author",
    "maintainers",
    "contributors",
    "sideEffects",
    "type",
    "exports",
    "main",
    "module",
    "source",
    "browser",
    "types",
    "typings",
    "style",
    "bin",
    "man",
    "directories",
    "files",
    "workspaces",
    "scripts",
    "config",
    "babel",
    "browserslist",
    "prettier",
    "eslintConfig",
    "eslintIgnore",
    "stylelint",
    "jest",
    "mocha",
    "resolutions",
    "dependencies",
    "devDependencies",
    "peerDependencies",
    "optionalDependencies",
    "bundledDependencies",
    "packageManager",
    "engines",
    "os",
    "cpu",
    "preferGlobal",
    "publishConfig",
];

/// Maps whose entries are sorted by name.
const SORTED_MAPS: &[&str] = &[
    "dependencies",
    "devDependencies",
    "peerDependencies",
    "optionalDependencies",
    "resolutions",
    "engines",
];

const AUTHOR_ORDER: &[&str] = &["name", "email", "url"];

/// A `package.json` document.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectManifest {
    fields: Map<String, Value>,
}

impl ProjectManifest {
    /// Parse the manifest template. The top level must be a JSON object.
    pub fn from_template(text: &str) -> Result<Self, DomainError> {
        let value: Value =
            serde_json::from_str(text).map_err(|e| DomainError::InvalidManifest {
                reason: e.to_string(),
            })?;

        match value {
            Value::Object(fields) => Ok(Self { fields }),
            other => Err(DomainError::InvalidManifest {
                reason: format!("expected a JSON object, found {}", kind_of(&other)),
            }),
        }
    }

    /// Overlay the collected project values.
    ///
    /// `name` is always replaced. `description` is replaced only when one was
    /// given, otherwise the template value stays. Author fields are merged
    /// into any author object the template carries, and an author with no
    /// fields left is dropped entirely.
    pub fn merge_project(&mut self, project: &ProjectConfig) {
        let metadata = project.metadata();

        self.fields.insert(
            "name".to_string(),
            Value::String(project.unit().as_str().to_string()),
        );

        if let Some(description) = metadata.description() {
            self.fields.insert(
                "description".to_string(),
                Value::String(description.to_string()),
            );
        }

        let mut author = match self.fields.remove("author") {
            Some(Value::Object(existing)) => existing,
            _ => Map::new(),
        };
        if let Some(name) = metadata.author_name() {
            author.insert("name".to_string(), Value::String(name.to_string()));
        }
        if let Some(email) = metadata.author_email() {
            author.insert("email".to_string(), Value::String(email.to_string()));
        }
        if !author.is_empty() {
            self.fields.insert("author".to_string(), Value::Object(author));
        }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// The description that ends up in `package.json`.
    pub fn description(&self) -> Option<&str> {
        self.fields.get("description").and_then(Value::as_str)
    }

    /// Pretty JSON (two-space indent, trailing newline) in canonical key order.
    pub fn to_canonical_json(&self) -> Result<String, DomainError> {
        let sorted = Value::Object(canonicalize(&self.fields));
        let mut out =
            serde_json::to_string_pretty(&sorted).map_err(|e| DomainError::InvalidManifest {
                reason: e.to_string(),
            })?;
        out.push('\n');
        Ok(out)
    }
}

fn canonicalize(fields: &Map<String, Value>) -> Map<String, Value> {
    let mut keys: Vec<&String> = fields.keys().collect();
    keys.sort_by_key(|k| (rank(KEY_ORDER, k), k.as_str()));

    keys.into_iter()
        .map(|key| {
            let value = &fields[key.as_str()];
            let value = match (key.as_str(), value) {
                ("author", Value::Object(author)) => Value::Object(order_author(author)),
                (k, Value::Object(map)) if SORTED_MAPS.contains(&k) => {
                    let mut entries: Vec<_> = map.iter().collect();
                    entries.sort_by(|a, b| a.0.cmp(b.0));
                    Value::Object(
                        entries
                            .into_iter()
                            .map(|(k, v)| (k.clone(), v.clone()))
                            .collect(),
                    )
                }
                _ => value.clone(),
            };
            (key.clone(), value)
        })
        .collect()
}

fn order_author(author: &Map<String, Value>) -> Map<String, Value> {
    let mut keys: Vec<&String> = author.keys().collect();
    keys.sort_by_key(|k| (rank(AUTHOR_ORDER, k), k.as_str()));
    keys.into_iter()
        .map(|k| (k.clone(), author[k.as_str()].clone()))
        .collect()
}

/// Position in `order`; unknown keys sort after every known one.
fn rank(order: &[&str], key: &str) -> usize {
    order.iter().position(|k| *k == key).unwrap_or(order.len())
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
