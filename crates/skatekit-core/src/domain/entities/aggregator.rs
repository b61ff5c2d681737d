//! Structured model of the aggregator file (`src/index.js`).
//!
//! The aggregator imports every generated component and registers it:
//!
//! ```js
//! import * as skate from 'skatejs';
//! import XFoo from "./components/x-foo/component.js";
//!
//! const { define } = skate;
//!
//! define(XFoo);
//! ```
//!
//! The file is parsed into classified lines. Unit imports and registrations
//! become entries that membership checks run against; everything else is kept
//! byte for byte. Rendering an untouched [`AggregatorFile`] reproduces its
//! input, with `\r\n` normalized to `\n`.

use crate::domain::{
    error::DomainError,
    value_objects::{UnitName, is_identifier},
};

/// Location of the aggregator file, relative to the project root.
pub const AGGREGATOR_PATH: &str = "src/index.js";

/// One `(symbol, import path)` pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnitEntry {
    pub symbol: String,
    pub import_path: String,
}

impl UnitEntry {
    pub fn new(symbol: impl Into<String>, import_path: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            import_path: import_path.into(),
        }
    }

    pub fn for_unit(unit: &UnitName) -> Self {
        Self::new(unit.symbol(), unit.import_path())
    }

    pub fn import_statement(&self) -> String {
        format!("import {} from \"{}\";", self.symbol, self.import_path)
    }

    pub fn registration_statement(&self) -> String {
        format!("define({});", self.symbol)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Line {
    /// `import Symbol from "path";`
    UnitImport { entry: UnitEntry, raw: String },
    /// Any other import statement, possibly spanning several lines.
    Import(String),
    /// `define(Symbol);`
    Registration { symbol: String, raw: String },
    Verbatim(String),
}

impl Line {
    fn raw(&self) -> &str {
        match self {
            Self::UnitImport { raw, .. } | Self::Registration { raw, .. } => raw,
            Self::Import(raw) | Self::Verbatim(raw) => raw,
        }
    }

    fn is_import(&self) -> bool {
        matches!(self, Self::UnitImport { .. } | Self::Import(_))
    }
}

/// What [`AggregatorFile::register`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Registration {
    Inserted,
    AlreadyPresent,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AggregatorFile {
    lines: Vec<Line>,
    trailing_newline: bool,
}

impl AggregatorFile {
    pub fn parse(text: &str) -> Self {
        let trailing_newline = text.ends_with('\n');
        let body = text.strip_suffix('\n').unwrap_or(text);

        let mut lines = Vec::new();
        let mut pending_import: Option<String> = None;

        if !text.is_empty() {
            for raw in body.split('\n') {
                let raw = raw.strip_suffix('\r').unwrap_or(raw);

                if let Some(mut statement) = pending_import.take() {
                    // A new statement means the open import was never closed.
                    if starts_statement(raw) {
                        lines.push(Line::Import(statement));
                    } else {
                        statement.push('\n');
                        statement.push_str(raw);
                        if closes_import(raw) {
                            lines.push(Line::Import(statement));
                        } else {
                            pending_import = Some(statement);
                        }
                        continue;
                    }
                }

                match classify(raw) {
                    Some(line) => lines.push(line),
                    None => pending_import = Some(raw.to_string()),
                }
            }
        }

        if let Some(statement) = pending_import {
            lines.push(Line::Import(statement));
        }

        Self {
            lines,
            trailing_newline,
        }
    }

    /// Unit imports in file order.
    pub fn entries(&self) -> Vec<&UnitEntry> {
        self.lines
            .iter()
            .filter_map(|l| match l {
                Line::UnitImport { entry, .. } => Some(entry),
                _ => None,
            })
            .collect()
    }

    /// Registered symbols in file order.
    pub fn registrations(&self) -> Vec<&str> {
        self.lines
            .iter()
            .filter_map(|l| match l {
                Line::Registration { symbol, .. } => Some(symbol.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Membership is decided by import path: one module, one unit.
    pub fn contains(&self, entry: &UnitEntry) -> bool {
        self.entries()
            .iter()
            .any(|e| e.import_path == entry.import_path)
    }

    fn is_registered(&self, symbol: &str) -> bool {
        self.registrations().contains(&symbol)
    }

    /// Add `entry` unless it is already imported.
    ///
    /// The import goes right after the last import statement and the
    /// registration right after the last registration, so prior entries keep
    /// their relative order and the new one lands last. A file without
    /// registrations gets the call appended at the end.
    ///
    /// # Errors
    ///
    /// `SymbolCollision` when another module is already imported under the
    /// same symbol. The file is left untouched in that case.
    pub fn register(&mut self, entry: UnitEntry) -> Result<Registration, DomainError> {
        if self.contains(&entry) {
            return Ok(Registration::AlreadyPresent);
        }

        if let Some(existing) = self.entries().iter().find(|e| e.symbol == entry.symbol) {
            return Err(DomainError::SymbolCollision {
                name: entry.import_path.clone(),
                symbol: entry.symbol.clone(),
                existing: existing.import_path.clone(),
            });
        }

        let import_at = self
            .lines
            .iter()
            .rposition(Line::is_import)
            .map_or(0, |i| i + 1);
        self.lines.insert(
            import_at,
            Line::UnitImport {
                raw: entry.import_statement(),
                entry: entry.clone(),
            },
        );

        if !self.is_registered(&entry.symbol) {
            let registration = Line::Registration {
                raw: entry.registration_statement(),
                symbol: entry.symbol.clone(),
            };

            match self
                .lines
                .iter()
                .rposition(|l| matches!(l, Line::Registration { .. }))
            {
                Some(last) => self.lines.insert(last + 1, registration),
                None => {
                    while let Some(Line::Verbatim(s)) = self.lines.last() {
                        if !s.trim().is_empty() {
                            break;
                        }
                        self.lines.pop();
                    }
                    self.lines.push(Line::Verbatim(String::new()));
                    self.lines.push(registration);
                }
            }
        }

        self.trailing_newline = true;
        Ok(Registration::Inserted)
    }

    pub fn render(&self) -> String {
        let mut out = self
            .lines
            .iter()
            .map(Line::raw)
            .collect::<Vec<_>>()
            .join("\n");
        if self.trailing_newline {
            out.push('\n');
        }
        out
    }
}

/// Classify a single line. `None` means an import statement was opened and
/// continues on the following lines.
fn classify(raw: &str) -> Option<Line> {
    let code = strip_comment(raw).trim();

    if is_import_keyword(code) {
        if let Some(entry) = parse_unit_import(code) {
            return Some(Line::UnitImport {
                entry,
                raw: raw.to_string(),
            });
        }
        if !code.ends_with(';') && !is_complete_import(code) {
            return None;
        }
        return Some(Line::Import(raw.to_string()));
    }

    if let Some(symbol) = parse_registration(code) {
        return Some(Line::Registration {
            symbol,
            raw: raw.to_string(),
        });
    }

    Some(Line::Verbatim(raw.to_string()))
}

fn is_import_keyword(code: &str) -> bool {
    code == "import" || code.starts_with("import ") || code.starts_with("import{")
}

/// Lines that can only begin a statement of their own.
fn starts_statement(raw: &str) -> bool {
    let code = strip_comment(raw).trim();
    is_import_keyword(code) || parse_registration(code).is_some()
}

/// The last line of a multi-line import: `} from 'x'`, with or without `;`.
fn closes_import(raw: &str) -> bool {
    let code = strip_comment(raw).trim();
    code.ends_with(';') || from_clause(code).is_some()
}

/// Semicolon-less single line imports (`import 'x'`, `import A from "b"`).
fn is_complete_import(code: &str) -> bool {
    let rest = code.trim_start_matches("import").trim();
    strip_quotes(rest).is_some() || from_clause(rest).is_some()
}

/// Split `<bindings> from "<path>"` into its bindings and path.
fn from_clause(code: &str) -> Option<(&str, &str)> {
    let code = code.trim_end_matches(';').trim_end();
    let quote = code.chars().last().filter(|c| *c == '"' || *c == '\'')?;
    let body = &code[..code.len() - 1];
    let open = body.rfind(quote)?;
    let bindings = body[..open].trim_end().strip_suffix("from")?;
    if !bindings.is_empty() && !bindings.ends_with(|c: char| c.is_whitespace() || c == '}') {
        return None;
    }
    Some((bindings.trim(), &body[open + 1..]))
}

fn parse_unit_import(code: &str) -> Option<UnitEntry> {
    let rest = code.strip_prefix("import ")?;
    let (symbol, path) = from_clause(rest)?;
    is_identifier(symbol).then(|| UnitEntry::new(symbol, path))
}

fn parse_registration(code: &str) -> Option<String> {
    let inner = code
        .strip_prefix("define(")?
        .trim_end_matches(';')
        .trim_end()
        .strip_suffix(')')?
        .trim();
    is_identifier(inner).then(|| inner.to_string())
}

/// Drop a trailing `// comment` that is not inside a string literal.
fn strip_comment(raw: &str) -> &str {
    let mut quote: Option<char> = None;
    let mut escaped = false;
    let mut prev = '\0';

    for (i, c) in raw.char_indices() {
        match quote {
            Some(_) if escaped => escaped = false,
            Some(_) if c == '\\' => escaped = true,
            Some(q) if c == q => quote = None,
            Some(_) => {}
            None if c == '"' || c == '\'' || c == '`' => quote = Some(c),
            None if c == '/' && prev == '/' => return &raw[..i - 1],
            None => {}
        }
        prev = c;
    }
    raw
}

fn strip_quotes(s: &str) -> Option<&str> {
    let s = s.trim_end_matches(';').trim_end();
    ['"', '\'']
        .into_iter()
        .find_map(|q| s.strip_prefix(q)?.strip_suffix(q))
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXISTING: &str = "import * as skate from 'skatejs';\n\
                            import XFoo from \"./components/x-foo/component.js\";\n\
                            \n\
                            const { define } = skate;\n\
                            \n\
                            define(XFoo);\n";

    fn entry(name: &str) -> UnitEntry {
        UnitEntry::for_unit(&UnitName::parse(name).unwrap())
    }

    #[test]
    fn statements_have_the_expected_shape() {
        let e = entry("x-foo");
        assert_eq!(
            e.import_statement(),
            "import XFoo from \"./components/x-foo/component.js\";"
        );
        assert_eq!(e.registration_statement(), "define(XFoo);");
    }

    #[test]
    fn parse_then_render_is_lossless() {
        let file = AggregatorFile::parse(EXISTING);
        assert_eq!(file.render(), EXISTING);
        assert_eq!(file.entries(), vec![&entry("x-foo")]);
        assert_eq!(file.registrations(), vec!["XFoo"]);
    }

    #[test]
    fn registering_twice_is_a_no_op() {
        let mut file = AggregatorFile::parse(EXISTING);
        assert_eq!(
            file.register(entry("x-foo")).unwrap(),
            Registration::AlreadyPresent
        );
        assert_eq!(file.render(), EXISTING);
    }

    #[test]
    fn new_entries_are_appended_in_order() {
        let mut file = AggregatorFile::parse(EXISTING);
        file.register(entry("x-bar")).unwrap();
        file.register(entry("x-baz")).unwrap();

        assert_eq!(
            file.render(),
            "import * as skate from 'skatejs';\n\
             import XFoo from \"./components/x-foo/component.js\";\n\
             import XBar from \"./components/x-bar/component.js\";\n\
             import XBaz from \"./components/x-baz/component.js\";\n\
             \n\
             const { define } = skate;\n\
             \n\
             define(XFoo);\n\
             define(XBar);\n\
             define(XBaz);\n"
        );
    }

    #[test]
    fn registration_goes_after_last_define_even_with_trailing_code() {
        let text = "import XFoo from './components/x-foo/component.js';\n\
                    define(XFoo);\n\
                    export default {};\n";
        let mut file = AggregatorFile::parse(text);
        file.register(entry("x-bar")).unwrap();

        assert_eq!(
            file.render(),
            "import XFoo from './components/x-foo/component.js';\n\
             import XBar from \"./components/x-bar/component.js\";\n\
             define(XFoo);\n\
             define(XBar);\n\
             export default {};\n"
        );
    }

    #[test]
    fn file_without_imports_or_registrations() {
        let mut file = AggregatorFile::parse("// entry point\n\n");
        file.register(entry("x-foo")).unwrap();

        assert_eq!(
            file.render(),
            "import XFoo from \"./components/x-foo/component.js\";\n\
             // entry point\n\
             \n\
             define(XFoo);\n"
        );
    }

    #[test]
    fn empty_file_gets_both_statements() {
        let mut file = AggregatorFile::parse("");
        file.register(entry("x-foo")).unwrap();
        assert_eq!(file.entries().len(), 1);
        assert_eq!(file.registrations(), vec!["XFoo"]);
    }

    #[test]
    fn multi_line_imports_count_as_imports() {
        let text = "import {\n  define,\n  props,\n} from 'skatejs';\nconst x = 1;\n";
        let mut file = AggregatorFile::parse(text);
        assert_eq!(file.render(), text);

        file.register(entry("x-foo")).unwrap();
        assert!(file.render().starts_with(
            "import {\n  define,\n  props,\n} from 'skatejs';\nimport XFoo from"
        ));
    }

    #[test]
    fn membership_ignores_formatting_differences() {
        let text = "import   XFoo   from   './components/x-foo/component.js'\ndefine( XFoo );\n";
        let mut file = AggregatorFile::parse(text);
        assert_eq!(
            file.register(entry("x-foo")).unwrap(),
            Registration::AlreadyPresent
        );
    }

    #[test]
    fn semicolon_less_multi_line_import_ends_at_from_clause() {
        let text = "import {\n  define\n} from 'skatejs'\n\
                    import XFoo from './components/x-foo/component.js'\n\
                    \n\
                    define(XFoo)\n";
        let mut file = AggregatorFile::parse(text);
        assert_eq!(file.entries(), vec![&entry("x-foo")]);
        assert_eq!(file.registrations(), vec!["XFoo"]);

        assert_eq!(
            file.register(entry("x-foo")).unwrap(),
            Registration::AlreadyPresent
        );
        assert_eq!(file.render(), text);

        file.register(entry("x-bar")).unwrap();
        assert_eq!(file.render().matches("define(XFoo)").count(), 1);
        assert_eq!(file.registrations(), vec!["XFoo", "XBar"]);
    }

    #[test]
    fn trailing_comments_do_not_hide_entries() {
        let text = "import * as skate from 'skatejs'; // runtime\n\
                    import XFoo from \"./components/x-foo/component.js\"; // main\n\
                    define(XFoo); // register\n";
        let mut file = AggregatorFile::parse(text);
        assert_eq!(file.entries(), vec![&entry("x-foo")]);
        assert_eq!(file.registrations(), vec!["XFoo"]);
        assert_eq!(
            file.register(entry("x-foo")).unwrap(),
            Registration::AlreadyPresent
        );
        assert_eq!(file.render(), text);
    }

    #[test]
    fn comment_markers_inside_strings_are_kept() {
        let file = AggregatorFile::parse("import XFoo from 'https://cdn.example.com/x.js';\n");
        assert_eq!(file.entries()[0].import_path, "https://cdn.example.com/x.js");
    }

    #[test]
    fn unclosed_import_stops_at_next_statement() {
        let text = "import {\n  define\n\
                    import XFoo from './components/x-foo/component.js'\n\
                    define(XFoo)\n";
        let mut file = AggregatorFile::parse(text);
        assert_eq!(file.entries().len(), 1);
        assert_eq!(file.registrations(), vec!["XFoo"]);
        assert_eq!(
            file.register(entry("x-foo")).unwrap(),
            Registration::AlreadyPresent
        );
        assert_eq!(file.render(), text);
    }

    #[test]
    fn symbol_collision_is_rejected() {
        let mut file = AggregatorFile::parse(EXISTING);
        let err = file.register(entry("x--foo")).unwrap_err();
        assert!(matches!(err, DomainError::SymbolCollision { .. }));
        assert_eq!(file.render(), EXISTING);
    }

    #[test]
    fn existing_registration_without_import_is_not_duplicated() {
        let mut file = AggregatorFile::parse("const { define } = skate;\ndefine(XFoo);\n");
        file.register(entry("x-foo")).unwrap();
        assert_eq!(file.registrations(), vec!["XFoo"]);
        assert_eq!(file.entries().len(), 1);
    }

    #[test]
    fn crlf_is_normalized() {
        let file = AggregatorFile::parse("import XFoo from './a.js';\r\ndefine(XFoo);\r\n");
        assert_eq!(file.render(), "import XFoo from './a.js';\ndefine(XFoo);\n");
    }
}
