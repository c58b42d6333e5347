//! Parsing module for QML documents and JavaScript programs
//!
//!     Source text becomes a [`Document`] in one pass:
//!         1. Lexing: logos tokens plus line-break information. See [lexing](crate::qml::lexing).
//!         2. Parsing: a hand-written recursive descent parser builds the tree directly.
//!
//! The Grammar
//!
//!     A QML document is a list of header items (imports and pragmas) followed by exactly
//!     one root object definition. Object bodies hold bindings, nested objects, property and
//!     signal declarations, enums, and JavaScript functions or variables. The right-hand
//!     side of a script binding is JavaScript.
//!
//!     The JavaScript side covers ES5 statements and expressions together with `let`/`const`,
//!     `for ... of`, `**`, `??` and parameter default values. Binary operators are parsed by
//!     precedence climbing.
//!
//!     Every nested production claims nesting units: a statement or object member 4, an
//!     assignment expression 2, a unary expression or operator chain link 1. Input that
//!     needs more than [`ParseOptions::max_nesting`] units fails with
//!     [`ParserError::NestingTooDeep`]. The default ceiling keeps an unoptimized build
//!     within a 2 MiB thread stack.
//!
//! Errors
//!
//!     The first error stops the parse. Messages follow the wording of the Qt QML tooling
//!     ("Expected token `;'", "Unexpected token `}'", "Unexpected end of file") and carry a
//!     1-based line and column.

mod expressions;
pub mod parser;
mod statements;
mod ui;

use std::path::Path;

pub use crate::qml::ast::{Document, ParserError, Program, UiProgram};
pub use parser::Parser;

/// Which grammar the source is parsed with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParseMode {
    #[default]
    Qml,
    Script,
}

impl ParseMode {
    /// `.js` and `.mjs` files are JavaScript programs, everything else is QML
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("js") | Some("mjs") => ParseMode::Script,
            _ => ParseMode::Qml,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseOptions {
    pub max_nesting: usize,
}

impl ParseOptions {
    pub const DEFAULT_MAX_NESTING: usize = 256;
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            max_nesting: Self::DEFAULT_MAX_NESTING,
        }
    }
}

pub fn parse_document(
    source: &str,
    mode: ParseMode,
    options: ParseOptions,
) -> Result<Document, ParserError> {
    let mut parser = Parser::new(source, options);
    let document = match mode {
        ParseMode::Qml => Document::Qml(parser.parse_ui_program()?),
        ParseMode::Script => Document::Script(parser.parse_program()?),
    };
    tracing::debug!(?mode, bytes = source.len(), "parsed document");
    Ok(document)
}

pub fn parse_qml(source: &str) -> Result<UiProgram, ParserError> {
    Parser::new(source, ParseOptions::default()).parse_ui_program()
}

pub fn parse_script(source: &str) -> Result<Program, ParserError> {
    Parser::new(source, ParseOptions::default()).parse_program()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_from_path() {
        assert_eq!(ParseMode::from_path(Path::new("a/Main.qml")), ParseMode::Qml);
        assert_eq!(ParseMode::from_path(Path::new("util.js")), ParseMode::Script);
        assert_eq!(ParseMode::from_path(Path::new("util.mjs")), ParseMode::Script);
        assert_eq!(ParseMode::from_path(Path::new("README")), ParseMode::Qml);
    }

    #[test]
    fn test_parse_document_modes() {
        assert!(matches!(
            parse_document("Item {}", ParseMode::Qml, ParseOptions::default()),
            Ok(Document::Qml(_))
        ));
        assert!(matches!(
            parse_document("x = 1;", ParseMode::Script, ParseOptions::default()),
            Ok(Document::Script(_))
        ));
    }

    #[test]
    fn test_syntax_error_location() {
        let err = parse_qml("import QtQuick 2.0\nItem { id: }").unwrap_err();
        assert_eq!(err.to_string(), "2:12: Unexpected token `}'");
    }

    #[test]
    fn test_nesting_ceiling() {
        let source = format!("{}x{}", "(".repeat(2000), ")".repeat(2000));
        let err = parse_script(&source).unwrap_err();
        assert!(matches!(err, ParserError::NestingTooDeep { limit: 256, .. }));
    }

    /// Deepest `build(depth)` the default ceiling accepts; every shallower depth must parse
    fn deepest_accepted(mode: ParseMode, build: impl Fn(usize) -> String) -> usize {
        let mut depth = 0;
        loop {
            match parse_document(&build(depth + 1), mode, ParseOptions::default()) {
                Ok(_) => depth += 1,
                Err(ParserError::NestingTooDeep { .. }) => return depth,
                Err(err) => panic!("depth {}: {err}", depth + 1),
            }
        }
    }

    #[test]
    fn test_default_ceiling_fits_a_test_thread() {
        let ifs = deepest_accepted(ParseMode::Script, |n| {
            format!("{}x;", "if (a) ".repeat(n))
        });
        assert_eq!(ifs, 62);

        let blocks = deepest_accepted(ParseMode::Script, |n| {
            format!("{}{}", "{".repeat(n), "}".repeat(n))
        });
        assert_eq!(blocks, 64);

        let bindings = deepest_accepted(ParseMode::Qml, |n| {
            format!("Item {{ {}{}}}", "x: A { ".repeat(n), "} ".repeat(n))
        });
        assert_eq!(bindings, 64);

        let parens = deepest_accepted(ParseMode::Script, |n| {
            format!("{}x{};", "(".repeat(n), ")".repeat(n))
        });
        assert_eq!(parens, 83);
    }

    #[test]
    fn test_nesting_ceiling_is_configurable() {
        let source = "a = [[[[1]]]];";
        let options = ParseOptions { max_nesting: 4 };
        assert!(parse_document(source, ParseMode::Script, options).is_err());
        assert!(parse_document(source, ParseMode::Script, ParseOptions::default()).is_ok());
    }
}
