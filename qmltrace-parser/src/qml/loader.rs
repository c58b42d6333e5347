//! Source loading
//!
//! `DocumentLoader` holds the text to parse and the grammar to parse it with. When a
//! named file cannot be read, [`DocumentLoader::from_path_or_fallback`] substitutes a
//! built-in snippet and remembers why, so a caller can still produce a trace.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::qml::ast::{Document, ParserError, Span};
use crate::qml::lexing::{tokenize, Token};
use crate::qml::parsing::{parse_document, ParseMode, ParseOptions};

#[derive(Debug, Error)]
pub enum LoaderError {
    #[error("cannot read {}: {source}", path.display())]
    SourceUnavailable { path: PathBuf, source: io::Error },
}

#[derive(Debug)]
pub struct DocumentLoader {
    source: String,
    mode: ParseMode,
    fallback_reason: Option<LoaderError>,
}

impl DocumentLoader {
    /// Reads `path`; `.js` and `.mjs` files are parsed as JavaScript.
    /// Invalid UTF-8 sequences are replaced with U+FFFD.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, LoaderError> {
        let path = path.as_ref();
        let bytes = fs::read(path).map_err(|source| LoaderError::SourceUnavailable {
            path: path.to_path_buf(),
            source,
        })?;
        let source = String::from_utf8(bytes).unwrap_or_else(|err| {
            tracing::warn!(
                path = %path.display(),
                valid_up_to = err.utf8_error().valid_up_to(),
                "source is not valid UTF-8; invalid bytes replaced"
            );
            String::from_utf8_lossy(err.as_bytes()).into_owned()
        });
        tracing::debug!(path = %path.display(), bytes = source.len(), "loaded source");
        Ok(DocumentLoader {
            source,
            mode: ParseMode::from_path(path),
            fallback_reason: None,
        })
    }

    /// QML source held in memory
    pub fn from_string<S: Into<String>>(source: S) -> Self {
        DocumentLoader {
            source: source.into(),
            mode: ParseMode::Qml,
            fallback_reason: None,
        }
    }

    /// Reads `path`, or falls back to the QML `fallback` when it cannot be read
    pub fn from_path_or_fallback<P: AsRef<Path>, S: Into<String>>(path: P, fallback: S) -> Self {
        match Self::from_path(path) {
            Ok(loader) => loader,
            Err(err) => {
                tracing::warn!("{err}; using the built-in snippet");
                DocumentLoader {
                    fallback_reason: Some(err),
                    ..Self::from_string(fallback)
                }
            }
        }
    }

    pub fn with_mode(mut self, mode: ParseMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn mode(&self) -> ParseMode {
        self.mode
    }

    /// Why the fallback snippet is in use, if it is
    pub fn fallback_reason(&self) -> Option<&LoaderError> {
        self.fallback_reason.as_ref()
    }

    pub fn parse(&self, options: ParseOptions) -> Result<Document, ParserError> {
        parse_document(&self.source, self.mode, options)
    }

    /// Raw tokens of the source
    pub fn tokenize(&self) -> Vec<(Token, Span)> {
        tokenize(&self.source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture(name: &str) -> PathBuf {
        Path::new(env!("CARGO_MANIFEST_DIR"))
            .join("tests/fixtures")
            .join(name)
    }

    #[test]
    fn test_from_string() {
        let loader = DocumentLoader::from_string("Item {}");
        assert_eq!(loader.source(), "Item {}");
        assert_eq!(loader.mode(), ParseMode::Qml);
        assert!(loader.fallback_reason().is_none());
        assert!(matches!(
            loader.parse(ParseOptions::default()),
            Ok(Document::Qml(_))
        ));
    }

    #[test]
    fn test_from_path_picks_mode() {
        let loader = DocumentLoader::from_path(fixture("utils.js")).unwrap();
        assert_eq!(loader.mode(), ParseMode::Script);
        assert!(matches!(
            loader.parse(ParseOptions::default()),
            Ok(Document::Script(_))
        ));

        let loader = DocumentLoader::from_path(fixture("button.qml")).unwrap();
        assert_eq!(loader.mode(), ParseMode::Qml);
    }

    #[test]
    fn test_missing_file_is_source_unavailable() {
        let err = DocumentLoader::from_path(fixture("missing.qml")).unwrap_err();
        let LoaderError::SourceUnavailable { path, source } = &err;
        assert!(path.ends_with("missing.qml"));
        assert_eq!(source.kind(), io::ErrorKind::NotFound);
        assert!(err.to_string().starts_with("cannot read "));
    }

    #[test]
    fn test_invalid_utf8_is_decoded_lossily() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("latin1.qml");
        fs::write(&path, b"Item { property string name: \"caf\xe9\" }").unwrap();

        let loader = DocumentLoader::from_path(&path).unwrap();
        assert!(loader.fallback_reason().is_none());
        assert_eq!(
            loader.source(),
            "Item { property string name: \"caf\u{fffd}\" }"
        );
        assert!(loader.parse(ParseOptions::default()).is_ok());

        let loader = DocumentLoader::from_path_or_fallback(&path, "Item {}");
        assert!(loader.fallback_reason().is_none());
        assert!(loader.source().starts_with("Item { property"));
    }

    #[test]
    fn test_fallback() {
        let loader = DocumentLoader::from_path_or_fallback(fixture("missing.js"), "Item {}");
        assert_eq!(loader.source(), "Item {}");
        assert_eq!(loader.mode(), ParseMode::Qml);
        assert!(loader.fallback_reason().is_some());
    }

    #[test]
    fn test_with_mode_and_tokenize() {
        let loader = DocumentLoader::from_string("x = 1").with_mode(ParseMode::Script);
        assert!(loader.parse(ParseOptions::default()).is_ok());
        assert_eq!(loader.tokenize().len(), 3);
    }
}
