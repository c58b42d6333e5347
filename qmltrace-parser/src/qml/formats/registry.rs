//! Format registry for trace output
//!
//! Each format implements [`Formatter`] and is looked up by name in a [`FormatRegistry`].
//! Formatters pull records one at a time and write them straight to the sink, so a
//! trace is never materialized as a whole.

use std::collections::HashMap;
use std::io::{self, Write};

use thiserror::Error;

use crate::qml::trace::TraceRecord;

#[derive(Debug, Error)]
pub enum FormatError {
    #[error("Format '{0}' not found")]
    FormatNotFound(String),
    #[error("Serialization error: {0}")]
    SerializationError(String),
    /// The sink rejected a write; output stops at the first failure
    #[error("Write error: {0}")]
    Io(#[from] io::Error),
}

impl FormatError {
    /// The reader went away (`qmltrace file.qml | head`)
    pub fn is_broken_pipe(&self) -> bool {
        matches!(self, FormatError::Io(err) if err.kind() == io::ErrorKind::BrokenPipe)
    }
}

pub trait Formatter: Send + Sync {
    /// The name of this format (e.g. "text", "jsonl")
    fn name(&self) -> &str;

    /// Stream `records` to `out`
    fn write_to<'a>(
        &self,
        records: &mut dyn Iterator<Item = TraceRecord<'a>>,
        out: &mut dyn Write,
    ) -> Result<(), FormatError>;

    /// Render `records` into a string
    fn serialize<'a>(
        &self,
        records: &mut dyn Iterator<Item = TraceRecord<'a>>,
    ) -> Result<String, FormatError> {
        let mut buffer = Vec::new();
        self.write_to(records, &mut buffer)?;
        String::from_utf8(buffer).map_err(|err| FormatError::SerializationError(err.to_string()))
    }

    fn description(&self) -> &str {
        ""
    }
}

pub struct FormatRegistry {
    formatters: HashMap<String, Box<dyn Formatter>>,
}

impl FormatRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        FormatRegistry {
            formatters: HashMap::new(),
        }
    }

    /// Register a formatter, replacing any formatter of the same name
    pub fn register<F: Formatter + 'static>(&mut self, formatter: F) {
        self.formatters
            .insert(formatter.name().to_string(), Box::new(formatter));
    }

    pub fn get(&self, name: &str) -> Option<&dyn Formatter> {
        self.formatters.get(name).map(|f| f.as_ref())
    }

    pub fn has(&self, name: &str) -> bool {
        self.formatters.contains_key(name)
    }

    fn lookup(&self, format: &str) -> Result<&dyn Formatter, FormatError> {
        self.get(format)
            .ok_or_else(|| FormatError::FormatNotFound(format.to_string()))
    }

    pub fn serialize<'a>(
        &self,
        records: impl IntoIterator<Item = TraceRecord<'a>>,
        format: &str,
    ) -> Result<String, FormatError> {
        self.lookup(format)?
            .serialize(&mut records.into_iter())
    }

    pub fn write_to<'a>(
        &self,
        records: impl IntoIterator<Item = TraceRecord<'a>>,
        format: &str,
        out: &mut dyn Write,
    ) -> Result<(), FormatError> {
        self.lookup(format)?
            .write_to(&mut records.into_iter(), out)
    }

    /// List all available format names (sorted)
    pub fn list_formats(&self) -> Vec<String> {
        let mut names: Vec<_> = self.formatters.keys().cloned().collect();
        names.sort();
        names
    }

    /// Create a registry with the built-in formatters
    pub fn with_defaults() -> Self {
        Self::with_indent_width(super::TextFormatter::DEFAULT_INDENT_WIDTH)
    }

    /// Built-in formatters, with `indent_width` spaces per depth level for text
    pub fn with_indent_width(indent_width: usize) -> Self {
        let mut registry = Self::new();
        registry.register(super::TextFormatter::new(indent_width));
        registry.register(super::JsonlFormatter);
        registry
    }
}

impl Default for FormatRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
