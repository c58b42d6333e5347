//! Configuration loader for qmltrace.
//!
//! `defaults/qmltrace.default.toml` is embedded into the binary so that the
//! documented defaults and runtime behavior stay in sync. Overrides are layered
//! on top through [`Loader`]: `QMLTRACE_*` environment variables for the CLI,
//! explicit key/value overrides for tests and embedding applications.

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, Environment, File, FileFormat, ValueKind};
use serde::Deserialize;

const DEFAULT_TOML: &str = include_str!("../defaults/qmltrace.default.toml");

/// Top-level configuration consumed by qmltrace.
#[derive(Debug, Clone, Deserialize)]
pub struct QmlTraceConfig {
    pub source: SourceConfig,
    pub parser: ParserConfig,
    pub trace: TraceConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SourceConfig {
    pub default_snippet: String,
    pub mode: SourceMode,
}

/// Grammar used for the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SourceMode {
    /// Decide from the file extension
    Auto,
    Qml,
    Script,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ParserConfig {
    pub max_nesting: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TraceConfig {
    pub max_depth: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    pub format: String,
    pub indent_width: usize,
}

/// Helper for layering overrides over the built-in defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start a loader seeded with the embedded defaults.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer `QMLTRACE_<SECTION>__<KEY>` environment variables.
    pub fn with_environment(mut self) -> Self {
        let source = Environment::with_prefix("QMLTRACE")
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Apply a single key/value override.
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<QmlTraceConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<QmlTraceConfig, ConfigError> {
    Loader::new().build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loads_default_config() {
        let config = load_defaults().expect("defaults to deserialize");
        assert_eq!(
            config.source.default_snippet,
            "import QtQuick 2.0\nItem { id: root }"
        );
        assert_eq!(config.source.mode, SourceMode::Auto);
        assert_eq!(config.parser.max_nesting, 256);
        assert_eq!(config.trace.max_depth, 1024);
        assert_eq!(config.output.format, "text");
        assert_eq!(config.output.indent_width, 2);
    }

    #[test]
    fn supports_overrides() {
        let config = Loader::new()
            .set_override("output.format", "jsonl")
            .expect("override to apply")
            .set_override("source.mode", "script")
            .expect("override to apply")
            .set_override("trace.max_depth", 8_i64)
            .expect("override to apply")
            .build()
            .expect("config to build");
        assert_eq!(config.output.format, "jsonl");
        assert_eq!(config.source.mode, SourceMode::Script);
        assert_eq!(config.trace.max_depth, 8);
    }

    #[test]
    fn rejects_unknown_mode() {
        let result = Loader::new()
            .set_override("source.mode", "python")
            .expect("override to apply")
            .build();
        assert!(result.is_err());
    }
}
