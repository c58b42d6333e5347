//! Command-line interface for qmltrace
//! Parses a QML or JavaScript file and prints its syntax tree in source token order.
//!
//! Usage:
//!   qmltrace `<path>`   - Trace the file at `<path>`
//!   qmltrace          - Trace the built-in snippet
//!
//! Diagnostics go to stderr (filtered by `QMLTRACE_LOG`), the trace to stdout.
//! Output tuning comes from `QMLTRACE_<SECTION>__<KEY>` variables, see qmltrace-config.
//! The exit code is always 0: an unreadable file falls back to the built-in snippet and
//! a syntax error produces an empty trace.

use std::io::{self, IsTerminal, Write};
use std::process::ExitCode;

use clap::{Arg, Command};
use qmltrace_config::{load_defaults, Loader, QmlTraceConfig, SourceMode};
use qmltrace_parser::qml::ast::NodeRef;
use qmltrace_parser::qml::formats::FormatRegistry;
use qmltrace_parser::qml::loader::DocumentLoader;
use qmltrace_parser::qml::parsing::{ParseMode, ParseOptions};
use qmltrace_parser::qml::trace::{Trace, TraceOptions};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let matches = Command::new("qmltrace")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Prints the syntax tree of a QML or JavaScript file in source token order")
        .arg(
            Arg::new("path")
                .help("Path to a .qml or .js file (default: a built-in QML snippet)")
                .index(1),
        )
        .get_matches();

    init_tracing();

    let Some(config) = load_config() else {
        return ExitCode::SUCCESS;
    };
    let path = matches.get_one::<String>("path");
    handle_trace_command(path.map(String::as_str), &config);
    ExitCode::SUCCESS
}

/// Initialize the stderr subscriber; `QMLTRACE_LOG` takes an `EnvFilter` directive
fn init_tracing() {
    let filter = EnvFilter::try_from_env("QMLTRACE_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .init();
}

/// Embedded defaults with `QMLTRACE_*` overrides; a bad override drops all of them
fn load_config() -> Option<QmlTraceConfig> {
    match Loader::new().with_environment().build() {
        Ok(config) => Some(config),
        Err(err) => {
            tracing::warn!("ignoring QMLTRACE_* overrides: {err}");
            match load_defaults() {
                Ok(config) => Some(config),
                Err(err) => {
                    tracing::error!("built-in configuration is invalid: {err}");
                    None
                }
            }
        }
    }
}

/// Handle the trace command
fn handle_trace_command(path: Option<&str>, config: &QmlTraceConfig) {
    let loader = match path {
        Some(path) => {
            DocumentLoader::from_path_or_fallback(path, config.source.default_snippet.as_str())
        }
        None => DocumentLoader::from_string(config.source.default_snippet.as_str()),
    };
    // The fallback snippet is QML whatever mode the configuration forces
    let loader = match config.source.mode {
        _ if loader.fallback_reason().is_some() => loader,
        SourceMode::Auto => loader,
        SourceMode::Qml => loader.with_mode(ParseMode::Qml),
        SourceMode::Script => loader.with_mode(ParseMode::Script),
    };

    let parse_options = ParseOptions {
        max_nesting: config.parser.max_nesting,
    };
    let document = match loader.parse(parse_options) {
        Ok(document) => Some(document),
        Err(err) => {
            tracing::warn!("{err}");
            None
        }
    };

    let trace = Trace::new(
        loader.source(),
        document.as_ref().map(NodeRef::from),
        TraceOptions {
            max_depth: config.trace.max_depth,
        },
    );

    let registry = FormatRegistry::with_indent_width(config.output.indent_width);
    let format = if registry.has(&config.output.format) {
        config.output.format.as_str()
    } else {
        tracing::warn!(
            "unknown output format '{}' (available: {}); using text",
            config.output.format,
            registry.list_formats().join(", ")
        );
        "text"
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let result = registry
        .write_to(trace, format, &mut out)
        .and_then(|()| out.flush().map_err(Into::into));
    if let Err(err) = result {
        if !err.is_broken_pipe() {
            tracing::error!("{err}");
        }
    }
}
