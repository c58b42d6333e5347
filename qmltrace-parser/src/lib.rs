//! # qmltrace-parser
//!
//! A QML / JavaScript parser and a syntax tree tracer.
//!
//! Layout
//!
//! The crate is split the same way the pipeline runs:
//!
//! src/qml
//!   ├── lexing     logos tokens and the lexer used by the parser
//!   ├── parsing    recursive descent parser producing the AST
//!   ├── ast        node types, kinds, borrowed node views, spans and errors
//!   ├── trace      the traversal engine: AST in, ordered trace records out
//!   ├── formats    trace renderers (text, jsonl) and their registry
//!   ├── loader     reading sources from disk with a built-in fallback
//!   └── testing    assertion helpers shared by the test suites
//!
//! The contract between the stages is small: the parser produces a
//! [`Document`](qml::ast::Document) and the tracer walks it without mutating it.

pub mod qml;
