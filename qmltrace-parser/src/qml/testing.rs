//! Testing utilities for trace assertions
//!
//!     Shared by the unit tests, the integration suites and the CLI tests. Every helper
//!     checks one of the properties a trace must have whatever the input:
//!
//!         - Balance: every Enter is closed by an Exit of the same kind, and every record
//!           sits at the depth of the nodes currently open.
//!         - Source order: Literal records appear in increasing source offset.
//!
//!     Together they mean a trace can be read back as the tree it came from, with the
//!     original token sequence nested under it.
//!
//! Usage
//!
//!     ```rust,ignore
//!     use qmltrace_parser::qml::testing::*;
//!
//!     let text = trace_text("Item { width: 2 * 3 }", ParseMode::Qml).unwrap();
//!     ```

use crate::qml::ast::{NodeKind, NodeRef, ParserError};
use crate::qml::parsing::{parse_document, ParseMode, ParseOptions};
use crate::qml::trace::{Trace, TraceOptions, TraceRecord};

pub use crate::qml::formats::render_text;

/// Panics unless Enter/Exit records nest properly and depths match the nesting
pub fn assert_balanced(records: &[TraceRecord<'_>]) {
    let mut open: Vec<NodeKind> = Vec::new();
    for (index, record) in records.iter().enumerate() {
        match *record {
            TraceRecord::Enter { kind, depth } => {
                assert_eq!(
                    depth,
                    open.len(),
                    "record {index}: Enter {kind} at depth {depth}, expected {}",
                    open.len()
                );
                open.push(kind);
            }
            TraceRecord::Exit { kind, depth } => {
                let opened = open.pop();
                assert_eq!(
                    opened,
                    Some(kind),
                    "record {index}: Exit {kind} does not close {opened:?}"
                );
                assert_eq!(depth, open.len(), "record {index}: Exit {kind} at depth {depth}");
            }
            other => assert_eq!(
                other.depth(),
                open.len(),
                "record {index}: {other:?} at the wrong depth"
            ),
        }
    }
    assert!(open.is_empty(), "unclosed nodes at end of trace: {open:?}");
}

/// Panics unless Literal records appear in strictly increasing source offset
pub fn assert_source_order(records: &[TraceRecord<'_>]) {
    let mut last: Option<usize> = None;
    for record in records {
        if let TraceRecord::Literal { text, offset, .. } = *record {
            if let Some(previous) = last {
                assert!(
                    offset > previous,
                    "literal {text:?} at {offset} reported after offset {previous}"
                );
            }
            last = Some(offset);
        }
    }
}

/// The text of every Literal record, in trace order
pub fn literal_texts<'a>(records: &[TraceRecord<'a>]) -> Vec<&'a str> {
    records
        .iter()
        .filter_map(|record| match *record {
            TraceRecord::Literal { text, .. } => Some(text),
            _ => None,
        })
        .collect()
}

/// Parses `source` and renders its full trace as text
pub fn trace_text(source: &str, mode: ParseMode) -> Result<String, ParserError> {
    let document = parse_document(source, mode, ParseOptions::default())?;
    let trace = Trace::new(
        source,
        Some(NodeRef::from(&document)),
        TraceOptions::default(),
    );
    Ok(render_text(trace))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::qml::ast::Document;
    use crate::qml::trace::trace;

    #[test]
    fn test_helpers_on_a_real_trace() {
        let source = "var a = [1, , 2], b = a.length;";
        let document: Document =
            parse_document(source, ParseMode::Script, ParseOptions::default()).unwrap();
        let records: Vec<_> = trace(source, Some(&document)).collect();
        assert_balanced(&records);
        assert_source_order(&records);
        assert_eq!(
            literal_texts(&records),
            vec!["var", "a", "=", "[", "1", ",", ",", "2", "]", ",", "b", "=", "a", ".", "length", ";"]
        );
    }

    #[test]
    #[should_panic(expected = "unclosed nodes")]
    fn test_assert_balanced_rejects_open_nodes() {
        assert_balanced(&[TraceRecord::Enter {
            kind: NodeKind::Block,
            depth: 0,
        }]);
    }

    #[test]
    #[should_panic(expected = "reported after offset")]
    fn test_assert_source_order_rejects_reordering() {
        assert_source_order(&[
            TraceRecord::Literal {
                text: "b",
                offset: 2,
                depth: 0,
            },
            TraceRecord::Literal {
                text: "a",
                offset: 0,
                depth: 0,
            },
        ]);
    }

    #[test]
    fn test_trace_text() {
        assert_eq!(
            trace_text(";", ParseMode::Script).unwrap(),
            "+ Program\n  + StatementList\n    + EmptyStatement\n      \";\"\n    - EmptyStatement\n  - StatementList\n- Program\n"
        );
        assert!(trace_text("Item {", ParseMode::Qml).is_err());
    }
}
