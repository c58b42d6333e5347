//! The traversal engine

use std::iter::FusedIterator;

use super::record::TraceRecord;
use super::rules::{self, Step};
use crate::qml::ast::{Document, NodeRef};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TraceOptions {
    /// Nodes entered at this depth or deeper are reported as truncated
    pub max_depth: usize,
}

impl TraceOptions {
    pub const DEFAULT_MAX_DEPTH: usize = 1024;
}

impl Default for TraceOptions {
    fn default() -> Self {
        Self {
            max_depth: Self::DEFAULT_MAX_DEPTH,
        }
    }
}

/// Lazy, source-ordered walk over a tree
///
/// Holds nothing but a work stack and the current depth. Two traces over the same
/// tree yield the same records.
#[derive(Debug, Clone)]
pub struct Trace<'a> {
    source: &'a str,
    stack: Vec<Step<'a>>,
    /// Reused buffer for one node's production before it goes onto `stack` reversed
    scratch: Vec<Step<'a>>,
    depth: usize,
    max_depth: usize,
    truncated: usize,
}

impl<'a> Trace<'a> {
    /// `source` must be the text the tree was parsed from; Literal records slice it
    pub fn new(source: &'a str, root: Option<NodeRef<'a>>, options: TraceOptions) -> Self {
        Self {
            source,
            stack: root.map(Step::Node).into_iter().collect(),
            scratch: Vec::new(),
            depth: 0,
            max_depth: options.max_depth,
            truncated: 0,
        }
    }

    /// Nesting depth of the next record; 0 before the first and after the last
    pub fn depth(&self) -> usize {
        self.depth
    }

    fn enter(&mut self, node: NodeRef<'a>) -> TraceRecord<'a> {
        let kind = node.kind();
        let depth = self.depth;
        if depth >= self.max_depth {
            if self.truncated == 0 {
                tracing::warn!(
                    kind = kind.name(),
                    max_depth = self.max_depth,
                    "syntax tree deeper than the trace depth limit; subtrees skipped"
                );
            }
            self.truncated += 1;
            return TraceRecord::Truncated { kind, depth };
        }

        self.stack.push(Step::Exit(kind));
        rules::expand(node, &mut self.scratch);
        self.stack.extend(self.scratch.drain(..).rev());
        self.depth += 1;
        TraceRecord::Enter { kind, depth }
    }
}

impl<'a> Iterator for Trace<'a> {
    type Item = TraceRecord<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let record = match self.stack.pop()? {
            Step::Node(node) => self.enter(node),
            Step::Token(span) => TraceRecord::Literal {
                text: span.text(self.source).unwrap_or_default(),
                offset: span.offset,
                depth: self.depth,
            },
            Step::Separator(text) => TraceRecord::Separator {
                text,
                depth: self.depth,
            },
            Step::Exit(kind) => {
                self.depth = self.depth.saturating_sub(1);
                TraceRecord::Exit {
                    kind,
                    depth: self.depth,
                }
            }
        };
        if self.stack.is_empty() && self.truncated > 0 {
            tracing::debug!(truncated = self.truncated, "trace finished with truncated subtrees");
        }
        Some(record)
    }
}

impl FusedIterator for Trace<'_> {}

/// Traces `document` with the default options; `None` (a failed parse) yields nothing
pub fn trace<'a>(source: &'a str, document: Option<&'a Document>) -> Trace<'a> {
    Trace::new(source, document.map(NodeRef::from), TraceOptions::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::qml::ast::{NodeKind, Span};
    use crate::qml::parsing::{parse_document, ParseMode, ParseOptions};

    fn script(source: &str) -> Document {
        parse_document(source, ParseMode::Script, ParseOptions::default()).unwrap()
    }

    fn assert_balanced(records: &[TraceRecord]) {
        let mut open = Vec::new();
        for record in records {
            match *record {
                TraceRecord::Enter { kind, depth } => {
                    assert_eq!(depth, open.len());
                    open.push(kind);
                }
                TraceRecord::Exit { kind, depth } => {
                    assert_eq!(open.pop(), Some(kind));
                    assert_eq!(depth, open.len());
                }
                other => assert_eq!(other.depth(), open.len()),
            }
        }
        assert!(open.is_empty());
    }

    #[test]
    fn test_absent_root_yields_nothing() {
        let mut trace = trace("", None);
        assert_eq!(trace.next(), None);
        assert_eq!(trace.next(), None);
    }

    #[test]
    fn test_leaf_node() {
        let source = "root";
        let records: Vec<_> = Trace::new(
            source,
            Some(NodeRef::IdentifierExpression(Span::new(0, 4))),
            TraceOptions::default(),
        )
        .collect();
        assert_eq!(
            records,
            vec![
                TraceRecord::Enter {
                    kind: NodeKind::IdentifierExpression,
                    depth: 0
                },
                TraceRecord::Literal {
                    text: "root",
                    offset: 0,
                    depth: 1
                },
                TraceRecord::Exit {
                    kind: NodeKind::IdentifierExpression,
                    depth: 0
                },
            ]
        );
    }

    #[test]
    fn test_childless_node_still_pairs() {
        let document = script("");
        let records: Vec<_> = trace("", Some(&document)).collect();
        assert_eq!(
            records,
            vec![
                TraceRecord::Enter {
                    kind: NodeKind::Program,
                    depth: 0
                },
                TraceRecord::Exit {
                    kind: NodeKind::Program,
                    depth: 0
                },
            ]
        );
    }

    #[test]
    fn test_depth_tracks_position() {
        let source = "x;";
        let document = script(source);
        let mut trace = trace(source, Some(&document));
        assert_eq!(trace.depth(), 0);
        trace.next();
        assert_eq!(trace.depth(), 1);
        let rest: Vec<_> = trace.by_ref().collect();
        assert!(!rest.is_empty());
        assert_eq!(trace.depth(), 0);
    }

    #[test]
    fn test_retrace_is_identical() {
        let source = "for (var i = 0; i < 3; i++) { a[i] = [1, , 2]; }";
        let document = script(source);
        let first: Vec<_> = trace(source, Some(&document)).collect();
        let second: Vec<_> = trace(source, Some(&document)).collect();
        assert_eq!(first, second);
        assert_balanced(&first);
    }

    #[test]
    fn test_early_termination() {
        let source = "a(); b(); c();";
        let document = script(source);
        let taken: Vec<_> = trace(source, Some(&document)).take(4).collect();
        assert_eq!(taken.len(), 4);
        assert_eq!(taken[0].kind(), Some(NodeKind::Program));
    }

    fn call_with_arguments(count: usize) -> String {
        format!("f({});", vec!["a"; count].join(", "))
    }

    fn assert_truncated_within(records: &[TraceRecord], max_depth: usize) {
        assert!(records
            .iter()
            .any(|r| matches!(r, TraceRecord::Truncated { .. })));
        assert!(records.iter().all(|r| r.depth() <= max_depth));
        assert_balanced(records);
    }

    #[test]
    fn test_truncates_one_past_the_ceiling() {
        let max_depth = TraceOptions::DEFAULT_MAX_DEPTH;
        let source = call_with_arguments(max_depth + 1);
        let document = script(&source);
        let records: Vec<_> = Trace::new(
            &source,
            Some(NodeRef::from(&document)),
            TraceOptions::default(),
        )
        .collect();
        assert_truncated_within(&records, max_depth);
    }

    #[test]
    fn test_truncates_ten_times_the_ceiling() {
        let max_depth = TraceOptions::DEFAULT_MAX_DEPTH;
        let source = call_with_arguments(10 * max_depth);
        let document = script(&source);
        let records: Vec<_> = trace(&source, Some(&document)).collect();
        assert_truncated_within(&records, max_depth);
    }

    #[test]
    fn test_small_ceiling_on_nested_expressions() {
        let source = format!("{}x{};", "(".repeat(40), ")".repeat(40));
        let document = script(&source);
        let options = TraceOptions { max_depth: 4 };
        let records: Vec<_> =
            Trace::new(&source, Some(NodeRef::from(&document)), options).collect();
        assert_eq!(
            records.last(),
            Some(&TraceRecord::Exit {
                kind: NodeKind::Program,
                depth: 0
            })
        );
        assert!(records.contains(&TraceRecord::Truncated {
            kind: NodeKind::NestedExpression,
            depth: 4
        }));
        assert_truncated_within(&records, 4);
    }

    #[test]
    fn test_zero_ceiling_truncates_the_root() {
        let document = script("x");
        let records: Vec<_> =
            Trace::new("x", Some(NodeRef::from(&document)), TraceOptions { max_depth: 0 })
                .collect();
        assert_eq!(
            records,
            vec![TraceRecord::Truncated {
                kind: NodeKind::Program,
                depth: 0
            }]
        );
    }
}
