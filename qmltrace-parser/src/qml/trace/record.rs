//! Records produced by the trace engine

use serde::Serialize;

use crate::qml::ast::NodeKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "record", rename_all = "snake_case")]
pub enum TraceRecord<'a> {
    Enter {
        kind: NodeKind,
        depth: usize,
    },
    Exit {
        kind: NodeKind,
        depth: usize,
    },
    /// A source token, exactly as written
    Literal {
        text: &'a str,
        offset: usize,
        depth: usize,
    },
    /// Punctuation that has no token of its own in the tree (the dots of `anchors.fill`)
    Separator {
        text: &'static str,
        depth: usize,
    },
    /// Stands in for a node and its subtree that lie beyond the depth limit
    Truncated {
        kind: NodeKind,
        depth: usize,
    },
}

impl TraceRecord<'_> {
    pub fn depth(&self) -> usize {
        match *self {
            TraceRecord::Enter { depth, .. }
            | TraceRecord::Exit { depth, .. }
            | TraceRecord::Literal { depth, .. }
            | TraceRecord::Separator { depth, .. }
            | TraceRecord::Truncated { depth, .. } => depth,
        }
    }

    /// The node kind for Enter, Exit and Truncated records
    pub fn kind(&self) -> Option<NodeKind> {
        match *self {
            TraceRecord::Enter { kind, .. }
            | TraceRecord::Exit { kind, .. }
            | TraceRecord::Truncated { kind, .. } => Some(kind),
            TraceRecord::Literal { .. } | TraceRecord::Separator { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_tagged() {
        let record = TraceRecord::Literal {
            text: "\"red\"",
            offset: 12,
            depth: 3,
        };
        assert_eq!(
            serde_json::to_string(&record).unwrap(),
            r#"{"record":"literal","text":"\"red\"","offset":12,"depth":3}"#
        );

        let record = TraceRecord::Enter {
            kind: NodeKind::UiImport,
            depth: 1,
        };
        assert_eq!(
            serde_json::to_string(&record).unwrap(),
            r#"{"record":"enter","kind":"UiImport","depth":1}"#
        );
    }

    #[test]
    fn test_accessors() {
        let record = TraceRecord::Truncated {
            kind: NodeKind::Block,
            depth: 7,
        };
        assert_eq!(record.depth(), 7);
        assert_eq!(record.kind(), Some(NodeKind::Block));
        let separator = TraceRecord::Separator { text: ".", depth: 2 };
        assert_eq!(separator.kind(), None);
    }
}
