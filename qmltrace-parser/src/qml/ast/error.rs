//! Error types for parsing

use crate::qml::ast::range::Position;
use thiserror::Error;

/// Errors that stop the parser from building a tree
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParserError {
    /// The input does not match the grammar
    #[error("{position}: {message}")]
    Syntax {
        message: String,
        position: Position,
        offset: usize,
    },
    /// Statements, members or expressions nest deeper than the parser allows
    #[error("{position}: Maximum statement or expression depth exceeded (limit {limit})")]
    NestingTooDeep {
        limit: usize,
        position: Position,
        offset: usize,
    },
}

impl ParserError {
    pub fn position(&self) -> Position {
        match self {
            ParserError::Syntax { position, .. } | ParserError::NestingTooDeep { position, .. } => {
                *position
            }
        }
    }

    /// Byte offset of the token the parser stopped at
    pub fn offset(&self) -> usize {
        match self {
            ParserError::Syntax { offset, .. } | ParserError::NestingTooDeep { offset, .. } => {
                *offset
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_syntax_error_display() {
        let err = ParserError::Syntax {
            message: "Expected token `}'".to_string(),
            position: Position::new(2, 17),
            offset: 35,
        };
        assert_eq!(err.to_string(), "2:17: Expected token `}'");
        assert_eq!(err.offset(), 35);
    }

    #[test]
    fn test_nesting_error_display() {
        let err = ParserError::NestingTooDeep {
            limit: 8,
            position: Position::new(1, 9),
            offset: 8,
        };
        assert_eq!(
            err.to_string(),
            "1:9: Maximum statement or expression depth exceeded (limit 8)"
        );
        assert_eq!(err.position(), Position::new(1, 9));
    }
}
