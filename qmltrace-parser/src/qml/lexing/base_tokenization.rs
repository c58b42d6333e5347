//! Base tokenization
//!
//! Raw `(Token, Span)` pairs for tooling and tests. Characters the lexer rejects are
//! dropped, and `/` is always the division punctuator here.

use super::tokens::Token;
use crate::qml::ast::range::Span;
use logos::Logos;

pub fn tokenize(source: &str) -> Vec<(Token, Span)> {
    let mut lexer = Token::lexer(source);
    let mut tokens = Vec::new();

    while let Some(result) = lexer.next() {
        if let Ok(token) = result {
            tokens.push((token, Span::from(lexer.span())));
        }
    }

    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenizes_import() {
        let tokens = tokenize("import QtQuick 2.0");
        assert_eq!(
            tokens,
            vec![
                (Token::Identifier, Span::new(0, 6)),
                (Token::Identifier, Span::new(7, 7)),
                (Token::Number, Span::new(15, 3)),
            ]
        );
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(tokenize(""), vec![]);
        assert_eq!(tokenize("  // only a comment"), vec![]);
    }
}
