//! The lexer the parser pulls from
//!
//! Wraps the logos lexer over [`Token`] and adds what the raw token stream does not
//! carry: absolute spans, whether a line break preceded each token, and rescanning
//! from a `/` as a regular expression literal.

use super::tokens::Token;
use crate::qml::ast::range::Span;
use logos::Logos;
use thiserror::Error;

/// Characters that end a line for automatic semicolon insertion
const LINE_TERMINATORS: [char; 4] = ['\n', '\r', '\u{2028}', '\u{2029}'];

/// One token with its location
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lexeme {
    pub token: Token,
    pub span: Span,
    /// A line terminator appears between the previous token and this one
    pub newline_before: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
    #[error("Unexpected character")]
    UnexpectedCharacter { span: Span },
    #[error("Unterminated regular expression literal")]
    UnterminatedRegExp { span: Span },
}

impl LexError {
    pub fn span(&self) -> Span {
        match self {
            LexError::UnexpectedCharacter { span } | LexError::UnterminatedRegExp { span } => {
                *span
            }
        }
    }
}

pub struct Lexer<'s> {
    source: &'s str,
    inner: logos::Lexer<'s, Token>,
    /// Offset of `inner`'s input within `source`
    base: usize,
    prev_end: usize,
}

impl<'s> Lexer<'s> {
    pub fn new(source: &'s str) -> Self {
        Self {
            source,
            inner: Token::lexer(source),
            base: 0,
            prev_end: 0,
        }
    }

    pub fn source(&self) -> &'s str {
        self.source
    }

    /// Re-reads the input starting at `slash` (a `/` or `/=` the parser found in operand
    /// position) as a regular expression literal, flags included.
    ///
    /// Lexing resumes after the literal; tokens handed out past `slash` must be discarded.
    pub fn rescan_regexp(&mut self, slash: Span) -> Result<Span, LexError> {
        let bytes = self.source.as_bytes();
        let mut pos = slash.offset + 1;
        let mut in_class = false;
        loop {
            match bytes.get(pos) {
                None | Some(b'\n') | Some(b'\r') => {
                    return Err(LexError::UnterminatedRegExp {
                        span: Span::new(slash.offset, pos - slash.offset),
                    });
                }
                Some(b'\\') => {
                    pos += 1;
                    if matches!(bytes.get(pos), None | Some(b'\n') | Some(b'\r')) {
                        continue;
                    }
                    pos += utf8_width(bytes[pos]);
                    continue;
                }
                Some(b'[') => in_class = true,
                Some(b']') => in_class = false,
                Some(b'/') if !in_class => {
                    pos += 1;
                    break;
                }
                Some(&byte) => {
                    pos += utf8_width(byte);
                    continue;
                }
            }
            pos += 1;
        }
        while let Some(byte) = bytes.get(pos) {
            if byte.is_ascii_alphanumeric() || *byte == b'_' || *byte == b'$' {
                pos += 1;
            } else {
                break;
            }
        }

        self.base = pos;
        self.inner = Token::lexer(&self.source[pos..]);
        self.prev_end = pos;
        Ok(Span::new(slash.offset, pos - slash.offset))
    }
}

fn utf8_width(first: u8) -> usize {
    match first {
        0x00..=0x7f => 1,
        0xc0..=0xdf => 2,
        0xe0..=0xef => 3,
        _ => 4,
    }
}

impl Iterator for Lexer<'_> {
    type Item = Result<Lexeme, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        let result = self.inner.next()?;
        let range = self.inner.span();
        let span = Span::new(self.base + range.start, range.len());
        let newline_before = self.source[self.prev_end..span.offset].contains(LINE_TERMINATORS);
        self.prev_end = span.end();
        Some(match result {
            Ok(token) => Ok(Lexeme {
                token,
                span,
                newline_before,
            }),
            Err(()) => Err(LexError::UnexpectedCharacter { span }),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spans_are_absolute() {
        let lexemes: Vec<Lexeme> = Lexer::new("id: root").filter_map(Result::ok).collect();
        assert_eq!(lexemes.len(), 3);
        assert_eq!(lexemes[2].span, Span::new(4, 4));
        assert_eq!(lexemes[2].token, Token::Identifier);
    }

    #[test]
    fn test_newline_before() {
        let lexemes: Vec<Lexeme> = Lexer::new("a\nb /* x\n */ c d")
            .filter_map(Result::ok)
            .collect();
        let flags: Vec<bool> = lexemes.iter().map(|l| l.newline_before).collect();
        assert_eq!(flags, vec![false, true, true, false]);
    }

    #[test]
    fn test_unicode_line_terminators() {
        let lexemes: Vec<Lexeme> = Lexer::new("a\u{2028}b\u{2029}c\rd e")
            .filter_map(Result::ok)
            .collect();
        let flags: Vec<bool> = lexemes.iter().map(|l| l.newline_before).collect();
        assert_eq!(flags, vec![false, true, true, true, false]);
    }

    #[test]
    fn test_rescan_regexp() {
        let source = "x = /[/]a\\/b/gi; y";
        let mut lexer = Lexer::new(source);
        let slash = lexer
            .by_ref()
            .filter_map(Result::ok)
            .find(|l| l.token == Token::Slash)
            .unwrap();
        let span = lexer.rescan_regexp(slash.span).unwrap();
        assert_eq!(span.text(source), Some("/[/]a\\/b/gi"));

        let rest: Vec<Token> = lexer.filter_map(Result::ok).map(|l| l.token).collect();
        assert_eq!(rest, vec![Token::Semicolon, Token::Identifier]);
    }

    #[test]
    fn test_rescan_unterminated_regexp() {
        let mut lexer = Lexer::new("/abc\n");
        let slash = lexer.next().unwrap().unwrap();
        assert!(matches!(
            lexer.rescan_regexp(slash.span),
            Err(LexError::UnterminatedRegExp { .. })
        ));
    }

    #[test]
    fn test_unexpected_character() {
        let mut lexer = Lexer::new("a # b");
        assert!(lexer.next().unwrap().is_ok());
        assert_eq!(
            lexer.next().unwrap(),
            Err(LexError::UnexpectedCharacter {
                span: Span::new(2, 1)
            })
        );
    }
}
