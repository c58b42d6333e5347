//! Parser core: lookahead buffer, token matching, error construction and the nesting guard
//!
//! The grammar itself lives in the sibling modules, each adding an `impl Parser` block:
//! `ui` for QML, `statements` and `expressions` for JavaScript.

use std::collections::VecDeque;

use super::ParseOptions;
use crate::qml::ast::range::{LineIndex, Span};
use crate::qml::ast::ParserError;
use crate::qml::lexing::{LexError, Lexeme, Lexer, Token};

pub(super) type ParseResult<T> = Result<T, ParserError>;

/// Nesting units one statement or object member level claims
///
/// A statement level costs several times the stack of an expression level in unoptimized
/// builds, so it uses up the ceiling faster.
pub(super) const STATEMENT_WEIGHT: usize = 4;

/// Nesting units one assignment-expression level claims
pub(super) const ASSIGNMENT_WEIGHT: usize = 2;

pub struct Parser<'s> {
    source: &'s str,
    lexer: Lexer<'s>,
    lookahead: VecDeque<Lexeme>,
    /// Lexer failure sitting right behind the buffered lookahead
    lex_error: Option<LexError>,
    options: ParseOptions,
    nesting: usize,
}

impl<'s> Parser<'s> {
    pub fn new(source: &'s str, options: ParseOptions) -> Self {
        Self {
            source,
            lexer: Lexer::new(source),
            lookahead: VecDeque::new(),
            lex_error: None,
            options,
            nesting: 0,
        }
    }

    fn fill(&mut self, n: usize) -> bool {
        while self.lookahead.len() <= n {
            if self.lex_error.is_some() {
                return false;
            }
            match self.lexer.next() {
                Some(Ok(lexeme)) => self.lookahead.push_back(lexeme),
                Some(Err(err)) => {
                    self.lex_error = Some(err);
                    return false;
                }
                None => return false,
            }
        }
        true
    }

    pub(super) fn peek_lexeme(&mut self, n: usize) -> Option<Lexeme> {
        if self.fill(n) {
            self.lookahead.get(n).copied()
        } else {
            None
        }
    }

    pub(super) fn peek_token(&mut self, n: usize) -> Option<Token> {
        self.peek_lexeme(n).map(|lexeme| lexeme.token)
    }

    pub(super) fn peek_text(&mut self, n: usize) -> Option<&'s str> {
        let source = self.source;
        self.peek_lexeme(n)
            .and_then(|lexeme| lexeme.span.text(source))
    }

    pub(super) fn at(&mut self, token: Token) -> bool {
        self.peek_token(0) == Some(token)
    }

    /// Whether lookahead `n` is the identifier `word` (QML's unreserved keywords)
    pub(super) fn at_word(&mut self, n: usize, word: &str) -> bool {
        self.peek_token(n) == Some(Token::Identifier) && self.peek_text(n) == Some(word)
    }

    pub(super) fn newline_before(&mut self) -> bool {
        self.peek_lexeme(0)
            .is_some_and(|lexeme| lexeme.newline_before)
    }

    pub(super) fn bump(&mut self) -> ParseResult<Span> {
        self.fill(0);
        match self.lookahead.pop_front() {
            Some(lexeme) => Ok(lexeme.span),
            None => Err(self.unexpected()),
        }
    }

    pub(super) fn expect(&mut self, token: Token) -> ParseResult<Span> {
        if self.at(token) {
            self.bump()
        } else {
            Err(self.expected(token))
        }
    }

    pub(super) fn eat(&mut self, token: Token) -> ParseResult<Option<Span>> {
        if self.at(token) {
            self.bump().map(Some)
        } else {
            Ok(None)
        }
    }

    /// Accepts a `;`, or inserts one before `}`, at end of input and after a line break
    pub(super) fn consume_semicolon(&mut self) -> ParseResult<Option<Span>> {
        match self.peek_lexeme(0) {
            Some(lexeme) if lexeme.token == Token::Semicolon => self.bump().map(Some),
            Some(lexeme) if lexeme.token == Token::RightBrace || lexeme.newline_before => {
                Ok(None)
            }
            None => Ok(None),
            Some(_) => Err(self.expected(Token::Semicolon)),
        }
    }

    /// Re-reads the `/` or `/=` at the front of the lookahead as a regular expression
    pub(super) fn bump_regexp(&mut self) -> ParseResult<Span> {
        let slash = match self.peek_lexeme(0) {
            Some(lexeme) => lexeme.span,
            None => return Err(self.unexpected()),
        };
        self.lookahead.clear();
        self.lex_error = None;
        self.lexer
            .rescan_regexp(slash)
            .map_err(|err| self.error_at(err.span().offset, err.to_string()))
    }

    /// Succeeds only when every token has been consumed
    pub(super) fn finish(&mut self) -> ParseResult<()> {
        if self.peek_lexeme(0).is_some() || self.lex_error.is_some() {
            return Err(self.unexpected());
        }
        Ok(())
    }

    /// Runs `parse` `weight` nesting units deeper
    pub(super) fn nested<T>(
        &mut self,
        weight: usize,
        parse: impl FnOnce(&mut Self) -> ParseResult<T>,
    ) -> ParseResult<T> {
        self.claim(weight)?;
        let result = parse(self);
        self.leave(weight);
        result
    }

    /// Claims one nesting unit; every successful call is matched by [`Parser::leave`]
    pub(super) fn enter(&mut self) -> ParseResult<()> {
        self.claim(1)
    }

    fn claim(&mut self, weight: usize) -> ParseResult<()> {
        if self.nesting + weight > self.options.max_nesting {
            let offset = self.current_offset();
            return Err(ParserError::NestingTooDeep {
                limit: self.options.max_nesting,
                position: LineIndex::new(self.source).position(offset),
                offset,
            });
        }
        self.nesting += weight;
        Ok(())
    }

    pub(super) fn leave(&mut self, levels: usize) {
        self.nesting = self.nesting.saturating_sub(levels);
    }

    fn current_offset(&mut self) -> usize {
        match self.peek_lexeme(0) {
            Some(lexeme) => lexeme.span.offset,
            None => match &self.lex_error {
                Some(err) => err.span().offset,
                None => self.source.len(),
            },
        }
    }

    pub(super) fn error_at(&self, offset: usize, message: impl Into<String>) -> ParserError {
        ParserError::Syntax {
            message: message.into(),
            position: LineIndex::new(self.source).position(offset),
            offset,
        }
    }

    pub(super) fn expected(&mut self, token: Token) -> ParserError {
        if self.peek_lexeme(0).is_none() {
            if let Some(err) = self.lex_error.clone() {
                return self.error_at(err.span().offset, err.to_string());
            }
        }
        let offset = self.current_offset();
        self.error_at(offset, format!("Expected token `{}'", token.spelling()))
    }

    pub(super) fn unexpected(&mut self) -> ParserError {
        match self.peek_lexeme(0) {
            Some(lexeme) => {
                let text = lexeme.span.text(self.source).unwrap_or_default();
                self.error_at(lexeme.span.offset, format!("Unexpected token `{text}'"))
            }
            None => match self.lex_error.clone() {
                Some(err) => self.error_at(err.span().offset, err.to_string()),
                None => self.error_at(self.source.len(), "Unexpected end of file"),
            },
        }
    }
}
