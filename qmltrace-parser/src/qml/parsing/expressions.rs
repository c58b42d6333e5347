//! JavaScript expressions
//!
//! `no_in` threads the "no `in` operator" restriction of `for` heads down to the
//! binary operator level; brackets and parentheses lift it again.

use super::parser::{ParseResult, Parser, ASSIGNMENT_WEIGHT};
use crate::qml::ast::*;
use crate::qml::lexing::Token;

/// Binding power of binary operators, `None` for anything else
fn binary_precedence(token: Token, no_in: bool) -> Option<u8> {
    let precedence = match token {
        Token::QuestionQuestion => 1,
        Token::OrOr => 2,
        Token::AndAnd => 3,
        Token::Or => 4,
        Token::Xor => 5,
        Token::And => 6,
        Token::EqEq | Token::NotEq | Token::EqEqEq | Token::NotEqEq => 7,
        Token::Lt | Token::Gt | Token::Le | Token::Ge | Token::InstanceOf => 8,
        Token::In if !no_in => 8,
        Token::LtLt | Token::GtGt | Token::GtGtGt => 9,
        Token::Plus | Token::Minus => 10,
        Token::Star | Token::Slash | Token::Percent => 11,
        Token::StarStar => 12,
        _ => return None,
    };
    Some(precedence)
}

impl<'s> Parser<'s> {
    /// Comma-separated expressions
    pub(super) fn parse_expression(&mut self, no_in: bool) -> ParseResult<Expression> {
        let mut left = self.parse_assignment(no_in)?;
        let mut chain = 0;
        while let Some(comma_token) = self.eat(Token::Comma)? {
            let right = self.parse_assignment(no_in)?;
            self.enter()?;
            chain += 1;
            left = Expression::Comma(Box::new(CommaExpression {
                left,
                comma_token,
                right,
            }));
        }
        self.leave(chain);
        Ok(left)
    }

    pub(super) fn parse_assignment(&mut self, no_in: bool) -> ParseResult<Expression> {
        self.nested(ASSIGNMENT_WEIGHT, |p| {
            let left = p.parse_conditional(no_in)?;
            match p.peek_token(0) {
                Some(token) if token.is_assignment_operator() => {
                    if !left.is_left_hand_side() {
                        let offset = p.peek_lexeme(0).map_or(0, |l| l.span.offset);
                        return Err(p.error_at(offset, "Invalid left-hand side in assignment"));
                    }
                    let operator_token = p.bump()?;
                    let right = p.parse_assignment(no_in)?;
                    Ok(Expression::Binary(Box::new(BinaryExpression {
                        left,
                        operator_token,
                        right,
                    })))
                }
                _ => Ok(left),
            }
        })
    }

    fn parse_conditional(&mut self, no_in: bool) -> ParseResult<Expression> {
        let expression = self.parse_binary(1, no_in)?;
        let Some(question_token) = self.eat(Token::Question)? else {
            return Ok(expression);
        };
        let ok = self.parse_assignment(false)?;
        let colon_token = self.expect(Token::Colon)?;
        let ko = self.parse_assignment(no_in)?;
        Ok(Expression::Conditional(Box::new(ConditionalExpression {
            expression,
            question_token,
            ok,
            colon_token,
            ko,
        })))
    }

    /// Precedence climbing over [`binary_precedence`]; `**` is right-associative
    fn parse_binary(&mut self, min_precedence: u8, no_in: bool) -> ParseResult<Expression> {
        let mut left = self.parse_unary()?;
        let mut chain = 0;
        while let Some(token) = self.peek_token(0) {
            let Some(precedence) = binary_precedence(token, no_in) else {
                break;
            };
            if precedence < min_precedence {
                break;
            }
            let operator_token = self.bump()?;
            let next_min = if token == Token::StarStar {
                precedence
            } else {
                precedence + 1
            };
            let right = self.parse_binary(next_min, no_in)?;
            self.enter()?;
            chain += 1;
            left = Expression::Binary(Box::new(BinaryExpression {
                left,
                operator_token,
                right,
            }));
        }
        self.leave(chain);
        Ok(left)
    }

    fn parse_unary(&mut self) -> ParseResult<Expression> {
        self.nested(1, |p| {
            let variant: fn(Box<UnaryExpression>) -> Expression = match p.peek_token(0) {
                Some(Token::Delete) => Expression::Delete,
                Some(Token::Void) => Expression::Void,
                Some(Token::TypeOf) => Expression::TypeOf,
                Some(Token::PlusPlus) => Expression::PreIncrement,
                Some(Token::MinusMinus) => Expression::PreDecrement,
                Some(Token::Plus) => Expression::UnaryPlus,
                Some(Token::Minus) => Expression::UnaryMinus,
                Some(Token::Tilde) => Expression::Tilde,
                Some(Token::Not) => Expression::Not,
                _ => return p.parse_postfix(),
            };
            let operator_token = p.bump()?;
            let expression = p.parse_unary()?;
            Ok(variant(Box::new(UnaryExpression {
                operator_token,
                expression,
            })))
        })
    }

    /// `base++` / `base--`; the operator must be on the same line as its operand
    fn parse_postfix(&mut self) -> ParseResult<Expression> {
        let base = self.parse_left_hand_side()?;
        let variant: fn(Box<PostfixExpression>) -> Expression = match self.peek_lexeme(0) {
            Some(lexeme) if lexeme.newline_before => return Ok(base),
            Some(lexeme) if lexeme.token == Token::PlusPlus => Expression::PostIncrement,
            Some(lexeme) if lexeme.token == Token::MinusMinus => Expression::PostDecrement,
            _ => return Ok(base),
        };
        let operator_token = self.bump()?;
        Ok(variant(Box::new(PostfixExpression {
            base,
            operator_token,
        })))
    }

    fn parse_left_hand_side(&mut self) -> ParseResult<Expression> {
        let base = if self.at(Token::New) {
            self.parse_new()?
        } else {
            self.parse_primary()?
        };
        self.parse_member_suffixes(base, true)
    }

    /// `new Base(args)` or `new Base`
    fn parse_new(&mut self) -> ParseResult<Expression> {
        self.nested(1, |p| {
            let new_token = p.bump()?;
            let base = if p.at(Token::New) {
                p.parse_new()?
            } else {
                p.parse_primary()?
            };
            let base = p.parse_member_suffixes(base, false)?;
            if !p.at(Token::LeftParen) {
                return Ok(Expression::New(Box::new(NewExpression {
                    new_token,
                    expression: base,
                })));
            }
            let (lparen_token, arguments, rparen_token) = p.parse_arguments()?;
            Ok(Expression::NewMember(Box::new(NewMemberExpression {
                new_token,
                base,
                lparen_token,
                arguments,
                rparen_token,
            })))
        })
    }

    /// Field access, indexing and, when `calls` is set, call suffixes
    fn parse_member_suffixes(
        &mut self,
        mut base: Expression,
        calls: bool,
    ) -> ParseResult<Expression> {
        let mut chain = 0;
        loop {
            base = match self.peek_token(0) {
                Some(Token::Dot) => {
                    let dot_token = self.bump()?;
                    let identifier_token = match self.peek_token(0) {
                        Some(token) if token.is_identifier_name() => self.bump()?,
                        _ => return Err(self.expected(Token::Identifier)),
                    };
                    Expression::FieldMember(Box::new(FieldMemberExpression {
                        base,
                        dot_token,
                        identifier_token,
                    }))
                }
                Some(Token::LeftBracket) => {
                    let lbracket_token = self.bump()?;
                    let expression = self.parse_expression(false)?;
                    let rbracket_token = self.expect(Token::RightBracket)?;
                    Expression::ArrayMember(Box::new(ArrayMemberExpression {
                        base,
                        lbracket_token,
                        expression,
                        rbracket_token,
                    }))
                }
                Some(Token::LeftParen) if calls => {
                    let (lparen_token, arguments, rparen_token) = self.parse_arguments()?;
                    Expression::Call(Box::new(CallExpression {
                        base,
                        lparen_token,
                        arguments,
                        rparen_token,
                    }))
                }
                _ => break,
            };
            self.enter()?;
            chain += 1;
        }
        self.leave(chain);
        Ok(base)
    }

    fn parse_arguments(&mut self) -> ParseResult<(Span, Option<ArgumentList>, Span)> {
        let lparen_token = self.expect(Token::LeftParen)?;
        let mut items = Vec::new();
        while !self.at(Token::RightParen) {
            let expression = self.parse_assignment(false)?;
            let comma_token = self.eat(Token::Comma)?;
            let last = comma_token.is_none();
            items.push(Argument {
                expression,
                comma_token,
            });
            if last {
                break;
            }
        }
        let rparen_token = self.expect(Token::RightParen)?;
        Ok((
            lparen_token,
            (!items.is_empty()).then_some(ArgumentList { items }),
            rparen_token,
        ))
    }

    fn parse_primary(&mut self) -> ParseResult<Expression> {
        let Some(token) = self.peek_token(0) else {
            return Err(self.unexpected());
        };
        let expression = match token {
            Token::This => Expression::This(self.bump()?),
            Token::Identifier => Expression::Identifier(self.bump()?),
            Token::Null => Expression::Null(self.bump()?),
            Token::True => Expression::True(self.bump()?),
            Token::False => Expression::False(self.bump()?),
            Token::Number => Expression::Numeric(self.bump()?),
            Token::String => Expression::String(self.bump()?),
            Token::Slash | Token::SlashEq => Expression::RegExp(self.bump_regexp()?),
            Token::LeftBracket => Expression::Array(Box::new(self.parse_array_literal()?)),
            Token::LeftBrace => Expression::Object(Box::new(self.parse_object_literal()?)),
            Token::LeftParen => {
                let lparen_token = self.bump()?;
                let expression = self.parse_expression(false)?;
                let rparen_token = self.expect(Token::RightParen)?;
                Expression::Nested(Box::new(NestedExpression {
                    lparen_token,
                    expression,
                    rparen_token,
                }))
            }
            Token::Function => Expression::Function(Box::new(self.parse_function(false)?)),
            _ => return Err(self.unexpected()),
        };
        Ok(expression)
    }

    /// `[a, , b, ,]`: holes before an element belong to that element, holes after the
    /// last element go to the pattern itself
    fn parse_array_literal(&mut self) -> ParseResult<ArrayPattern> {
        let lbracket_token = self.bump()?;
        let mut items: Vec<ArrayElement> = Vec::new();
        let mut separator = None;
        let mut holes = Vec::new();
        loop {
            match self.peek_token(0) {
                Some(Token::RightBracket) => break,
                Some(Token::Comma) => {
                    let comma_token = self.bump()?;
                    if !items.is_empty() && separator.is_none() {
                        separator = Some(comma_token);
                    } else {
                        holes.push(comma_token);
                    }
                }
                _ => {
                    let expression = self.parse_assignment(false)?;
                    items.push(ArrayElement {
                        comma_token: separator.take(),
                        elision: elision(std::mem::take(&mut holes)),
                        expression,
                    });
                    if !matches!(
                        self.peek_token(0),
                        Some(Token::Comma | Token::RightBracket)
                    ) {
                        return Err(self.expected(Token::RightBracket));
                    }
                }
            }
        }
        let rbracket_token = self.bump()?;
        Ok(ArrayPattern {
            lbracket_token,
            elements: (!items.is_empty()).then_some(PatternElementList { items }),
            comma_token: separator,
            elision: elision(holes),
            rbracket_token,
        })
    }

    fn parse_object_literal(&mut self) -> ParseResult<ObjectPattern> {
        let lbrace_token = self.bump()?;
        let mut items = Vec::new();
        while !self.at(Token::RightBrace) {
            let name = match self.peek_token(0) {
                Some(Token::String) => PropertyName::String(self.bump()?),
                Some(Token::Number) => PropertyName::Numeric(self.bump()?),
                Some(token) if token.is_identifier_name() => {
                    PropertyName::Identifier(self.bump()?)
                }
                _ => return Err(self.unexpected()),
            };
            let colon_token = self.expect(Token::Colon)?;
            let initializer = self.parse_assignment(false)?;
            let comma_token = self.eat(Token::Comma)?;
            let last = comma_token.is_none();
            items.push(PatternPropertyItem {
                property: PatternProperty {
                    name,
                    colon_token,
                    initializer,
                },
                comma_token,
            });
            if last {
                break;
            }
        }
        let rbrace_token = self.expect(Token::RightBrace)?;
        Ok(ObjectPattern {
            lbrace_token,
            properties: (!items.is_empty()).then_some(PatternPropertyList { items }),
            rbrace_token,
        })
    }
}

fn elision(commas: Vec<Span>) -> Option<Elision> {
    (!commas.is_empty()).then_some(Elision { commas })
}
