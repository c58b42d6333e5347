//! JavaScript expression nodes
//!
//! Leaf expressions are stored as the single token they consist of. Everything that
//! nests is boxed so an [`Expression`] is never larger than a span plus its tag.

use super::statements::{PatternElement, StatementList};
use crate::qml::ast::range::Span;

#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    This(Span),
    Identifier(Span),
    Null(Span),
    True(Span),
    False(Span),
    Numeric(Span),
    String(Span),
    RegExp(Span),
    Array(Box<ArrayPattern>),
    Object(Box<ObjectPattern>),
    Nested(Box<NestedExpression>),
    ArrayMember(Box<ArrayMemberExpression>),
    FieldMember(Box<FieldMemberExpression>),
    NewMember(Box<NewMemberExpression>),
    New(Box<NewExpression>),
    Call(Box<CallExpression>),
    PostIncrement(Box<PostfixExpression>),
    PostDecrement(Box<PostfixExpression>),
    Delete(Box<UnaryExpression>),
    Void(Box<UnaryExpression>),
    TypeOf(Box<UnaryExpression>),
    PreIncrement(Box<UnaryExpression>),
    PreDecrement(Box<UnaryExpression>),
    UnaryPlus(Box<UnaryExpression>),
    UnaryMinus(Box<UnaryExpression>),
    Tilde(Box<UnaryExpression>),
    Not(Box<UnaryExpression>),
    Binary(Box<BinaryExpression>),
    Conditional(Box<ConditionalExpression>),
    /// Comma operator
    Comma(Box<CommaExpression>),
    Function(Box<Function>),
}

impl Expression {
    /// Whether the expression can stand on the left of an assignment or `++`/`--`
    pub fn is_left_hand_side(&self) -> bool {
        matches!(
            self,
            Expression::Identifier(_)
                | Expression::FieldMember(_)
                | Expression::ArrayMember(_)
                | Expression::Call(_)
                | Expression::Nested(_)
        )
    }
}

/// `[a, , b, ]`
#[derive(Debug, Clone, PartialEq)]
pub struct ArrayPattern {
    pub lbracket_token: Span,
    pub elements: Option<PatternElementList>,
    /// Separator after the last element when holes or nothing follow it
    pub comma_token: Option<Span>,
    /// Trailing holes
    pub elision: Option<Elision>,
    pub rbracket_token: Span,
}

/// Array elements, left-recursive: the outermost cell holds the last element
#[derive(Debug, Clone, PartialEq)]
pub struct PatternElementList {
    pub items: Vec<ArrayElement>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ArrayElement {
    /// Separator between this element and the previous one
    pub comma_token: Option<Span>,
    /// Holes between the separator and this element
    pub elision: Option<Elision>,
    pub expression: Expression,
}

/// Run of hole commas, left-recursive
#[derive(Debug, Clone, PartialEq)]
pub struct Elision {
    pub commas: Vec<Span>,
}

/// `{ name: value, "key": 1 }`
#[derive(Debug, Clone, PartialEq)]
pub struct ObjectPattern {
    pub lbrace_token: Span,
    pub properties: Option<PatternPropertyList>,
    pub rbrace_token: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PatternPropertyList {
    pub items: Vec<PatternPropertyItem>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PatternPropertyItem {
    pub property: PatternProperty,
    pub comma_token: Option<Span>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PatternProperty {
    pub name: PropertyName,
    pub colon_token: Span,
    pub initializer: Expression,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropertyName {
    Identifier(Span),
    String(Span),
    Numeric(Span),
}

#[derive(Debug, Clone, PartialEq)]
pub struct NestedExpression {
    pub lparen_token: Span,
    pub expression: Expression,
    pub rparen_token: Span,
}

/// `base[expression]`
#[derive(Debug, Clone, PartialEq)]
pub struct ArrayMemberExpression {
    pub base: Expression,
    pub lbracket_token: Span,
    pub expression: Expression,
    pub rbracket_token: Span,
}

/// `base.identifier`
#[derive(Debug, Clone, PartialEq)]
pub struct FieldMemberExpression {
    pub base: Expression,
    pub dot_token: Span,
    pub identifier_token: Span,
}

/// `new Base(arguments)`
#[derive(Debug, Clone, PartialEq)]
pub struct NewMemberExpression {
    pub new_token: Span,
    pub base: Expression,
    pub lparen_token: Span,
    pub arguments: Option<ArgumentList>,
    pub rparen_token: Span,
}

/// `new Base` without an argument list
#[derive(Debug, Clone, PartialEq)]
pub struct NewExpression {
    pub new_token: Span,
    pub expression: Expression,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CallExpression {
    pub base: Expression,
    pub lparen_token: Span,
    pub arguments: Option<ArgumentList>,
    pub rparen_token: Span,
}

/// Call arguments; each cell's comma follows its expression
#[derive(Debug, Clone, PartialEq)]
pub struct ArgumentList {
    pub items: Vec<Argument>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Argument {
    pub expression: Expression,
    pub comma_token: Option<Span>,
}

/// `base++` / `base--`
#[derive(Debug, Clone, PartialEq)]
pub struct PostfixExpression {
    pub base: Expression,
    pub operator_token: Span,
}

/// Prefix operator applied to an expression (`!x`, `typeof x`, `++x`, ...)
#[derive(Debug, Clone, PartialEq)]
pub struct UnaryExpression {
    pub operator_token: Span,
    pub expression: Expression,
}

/// Binary and assignment operators
#[derive(Debug, Clone, PartialEq)]
pub struct BinaryExpression {
    pub left: Expression,
    pub operator_token: Span,
    pub right: Expression,
}

/// `expression ? ok : ko`
#[derive(Debug, Clone, PartialEq)]
pub struct ConditionalExpression {
    pub expression: Expression,
    pub question_token: Span,
    pub ok: Expression,
    pub colon_token: Span,
    pub ko: Expression,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CommaExpression {
    pub left: Expression,
    pub comma_token: Span,
    pub right: Expression,
}

/// Function expressions and declarations share one shape
#[derive(Debug, Clone, PartialEq)]
pub struct Function {
    pub function_token: Span,
    pub identifier_token: Option<Span>,
    pub lparen_token: Span,
    pub formals: Option<FormalParameterList>,
    pub rparen_token: Span,
    pub lbrace_token: Span,
    pub body: Option<StatementList>,
    pub rbrace_token: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FormalParameterList {
    pub items: Vec<FormalParameter>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FormalParameter {
    pub element: PatternElement,
    pub comma_token: Option<Span>,
}
