//! JavaScript statement nodes and the JavaScript program root

use super::expressions::{Expression, Function};
use crate::qml::ast::range::Span;

/// Root of a plain JavaScript source
#[derive(Debug, Clone, PartialEq)]
pub struct Program {
    pub statements: Option<StatementList>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    Block(Block),
    Variable(VariableStatement),
    Empty(Span),
    Expression(ExpressionStatement),
    If(Box<IfStatement>),
    DoWhile(Box<DoWhileStatement>),
    While(Box<WhileStatement>),
    For(Box<ForStatement>),
    ForEach(Box<ForEachStatement>),
    Continue(JumpStatement),
    Break(JumpStatement),
    Return(ReturnStatement),
    With(Box<WithStatement>),
    Switch(Box<SwitchStatement>),
    Labelled(Box<LabelledStatement>),
    Throw(ThrowStatement),
    Try(Box<TryStatement>),
    Debugger(DebuggerStatement),
    FunctionDeclaration(Box<Function>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    pub lbrace_token: Span,
    pub statements: Option<StatementList>,
    pub rbrace_token: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StatementList {
    pub statements: Vec<Statement>,
}

/// `var a = 1, b`; also the declaration part of `for` heads, without a semicolon
#[derive(Debug, Clone, PartialEq)]
pub struct VariableStatement {
    /// `var`, `let` or `const`
    pub declaration_kind_token: Span,
    pub declarations: VariableDeclarationList,
    pub semicolon_token: Option<Span>,
}

/// Declarations; each cell's comma follows its declaration
#[derive(Debug, Clone, PartialEq)]
pub struct VariableDeclarationList {
    pub items: Vec<VariableDeclaration>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct VariableDeclaration {
    pub declaration: PatternElement,
    pub comma_token: Option<Span>,
}

/// A binding name with an optional initializer (`x = 1`)
#[derive(Debug, Clone, PartialEq)]
pub struct PatternElement {
    pub identifier_token: Span,
    pub equal_token: Option<Span>,
    pub initializer: Option<Expression>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExpressionStatement {
    pub expression: Expression,
    pub semicolon_token: Option<Span>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct IfStatement {
    pub if_token: Span,
    pub lparen_token: Span,
    pub expression: Expression,
    pub rparen_token: Span,
    pub ok: Statement,
    pub else_branch: Option<ElseBranch>,
}

/// The `else` keyword and its statement are present or absent together
#[derive(Debug, Clone, PartialEq)]
pub struct ElseBranch {
    pub else_token: Span,
    pub ko: Statement,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DoWhileStatement {
    pub do_token: Span,
    pub statement: Statement,
    pub while_token: Span,
    pub lparen_token: Span,
    pub expression: Expression,
    pub rparen_token: Span,
    pub semicolon_token: Option<Span>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WhileStatement {
    pub while_token: Span,
    pub lparen_token: Span,
    pub expression: Expression,
    pub rparen_token: Span,
    pub statement: Statement,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ForStatement {
    pub for_token: Span,
    pub lparen_token: Span,
    pub initialiser: Option<ForInitialiser>,
    pub first_semicolon_token: Span,
    pub condition: Option<Expression>,
    pub second_semicolon_token: Span,
    pub expression: Option<Expression>,
    pub rparen_token: Span,
    pub statement: Statement,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ForInitialiser {
    Expression(Expression),
    Declarations(VariableStatement),
}

/// `for (target in expression)` and `for (target of expression)`
#[derive(Debug, Clone, PartialEq)]
pub struct ForEachStatement {
    pub for_token: Span,
    pub lparen_token: Span,
    pub target: ForEachTarget,
    pub in_of_token: Span,
    pub expression: Expression,
    pub rparen_token: Span,
    pub statement: Statement,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ForEachTarget {
    Expression(Expression),
    Declaration(VariableStatement),
}

/// `continue` and `break`
#[derive(Debug, Clone, PartialEq)]
pub struct JumpStatement {
    pub keyword_token: Span,
    pub label_token: Option<Span>,
    pub semicolon_token: Option<Span>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReturnStatement {
    pub return_token: Span,
    pub expression: Option<Expression>,
    pub semicolon_token: Option<Span>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ThrowStatement {
    pub throw_token: Span,
    pub expression: Expression,
    pub semicolon_token: Option<Span>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WithStatement {
    pub with_token: Span,
    pub lparen_token: Span,
    pub expression: Expression,
    pub rparen_token: Span,
    pub statement: Statement,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SwitchStatement {
    pub switch_token: Span,
    pub lparen_token: Span,
    pub expression: Expression,
    pub rparen_token: Span,
    pub block: CaseBlock,
}

/// Clauses before the `default` clause, the `default` clause, clauses after it
#[derive(Debug, Clone, PartialEq)]
pub struct CaseBlock {
    pub lbrace_token: Span,
    pub clauses: Option<CaseClauses>,
    pub default_clause: Option<DefaultClause>,
    pub more_clauses: Option<CaseClauses>,
    pub rbrace_token: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CaseClauses {
    pub clauses: Vec<CaseClause>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CaseClause {
    pub case_token: Span,
    pub expression: Expression,
    pub colon_token: Span,
    pub statements: Option<StatementList>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DefaultClause {
    pub default_token: Span,
    pub colon_token: Span,
    pub statements: Option<StatementList>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LabelledStatement {
    pub identifier_token: Span,
    pub colon_token: Span,
    pub statement: Statement,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TryStatement {
    pub try_token: Span,
    pub statement: Block,
    pub catch: Option<Catch>,
    pub finally: Option<Finally>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Catch {
    pub catch_token: Span,
    pub lparen_token: Span,
    pub identifier_token: Span,
    pub rparen_token: Span,
    pub statement: Block,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Finally {
    pub finally_token: Span,
    pub statement: Block,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DebuggerStatement {
    pub debugger_token: Span,
    pub semicolon_token: Option<Span>,
}
