//! Borrowed, kind-tagged views of tree nodes
//!
//! [`NodeRef`] has exactly one variant per [`NodeKind`], so a `match` over it is the
//! place where the compiler checks that every production is handled.
//!
//! Cons-list kinds are addressed as `(list, index)` cells. Right-recursive lists
//! start at cell `0` and continue with `index + 1`; left-recursive lists
//! ([`PatternElementList`], [`Elision`]) start at their last cell and continue with
//! `index - 1`, mirroring how a left-recursive grammar nests them.

use super::elements::*;
use super::kind::NodeKind;
use super::range::Span;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NodeRef<'a> {
    UiProgram(&'a UiProgram),
    UiHeaderItemList(&'a UiHeaderItemList),
    UiPragma(&'a UiPragma),
    UiImport(&'a UiImport),
    UiObjectMemberList(&'a UiObjectMemberList),
    UiObjectDefinition(&'a UiObjectDefinition),
    UiObjectInitializer(&'a UiObjectInitializer),
    UiObjectBinding(&'a UiObjectBinding),
    UiScriptBinding(&'a UiScriptBinding),
    UiArrayBinding(&'a UiArrayBinding),
    UiArrayMemberList(&'a UiArrayMemberList, usize),
    UiQualifiedId(&'a UiQualifiedId, usize),
    UiPublicMember(&'a UiPublicMember),
    UiParameterList(&'a UiParameterList, usize),
    UiSourceElement(&'a UiSourceElement),
    UiEnumDeclaration(&'a UiEnumDeclaration),
    UiEnumMemberList(&'a UiEnumMemberList),
    Program(&'a Program),
    ThisExpression(Span),
    IdentifierExpression(Span),
    NullExpression(Span),
    TrueLiteral(Span),
    FalseLiteral(Span),
    NumericLiteral(Span),
    StringLiteral(Span),
    RegExpLiteral(Span),
    ArrayPattern(&'a ArrayPattern),
    ObjectPattern(&'a ObjectPattern),
    PatternElementList(&'a PatternElementList, usize),
    Elision(&'a Elision, usize),
    PatternPropertyList(&'a PatternPropertyList, usize),
    PatternProperty(&'a PatternProperty),
    IdentifierPropertyName(Span),
    StringLiteralPropertyName(Span),
    NumericLiteralPropertyName(Span),
    NestedExpression(&'a NestedExpression),
    ArrayMemberExpression(&'a ArrayMemberExpression),
    FieldMemberExpression(&'a FieldMemberExpression),
    NewMemberExpression(&'a NewMemberExpression),
    NewExpression(&'a NewExpression),
    CallExpression(&'a CallExpression),
    ArgumentList(&'a ArgumentList, usize),
    PostIncrementExpression(&'a PostfixExpression),
    PostDecrementExpression(&'a PostfixExpression),
    DeleteExpression(&'a UnaryExpression),
    VoidExpression(&'a UnaryExpression),
    TypeOfExpression(&'a UnaryExpression),
    PreIncrementExpression(&'a UnaryExpression),
    PreDecrementExpression(&'a UnaryExpression),
    UnaryPlusExpression(&'a UnaryExpression),
    UnaryMinusExpression(&'a UnaryExpression),
    TildeExpression(&'a UnaryExpression),
    NotExpression(&'a UnaryExpression),
    BinaryExpression(&'a BinaryExpression),
    ConditionalExpression(&'a ConditionalExpression),
    Expression(&'a CommaExpression),
    FunctionExpression(&'a Function),
    Block(&'a Block),
    StatementList(&'a StatementList),
    VariableStatement(&'a VariableStatement),
    VariableDeclarationList(&'a VariableDeclarationList, usize),
    PatternElement(&'a PatternElement),
    EmptyStatement(Span),
    ExpressionStatement(&'a ExpressionStatement),
    IfStatement(&'a IfStatement),
    DoWhileStatement(&'a DoWhileStatement),
    WhileStatement(&'a WhileStatement),
    ForStatement(&'a ForStatement),
    ForEachStatement(&'a ForEachStatement),
    ContinueStatement(&'a JumpStatement),
    BreakStatement(&'a JumpStatement),
    ReturnStatement(&'a ReturnStatement),
    WithStatement(&'a WithStatement),
    SwitchStatement(&'a SwitchStatement),
    CaseBlock(&'a CaseBlock),
    CaseClauses(&'a CaseClauses),
    CaseClause(&'a CaseClause),
    DefaultClause(&'a DefaultClause),
    LabelledStatement(&'a LabelledStatement),
    ThrowStatement(&'a ThrowStatement),
    TryStatement(&'a TryStatement),
    Catch(&'a Catch),
    Finally(&'a Finally),
    FunctionDeclaration(&'a Function),
    FormalParameterList(&'a FormalParameterList),
    DebuggerStatement(&'a DebuggerStatement),
}

impl NodeRef<'_> {
    pub fn kind(&self) -> NodeKind {
        match self {
            NodeRef::UiProgram(_) => NodeKind::UiProgram,
            NodeRef::UiHeaderItemList(_) => NodeKind::UiHeaderItemList,
            NodeRef::UiPragma(_) => NodeKind::UiPragma,
            NodeRef::UiImport(_) => NodeKind::UiImport,
            NodeRef::UiObjectMemberList(_) => NodeKind::UiObjectMemberList,
            NodeRef::UiObjectDefinition(_) => NodeKind::UiObjectDefinition,
            NodeRef::UiObjectInitializer(_) => NodeKind::UiObjectInitializer,
            NodeRef::UiObjectBinding(_) => NodeKind::UiObjectBinding,
            NodeRef::UiScriptBinding(_) => NodeKind::UiScriptBinding,
            NodeRef::UiArrayBinding(_) => NodeKind::UiArrayBinding,
            NodeRef::UiArrayMemberList(..) => NodeKind::UiArrayMemberList,
            NodeRef::UiQualifiedId(..) => NodeKind::UiQualifiedId,
            NodeRef::UiPublicMember(_) => NodeKind::UiPublicMember,
            NodeRef::UiParameterList(..) => NodeKind::UiParameterList,
            NodeRef::UiSourceElement(_) => NodeKind::UiSourceElement,
            NodeRef::UiEnumDeclaration(_) => NodeKind::UiEnumDeclaration,
            NodeRef::UiEnumMemberList(_) => NodeKind::UiEnumMemberList,
            NodeRef::Program(_) => NodeKind::Program,
            NodeRef::ThisExpression(_) => NodeKind::ThisExpression,
            NodeRef::IdentifierExpression(_) => NodeKind::IdentifierExpression,
            NodeRef::NullExpression(_) => NodeKind::NullExpression,
            NodeRef::TrueLiteral(_) => NodeKind::TrueLiteral,
            NodeRef::FalseLiteral(_) => NodeKind::FalseLiteral,
            NodeRef::NumericLiteral(_) => NodeKind::NumericLiteral,
            NodeRef::StringLiteral(_) => NodeKind::StringLiteral,
            NodeRef::RegExpLiteral(_) => NodeKind::RegExpLiteral,
            NodeRef::ArrayPattern(_) => NodeKind::ArrayPattern,
            NodeRef::ObjectPattern(_) => NodeKind::ObjectPattern,
            NodeRef::PatternElementList(..) => NodeKind::PatternElementList,
            NodeRef::Elision(..) => NodeKind::Elision,
            NodeRef::PatternPropertyList(..) => NodeKind::PatternPropertyList,
            NodeRef::PatternProperty(_) => NodeKind::PatternProperty,
            NodeRef::IdentifierPropertyName(_) => NodeKind::IdentifierPropertyName,
            NodeRef::StringLiteralPropertyName(_) => NodeKind::StringLiteralPropertyName,
            NodeRef::NumericLiteralPropertyName(_) => NodeKind::NumericLiteralPropertyName,
            NodeRef::NestedExpression(_) => NodeKind::NestedExpression,
            NodeRef::ArrayMemberExpression(_) => NodeKind::ArrayMemberExpression,
            NodeRef::FieldMemberExpression(_) => NodeKind::FieldMemberExpression,
            NodeRef::NewMemberExpression(_) => NodeKind::NewMemberExpression,
            NodeRef::NewExpression(_) => NodeKind::NewExpression,
            NodeRef::CallExpression(_) => NodeKind::CallExpression,
            NodeRef::ArgumentList(..) => NodeKind::ArgumentList,
            NodeRef::PostIncrementExpression(_) => NodeKind::PostIncrementExpression,
            NodeRef::PostDecrementExpression(_) => NodeKind::PostDecrementExpression,
            NodeRef::DeleteExpression(_) => NodeKind::DeleteExpression,
            NodeRef::VoidExpression(_) => NodeKind::VoidExpression,
            NodeRef::TypeOfExpression(_) => NodeKind::TypeOfExpression,
            NodeRef::PreIncrementExpression(_) => NodeKind::PreIncrementExpression,
            NodeRef::PreDecrementExpression(_) => NodeKind::PreDecrementExpression,
            NodeRef::UnaryPlusExpression(_) => NodeKind::UnaryPlusExpression,
            NodeRef::UnaryMinusExpression(_) => NodeKind::UnaryMinusExpression,
            NodeRef::TildeExpression(_) => NodeKind::TildeExpression,
            NodeRef::NotExpression(_) => NodeKind::NotExpression,
            NodeRef::BinaryExpression(_) => NodeKind::BinaryExpression,
            NodeRef::ConditionalExpression(_) => NodeKind::ConditionalExpression,
            NodeRef::Expression(_) => NodeKind::Expression,
            NodeRef::FunctionExpression(_) => NodeKind::FunctionExpression,
            NodeRef::Block(_) => NodeKind::Block,
            NodeRef::StatementList(_) => NodeKind::StatementList,
            NodeRef::VariableStatement(_) => NodeKind::VariableStatement,
            NodeRef::VariableDeclarationList(..) => NodeKind::VariableDeclarationList,
            NodeRef::PatternElement(_) => NodeKind::PatternElement,
            NodeRef::EmptyStatement(_) => NodeKind::EmptyStatement,
            NodeRef::ExpressionStatement(_) => NodeKind::ExpressionStatement,
            NodeRef::IfStatement(_) => NodeKind::IfStatement,
            NodeRef::DoWhileStatement(_) => NodeKind::DoWhileStatement,
            NodeRef::WhileStatement(_) => NodeKind::WhileStatement,
            NodeRef::ForStatement(_) => NodeKind::ForStatement,
            NodeRef::ForEachStatement(_) => NodeKind::ForEachStatement,
            NodeRef::ContinueStatement(_) => NodeKind::ContinueStatement,
            NodeRef::BreakStatement(_) => NodeKind::BreakStatement,
            NodeRef::ReturnStatement(_) => NodeKind::ReturnStatement,
            NodeRef::WithStatement(_) => NodeKind::WithStatement,
            NodeRef::SwitchStatement(_) => NodeKind::SwitchStatement,
            NodeRef::CaseBlock(_) => NodeKind::CaseBlock,
            NodeRef::CaseClauses(_) => NodeKind::CaseClauses,
            NodeRef::CaseClause(_) => NodeKind::CaseClause,
            NodeRef::DefaultClause(_) => NodeKind::DefaultClause,
            NodeRef::LabelledStatement(_) => NodeKind::LabelledStatement,
            NodeRef::ThrowStatement(_) => NodeKind::ThrowStatement,
            NodeRef::TryStatement(_) => NodeKind::TryStatement,
            NodeRef::Catch(_) => NodeKind::Catch,
            NodeRef::Finally(_) => NodeKind::Finally,
            NodeRef::FunctionDeclaration(_) => NodeKind::FunctionDeclaration,
            NodeRef::FormalParameterList(_) => NodeKind::FormalParameterList,
            NodeRef::DebuggerStatement(_) => NodeKind::DebuggerStatement,
        }
    }
}

// Conversions from owned nodes. Lists enter at their outermost cell.

macro_rules! node_ref_from {
    ($($ty:ident => $variant:ident),+ $(,)?) => {
        $(
            impl<'a> From<&'a $ty> for NodeRef<'a> {
                fn from(node: &'a $ty) -> Self {
                    NodeRef::$variant(node)
                }
            }
        )+
    };
}

node_ref_from! {
    UiProgram => UiProgram,
    UiHeaderItemList => UiHeaderItemList,
    UiPragma => UiPragma,
    UiImport => UiImport,
    UiObjectMemberList => UiObjectMemberList,
    UiObjectDefinition => UiObjectDefinition,
    UiObjectInitializer => UiObjectInitializer,
    UiObjectBinding => UiObjectBinding,
    UiScriptBinding => UiScriptBinding,
    UiArrayBinding => UiArrayBinding,
    UiPublicMember => UiPublicMember,
    UiSourceElement => UiSourceElement,
    UiEnumDeclaration => UiEnumDeclaration,
    UiEnumMemberList => UiEnumMemberList,
    Program => Program,
    ArrayPattern => ArrayPattern,
    ObjectPattern => ObjectPattern,
    PatternProperty => PatternProperty,
    NestedExpression => NestedExpression,
    ArrayMemberExpression => ArrayMemberExpression,
    FieldMemberExpression => FieldMemberExpression,
    NewMemberExpression => NewMemberExpression,
    NewExpression => NewExpression,
    CallExpression => CallExpression,
    BinaryExpression => BinaryExpression,
    ConditionalExpression => ConditionalExpression,
    CommaExpression => Expression,
    Block => Block,
    StatementList => StatementList,
    VariableStatement => VariableStatement,
    PatternElement => PatternElement,
    ExpressionStatement => ExpressionStatement,
    IfStatement => IfStatement,
    DoWhileStatement => DoWhileStatement,
    WhileStatement => WhileStatement,
    ForStatement => ForStatement,
    ForEachStatement => ForEachStatement,
    ReturnStatement => ReturnStatement,
    WithStatement => WithStatement,
    SwitchStatement => SwitchStatement,
    CaseBlock => CaseBlock,
    CaseClauses => CaseClauses,
    CaseClause => CaseClause,
    DefaultClause => DefaultClause,
    LabelledStatement => LabelledStatement,
    ThrowStatement => ThrowStatement,
    TryStatement => TryStatement,
    Catch => Catch,
    Finally => Finally,
    FormalParameterList => FormalParameterList,
    DebuggerStatement => DebuggerStatement,
}

macro_rules! right_recursive_from {
    ($($ty:ident),+ $(,)?) => {
        $(
            impl<'a> From<&'a $ty> for NodeRef<'a> {
                fn from(list: &'a $ty) -> Self {
                    NodeRef::$ty(list, 0)
                }
            }
        )+
    };
}

right_recursive_from! {
    UiArrayMemberList,
    UiQualifiedId,
    UiParameterList,
    PatternPropertyList,
    ArgumentList,
    VariableDeclarationList,
}

impl<'a> From<&'a PatternElementList> for NodeRef<'a> {
    fn from(list: &'a PatternElementList) -> Self {
        NodeRef::PatternElementList(list, list.items.len().saturating_sub(1))
    }
}

impl<'a> From<&'a Elision> for NodeRef<'a> {
    fn from(elision: &'a Elision) -> Self {
        NodeRef::Elision(elision, elision.commas.len().saturating_sub(1))
    }
}

impl<'a> From<&'a Document> for NodeRef<'a> {
    fn from(document: &'a Document) -> Self {
        match document {
            Document::Qml(program) => NodeRef::UiProgram(program),
            Document::Script(program) => NodeRef::Program(program),
        }
    }
}

impl<'a> From<&'a UiHeaderItem> for NodeRef<'a> {
    fn from(item: &'a UiHeaderItem) -> Self {
        match item {
            UiHeaderItem::Pragma(pragma) => NodeRef::UiPragma(pragma),
            UiHeaderItem::Import(import) => NodeRef::UiImport(import),
        }
    }
}

impl<'a> From<&'a UiObjectMember> for NodeRef<'a> {
    fn from(member: &'a UiObjectMember) -> Self {
        match member {
            UiObjectMember::ObjectDefinition(node) => NodeRef::UiObjectDefinition(node),
            UiObjectMember::ObjectBinding(node) => NodeRef::UiObjectBinding(node),
            UiObjectMember::ScriptBinding(node) => NodeRef::UiScriptBinding(node),
            UiObjectMember::ArrayBinding(node) => NodeRef::UiArrayBinding(node),
            UiObjectMember::PublicMember(node) => NodeRef::UiPublicMember(node),
            UiObjectMember::SourceElement(node) => NodeRef::UiSourceElement(node),
            UiObjectMember::EnumDeclaration(node) => NodeRef::UiEnumDeclaration(node),
        }
    }
}

impl<'a> From<&'a SourceElement> for NodeRef<'a> {
    fn from(element: &'a SourceElement) -> Self {
        match element {
            SourceElement::Function(function) => NodeRef::FunctionDeclaration(function),
            SourceElement::Variable(statement) => NodeRef::VariableStatement(statement),
        }
    }
}

impl<'a> From<&'a PropertyName> for NodeRef<'a> {
    fn from(name: &'a PropertyName) -> Self {
        match *name {
            PropertyName::Identifier(span) => NodeRef::IdentifierPropertyName(span),
            PropertyName::String(span) => NodeRef::StringLiteralPropertyName(span),
            PropertyName::Numeric(span) => NodeRef::NumericLiteralPropertyName(span),
        }
    }
}

impl<'a> From<&'a Expression> for NodeRef<'a> {
    fn from(expression: &'a Expression) -> Self {
        match expression {
            Expression::This(span) => NodeRef::ThisExpression(*span),
            Expression::Identifier(span) => NodeRef::IdentifierExpression(*span),
            Expression::Null(span) => NodeRef::NullExpression(*span),
            Expression::True(span) => NodeRef::TrueLiteral(*span),
            Expression::False(span) => NodeRef::FalseLiteral(*span),
            Expression::Numeric(span) => NodeRef::NumericLiteral(*span),
            Expression::String(span) => NodeRef::StringLiteral(*span),
            Expression::RegExp(span) => NodeRef::RegExpLiteral(*span),
            Expression::Array(node) => NodeRef::ArrayPattern(node),
            Expression::Object(node) => NodeRef::ObjectPattern(node),
            Expression::Nested(node) => NodeRef::NestedExpression(node),
            Expression::ArrayMember(node) => NodeRef::ArrayMemberExpression(node),
            Expression::FieldMember(node) => NodeRef::FieldMemberExpression(node),
            Expression::NewMember(node) => NodeRef::NewMemberExpression(node),
            Expression::New(node) => NodeRef::NewExpression(node),
            Expression::Call(node) => NodeRef::CallExpression(node),
            Expression::PostIncrement(node) => NodeRef::PostIncrementExpression(node),
            Expression::PostDecrement(node) => NodeRef::PostDecrementExpression(node),
            Expression::Delete(node) => NodeRef::DeleteExpression(node),
            Expression::Void(node) => NodeRef::VoidExpression(node),
            Expression::TypeOf(node) => NodeRef::TypeOfExpression(node),
            Expression::PreIncrement(node) => NodeRef::PreIncrementExpression(node),
            Expression::PreDecrement(node) => NodeRef::PreDecrementExpression(node),
            Expression::UnaryPlus(node) => NodeRef::UnaryPlusExpression(node),
            Expression::UnaryMinus(node) => NodeRef::UnaryMinusExpression(node),
            Expression::Tilde(node) => NodeRef::TildeExpression(node),
            Expression::Not(node) => NodeRef::NotExpression(node),
            Expression::Binary(node) => NodeRef::BinaryExpression(node),
            Expression::Conditional(node) => NodeRef::ConditionalExpression(node),
            Expression::Comma(node) => NodeRef::Expression(node),
            Expression::Function(node) => NodeRef::FunctionExpression(node),
        }
    }
}

impl<'a> From<&'a Statement> for NodeRef<'a> {
    fn from(statement: &'a Statement) -> Self {
        match statement {
            Statement::Block(node) => NodeRef::Block(node),
            Statement::Variable(node) => NodeRef::VariableStatement(node),
            Statement::Empty(span) => NodeRef::EmptyStatement(*span),
            Statement::Expression(node) => NodeRef::ExpressionStatement(node),
            Statement::If(node) => NodeRef::IfStatement(node),
            Statement::DoWhile(node) => NodeRef::DoWhileStatement(node),
            Statement::While(node) => NodeRef::WhileStatement(node),
            Statement::For(node) => NodeRef::ForStatement(node),
            Statement::ForEach(node) => NodeRef::ForEachStatement(node),
            Statement::Continue(node) => NodeRef::ContinueStatement(node),
            Statement::Break(node) => NodeRef::BreakStatement(node),
            Statement::Return(node) => NodeRef::ReturnStatement(node),
            Statement::With(node) => NodeRef::WithStatement(node),
            Statement::Switch(node) => NodeRef::SwitchStatement(node),
            Statement::Labelled(node) => NodeRef::LabelledStatement(node),
            Statement::Throw(node) => NodeRef::ThrowStatement(node),
            Statement::Try(node) => NodeRef::TryStatement(node),
            Statement::Debugger(node) => NodeRef::DebuggerStatement(node),
            Statement::FunctionDeclaration(node) => NodeRef::FunctionDeclaration(node),
        }
    }
}

impl<'a> From<&'a ForInitialiser> for NodeRef<'a> {
    fn from(initialiser: &'a ForInitialiser) -> Self {
        match initialiser {
            ForInitialiser::Expression(expression) => expression.into(),
            ForInitialiser::Declarations(statement) => NodeRef::VariableStatement(statement),
        }
    }
}

impl<'a> From<&'a ForEachTarget> for NodeRef<'a> {
    fn from(target: &'a ForEachTarget) -> Self {
        match target {
            ForEachTarget::Expression(expression) => expression.into(),
            ForEachTarget::Declaration(statement) => NodeRef::VariableStatement(statement),
        }
    }
}
