//! Node kinds
//!
//! Every grammar production the tree can instantiate has exactly one [`NodeKind`].
//! The display name of a kind is fixed at compile time and is what the trace prints
//! next to the `+`/`-` markers.

use serde::{Serialize, Serializer};
use std::fmt;

macro_rules! node_kinds {
    ($($kind:ident),+ $(,)?) => {
        /// The tag identifying which grammar production a node instantiates
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub enum NodeKind {
            $($kind),+
        }

        impl NodeKind {
            /// Every kind, in declaration order
            pub const ALL: &'static [NodeKind] = &[$(NodeKind::$kind),+];

            /// Canonical display name
            pub const fn name(self) -> &'static str {
                match self {
                    $(NodeKind::$kind => stringify!($kind)),+
                }
            }
        }
    };
}

node_kinds! {
    // QML
    UiProgram,
    UiHeaderItemList,
    UiPragma,
    UiImport,
    UiObjectMemberList,
    UiObjectDefinition,
    UiObjectInitializer,
    UiObjectBinding,
    UiScriptBinding,
    UiArrayBinding,
    UiArrayMemberList,
    UiQualifiedId,
    UiPublicMember,
    UiParameterList,
    UiSourceElement,
    UiEnumDeclaration,
    UiEnumMemberList,
    // JavaScript program root
    Program,
    // Expressions
    ThisExpression,
    IdentifierExpression,
    NullExpression,
    TrueLiteral,
    FalseLiteral,
    NumericLiteral,
    StringLiteral,
    RegExpLiteral,
    ArrayPattern,
    ObjectPattern,
    PatternElementList,
    Elision,
    PatternPropertyList,
    PatternProperty,
    IdentifierPropertyName,
    StringLiteralPropertyName,
    NumericLiteralPropertyName,
    NestedExpression,
    ArrayMemberExpression,
    FieldMemberExpression,
    NewMemberExpression,
    NewExpression,
    CallExpression,
    ArgumentList,
    PostIncrementExpression,
    PostDecrementExpression,
    DeleteExpression,
    VoidExpression,
    TypeOfExpression,
    PreIncrementExpression,
    PreDecrementExpression,
    UnaryPlusExpression,
    UnaryMinusExpression,
    TildeExpression,
    NotExpression,
    BinaryExpression,
    ConditionalExpression,
    Expression,
    FunctionExpression,
    // Statements
    Block,
    StatementList,
    VariableStatement,
    VariableDeclarationList,
    PatternElement,
    EmptyStatement,
    ExpressionStatement,
    IfStatement,
    DoWhileStatement,
    WhileStatement,
    ForStatement,
    ForEachStatement,
    ContinueStatement,
    BreakStatement,
    ReturnStatement,
    WithStatement,
    SwitchStatement,
    CaseBlock,
    CaseClauses,
    CaseClause,
    DefaultClause,
    LabelledStatement,
    ThrowStatement,
    TryStatement,
    Catch,
    Finally,
    FunctionDeclaration,
    FormalParameterList,
    DebuggerStatement,
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Serialize for NodeKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_names_match_variants() {
        assert_eq!(NodeKind::UiImport.name(), "UiImport");
        assert_eq!(NodeKind::Expression.name(), "Expression");
        assert_eq!(NodeKind::IfStatement.to_string(), "IfStatement");
    }

    #[test]
    fn test_names_are_unique() {
        let names: HashSet<_> = NodeKind::ALL.iter().map(|k| k.name()).collect();
        assert_eq!(names.len(), NodeKind::ALL.len());
        assert_eq!(NodeKind::ALL.len(), 86);
    }

    #[test]
    fn test_serializes_as_name() {
        let json = serde_json::to_string(&NodeKind::UiObjectBinding).unwrap();
        assert_eq!(json, "\"UiObjectBinding\"");
    }
}
