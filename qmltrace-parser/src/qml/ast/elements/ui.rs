//! QML declarative nodes: imports, object definitions, bindings and member declarations

use super::expressions::Function;
use super::statements::{Statement, VariableStatement};
use crate::qml::ast::range::Span;

/// Root of a QML document: header items followed by the root object
#[derive(Debug, Clone, PartialEq)]
pub struct UiProgram {
    pub headers: Option<UiHeaderItemList>,
    pub members: Option<UiObjectMemberList>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct UiHeaderItemList {
    pub items: Vec<UiHeaderItem>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum UiHeaderItem {
    Pragma(UiPragma),
    Import(UiImport),
}

/// `pragma Singleton`
#[derive(Debug, Clone, PartialEq)]
pub struct UiPragma {
    pub pragma_token: Span,
    pub name_token: Span,
    pub semicolon_token: Option<Span>,
}

/// What an import names: a dotted module uri or a quoted file/directory path
#[derive(Debug, Clone, PartialEq)]
pub enum ImportTarget {
    Uri(UiQualifiedId),
    File(Span),
}

/// `import QtQuick.Controls 2.15 as Controls`
#[derive(Debug, Clone, PartialEq)]
pub struct UiImport {
    pub import_token: Span,
    pub target: ImportTarget,
    pub version_token: Option<Span>,
    pub as_token: Option<Span>,
    pub import_id_token: Option<Span>,
    pub semicolon_token: Option<Span>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct UiObjectMemberList {
    pub members: Vec<UiObjectMember>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum UiObjectMember {
    ObjectDefinition(UiObjectDefinition),
    ObjectBinding(UiObjectBinding),
    ScriptBinding(UiScriptBinding),
    ArrayBinding(UiArrayBinding),
    PublicMember(Box<UiPublicMember>),
    SourceElement(UiSourceElement),
    EnumDeclaration(UiEnumDeclaration),
}

/// `Rectangle { ... }`
#[derive(Debug, Clone, PartialEq)]
pub struct UiObjectDefinition {
    pub qualified_type_name_id: UiQualifiedId,
    pub initializer: UiObjectInitializer,
}

#[derive(Debug, Clone, PartialEq)]
pub struct UiObjectInitializer {
    pub lbrace_token: Span,
    pub members: Option<UiObjectMemberList>,
    pub rbrace_token: Span,
}

/// `delegate: Text { ... }` or, in its `on` form, `NumberAnimation on x { ... }`.
///
/// In the `on` form the type name comes first in the source and `colon_token`
/// holds the `on` keyword.
#[derive(Debug, Clone, PartialEq)]
pub struct UiObjectBinding {
    pub qualified_id: UiQualifiedId,
    pub colon_token: Span,
    pub qualified_type_name_id: UiQualifiedId,
    pub initializer: UiObjectInitializer,
    pub has_on_token: bool,
}

/// `width: parent.width / 2`
#[derive(Debug, Clone, PartialEq)]
pub struct UiScriptBinding {
    pub qualified_id: UiQualifiedId,
    pub colon_token: Span,
    pub statement: Statement,
}

/// `states: [ State { ... }, State { ... } ]`
#[derive(Debug, Clone, PartialEq)]
pub struct UiArrayBinding {
    pub qualified_id: UiQualifiedId,
    pub colon_token: Span,
    pub lbracket_token: Span,
    pub members: UiArrayMemberList,
    pub rbracket_token: Span,
}

/// Comma separated object definitions; each cell's comma precedes its member
#[derive(Debug, Clone, PartialEq)]
pub struct UiArrayMemberList {
    pub items: Vec<UiArrayMember>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct UiArrayMember {
    pub comma_token: Option<Span>,
    pub member: UiObjectDefinition,
}

/// Dotted identifier chain such as `anchors.fill`; one cell per segment
#[derive(Debug, Clone, PartialEq)]
pub struct UiQualifiedId {
    pub segments: Vec<Span>,
}

impl UiQualifiedId {
    pub fn new(first: Span) -> Self {
        Self {
            segments: vec![first],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiPublicMemberType {
    Property,
    Signal,
}

/// `default readonly property list<Item> content: ...` or `signal moved(int x, int y)`
#[derive(Debug, Clone, PartialEq)]
pub struct UiPublicMember {
    pub member_type: UiPublicMemberType,
    pub default_token: Option<Span>,
    pub readonly_token: Option<Span>,
    /// The `property` or `signal` keyword
    pub property_token: Span,
    pub type_modifier_token: Option<Span>,
    pub lt_token: Option<Span>,
    pub type_token: Option<Span>,
    pub gt_token: Option<Span>,
    pub identifier_token: Span,
    pub lparen_token: Option<Span>,
    pub parameters: Option<UiParameterList>,
    pub rparen_token: Option<Span>,
    pub colon_token: Option<Span>,
    pub statement: Option<Statement>,
    pub binding: Option<UiObjectDefinition>,
    pub semicolon_token: Option<Span>,
}

/// Signal parameters; each cell's comma precedes its parameter
#[derive(Debug, Clone, PartialEq)]
pub struct UiParameterList {
    pub items: Vec<UiParameter>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct UiParameter {
    pub comma_token: Option<Span>,
    pub type_token: Option<Span>,
    pub identifier_token: Span,
}

/// JavaScript declared directly inside an object
#[derive(Debug, Clone, PartialEq)]
pub struct UiSourceElement {
    pub source_element: SourceElement,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SourceElement {
    Function(Box<Function>),
    Variable(VariableStatement),
}

/// `enum Color { Red, Green = 2 }`
#[derive(Debug, Clone, PartialEq)]
pub struct UiEnumDeclaration {
    pub enum_token: Span,
    pub name_token: Span,
    pub lbrace_token: Span,
    pub members: Option<UiEnumMemberList>,
    pub rbrace_token: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct UiEnumMemberList {
    pub items: Vec<UiEnumMember>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct UiEnumMember {
    pub member_token: Span,
    pub equal_token: Option<Span>,
    pub value_token: Option<Span>,
    pub comma_token: Option<Span>,
}
