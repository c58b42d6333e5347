//! QML grammar: header items, object definitions, bindings and member declarations

use super::parser::{ParseResult, Parser, STATEMENT_WEIGHT};
use crate::qml::ast::*;
use crate::qml::lexing::Token;

impl<'s> Parser<'s> {
    pub fn parse_ui_program(&mut self) -> ParseResult<UiProgram> {
        let headers = self.parse_header_items()?;
        let root = self.parse_object_definition()?;
        self.finish()?;
        Ok(UiProgram {
            headers,
            members: Some(UiObjectMemberList {
                members: vec![UiObjectMember::ObjectDefinition(root)],
            }),
        })
    }

    fn parse_header_items(&mut self) -> ParseResult<Option<UiHeaderItemList>> {
        let mut items = Vec::new();
        loop {
            if self.at_word(0, "import") {
                items.push(UiHeaderItem::Import(self.parse_import()?));
            } else if self.at_word(0, "pragma") {
                items.push(UiHeaderItem::Pragma(self.parse_pragma()?));
            } else {
                break;
            }
        }
        Ok((!items.is_empty()).then_some(UiHeaderItemList { items }))
    }

    fn parse_import(&mut self) -> ParseResult<UiImport> {
        let import_token = self.bump()?;
        let target = if self.at(Token::String) {
            ImportTarget::File(self.bump()?)
        } else if self.at(Token::Identifier) {
            ImportTarget::Uri(self.parse_qualified_id()?)
        } else {
            return Err(self.unexpected());
        };
        let version_token = self.eat(Token::Number)?;
        let (as_token, import_id_token) = if self.at_word(0, "as") {
            let as_token = self.bump()?;
            (Some(as_token), Some(self.expect(Token::Identifier)?))
        } else {
            (None, None)
        };
        let semicolon_token = self.consume_semicolon()?;
        Ok(UiImport {
            import_token,
            target,
            version_token,
            as_token,
            import_id_token,
            semicolon_token,
        })
    }

    fn parse_pragma(&mut self) -> ParseResult<UiPragma> {
        let pragma_token = self.bump()?;
        let name_token = self.expect(Token::Identifier)?;
        let semicolon_token = self.consume_semicolon()?;
        Ok(UiPragma {
            pragma_token,
            name_token,
            semicolon_token,
        })
    }

    pub(super) fn parse_qualified_id(&mut self) -> ParseResult<UiQualifiedId> {
        let mut id = UiQualifiedId::new(self.expect(Token::Identifier)?);
        while self.at(Token::Dot) && self.peek_token(1) == Some(Token::Identifier) {
            self.bump()?;
            id.segments.push(self.bump()?);
        }
        Ok(id)
    }

    /// Whether a qualified id starting at lookahead `n` is followed by `{`.
    /// With `type_name` set the last segment must also start with an uppercase letter.
    fn qualified_id_then_brace(&mut self, mut n: usize, type_name: bool) -> bool {
        if self.peek_token(n) != Some(Token::Identifier) {
            return false;
        }
        while self.peek_token(n + 1) == Some(Token::Dot)
            && self.peek_token(n + 2) == Some(Token::Identifier)
        {
            n += 2;
        }
        let uppercase = self
            .peek_text(n)
            .and_then(|text| text.chars().next())
            .is_some_and(char::is_uppercase);
        self.peek_token(n + 1) == Some(Token::LeftBrace) && (uppercase || !type_name)
    }

    fn parse_object_definition(&mut self) -> ParseResult<UiObjectDefinition> {
        let qualified_type_name_id = self.parse_qualified_id()?;
        let initializer = self.parse_object_initializer()?;
        Ok(UiObjectDefinition {
            qualified_type_name_id,
            initializer,
        })
    }

    fn parse_object_initializer(&mut self) -> ParseResult<UiObjectInitializer> {
        let lbrace_token = self.expect(Token::LeftBrace)?;
        let mut members = Vec::new();
        while !self.at(Token::RightBrace) {
            if self.peek_token(0).is_none() {
                return Err(self.expected(Token::RightBrace));
            }
            members.push(self.parse_object_member()?);
        }
        let rbrace_token = self.bump()?;
        Ok(UiObjectInitializer {
            lbrace_token,
            members: (!members.is_empty()).then_some(UiObjectMemberList { members }),
            rbrace_token,
        })
    }

    fn parse_object_member(&mut self) -> ParseResult<UiObjectMember> {
        self.nested(STATEMENT_WEIGHT, |p| p.parse_object_member_inner())
    }

    fn parse_object_member_inner(&mut self) -> ParseResult<UiObjectMember> {
        if self.at_public_member() {
            return Ok(UiObjectMember::PublicMember(Box::new(
                self.parse_public_member()?,
            )));
        }
        match self.peek_token(0) {
            Some(Token::Function) => {
                let function = self.parse_function(true)?;
                return Ok(UiObjectMember::SourceElement(UiSourceElement {
                    source_element: SourceElement::Function(Box::new(function)),
                }));
            }
            Some(token) if token.is_declaration_kind() => {
                let statement = self.parse_variable_statement(false)?;
                return Ok(UiObjectMember::SourceElement(UiSourceElement {
                    source_element: SourceElement::Variable(statement),
                }));
            }
            Some(Token::Identifier) => {}
            _ => return Err(self.unexpected()),
        }
        if self.at_word(0, "enum")
            && self.peek_token(1) == Some(Token::Identifier)
            && self.peek_token(2) == Some(Token::LeftBrace)
        {
            return Ok(UiObjectMember::EnumDeclaration(
                self.parse_enum_declaration()?,
            ));
        }

        let qualified_id = self.parse_qualified_id()?;
        match self.peek_token(0) {
            Some(Token::LeftBrace) => {
                let initializer = self.parse_object_initializer()?;
                Ok(UiObjectMember::ObjectDefinition(UiObjectDefinition {
                    qualified_type_name_id: qualified_id,
                    initializer,
                }))
            }
            Some(Token::Identifier) if self.at_word(0, "on") => {
                let on_token = self.bump()?;
                let target = self.parse_qualified_id()?;
                let initializer = self.parse_object_initializer()?;
                Ok(UiObjectMember::ObjectBinding(UiObjectBinding {
                    qualified_id: target,
                    colon_token: on_token,
                    qualified_type_name_id: qualified_id,
                    initializer,
                    has_on_token: true,
                }))
            }
            Some(Token::Colon) => {
                let colon_token = self.bump()?;
                self.parse_binding_rhs(qualified_id, colon_token)
            }
            _ => Err(self.expected(Token::Colon)),
        }
    }

    fn parse_binding_rhs(
        &mut self,
        qualified_id: UiQualifiedId,
        colon_token: Span,
    ) -> ParseResult<UiObjectMember> {
        if self.qualified_id_then_brace(0, true) {
            let type_name = self.parse_qualified_id()?;
            let initializer = self.parse_object_initializer()?;
            return Ok(UiObjectMember::ObjectBinding(UiObjectBinding {
                qualified_id,
                colon_token,
                qualified_type_name_id: type_name,
                initializer,
                has_on_token: false,
            }));
        }
        if self.at(Token::LeftBracket) && self.qualified_id_then_brace(1, false) {
            let lbracket_token = self.bump()?;
            let mut items = vec![UiArrayMember {
                comma_token: None,
                member: self.parse_object_definition()?,
            }];
            while let Some(comma_token) = self.eat(Token::Comma)? {
                items.push(UiArrayMember {
                    comma_token: Some(comma_token),
                    member: self.parse_object_definition()?,
                });
            }
            let rbracket_token = self.expect(Token::RightBracket)?;
            return Ok(UiObjectMember::ArrayBinding(UiArrayBinding {
                qualified_id,
                colon_token,
                lbracket_token,
                members: UiArrayMemberList { items },
                rbracket_token,
            }));
        }
        let statement = self.parse_binding_statement()?;
        Ok(UiObjectMember::ScriptBinding(UiScriptBinding {
            qualified_id,
            colon_token,
            statement,
        }))
    }

    /// Right-hand side of a script binding: a block, a compound statement or an expression
    fn parse_binding_statement(&mut self) -> ParseResult<Statement> {
        match self.peek_token(0) {
            Some(
                Token::LeftBrace
                | Token::If
                | Token::Switch
                | Token::Try
                | Token::With
                | Token::For
                | Token::While
                | Token::Do,
            ) => self.parse_statement(),
            _ => Ok(Statement::Expression(self.parse_expression_statement()?)),
        }
    }

    fn at_public_member(&mut self) -> bool {
        let property_follows = |p: &mut Self, n: usize| {
            (p.at_word(n, "property") || p.at_word(n, "signal"))
                && p.peek_token(n + 1).is_some_and(|t| t.is_identifier_name())
        };
        if self.at(Token::Default) {
            return property_follows(self, 1)
                || (self.at_word(1, "readonly") && property_follows(self, 2));
        }
        if self.at_word(0, "readonly") {
            return property_follows(self, 1);
        }
        property_follows(self, 0)
    }

    fn parse_public_member(&mut self) -> ParseResult<UiPublicMember> {
        let default_token = self.eat(Token::Default)?;
        let readonly_token = if self.at_word(0, "readonly") {
            Some(self.bump()?)
        } else {
            None
        };
        let member_type = if self.at_word(0, "signal") {
            UiPublicMemberType::Signal
        } else {
            UiPublicMemberType::Property
        };
        let property_token = self.bump()?;
        let mut member = UiPublicMember {
            member_type,
            default_token,
            readonly_token,
            property_token,
            type_modifier_token: None,
            lt_token: None,
            type_token: None,
            gt_token: None,
            identifier_token: Span::default(),
            lparen_token: None,
            parameters: None,
            rparen_token: None,
            colon_token: None,
            statement: None,
            binding: None,
            semicolon_token: None,
        };

        if member_type == UiPublicMemberType::Signal {
            member.identifier_token = self.expect(Token::Identifier)?;
            if let Some(lparen_token) = self.eat(Token::LeftParen)? {
                member.lparen_token = Some(lparen_token);
                member.parameters = self.parse_signal_parameters()?;
                member.rparen_token = Some(self.expect(Token::RightParen)?);
            }
            member.semicolon_token = self.consume_semicolon()?;
            return Ok(member);
        }

        if self.at_word(0, "list") && self.peek_token(1) == Some(Token::Lt) {
            member.type_modifier_token = Some(self.bump()?);
            member.lt_token = Some(self.bump()?);
            member.type_token = Some(self.parse_type_name()?);
            member.gt_token = Some(self.expect(Token::Gt)?);
        } else {
            member.type_token = Some(self.parse_type_name()?);
        }
        member.identifier_token = self.expect(Token::Identifier)?;

        match self.eat(Token::Colon)? {
            Some(colon_token) => {
                member.colon_token = Some(colon_token);
                if self.qualified_id_then_brace(0, true) {
                    member.binding = Some(self.parse_object_definition()?);
                } else {
                    member.statement = Some(self.parse_binding_statement()?);
                }
            }
            None => member.semicolon_token = self.consume_semicolon()?,
        }
        Ok(member)
    }

    fn parse_type_name(&mut self) -> ParseResult<Span> {
        match self.peek_token(0) {
            Some(token) if token.is_identifier_name() => self.bump(),
            _ => Err(self.expected(Token::Identifier)),
        }
    }

    /// `(int x, string y)`; the parameter type may be left out
    fn parse_signal_parameters(&mut self) -> ParseResult<Option<UiParameterList>> {
        let mut items = Vec::new();
        let mut comma_token = None;
        while !self.at(Token::RightParen) {
            let (type_token, identifier_token) =
                if self.peek_token(1) == Some(Token::Identifier) {
                    (Some(self.parse_type_name()?), self.bump()?)
                } else {
                    (None, self.expect(Token::Identifier)?)
                };
            items.push(UiParameter {
                comma_token,
                type_token,
                identifier_token,
            });
            comma_token = self.eat(Token::Comma)?;
            if comma_token.is_none() {
                break;
            }
        }
        Ok((!items.is_empty()).then_some(UiParameterList { items }))
    }

    fn parse_enum_declaration(&mut self) -> ParseResult<UiEnumDeclaration> {
        let enum_token = self.bump()?;
        let name_token = self.expect(Token::Identifier)?;
        let lbrace_token = self.expect(Token::LeftBrace)?;
        let mut items = Vec::new();
        while self.at(Token::Identifier) {
            let member_token = self.bump()?;
            let (equal_token, value_token) = match self.eat(Token::Equal)? {
                Some(equal_token) => (Some(equal_token), Some(self.expect(Token::Number)?)),
                None => (None, None),
            };
            let comma_token = self.eat(Token::Comma)?;
            let last = comma_token.is_none();
            items.push(UiEnumMember {
                member_token,
                equal_token,
                value_token,
                comma_token,
            });
            if last {
                break;
            }
        }
        let rbrace_token = self.expect(Token::RightBrace)?;
        Ok(UiEnumDeclaration {
            enum_token,
            name_token,
            lbrace_token,
            members: (!items.is_empty()).then_some(UiEnumMemberList { items }),
            rbrace_token,
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::qml::ast::*;
    use crate::qml::parsing::parse_qml;

    fn root_members(program: &UiProgram) -> &[UiObjectMember] {
        let Some(UiObjectMemberList { members }) = &program.members else {
            panic!("no root object");
        };
        let UiObjectMember::ObjectDefinition(root) = &members[0] else {
            panic!("root is not an object definition");
        };
        root.initializer
            .members
            .as_ref()
            .map(|list| list.members.as_slice())
            .unwrap_or_default()
    }

    #[test]
    fn test_imports_and_pragmas() {
        let program = parse_qml(
            "pragma Singleton\nimport QtQuick 2.15\nimport \"js\" as Js;\nimport QtQuick.Controls as C\nQtObject {}",
        )
        .unwrap();
        let items = &program.headers.as_ref().unwrap().items;
        assert_eq!(items.len(), 4);
        assert!(matches!(items[0], UiHeaderItem::Pragma(_)));
        let UiHeaderItem::Import(file) = &items[2] else {
            panic!("expected import");
        };
        assert!(matches!(file.target, ImportTarget::File(_)));
        assert!(file.semicolon_token.is_some());
        let UiHeaderItem::Import(controls) = &items[3] else {
            panic!("expected import");
        };
        let ImportTarget::Uri(uri) = &controls.target else {
            panic!("expected uri");
        };
        assert_eq!(uri.segments.len(), 2);
        assert!(controls.version_token.is_none());
        assert!(controls.import_id_token.is_some());
    }

    #[test]
    fn test_member_kinds() {
        let source = r#"Item {
    id: root
    anchors.fill: parent
    Rectangle { color: "red" }
    NumberAnimation on x { to: 5 }
    delegate: Text { text: "a" }
    states: [ State { name: "a" }, State { name: "b" } ]
    property int count: 0
    default property list<Item> content
    readonly property var obj: QtObject {}
    signal moved(int dx, real dy)
    function f(a, b) { return a + b }
    var cache
    enum Color { Red, Green = 2 }
    onClicked: { count++ }
}"#;
        let program = parse_qml(source).unwrap();
        let members = root_members(&program);
        let kinds: Vec<&str> = members
            .iter()
            .map(|m| match m {
                UiObjectMember::ObjectDefinition(_) => "definition",
                UiObjectMember::ObjectBinding(b) if b.has_on_token => "on",
                UiObjectMember::ObjectBinding(_) => "object",
                UiObjectMember::ScriptBinding(_) => "script",
                UiObjectMember::ArrayBinding(_) => "array",
                UiObjectMember::PublicMember(_) => "public",
                UiObjectMember::SourceElement(_) => "source",
                UiObjectMember::EnumDeclaration(_) => "enum",
            })
            .collect();
        assert_eq!(
            kinds,
            vec![
                "script", "script", "definition", "on", "object", "array", "public", "public",
                "public", "public", "source", "source", "enum", "script"
            ]
        );
    }

    #[test]
    fn test_public_member_tokens() {
        let program = parse_qml("Item { default property list<Item> content }").unwrap();
        let UiObjectMember::PublicMember(member) = &root_members(&program)[0] else {
            panic!("expected public member");
        };
        assert!(member.default_token.is_some());
        assert!(member.type_modifier_token.is_some());
        assert!(member.lt_token.is_some() && member.gt_token.is_some());
        assert!(member.colon_token.is_none());
    }

    #[test]
    fn test_property_named_like_a_keyword_is_a_binding() {
        let program = parse_qml("Item { property: 1; signal: 2 }").unwrap();
        assert!(root_members(&program)
            .iter()
            .all(|m| matches!(m, UiObjectMember::ScriptBinding(_))));
    }

    #[test]
    fn test_lowercase_type_is_a_script_binding_error() {
        assert!(parse_qml("Item { x: foo { } }").is_err());
    }

    #[test]
    fn test_root_object_required() {
        assert!(parse_qml("import QtQuick 2.0").is_err());
        assert!(parse_qml("Item {} Item {}").is_err());
    }

    #[test]
    fn test_unclosed_object() {
        let err = parse_qml("Item {\n  id: a\n").unwrap_err();
        assert_eq!(err.to_string(), "3:1: Expected token `}'");
    }
}
