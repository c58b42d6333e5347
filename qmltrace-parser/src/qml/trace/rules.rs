//! Per-kind visiting order
//!
//! [`expand`] lists, for one node, the symbols of its production left to right:
//! tokens, children, synthetic separators. The engine takes care of Enter/Exit
//! and depth.

use crate::qml::ast::*;

/// One pending unit of work for the engine
#[derive(Debug, Clone, Copy)]
pub(super) enum Step<'a> {
    Node(NodeRef<'a>),
    Token(Span),
    Separator(&'static str),
    Exit(NodeKind),
}

struct Visit<'v, 'a> {
    steps: &'v mut Vec<Step<'a>>,
}

impl<'a> Visit<'_, 'a> {
    fn token(&mut self, span: Span) -> &mut Self {
        self.steps.push(Step::Token(span));
        self
    }

    fn optional_token(&mut self, span: Option<Span>) -> &mut Self {
        if let Some(span) = span {
            self.token(span);
        }
        self
    }

    fn child(&mut self, node: impl Into<NodeRef<'a>>) -> &mut Self {
        self.steps.push(Step::Node(node.into()));
        self
    }

    fn optional_child<T>(&mut self, node: Option<&'a T>) -> &mut Self
    where
        &'a T: Into<NodeRef<'a>>,
    {
        if let Some(node) = node {
            self.child(node);
        }
        self
    }

    fn separator(&mut self, text: &'static str) -> &mut Self {
        self.steps.push(Step::Separator(text));
        self
    }
}

/// Appends the production of `node` to `steps`, in source order
pub(super) fn expand<'a>(node: NodeRef<'a>, steps: &mut Vec<Step<'a>>) {
    let mut v = Visit { steps };
    match node {
        // QML
        NodeRef::UiProgram(program) => {
            v.optional_child(program.headers.as_ref())
                .optional_child(program.members.as_ref());
        }
        NodeRef::UiHeaderItemList(list) => {
            for item in &list.items {
                v.child(item);
            }
        }
        NodeRef::UiPragma(pragma) => {
            v.token(pragma.pragma_token)
                .token(pragma.name_token)
                .optional_token(pragma.semicolon_token);
        }
        NodeRef::UiImport(import) => {
            v.token(import.import_token);
            match &import.target {
                ImportTarget::Uri(uri) => v.child(uri),
                ImportTarget::File(file) => v.token(*file),
            };
            v.optional_token(import.version_token)
                .optional_token(import.as_token)
                .optional_token(import.import_id_token)
                .optional_token(import.semicolon_token);
        }
        NodeRef::UiObjectMemberList(list) => {
            for member in &list.members {
                v.child(member);
            }
        }
        NodeRef::UiObjectDefinition(definition) => {
            v.child(&definition.qualified_type_name_id)
                .child(&definition.initializer);
        }
        NodeRef::UiObjectInitializer(initializer) => {
            v.token(initializer.lbrace_token)
                .optional_child(initializer.members.as_ref())
                .token(initializer.rbrace_token);
        }
        NodeRef::UiObjectBinding(binding) if binding.has_on_token => {
            v.child(&binding.qualified_type_name_id)
                .token(binding.colon_token)
                .child(&binding.qualified_id)
                .child(&binding.initializer);
        }
        NodeRef::UiObjectBinding(binding) => {
            v.child(&binding.qualified_id)
                .token(binding.colon_token)
                .child(&binding.qualified_type_name_id)
                .child(&binding.initializer);
        }
        NodeRef::UiScriptBinding(binding) => {
            v.child(&binding.qualified_id)
                .token(binding.colon_token)
                .child(&binding.statement);
        }
        NodeRef::UiArrayBinding(binding) => {
            v.child(&binding.qualified_id)
                .token(binding.colon_token)
                .token(binding.lbracket_token)
                .child(&binding.members)
                .token(binding.rbracket_token);
        }
        NodeRef::UiArrayMemberList(list, index) => {
            if let Some(item) = list.items.get(index) {
                v.optional_token(item.comma_token).child(&item.member);
            }
            if index + 1 < list.items.len() {
                v.child(NodeRef::UiArrayMemberList(list, index + 1));
            }
        }
        NodeRef::UiQualifiedId(id, index) => {
            if let Some(segment) = id.segments.get(index) {
                v.token(*segment);
            }
            if index + 1 < id.segments.len() {
                v.separator(".")
                    .child(NodeRef::UiQualifiedId(id, index + 1));
            }
        }
        NodeRef::UiPublicMember(member) => {
            v.optional_token(member.default_token)
                .optional_token(member.readonly_token)
                .token(member.property_token)
                .optional_token(member.type_modifier_token)
                .optional_token(member.lt_token)
                .optional_token(member.type_token)
                .optional_token(member.gt_token)
                .token(member.identifier_token)
                .optional_token(member.lparen_token)
                .optional_child(member.parameters.as_ref())
                .optional_token(member.rparen_token)
                .optional_token(member.colon_token)
                .optional_child(member.statement.as_ref())
                .optional_child(member.binding.as_ref())
                .optional_token(member.semicolon_token);
        }
        NodeRef::UiParameterList(list, index) => {
            if let Some(parameter) = list.items.get(index) {
                v.optional_token(parameter.comma_token)
                    .optional_token(parameter.type_token)
                    .token(parameter.identifier_token);
            }
            if index + 1 < list.items.len() {
                v.child(NodeRef::UiParameterList(list, index + 1));
            }
        }
        NodeRef::UiSourceElement(element) => {
            v.child(&element.source_element);
        }
        NodeRef::UiEnumDeclaration(declaration) => {
            v.token(declaration.enum_token)
                .token(declaration.name_token)
                .token(declaration.lbrace_token)
                .optional_child(declaration.members.as_ref())
                .token(declaration.rbrace_token);
        }
        NodeRef::UiEnumMemberList(list) => {
            for member in &list.items {
                v.token(member.member_token)
                    .optional_token(member.equal_token)
                    .optional_token(member.value_token)
                    .optional_token(member.comma_token);
            }
        }
        NodeRef::Program(program) => {
            v.optional_child(program.statements.as_ref());
        }

        // Single-token expressions
        NodeRef::ThisExpression(span)
        | NodeRef::IdentifierExpression(span)
        | NodeRef::NullExpression(span)
        | NodeRef::TrueLiteral(span)
        | NodeRef::FalseLiteral(span)
        | NodeRef::NumericLiteral(span)
        | NodeRef::StringLiteral(span)
        | NodeRef::RegExpLiteral(span)
        | NodeRef::IdentifierPropertyName(span)
        | NodeRef::StringLiteralPropertyName(span)
        | NodeRef::NumericLiteralPropertyName(span)
        | NodeRef::EmptyStatement(span) => {
            v.token(span);
        }

        // Expressions
        NodeRef::ArrayPattern(array) => {
            v.token(array.lbracket_token)
                .optional_child(array.elements.as_ref())
                .optional_token(array.comma_token)
                .optional_child(array.elision.as_ref())
                .token(array.rbracket_token);
        }
        NodeRef::PatternElementList(list, index) => {
            if index > 0 {
                v.child(NodeRef::PatternElementList(list, index - 1));
            }
            if let Some(element) = list.items.get(index) {
                v.optional_token(element.comma_token)
                    .optional_child(element.elision.as_ref())
                    .child(&element.expression);
            }
        }
        NodeRef::Elision(elision, index) => {
            if index > 0 {
                v.child(NodeRef::Elision(elision, index - 1));
            }
            if let Some(comma) = elision.commas.get(index) {
                v.token(*comma);
            }
        }
        NodeRef::ObjectPattern(object) => {
            v.token(object.lbrace_token)
                .optional_child(object.properties.as_ref())
                .token(object.rbrace_token);
        }
        NodeRef::PatternPropertyList(list, index) => {
            if let Some(item) = list.items.get(index) {
                v.child(&item.property).optional_token(item.comma_token);
            }
            if index + 1 < list.items.len() {
                v.child(NodeRef::PatternPropertyList(list, index + 1));
            }
        }
        NodeRef::PatternProperty(property) => {
            v.child(&property.name)
                .token(property.colon_token)
                .child(&property.initializer);
        }
        NodeRef::NestedExpression(nested) => {
            v.token(nested.lparen_token)
                .child(&nested.expression)
                .token(nested.rparen_token);
        }
        NodeRef::ArrayMemberExpression(member) => {
            v.child(&member.base)
                .token(member.lbracket_token)
                .child(&member.expression)
                .token(member.rbracket_token);
        }
        NodeRef::FieldMemberExpression(member) => {
            v.child(&member.base)
                .token(member.dot_token)
                .token(member.identifier_token);
        }
        NodeRef::NewMemberExpression(new) => {
            v.token(new.new_token)
                .child(&new.base)
                .token(new.lparen_token)
                .optional_child(new.arguments.as_ref())
                .token(new.rparen_token);
        }
        NodeRef::NewExpression(new) => {
            v.token(new.new_token).child(&new.expression);
        }
        NodeRef::CallExpression(call) => {
            v.child(&call.base)
                .token(call.lparen_token)
                .optional_child(call.arguments.as_ref())
                .token(call.rparen_token);
        }
        NodeRef::ArgumentList(list, index) => {
            if let Some(argument) = list.items.get(index) {
                v.child(&argument.expression)
                    .optional_token(argument.comma_token);
            }
            if index + 1 < list.items.len() {
                v.child(NodeRef::ArgumentList(list, index + 1));
            }
        }
        NodeRef::PostIncrementExpression(postfix) | NodeRef::PostDecrementExpression(postfix) => {
            v.child(&postfix.base).token(postfix.operator_token);
        }
        NodeRef::DeleteExpression(unary)
        | NodeRef::VoidExpression(unary)
        | NodeRef::TypeOfExpression(unary)
        | NodeRef::PreIncrementExpression(unary)
        | NodeRef::PreDecrementExpression(unary)
        | NodeRef::UnaryPlusExpression(unary)
        | NodeRef::UnaryMinusExpression(unary)
        | NodeRef::TildeExpression(unary)
        | NodeRef::NotExpression(unary) => {
            v.token(unary.operator_token).child(&unary.expression);
        }
        NodeRef::BinaryExpression(binary) => {
            v.child(&binary.left)
                .token(binary.operator_token)
                .child(&binary.right);
        }
        NodeRef::ConditionalExpression(conditional) => {
            v.child(&conditional.expression)
                .token(conditional.question_token)
                .child(&conditional.ok)
                .token(conditional.colon_token)
                .child(&conditional.ko);
        }
        NodeRef::Expression(comma) => {
            v.child(&comma.left)
                .token(comma.comma_token)
                .child(&comma.right);
        }
        NodeRef::FunctionExpression(function) | NodeRef::FunctionDeclaration(function) => {
            v.token(function.function_token)
                .optional_token(function.identifier_token)
                .token(function.lparen_token)
                .optional_child(function.formals.as_ref())
                .token(function.rparen_token)
                .token(function.lbrace_token)
                .optional_child(function.body.as_ref())
                .token(function.rbrace_token);
        }

        // Statements
        NodeRef::Block(block) => {
            v.token(block.lbrace_token)
                .optional_child(block.statements.as_ref())
                .token(block.rbrace_token);
        }
        NodeRef::StatementList(list) => {
            for statement in &list.statements {
                v.child(statement);
            }
        }
        NodeRef::VariableStatement(statement) => {
            v.token(statement.declaration_kind_token)
                .child(&statement.declarations)
                .optional_token(statement.semicolon_token);
        }
        NodeRef::VariableDeclarationList(list, index) => {
            if let Some(item) = list.items.get(index) {
                v.child(&item.declaration)
                    .optional_token(item.comma_token);
            }
            if index + 1 < list.items.len() {
                v.child(NodeRef::VariableDeclarationList(list, index + 1));
            }
        }
        NodeRef::PatternElement(element) => {
            v.token(element.identifier_token)
                .optional_token(element.equal_token)
                .optional_child(element.initializer.as_ref());
        }
        NodeRef::ExpressionStatement(statement) => {
            v.child(&statement.expression)
                .optional_token(statement.semicolon_token);
        }
        NodeRef::IfStatement(statement) => {
            v.token(statement.if_token)
                .token(statement.lparen_token)
                .child(&statement.expression)
                .token(statement.rparen_token)
                .child(&statement.ok);
            if let Some(else_branch) = &statement.else_branch {
                v.token(else_branch.else_token).child(&else_branch.ko);
            }
        }
        NodeRef::DoWhileStatement(statement) => {
            v.token(statement.do_token)
                .child(&statement.statement)
                .token(statement.while_token)
                .token(statement.lparen_token)
                .child(&statement.expression)
                .token(statement.rparen_token)
                .optional_token(statement.semicolon_token);
        }
        NodeRef::WhileStatement(statement) => {
            v.token(statement.while_token)
                .token(statement.lparen_token)
                .child(&statement.expression)
                .token(statement.rparen_token)
                .child(&statement.statement);
        }
        NodeRef::ForStatement(statement) => {
            v.token(statement.for_token)
                .token(statement.lparen_token)
                .optional_child(statement.initialiser.as_ref())
                .token(statement.first_semicolon_token)
                .optional_child(statement.condition.as_ref())
                .token(statement.second_semicolon_token)
                .optional_child(statement.expression.as_ref())
                .token(statement.rparen_token)
                .child(&statement.statement);
        }
        NodeRef::ForEachStatement(statement) => {
            v.token(statement.for_token)
                .token(statement.lparen_token)
                .child(&statement.target)
                .token(statement.in_of_token)
                .child(&statement.expression)
                .token(statement.rparen_token)
                .child(&statement.statement);
        }
        NodeRef::ContinueStatement(jump) | NodeRef::BreakStatement(jump) => {
            v.token(jump.keyword_token)
                .optional_token(jump.label_token)
                .optional_token(jump.semicolon_token);
        }
        NodeRef::ReturnStatement(statement) => {
            v.token(statement.return_token)
                .optional_child(statement.expression.as_ref())
                .optional_token(statement.semicolon_token);
        }
        NodeRef::WithStatement(statement) => {
            v.token(statement.with_token)
                .token(statement.lparen_token)
                .child(&statement.expression)
                .token(statement.rparen_token)
                .child(&statement.statement);
        }
        NodeRef::SwitchStatement(statement) => {
            v.token(statement.switch_token)
                .token(statement.lparen_token)
                .child(&statement.expression)
                .token(statement.rparen_token)
                .child(&statement.block);
        }
        NodeRef::CaseBlock(block) => {
            v.token(block.lbrace_token)
                .optional_child(block.clauses.as_ref())
                .optional_child(block.default_clause.as_ref())
                .optional_child(block.more_clauses.as_ref())
                .token(block.rbrace_token);
        }
        NodeRef::CaseClauses(clauses) => {
            for clause in &clauses.clauses {
                v.child(clause);
            }
        }
        NodeRef::CaseClause(clause) => {
            v.token(clause.case_token)
                .child(&clause.expression)
                .token(clause.colon_token)
                .optional_child(clause.statements.as_ref());
        }
        NodeRef::DefaultClause(clause) => {
            v.token(clause.default_token)
                .token(clause.colon_token)
                .optional_child(clause.statements.as_ref());
        }
        NodeRef::LabelledStatement(statement) => {
            v.token(statement.identifier_token)
                .token(statement.colon_token)
                .child(&statement.statement);
        }
        NodeRef::ThrowStatement(statement) => {
            v.token(statement.throw_token)
                .child(&statement.expression)
                .optional_token(statement.semicolon_token);
        }
        NodeRef::TryStatement(statement) => {
            v.token(statement.try_token)
                .child(&statement.statement)
                .optional_child(statement.catch.as_ref())
                .optional_child(statement.finally.as_ref());
        }
        NodeRef::Catch(catch) => {
            v.token(catch.catch_token)
                .token(catch.lparen_token)
                .token(catch.identifier_token)
                .token(catch.rparen_token)
                .child(&catch.statement);
        }
        NodeRef::Finally(finally) => {
            v.token(finally.finally_token).child(&finally.statement);
        }
        NodeRef::FormalParameterList(list) => {
            for parameter in &list.items {
                v.child(&parameter.element)
                    .optional_token(parameter.comma_token);
            }
        }
        NodeRef::DebuggerStatement(statement) => {
            v.token(statement.debugger_token)
                .optional_token(statement.semicolon_token);
        }
    }
}
