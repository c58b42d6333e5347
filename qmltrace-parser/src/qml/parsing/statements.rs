//! JavaScript statements

use super::parser::{ParseResult, Parser, STATEMENT_WEIGHT};
use crate::qml::ast::*;
use crate::qml::lexing::Token;

impl<'s> Parser<'s> {
    pub fn parse_program(&mut self) -> ParseResult<Program> {
        let mut statements = Vec::new();
        while self.peek_token(0).is_some() {
            statements.push(self.parse_statement()?);
        }
        self.finish()?;
        Ok(Program {
            statements: (!statements.is_empty()).then_some(StatementList { statements }),
        })
    }

    /// Statements up to (not including) a `}`, `case` or `default`
    fn parse_statement_list(&mut self) -> ParseResult<Option<StatementList>> {
        let mut statements = Vec::new();
        while !matches!(
            self.peek_token(0),
            None | Some(Token::RightBrace | Token::Case | Token::Default)
        ) {
            statements.push(self.parse_statement()?);
        }
        Ok((!statements.is_empty()).then_some(StatementList { statements }))
    }

    pub(super) fn parse_statement(&mut self) -> ParseResult<Statement> {
        self.nested(STATEMENT_WEIGHT, |p| p.parse_statement_inner())
    }

    fn parse_statement_inner(&mut self) -> ParseResult<Statement> {
        let Some(token) = self.peek_token(0) else {
            return Err(self.unexpected());
        };
        let statement = match token {
            Token::LeftBrace => Statement::Block(self.parse_block()?),
            Token::Var | Token::Let | Token::Const => {
                Statement::Variable(self.parse_variable_statement(false)?)
            }
            Token::Semicolon => Statement::Empty(self.bump()?),
            Token::If => Statement::If(Box::new(self.parse_if()?)),
            Token::Do => Statement::DoWhile(Box::new(self.parse_do_while()?)),
            Token::While => Statement::While(Box::new(self.parse_while()?)),
            Token::For => self.parse_for()?,
            Token::Continue => Statement::Continue(self.parse_jump()?),
            Token::Break => Statement::Break(self.parse_jump()?),
            Token::Return => Statement::Return(self.parse_return()?),
            Token::With => Statement::With(Box::new(self.parse_with()?)),
            Token::Switch => Statement::Switch(Box::new(self.parse_switch()?)),
            Token::Throw => Statement::Throw(self.parse_throw()?),
            Token::Try => Statement::Try(Box::new(self.parse_try()?)),
            Token::Debugger => {
                let debugger_token = self.bump()?;
                let semicolon_token = self.consume_semicolon()?;
                Statement::Debugger(DebuggerStatement {
                    debugger_token,
                    semicolon_token,
                })
            }
            Token::Function => Statement::FunctionDeclaration(Box::new(self.parse_function(true)?)),
            Token::Identifier if self.peek_token(1) == Some(Token::Colon) => {
                let identifier_token = self.bump()?;
                let colon_token = self.bump()?;
                let statement = self.parse_statement()?;
                Statement::Labelled(Box::new(LabelledStatement {
                    identifier_token,
                    colon_token,
                    statement,
                }))
            }
            _ => Statement::Expression(self.parse_expression_statement()?),
        };
        Ok(statement)
    }

    pub(super) fn parse_block(&mut self) -> ParseResult<Block> {
        let lbrace_token = self.expect(Token::LeftBrace)?;
        let statements = self.parse_statement_list()?;
        let rbrace_token = self.expect(Token::RightBrace)?;
        Ok(Block {
            lbrace_token,
            statements,
            rbrace_token,
        })
    }

    pub(super) fn parse_expression_statement(&mut self) -> ParseResult<ExpressionStatement> {
        let expression = self.parse_expression(false)?;
        let semicolon_token = self.consume_semicolon()?;
        Ok(ExpressionStatement {
            expression,
            semicolon_token,
        })
    }

    pub(super) fn parse_variable_statement(
        &mut self,
        no_in: bool,
    ) -> ParseResult<VariableStatement> {
        let mut statement = self.parse_variable_declarations(no_in)?;
        statement.semicolon_token = self.consume_semicolon()?;
        Ok(statement)
    }

    /// `var a = 1, b` without the terminating semicolon
    fn parse_variable_declarations(&mut self, no_in: bool) -> ParseResult<VariableStatement> {
        let declaration_kind_token = self.bump()?;
        let mut items = Vec::new();
        loop {
            let declaration = self.parse_pattern_element(no_in)?;
            let comma_token = self.eat(Token::Comma)?;
            let last = comma_token.is_none();
            items.push(VariableDeclaration {
                declaration,
                comma_token,
            });
            if last {
                break;
            }
        }
        Ok(VariableStatement {
            declaration_kind_token,
            declarations: VariableDeclarationList { items },
            semicolon_token: None,
        })
    }

    /// `name` or `name = initializer`
    pub(super) fn parse_pattern_element(&mut self, no_in: bool) -> ParseResult<PatternElement> {
        let identifier_token = self.expect(Token::Identifier)?;
        let (equal_token, initializer) = match self.eat(Token::Equal)? {
            Some(equal_token) => (Some(equal_token), Some(self.parse_assignment(no_in)?)),
            None => (None, None),
        };
        Ok(PatternElement {
            identifier_token,
            equal_token,
            initializer,
        })
    }

    fn parse_condition(&mut self) -> ParseResult<(Span, Expression, Span)> {
        let lparen_token = self.expect(Token::LeftParen)?;
        let expression = self.parse_expression(false)?;
        let rparen_token = self.expect(Token::RightParen)?;
        Ok((lparen_token, expression, rparen_token))
    }

    fn parse_if(&mut self) -> ParseResult<IfStatement> {
        let if_token = self.bump()?;
        let (lparen_token, expression, rparen_token) = self.parse_condition()?;
        let ok = self.parse_statement()?;
        let else_branch = match self.eat(Token::Else)? {
            Some(else_token) => Some(ElseBranch {
                else_token,
                ko: self.parse_statement()?,
            }),
            None => None,
        };
        Ok(IfStatement {
            if_token,
            lparen_token,
            expression,
            rparen_token,
            ok,
            else_branch,
        })
    }

    fn parse_do_while(&mut self) -> ParseResult<DoWhileStatement> {
        let do_token = self.bump()?;
        let statement = self.parse_statement()?;
        let while_token = self.expect(Token::While)?;
        let (lparen_token, expression, rparen_token) = self.parse_condition()?;
        // The semicolon after `do ... while (...)` is always optional
        let semicolon_token = self.eat(Token::Semicolon)?;
        Ok(DoWhileStatement {
            do_token,
            statement,
            while_token,
            lparen_token,
            expression,
            rparen_token,
            semicolon_token,
        })
    }

    fn parse_while(&mut self) -> ParseResult<WhileStatement> {
        let while_token = self.bump()?;
        let (lparen_token, expression, rparen_token) = self.parse_condition()?;
        let statement = self.parse_statement()?;
        Ok(WhileStatement {
            while_token,
            lparen_token,
            expression,
            rparen_token,
            statement,
        })
    }

    fn at_in_or_of(&mut self) -> bool {
        self.at(Token::In) || self.at_word(0, "of")
    }

    fn parse_for(&mut self) -> ParseResult<Statement> {
        let for_token = self.bump()?;
        let lparen_token = self.expect(Token::LeftParen)?;

        let initialiser = match self.peek_token(0) {
            Some(Token::Semicolon) => None,
            Some(token) if token.is_declaration_kind() => {
                Some(ForInitialiser::Declarations(self.parse_variable_declarations(true)?))
            }
            _ => Some(ForInitialiser::Expression(self.parse_expression(true)?)),
        };

        if self.at_in_or_of() {
            let target = match initialiser {
                Some(ForInitialiser::Expression(expression)) => ForEachTarget::Expression(expression),
                Some(ForInitialiser::Declarations(statement))
                    if statement.declarations.items.len() == 1 =>
                {
                    ForEachTarget::Declaration(statement)
                }
                _ => return Err(self.expected(Token::Semicolon)),
            };
            let in_of_token = self.bump()?;
            let expression = self.parse_expression(false)?;
            let rparen_token = self.expect(Token::RightParen)?;
            let statement = self.parse_statement()?;
            return Ok(Statement::ForEach(Box::new(ForEachStatement {
                for_token,
                lparen_token,
                target,
                in_of_token,
                expression,
                rparen_token,
                statement,
            })));
        }

        let first_semicolon_token = self.expect(Token::Semicolon)?;
        let condition = if self.at(Token::Semicolon) {
            None
        } else {
            Some(self.parse_expression(false)?)
        };
        let second_semicolon_token = self.expect(Token::Semicolon)?;
        let expression = if self.at(Token::RightParen) {
            None
        } else {
            Some(self.parse_expression(false)?)
        };
        let rparen_token = self.expect(Token::RightParen)?;
        let statement = self.parse_statement()?;
        Ok(Statement::For(Box::new(ForStatement {
            for_token,
            lparen_token,
            initialiser,
            first_semicolon_token,
            condition,
            second_semicolon_token,
            expression,
            rparen_token,
            statement,
        })))
    }

    /// `continue` / `break`; a label must sit on the same line as the keyword
    fn parse_jump(&mut self) -> ParseResult<JumpStatement> {
        let keyword_token = self.bump()?;
        let label_token = if self.at(Token::Identifier) && !self.newline_before() {
            Some(self.bump()?)
        } else {
            None
        };
        let semicolon_token = self.consume_semicolon()?;
        Ok(JumpStatement {
            keyword_token,
            label_token,
            semicolon_token,
        })
    }

    fn at_statement_end(&mut self) -> bool {
        matches!(
            self.peek_token(0),
            None | Some(Token::Semicolon | Token::RightBrace)
        ) || self.newline_before()
    }

    fn parse_return(&mut self) -> ParseResult<ReturnStatement> {
        let return_token = self.bump()?;
        let expression = if self.at_statement_end() {
            None
        } else {
            Some(self.parse_expression(false)?)
        };
        let semicolon_token = self.consume_semicolon()?;
        Ok(ReturnStatement {
            return_token,
            expression,
            semicolon_token,
        })
    }

    fn parse_throw(&mut self) -> ParseResult<ThrowStatement> {
        let throw_token = self.bump()?;
        if self.at_statement_end() {
            return Err(self.unexpected());
        }
        let expression = self.parse_expression(false)?;
        let semicolon_token = self.consume_semicolon()?;
        Ok(ThrowStatement {
            throw_token,
            expression,
            semicolon_token,
        })
    }

    fn parse_with(&mut self) -> ParseResult<WithStatement> {
        let with_token = self.bump()?;
        let (lparen_token, expression, rparen_token) = self.parse_condition()?;
        let statement = self.parse_statement()?;
        Ok(WithStatement {
            with_token,
            lparen_token,
            expression,
            rparen_token,
            statement,
        })
    }

    fn parse_switch(&mut self) -> ParseResult<SwitchStatement> {
        let switch_token = self.bump()?;
        let (lparen_token, expression, rparen_token) = self.parse_condition()?;

        let lbrace_token = self.expect(Token::LeftBrace)?;
        let clauses = self.parse_case_clauses()?;
        let default_clause = match self.eat(Token::Default)? {
            Some(default_token) => {
                let colon_token = self.expect(Token::Colon)?;
                let statements = self.parse_statement_list()?;
                Some(DefaultClause {
                    default_token,
                    colon_token,
                    statements,
                })
            }
            None => None,
        };
        let more_clauses = if default_clause.is_some() {
            self.parse_case_clauses()?
        } else {
            None
        };
        let rbrace_token = self.expect(Token::RightBrace)?;

        Ok(SwitchStatement {
            switch_token,
            lparen_token,
            expression,
            rparen_token,
            block: CaseBlock {
                lbrace_token,
                clauses,
                default_clause,
                more_clauses,
                rbrace_token,
            },
        })
    }

    fn parse_case_clauses(&mut self) -> ParseResult<Option<CaseClauses>> {
        let mut clauses = Vec::new();
        while let Some(case_token) = self.eat(Token::Case)? {
            let expression = self.parse_expression(false)?;
            let colon_token = self.expect(Token::Colon)?;
            let statements = self.parse_statement_list()?;
            clauses.push(CaseClause {
                case_token,
                expression,
                colon_token,
                statements,
            });
        }
        Ok((!clauses.is_empty()).then_some(CaseClauses { clauses }))
    }

    fn parse_try(&mut self) -> ParseResult<TryStatement> {
        let try_token = self.bump()?;
        let statement = self.parse_block()?;
        let catch = match self.eat(Token::Catch)? {
            Some(catch_token) => {
                let lparen_token = self.expect(Token::LeftParen)?;
                let identifier_token = self.expect(Token::Identifier)?;
                let rparen_token = self.expect(Token::RightParen)?;
                let statement = self.parse_block()?;
                Some(Catch {
                    catch_token,
                    lparen_token,
                    identifier_token,
                    rparen_token,
                    statement,
                })
            }
            None => None,
        };
        let finally = match self.eat(Token::Finally)? {
            Some(finally_token) => Some(Finally {
                finally_token,
                statement: self.parse_block()?,
            }),
            None => None,
        };
        if catch.is_none() && finally.is_none() {
            return Err(self.expected(Token::Catch));
        }
        Ok(TryStatement {
            try_token,
            statement,
            catch,
            finally,
        })
    }

    /// `function name(params) { body }`; the name is required for declarations
    pub(super) fn parse_function(&mut self, declaration: bool) -> ParseResult<Function> {
        let function_token = self.bump()?;
        let identifier_token = if declaration {
            Some(self.expect(Token::Identifier)?)
        } else {
            self.eat(Token::Identifier)?
        };
        let lparen_token = self.expect(Token::LeftParen)?;
        let mut items = Vec::new();
        while !self.at(Token::RightParen) {
            let element = self.parse_pattern_element(false)?;
            let comma_token = self.eat(Token::Comma)?;
            let last = comma_token.is_none();
            items.push(FormalParameter {
                element,
                comma_token,
            });
            if last {
                break;
            }
        }
        let rparen_token = self.expect(Token::RightParen)?;
        let lbrace_token = self.expect(Token::LeftBrace)?;
        let body = self.parse_statement_list()?;
        let rbrace_token = self.expect(Token::RightBrace)?;
        Ok(Function {
            function_token,
            identifier_token,
            lparen_token,
            formals: (!items.is_empty()).then_some(FormalParameterList { items }),
            rparen_token,
            lbrace_token,
            body,
            rbrace_token,
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::qml::ast::*;
    use crate::qml::parsing::parse_script;

    fn statements(source: &str) -> Vec<Statement> {
        parse_script(source)
            .unwrap()
            .statements
            .map(|list| list.statements)
            .unwrap_or_default()
    }

    #[test]
    fn test_empty_program() {
        assert_eq!(parse_script("").unwrap().statements, None);
        assert_eq!(parse_script("// nothing\n").unwrap().statements, None);
    }

    #[test]
    fn test_if_else() {
        let parsed = statements("if (x) y(); else z();");
        let [Statement::If(stmt)] = parsed.as_slice() else {
            panic!("expected a single if statement");
        };
        assert!(matches!(stmt.ok, Statement::Expression(_)));
        assert!(stmt.else_branch.is_some());
    }

    #[test]
    fn test_for_variants() {
        let parsed = statements(
            "for (var i = 0; i < n; i++) {}\nfor (k in obj) ;\nfor (let v of list) f(v)\nfor (;;) break",
        );
        assert!(matches!(parsed[0], Statement::For(_)));
        let Statement::ForEach(each) = &parsed[1] else {
            panic!("expected for-in");
        };
        assert!(matches!(each.target, ForEachTarget::Expression(_)));
        let Statement::ForEach(each) = &parsed[2] else {
            panic!("expected for-of");
        };
        assert!(matches!(each.target, ForEachTarget::Declaration(_)));
        let Statement::For(empty) = &parsed[3] else {
            panic!("expected for");
        };
        assert!(empty.initialiser.is_none() && empty.condition.is_none());
    }

    #[test]
    fn test_switch_with_default_in_the_middle() {
        let parsed = statements("switch (x) { case 1: a(); case 2: default: b(); case 3: }");
        let [Statement::Switch(switch)] = parsed.as_slice() else {
            panic!("expected switch");
        };
        assert_eq!(switch.block.clauses.as_ref().unwrap().clauses.len(), 2);
        assert!(switch.block.default_clause.is_some());
        assert_eq!(switch.block.more_clauses.as_ref().unwrap().clauses.len(), 1);
    }

    #[test]
    fn test_try_requires_catch_or_finally() {
        assert!(parse_script("try {} finally {}").is_ok());
        assert!(parse_script("try {} catch (e) {} finally {}").is_ok());
        let err = parse_script("try {}").unwrap_err();
        assert_eq!(err.to_string(), "1:7: Expected token `catch'");
    }

    #[test]
    fn test_restricted_return() {
        let parsed = statements("function f() { return\n1 }");
        let [Statement::FunctionDeclaration(function)] = parsed.as_slice() else {
            panic!("expected function");
        };
        let body = &function.body.as_ref().unwrap().statements;
        assert_eq!(body.len(), 2);
        assert!(matches!(&body[0], Statement::Return(r) if r.expression.is_none()));
    }

    #[test]
    fn test_labelled_jump() {
        let parsed = statements("outer: while (1) { continue outer; break }");
        let [Statement::Labelled(labelled)] = parsed.as_slice() else {
            panic!("expected labelled statement");
        };
        assert!(matches!(labelled.statement, Statement::While(_)));
    }

    #[test]
    fn test_missing_semicolon() {
        let err = parse_script("a b").unwrap_err();
        assert_eq!(err.to_string(), "1:3: Expected token `;'");
    }

    #[test]
    fn test_default_parameter_values() {
        let parsed = statements("function f(a, b = 2) {}");
        let [Statement::FunctionDeclaration(function)] = parsed.as_slice() else {
            panic!("expected function");
        };
        let formals = &function.formals.as_ref().unwrap().items;
        assert!(formals[1].element.initializer.is_some());
        assert!(formals[0].comma_token.is_some());
    }
}
