//! Parser state - statements, blocks and `for` heads

use super::{ParseError, ParseResult, Parser};
use crate::ast::*;
use tsgen_scanner::TokenKind;

impl Parser {
    pub fn parse_statement(&mut self) -> ParseResult<Statement> {
        self.with_depth(|p| p.parse_statement_worker())
    }

    fn parse_statement_worker(&mut self) -> ParseResult<Statement> {
        match self.token() {
            TokenKind::Semicolon => {
                self.next_token();
                Ok(Statement::Empty)
            }
            TokenKind::OpenBrace => Ok(Statement::Block(self.parse_block()?)),
            TokenKind::Var => self.parse_variable_statement(ModifierFlags::empty()),
            TokenKind::Let if self.is_let_declaration() => {
                self.parse_variable_statement(ModifierFlags::empty())
            }
            TokenKind::Const if self.token_at(1) != TokenKind::Enum => {
                self.parse_variable_statement(ModifierFlags::empty())
            }
            TokenKind::If => self.parse_if_statement(),
            TokenKind::Do => self.parse_do_statement(),
            TokenKind::While => self.parse_while_statement(),
            TokenKind::For => self.parse_for_statement(),
            TokenKind::Continue => {
                self.next_token();
                Ok(Statement::Continue(self.parse_jump_label()?))
            }
            TokenKind::Break => {
                self.next_token();
                Ok(Statement::Break(self.parse_jump_label()?))
            }
            TokenKind::Return => self.parse_return_statement(),
            TokenKind::Switch => self.parse_switch_statement(),
            TokenKind::Throw => self.parse_throw_statement(),
            TokenKind::Try => self.parse_try_statement(),
            TokenKind::Debugger => {
                self.next_token();
                self.parse_semicolon()?;
                Ok(Statement::Debugger)
            }
            TokenKind::With => Err(self.error("'with' statements are not allowed")),
            _ if self.is_start_of_declaration() => self.parse_declaration_statement(),
            _ if self.is_identifier() && self.token_at(1) == TokenKind::Colon => {
                self.parse_labeled_statement()
            }
            _ => self.parse_expression_statement(),
        }
    }

    /// `let` is only a keyword when a binding follows it.
    fn is_let_declaration(&self) -> bool {
        let next = self.token_at(1);
        next.is_identifier_like() || next == TokenKind::OpenBracket || next == TokenKind::OpenBrace
    }

    pub(crate) fn parse_block(&mut self) -> ParseResult<Block> {
        self.parse_expected(TokenKind::OpenBrace)?;
        let mut statements = Vec::new();
        while !self.is_token(TokenKind::CloseBrace) {
            if self.is_token(TokenKind::EndOfFile) {
                return Err(self.error("'}' expected, found end of input"));
            }
            statements.push(self.parse_statement()?);
        }
        self.parse_expected(TokenKind::CloseBrace)?;
        Ok(Block::new(statements))
    }

    /// A function, method, accessor or arrow body; `in` is always an
    /// operator inside it.
    pub(crate) fn parse_function_body(&mut self) -> ParseResult<Block> {
        self.with_in_allowed(true, |p| p.parse_block())
    }

    fn parse_expression_statement(&mut self) -> ParseResult<Statement> {
        let expression = self.with_in_allowed(true, |p| p.parse_expression())?;
        self.parse_semicolon()?;
        Ok(Statement::Expression(expression))
    }

    // =========================================================================
    // Variables
    // =========================================================================

    pub(crate) fn parse_variable_statement(
        &mut self,
        modifiers: ModifierFlags,
    ) -> ParseResult<Statement> {
        let declaration_list = self.parse_variable_declaration_list()?;
        self.parse_semicolon()?;
        Ok(Statement::Variable(VariableStatement {
            trivia: Trivia::default(),
            modifiers,
            declaration_list,
        }))
    }

    /// `var|let|const name: T = value, ...`
    fn parse_variable_declaration_list(&mut self) -> ParseResult<VariableDeclarationList> {
        let location = self.location();
        let kind = match self.token() {
            TokenKind::Var => VariableKind::Var,
            TokenKind::Let => VariableKind::Let,
            TokenKind::Const => VariableKind::Const,
            _ => return Err(self.error("Variable declaration expected")),
        };
        self.next_token();

        let mut declarations = Vec::new();
        loop {
            if self.is_token(TokenKind::OpenBracket) || self.is_token(TokenKind::OpenBrace) {
                return Err(self.not_yet_implemented("Destructuring binding patterns"));
            }
            let name = self.parse_identifier()?;
            let ty = self.parse_type_annotation()?;
            let initializer = if self.parse_optional(TokenKind::Equals) {
                Some(self.parse_assignment_expression()?)
            } else {
                None
            };
            declarations.push(VariableDeclaration {
                name,
                ty,
                initializer,
            });
            if !self.parse_optional(TokenKind::Comma) {
                break;
            }
        }

        self.build(VariableDeclarationList::new(kind, declarations), location)
    }

    // =========================================================================
    // Control flow
    // =========================================================================

    fn parse_parenthesized_condition(&mut self) -> ParseResult<Expression> {
        self.parse_expected(TokenKind::OpenParen)?;
        let condition = self.with_in_allowed(true, |p| p.parse_expression())?;
        self.parse_expected(TokenKind::CloseParen)?;
        Ok(condition)
    }

    fn parse_if_statement(&mut self) -> ParseResult<Statement> {
        self.parse_expected(TokenKind::If)?;
        let condition = self.parse_parenthesized_condition()?;
        let then_statement = self.parse_statement()?;
        let else_statement = if self.parse_optional(TokenKind::Else) {
            Some(self.parse_statement()?)
        } else {
            None
        };
        Ok(Statement::If(Box::new(IfStatement {
            condition,
            then_statement,
            else_statement,
        })))
    }

    fn parse_do_statement(&mut self) -> ParseResult<Statement> {
        self.parse_expected(TokenKind::Do)?;
        let body = self.parse_statement()?;
        self.parse_expected(TokenKind::While)?;
        let condition = self.parse_parenthesized_condition()?;
        // A `;` after `do ... while (...)` is always optional.
        self.parse_optional(TokenKind::Semicolon);
        Ok(Statement::DoWhile(Box::new(DoWhileStatement { body, condition })))
    }

    fn parse_while_statement(&mut self) -> ParseResult<Statement> {
        self.parse_expected(TokenKind::While)?;
        let condition = self.parse_parenthesized_condition()?;
        let body = self.parse_statement()?;
        Ok(Statement::While(Box::new(WhileStatement { condition, body })))
    }

    /// `for (init; cond; incr)`, `for (x in e)` or `for (x of e)`.
    fn parse_for_statement(&mut self) -> ParseResult<Statement> {
        self.parse_expected(TokenKind::For)?;
        self.parse_expected(TokenKind::OpenParen)?;

        let initializer_location = self.location();
        let initializer = match self.token() {
            TokenKind::Semicolon => None,
            TokenKind::Var | TokenKind::Const => Some(ForInitializer::Variable(
                self.with_in_allowed(false, |p| p.parse_variable_declaration_list())?,
            )),
            TokenKind::Let if self.is_let_declaration() => Some(ForInitializer::Variable(
                self.with_in_allowed(false, |p| p.parse_variable_declaration_list())?,
            )),
            _ => Some(ForInitializer::Expression(
                self.with_in_allowed(false, |p| p.parse_expression())?,
            )),
        };

        if let Some(initializer) = initializer {
            if self.parse_optional(TokenKind::In) {
                check_for_each_initializer(&initializer, "in", initializer_location)?;
                let expression = self.with_in_allowed(true, |p| p.parse_expression())?;
                self.parse_expected(TokenKind::CloseParen)?;
                let body = self.parse_statement()?;
                return Ok(Statement::ForIn(Box::new(ForInStatement {
                    initializer,
                    expression,
                    body,
                })));
            }
            if self.parse_optional(TokenKind::Of) {
                check_for_each_initializer(&initializer, "of", initializer_location)?;
                let expression = self.with_in_allowed(true, |p| p.parse_assignment_expression())?;
                self.parse_expected(TokenKind::CloseParen)?;
                let body = self.parse_statement()?;
                return Ok(Statement::ForOf(Box::new(ForOfStatement {
                    initializer,
                    expression,
                    body,
                })));
            }
            return self.parse_for_rest(Some(initializer));
        }
        self.parse_for_rest(None)
    }

    /// The `; cond; incr) body` tail of a classic `for`.
    fn parse_for_rest(&mut self, initializer: Option<ForInitializer>) -> ParseResult<Statement> {
        self.parse_expected(TokenKind::Semicolon)?;
        let condition = if self.is_token(TokenKind::Semicolon) {
            None
        } else {
            Some(self.with_in_allowed(true, |p| p.parse_expression())?)
        };
        self.parse_expected(TokenKind::Semicolon)?;
        let incrementor = if self.is_token(TokenKind::CloseParen) {
            None
        } else {
            Some(self.with_in_allowed(true, |p| p.parse_expression())?)
        };
        self.parse_expected(TokenKind::CloseParen)?;
        let body = self.parse_statement()?;
        Ok(Statement::For(Box::new(ForStatement {
            initializer,
            condition,
            incrementor,
            body,
        })))
    }

    /// The label of `break`/`continue`, which must be on the same line.
    fn parse_jump_label(&mut self) -> ParseResult<Option<Identifier>> {
        let label = if self.is_identifier() && !self.has_preceding_line_break() {
            Some(self.parse_identifier()?)
        } else {
            None
        };
        self.parse_semicolon()?;
        Ok(label)
    }

    fn parse_return_statement(&mut self) -> ParseResult<Statement> {
        self.parse_expected(TokenKind::Return)?;
        let expression = if self.can_parse_semicolon() {
            None
        } else {
            Some(self.with_in_allowed(true, |p| p.parse_expression())?)
        };
        self.parse_semicolon()?;
        Ok(Statement::Return(expression))
    }

    fn parse_throw_statement(&mut self) -> ParseResult<Statement> {
        self.parse_expected(TokenKind::Throw)?;
        if self.has_preceding_line_break() {
            return Err(self.error("Line break not permitted after 'throw'"));
        }
        let expression = self.with_in_allowed(true, |p| p.parse_expression())?;
        self.parse_semicolon()?;
        Ok(Statement::Throw(expression))
    }

    fn parse_switch_statement(&mut self) -> ParseResult<Statement> {
        self.parse_expected(TokenKind::Switch)?;
        let expression = self.parse_parenthesized_condition()?;
        self.parse_expected(TokenKind::OpenBrace)?;

        let mut clauses: Vec<CaseClause> = Vec::new();
        while !self.is_token(TokenKind::CloseBrace) {
            let test = match self.token() {
                TokenKind::Case => {
                    self.next_token();
                    Some(self.with_in_allowed(true, |p| p.parse_expression())?)
                }
                TokenKind::Default => {
                    if clauses.iter().any(|clause| clause.test.is_none()) {
                        return Err(self.error(
                            "A 'default' clause cannot appear more than once in a 'switch' statement",
                        ));
                    }
                    self.next_token();
                    None
                }
                _ => return Err(self.error("'case' or 'default' expected")),
            };
            self.parse_expected(TokenKind::Colon)?;

            let mut statements = Vec::new();
            while !matches!(
                self.token(),
                TokenKind::Case | TokenKind::Default | TokenKind::CloseBrace | TokenKind::EndOfFile
            ) {
                statements.push(self.parse_statement()?);
            }
            clauses.push(CaseClause { test, statements });
        }
        self.parse_expected(TokenKind::CloseBrace)?;

        Ok(Statement::Switch(Box::new(SwitchStatement {
            expression,
            clauses,
        })))
    }

    fn parse_labeled_statement(&mut self) -> ParseResult<Statement> {
        let label = self.parse_identifier()?;
        self.parse_expected(TokenKind::Colon)?;
        let statement = self.parse_statement()?;
        Ok(Statement::Labeled(Box::new(LabeledStatement { label, statement })))
    }

    /// `try {} catch (e) {} finally {}`; at least one handler is required.
    fn parse_try_statement(&mut self) -> ParseResult<Statement> {
        let location = self.location();
        self.parse_expected(TokenKind::Try)?;
        let try_block = self.parse_block()?;

        let catch_clause = if self.parse_optional(TokenKind::Catch) {
            let variable = if self.parse_optional(TokenKind::OpenParen) {
                if self.is_token(TokenKind::OpenBracket) || self.is_token(TokenKind::OpenBrace) {
                    return Err(self.not_yet_implemented("Destructuring binding patterns"));
                }
                let variable = self.parse_identifier()?;
                self.parse_expected(TokenKind::CloseParen)?;
                Some(variable)
            } else {
                None
            };
            let block = self.parse_block()?;
            Some(CatchClause { variable, block })
        } else {
            None
        };

        let finally_block = if self.parse_optional(TokenKind::Finally) {
            Some(self.parse_block()?)
        } else {
            None
        };

        if catch_clause.is_none() && finally_block.is_none() {
            return Err(self.error("'catch' or 'finally' expected"));
        }
        let statement = TryStatement::new(try_block, catch_clause, finally_block);
        Ok(Statement::Try(Box::new(self.build(statement, location)?)))
    }
}

/// The left side of `for-in`/`for-of`: one variable without initializer, or
/// an assignment target.
fn check_for_each_initializer(
    initializer: &ForInitializer,
    keyword: &str,
    location: tsgen_common::TextLocation,
) -> ParseResult<()> {
    match initializer {
        ForInitializer::Variable(list) => {
            if list.declarations().len() != 1 {
                return Err(ParseError::syntax(
                    format!("Only a single variable declaration is allowed in a 'for...{keyword}' statement"),
                    location,
                ));
            }
            if list.declarations()[0].initializer.is_some() {
                return Err(ParseError::syntax(
                    format!("The variable declaration of a 'for...{keyword}' statement cannot have an initializer"),
                    location,
                ));
            }
            Ok(())
        }
        ForInitializer::Expression(expression) if !expression.is_assignment_target() => {
            Err(ParseError::syntax(
                format!("The left-hand side of a 'for...{keyword}' statement must be a variable or a property access"),
                location,
            ))
        }
        ForInitializer::Expression(_) => Ok(()),
    }
}
