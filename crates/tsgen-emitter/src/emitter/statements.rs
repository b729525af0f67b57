use super::Printer;
use tsgen_parser::ast::visit::{Visitor, walk_expression};
use tsgen_parser::ast::{
    BinaryOperator, CaseClause, Expression, ForInitializer, ForStatement, Identifier, IfStatement,
    Precedence, Statement, TryStatement, VariableDeclarationList, VariableStatement,
};

impl Printer<'_> {
    // =========================================================================
    // Statements
    // =========================================================================

    /// Emit a statement and end its line.
    pub(super) fn emit_statement(&mut self, statement: &Statement) {
        self.emit_statement_inline(statement);
        self.ensure_line_start();
    }

    /// Emit a statement without the trailing line break, so that `else`,
    /// `while` and `catch` can follow a closing brace.
    fn emit_statement_inline(&mut self, statement: &Statement) {
        match statement {
            Statement::Block(block) => self.emit_block(block),
            Statement::Variable(variable) => self.emit_variable_statement(variable),
            Statement::Empty => self.write(";"),
            Statement::Expression(expression) => {
                if expression.starts_with_brace_or_function() {
                    self.write("(");
                    self.emit_expression(expression);
                    self.write(")");
                } else {
                    self.emit_expression(expression);
                }
                self.write(";");
            }
            Statement::If(if_statement) => self.emit_if(if_statement),
            Statement::DoWhile(do_while) => {
                self.write("do");
                let after_block = self.emit_embedded_statement(&do_while.body);
                if after_block {
                    self.write(" ");
                } else {
                    self.ensure_line_start();
                }
                self.write("while (");
                self.emit_expression(&do_while.condition);
                self.write(");");
            }
            Statement::While(while_statement) => {
                self.write("while (");
                self.emit_expression(&while_statement.condition);
                self.write(")");
                self.emit_embedded_statement(&while_statement.body);
            }
            Statement::For(for_statement) => self.emit_for(for_statement),
            Statement::ForIn(for_in) => {
                self.write("for (");
                self.emit_for_initializer(&for_in.initializer);
                self.write(" in ");
                self.emit_expression(&for_in.expression);
                self.write(")");
                self.emit_embedded_statement(&for_in.body);
            }
            Statement::ForOf(for_of) => {
                self.write("for (");
                self.emit_for_initializer(&for_of.initializer);
                self.write(" of ");
                self.emit_operand(&for_of.expression, Precedence::Assignment);
                self.write(")");
                self.emit_embedded_statement(&for_of.body);
            }
            Statement::Continue(label) => self.emit_jump("continue", label.as_ref()),
            Statement::Break(label) => self.emit_jump("break", label.as_ref()),
            Statement::Return(expression) => {
                self.write("return");
                if let Some(expression) = expression {
                    self.write_space();
                    self.emit_expression(expression);
                }
                self.write(";");
            }
            Statement::Switch(switch) => {
                self.write("switch (");
                self.emit_expression(&switch.expression);
                self.write(") {");
                self.write_line();
                self.increase_indent();
                for clause in &switch.clauses {
                    self.emit_case_clause(clause);
                }
                self.decrease_indent();
                self.write("}");
            }
            Statement::Labeled(labeled) => {
                self.write(labeled.label.as_str());
                self.write(": ");
                self.emit_statement_inline(&labeled.statement);
            }
            Statement::Throw(expression) => {
                self.write("throw ");
                self.emit_expression(expression);
                self.write(";");
            }
            Statement::Try(try_statement) => self.emit_try(try_statement),
            Statement::Debugger => self.write("debugger;"),
            Statement::Declaration(declaration) => self.emit_declaration_inline(declaration),
        }
    }

    /// The body of a control statement: a block stays on the header line,
    /// anything else goes on its own indented line. Returns whether the body
    /// was a block.
    fn emit_embedded_statement(&mut self, statement: &Statement) -> bool {
        if let Statement::Block(block) = statement {
            self.write_space();
            self.emit_block(block);
            return true;
        }
        self.write_line();
        self.increase_indent();
        self.emit_statement(statement);
        self.decrease_indent();
        false
    }

    fn emit_if(&mut self, if_statement: &IfStatement) {
        self.write("if (");
        self.emit_expression(&if_statement.condition);
        self.write(")");

        let Some(else_statement) = &if_statement.else_statement else {
            self.emit_embedded_statement(&if_statement.then_statement);
            return;
        };

        // An `else` would attach to a nested else-less `if`.
        let dangling = matches!(
            &if_statement.then_statement,
            Statement::If(inner) if inner.else_statement.is_none()
        );
        let then_is_block = if dangling {
            self.write(" {");
            self.write_line();
            self.increase_indent();
            self.emit_statement(&if_statement.then_statement);
            self.decrease_indent();
            self.write("}");
            true
        } else {
            self.emit_embedded_statement(&if_statement.then_statement)
        };

        if then_is_block {
            self.write(" else");
        } else {
            self.ensure_line_start();
            self.write("else");
        }
        if let Statement::If(else_if) = else_statement {
            self.write_space();
            self.emit_if(else_if);
        } else {
            self.emit_embedded_statement(else_statement);
        }
    }

    fn emit_for(&mut self, for_statement: &ForStatement) {
        self.write("for (");
        if let Some(initializer) = &for_statement.initializer {
            self.emit_for_initializer(initializer);
        }
        self.write(";");
        if let Some(condition) = &for_statement.condition {
            self.write_space();
            self.emit_expression(condition);
        }
        self.write(";");
        if let Some(incrementor) = &for_statement.incrementor {
            self.write_space();
            self.emit_expression(incrementor);
        }
        self.write(")");
        self.emit_embedded_statement(&for_statement.body);
    }

    /// A `for` head, where a bare `in` operator would be read as `for-in`.
    fn emit_for_initializer(&mut self, initializer: &ForInitializer) {
        match initializer {
            ForInitializer::Variable(list) => self.emit_variable_declaration_list(list, true),
            ForInitializer::Expression(expression) => {
                self.emit_expression_without_in(expression, Precedence::Comma);
            }
        }
    }

    fn emit_expression_without_in(&mut self, expression: &Expression, min: Precedence) {
        if contains_in_operator(expression) {
            self.write("(");
            self.emit_expression(expression);
            self.write(")");
        } else {
            self.emit_operand(expression, min);
        }
    }

    fn emit_jump(&mut self, keyword: &str, label: Option<&Identifier>) {
        self.write(keyword);
        if let Some(label) = label {
            self.write_space();
            self.write(label.as_str());
        }
        self.write(";");
    }

    fn emit_case_clause(&mut self, clause: &CaseClause) {
        match &clause.test {
            Some(test) => {
                self.write("case ");
                self.emit_expression(test);
                self.write(":");
            }
            None => self.write("default:"),
        }
        self.write_line();
        self.increase_indent();
        for statement in &clause.statements {
            self.emit_statement(statement);
        }
        self.decrease_indent();
    }

    fn emit_try(&mut self, try_statement: &TryStatement) {
        self.write("try ");
        self.emit_block(try_statement.try_block());
        if let Some(catch_clause) = try_statement.catch_clause() {
            match &catch_clause.variable {
                Some(variable) => {
                    self.write(" catch (");
                    self.write(variable.as_str());
                    self.write(") ");
                }
                None => self.write(" catch "),
            }
            self.emit_block(&catch_clause.block);
        }
        if let Some(finally_block) = try_statement.finally_block() {
            self.write(" finally ");
            self.emit_block(finally_block);
        }
    }

    // =========================================================================
    // Variables
    // =========================================================================

    fn emit_variable_statement(&mut self, variable: &VariableStatement) {
        self.emit_leading_trivia(&variable.trivia.leading);
        self.emit_modifiers(variable.modifiers);
        self.emit_variable_declaration_list(&variable.declaration_list, false);
        self.write(";");
        self.emit_trailing_trivia(&variable.trivia.trailing);
    }

    /// `let a: T = 1, b`. Inside a `for` head initializers must not contain a
    /// bare `in`.
    fn emit_variable_declaration_list(&mut self, list: &VariableDeclarationList, in_for_head: bool) {
        self.write(list.kind().as_str());
        self.write_space();
        self.emit_comma_list(list.declarations(), |p, declaration| {
            p.write(declaration.name.as_str());
            if let Some(ty) = &declaration.ty {
                p.write(": ");
                p.emit_type(ty);
            }
            if let Some(initializer) = &declaration.initializer {
                p.write(" = ");
                if in_for_head {
                    p.emit_expression_without_in(initializer, Precedence::Assignment);
                } else {
                    p.emit_operand(initializer, Precedence::Assignment);
                }
            }
        });
    }
}

/// Finds an `in` operator that is not enclosed in parentheses or a function.
#[derive(Default)]
struct InOperatorFinder {
    found: bool,
}

impl<'ast> Visitor<'ast> for InOperatorFinder {
    fn visit_expression(&mut self, expression: &'ast Expression) {
        if self.found {
            return;
        }
        match expression {
            Expression::Binary(binary) if binary.operator == BinaryOperator::In => {
                self.found = true;
            }
            Expression::Parenthesized(_) | Expression::Function(_) | Expression::Arrow(_) => {}
            _ => walk_expression(self, expression),
        }
    }
}

fn contains_in_operator(expression: &Expression) -> bool {
    let mut finder = InOperatorFinder::default();
    expression.accept(&mut finder);
    finder.found
}
