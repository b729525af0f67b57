//! Parser state - expressions, object and array literals, functions

use super::{ParseError, ParseResult, Parser};
use crate::ast::*;
use tsgen_scanner::{Token, TokenKind};

/// An infix operator and the number of tokens it is spelled with.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum InfixOperator {
    Binary(BinaryOperator),
    Assignment(AssignmentOperator),
}

pub(crate) fn string_literal_from(token: &Token) -> ParseResult<StringLiteral> {
    let Some(value) = token.string_value() else {
        return Err(ParseError::syntax(
            format!("String literal expected, found {token}"),
            token.location(),
        ));
    };
    let quote = if token.text().starts_with('\'') {
        QuoteKind::Single
    } else {
        QuoteKind::Double
    };
    Ok(StringLiteral::with_quote(value, quote))
}

/// Tokens after `new C<T>` that make `<T>` type arguments rather than a
/// comparison: an argument list, or anything that ends the expression.
fn can_end_new_type_arguments(kind: TokenKind) -> bool {
    matches!(
        kind,
        TokenKind::OpenParen
            | TokenKind::CloseParen
            | TokenKind::CloseBracket
            | TokenKind::CloseBrace
            | TokenKind::Colon
            | TokenKind::Semicolon
            | TokenKind::Comma
            | TokenKind::Question
            | TokenKind::EqualsEquals
            | TokenKind::EqualsEqualsEquals
            | TokenKind::ExclamationEquals
            | TokenKind::ExclamationEqualsEquals
            | TokenKind::AmpersandAmpersand
            | TokenKind::BarBar
            | TokenKind::EndOfFile
    )
}

impl Parser {
    // =========================================================================
    // Operators
    // =========================================================================

    fn peek_infix_operator(&self) -> Option<(InfixOperator, usize)> {
        use InfixOperator::{Assignment as A, Binary as B};

        let operator = match self.token() {
            TokenKind::GreaterThan => return Some(self.peek_greater_than_operator()),
            TokenKind::AsteriskAsterisk => B(BinaryOperator::Exponent),
            TokenKind::Asterisk => B(BinaryOperator::Multiply),
            TokenKind::Slash => B(BinaryOperator::Divide),
            TokenKind::Percent => B(BinaryOperator::Modulo),
            TokenKind::Plus => B(BinaryOperator::Add),
            TokenKind::Minus => B(BinaryOperator::Subtract),
            TokenKind::LessThanLessThan => B(BinaryOperator::LeftShift),
            TokenKind::LessThan => B(BinaryOperator::LessThan),
            TokenKind::LessThanEquals => B(BinaryOperator::LessThanOrEqual),
            TokenKind::Instanceof => B(BinaryOperator::InstanceOf),
            TokenKind::In if !self.disallow_in => B(BinaryOperator::In),
            TokenKind::EqualsEquals => B(BinaryOperator::Equal),
            TokenKind::ExclamationEquals => B(BinaryOperator::NotEqual),
            TokenKind::EqualsEqualsEquals => B(BinaryOperator::StrictEqual),
            TokenKind::ExclamationEqualsEquals => B(BinaryOperator::StrictNotEqual),
            TokenKind::Ampersand => B(BinaryOperator::BitwiseAnd),
            TokenKind::Caret => B(BinaryOperator::BitwiseXor),
            TokenKind::Bar => B(BinaryOperator::BitwiseOr),
            TokenKind::AmpersandAmpersand => B(BinaryOperator::LogicalAnd),
            TokenKind::BarBar => B(BinaryOperator::LogicalOr),
            TokenKind::Equals => A(AssignmentOperator::Assign),
            TokenKind::PlusEquals => A(AssignmentOperator::Add),
            TokenKind::MinusEquals => A(AssignmentOperator::Subtract),
            TokenKind::AsteriskEquals => A(AssignmentOperator::Multiply),
            TokenKind::SlashEquals => A(AssignmentOperator::Divide),
            TokenKind::PercentEquals => A(AssignmentOperator::Modulo),
            TokenKind::AsteriskAsteriskEquals => A(AssignmentOperator::Exponent),
            TokenKind::LessThanLessThanEquals => A(AssignmentOperator::LeftShift),
            TokenKind::AmpersandEquals => A(AssignmentOperator::BitwiseAnd),
            TokenKind::CaretEquals => A(AssignmentOperator::BitwiseXor),
            TokenKind::BarEquals => A(AssignmentOperator::BitwiseOr),
            _ => return None,
        };
        Some((operator, 1))
    }

    /// The lexer never combines `>` with what follows it (so that `A<B<C>>`
    /// closes two type argument lists); operators starting with `>` are put
    /// back together here from adjacent tokens.
    fn peek_greater_than_operator(&self) -> (InfixOperator, usize) {
        use InfixOperator::{Assignment as A, Binary as B};

        let adjacent = |n: usize, kind: TokenKind| {
            self.token_at(n) == kind && self.is_adjacent_to_previous(n)
        };
        if adjacent(1, TokenKind::GreaterThan) {
            if adjacent(2, TokenKind::GreaterThan) {
                if adjacent(3, TokenKind::Equals) {
                    return (A(AssignmentOperator::UnsignedRightShift), 4);
                }
                return (B(BinaryOperator::UnsignedRightShift), 3);
            }
            if adjacent(2, TokenKind::Equals) {
                return (A(AssignmentOperator::SignedRightShift), 3);
            }
            return (B(BinaryOperator::SignedRightShift), 2);
        }
        if adjacent(1, TokenKind::Equals) {
            return (B(BinaryOperator::GreaterThanOrEqual), 2);
        }
        (B(BinaryOperator::GreaterThan), 1)
    }

    fn skip_tokens(&mut self, count: usize) {
        for _ in 0..count {
            self.next_token();
        }
    }

    // =========================================================================
    // Expression ladder
    // =========================================================================

    /// `Expression: AssignmentExpression (',' AssignmentExpression)*`
    pub fn parse_expression(&mut self) -> ParseResult<Expression> {
        let location = self.location();
        let first = self.parse_assignment_expression()?;
        if !self.is_token(TokenKind::Comma) {
            return Ok(first);
        }

        let mut expressions = vec![first];
        while self.parse_optional(TokenKind::Comma) {
            expressions.push(self.parse_assignment_expression()?);
        }
        let comma = self.build(CommaExpression::new(expressions), location)?;
        Ok(Expression::Comma(comma))
    }

    pub(crate) fn parse_assignment_expression(&mut self) -> ParseResult<Expression> {
        self.with_depth(|p| {
            let in_when_true = std::mem::take(&mut p.in_conditional_when_true);
            if p.is_start_of_arrow_function() {
                if !(in_when_true && p.arrow_head_has_return_type()) {
                    tracing::trace!(location = %p.location(), "arrow function");
                    return p.parse_arrow_function();
                }
                // `c ? (a): T => b : d` versus `c ? (a) : b => d`
                if let Some(arrow) = p.try_parse_arrow_function_before_colon() {
                    return Ok(arrow);
                }
                tracing::trace!(location = %p.location(), "parenthesized conditional branch");
            }

            let location = p.location();
            let target = p.parse_conditional_expression()?;
            let Some((InfixOperator::Assignment(operator), count)) = p.peek_infix_operator() else {
                return Ok(target);
            };

            if matches!(target, Expression::Object(_) | Expression::Array(_)) {
                return Err(ParseError::not_yet_implemented(
                    "Destructuring assignments",
                    location,
                ));
            }
            if !target.is_assignment_target() {
                return Err(ParseError::syntax(
                    "The left-hand side of an assignment must be a variable or a property access",
                    location,
                ));
            }

            p.skip_tokens(count);
            let value = p.parse_assignment_expression()?;
            Ok(Expression::Assignment(Box::new(AssignmentExpression {
                target,
                operator,
                value,
            })))
        })
    }

    fn parse_conditional_expression(&mut self) -> ParseResult<Expression> {
        let condition = self.parse_binary_expression(Precedence::LogicalOr)?;
        if !self.parse_optional(TokenKind::Question) {
            return Ok(condition);
        }

        let when_true = self.with_in_allowed(true, |p| {
            p.in_conditional_when_true = true;
            p.parse_assignment_expression()
        })?;
        self.parse_expected(TokenKind::Colon)?;
        let when_false = self.parse_assignment_expression()?;
        Ok(Expression::Conditional(Box::new(ConditionalExpression {
            condition,
            when_true,
            when_false,
        })))
    }

    /// Precedence climbing over binary operators binding at least as tightly
    /// as `min_precedence`. Operands of equal precedence fold to the left,
    /// except for `**`.
    fn parse_binary_expression(&mut self, min_precedence: Precedence) -> ParseResult<Expression> {
        let mut left = self.parse_unary_expression()?;

        loop {
            let Some((InfixOperator::Binary(operator), count)) = self.peek_infix_operator() else {
                break;
            };
            let precedence = operator.precedence();
            if precedence < min_precedence {
                break;
            }
            if operator == BinaryOperator::Exponent
                && matches!(left, Expression::PrefixUnary(_) | Expression::TypeAssertion(_))
            {
                return Err(self.error(
                    "An unary expression is not allowed as the left operand of '**'; parenthesize it",
                ));
            }

            self.skip_tokens(count);
            let right = if operator.is_right_associative() {
                self.parse_binary_expression(precedence)?
            } else {
                self.parse_binary_expression(precedence.next())?
            };
            left = Expression::Binary(Box::new(BinaryExpression {
                left,
                operator,
                right,
            }));
        }

        Ok(left)
    }

    fn parse_unary_expression(&mut self) -> ParseResult<Expression> {
        let operator = match self.token() {
            TokenKind::PlusPlus => PrefixUnaryOperator::Increment,
            TokenKind::MinusMinus => PrefixUnaryOperator::Decrement,
            TokenKind::Plus => PrefixUnaryOperator::Plus,
            TokenKind::Minus => PrefixUnaryOperator::Minus,
            TokenKind::Tilde => PrefixUnaryOperator::BitwiseNot,
            TokenKind::Exclamation => PrefixUnaryOperator::LogicalNot,
            TokenKind::Delete => PrefixUnaryOperator::Delete,
            TokenKind::Void => PrefixUnaryOperator::Void,
            TokenKind::Typeof => PrefixUnaryOperator::Typeof,
            TokenKind::LessThan => return self.parse_type_assertion(),
            _ => return self.parse_postfix_expression(),
        };

        let location = self.location();
        self.next_token();
        let operand = self.with_depth(|p| p.parse_unary_expression())?;
        if matches!(
            operator,
            PrefixUnaryOperator::Increment | PrefixUnaryOperator::Decrement
        ) && !operand.is_assignment_target()
        {
            return Err(ParseError::syntax(
                "The operand of an increment or decrement operator must be a variable or a property access",
                location,
            ));
        }
        Ok(Expression::PrefixUnary(Box::new(PrefixUnaryExpression {
            operator,
            operand,
        })))
    }

    /// `<T>expression`
    fn parse_type_assertion(&mut self) -> ParseResult<Expression> {
        self.parse_expected(TokenKind::LessThan)?;
        let ty = self.parse_type()?;
        self.parse_expected(TokenKind::GreaterThan)?;
        let expression = self.with_depth(|p| p.parse_unary_expression())?;
        Ok(Expression::TypeAssertion(Box::new(TypeAssertion {
            ty,
            expression,
        })))
    }

    fn parse_postfix_expression(&mut self) -> ParseResult<Expression> {
        let location = self.location();
        let operand = self.parse_left_hand_side_expression()?;
        let operator = match self.token() {
            TokenKind::PlusPlus => PostfixUnaryOperator::Increment,
            TokenKind::MinusMinus => PostfixUnaryOperator::Decrement,
            _ => return Ok(operand),
        };
        // `a\n++b` is `a; ++b`
        if self.has_preceding_line_break() {
            return Ok(operand);
        }
        if !operand.is_assignment_target() {
            return Err(ParseError::syntax(
                "The operand of an increment or decrement operator must be a variable or a property access",
                location,
            ));
        }
        self.next_token();
        Ok(Expression::PostfixUnary(Box::new(PostfixUnaryExpression {
            operand,
            operator,
        })))
    }

    // =========================================================================
    // Member access, calls, `new`, `super`
    // =========================================================================

    fn parse_left_hand_side_expression(&mut self) -> ParseResult<Expression> {
        let expression = match self.token() {
            TokenKind::New => self.parse_new_expression()?,
            TokenKind::Super => self.parse_super_expression()?,
            _ => self.parse_primary_expression()?,
        };
        self.parse_member_chain(expression, true)
    }

    /// Fold `.name`, `[index]` and (when allowed) call suffixes onto
    /// `expression`, left to right.
    fn parse_member_chain(
        &mut self,
        mut expression: Expression,
        allow_calls: bool,
    ) -> ParseResult<Expression> {
        loop {
            let location = self.location();
            match self.token() {
                TokenKind::Dot => {
                    self.next_token();
                    let name = self.parse_identifier_name()?;
                    expression = Expression::PropertyAccess(Box::new(PropertyAccess {
                        expression,
                        name,
                    }));
                }
                TokenKind::OpenBracket => {
                    self.next_token();
                    let argument = self.with_in_allowed(true, |p| p.parse_expression())?;
                    self.parse_expected(TokenKind::CloseBracket)?;
                    expression = Expression::ElementAccess(Box::new(ElementAccess {
                        expression,
                        argument,
                    }));
                }
                TokenKind::OpenParen if allow_calls => {
                    let arguments = self.parse_arguments()?;
                    let call = CallExpression::new(CallKind::Call, expression, Vec::new(), arguments);
                    expression = Expression::Call(Box::new(self.build(call, location)?));
                }
                TokenKind::LessThan if allow_calls => {
                    let Some(type_arguments) = self.try_parse_type_arguments_of_call() else {
                        break;
                    };
                    let arguments = self.parse_arguments()?;
                    let call = CallExpression::new(CallKind::Call, expression, type_arguments, arguments);
                    expression = Expression::Call(Box::new(self.build(call, location)?));
                }
                TokenKind::Backtick if !self.has_preceding_line_break() => {
                    return Err(self.not_yet_implemented("Tagged template literals"));
                }
                _ => break,
            }
        }
        Ok(expression)
    }

    /// `f<T>(x)`: type arguments count only if the whole `<...>` parses as
    /// types and is directly followed by `(`. Otherwise `<` is less-than.
    fn try_parse_type_arguments_of_call(&mut self) -> Option<Vec<Type>> {
        self.try_parse_type_arguments_followed_by(|kind| kind == TokenKind::OpenParen)
    }

    fn try_parse_type_arguments_followed_by(
        &mut self,
        can_follow: fn(TokenKind) -> bool,
    ) -> Option<Vec<Type>> {
        let snapshot = self.reader.save_state();
        let type_arguments = self.parse_type_arguments().ok();
        match type_arguments {
            Some(type_arguments) if can_follow(self.token()) => {
                tracing::trace!(count = type_arguments.len(), "generic call");
                Some(type_arguments)
            }
            _ => {
                self.reader.restore_state(snapshot);
                None
            }
        }
    }

    fn parse_arguments(&mut self) -> ParseResult<Vec<Argument>> {
        self.parse_expected(TokenKind::OpenParen)?;
        let arguments = self.with_in_allowed(true, |p| {
            let mut arguments = Vec::new();
            while !p.is_token(TokenKind::CloseParen) {
                if p.parse_optional(TokenKind::DotDotDot) {
                    arguments.push(Argument::Spread(p.parse_assignment_expression()?));
                } else {
                    arguments.push(Argument::Expression(p.parse_assignment_expression()?));
                }
                if !p.parse_optional(TokenKind::Comma) {
                    break;
                }
            }
            Ok(arguments)
        })?;
        self.parse_expected(TokenKind::CloseParen)?;
        Ok(arguments)
    }

    /// `new C<T>(args)`; the argument list is optional.
    fn parse_new_expression(&mut self) -> ParseResult<Expression> {
        let location = self.location();
        self.parse_expected(TokenKind::New)?;

        let callee = match self.token() {
            TokenKind::New => self.parse_new_expression()?,
            TokenKind::Super => return Err(self.error("'super' cannot be the target of 'new'")),
            _ => self.parse_primary_expression()?,
        };
        let callee = self.parse_member_chain(callee, false)?;

        let type_arguments = if self.is_token(TokenKind::LessThan) {
            self.try_parse_type_arguments_followed_by(can_end_new_type_arguments)
                .unwrap_or_default()
        } else {
            Vec::new()
        };
        let arguments = if self.is_token(TokenKind::OpenParen) {
            self.parse_arguments()?
        } else {
            Vec::new()
        };

        let call = CallExpression::new(CallKind::New, callee, type_arguments, arguments);
        Ok(Expression::Call(Box::new(self.build(call, location)?)))
    }

    /// `super(args)` or the `super` of `super.name` / `super[index]`.
    fn parse_super_expression(&mut self) -> ParseResult<Expression> {
        self.parse_expected(TokenKind::Super)?;
        match self.token() {
            TokenKind::OpenParen => {
                let arguments = self.parse_arguments()?;
                Ok(Expression::Call(Box::new(CallExpression::super_call(arguments))))
            }
            TokenKind::Dot | TokenKind::OpenBracket => Ok(Expression::Super),
            _ => Err(self.error("'super' must be followed by an argument list or member access")),
        }
    }

    // =========================================================================
    // Primary expressions
    // =========================================================================

    fn parse_primary_expression(&mut self) -> ParseResult<Expression> {
        match self.token() {
            TokenKind::This => {
                self.next_token();
                Ok(Expression::This)
            }
            TokenKind::Null => {
                self.next_token();
                Ok(Expression::Null)
            }
            TokenKind::True | TokenKind::False => {
                let value = self.is_token(TokenKind::True);
                self.next_token();
                Ok(Expression::Boolean(value))
            }
            kind if kind.is_numeric_literal() => {
                let token = self.reader.read();
                Ok(Expression::Numeric(self.numeric_literal_from(&token)?))
            }
            TokenKind::StringLiteral => {
                let token = self.reader.read();
                Ok(Expression::String(string_literal_from(&token)?))
            }
            TokenKind::OpenBracket => self.parse_array_literal(),
            TokenKind::OpenBrace => self.parse_object_literal(),
            TokenKind::OpenParen => self.parse_parenthesized_expression(),
            TokenKind::Function => self.parse_function_expression(),
            TokenKind::Class => Err(self.not_yet_implemented("Class expressions")),
            TokenKind::Backtick => Err(self.not_yet_implemented("Template literals")),
            TokenKind::Slash | TokenKind::SlashEquals => {
                Err(self.not_yet_implemented("Regular expression literals"))
            }
            _ if self.is_identifier() => Ok(Expression::Identifier(self.parse_identifier()?)),
            TokenKind::EndOfFile => Err(self.error("Expression expected, found end of input")),
            _ => Err(self.error(format!("Expression expected, found {}", self.reader.peek()))),
        }
    }

    pub(crate) fn numeric_literal_from(&self, token: &Token) -> ParseResult<NumericLiteral> {
        let kind = match token.kind() {
            TokenKind::BinaryIntegerLiteral => NumericLiteralKind::BinaryInteger,
            TokenKind::OctalIntegerLiteral => NumericLiteralKind::OctalInteger,
            TokenKind::HexIntegerLiteral => NumericLiteralKind::HexInteger,
            _ => NumericLiteralKind::Decimal,
        };
        let Some(value) = token.number_value() else {
            return Err(ParseError::syntax(
                format!("Numeric literal expected, found {token}"),
                token.location(),
            ));
        };
        self.build(NumericLiteral::new(kind, value), token.location())
    }

    fn parse_parenthesized_expression(&mut self) -> ParseResult<Expression> {
        self.parse_expected(TokenKind::OpenParen)?;
        let expression = self.with_in_allowed(true, |p| p.parse_expression())?;
        self.parse_expected(TokenKind::CloseParen)?;
        Ok(Expression::Parenthesized(Box::new(expression)))
    }

    /// `[a, , ...b]`. A trailing comma does not add a hole.
    fn parse_array_literal(&mut self) -> ParseResult<Expression> {
        self.parse_expected(TokenKind::OpenBracket)?;
        let elements = self.with_in_allowed(true, |p| {
            let mut elements = Vec::new();
            while !p.is_token(TokenKind::CloseBracket) {
                if p.parse_optional(TokenKind::Comma) {
                    elements.push(ArrayElement::Hole);
                    continue;
                }
                let element = if p.parse_optional(TokenKind::DotDotDot) {
                    ArrayElement::Spread(p.parse_assignment_expression()?)
                } else {
                    ArrayElement::Expression(p.parse_assignment_expression()?)
                };
                elements.push(element);
                if !p.is_token(TokenKind::CloseBracket) {
                    p.parse_expected(TokenKind::Comma)?;
                }
            }
            Ok(elements)
        })?;
        self.parse_expected(TokenKind::CloseBracket)?;
        Ok(Expression::Array(ArrayLiteral { elements }))
    }

    fn parse_object_literal(&mut self) -> ParseResult<Expression> {
        self.parse_expected(TokenKind::OpenBrace)?;
        let properties = self.with_in_allowed(true, |p| {
            let mut properties = Vec::new();
            while !p.is_token(TokenKind::CloseBrace) {
                properties.push(p.parse_object_literal_element()?);
                if !p.parse_optional(TokenKind::Comma) {
                    break;
                }
            }
            Ok(properties)
        })?;
        self.parse_expected(TokenKind::CloseBrace)?;
        Ok(Expression::Object(ObjectLiteral { properties }))
    }

    /// After spreads and accessors, a property name is followed by `:`
    /// (assignment), then a call signature (method), then nothing or `=`
    /// (shorthand); the first form that matches wins.
    fn parse_object_literal_element(&mut self) -> ParseResult<ObjectLiteralElement> {
        if self.parse_optional(TokenKind::DotDotDot) {
            return Ok(ObjectLiteralElement::Spread(self.parse_assignment_expression()?));
        }
        if self.is_token(TokenKind::Get) && self.next_is_property_name() {
            return Ok(ObjectLiteralElement::GetAccessor(self.parse_get_accessor()?));
        }
        if self.is_token(TokenKind::Set) && self.next_is_property_name() {
            return Err(self.not_yet_implemented("Set accessors"));
        }

        let is_identifier = self.is_identifier();
        let name = self.parse_property_name()?;

        if self.parse_optional(TokenKind::Colon) {
            let value = self.parse_assignment_expression()?;
            return Ok(ObjectLiteralElement::Property(PropertyAssignment { name, value }));
        }

        if self.is_token(TokenKind::OpenParen) || self.is_token(TokenKind::LessThan) {
            let signature = self.parse_call_signature()?;
            let body = self.parse_function_body()?;
            return Ok(ObjectLiteralElement::Method(MethodDefinition {
                name,
                signature,
                body,
            }));
        }

        match name {
            PropertyName::Identifier(name) if is_identifier => {
                let initializer = if self.parse_optional(TokenKind::Equals) {
                    Some(self.parse_assignment_expression()?)
                } else {
                    None
                };
                Ok(ObjectLiteralElement::Shorthand(ShorthandProperty { name, initializer }))
            }
            _ => Err(self.error(format!("':' expected, found {}", self.reader.peek()))),
        }
    }

    /// Whether the token after the current one can start a property name,
    /// making the current `get`/`set` an accessor keyword.
    pub(crate) fn next_is_property_name(&self) -> bool {
        let next = self.token_at(1);
        next.is_identifier_name()
            || next.is_literal()
            || next == TokenKind::OpenBracket
    }

    pub(crate) fn parse_property_name(&mut self) -> ParseResult<PropertyName> {
        match self.token() {
            TokenKind::StringLiteral => {
                let token = self.reader.read();
                Ok(PropertyName::String(string_literal_from(&token)?))
            }
            kind if kind.is_numeric_literal() => {
                let token = self.reader.read();
                Ok(PropertyName::Numeric(self.numeric_literal_from(&token)?))
            }
            TokenKind::OpenBracket => {
                self.next_token();
                let expression = self.with_in_allowed(true, |p| p.parse_assignment_expression())?;
                self.parse_expected(TokenKind::CloseBracket)?;
                Ok(PropertyName::Computed(Box::new(expression)))
            }
            kind if kind.is_identifier_name() => {
                Ok(PropertyName::Identifier(self.parse_identifier_name()?))
            }
            _ => Err(self.error("Property name expected")),
        }
    }

    /// `get name(): T { ... }`
    pub(crate) fn parse_get_accessor(&mut self) -> ParseResult<GetAccessor> {
        self.parse_expected(TokenKind::Get)?;
        let name = self.parse_property_name()?;
        self.parse_expected(TokenKind::OpenParen)?;
        if !self.is_token(TokenKind::CloseParen) {
            return Err(self.error("A 'get' accessor cannot have parameters"));
        }
        self.next_token();
        let return_type = self.parse_type_annotation()?;
        let body = self.parse_function_body()?;
        Ok(GetAccessor {
            name,
            return_type,
            body,
        })
    }

    // =========================================================================
    // Functions
    // =========================================================================

    fn parse_function_expression(&mut self) -> ParseResult<Expression> {
        self.parse_expected(TokenKind::Function)?;
        let name = if self.is_identifier() {
            Some(self.parse_identifier()?)
        } else {
            None
        };
        let signature = self.parse_call_signature()?;
        let body = self.parse_function_body()?;
        Ok(Expression::Function(Box::new(FunctionExpression {
            name,
            signature,
            body,
        })))
    }

    fn is_start_of_arrow_function(&mut self) -> bool {
        match self.token() {
            _ if self.is_identifier() => self.token_at(1) == TokenKind::EqualsGreaterThan,
            TokenKind::OpenParen => {
                let after_parameters =
                    self.look_ahead(|p| p.skip_parenthesized().then(|| p.token()));
                match after_parameters {
                    Some(TokenKind::EqualsGreaterThan) => true,
                    // `(a): T => ...` versus `cond ? (a) : b`
                    Some(TokenKind::Colon) => self.look_ahead_is_arrow_head(),
                    _ => false,
                }
            }
            TokenKind::LessThan => self.look_ahead_is_arrow_head(),
            _ => false,
        }
    }

    fn look_ahead_is_arrow_head(&mut self) -> bool {
        self.look_ahead(|p| {
            p.parse_call_signature().is_ok() && p.is_token(TokenKind::EqualsGreaterThan)
        })
    }

    fn arrow_head_has_return_type(&mut self) -> bool {
        if self.is_identifier() {
            return false;
        }
        self.look_ahead(|p| {
            p.parse_call_signature()
                .is_ok_and(|signature| signature.return_type.is_some())
        })
    }

    /// Parse an arrow function, keeping it only if a `:` follows its body.
    fn try_parse_arrow_function_before_colon(&mut self) -> Option<Expression> {
        let snapshot = self.reader.save_state();
        match self.parse_arrow_function() {
            Ok(arrow) if self.is_token(TokenKind::Colon) => Some(arrow),
            _ => {
                self.reader.restore_state(snapshot);
                None
            }
        }
    }

    /// Skip from `(` past its matching `)`. False if the input ends first.
    fn skip_parenthesized(&mut self) -> bool {
        let mut depth = 0usize;
        loop {
            match self.token() {
                TokenKind::OpenParen | TokenKind::OpenBracket | TokenKind::OpenBrace => depth += 1,
                TokenKind::CloseParen | TokenKind::CloseBracket | TokenKind::CloseBrace => {
                    depth = depth.saturating_sub(1);
                    if depth == 0 {
                        self.next_token();
                        return true;
                    }
                }
                TokenKind::EndOfFile => return false,
                _ => {}
            }
            self.next_token();
        }
    }

    fn parse_arrow_function(&mut self) -> ParseResult<Expression> {
        let signature = if self.is_identifier() {
            let location = self.location();
            let name = self.parse_identifier()?;
            let parameters =
                self.build(ParameterList::from_parameters(vec![Parameter::new(name, None)], None), location)?;
            CallSignature::new(parameters, None)
        } else {
            self.parse_call_signature()?
        };

        if self.has_preceding_line_break() {
            return Err(self.error("Line terminator not permitted before arrow"));
        }
        self.parse_expected(TokenKind::EqualsGreaterThan)?;

        let body = if self.is_token(TokenKind::OpenBrace) {
            ArrowBody::Block(self.parse_function_body()?)
        } else {
            ArrowBody::Expression(self.parse_assignment_expression()?)
        };
        Ok(Expression::Arrow(Box::new(ArrowFunction { signature, body })))
    }
}
