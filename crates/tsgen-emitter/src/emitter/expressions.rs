use super::Printer;
use tsgen_parser::ast::{
    Argument, ArrayElement, ArrayLiteral, ArrowBody, ArrowFunction, BinaryExpression,
    BinaryOperator, CallExpression, CallKind, CallSignature, Expression, FunctionExpression,
    ObjectLiteral, ObjectLiteralElement, Precedence, PrefixUnaryExpression, PrefixUnaryOperator,
    TemplateLiteral,
};

impl Printer<'_> {
    // =========================================================================
    // Expressions
    // =========================================================================

    pub(super) fn emit_expression(&mut self, expression: &Expression) {
        match expression {
            Expression::This => self.write("this"),
            Expression::Super => self.write("super"),
            Expression::Identifier(identifier) => self.write(identifier.as_str()),
            Expression::Null => self.write("null"),
            Expression::Boolean(value) => self.write(if *value { "true" } else { "false" }),
            Expression::Numeric(literal) => self.write_display(literal),
            Expression::String(literal) => self.write_display(literal),
            Expression::Template(template) => self.emit_template(template),
            Expression::RegularExpression(literal) => self.write_display(literal),
            Expression::Array(array) => self.emit_array_literal(array),
            Expression::Object(object) => self.emit_object_literal(object),
            Expression::Parenthesized(inner) => {
                self.write("(");
                self.emit_expression(inner);
                self.write(")");
            }
            Expression::Function(function) => self.emit_function_expression(function),
            Expression::Arrow(arrow) => self.emit_arrow_function(arrow),
            Expression::PropertyAccess(access) => {
                self.emit_member_object(&access.expression);
                self.write(".");
                self.write(access.name.as_str());
            }
            Expression::ElementAccess(access) => {
                self.emit_operand(&access.expression, Precedence::LeftHandSide);
                self.write("[");
                self.emit_expression(&access.argument);
                self.write("]");
            }
            Expression::Call(call) => self.emit_call(call),
            Expression::PrefixUnary(unary) => self.emit_prefix_unary(unary),
            Expression::PostfixUnary(unary) => {
                self.emit_operand(&unary.operand, Precedence::LeftHandSide);
                self.write(unary.operator.as_str());
            }
            Expression::Binary(binary) => self.emit_binary(binary),
            Expression::Conditional(conditional) => {
                self.emit_operand(&conditional.condition, Precedence::Conditional.next());
                self.write(" ? ");
                self.emit_operand(&conditional.when_true, Precedence::Assignment);
                self.write(" : ");
                self.emit_operand(&conditional.when_false, Precedence::Assignment);
            }
            Expression::Assignment(assignment) => {
                self.emit_operand(&assignment.target, Precedence::LeftHandSide);
                self.write_space();
                self.write(assignment.operator.as_str());
                self.write_space();
                self.emit_operand(&assignment.value, Precedence::Assignment);
            }
            Expression::Comma(comma) => {
                self.emit_comma_list(comma.expressions(), |p, e| {
                    p.emit_operand(e, Precedence::Assignment);
                });
            }
            Expression::TypeAssertion(assertion) => {
                self.write("<");
                self.emit_type(&assertion.ty);
                self.write(">");
                self.emit_operand(&assertion.expression, Precedence::Unary);
            }
        }
    }

    /// Emit `expression`, parenthesized when it binds looser than `min`.
    pub(super) fn emit_operand(&mut self, expression: &Expression, min: Precedence) {
        if expression.precedence() < min {
            self.write("(");
            self.emit_expression(expression);
            self.write(")");
        } else {
            self.emit_expression(expression);
        }
    }

    fn emit_binary(&mut self, binary: &BinaryExpression) {
        let precedence = binary.operator.precedence();
        let (left_min, right_min) = if binary.operator.is_right_associative() {
            (precedence.next(), precedence)
        } else {
            (precedence, precedence.next())
        };

        // `-a ** b` is a syntax error; the base must be parenthesized.
        let unary_base = binary.operator == BinaryOperator::Exponent
            && matches!(
                binary.left,
                Expression::PrefixUnary(_) | Expression::TypeAssertion(_)
            );
        if unary_base {
            self.write("(");
            self.emit_expression(&binary.left);
            self.write(")");
        } else {
            self.emit_operand(&binary.left, left_min);
        }

        self.write_space();
        self.write(binary.operator.as_str());
        self.write_space();
        self.emit_operand(&binary.right, right_min);
    }

    fn emit_prefix_unary(&mut self, unary: &PrefixUnaryExpression) {
        self.write(unary.operator.as_str());
        if unary.operator.is_keyword() || merges_with_operand(unary) {
            self.write_space();
        }
        self.emit_operand(&unary.operand, Precedence::Unary);
    }

    /// The object of `.name`. A decimal integer would swallow the dot as a
    /// decimal point, so it is separated by a space.
    fn emit_member_object(&mut self, object: &Expression) {
        self.emit_operand(object, Precedence::LeftHandSide);
        if let Expression::Numeric(literal) = object
            && literal.is_integer_decimal()
        {
            self.write_space();
        }
    }

    // =========================================================================
    // Calls
    // =========================================================================

    fn emit_call(&mut self, call: &CallExpression) {
        match call.kind() {
            CallKind::Super => self.write("super"),
            CallKind::Call => self.emit_operand(call.callee(), Precedence::LeftHandSide),
            CallKind::New => {
                self.write("new ");
                // The callee of `new` ends at the first argument list.
                if call.callee().precedence() < Precedence::LeftHandSide
                    || call.callee().has_call_in_member_chain()
                {
                    self.write("(");
                    self.emit_expression(call.callee());
                    self.write(")");
                } else {
                    self.emit_expression(call.callee());
                }
            }
        }
        if !call.type_arguments().is_empty() {
            self.write("<");
            self.emit_comma_list(call.type_arguments(), |p, ty| p.emit_type(ty));
            self.write(">");
        }
        self.emit_arguments(call.arguments());
    }

    fn emit_arguments(&mut self, arguments: &[Argument]) {
        self.write("(");
        self.emit_comma_list(arguments, |p, argument| match argument {
            Argument::Expression(e) => p.emit_operand(e, Precedence::Assignment),
            Argument::Spread(e) => {
                p.write("...");
                p.emit_operand(e, Precedence::Assignment);
            }
        });
        self.write(")");
    }

    // =========================================================================
    // Literals
    // =========================================================================

    fn emit_template(&mut self, template: &TemplateLiteral) {
        self.write("`");
        self.write(&TemplateLiteral::escape_text(&template.head));
        for span in &template.spans {
            self.write("${");
            self.emit_expression(&span.expression);
            self.write("}");
            self.write(&TemplateLiteral::escape_text(&span.literal));
        }
        self.write("`");
    }

    /// A trailing hole needs its own comma: `[a, ,]` holds two elements.
    fn emit_array_literal(&mut self, array: &ArrayLiteral) {
        self.write("[");
        self.emit_comma_list(&array.elements, |p, element| match element {
            ArrayElement::Expression(e) => p.emit_operand(e, Precedence::Assignment),
            ArrayElement::Spread(e) => {
                p.write("...");
                p.emit_operand(e, Precedence::Assignment);
            }
            ArrayElement::Hole => {}
        });
        if matches!(array.elements.last(), Some(ArrayElement::Hole)) {
            self.write(",");
        }
        self.write("]");
    }

    /// `{ a: 1, b }` on one line, or one property per line when any member
    /// has a body.
    fn emit_object_literal(&mut self, object: &ObjectLiteral) {
        if object.properties.is_empty() {
            self.write("{}");
            return;
        }

        if !object.properties.iter().any(ObjectLiteralElement::has_body) {
            self.write("{ ");
            self.emit_comma_list(&object.properties, |p, property| {
                p.emit_object_literal_element(property);
            });
            self.write(" }");
            return;
        }

        self.write("{");
        self.write_line();
        self.increase_indent();
        let last = object.properties.len() - 1;
        for (i, property) in object.properties.iter().enumerate() {
            self.emit_object_literal_element(property);
            if i < last {
                self.write(",");
            }
            self.write_line();
        }
        self.decrease_indent();
        self.write("}");
    }

    fn emit_object_literal_element(&mut self, element: &ObjectLiteralElement) {
        match element {
            ObjectLiteralElement::Property(property) => {
                self.emit_property_name(&property.name);
                self.write(": ");
                self.emit_operand(&property.value, Precedence::Assignment);
            }
            ObjectLiteralElement::Shorthand(shorthand) => {
                self.write(shorthand.name.as_str());
                if let Some(initializer) = &shorthand.initializer {
                    self.write(" = ");
                    self.emit_operand(initializer, Precedence::Assignment);
                }
            }
            ObjectLiteralElement::Method(method) => {
                self.emit_property_name(&method.name);
                self.emit_call_signature(&method.signature);
                self.write_space();
                self.emit_block(&method.body);
            }
            ObjectLiteralElement::GetAccessor(accessor) => {
                self.write("get ");
                self.emit_property_name(&accessor.name);
                self.write("()");
                if let Some(return_type) = &accessor.return_type {
                    self.write(": ");
                    self.emit_type(return_type);
                }
                self.write_space();
                self.emit_block(&accessor.body);
            }
            ObjectLiteralElement::SetAccessor(accessor) => {
                self.write("set ");
                self.emit_property_name(&accessor.name);
                self.write("(");
                self.emit_parameter(&accessor.parameter);
                self.write(") ");
                self.emit_block(&accessor.body);
            }
            ObjectLiteralElement::Spread(expression) => {
                self.write("...");
                self.emit_operand(expression, Precedence::Assignment);
            }
        }
    }

    // =========================================================================
    // Functions
    // =========================================================================

    fn emit_function_expression(&mut self, function: &FunctionExpression) {
        self.write("function");
        match &function.name {
            Some(name) => {
                self.write_space();
                self.write(name.as_str());
            }
            None if self.options.space_after_anonymous_function_keyword() => self.write_space(),
            None => {}
        }
        self.emit_call_signature(&function.signature);
        self.write_space();
        self.emit_block(&function.body);
    }

    fn emit_arrow_function(&mut self, arrow: &ArrowFunction) {
        match bare_arrow_parameter(&arrow.signature) {
            Some(name) => self.write(name),
            None => self.emit_call_signature(&arrow.signature),
        }
        self.write(" => ");
        match &arrow.body {
            ArrowBody::Block(block) => self.emit_block(block),
            // A leading `{` would start a block body.
            ArrowBody::Expression(body) if body.starts_with_brace_or_function() => {
                self.write("(");
                self.emit_expression(body);
                self.write(")");
            }
            ArrowBody::Expression(body) => self.emit_operand(body, Precedence::Assignment),
        }
    }
}

/// `- -a` and `+ ++a` need a space to keep the operators apart.
fn merges_with_operand(unary: &PrefixUnaryExpression) -> bool {
    let Expression::PrefixUnary(inner) = &unary.operand else {
        return false;
    };
    let plus_like = |op| matches!(op, PrefixUnaryOperator::Plus | PrefixUnaryOperator::Increment);
    let minus_like =
        |op| matches!(op, PrefixUnaryOperator::Minus | PrefixUnaryOperator::Decrement);
    (plus_like(unary.operator) && plus_like(inner.operator))
        || (minus_like(unary.operator) && minus_like(inner.operator))
}

/// The single parameter of `x => ...` when it can be written without
/// parentheses.
fn bare_arrow_parameter(signature: &CallSignature) -> Option<&str> {
    if !signature.type_parameters.is_empty()
        || signature.return_type.is_some()
        || signature.parameters.rest().is_some()
    {
        return None;
    }
    let [parameter] = signature.parameters.required() else {
        return None;
    };
    if !signature.parameters.optional().is_empty()
        || parameter.accessibility.is_some()
        || parameter.readonly
        || parameter.annotation.is_some()
    {
        return None;
    }
    Some(parameter.name.as_str())
}
