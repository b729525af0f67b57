//! Read-only traversal over the AST.
//!
//! Implement [`Visitor`] and override the `visit_*` methods for the node kinds
//! of interest; call the matching `walk_*` function from an override to keep
//! descending into children. The default implementations walk everything.
//!
//! ```
//! use tsgen_parser::ast::visit::Visitor;
//! use tsgen_parser::ast::{BinaryExpression, BinaryOperator, Expression, Identifier};
//!
//! #[derive(Default)]
//! struct Identifiers(Vec<String>);
//!
//! impl<'ast> Visitor<'ast> for Identifiers {
//!     fn visit_identifier(&mut self, identifier: &'ast Identifier) {
//!         self.0.push(identifier.to_string());
//!     }
//! }
//!
//! let sum = Expression::Binary(Box::new(BinaryExpression {
//!     left: Expression::identifier("a").unwrap(),
//!     operator: BinaryOperator::Add,
//!     right: Expression::identifier("b").unwrap(),
//! }));
//! let mut names = Identifiers::default();
//! sum.accept(&mut names);
//! assert_eq!(names.0, ["a", "b"]);
//! ```

use super::*;

pub trait Visitor<'ast>: Sized {
    fn visit_expression(&mut self, expression: &'ast Expression) {
        walk_expression(self, expression);
    }

    fn visit_type(&mut self, ty: &'ast Type) {
        walk_type(self, ty);
    }

    fn visit_statement(&mut self, statement: &'ast Statement) {
        walk_statement(self, statement);
    }

    fn visit_declaration(&mut self, declaration: &'ast Declaration) {
        walk_declaration(self, declaration);
    }

    fn visit_identifier(&mut self, _identifier: &'ast Identifier) {}

    fn visit_entity_name(&mut self, name: &'ast EntityName) {
        for segment in name.segments() {
            self.visit_identifier(segment);
        }
    }

    fn visit_property_name(&mut self, name: &'ast PropertyName) {
        match name {
            PropertyName::Identifier(identifier) => self.visit_identifier(identifier),
            PropertyName::Computed(expression) => self.visit_expression(expression),
            PropertyName::String(_) | PropertyName::Numeric(_) => {}
        }
    }

    fn visit_block(&mut self, block: &'ast Block) {
        for statement in &block.statements {
            self.visit_statement(statement);
        }
    }

    fn visit_call_signature(&mut self, signature: &'ast CallSignature) {
        walk_call_signature(self, signature);
    }

    fn visit_parameter(&mut self, parameter: &'ast Parameter) {
        walk_parameter(self, parameter);
    }

    fn visit_type_member(&mut self, member: &'ast TypeMember) {
        walk_type_member(self, member);
    }

    fn visit_class_element(&mut self, element: &'ast ClassElement) {
        walk_class_element(self, element);
    }

    fn visit_trivia(&mut self, _trivia: &'ast Trivia) {}
}

// =============================================================================
// Walkers
// =============================================================================

pub fn walk_expression<'ast, V: Visitor<'ast>>(v: &mut V, expression: &'ast Expression) {
    match expression {
        Expression::This
        | Expression::Super
        | Expression::Null
        | Expression::Boolean(_)
        | Expression::Numeric(_)
        | Expression::String(_)
        | Expression::RegularExpression(_) => {}
        Expression::Identifier(identifier) => v.visit_identifier(identifier),
        Expression::Template(template) => {
            for span in &template.spans {
                v.visit_expression(&span.expression);
            }
        }
        Expression::Array(array) => {
            for element in &array.elements {
                match element {
                    ArrayElement::Expression(e) | ArrayElement::Spread(e) => v.visit_expression(e),
                    ArrayElement::Hole => {}
                }
            }
        }
        Expression::Object(object) => {
            for property in &object.properties {
                walk_object_literal_element(v, property);
            }
        }
        Expression::Parenthesized(inner) => v.visit_expression(inner),
        Expression::Function(function) => {
            if let Some(name) = &function.name {
                v.visit_identifier(name);
            }
            v.visit_call_signature(&function.signature);
            v.visit_block(&function.body);
        }
        Expression::Arrow(arrow) => {
            v.visit_call_signature(&arrow.signature);
            match &arrow.body {
                ArrowBody::Expression(body) => v.visit_expression(body),
                ArrowBody::Block(body) => v.visit_block(body),
            }
        }
        Expression::PropertyAccess(access) => {
            v.visit_expression(&access.expression);
            v.visit_identifier(&access.name);
        }
        Expression::ElementAccess(access) => {
            v.visit_expression(&access.expression);
            v.visit_expression(&access.argument);
        }
        Expression::Call(call) => {
            v.visit_expression(call.callee());
            for ty in call.type_arguments() {
                v.visit_type(ty);
            }
            for argument in call.arguments() {
                match argument {
                    Argument::Expression(e) | Argument::Spread(e) => v.visit_expression(e),
                }
            }
        }
        Expression::PrefixUnary(unary) => v.visit_expression(&unary.operand),
        Expression::PostfixUnary(unary) => v.visit_expression(&unary.operand),
        Expression::Binary(binary) => {
            v.visit_expression(&binary.left);
            v.visit_expression(&binary.right);
        }
        Expression::Conditional(conditional) => {
            v.visit_expression(&conditional.condition);
            v.visit_expression(&conditional.when_true);
            v.visit_expression(&conditional.when_false);
        }
        Expression::Assignment(assignment) => {
            v.visit_expression(&assignment.target);
            v.visit_expression(&assignment.value);
        }
        Expression::Comma(comma) => {
            for e in comma.expressions() {
                v.visit_expression(e);
            }
        }
        Expression::TypeAssertion(assertion) => {
            v.visit_type(&assertion.ty);
            v.visit_expression(&assertion.expression);
        }
    }
}

fn walk_object_literal_element<'ast, V: Visitor<'ast>>(
    v: &mut V,
    element: &'ast ObjectLiteralElement,
) {
    match element {
        ObjectLiteralElement::Property(property) => {
            v.visit_property_name(&property.name);
            v.visit_expression(&property.value);
        }
        ObjectLiteralElement::Shorthand(shorthand) => {
            v.visit_identifier(&shorthand.name);
            if let Some(initializer) = &shorthand.initializer {
                v.visit_expression(initializer);
            }
        }
        ObjectLiteralElement::Method(method) => {
            v.visit_property_name(&method.name);
            v.visit_call_signature(&method.signature);
            v.visit_block(&method.body);
        }
        ObjectLiteralElement::GetAccessor(accessor) => walk_get_accessor(v, accessor),
        ObjectLiteralElement::SetAccessor(accessor) => walk_set_accessor(v, accessor),
        ObjectLiteralElement::Spread(expression) => v.visit_expression(expression),
    }
}

fn walk_get_accessor<'ast, V: Visitor<'ast>>(v: &mut V, accessor: &'ast GetAccessor) {
    v.visit_property_name(&accessor.name);
    if let Some(ty) = &accessor.return_type {
        v.visit_type(ty);
    }
    v.visit_block(&accessor.body);
}

fn walk_set_accessor<'ast, V: Visitor<'ast>>(v: &mut V, accessor: &'ast SetAccessor) {
    v.visit_property_name(&accessor.name);
    v.visit_parameter(&accessor.parameter);
    v.visit_block(&accessor.body);
}

pub fn walk_type<'ast, V: Visitor<'ast>>(v: &mut V, ty: &'ast Type) {
    match ty {
        Type::Predefined(_) | Type::This | Type::StringLiteral(_) => {}
        Type::Reference(reference) => walk_type_reference(v, reference),
        Type::Parenthesized(inner) | Type::Array(inner) => v.visit_type(inner),
        Type::Union(union) => {
            for t in union.types() {
                v.visit_type(t);
            }
        }
        Type::Intersection(intersection) => {
            for t in intersection.types() {
                v.visit_type(t);
            }
        }
        Type::Tuple(tuple) => {
            for t in &tuple.elements {
                v.visit_type(t);
            }
        }
        Type::Function(function) | Type::Constructor(function) => {
            for type_parameter in &function.type_parameters {
                walk_type_parameter(v, type_parameter);
            }
            walk_parameter_list(v, &function.parameters);
            v.visit_type(&function.return_type);
        }
        Type::Object(object) => {
            for member in &object.members {
                v.visit_type_member(member);
            }
        }
        Type::Query(name) => v.visit_entity_name(name),
    }
}

fn walk_type_reference<'ast, V: Visitor<'ast>>(v: &mut V, reference: &'ast TypeReference) {
    v.visit_entity_name(&reference.name);
    for argument in &reference.type_arguments {
        v.visit_type(argument);
    }
}

fn walk_type_parameter<'ast, V: Visitor<'ast>>(v: &mut V, type_parameter: &'ast TypeParameter) {
    v.visit_identifier(&type_parameter.name);
    if let Some(constraint) = &type_parameter.constraint {
        v.visit_type(constraint);
    }
    if let Some(default) = &type_parameter.default {
        v.visit_type(default);
    }
}

fn walk_parameter_list<'ast, V: Visitor<'ast>>(v: &mut V, parameters: &'ast ParameterList) {
    for parameter in parameters.iter() {
        v.visit_parameter(parameter);
    }
    if let Some(rest) = parameters.rest() {
        v.visit_identifier(&rest.name);
        if let Some(ty) = &rest.ty {
            v.visit_type(ty);
        }
    }
}

pub fn walk_parameter<'ast, V: Visitor<'ast>>(v: &mut V, parameter: &'ast Parameter) {
    v.visit_identifier(&parameter.name);
    if let Some(ParameterAnnotation::Type(ty)) = &parameter.annotation {
        v.visit_type(ty);
    }
    if let Some(initializer) = &parameter.initializer {
        v.visit_expression(initializer);
    }
}

pub fn walk_call_signature<'ast, V: Visitor<'ast>>(v: &mut V, signature: &'ast CallSignature) {
    for type_parameter in &signature.type_parameters {
        walk_type_parameter(v, type_parameter);
    }
    walk_parameter_list(v, &signature.parameters);
    if let Some(return_type) = &signature.return_type {
        v.visit_type(return_type);
    }
}

pub fn walk_type_member<'ast, V: Visitor<'ast>>(v: &mut V, member: &'ast TypeMember) {
    match member {
        TypeMember::Property(property) => {
            v.visit_property_name(&property.name);
            if let Some(ty) = &property.ty {
                v.visit_type(ty);
            }
        }
        TypeMember::Method(method) => {
            v.visit_property_name(&method.name);
            v.visit_call_signature(&method.signature);
        }
        TypeMember::Call(signature) | TypeMember::Construct(signature) => {
            v.visit_call_signature(signature);
        }
        TypeMember::Index(index) => walk_index_signature(v, index),
    }
}

fn walk_index_signature<'ast, V: Visitor<'ast>>(v: &mut V, index: &'ast IndexSignature) {
    v.visit_identifier(&index.parameter_name);
    v.visit_type(&index.parameter_type);
    v.visit_type(&index.ty);
}

pub fn walk_statement<'ast, V: Visitor<'ast>>(v: &mut V, statement: &'ast Statement) {
    match statement {
        Statement::Block(block) => v.visit_block(block),
        Statement::Variable(variable) => {
            v.visit_trivia(&variable.trivia);
            walk_variable_declaration_list(v, &variable.declaration_list);
        }
        Statement::Empty | Statement::Debugger => {}
        Statement::Expression(expression) | Statement::Throw(expression) => {
            v.visit_expression(expression);
        }
        Statement::If(if_statement) => {
            v.visit_expression(&if_statement.condition);
            v.visit_statement(&if_statement.then_statement);
            if let Some(else_statement) = &if_statement.else_statement {
                v.visit_statement(else_statement);
            }
        }
        Statement::DoWhile(do_while) => {
            v.visit_statement(&do_while.body);
            v.visit_expression(&do_while.condition);
        }
        Statement::While(while_statement) => {
            v.visit_expression(&while_statement.condition);
            v.visit_statement(&while_statement.body);
        }
        Statement::For(for_statement) => {
            if let Some(initializer) = &for_statement.initializer {
                walk_for_initializer(v, initializer);
            }
            if let Some(condition) = &for_statement.condition {
                v.visit_expression(condition);
            }
            if let Some(incrementor) = &for_statement.incrementor {
                v.visit_expression(incrementor);
            }
            v.visit_statement(&for_statement.body);
        }
        Statement::ForIn(for_in) => {
            walk_for_initializer(v, &for_in.initializer);
            v.visit_expression(&for_in.expression);
            v.visit_statement(&for_in.body);
        }
        Statement::ForOf(for_of) => {
            walk_for_initializer(v, &for_of.initializer);
            v.visit_expression(&for_of.expression);
            v.visit_statement(&for_of.body);
        }
        Statement::Continue(label) | Statement::Break(label) => {
            if let Some(label) = label {
                v.visit_identifier(label);
            }
        }
        Statement::Return(expression) => {
            if let Some(expression) = expression {
                v.visit_expression(expression);
            }
        }
        Statement::Switch(switch) => {
            v.visit_expression(&switch.expression);
            for clause in &switch.clauses {
                if let Some(test) = &clause.test {
                    v.visit_expression(test);
                }
                for statement in &clause.statements {
                    v.visit_statement(statement);
                }
            }
        }
        Statement::Labeled(labeled) => {
            v.visit_identifier(&labeled.label);
            v.visit_statement(&labeled.statement);
        }
        Statement::Try(try_statement) => {
            v.visit_block(try_statement.try_block());
            if let Some(catch) = try_statement.catch_clause() {
                if let Some(variable) = &catch.variable {
                    v.visit_identifier(variable);
                }
                v.visit_block(&catch.block);
            }
            if let Some(finally) = try_statement.finally_block() {
                v.visit_block(finally);
            }
        }
        Statement::Declaration(declaration) => v.visit_declaration(declaration),
    }
}

fn walk_variable_declaration_list<'ast, V: Visitor<'ast>>(
    v: &mut V,
    list: &'ast VariableDeclarationList,
) {
    for declaration in list.declarations() {
        v.visit_identifier(&declaration.name);
        if let Some(ty) = &declaration.ty {
            v.visit_type(ty);
        }
        if let Some(initializer) = &declaration.initializer {
            v.visit_expression(initializer);
        }
    }
}

fn walk_for_initializer<'ast, V: Visitor<'ast>>(v: &mut V, initializer: &'ast ForInitializer) {
    match initializer {
        ForInitializer::Variable(list) => walk_variable_declaration_list(v, list),
        ForInitializer::Expression(expression) => v.visit_expression(expression),
    }
}

pub fn walk_declaration<'ast, V: Visitor<'ast>>(v: &mut V, declaration: &'ast Declaration) {
    v.visit_trivia(declaration.trivia());
    match declaration {
        Declaration::Function(function) => {
            if let Some(name) = &function.name {
                v.visit_identifier(name);
            }
            v.visit_call_signature(&function.signature);
            if let Some(body) = &function.body {
                v.visit_block(body);
            }
        }
        Declaration::Class(class) => {
            if let Some(name) = &class.name {
                v.visit_identifier(name);
            }
            for type_parameter in &class.type_parameters {
                walk_type_parameter(v, type_parameter);
            }
            if let Some(extends) = &class.extends {
                walk_type_reference(v, extends);
            }
            for implements in &class.implements {
                walk_type_reference(v, implements);
            }
            for member in &class.members {
                v.visit_class_element(member);
            }
        }
        Declaration::Interface(interface) => {
            v.visit_identifier(&interface.name);
            for type_parameter in &interface.type_parameters {
                walk_type_parameter(v, type_parameter);
            }
            for extends in &interface.extends {
                walk_type_reference(v, extends);
            }
            for member in &interface.members {
                v.visit_type_member(member);
            }
        }
        Declaration::TypeAlias(alias) => {
            v.visit_identifier(&alias.name);
            for type_parameter in &alias.type_parameters {
                walk_type_parameter(v, type_parameter);
            }
            v.visit_type(&alias.ty);
        }
        Declaration::Enum(enum_declaration) => {
            v.visit_identifier(&enum_declaration.name);
            for member in &enum_declaration.members {
                v.visit_trivia(&member.trivia);
                v.visit_property_name(&member.name);
                if let Some(initializer) = &member.initializer {
                    v.visit_expression(initializer);
                }
            }
        }
        Declaration::Namespace(namespace) => {
            v.visit_entity_name(&namespace.name);
            for statement in &namespace.body {
                v.visit_statement(statement);
            }
        }
        Declaration::Import(import) => {
            if let Some(clause) = &import.clause {
                if let Some(default) = clause.default_binding() {
                    v.visit_identifier(default);
                }
                match clause.bindings() {
                    Some(NamedImportBindings::Namespace(name)) => v.visit_identifier(name),
                    Some(NamedImportBindings::Named(specifiers)) => {
                        for specifier in specifiers {
                            if let Some(property_name) = &specifier.property_name {
                                v.visit_identifier(property_name);
                            }
                            v.visit_identifier(&specifier.name);
                        }
                    }
                    None => {}
                }
            }
        }
    }
}

pub fn walk_class_element<'ast, V: Visitor<'ast>>(v: &mut V, element: &'ast ClassElement) {
    v.visit_trivia(&element.trivia);
    match &element.member {
        ClassMember::Constructor(constructor) => {
            walk_parameter_list(v, &constructor.parameters);
            if let Some(body) = &constructor.body {
                v.visit_block(body);
            }
        }
        ClassMember::Property(property) => {
            v.visit_property_name(&property.name);
            if let Some(ty) = &property.ty {
                v.visit_type(ty);
            }
            if let Some(initializer) = &property.initializer {
                v.visit_expression(initializer);
            }
        }
        ClassMember::Method(method) => {
            v.visit_property_name(&method.name);
            v.visit_call_signature(&method.signature);
            if let Some(body) = &method.body {
                v.visit_block(body);
            }
        }
        ClassMember::GetAccessor(accessor) => walk_get_accessor(v, accessor),
        ClassMember::SetAccessor(accessor) => walk_set_accessor(v, accessor),
        ClassMember::Index(index) => walk_index_signature(v, index),
    }
}

// =============================================================================
// Double dispatch entry points
// =============================================================================

impl Expression {
    pub fn accept<'ast, V: Visitor<'ast>>(&'ast self, visitor: &mut V) {
        visitor.visit_expression(self);
    }
}

impl Type {
    pub fn accept<'ast, V: Visitor<'ast>>(&'ast self, visitor: &mut V) {
        visitor.visit_type(self);
    }
}

impl Statement {
    pub fn accept<'ast, V: Visitor<'ast>>(&'ast self, visitor: &mut V) {
        visitor.visit_statement(self);
    }
}

impl Declaration {
    pub fn accept<'ast, V: Visitor<'ast>>(&'ast self, visitor: &mut V) {
        visitor.visit_declaration(self);
    }
}

impl Module {
    pub fn accept<'ast, V: Visitor<'ast>>(&'ast self, visitor: &mut V) {
        for statement in &self.statements {
            visitor.visit_statement(statement);
        }
    }
}

#[cfg(test)]
#[path = "../../tests/visit_tests.rs"]
mod tests;
