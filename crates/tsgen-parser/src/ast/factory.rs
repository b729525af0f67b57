//! Constructors for building trees in code.
//!
//! Calling code that generates TypeScript goes through these helpers instead
//! of spelling out node structs. Anything that can be out of range returns a
//! [`ConstructionError`]; the rest is infallible.
//!
//! Operands that bind looser than their position allows are wrapped in a
//! parenthesized node, so a built tree is the tree its printed text parses
//! back to: `binary(a + b, *, c)` holds `(a + b) * c`.
//!
//! ```
//! use tsgen_parser::ast::factory as f;
//! use tsgen_parser::ast::{BinaryOperator, PredefinedType};
//!
//! # fn main() -> Result<(), tsgen_parser::ConstructionError> {
//! let sum = f::binary(f::identifier_expression("a")?, BinaryOperator::Add, f::number(1.0)?);
//! let add_one = f::function_declaration(
//!     "addOne",
//!     vec![f::parameter("a", Some(PredefinedType::Number.into()))?],
//!     Some(PredefinedType::Number.into()),
//!     vec![f::return_statement(Some(sum))],
//! )?;
//! # let _ = add_one;
//! # Ok(())
//! # }
//! ```

use super::*;

type Result<T> = std::result::Result<T, ConstructionError>;

/// `expression`, parenthesized when it binds looser than `min`.
fn operand(expression: Expression, min: Precedence) -> Expression {
    if expression.precedence() < min {
        parenthesized(expression)
    } else {
        expression
    }
}

fn parenthesized_type_if(ty: Type, needs_parens: bool) -> Type {
    if needs_parens { parenthesized_type(ty) } else { ty }
}

// =============================================================================
// Names and literals
// =============================================================================

pub fn identifier(text: &str) -> Result<Identifier> {
    Identifier::new(text)
}

/// A dotted name from its segments, e.g. `["A", "B"]` for `A.B`.
pub fn entity_name(segments: &[&str]) -> Result<EntityName> {
    let identifiers = segments
        .iter()
        .map(|segment| Identifier::new(*segment))
        .collect::<Result<Vec<_>>>()?;
    EntityName::new(identifiers)
}

pub fn identifier_expression(text: &str) -> Result<Expression> {
    identifier(text).map(Expression::Identifier)
}

pub fn number(value: f64) -> Result<Expression> {
    NumericLiteral::decimal(value).map(Expression::Numeric)
}

pub fn numeric_literal(kind: NumericLiteralKind, value: f64) -> Result<Expression> {
    NumericLiteral::new(kind, value).map(Expression::Numeric)
}

pub fn string(value: &str) -> Expression {
    Expression::String(StringLiteral::new(value))
}

pub fn string_with_quote(value: &str, quote: QuoteKind) -> Expression {
    Expression::String(StringLiteral::with_quote(value, quote))
}

pub fn boolean(value: bool) -> Expression {
    Expression::Boolean(value)
}

pub fn regular_expression(pattern: &str, flags: &str) -> Result<Expression> {
    RegularExpressionLiteral::new(pattern, flags).map(Expression::RegularExpression)
}

pub fn template(head: &str, spans: Vec<TemplateSpan>) -> Expression {
    Expression::Template(Box::new(TemplateLiteral {
        head: head.to_string(),
        spans,
    }))
}

pub fn property_name(text: &str) -> Result<PropertyName> {
    identifier(text).map(PropertyName::Identifier)
}

// =============================================================================
// Expressions
// =============================================================================

pub fn array(elements: Vec<Expression>) -> Expression {
    Expression::Array(ArrayLiteral {
        elements: elements
            .into_iter()
            .map(|e| ArrayElement::Expression(operand(e, Precedence::Assignment)))
            .collect(),
    })
}

pub fn object(properties: Vec<ObjectLiteralElement>) -> Expression {
    Expression::Object(ObjectLiteral { properties })
}

pub fn property_assignment(name: &str, value: Expression) -> Result<ObjectLiteralElement> {
    Ok(ObjectLiteralElement::Property(PropertyAssignment {
        name: property_name(name)?,
        value: operand(value, Precedence::Assignment),
    }))
}

pub fn parenthesized(expression: Expression) -> Expression {
    Expression::Parenthesized(Box::new(expression))
}

pub fn property_access(expression: Expression, name: &str) -> Result<Expression> {
    Ok(Expression::PropertyAccess(Box::new(PropertyAccess {
        expression: operand(expression, Precedence::LeftHandSide),
        name: identifier(name)?,
    })))
}

pub fn element_access(expression: Expression, argument: Expression) -> Expression {
    Expression::ElementAccess(Box::new(ElementAccess {
        expression: operand(expression, Precedence::LeftHandSide),
        argument,
    }))
}

pub fn call(callee: Expression, arguments: Vec<Expression>) -> Result<Expression> {
    call_with_kind(CallKind::Call, callee, Vec::new(), arguments)
}

pub fn new_expression(callee: Expression, arguments: Vec<Expression>) -> Result<Expression> {
    call_with_kind(CallKind::New, callee, Vec::new(), arguments)
}

pub fn super_call(arguments: Vec<Expression>) -> Expression {
    Expression::Call(Box::new(CallExpression::super_call(
        arguments_from(arguments),
    )))
}

pub fn call_with_kind(
    kind: CallKind,
    callee: Expression,
    type_arguments: Vec<Type>,
    arguments: Vec<Expression>,
) -> Result<Expression> {
    let callee = match kind {
        CallKind::Call => operand(callee, Precedence::LeftHandSide),
        // The callee of `new` ends at the first argument list.
        CallKind::New if callee.has_call_in_member_chain() => parenthesized(callee),
        CallKind::New => operand(callee, Precedence::LeftHandSide),
        CallKind::Super => callee,
    };
    CallExpression::new(kind, callee, type_arguments, arguments_from(arguments))
        .map(|call| Expression::Call(Box::new(call)))
}

fn arguments_from(arguments: Vec<Expression>) -> Vec<Argument> {
    arguments
        .into_iter()
        .map(|argument| Argument::Expression(operand(argument, Precedence::Assignment)))
        .collect()
}

pub fn prefix(operator: PrefixUnaryOperator, operand: Expression) -> Expression {
    Expression::PrefixUnary(Box::new(PrefixUnaryExpression {
        operator,
        operand: self::operand(operand, Precedence::Unary),
    }))
}

pub fn postfix(operand: Expression, operator: PostfixUnaryOperator) -> Expression {
    Expression::PostfixUnary(Box::new(PostfixUnaryExpression {
        operand: self::operand(operand, Precedence::LeftHandSide),
        operator,
    }))
}

pub fn binary(left: Expression, operator: BinaryOperator, right: Expression) -> Expression {
    let precedence = operator.precedence();
    let (left_min, right_min) = if operator.is_right_associative() {
        (precedence.next(), precedence)
    } else {
        (precedence, precedence.next())
    };
    // `-a ** b` is a syntax error.
    let unary_base = operator == BinaryOperator::Exponent
        && matches!(left, Expression::PrefixUnary(_) | Expression::TypeAssertion(_));
    let left = if unary_base {
        parenthesized(left)
    } else {
        operand(left, left_min)
    };
    Expression::Binary(Box::new(BinaryExpression {
        left,
        operator,
        right: operand(right, right_min),
    }))
}

pub fn conditional(condition: Expression, when_true: Expression, when_false: Expression) -> Expression {
    Expression::Conditional(Box::new(ConditionalExpression {
        condition: operand(condition, Precedence::Conditional.next()),
        when_true: operand(when_true, Precedence::Assignment),
        when_false: operand(when_false, Precedence::Assignment),
    }))
}

pub fn assign(target: Expression, value: Expression) -> Expression {
    compound_assign(target, AssignmentOperator::Assign, value)
}

pub fn compound_assign(target: Expression, operator: AssignmentOperator, value: Expression) -> Expression {
    Expression::Assignment(Box::new(AssignmentExpression {
        target: operand(target, Precedence::LeftHandSide),
        operator,
        value: operand(value, Precedence::Assignment),
    }))
}

pub fn comma(expressions: Vec<Expression>) -> Result<Expression> {
    let expressions = expressions
        .into_iter()
        .map(|e| operand(e, Precedence::Assignment))
        .collect();
    CommaExpression::new(expressions).map(Expression::Comma)
}

pub fn type_assertion(ty: Type, expression: Expression) -> Expression {
    Expression::TypeAssertion(Box::new(TypeAssertion {
        ty,
        expression: operand(expression, Precedence::Unary),
    }))
}

pub fn arrow_function(parameters: Vec<Parameter>, body: Expression) -> Result<Expression> {
    // A leading `{` would start a block body.
    let body = if body.starts_with_brace_or_function() {
        parenthesized(body)
    } else {
        operand(body, Precedence::Assignment)
    };
    Ok(Expression::Arrow(Box::new(ArrowFunction {
        signature: CallSignature::new(ParameterList::from_parameters(parameters, None)?, None),
        body: ArrowBody::Expression(body),
    })))
}

pub fn function_expression(
    name: Option<&str>,
    parameters: Vec<Parameter>,
    body: Vec<Statement>,
) -> Result<Expression> {
    Ok(Expression::Function(Box::new(FunctionExpression {
        name: name.map(identifier).transpose()?,
        signature: CallSignature::new(ParameterList::from_parameters(parameters, None)?, None),
        body: Block::new(body),
    })))
}

// =============================================================================
// Types
// =============================================================================

pub fn type_reference(name: &str, type_arguments: Vec<Type>) -> Result<Type> {
    Ok(Type::Reference(TypeReference {
        name: EntityName::from(identifier(name)?),
        type_arguments,
    }))
}

pub fn qualified_type_reference(segments: &[&str], type_arguments: Vec<Type>) -> Result<Type> {
    Ok(Type::Reference(TypeReference {
        name: entity_name(segments)?,
        type_arguments,
    }))
}

pub fn array_type(element: Type) -> Type {
    let needs_parens = matches!(
        element,
        Type::Union(_) | Type::Intersection(_) | Type::Function(_) | Type::Constructor(_)
    );
    Type::array(parenthesized_type_if(element, needs_parens))
}

pub fn union_type(types: Vec<Type>) -> Result<Type> {
    let types = types
        .into_iter()
        .map(|ty| {
            let needs_parens =
                matches!(ty, Type::Function(_) | Type::Constructor(_) | Type::Union(_));
            parenthesized_type_if(ty, needs_parens)
        })
        .collect();
    UnionType::new(types).map(Type::Union)
}

pub fn intersection_type(types: Vec<Type>) -> Result<Type> {
    let types = types
        .into_iter()
        .map(|ty| {
            let needs_parens = matches!(
                ty,
                Type::Function(_) | Type::Constructor(_) | Type::Union(_) | Type::Intersection(_)
            );
            parenthesized_type_if(ty, needs_parens)
        })
        .collect();
    IntersectionType::new(types).map(Type::Intersection)
}

pub fn tuple_type(elements: Vec<Type>) -> Type {
    Type::Tuple(TupleType { elements })
}

pub fn parenthesized_type(ty: Type) -> Type {
    Type::Parenthesized(Box::new(ty))
}

pub fn function_type(
    type_parameters: Vec<TypeParameter>,
    parameters: ParameterList,
    return_type: Type,
) -> Type {
    Type::Function(Box::new(FunctionType {
        type_parameters,
        parameters,
        return_type,
    }))
}

pub fn string_literal_type(value: &str) -> Type {
    Type::StringLiteral(StringLiteral::new(value))
}

pub fn type_query(segments: &[&str]) -> Result<Type> {
    entity_name(segments).map(Type::Query)
}

pub fn property_signature(name: &str, optional: bool, ty: Type) -> Result<TypeMember> {
    Ok(TypeMember::Property(PropertySignature {
        readonly: false,
        name: property_name(name)?,
        optional,
        ty: Some(ty),
    }))
}

pub fn object_type(members: Vec<TypeMember>) -> Type {
    Type::Object(ObjectType { members })
}

pub fn type_parameter(name: &str, constraint: Option<Type>) -> Result<TypeParameter> {
    Ok(TypeParameter {
        name: identifier(name)?,
        constraint,
        default: None,
    })
}

// =============================================================================
// Parameters
// =============================================================================

pub fn parameter(name: &str, ty: Option<Type>) -> Result<Parameter> {
    Ok(Parameter::new(identifier(name)?, ty.map(ParameterAnnotation::Type)))
}

/// `name?: ty`
pub fn optional_parameter(name: &str, ty: Option<Type>) -> Result<Parameter> {
    let mut parameter = parameter(name, ty)?;
    parameter.question = true;
    Ok(parameter)
}

/// `name: ty = initializer`
pub fn parameter_with_initializer(
    name: &str,
    ty: Option<Type>,
    initializer: Expression,
) -> Result<Parameter> {
    let mut parameter = parameter(name, ty)?;
    parameter.initializer = Some(operand(initializer, Precedence::Assignment));
    Ok(parameter)
}

pub fn rest_parameter(name: &str, ty: Option<Type>) -> Result<RestParameter> {
    Ok(RestParameter {
        name: identifier(name)?,
        ty,
    })
}

pub fn parameter_list(parameters: Vec<Parameter>, rest: Option<RestParameter>) -> Result<ParameterList> {
    ParameterList::from_parameters(parameters, rest)
}

// =============================================================================
// Statements
// =============================================================================

pub fn block(statements: Vec<Statement>) -> Statement {
    Statement::Block(Block::new(statements))
}

pub fn expression_statement(expression: Expression) -> Statement {
    if expression.starts_with_brace_or_function() {
        Statement::Expression(parenthesized(expression))
    } else {
        Statement::Expression(expression)
    }
}

pub fn return_statement(expression: Option<Expression>) -> Statement {
    Statement::Return(expression)
}

pub fn if_statement(
    condition: Expression,
    then_statement: Statement,
    else_statement: Option<Statement>,
) -> Statement {
    Statement::If(Box::new(IfStatement {
        condition,
        then_statement,
        else_statement,
    }))
}

pub fn while_statement(condition: Expression, body: Statement) -> Statement {
    Statement::While(Box::new(WhileStatement { condition, body }))
}

pub fn throw_statement(expression: Expression) -> Statement {
    Statement::Throw(expression)
}

pub fn try_statement(
    try_block: Vec<Statement>,
    catch_clause: Option<(Option<&str>, Vec<Statement>)>,
    finally_block: Option<Vec<Statement>>,
) -> Result<Statement> {
    let catch_clause = match catch_clause {
        Some((variable, statements)) => Some(CatchClause {
            variable: variable.map(identifier).transpose()?,
            block: Block::new(statements),
        }),
        None => None,
    };
    TryStatement::new(Block::new(try_block), catch_clause, finally_block.map(Block::new))
        .map(|statement| Statement::Try(Box::new(statement)))
}

pub fn variable_statement(
    kind: VariableKind,
    name: &str,
    ty: Option<Type>,
    initializer: Option<Expression>,
) -> Result<Statement> {
    let declaration = VariableDeclaration {
        name: identifier(name)?,
        ty,
        initializer: initializer.map(|e| operand(e, Precedence::Assignment)),
    };
    Ok(Statement::Variable(VariableStatement {
        trivia: Trivia::default(),
        modifiers: ModifierFlags::empty(),
        declaration_list: VariableDeclarationList::new(kind, vec![declaration])?,
    }))
}

// =============================================================================
// Declarations
// =============================================================================

pub fn function_declaration(
    name: &str,
    parameters: Vec<Parameter>,
    return_type: Option<Type>,
    body: Vec<Statement>,
) -> Result<Statement> {
    Ok(Statement::Declaration(Declaration::Function(FunctionDeclaration {
        trivia: Trivia::default(),
        modifiers: ModifierFlags::empty(),
        name: Some(identifier(name)?),
        signature: CallSignature::new(ParameterList::from_parameters(parameters, None)?, return_type),
        body: Some(Block::new(body)),
    })))
}

pub fn class_declaration(name: &str, members: Vec<ClassElement>) -> Result<Statement> {
    Ok(Statement::Declaration(Declaration::Class(ClassDeclaration {
        trivia: Trivia::default(),
        modifiers: ModifierFlags::empty(),
        name: Some(identifier(name)?),
        type_parameters: Vec::new(),
        extends: None,
        implements: Vec::new(),
        members,
    })))
}

pub fn property_declaration(
    name: &str,
    ty: Option<Type>,
    initializer: Option<Expression>,
) -> Result<ClassElement> {
    Ok(ClassElement::new(ClassMember::Property(PropertyDeclaration {
        name: property_name(name)?,
        optional: false,
        ty,
        initializer: initializer.map(|e| operand(e, Precedence::Assignment)),
    })))
}

pub fn method_declaration(
    name: &str,
    parameters: Vec<Parameter>,
    return_type: Option<Type>,
    body: Vec<Statement>,
) -> Result<ClassElement> {
    Ok(ClassElement::new(ClassMember::Method(MethodDeclaration {
        name: property_name(name)?,
        optional: false,
        signature: CallSignature::new(ParameterList::from_parameters(parameters, None)?, return_type),
        body: Some(Block::new(body)),
    })))
}

pub fn interface_declaration(name: &str, members: Vec<TypeMember>) -> Result<Statement> {
    Ok(Statement::Declaration(Declaration::Interface(InterfaceDeclaration {
        trivia: Trivia::default(),
        modifiers: ModifierFlags::empty(),
        name: identifier(name)?,
        type_parameters: Vec::new(),
        extends: Vec::new(),
        members,
    })))
}

pub fn type_alias(name: &str, ty: Type) -> Result<Statement> {
    Ok(Statement::Declaration(Declaration::TypeAlias(TypeAliasDeclaration {
        trivia: Trivia::default(),
        modifiers: ModifierFlags::empty(),
        name: identifier(name)?,
        type_parameters: Vec::new(),
        ty,
    })))
}

/// An enum whose members are `(name, initializer)` pairs.
pub fn enum_declaration(name: &str, members: Vec<(&str, Option<Expression>)>) -> Result<Statement> {
    let members = members
        .into_iter()
        .map(|(member, initializer)| {
            Ok(EnumMember {
                trivia: Trivia::default(),
                name: property_name(member)?,
                initializer: initializer.map(|e| operand(e, Precedence::Assignment)),
            })
        })
        .collect::<Result<Vec<_>>>()?;
    Ok(Statement::Declaration(Declaration::Enum(EnumDeclaration {
        trivia: Trivia::default(),
        modifiers: ModifierFlags::empty(),
        is_const: false,
        name: identifier(name)?,
        members,
    })))
}

pub fn namespace_declaration(segments: &[&str], body: Vec<Statement>) -> Result<Statement> {
    Ok(Statement::Declaration(Declaration::Namespace(NamespaceDeclaration {
        trivia: Trivia::default(),
        modifiers: ModifierFlags::empty(),
        name: entity_name(segments)?,
        body,
    })))
}

/// `import { a, b } from 'module'`
pub fn named_import(names: &[&str], module: &str) -> Result<Statement> {
    let specifiers = names
        .iter()
        .map(|name| {
            Ok(ImportSpecifier {
                property_name: None,
                name: identifier(name)?,
            })
        })
        .collect::<Result<Vec<_>>>()?;
    Ok(Statement::Declaration(Declaration::Import(ImportDeclaration {
        trivia: Trivia::default(),
        clause: Some(ImportClause::new(None, Some(NamedImportBindings::Named(specifiers)))?),
        module_specifier: StringLiteral::with_quote(module, QuoteKind::Single),
    })))
}

// =============================================================================
// Trivia
// =============================================================================

pub fn line_comment(text: &str) -> Result<TriviaNode> {
    SingleLineComment::new(text).map(TriviaNode::SingleLineComment)
}

pub fn block_comment(text: &str) -> Result<TriviaNode> {
    MultiLineComment::new(text).map(TriviaNode::MultiLineComment)
}

pub fn js_doc(doc: JsDocComment) -> TriviaNode {
    TriviaNode::JsDoc(doc)
}

/// Attach leading trivia to a declaration or variable statement. Other
/// statements carry no trivia and are rejected.
pub fn with_leading_trivia(statement: Statement, leading: Vec<TriviaNode>) -> Result<Statement> {
    let mut statement = statement;
    let trivia = match &mut statement {
        Statement::Variable(variable) => &mut variable.trivia,
        Statement::Declaration(declaration) => match declaration {
            Declaration::Function(d) => &mut d.trivia,
            Declaration::Class(d) => &mut d.trivia,
            Declaration::Interface(d) => &mut d.trivia,
            Declaration::TypeAlias(d) => &mut d.trivia,
            Declaration::Enum(d) => &mut d.trivia,
            Declaration::Namespace(d) => &mut d.trivia,
            Declaration::Import(d) => &mut d.trivia,
        },
        _ => return Err(ConstructionError::TriviaNotSupported),
    };
    trivia.leading = leading;
    Ok(statement)
}

#[cfg(test)]
#[path = "../../tests/factory_tests.rs"]
mod tests;
