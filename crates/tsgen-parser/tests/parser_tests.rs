//! Tests for the expression, type, statement and declaration grammars.
use super::*;
use crate::ast::*;
use tsgen_scanner::lex;

fn expression(source: &str) -> Expression {
    let tokens = lex(source).expect("source should lex");
    parse_expression(tokens).unwrap_or_else(|error| panic!("{source}: {error}"))
}

fn expression_error(source: &str) -> ParseError {
    let tokens = lex(source).expect("source should lex");
    parse_expression(tokens).expect_err(source)
}

fn ty(source: &str) -> Type {
    let tokens = lex(source).expect("source should lex");
    parse_type(tokens).unwrap_or_else(|error| panic!("{source}: {error}"))
}

fn type_error(source: &str) -> ParseError {
    let tokens = lex(source).expect("source should lex");
    parse_type(tokens).expect_err(source)
}

fn statement(source: &str) -> Statement {
    let tokens = lex(source).expect("source should lex");
    parse_statement(tokens).unwrap_or_else(|error| panic!("{source}: {error}"))
}

fn statement_error(source: &str) -> ParseError {
    let tokens = lex(source).expect("source should lex");
    parse_statement(tokens).expect_err(source)
}

fn declaration(source: &str) -> Declaration {
    match statement(source) {
        Statement::Declaration(declaration) => declaration,
        other => panic!("expected a declaration for {source}, got {other:?}"),
    }
}

fn binary(expression: &Expression) -> &BinaryExpression {
    match expression {
        Expression::Binary(binary) => binary,
        other => panic!("expected a binary expression, got {other:?}"),
    }
}

fn call(expression: &Expression) -> &CallExpression {
    match expression {
        Expression::Call(call) => call,
        other => panic!("expected a call, got {other:?}"),
    }
}

fn name(expression: &Expression) -> &str {
    match expression {
        Expression::Identifier(identifier) => identifier.as_str(),
        other => panic!("expected an identifier, got {other:?}"),
    }
}

fn function_type(ty: &Type) -> &FunctionType {
    match ty {
        Type::Function(function) => function,
        other => panic!("expected a function type, got {other:?}"),
    }
}

fn signature_of(source: &str) -> CallSignature {
    match declaration(source) {
        Declaration::Function(function) => function.signature,
        other => panic!("expected a function declaration, got {other:?}"),
    }
}

// =============================================================================
// Binary operators
// =============================================================================

#[test]
fn multiplication_binds_tighter_than_addition() {
    let parsed = expression("a + b * c");
    let add = binary(&parsed);
    assert_eq!(add.operator, BinaryOperator::Add);
    assert_eq!(name(&add.left), "a");
    let multiply = binary(&add.right);
    assert_eq!(multiply.operator, BinaryOperator::Multiply);
}

#[test]
fn equal_precedence_folds_left() {
    let parsed = expression("a - b - c");
    let outer = binary(&parsed);
    assert_eq!(name(&outer.right), "c");
    let inner = binary(&outer.left);
    assert_eq!(name(&inner.left), "a");
    assert_eq!(name(&inner.right), "b");
}

#[test]
fn exponent_groups_right() {
    let parsed = expression("a ** b ** c");
    let outer = binary(&parsed);
    assert_eq!(name(&outer.left), "a");
    let inner = binary(&outer.right);
    assert_eq!(inner.operator, BinaryOperator::Exponent);
    assert_eq!(name(&inner.left), "b");
}

#[test]
fn unary_operand_of_exponent_is_rejected() {
    let error = expression_error("-a ** b");
    assert_eq!(error.kind, ParseErrorKind::Syntax);
    assert!(matches!(
        binary(&expression("(-a) ** b")).left,
        Expression::Parenthesized(_)
    ));
}

#[test]
fn logical_operators_bind_looser_than_equality() {
    let parsed = expression("a === b || c && d");
    let or = binary(&parsed);
    assert_eq!(or.operator, BinaryOperator::LogicalOr);
    assert_eq!(binary(&or.left).operator, BinaryOperator::StrictEqual);
    assert_eq!(binary(&or.right).operator, BinaryOperator::LogicalAnd);
}

#[test]
fn adjacent_greater_than_tokens_form_shift_and_comparison_operators() {
    assert_eq!(binary(&expression("a >> b")).operator, BinaryOperator::SignedRightShift);
    assert_eq!(binary(&expression("a >>> b")).operator, BinaryOperator::UnsignedRightShift);
    assert_eq!(binary(&expression("a >= b")).operator, BinaryOperator::GreaterThanOrEqual);
    assert_eq!(binary(&expression("a > b")).operator, BinaryOperator::GreaterThan);

    match expression("a >>>= b") {
        Expression::Assignment(assignment) => {
            assert_eq!(assignment.operator, AssignmentOperator::UnsignedRightShift);
        }
        other => panic!("expected an assignment, got {other:?}"),
    }
    match expression("a >>= b") {
        Expression::Assignment(assignment) => {
            assert_eq!(assignment.operator, AssignmentOperator::SignedRightShift);
        }
        other => panic!("expected an assignment, got {other:?}"),
    }
}

#[test]
fn separated_greater_than_tokens_do_not_combine() {
    expression_error("a > > b");
}

#[test]
fn in_and_instanceof_are_relational() {
    assert_eq!(binary(&expression("k in o")).operator, BinaryOperator::In);
    assert_eq!(
        binary(&expression("x instanceof Y")).operator,
        BinaryOperator::InstanceOf
    );
}

#[test]
fn comma_expression_collects_every_operand() {
    match expression("a, b = 1, c") {
        Expression::Comma(comma) => {
            assert_eq!(comma.expressions().len(), 3);
            assert!(matches!(comma.expressions()[1], Expression::Assignment(_)));
        }
        other => panic!("expected a comma expression, got {other:?}"),
    }
}

// =============================================================================
// Assignment, conditional, unary
// =============================================================================

#[test]
fn assignment_is_right_associative() {
    match expression("a = b = c") {
        Expression::Assignment(outer) => {
            assert_eq!(name(&outer.target), "a");
            assert!(matches!(outer.value, Expression::Assignment(_)));
        }
        other => panic!("expected an assignment, got {other:?}"),
    }
}

#[test]
fn compound_assignment_to_member() {
    match expression("a.b += 1") {
        Expression::Assignment(assignment) => {
            assert_eq!(assignment.operator, AssignmentOperator::Add);
            assert!(matches!(assignment.target, Expression::PropertyAccess(_)));
        }
        other => panic!("expected an assignment, got {other:?}"),
    }
}

#[test]
fn invalid_assignment_target_is_rejected() {
    let error = expression_error("a + b = c");
    assert_eq!(error.kind, ParseErrorKind::Syntax);
    assert_eq!(error.location, TextLocation::new(1, 1));
}

#[test]
fn conditional_expression() {
    match expression("a ? b : c ? d : e") {
        Expression::Conditional(conditional) => {
            assert_eq!(name(&conditional.condition), "a");
            assert_eq!(name(&conditional.when_true), "b");
            assert!(matches!(conditional.when_false, Expression::Conditional(_)));
        }
        other => panic!("expected a conditional, got {other:?}"),
    }
}

#[test]
fn parenthesized_true_branch_before_arrow_false_branch() {
    match expression("a ? (b, c) : d => d * 2") {
        Expression::Conditional(conditional) => {
            assert!(matches!(
                &conditional.when_true,
                Expression::Parenthesized(inner) if matches!(**inner, Expression::Comma(_))
            ));
            assert!(matches!(conditional.when_false, Expression::Arrow(_)));
        }
        other => panic!("expected a conditional, got {other:?}"),
    }
}

#[test]
fn typed_arrow_in_true_branch_needs_the_colon_after_it() {
    match expression("a ? (x): T => x : y") {
        Expression::Conditional(conditional) => {
            let Expression::Arrow(arrow) = &conditional.when_true else {
                panic!("expected an arrow, got {:?}", conditional.when_true);
            };
            assert!(arrow.signature.return_type.is_some());
            assert_eq!(name(&conditional.when_false), "y");
        }
        other => panic!("expected a conditional, got {other:?}"),
    }
}

#[test]
fn prefix_and_postfix_operators() {
    match expression("!typeof -x") {
        Expression::PrefixUnary(not) => {
            assert_eq!(not.operator, PrefixUnaryOperator::LogicalNot);
            match &not.operand {
                Expression::PrefixUnary(type_of) => {
                    assert_eq!(type_of.operator, PrefixUnaryOperator::Typeof);
                }
                other => panic!("expected typeof, got {other:?}"),
            }
        }
        other => panic!("expected a prefix expression, got {other:?}"),
    }

    match expression("a[0]--") {
        Expression::PostfixUnary(postfix) => {
            assert_eq!(postfix.operator, PostfixUnaryOperator::Decrement);
            assert!(matches!(postfix.operand, Expression::ElementAccess(_)));
        }
        other => panic!("expected a postfix expression, got {other:?}"),
    }
}

#[test]
fn increment_of_a_literal_is_rejected() {
    expression_error("1++");
    expression_error("++f()");
}

#[test]
fn type_assertion() {
    match expression("<Foo>bar") {
        Expression::TypeAssertion(assertion) => {
            assert_eq!(assertion.ty, Type::reference(Identifier::new("Foo").unwrap()));
            assert_eq!(name(&assertion.expression), "bar");
        }
        other => panic!("expected a type assertion, got {other:?}"),
    }
}

// =============================================================================
// Calls and member access
// =============================================================================

#[test]
fn member_chain_folds_left_to_right() {
    let parsed = expression("a.b[c](d)");
    let call = call(&parsed);
    assert_eq!(call.kind(), CallKind::Call);
    assert_eq!(call.arguments().len(), 1);
    match call.callee() {
        Expression::ElementAccess(element) => {
            assert!(matches!(element.expression, Expression::PropertyAccess(_)));
        }
        other => panic!("expected an element access, got {other:?}"),
    }
}

#[test]
fn reserved_words_are_valid_property_names_after_dot() {
    match expression("a.default") {
        Expression::PropertyAccess(access) => assert_eq!(access.name.as_str(), "default"),
        other => panic!("expected a property access, got {other:?}"),
    }
}

#[test]
fn generic_call_is_detected() {
    let parsed = expression("f<T>(x)");
    let call = call(&parsed);
    assert_eq!(call.type_arguments().len(), 1);
    assert_eq!(call.arguments().len(), 1);
}

#[test]
fn nested_generic_call_closes_both_argument_lists() {
    let parsed = expression("f<A<B>>(x)");
    let call = call(&parsed);
    match &call.type_arguments()[0] {
        Type::Reference(reference) => assert_eq!(reference.type_arguments.len(), 1),
        other => panic!("expected a type reference, got {other:?}"),
    }
}

#[test]
fn less_than_without_call_is_a_comparison() {
    assert_eq!(binary(&expression("a < b")).operator, BinaryOperator::LessThan);
    let parsed = expression("a < b && c > d");
    assert_eq!(binary(&parsed).operator, BinaryOperator::LogicalAnd);
}

#[test]
fn spread_arguments() {
    let parsed = expression("f(a, ...b)");
    let call = call(&parsed);
    assert!(matches!(call.arguments()[1], Argument::Spread(_)));
}

#[test]
fn new_without_arguments() {
    let parsed = expression("new Foo");
    let call = call(&parsed);
    assert_eq!(call.kind(), CallKind::New);
    assert!(call.arguments().is_empty());
}

#[test]
fn new_with_qualified_callee_and_type_arguments() {
    let parsed = expression("new a.b.C<T>(1)");
    let call = call(&parsed);
    assert_eq!(call.kind(), CallKind::New);
    assert!(matches!(call.callee(), Expression::PropertyAccess(_)));
    assert_eq!(call.type_arguments().len(), 1);
    assert_eq!(call.arguments().len(), 1);
}

#[test]
fn new_with_type_arguments_and_no_argument_list() {
    let parsed = expression("new Foo<T>");
    let call = call(&parsed);
    assert_eq!(call.kind(), CallKind::New);
    assert_eq!(call.type_arguments().len(), 1);
    assert!(call.arguments().is_empty());

    match expression("x = new Map<K, V>, y") {
        Expression::Comma(comma) => assert_eq!(comma.expressions().len(), 2),
        other => panic!("expected a comma expression, got {other:?}"),
    }
    assert!(matches!(expression("new Foo < bar"), Expression::Binary(_)));
}

#[test]
fn new_then_call() {
    let parsed = expression("new Foo()()");
    let outer = call(&parsed);
    assert_eq!(outer.kind(), CallKind::Call);
    assert_eq!(call(outer.callee()).kind(), CallKind::New);
}

#[test]
fn super_call_and_super_member() {
    assert_eq!(call(&expression("super(a)")).kind(), CallKind::Super);
    match expression("super.method()") {
        Expression::Call(call) => match call.callee() {
            Expression::PropertyAccess(access) => {
                assert_eq!(access.expression, Expression::Super);
            }
            other => panic!("expected a property access, got {other:?}"),
        },
        other => panic!("expected a call, got {other:?}"),
    }
    expression_error("super");
}

// =============================================================================
// Primary expressions
// =============================================================================

#[test]
fn literals() {
    assert_eq!(expression("this"), Expression::This);
    assert_eq!(expression("null"), Expression::Null);
    assert_eq!(expression("true"), Expression::Boolean(true));
    assert_eq!(expression("false"), Expression::Boolean(false));
    match expression("'it'") {
        Expression::String(string) => {
            assert_eq!(string.value, "it");
            assert_eq!(string.quote, QuoteKind::Single);
        }
        other => panic!("expected a string, got {other:?}"),
    }
    match expression("0x1F") {
        Expression::Numeric(number) => {
            assert_eq!(number.kind(), NumericLiteralKind::HexInteger);
            assert_eq!(number.value(), 31.0);
        }
        other => panic!("expected a number, got {other:?}"),
    }
}

#[test]
fn non_decimal_literal_range() {
    assert!(matches!(expression("0x1FFFFFFFFFFFFF"), Expression::Numeric(_)));
    let error = expression_error("0x20000000000000");
    assert!(matches!(
        error.kind,
        ParseErrorKind::InvalidNode(ConstructionError::IntegerOutOfRange { .. })
    ));
}

#[test]
fn array_holes_and_trailing_comma() {
    match expression("[a, , b]") {
        Expression::Array(array) => {
            assert_eq!(array.elements.len(), 3);
            assert_eq!(array.elements[1], ArrayElement::Hole);
        }
        other => panic!("expected an array, got {other:?}"),
    }
    match expression("[,]") {
        Expression::Array(array) => assert_eq!(array.elements, vec![ArrayElement::Hole]),
        other => panic!("expected an array, got {other:?}"),
    }
    match expression("[a, ...b,]") {
        Expression::Array(array) => {
            assert_eq!(array.elements.len(), 2);
            assert!(matches!(array.elements[1], ArrayElement::Spread(_)));
        }
        other => panic!("expected an array, got {other:?}"),
    }
}

#[test]
fn object_literal_forms() {
    let source =
        "{ a: 1, b, c = 2, d() { }, get e() { return 1; }, ...f, 'g': 1, 2: 3, [h]: 4, get: 5 }";
    let Expression::Object(object) = expression(source) else {
        panic!("expected an object literal");
    };
    let properties = &object.properties;
    assert_eq!(properties.len(), 10);
    assert!(matches!(properties[0], ObjectLiteralElement::Property(_)));
    assert!(matches!(
        &properties[1],
        ObjectLiteralElement::Shorthand(ShorthandProperty { initializer: None, .. })
    ));
    assert!(matches!(
        &properties[2],
        ObjectLiteralElement::Shorthand(ShorthandProperty { initializer: Some(_), .. })
    ));
    assert!(matches!(properties[3], ObjectLiteralElement::Method(_)));
    assert!(matches!(properties[4], ObjectLiteralElement::GetAccessor(_)));
    assert!(matches!(properties[5], ObjectLiteralElement::Spread(_)));
    assert!(matches!(
        &properties[6],
        ObjectLiteralElement::Property(PropertyAssignment { name: PropertyName::String(_), .. })
    ));
    assert!(matches!(
        &properties[7],
        ObjectLiteralElement::Property(PropertyAssignment { name: PropertyName::Numeric(_), .. })
    ));
    assert!(matches!(
        &properties[8],
        ObjectLiteralElement::Property(PropertyAssignment { name: PropertyName::Computed(_), .. })
    ));
    // `get` followed by `:` is an ordinary property name.
    assert!(matches!(properties[9], ObjectLiteralElement::Property(_)));
}

#[test]
fn shorthand_requires_an_identifier() {
    expression_error("{ 'a' }");
    expression_error("{ class }");
}

#[test]
fn function_expression() {
    match expression("function named<T>(a: T): T { return a; }") {
        Expression::Function(function) => {
            assert_eq!(function.name.as_ref().map(Identifier::as_str), Some("named"));
            assert_eq!(function.signature.type_parameters.len(), 1);
            assert_eq!(function.body.statements.len(), 1);
        }
        other => panic!("expected a function expression, got {other:?}"),
    }
}

// =============================================================================
// Arrow functions
// =============================================================================

fn arrow(source: &str) -> ArrowFunction {
    match expression(source) {
        Expression::Arrow(arrow) => *arrow,
        other => panic!("expected an arrow function for {source}, got {other:?}"),
    }
}

#[test]
fn arrow_function_heads() {
    assert_eq!(arrow("x => x").signature.parameters.len(), 1);
    assert_eq!(arrow("() => 1").signature.parameters.len(), 0);
    assert_eq!(arrow("(a, b) => a").signature.parameters.len(), 2);

    let typed = arrow("(a: number, b?): string => a");
    assert_eq!(typed.signature.parameters.required().len(), 1);
    assert_eq!(typed.signature.parameters.optional().len(), 1);
    assert!(typed.signature.return_type.is_some());

    let generic = arrow("<T>(x: T) => x");
    assert_eq!(generic.signature.type_parameters.len(), 1);
}

#[test]
fn arrow_function_block_body() {
    assert!(matches!(arrow("() => { }").body, ArrowBody::Block(_)));
    assert!(matches!(arrow("a => b => c").body, ArrowBody::Expression(Expression::Arrow(_))));
}

#[test]
fn parenthesized_expression_is_not_an_arrow() {
    assert!(matches!(expression("(a)"), Expression::Parenthesized(_)));
    assert!(matches!(expression("(a, b) + c"), Expression::Binary(_)));
    assert!(matches!(expression("x ? (a) : b"), Expression::Conditional(_)));
}

#[test]
fn arrow_is_an_argument() {
    let parsed = expression("xs.map((x) => x * 2)");
    let call = call(&parsed);
    assert!(matches!(call.arguments()[0], Argument::Expression(Expression::Arrow(_))));
}

// =============================================================================
// Not yet implemented
// =============================================================================

#[test]
fn unsupported_expressions_are_reported_as_not_implemented() {
    for source in [
        "`text`",
        "tag`text`",
        "/ab+c/",
        "class { }",
        "[a, b] = c",
        "{ set x(v) { } }",
        "function ([a]) { }",
    ] {
        let error = expression_error(source);
        assert!(error.is_not_yet_implemented(), "{source}: {error}");
    }
}

#[test]
fn syntax_errors_are_not_reported_as_not_implemented() {
    for source in ["a +", "(a", "f(,)", "a b", "{ a: }"] {
        let error = expression_error(source);
        assert_eq!(error.kind, ParseErrorKind::Syntax, "{source}: {error}");
    }
}

#[test]
fn deep_nesting_is_an_error_not_a_stack_overflow() {
    let source = format!("{}a{}", "(".repeat(400), ")".repeat(400));
    let handle = std::thread::Builder::new()
        .stack_size(32 * 1024 * 1024)
        .spawn(move || expression_error(&source))
        .unwrap();
    let error = handle.join().unwrap();
    assert!(error.message.contains("Maximum nesting depth"), "{error}");
}

// =============================================================================
// Types
// =============================================================================

#[test]
fn empty_parentheses_start_a_function_type() {
    let parsed = ty("() => number");
    let function = function_type(&parsed);
    assert!(function.parameters.is_empty());
    assert_eq!(function.return_type, Type::Predefined(PredefinedType::Number));
}

#[test]
fn parenthesized_keyword_type_is_not_a_function() {
    assert_eq!(
        ty("(number)"),
        Type::Parenthesized(Box::new(Type::Predefined(PredefinedType::Number)))
    );
}

#[test]
fn function_type_detection_from_first_parameter() {
    assert!(matches!(ty("(a: string) => void"), Type::Function(_)));
    assert!(matches!(ty("(a, b) => void"), Type::Function(_)));
    assert!(matches!(ty("(a?) => void"), Type::Function(_)));
    assert!(matches!(ty("(a) => void"), Type::Function(_)));
    assert!(matches!(ty("(...rest: any[]) => void"), Type::Function(_)));
    assert!(matches!(ty("(A | B)[]"), Type::Array(_)));
}

#[test]
fn generic_function_type() {
    let parsed = ty("<T>(x: T) => T[]");
    let function = function_type(&parsed);
    assert_eq!(function.type_parameters.len(), 1);
    assert_eq!(function.parameters.len(), 1);
    assert!(matches!(function.return_type, Type::Array(_)));
}

#[test]
fn constructor_type() {
    match ty("new (x: number) => Foo") {
        Type::Constructor(constructor) => assert_eq!(constructor.parameters.len(), 1),
        other => panic!("expected a constructor type, got {other:?}"),
    }
}

#[test]
fn intersection_binds_tighter_than_union() {
    match ty("A | B & C | D") {
        Type::Union(union) => {
            assert_eq!(union.types().len(), 3);
            assert!(matches!(union.types()[1], Type::Intersection(_)));
        }
        other => panic!("expected a union, got {other:?}"),
    }
}

#[test]
fn nested_type_arguments() {
    match ty("Map<string, Array<Set<number>>>") {
        Type::Reference(reference) => {
            assert_eq!(reference.name.to_string(), "Map");
            assert_eq!(reference.type_arguments.len(), 2);
        }
        other => panic!("expected a type reference, got {other:?}"),
    }
}

#[test]
fn qualified_reference_and_query() {
    match ty("a.b.C<string>") {
        Type::Reference(reference) => {
            assert!(reference.name.is_qualified());
            assert_eq!(reference.name.to_string(), "a.b.C");
        }
        other => panic!("expected a type reference, got {other:?}"),
    }
    match ty("typeof x.y") {
        Type::Query(name) => assert_eq!(name.segments().len(), 2),
        other => panic!("expected a type query, got {other:?}"),
    }
}

#[test]
fn primary_types() {
    assert_eq!(ty("this"), Type::This);
    assert_eq!(ty("void"), Type::Predefined(PredefinedType::Void));
    assert!(matches!(ty("'literal'"), Type::StringLiteral(_)));
    match ty("[string, number[]]") {
        Type::Tuple(tuple) => assert_eq!(tuple.elements.len(), 2),
        other => panic!("expected a tuple, got {other:?}"),
    }
}

#[test]
fn object_type_members() {
    let source = "{ a: string; b?(): void; readonly c: number, [key: string]: any\n (x): y; new (): z; readonly: boolean }";
    let Type::Object(object) = ty(source) else {
        panic!("expected an object type");
    };
    let members = &object.members;
    assert_eq!(members.len(), 7);
    assert!(matches!(&members[0], TypeMember::Property(p) if !p.readonly && !p.optional));
    assert!(matches!(&members[1], TypeMember::Method(m) if m.optional));
    assert!(matches!(&members[2], TypeMember::Property(p) if p.readonly));
    assert!(matches!(members[3], TypeMember::Index(_)));
    assert!(matches!(members[4], TypeMember::Call(_)));
    assert!(matches!(members[5], TypeMember::Construct(_)));
    assert!(matches!(&members[6], TypeMember::Property(p) if !p.readonly));
}

#[test]
fn type_errors() {
    assert_eq!(type_error("A |").kind, ParseErrorKind::Syntax);
    type_error("Array<>");
    type_error("{ a: string b: number }");
    type_error("() =>");
}

// =============================================================================
// Parameters
// =============================================================================

#[test]
fn required_parameter_after_optional_is_rejected_at_that_parameter() {
    let error = statement_error("function f(a, b?, c) { }");
    assert_eq!(error.kind, ParseErrorKind::Syntax);
    assert_eq!(error.location, TextLocation::new(1, 19));
}

#[test]
fn initialized_parameters_are_optional() {
    let signature = signature_of("function f(a, b?, c = 1) { }");
    assert_eq!(signature.parameters.required().len(), 1);
    assert_eq!(signature.parameters.optional().len(), 2);
}

#[test]
fn rest_parameter_must_be_last() {
    let signature = signature_of("function f(a, ...rest: number[]) { }");
    assert_eq!(signature.parameters.rest().map(|rest| rest.name.as_str()), Some("rest"));
    statement_error("function f(...rest, a) { }");
    statement_error("function f(...rest?) { }");
}

#[test]
fn question_mark_and_initializer_are_exclusive() {
    statement_error("function f(a? = 1) { }");
}

#[test]
fn string_literal_parameter_annotation() {
    let signature = signature_of("function create(kind: 'div'): Div;");
    let parameter = &signature.parameters.required()[0];
    assert!(matches!(
        parameter.annotation,
        Some(ParameterAnnotation::StringLiteral(_))
    ));

    let signature = signature_of("function f(kind: 'a' | 'b') { }");
    assert!(matches!(
        signature.parameters.required()[0].annotation,
        Some(ParameterAnnotation::Type(Type::Union(_)))
    ));
}

#[test]
fn destructuring_parameter_is_not_implemented() {
    assert!(statement_error("function f({ a }) { }").is_not_yet_implemented());
    assert!(statement_error("function f(...[a]) { }").is_not_yet_implemented());
}

// =============================================================================
// Statements
// =============================================================================

#[test]
fn variable_statement() {
    let Statement::Variable(variable) = statement("let a: number = 1, b;") else {
        panic!("expected a variable statement");
    };
    let list = &variable.declaration_list;
    assert_eq!(list.kind(), VariableKind::Let);
    assert_eq!(list.declarations().len(), 2);
    assert!(list.declarations()[0].ty.is_some());
    assert!(list.declarations()[1].initializer.is_none());
}

#[test]
fn let_as_identifier() {
    assert!(matches!(statement("let = 1;"), Statement::Expression(_)));
}

#[test]
fn semicolon_insertion() {
    assert!(matches!(statement("a = 1"), Statement::Expression(_)));
    assert!(matches!(statement("{ a = 1 }"), Statement::Block(_)));
    assert_eq!(statement_error("a b").kind, ParseErrorKind::Syntax);
}

#[test]
fn line_break_ends_return_and_postfix() {
    assert!(statement_error("return\na").is_not_yet_implemented());
    assert!(statement_error("a\n++b").is_not_yet_implemented());
}

#[test]
fn statement_lists_are_not_implemented() {
    let error = statement_error("a; b;");
    assert!(error.is_not_yet_implemented());
    assert_eq!(error.location, TextLocation::new(1, 4));
}

#[test]
fn if_else_chain() {
    let Statement::If(statement) = statement("if (a) b(); else if (c) d(); else { }") else {
        panic!("expected an if statement");
    };
    assert!(matches!(statement.else_statement, Some(Statement::If(_))));
}

#[test]
fn loops() {
    assert!(matches!(statement("while (a) a--;"), Statement::While(_)));
    assert!(matches!(statement("do a++; while (a < 10)"), Statement::DoWhile(_)));

    let Statement::For(classic) = statement("for (var i = 0; i < n; i++) { }") else {
        panic!("expected a for statement");
    };
    assert!(matches!(classic.initializer, Some(ForInitializer::Variable(_))));
    assert!(classic.condition.is_some());
    assert!(classic.incrementor.is_some());

    let Statement::For(empty) = statement("for (;;) { }") else {
        panic!("expected a for statement");
    };
    assert!(empty.initializer.is_none() && empty.condition.is_none());
}

#[test]
fn for_in_and_for_of() {
    let Statement::ForIn(for_in) = statement("for (const key in object) { }") else {
        panic!("expected a for-in statement");
    };
    assert_eq!(name(&for_in.expression), "object");

    let Statement::ForOf(for_of) = statement("for (item of items) { }") else {
        panic!("expected a for-of statement");
    };
    assert!(matches!(for_of.initializer, ForInitializer::Expression(_)));

    statement_error("for (let a, b of c) { }");
    statement_error("for (f() in o) { }");
}

#[test]
fn in_operator_inside_for_initializer_parentheses() {
    let Statement::For(classic) = statement("for (var a = (b in c); ; ) { }") else {
        panic!("expected a for statement");
    };
    assert!(classic.condition.is_none());
}

#[test]
fn jumps_and_labels() {
    let Statement::Labeled(labeled) = statement("outer: for (;;) { break outer; continue; }") else {
        panic!("expected a labeled statement");
    };
    assert_eq!(labeled.label.as_str(), "outer");
    assert!(matches!(statement("return;"), Statement::Return(None)));
    assert!(matches!(statement("debugger;"), Statement::Debugger));
    assert!(matches!(statement(";"), Statement::Empty));
}

#[test]
fn throw_requires_expression_on_same_line() {
    assert!(matches!(statement("throw new Error('x');"), Statement::Throw(_)));
    statement_error("throw\nerror;");
}

#[test]
fn switch_statement() {
    let Statement::Switch(switch) =
        statement("switch (x) { case 1: case 2: a(); break; default: b(); }")
    else {
        panic!("expected a switch statement");
    };
    assert_eq!(switch.clauses.len(), 3);
    assert!(switch.clauses[0].statements.is_empty());
    assert_eq!(switch.clauses[1].statements.len(), 2);
    assert!(switch.clauses[2].test.is_none());

    statement_error("switch (x) { default: default: }");
}

#[test]
fn try_statement() {
    let Statement::Try(statement) = statement("try { } catch (e) { } finally { }") else {
        panic!("expected a try statement");
    };
    assert!(statement.catch_clause().is_some());
    assert!(statement.finally_block().is_some());

    assert!(matches!(super::parse_statement(lex("try { } finally { }").unwrap()), Ok(Statement::Try(_))));
    assert_eq!(statement_error("try { }").kind, ParseErrorKind::Syntax);
}

// =============================================================================
// Declarations
// =============================================================================

#[test]
fn function_declarations() {
    let Declaration::Function(function) = declaration("function f(): void;") else {
        panic!("expected a function");
    };
    assert!(function.body.is_none());

    let Declaration::Function(function) = declaration("export default function () { }") else {
        panic!("expected a function");
    };
    assert!(function.name.is_none());
    assert_eq!(
        function.modifiers,
        ModifierFlags::EXPORT | ModifierFlags::DEFAULT
    );

    statement_error("function () { }");
}

#[test]
fn class_declaration() {
    let source = "export abstract class A<T> extends B<T> implements C, D {
        private readonly x: number = 1;
        static y?: string;
        constructor(public a: number) { super(); }
        get z(): number { return 1; }
        abstract m(): void;
        readonly [key: string]: any;
        static: boolean;
    }";
    let Declaration::Class(class) = declaration(source) else {
        panic!("expected a class");
    };
    assert_eq!(class.modifiers, ModifierFlags::EXPORT | ModifierFlags::ABSTRACT);
    assert_eq!(class.type_parameters.len(), 1);
    assert!(class.extends.is_some());
    assert_eq!(class.implements.len(), 2);
    assert_eq!(class.members.len(), 7);

    let x = &class.members[0];
    assert_eq!(x.accessibility, Some(Accessibility::Private));
    assert_eq!(x.modifiers, ModifierFlags::READONLY);
    assert!(matches!(&x.member, ClassMember::Property(p) if p.initializer.is_some()));

    assert!(matches!(&class.members[1].member, ClassMember::Property(p) if p.optional));
    match &class.members[2].member {
        ClassMember::Constructor(constructor) => {
            let parameter = &constructor.parameters.required()[0];
            assert_eq!(parameter.accessibility, Some(Accessibility::Public));
        }
        other => panic!("expected a constructor, got {other:?}"),
    }
    assert!(matches!(class.members[3].member, ClassMember::GetAccessor(_)));
    assert!(matches!(&class.members[4].member, ClassMember::Method(m) if m.body.is_none()));
    match &class.members[5] {
        ClassElement {
            member: ClassMember::Index(index),
            modifiers,
            ..
        } => {
            assert!(index.readonly);
            assert!(modifiers.is_empty());
        }
        other => panic!("expected an index signature, got {other:?}"),
    }
    assert!(class.members[6].modifiers.is_empty());
}

#[test]
fn class_set_accessor_is_not_implemented() {
    assert!(statement_error("class A { set x(v) { } }").is_not_yet_implemented());
}

#[test]
fn interface_and_type_alias() {
    let Declaration::Interface(interface) =
        declaration("interface A<T> extends B, C<T> { x: number; m(): void }")
    else {
        panic!("expected an interface");
    };
    assert_eq!(interface.extends.len(), 2);
    assert_eq!(interface.members.len(), 2);

    let Declaration::TypeAlias(alias) = declaration("type Maybe<T> = T | null;") else {
        panic!("expected a type alias");
    };
    assert_eq!(alias.name.as_str(), "Maybe");
    assert!(matches!(alias.ty, Type::Union(_)));
}

#[test]
fn contextual_keywords_remain_identifiers() {
    assert!(matches!(statement("type = 1;"), Statement::Expression(_)));
    assert!(matches!(statement("namespace;"), Statement::Expression(_)));
}

#[test]
fn enum_declarations() {
    let Declaration::Enum(declaration) = declaration("const enum E { A, B = 2, 'c', }") else {
        panic!("expected an enum");
    };
    assert!(declaration.is_const);
    assert_eq!(declaration.members.len(), 3);
    assert!(declaration.members[1].initializer.is_some());
    assert!(matches!(declaration.members[2].name, PropertyName::String(_)));

    statement_error("enum E { [a] }");
}

#[test]
fn namespace_declaration() {
    let Declaration::Namespace(namespace) =
        declaration("declare namespace a.b { export const x = 1; function f() { } }")
    else {
        panic!("expected a namespace");
    };
    assert_eq!(namespace.modifiers, ModifierFlags::DECLARE);
    assert_eq!(namespace.name.to_string(), "a.b");
    assert_eq!(namespace.body.len(), 2);
    match &namespace.body[0] {
        Statement::Variable(variable) => assert_eq!(variable.modifiers, ModifierFlags::EXPORT),
        other => panic!("expected a variable statement, got {other:?}"),
    }
}

#[test]
fn import_declarations() {
    let Declaration::Import(side_effect) = declaration("import 'polyfill';") else {
        panic!("expected an import");
    };
    assert!(side_effect.clause.is_none());
    assert_eq!(side_effect.module_specifier.value, "polyfill");

    let Declaration::Import(namespace) = declaration("import * as ns from \"m\";") else {
        panic!("expected an import");
    };
    let clause = namespace.clause.expect("clause");
    assert!(clause.default_binding().is_none());
    assert!(matches!(clause.bindings(), Some(NamedImportBindings::Namespace(_))));

    let Declaration::Import(named) =
        declaration("import d, { a, b as c, default as e } from 'm';")
    else {
        panic!("expected an import");
    };
    let clause = named.clause.expect("clause");
    assert_eq!(clause.default_binding().map(Identifier::as_str), Some("d"));
    match clause.bindings() {
        Some(NamedImportBindings::Named(specifiers)) => {
            assert_eq!(specifiers.len(), 3);
            assert!(specifiers[0].property_name.is_none());
            assert_eq!(specifiers[1].name.as_str(), "c");
            assert_eq!(
                specifiers[2].property_name.as_ref().map(Identifier::as_str),
                Some("default")
            );
        }
        other => panic!("expected named bindings, got {other:?}"),
    }

    statement_error("import { default } from 'm';");
    statement_error("import d from;");
}

#[test]
fn declare_modifier_on_variables() {
    let Statement::Variable(variable) = statement("declare const x: number;") else {
        panic!("expected a variable statement");
    };
    assert_eq!(variable.modifiers, ModifierFlags::DECLARE);
}

#[test]
fn export_clauses_are_not_implemented() {
    for source in [
        "export { a };",
        "export * from 'm';",
        "export = a;",
        "export default a;",
    ] {
        assert!(statement_error(source).is_not_yet_implemented(), "{source}");
    }
}
