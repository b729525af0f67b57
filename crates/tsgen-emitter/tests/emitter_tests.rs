//! Tests for expression, type, statement, declaration and comment output.
use super::*;
use crate::{CodeDisplay, emit};
use tsgen_common::NewLineKind;
use tsgen_parser::ast::factory as f;
use tsgen_parser::ast::*;
use tsgen_parser::{parse_expression, parse_statement, parse_type};
use tsgen_scanner::lex;

fn reprint_expression(source: &str) -> String {
    let tokens = lex(source).expect("source should lex");
    let expression = parse_expression(tokens).unwrap_or_else(|error| panic!("{source}: {error}"));
    expression.code_display()
}

fn reprint_type(source: &str) -> String {
    let tokens = lex(source).expect("source should lex");
    parse_type(tokens)
        .unwrap_or_else(|error| panic!("{source}: {error}"))
        .code_display()
}

fn reprint_statement(source: &str) -> String {
    let tokens = lex(source).expect("source should lex");
    parse_statement(tokens)
        .unwrap_or_else(|error| panic!("{source}: {error}"))
        .code_display()
}

fn id(name: &str) -> Expression {
    f::identifier_expression(name).unwrap()
}

fn num(value: f64) -> Expression {
    f::number(value).unwrap()
}

/// A binary node built without the factory, which would parenthesize the
/// operands itself.
fn bare_binary(left: Expression, operator: BinaryOperator, right: Expression) -> Expression {
    Expression::Binary(Box::new(BinaryExpression {
        left,
        operator,
        right,
    }))
}

fn number_type() -> Type {
    PredefinedType::Number.into()
}

// =============================================================================
// Expressions
// =============================================================================

#[test]
fn parsed_expressions_print_unchanged() {
    for source in [
        "a + b * c",
        "a ? b : c ? d : e",
        "x = y = z",
        "a.b[c](d, ...e)",
        "new Foo<T>(1)",
        "typeof a === 'string'",
        "!a && b || c",
        "[1, ...rest]",
        "{ a: 1, b }",
        "<any>x",
        "(a, b)",
        "a ** b ** c",
        "i++",
    ] {
        assert_eq!(reprint_expression(source), source);
    }
}

#[test]
fn new_without_arguments_gets_empty_parens() {
    assert_eq!(reprint_expression("new Foo"), "new Foo()");
}

#[test]
fn looser_left_operand_is_parenthesized() {
    let sum = f::binary(id("a"), BinaryOperator::Add, id("b"));
    let product = bare_binary(sum.clone(), BinaryOperator::Multiply, id("c"));
    assert_eq!(product.code_display(), "(a + b) * c");

    let built = f::binary(sum, BinaryOperator::Multiply, id("c"));
    assert_eq!(built.code_display(), "(a + b) * c");
}

#[test]
fn equal_precedence_right_operand_is_parenthesized() {
    let inner = f::binary(id("b"), BinaryOperator::Subtract, id("c"));
    let outer = bare_binary(id("a"), BinaryOperator::Subtract, inner);
    assert_eq!(outer.code_display(), "a - (b - c)");

    let left_nested = f::binary(
        f::binary(id("a"), BinaryOperator::Subtract, id("b")),
        BinaryOperator::Subtract,
        id("c"),
    );
    assert_eq!(left_nested.code_display(), "a - b - c");
}

#[test]
fn exponent_associates_to_the_right() {
    let right = f::binary(
        id("a"),
        BinaryOperator::Exponent,
        f::binary(id("b"), BinaryOperator::Exponent, id("c")),
    );
    assert_eq!(right.code_display(), "a ** b ** c");

    let left = bare_binary(
        f::binary(id("a"), BinaryOperator::Exponent, id("b")),
        BinaryOperator::Exponent,
        id("c"),
    );
    assert_eq!(left.code_display(), "(a ** b) ** c");
}

#[test]
fn unary_base_of_exponent_is_parenthesized() {
    let negated = f::prefix(PrefixUnaryOperator::Minus, id("a"));
    let power = bare_binary(negated, BinaryOperator::Exponent, num(2.0));
    assert_eq!(power.code_display(), "(-a) ** 2");
}

#[test]
fn prefix_operators_keep_apart() {
    let double_minus = f::prefix(
        PrefixUnaryOperator::Minus,
        f::prefix(PrefixUnaryOperator::Minus, id("a")),
    );
    assert_eq!(double_minus.code_display(), "- -a");

    let plus_increment = f::prefix(
        PrefixUnaryOperator::Plus,
        f::prefix(PrefixUnaryOperator::Increment, id("a")),
    );
    assert_eq!(plus_increment.code_display(), "+ ++a");

    let mixed = f::prefix(
        PrefixUnaryOperator::Plus,
        f::prefix(PrefixUnaryOperator::Minus, id("a")),
    );
    assert_eq!(mixed.code_display(), "+-a");

    assert_eq!(f::prefix(PrefixUnaryOperator::Void, num(0.0)).code_display(), "void 0");
}

#[test]
fn new_callee_containing_a_call_is_parenthesized() {
    let callee = f::call(id("factory"), vec![]).unwrap();
    let construct = CallExpression::new(CallKind::New, callee, vec![], vec![]).unwrap();
    assert_eq!(
        Expression::Call(Box::new(construct)).code_display(),
        "new (factory())()"
    );

    let member = f::property_access(id("ns"), "Widget").unwrap();
    let construct = f::new_expression(member, vec![num(1.0)]).unwrap();
    assert_eq!(construct.code_display(), "new ns.Widget(1)");
}

#[test]
fn integer_literal_member_access_is_spaced() {
    let access = f::property_access(num(1.0), "toString").unwrap();
    assert_eq!(access.code_display(), "1 .toString");

    let access = f::property_access(num(1.5), "toFixed").unwrap();
    assert_eq!(access.code_display(), "1.5.toFixed");
}

#[test]
fn conditional_and_assignment_operands() {
    let condition = f::assign(id("a"), id("b"));
    let conditional = f::conditional(condition, id("c"), id("d"));
    assert_eq!(conditional.code_display(), "(a = b) ? c : d");

    let comma = f::comma(vec![id("a"), id("b")]).unwrap();
    let assignment = f::assign(id("x"), comma);
    assert_eq!(assignment.code_display(), "x = (a, b)");
}

#[test]
fn array_holes() {
    assert_eq!(reprint_expression("[, a, , ]"), "[, a, ,]");
    assert_eq!(reprint_expression("[a, ]"), "[a]");
    assert_eq!(reprint_expression("[]"), "[]");
}

#[test]
fn object_literal_with_methods_is_multi_line() {
    let method = ObjectLiteralElement::Method(MethodDefinition {
        name: f::property_name("run").unwrap(),
        signature: CallSignature::default(),
        body: Block::new(vec![f::return_statement(Some(num(1.0)))]),
    });
    let value = f::property_assignment("id", num(7.0)).unwrap();
    let object = f::object(vec![value, method]);
    assert_eq!(
        object.code_display(),
        "{\n    id: 7,\n    run() {\n        return 1;\n    }\n}"
    );
    assert_eq!(f::object(vec![]).code_display(), "{}");
}

#[test]
fn arrow_functions() {
    let bare = f::arrow_function(vec![f::parameter("x", None).unwrap()], id("x")).unwrap();
    assert_eq!(bare.code_display(), "x => x");

    let typed =
        f::arrow_function(vec![f::parameter("x", Some(number_type())).unwrap()], id("x")).unwrap();
    assert_eq!(typed.code_display(), "(x: number) => x");

    let none = f::arrow_function(vec![], f::object(vec![])).unwrap();
    assert_eq!(none.code_display(), "() => ({})");

    let member = f::property_access(f::object(vec![]), "x").unwrap();
    let leading_brace = f::arrow_function(vec![], member).unwrap();
    assert_eq!(leading_brace.code_display(), "() => ({}.x)");
}

#[test]
fn anonymous_function_keyword_spacing() {
    let function = f::function_expression(None, vec![], vec![]).unwrap();
    assert_eq!(function.code_display(), "function () { }");

    let options = EmitOptions::default().with_space_after_anonymous_function_keyword(false);
    assert_eq!(emit(&function, &options), "function() { }");

    let named = f::function_expression(Some("go"), vec![], vec![]).unwrap();
    assert_eq!(emit(&named, &options), "function go() { }");
}

#[test]
fn regular_expression_literal() {
    let regex = f::regular_expression("ab+c", "gi").unwrap();
    assert_eq!(regex.code_display(), "/ab+c/gi");
}

#[test]
fn template_text_is_escaped() {
    let span = TemplateSpan {
        expression: id("x"),
        literal: "`".to_string(),
    };
    let template = f::template("${", vec![span]);
    assert_eq!(template.code_display(), "`\\${${x}\\``");
}

// =============================================================================
// Types
// =============================================================================

#[test]
fn parsed_types_print_unchanged() {
    for source in [
        "string | number",
        "A.B<T, U>",
        "(() => void) | string",
        "string[][]",
        "[number, string]",
        "<T>(a: T, ...rest: any[]) => T",
        "new (x: number) => Foo",
        "{ a: string; b?: number }",
        "typeof a.b",
        "'literal'",
        "{}",
    ] {
        assert_eq!(reprint_type(source), source);
    }
}

#[test]
fn compound_members_are_parenthesized() {
    let function = f::function_type(vec![], ParameterList::empty(), PredefinedType::Void.into());
    let union = f::union_type(vec![function, number_type()]).unwrap();
    assert_eq!(union.code_display(), "(() => void) | number");

    let inner = f::union_type(vec![number_type(), PredefinedType::String.into()]).unwrap();
    assert_eq!(Type::array(inner.clone()).code_display(), "(number | string)[]");

    let intersection = f::intersection_type(vec![inner, f::type_reference("A", vec![]).unwrap()]);
    assert_eq!(intersection.unwrap().code_display(), "(number | string) & A");
}

#[test]
fn type_members() {
    let index = TypeMember::Index(IndexSignature {
        readonly: true,
        parameter_name: f::identifier("key").unwrap(),
        parameter_type: PredefinedType::String.into(),
        ty: number_type(),
    });
    assert_eq!(index.code_display(), "readonly [key: string]: number");

    let construct = TypeMember::Construct(CallSignature::new(
        ParameterList::empty(),
        Some(f::type_reference("Foo", vec![]).unwrap()),
    ));
    assert_eq!(construct.code_display(), "new (): Foo");
}

// =============================================================================
// Statements
// =============================================================================

#[test]
fn embedded_statements_are_indented() {
    assert_eq!(
        reprint_statement("if (a) b(); else c();"),
        "if (a)\n    b();\nelse\n    c();\n"
    );
    assert_eq!(
        reprint_statement("if (a) { b(); } else if (c) { d(); }"),
        "if (a) {\n    b();\n} else if (c) {\n    d();\n}\n"
    );
    assert_eq!(reprint_statement("for (;;) {}"), "for (;;) { }\n");
    assert_eq!(
        reprint_statement("outer: for (;;) break outer;"),
        "outer: for (;;)\n    break outer;\n"
    );
}

#[test]
fn dangling_else_gets_a_block() {
    let inner = f::if_statement(id("b"), f::expression_statement(id("c")), None);
    let outer = f::if_statement(id("a"), inner, Some(f::expression_statement(id("d"))));
    assert_eq!(
        outer.code_display(),
        "if (a) {\n    if (b)\n        c;\n} else\n    d;\n"
    );
}

#[test]
fn switch_and_try() {
    assert_eq!(
        reprint_statement("switch (x) { case 1: a(); break; default: b(); }"),
        "switch (x) {\n    case 1:\n        a();\n        break;\n    default:\n        b();\n}\n"
    );
    assert_eq!(
        reprint_statement("try { a(); } catch (e) { } finally { b(); }"),
        "try {\n    a();\n} catch (e) { } finally {\n    b();\n}\n"
    );
    let bare_catch = f::try_statement(vec![], Some((None, vec![])), None).unwrap();
    assert_eq!(bare_catch.code_display(), "try { } catch { }\n");
}

#[test]
fn do_while_follows_the_closing_brace() {
    let increment = f::postfix(id("x"), PostfixUnaryOperator::Increment);
    let statement = Statement::DoWhile(Box::new(DoWhileStatement {
        body: f::block(vec![f::expression_statement(increment)]),
        condition: f::binary(id("x"), BinaryOperator::LessThan, num(3.0)),
    }));
    assert_eq!(statement.code_display(), "do {\n    x++;\n} while (x < 3);\n");
}

#[test]
fn in_operator_in_for_head_is_parenthesized() {
    let statement = Statement::For(Box::new(ForStatement {
        initializer: Some(ForInitializer::Expression(f::binary(
            id("a"),
            BinaryOperator::In,
            id("b"),
        ))),
        condition: None,
        incrementor: None,
        body: Statement::Empty,
    }));
    assert_eq!(statement.code_display(), "for ((a in b);;)\n    ;\n");
}

#[test]
fn statement_starting_with_brace_is_parenthesized() {
    let member = f::property_access(f::object(vec![]), "x").unwrap();
    assert_eq!(f::expression_statement(member).code_display(), "({}.x);\n");

    let function = f::function_expression(None, vec![], vec![]).unwrap();
    let call = f::call(function, vec![]).unwrap();
    assert_eq!(
        f::expression_statement(call).code_display(),
        "(function () { }());\n"
    );
}

#[test]
fn variable_statements() {
    assert_eq!(
        reprint_statement("let a: number = 1, b;"),
        "let a: number = 1, b;\n"
    );
    assert_eq!(
        reprint_statement("export const x = (1, 2);"),
        "export const x = (1, 2);\n"
    );
}

// =============================================================================
// Declarations
// =============================================================================

#[test]
fn class_declaration_layout() {
    let class = f::class_declaration(
        "Point",
        vec![
            f::property_declaration("x", Some(number_type()), Some(num(0.0))).unwrap(),
            f::method_declaration(
                "norm",
                vec![],
                Some(number_type()),
                vec![f::return_statement(Some(id("x")))],
            )
            .unwrap(),
        ],
    )
    .unwrap();
    assert_eq!(
        class.code_display(),
        "class Point {\n    x: number = 0;\n    norm(): number {\n        return x;\n    }\n}\n"
    );
}

#[test]
fn parsed_class_with_heritage_and_modifiers() {
    assert_eq!(
        reprint_statement(
            "class A extends B<T> implements C { private static x?: string; constructor(public a: number) { super(); } }"
        ),
        "class A extends B<T> implements C {\n    private static x?: string;\n    constructor(public a: number) {\n        super();\n    }\n}\n"
    );
}

#[test]
fn interface_and_type_alias() {
    assert_eq!(
        reprint_statement(
            "interface I<T> extends J { readonly a: T; m?(x: number): void; [k: string]: any; }"
        ),
        "interface I<T> extends J {\n    readonly a: T;\n    m?(x: number): void;\n    [k: string]: any;\n}\n"
    );
    assert_eq!(
        f::interface_declaration("Empty", vec![]).unwrap().code_display(),
        "interface Empty {\n}\n"
    );
    assert_eq!(
        reprint_statement("type F = (a: string) => void;"),
        "type F = (a: string) => void;\n"
    );
}

#[test]
fn enum_namespace_and_import() {
    let color = f::enum_declaration("Color", vec![("Red", None), ("Green", Some(num(2.0)))]);
    assert_eq!(
        color.unwrap().code_display(),
        "enum Color {\n    Red,\n    Green = 2\n}\n"
    );

    let constant = f::variable_statement(VariableKind::Const, "x", None, Some(num(1.0))).unwrap();
    let namespace = f::namespace_declaration(&["A", "B"], vec![constant]).unwrap();
    assert_eq!(namespace.code_display(), "namespace A.B {\n    const x = 1;\n}\n");

    let import = f::named_import(&["a", "b"], "m").unwrap();
    assert_eq!(import.code_display(), "import { a, b } from 'm';\n");

    assert_eq!(
        reprint_statement("import * as ns from \"m\";"),
        "import * as ns from \"m\";\n"
    );
}

// =============================================================================
// Comments and options
// =============================================================================

#[test]
fn leading_comments() {
    let function = f::function_declaration("f", vec![], None, vec![]).unwrap();
    let commented =
        f::with_leading_trivia(function.clone(), vec![f::line_comment("hello").unwrap()]).unwrap();
    assert_eq!(commented.code_display(), "// hello\nfunction f() { }\n");

    let block =
        f::with_leading_trivia(function, vec![f::block_comment("first\n  second").unwrap()])
            .unwrap();
    assert_eq!(
        block.code_display(),
        "/*\n * first\n * second\n */\nfunction f() { }\n"
    );
}

#[test]
fn spacing_preserving_comment_is_written_verbatim() {
    let comment = TriviaNode::MultiLineComment(
        MultiLineComment::preserving_spacing("  line one\n    line two").unwrap(),
    );
    assert_eq!(comment.code_display(), "/*  line one\n    line two*/");

    let single = TriviaNode::MultiLineComment(MultiLineComment::preserving_spacing("x").unwrap());
    assert_eq!(single.code_display(), "/*x*/");
}

#[test]
fn spacing_preserving_comment_is_not_reindented() {
    let comment = TriviaNode::MultiLineComment(
        MultiLineComment::preserving_spacing("*\n * kept\n ").unwrap(),
    );
    let class = f::class_declaration(
        "C",
        vec![ClassElement {
            trivia: Trivia::leading(vec![comment]),
            ..f::property_declaration("p", None, None).unwrap()
        }],
    )
    .unwrap();
    assert_eq!(class.code_display(), "class C {\n    /**\n * kept\n */\n    p;\n}\n");
}

#[test]
fn js_doc_layout() {
    let doc = JsDocComment::builder()
        .description("Adds.")
        .param("a", "first")
        .build()
        .unwrap();
    assert_eq!(
        f::js_doc(doc).code_display(),
        "/**\n * Adds.\n * @param a first\n */"
    );

    let short = f::js_doc(JsDocComment::builder().description("Short.").build().unwrap());
    let options = EmitOptions::default().with_single_line_js_doc_comments(true);
    assert_eq!(emit(&short, &options), "/** Short. */");
    assert_eq!(short.code_display(), "/**\n * Short.\n */");
}

#[test]
fn trailing_trivia() {
    let mut statement = f::variable_statement(VariableKind::Let, "a", None, None).unwrap();
    if let Statement::Variable(variable) = &mut statement {
        variable.trivia.trailing = vec![f::line_comment("note").unwrap(), TriviaNode::Newline];
    }
    assert_eq!(statement.code_display(), "let a; // note\n\n");
}

#[test]
fn options_control_new_lines_and_indentation() {
    let function =
        f::function_declaration("f", vec![], None, vec![f::return_statement(None)]).unwrap();
    let options = EmitOptions::default()
        .with_new_line(NewLineKind::CarriageReturnLineFeed)
        .with_indentation("\t");
    assert_eq!(emit(&function, &options), "function f() {\r\n\treturn;\r\n}\r\n");
}

#[test]
fn module_emits_every_statement() {
    let module = Module {
        statements: vec![
            f::variable_statement(VariableKind::Let, "a", None, Some(num(1.0))).unwrap(),
            f::expression_statement(f::call(id("log"), vec![id("a")]).unwrap()),
        ],
    };
    assert_eq!(module.code_display(), "let a = 1;\nlog(a);\n");

    let options = EmitOptions::default();
    let mut printer = Printer::new(&options);
    module.emit_to(&mut printer);
    assert_eq!(printer.output(), "let a = 1;\nlog(a);\n");
}
