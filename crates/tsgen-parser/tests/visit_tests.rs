use super::*;
use crate::ast::factory as f;

#[derive(Default)]
struct Identifiers(Vec<String>);

impl<'ast> Visitor<'ast> for Identifiers {
    fn visit_identifier(&mut self, identifier: &'ast Identifier) {
        self.0.push(identifier.to_string());
    }
}

fn identifiers_of(statement: &Statement) -> Vec<String> {
    let mut visitor = Identifiers::default();
    statement.accept(&mut visitor);
    visitor.0
}

#[test]
fn function_declaration_visits_names_in_source_order() {
    let body = f::return_statement(Some(f::binary(
        f::identifier_expression("a").unwrap(),
        BinaryOperator::Add,
        f::identifier_expression("b").unwrap(),
    )));
    let function = f::function_declaration(
        "add",
        vec![
            f::parameter("a", Some(f::type_reference("Num", Vec::new()).unwrap())).unwrap(),
            f::optional_parameter("b", None).unwrap(),
        ],
        None,
        vec![body],
    )
    .unwrap();

    assert_eq!(identifiers_of(&function), ["add", "a", "Num", "b", "a", "b"]);
}

#[test]
fn qualified_names_visit_each_segment() {
    let ty = f::qualified_type_reference(&["ns", "Inner", "T"], vec![f::array_type(
        f::type_reference("U", Vec::new()).unwrap(),
    )])
    .unwrap();
    let mut visitor = Identifiers::default();
    ty.accept(&mut visitor);
    assert_eq!(visitor.0, ["ns", "Inner", "T", "U"]);
}

#[derive(Default)]
struct Counter {
    expressions: usize,
    types: usize,
    statements: usize,
    trivia: usize,
}

impl<'ast> Visitor<'ast> for Counter {
    fn visit_expression(&mut self, expression: &'ast Expression) {
        self.expressions += 1;
        walk_expression(self, expression);
    }

    fn visit_type(&mut self, ty: &'ast Type) {
        self.types += 1;
        walk_type(self, ty);
    }

    fn visit_statement(&mut self, statement: &'ast Statement) {
        self.statements += 1;
        walk_statement(self, statement);
    }

    fn visit_trivia(&mut self, trivia: &'ast Trivia) {
        if !trivia.is_empty() {
            self.trivia += 1;
        }
    }
}

#[test]
fn module_visits_nested_statements() {
    let module = Module {
        statements: vec![
            f::with_leading_trivia(
                f::variable_statement(
                    VariableKind::Const,
                    "x",
                    Some(PredefinedType::Number.into()),
                    Some(f::number(1.0).unwrap()),
                )
                .unwrap(),
                vec![f::line_comment("the answer").unwrap()],
            )
            .unwrap(),
            f::if_statement(
                f::identifier_expression("x").unwrap(),
                f::block(vec![f::expression_statement(
                    f::call(f::identifier_expression("log").unwrap(), vec![f::string("hi")])
                        .unwrap(),
                )]),
                None,
            ),
        ],
    };

    let mut counter = Counter::default();
    module.accept(&mut counter);
    // const, if, block, expression statement
    assert_eq!(counter.statements, 4);
    // 1, x, log("hi"), log, "hi"
    assert_eq!(counter.expressions, 5);
    assert_eq!(counter.types, 1);
    assert_eq!(counter.trivia, 1);
}

/// Stops at function boundaries by not walking their children.
#[derive(Default)]
struct TopLevelCalls(usize);

impl<'ast> Visitor<'ast> for TopLevelCalls {
    fn visit_expression(&mut self, expression: &'ast Expression) {
        match expression {
            Expression::Function(_) | Expression::Arrow(_) => {}
            Expression::Call(_) => {
                self.0 += 1;
                walk_expression(self, expression);
            }
            _ => walk_expression(self, expression),
        }
    }
}

#[test]
fn overrides_can_prune_traversal() {
    let inner_call = f::call(f::identifier_expression("g").unwrap(), Vec::new()).unwrap();
    let arrow = f::arrow_function(Vec::new(), inner_call).unwrap();
    let outer = f::call(f::identifier_expression("run").unwrap(), vec![arrow]).unwrap();

    let mut visitor = TopLevelCalls::default();
    outer.accept(&mut visitor);
    assert_eq!(visitor.0, 1);
}

#[test]
fn class_members_and_imports() {
    let class = f::class_declaration(
        "Point",
        vec![
            f::property_declaration("x", Some(PredefinedType::Number.into()), None).unwrap(),
            f::method_declaration(
                "norm",
                Vec::new(),
                Some(PredefinedType::Number.into()),
                vec![f::return_statement(Some(
                    f::property_access(Expression::This, "x").unwrap(),
                ))],
            )
            .unwrap(),
        ],
    )
    .unwrap();
    assert_eq!(identifiers_of(&class), ["Point", "x", "norm", "x"]);

    let import = f::named_import(&["a", "b"], "./mod").unwrap();
    assert_eq!(identifiers_of(&import), ["a", "b"]);
}
