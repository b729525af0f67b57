use super::*;

#[test]
fn identifiers_are_validated() {
    assert_eq!(identifier("valid_$1").unwrap().as_str(), "valid_$1");
    assert!(matches!(
        identifier("1abc"),
        Err(ConstructionError::InvalidIdentifier(_))
    ));
    assert!(identifier("").is_err());
    assert!(identifier("a-b").is_err());
}

#[test]
fn entity_names_need_a_segment() {
    assert_eq!(entity_name(&["A", "B", "C"]).unwrap().to_string(), "A.B.C");
    assert!(entity_name(&[]).is_err());
    assert!(entity_name(&["A", "not valid"]).is_err());
}

#[test]
fn number_rejects_negative_values() {
    assert!(number(1.5).is_ok());
    assert!(number(-1.0).is_err());
    assert!(numeric_literal(NumericLiteralKind::HexInteger, 0.5).is_err());
}

#[test]
fn comma_needs_two_expressions() {
    let a = identifier_expression("a").unwrap();
    let b = identifier_expression("b").unwrap();
    assert!(matches!(
        comma(vec![a.clone()]),
        Err(ConstructionError::TooFewElements { min: 2, .. })
    ));
    assert!(comma(vec![a, b]).is_ok());
}

#[test]
fn union_and_intersection_need_two_types() {
    let number: Type = PredefinedType::Number.into();
    let string: Type = PredefinedType::String.into();
    assert!(union_type(vec![number.clone()]).is_err());
    assert!(intersection_type(Vec::new()).is_err());
    match union_type(vec![number, string]).unwrap() {
        Type::Union(union) => assert_eq!(union.types().len(), 2),
        other => panic!("expected a union, got {other:?}"),
    }
}

#[test]
fn super_kind_and_super_callee_go_together() {
    assert!(matches!(
        call(Expression::Super, Vec::new()),
        Err(ConstructionError::MismatchedSuperCall)
    ));
    assert!(matches!(
        call_with_kind(
            CallKind::Super,
            identifier_expression("f").unwrap(),
            Vec::new(),
            Vec::new()
        ),
        Err(ConstructionError::MismatchedSuperCall)
    ));
    match super_call(vec![number(1.0).unwrap()]) {
        Expression::Call(call) => {
            assert_eq!(call.kind(), CallKind::Super);
            assert_eq!(call.callee(), &Expression::Super);
        }
        other => panic!("expected a call, got {other:?}"),
    }
}

#[test]
fn parameter_lists_keep_required_before_optional() {
    let list = parameter_list(
        vec![
            parameter("a", None).unwrap(),
            optional_parameter("b", None).unwrap(),
            parameter_with_initializer("c", None, number(1.0).unwrap()).unwrap(),
        ],
        Some(rest_parameter("rest", None).unwrap()),
    )
    .unwrap();
    assert_eq!(list.required().len(), 1);
    assert_eq!(list.optional().len(), 2);
    assert_eq!(list.len(), 4);

    let error = parameter_list(
        vec![
            optional_parameter("a", None).unwrap(),
            parameter("b", None).unwrap(),
        ],
        None,
    )
    .unwrap_err();
    assert_eq!(
        error,
        ConstructionError::RequiredAfterOptional {
            name: "b".to_string()
        }
    );
}

#[test]
fn try_needs_a_handler() {
    assert!(matches!(
        try_statement(Vec::new(), None, None),
        Err(ConstructionError::TryWithoutHandler)
    ));
    assert!(try_statement(Vec::new(), Some((Some("e"), Vec::new())), None).is_ok());
    assert!(try_statement(Vec::new(), None, Some(Vec::new())).is_ok());
}

#[test]
fn named_import_uses_single_quotes() {
    let Statement::Declaration(Declaration::Import(import)) =
        named_import(&["a", "b"], "./module").unwrap()
    else {
        panic!("expected an import");
    };
    assert_eq!(import.module_specifier.quote, QuoteKind::Single);
    match import.clause.as_ref().and_then(ImportClause::bindings) {
        Some(NamedImportBindings::Named(specifiers)) => assert_eq!(specifiers.len(), 2),
        other => panic!("expected named bindings, got {other:?}"),
    }
}

#[test]
fn enum_members_from_pairs() {
    let Statement::Declaration(Declaration::Enum(declaration)) =
        enum_declaration("Color", vec![("Red", None), ("Green", Some(number(2.0).unwrap()))])
            .unwrap()
    else {
        panic!("expected an enum");
    };
    assert_eq!(declaration.members.len(), 2);
    assert!(declaration.members[1].initializer.is_some());
}

#[test]
fn leading_trivia_attaches_to_declarations_only() {
    let comment = line_comment("note").unwrap();
    let alias = type_alias("Id", PredefinedType::String.into()).unwrap();
    let alias = with_leading_trivia(alias, vec![comment.clone()]).unwrap();
    match &alias {
        Statement::Declaration(declaration) => {
            assert_eq!(declaration.trivia().leading, vec![comment.clone()]);
        }
        other => panic!("expected a declaration, got {other:?}"),
    }

    let variable = variable_statement(VariableKind::Let, "v", None, None).unwrap();
    let Statement::Variable(variable) = with_leading_trivia(variable, vec![comment.clone()]).unwrap()
    else {
        panic!("expected a variable statement");
    };
    assert_eq!(variable.trivia.leading, vec![comment.clone()]);
}

#[test]
fn leading_trivia_on_other_statements_is_rejected() {
    let comment = line_comment("keep me").unwrap();
    for statement in [
        expression_statement(identifier_expression("x").unwrap()),
        return_statement(None),
        block(vec![]),
        if_statement(identifier_expression("c").unwrap(), block(vec![]), None),
    ] {
        assert_eq!(
            with_leading_trivia(statement, vec![comment.clone()]),
            Err(ConstructionError::TriviaNotSupported)
        );
    }
}

#[test]
fn comment_constructors_validate_text() {
    assert!(line_comment("a\nb").is_err());
    assert!(block_comment("a */").is_err());
    assert!(matches!(
        block_comment("a\nb").unwrap(),
        TriviaNode::MultiLineComment(_)
    ));
}

#[test]
fn function_declaration_builds_a_signature() {
    let Statement::Declaration(Declaration::Function(function)) = function_declaration(
        "f",
        vec![parameter("x", Some(PredefinedType::Number.into())).unwrap()],
        Some(PredefinedType::Void.into()),
        Vec::new(),
    )
    .unwrap() else {
        panic!("expected a function");
    };
    assert_eq!(function.name.as_ref().map(Identifier::as_str), Some("f"));
    assert_eq!(function.signature.parameters.len(), 1);
    assert_eq!(
        function.signature.return_type,
        Some(Type::Predefined(PredefinedType::Void))
    );
    assert_eq!(function.body, Some(Block::default()));
}

#[test]
fn looser_operands_are_wrapped_in_parentheses() {
    let a = || identifier_expression("a").unwrap();
    let sum = binary(a(), BinaryOperator::Add, a());

    let Expression::Binary(product) = binary(sum.clone(), BinaryOperator::Multiply, a()) else {
        panic!("expected a binary expression");
    };
    assert_eq!(product.left, parenthesized(sum.clone()));
    assert_eq!(product.right, a());

    let Expression::Binary(difference) = binary(a(), BinaryOperator::Subtract, sum.clone()) else {
        panic!("expected a binary expression");
    };
    assert_eq!(difference.right, parenthesized(sum.clone()));

    let Expression::Binary(chained) = binary(sum.clone(), BinaryOperator::Subtract, a()) else {
        panic!("expected a binary expression");
    };
    assert_eq!(chained.left, sum);

    let negated = prefix(PrefixUnaryOperator::Minus, a());
    let Expression::Binary(power) = binary(negated.clone(), BinaryOperator::Exponent, a()) else {
        panic!("expected a binary expression");
    };
    assert_eq!(power.left, parenthesized(negated));
}

#[test]
fn new_callee_with_a_call_is_wrapped_in_parentheses() {
    let inner = new_expression(identifier_expression("Foo").unwrap(), vec![]).unwrap();
    let Expression::Call(outer) = new_expression(inner.clone(), vec![]).unwrap() else {
        panic!("expected a call");
    };
    assert_eq!(outer.callee(), &parenthesized(inner));

    let member = property_access(identifier_expression("ns").unwrap(), "Widget").unwrap();
    let Expression::Call(plain) = new_expression(member.clone(), vec![]).unwrap() else {
        panic!("expected a call");
    };
    assert_eq!(plain.callee(), &member);
}

#[test]
fn compound_types_are_wrapped_in_parentheses() {
    let union = union_type(vec![
        type_reference("A", vec![]).unwrap(),
        type_reference("B", vec![]).unwrap(),
    ])
    .unwrap();
    assert_eq!(
        array_type(union.clone()),
        Type::array(parenthesized_type(union.clone()))
    );

    let Type::Intersection(intersection) =
        intersection_type(vec![union.clone(), type_reference("C", vec![]).unwrap()]).unwrap()
    else {
        panic!("expected an intersection");
    };
    assert_eq!(intersection.types()[0], parenthesized_type(union));
}

#[test]
fn object_bodies_and_statements_are_wrapped_in_parentheses() {
    let literal = object(vec![]);
    let Expression::Arrow(arrow) = arrow_function(vec![], literal.clone()).unwrap() else {
        panic!("expected an arrow function");
    };
    assert_eq!(arrow.body, ArrowBody::Expression(parenthesized(literal.clone())));

    assert_eq!(
        expression_statement(literal.clone()),
        Statement::Expression(parenthesized(literal))
    );
}
