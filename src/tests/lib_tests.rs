use super::*;

#[test]
fn text_entry_points_run_the_whole_pipeline() {
    let expression = parse_expression_text("f(a, b)").unwrap();
    assert_eq!(expression.code_display(), "f(a, b)");

    let ty = parse_type_text("Array<string>").unwrap();
    assert_eq!(ty.code_display(), "Array<string>");

    let statement = parse_statement_text("return x;").unwrap();
    assert_eq!(statement.code_display(), "return x;\n");
}

#[test]
fn errors_keep_their_stage() {
    assert!(matches!(parse_expression_text("'open"), Err(Error::Lex(_))));
    assert!(matches!(parse_expression_text("a +"), Err(Error::Parse(_))));

    let gap = parse_statement_text("a; b;").unwrap_err();
    assert!(gap.is_not_yet_implemented());
    assert!(!parse_type_text("=").unwrap_err().is_not_yet_implemented());
}

#[test]
fn construction_errors_convert() {
    let error: Error = tsgen_parser::ast::Identifier::new("1abc").unwrap_err().into();
    assert!(matches!(error, Error::Construction(_)));
}

#[test]
fn reformat_uses_options() {
    let options = EmitOptions::default().with_indentation("  ");
    assert_eq!(
        reformat_statement("while(x){x--}", &options).unwrap(),
        "while (x) {\n  x--;\n}\n"
    );
    assert_eq!(
        reformat_expression("a*(b+c)", &options).unwrap(),
        "a * (b + c)"
    );
}
