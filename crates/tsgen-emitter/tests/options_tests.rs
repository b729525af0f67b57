use super::*;

#[test]
fn defaults() {
    let options = EmitOptions::default();
    assert_eq!(options.new_line(), NewLineKind::LineFeed);
    assert_eq!(options.indentation(), "    ");
    assert!(!options.single_line_js_doc_comments());
    assert!(options.space_after_anonymous_function_keyword());
}

#[test]
fn with_helpers_return_modified_copies() {
    let base = EmitOptions::default();
    let tabs = base.clone().with_indentation("\t");
    assert_eq!(tabs.indentation(), "\t");
    assert_eq!(base.indentation(), "    ");

    let compact = base
        .with_single_line_js_doc_comments(true)
        .with_space_after_anonymous_function_keyword(false);
    assert!(compact.single_line_js_doc_comments());
    assert!(!compact.space_after_anonymous_function_keyword());
}

#[test]
fn json_fields_are_camel_case_and_optional() {
    let options = EmitOptions::from_json(r#"{ "newLine": "crlf", "indentation": "  " }"#).unwrap();
    assert_eq!(options.new_line(), NewLineKind::CarriageReturnLineFeed);
    assert_eq!(options.indentation(), "  ");
    assert!(options.space_after_anonymous_function_keyword());

    assert_eq!(EmitOptions::from_json("{}").unwrap(), EmitOptions::default());
}

#[test]
fn json_round_trip() {
    let options = EmitOptions::default().with_single_line_js_doc_comments(true);
    let json = serde_json::to_string(&options).unwrap();
    assert!(json.contains("\"singleLineJsDocComments\":true"));
    assert_eq!(EmitOptions::from_json(&json).unwrap(), options);
}

#[test]
fn json_rejects_unknown_new_line() {
    assert!(EmitOptions::from_json(r#"{ "newLine": "cr" }"#).is_err());
}
