use slc_core::ParamValue;
use slc_parser::{error::ErrorCode, lint, parse};

const SCENE: &str = "Create List Foo() {\n\nCreate Square Sq1(x:100, y:100) {\n  Style { color:red; }\n}\n}";

#[test]
fn test_single_square() {
    let document = parse(SCENE, Some("Foo")).expect("Failed to parse");

    assert_eq!(document.list_name(), "Foo");
    assert_eq!(document.len(), 1);

    let shape = &document.shapes()[0];
    assert_eq!(shape.shape_type(), "Square");
    assert_eq!(shape.name(), "Sq1");
    assert_eq!(shape.param("x"), Some(&ParamValue::Integer(100)));
    assert_eq!(shape.param("y"), Some(&ParamValue::Integer(100)));
    assert_eq!(shape.params().len(), 2);
    assert_eq!(shape.style().get("color").map(String::as_str), Some("red"));
    assert_eq!(shape.style().len(), 1);
}

#[test]
fn test_filename_mismatch() {
    let err = parse(SCENE, Some("Bar")).unwrap_err();

    assert_eq!(err.code(), Some(ErrorCode::E201));
    assert!(err.message().contains("must match"));
    assert_eq!((err.line(), err.column()), (1, 1));
}

#[test]
fn test_filename_with_directory_and_extension() {
    assert!(parse(SCENE, Some("scenes/Foo.slc")).is_ok());
    assert!(parse(SCENE, None).is_ok());
}

#[test]
fn test_lowercase_list_name() {
    let source = "Create List foo() {\nCreate Square Sq1(x:1) {\nStyle { color:red; }\n}\n}";
    let err = parse(source, None).unwrap_err();

    assert_eq!(err.code(), Some(ErrorCode::E200));
    assert_eq!(err.line(), 1);
}

#[test]
fn test_lowercase_shape_name() {
    let source = "Create List Foo() {\n\n  Create Square sq1(x:1,y:2) {\n    Style { color:red; }\n  }\n}";
    let err = parse(source, Some("Foo")).unwrap_err();

    assert_eq!(err.code(), Some(ErrorCode::E204));
    assert!(err.message().contains("must start with an uppercase letter"));
    assert_eq!(err.line(), 3);
    assert_eq!(err.column(), 3);
}

#[test]
fn test_missing_style_block() {
    let source = "Create List Foo() {\nCreate Square Sq1(x:1) {\n}\n}";
    let err = parse(source, None).unwrap_err();

    assert_eq!(err.code(), Some(ErrorCode::E102));
    // Just past the `{` that ends the header
    assert_eq!((err.line(), err.column()), (2, 25));
}

#[test]
fn test_invalid_parameter_value() {
    let source = "Create List Foo() {\nCreate Square Sq1(x:100, y:abc) {\nStyle { color:red; }\n}\n}";
    let err = parse(source, None).unwrap_err();

    assert_eq!(err.code(), Some(ErrorCode::E301));
    assert!(err.message().contains("'y'"));
    assert!(err.message().contains("'abc'"));
    assert_eq!(err.line(), 2);
}

/// Wrap one shape's header and style lines in a `Foo` list.
fn scene_with(shape: &str) -> String {
    format!("Create List Foo() {{\n{shape}\n}}\n}}")
}

#[test]
fn test_style_value_with_slashes() {
    let source =
        scene_with("Create Square Sq1(x:1) {\n  Style { image: url(http://x/a.png); color:red; }");
    let document = parse(&source, Some("Foo")).expect("Failed to parse");

    let style = document.shapes()[0].style();
    assert_eq!(style.get("image").map(String::as_str), Some("url(http://x/a.png)"));
    assert_eq!(style.get("color").map(String::as_str), Some("red"));
    assert_eq!(style.len(), 2);
}

#[test]
fn test_style_value_with_keywords() {
    let source = scene_with("Create Square Sq1(x:1) {\n  Style { label: Create; color:red; }");
    let document = parse(&source, Some("Foo")).expect("Failed to parse");

    let style = document.shapes()[0].style();
    assert_eq!(style.get("label").map(String::as_str), Some("Create"));
    assert_eq!(style.get("color").map(String::as_str), Some("red"));
}

#[test]
fn test_style_splits_on_quoted_semicolon() {
    let source = scene_with("Create Square Sq1() {\n  Style { label:\"a;b\"; color:red }");
    let document = parse(&source, Some("Foo")).expect("Failed to parse");

    let style = document.shapes()[0].style();
    assert_eq!(style.get("label").map(String::as_str), Some("\"a"));
    assert_eq!(style.get("color").map(String::as_str), Some("red"));
}

#[test]
fn test_comment_lines_inside_shape() {
    let source = scene_with(
        "Create Square Sq1(x:1,\n  // y comes next\n  y:2) {\n  Style {\n    // color:blue; }\n    color:red;\n  }",
    );
    let document = parse(&source, Some("Foo")).expect("Failed to parse");

    let shape = &document.shapes()[0];
    let keys: Vec<_> = shape.params().keys().map(String::as_str).collect();
    assert_eq!(keys, ["x", "y"]);
    assert_eq!(shape.style().get("color").map(String::as_str), Some("red"));
    assert_eq!(shape.style().len(), 1);
}

#[test]
fn test_trailing_slashes_in_header_are_not_a_comment() {
    let source = scene_with("Create Square Sq1(x:1, // c\n y:2) {\n  Style { color:red; }");
    let err = parse(&source, Some("Foo")).unwrap_err();

    assert_eq!(err.code(), Some(ErrorCode::E300));
    assert_eq!(err.message(), "invalid parameter name '// c\n y'");
    assert_eq!((err.line(), err.column()), (2, 24));
}

#[test]
fn test_shapes_in_source_order() {
    let source = r#"
// Back to front
Create List Scene() {
    Create Square Background(x:0, y:0) {
        Style { color:#202020; width:400; height:300; }
    }
    Create Circle Sun(x:320, y:60, label:"the sun") {
        Style { color:yellow; }
    }
    Create Triangle Roof(x:100.5, y:-20) {
        Style { color:red; }
    }
}
"#;

    let document = parse(source, Some("Scene.slc")).expect("Failed to parse");
    let shapes: Vec<_> = document
        .shapes()
        .iter()
        .map(|s| (s.shape_type(), s.name()))
        .collect();
    assert_eq!(
        shapes,
        [
            ("Square", "Background"),
            ("Circle", "Sun"),
            ("Triangle", "Roof"),
        ]
    );

    let background = document.shape("Background").expect("Background shape");
    assert_eq!(background.width(), 400);
    assert_eq!(background.height(), 300);
    assert_eq!(background.color(), "#202020");

    let sun = document.shape("Sun").expect("Sun shape");
    assert_eq!(
        sun.param("label"),
        Some(&ParamValue::String("the sun".to_string()))
    );
    assert_eq!(sun.width(), 50);

    let roof = document.shape("Roof").expect("Roof shape");
    assert_eq!(roof.param("x"), Some(&ParamValue::Float(100.5)));
    assert_eq!(roof.param("y"), Some(&ParamValue::Integer(-20)));
}

#[test]
fn test_missing_list_regardless_of_content() {
    for source in [
        "",
        "\n\n",
        "Create Square Sq1(x:1) {\nStyle { color:red; }\n}",
        "// Create List Foo() {",
        "Create List Foo(x:1) {\n}",
    ] {
        let err = parse(source, None).unwrap_err();
        assert_eq!(err.code(), Some(ErrorCode::E100), "source: {source:?}");
        assert_eq!((err.line(), err.column()), (1, 1));
    }
}

#[test]
fn test_duplicate_shape_name() {
    let source = "Create List Foo() {\n\
                  Create Square A(x:1) { Style { color:red; } }\n\
                  Create Circle A(x:2) { Style { color:blue; } }\n\
                  }";
    let err = parse(source, None).unwrap_err();

    assert_eq!(err.code(), Some(ErrorCode::E205));
    assert_eq!(err.line(), 3);
    assert_eq!(err.labels().len(), 2);
}

#[test]
fn test_reserved_and_missing_names() {
    let reserved = "Create List Foo() {\nCreate Square list(x:1) { Style {} }\n}";
    assert_eq!(
        parse(reserved, None).unwrap_err().code(),
        Some(ErrorCode::E203)
    );

    let unnamed = "Create List Foo() {\nCreate Square (x:1) { Style {} }\n}";
    assert_eq!(
        parse(unnamed, None).unwrap_err().code(),
        Some(ErrorCode::E202)
    );
}

#[test]
fn test_parse_is_idempotent() {
    let first = parse(SCENE, Some("Foo"));
    let second = parse(SCENE, Some("Foo"));
    assert_eq!(first, second);

    let first = parse(SCENE, Some("Bar"));
    let second = parse(SCENE, Some("Bar"));
    assert_eq!(first, second);
}

#[test]
fn test_lint_is_independent_of_parse() {
    let source = "Create List Foo() {\n  Create Square Sq1(x:1)\n  Style color:red;\n}";

    assert!(parse(source, None).is_err());
    let codes: Vec<_> = lint(source).iter().filter_map(|d| d.code()).collect();
    assert_eq!(codes, [ErrorCode::W001, ErrorCode::W002]);
}
