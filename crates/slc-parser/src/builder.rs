//! Document builder for SLC sources.
//!
//! Drives the scanner over the significant tokens and feeds every header
//! through validation, parameter parsing and style extraction, producing a
//! [`Document`] or the first [`Diagnostic`] encountered.
//!
//! The List header may appear anywhere in the source. Shapes found before it
//! are held back and processed, in source order, as soon as the List header
//! has been validated, so List rules are always reported first.

use log::{debug, info, trace};

use slc_core::{Document, Shape};

use crate::{
    error::{Diagnostic, ErrorCode, Result},
    lexer, params,
    scanner::{Header, ListHeader, Scanner, ShapeHeader, StyleBlock},
    span::{Span, Spanned},
    style,
    validate::Validator,
};

/// Where the builder is in the document.
#[derive(Debug)]
enum State<'src> {
    /// No List header seen yet
    ExpectList,
    /// List header accepted; shapes may follow
    ExpectShapesOrEnd(ListHeader<'src>),
    /// End of input reached with a List header
    Done(ListHeader<'src>),
}

/// Builds a [`Document`] from one source text.
pub(crate) struct Builder<'src> {
    source: &'src str,
    validator: Validator<'src>,
    shapes: Vec<Shape>,
}

impl<'src> Builder<'src> {
    pub fn new(source: &'src str, filename: Option<&'src str>) -> Self {
        Self {
            source,
            validator: Validator::new(filename),
            shapes: Vec::new(),
        }
    }

    /// Scan, validate and convert the whole source, stopping at the first error.
    pub fn build(mut self) -> Result<Document> {
        debug!(bytes = self.source.len(); "Building document");

        let tokens: Vec<_> = lexer::tokenize(self.source)
            .into_iter()
            .filter(|token| !token.is_trivia())
            .collect();
        trace!(tokens = tokens.len(); "Tokenized source");

        let mut scanner = Scanner::new(self.source, &tokens);
        let mut pending: Vec<(ShapeHeader<'src>, Option<StyleBlock<'src>>)> = Vec::new();
        let mut state = State::ExpectList;

        loop {
            state = match state {
                State::ExpectList => match scanner.next_header() {
                    Some(Header::List(list)) => {
                        self.validator.check_list(&list)?;
                        debug!(list = *list.name.inner(); "Found list declaration");
                        for (header, block) in pending.drain(..) {
                            self.add_shape(&header, block)?;
                        }
                        State::ExpectShapesOrEnd(list)
                    }
                    Some(Header::Shape(header)) => {
                        trace!(shape = header.display_name(); "Holding shape until the list is declared");
                        let block = scanner.find_style();
                        pending.push((header, block));
                        State::ExpectList
                    }
                    None => return Err(missing_list()),
                },
                State::ExpectShapesOrEnd(list) => match scanner.next_header() {
                    Some(Header::List(duplicate)) => {
                        return Err(duplicate_list(&duplicate, &list));
                    }
                    Some(Header::Shape(header)) => {
                        let block = scanner.find_style();
                        self.add_shape(&header, block)?;
                        State::ExpectShapesOrEnd(list)
                    }
                    None => State::Done(list),
                },
                State::Done(list) => {
                    if self.shapes.is_empty() {
                        return Err(no_shapes());
                    }
                    info!(list = *list.name.inner(), shapes = self.shapes.len(); "Document built");
                    return Ok(Document::new(*list.name.inner(), self.shapes));
                }
            };
        }
    }

    /// Validate one shape and append it to the document.
    fn add_shape(
        &mut self,
        header: &ShapeHeader<'src>,
        block: Option<StyleBlock<'src>>,
    ) -> Result<()> {
        self.validator.check_shape(header)?;
        let params = params::parse_params(&header.params)?;

        let Some(block) = block else {
            return Err(missing_style(header));
        };
        let style = style::extract_style(&block.body);

        let name = header.name.map_or("", |name| *name.inner());
        debug!(
            shape_type = *header.shape_type.inner(),
            name = name,
            params = params.len(),
            style = style.len();
            "Built shape"
        );
        self.shapes
            .push(Shape::new(*header.shape_type.inner(), name, params, style));
        Ok(())
    }
}

fn missing_list() -> Diagnostic {
    Diagnostic::error("expected a 'Create List <Name>() {' declaration")
        .with_code(ErrorCode::E100)
        .with_label(Span::at(0), "no list declaration in this file")
        .with_help("start the file with 'Create List <Name>() {'")
}

fn no_shapes() -> Diagnostic {
    Diagnostic::error("no shapes found; each shape must be 'Create <Type> <Name>(params) { }'")
        .with_code(ErrorCode::E101)
        .with_label(Span::at(0), "the list is empty")
        .with_help("add a shape such as 'Create Square Sq1(x:100, y:100) { Style { color:red; } }'")
}

fn duplicate_list(duplicate: &ListHeader<'_>, first: &ListHeader<'_>) -> Diagnostic {
    Diagnostic::error(format!(
        "duplicate List declaration '{}'",
        duplicate.name.inner()
    ))
    .with_code(ErrorCode::E103)
    .with_label(duplicate.span, "second list declared here")
    .with_secondary_label(first.span, "first declared here")
    .with_help("a file declares exactly one list")
}

fn missing_style(header: &ShapeHeader<'_>) -> Diagnostic {
    let name: Spanned<&str> = header.name.unwrap_or(header.shape_type);
    Diagnostic::error(format!(
        "missing 'Style {{ ... }}' block after '{}'",
        name.inner()
    ))
    .with_code(ErrorCode::E102)
    .with_label(Span::at(header.span.end()), "expected a style block here")
    .with_secondary_label(header.span, "shape declared here")
    .with_help("add 'Style { color:red; }' inside the shape")
}

#[cfg(test)]
mod tests {
    use super::*;
    use slc_core::ParamValue;

    fn build(source: &str) -> Result<Document> {
        Builder::new(source, None).build()
    }

    #[test]
    fn test_single_shape() {
        let document =
            build("Create List Foo() {\nCreate Square Sq1(x:100) { Style { color:red; } }\n}")
                .unwrap();

        assert_eq!(document.list_name(), "Foo");
        assert_eq!(document.len(), 1);
        let shape = &document.shapes()[0];
        assert_eq!(shape.shape_type(), "Square");
        assert_eq!(shape.param("x"), Some(&ParamValue::Integer(100)));
        assert_eq!(shape.style()["color"], "red");
    }

    #[test]
    fn test_missing_list() {
        for source in ["", "   \n", "Create Square Sq1(x:1) { Style {} }"] {
            let err = build(source).unwrap_err();
            assert_eq!(err.code(), Some(ErrorCode::E100), "source: {source:?}");
            assert_eq!(err.primary_span(), Some(Span::at(0)));
        }
    }

    #[test]
    fn test_no_shapes() {
        let err = build("Create List Foo() {\n}").unwrap_err();
        assert_eq!(err.code(), Some(ErrorCode::E101));
    }

    #[test]
    fn test_duplicate_list() {
        let source = "Create List Foo() {\nCreate List Bar() {\n}";
        let err = build(source).unwrap_err();
        assert_eq!(err.code(), Some(ErrorCode::E103));
        assert_eq!(
            err.primary_span().map(|s| s.start()),
            source.find("Create List Bar")
        );
    }

    #[test]
    fn test_missing_style_anchors_after_header() {
        let source = "Create List Foo() {\nCreate Square Sq1(x:1) {\n}\n}";
        let err = build(source).unwrap_err();
        assert_eq!(err.code(), Some(ErrorCode::E102));

        let header_end = source.find("(x:1) {").unwrap() + "(x:1) {".len();
        assert_eq!(err.primary_span(), Some(Span::at(header_end)));
    }

    #[test]
    fn test_style_of_next_shape_is_not_borrowed() {
        let source = "Create List Foo() {\n\
                      Create Square A(x:1) { }\n\
                      Create Square B(x:2) { Style { color:red; } }\n}";
        let err = build(source).unwrap_err();
        assert_eq!(err.code(), Some(ErrorCode::E102));
        assert!(err.message().contains("'A'"));
    }

    #[test]
    fn test_shapes_before_list_follow_list_rules() {
        let source = "Create Square sq(x:1) { Style {} }\nCreate List foo() {\n}";
        let err = build(source).unwrap_err();
        assert_eq!(err.code(), Some(ErrorCode::E200));

        let source = "Create Square A(x:1) { Style {} }\nCreate List Foo() {\n\
                      Create Circle B(x:2) { Style {} }\n}";
        let document = build(source).unwrap();
        let names: Vec<_> = document.shapes().iter().map(Shape::name).collect();
        assert_eq!(names, ["A", "B"]);
    }

    #[test]
    fn test_parameter_errors_come_before_missing_style() {
        let source = "Create List Foo() {\nCreate Square Sq1(x:abc) {\n}\n}";
        let err = build(source).unwrap_err();
        assert_eq!(err.code(), Some(ErrorCode::E301));
    }
}

#[cfg(test)]
mod proptest_tests {
    use proptest::prelude::*;

    use super::*;
    use crate::position::LineIndex;

    // ===================
    // Strategies
    // ===================

    /// Shape names that pass every naming rule.
    fn shape_name_strategy() -> impl Strategy<Value = String> {
        "[A-Z][A-Za-z0-9_]{0,8}".prop_filter("reserved", |name| !name.eq_ignore_ascii_case("list"))
    }

    fn build(source: &str) -> Result<Document> {
        Builder::new(source, None).build()
    }

    fn shape_source(shape_type: &str, name: &str, x: i64) -> String {
        format!("    Create {shape_type} {name}(x:{x}, y:2.5) {{\n        Style {{ color:red; }}\n    }}\n")
    }

    // ===================
    // Property Test Functions
    // ===================

    /// Without a List header the result is always E100.
    fn check_missing_list(body: &str) -> std::result::Result<(), TestCaseError> {
        let err = build(body).err();
        prop_assert_eq!(err.and_then(|e| e.code()), Some(ErrorCode::E100));
        Ok(())
    }

    /// n unique shapes come back as n shapes in source order.
    fn check_shapes_in_order(names: &[String]) -> std::result::Result<(), TestCaseError> {
        let mut source = String::from("Create List Scene() {\n");
        for (idx, name) in names.iter().enumerate() {
            source.push_str(&shape_source("Square", name, idx as i64));
        }
        source.push_str("}\n");

        let document = build(&source).map_err(|e| TestCaseError::fail(e.to_string()))?;
        let parsed: Vec<_> = document.shapes().iter().map(Shape::name).collect();
        prop_assert_eq!(parsed, names.iter().map(String::as_str).collect::<Vec<_>>());
        Ok(())
    }

    /// A lowercase name is reported on the line of its header.
    fn check_lowercase_name(prefix: usize, name: &str) -> std::result::Result<(), TestCaseError> {
        let mut source = String::from("Create List Scene() {\n");
        for idx in 0..prefix {
            source.push_str(&shape_source("Circle", &format!("C{idx}"), 1));
        }
        let header_line = source.lines().count() + 1;
        source.push_str(&shape_source("Square", name, 1));
        source.push_str("}\n");

        let err = build(&source)
            .err()
            .ok_or_else(|| TestCaseError::fail("lowercase name was accepted"))?;
        prop_assert_eq!(err.code(), Some(ErrorCode::E204));
        prop_assert_eq!(err.locate(&LineIndex::new(&source)).line(), header_line);
        Ok(())
    }

    /// A repeated name is reported at the second occurrence.
    fn check_duplicate_name(name: &str, gap: usize) -> std::result::Result<(), TestCaseError> {
        let mut source = String::from("Create List Scene() {\n");
        source.push_str(&shape_source("Square", name, 1));
        for idx in 0..gap {
            source.push_str(&shape_source("Circle", &format!("Gap{idx}"), 1));
        }
        let second_line = source.lines().count() + 1;
        source.push_str(&shape_source("Circle", name, 2));
        source.push_str("}\n");

        let err = build(&source)
            .err()
            .ok_or_else(|| TestCaseError::fail("duplicate name was accepted"))?;
        prop_assert_eq!(err.code(), Some(ErrorCode::E205));
        prop_assert_eq!(err.locate(&LineIndex::new(&source)).line(), second_line);
        Ok(())
    }

    // ===================
    // Proptest Wrappers
    // ===================

    proptest! {
        #[test]
        fn missing_list_is_structural(body in "[A-Za-z0-9 (){}:;,\\n]{0,80}") {
            prop_assume!(!body.contains("List"));
            check_missing_list(&body)?;
        }

        #[test]
        fn shapes_keep_source_order(names in prop::collection::hash_set(shape_name_strategy(), 1..8)) {
            let names: Vec<String> = names.into_iter().collect();
            check_shapes_in_order(&names)?;
        }

        #[test]
        fn lowercase_name_reported_on_its_line(prefix in 0usize..5, name in "[a-z][A-Za-z0-9_]{0,8}") {
            prop_assume!(!name.eq_ignore_ascii_case("list"));
            check_lowercase_name(prefix, &name)?;
        }

        #[test]
        fn duplicate_name_reported_at_second(name in shape_name_strategy(), gap in 0usize..5) {
            prop_assume!(!name.starts_with("Gap"));
            check_duplicate_name(&name, gap)?;
        }
    }
}
