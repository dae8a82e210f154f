//! Naming and uniqueness rules over scanned headers.
//!
//! The validator only sees [`ListHeader`]s and [`ShapeHeader`]s, so it does
//! not care how the scan was produced. Rules run fail-fast in a fixed order;
//! the first violation is returned as a [`Diagnostic`] anchored at the
//! header that caused it.

use std::collections::HashMap;

use log::trace;

use crate::{
    error::{Diagnostic, ErrorCode, Result},
    scanner::{LIST_KEYWORD, ListHeader, ShapeHeader},
    span::Span,
};

fn starts_uppercase(name: &str) -> bool {
    name.chars().next().is_some_and(|c| c.is_ascii_uppercase())
}

/// Suggest a name with its first letter uppercased.
fn capitalized(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// One validation pass over a single document.
///
/// Holds the names seen so far; create a fresh validator per parse.
pub(crate) struct Validator<'src> {
    filename_stem: Option<&'src str>,
    seen: HashMap<&'src str, Span>,
}

impl<'src> Validator<'src> {
    /// Create a validator. With a `filename`, the List name must equal its
    /// stem (the file name without directories or extension).
    pub fn new(filename: Option<&'src str>) -> Self {
        let filename_stem = filename.map(|name| {
            std::path::Path::new(name)
                .file_stem()
                .and_then(|stem| stem.to_str())
                .unwrap_or(name)
        });

        Self {
            filename_stem,
            seen: HashMap::new(),
        }
    }

    /// Check the List declaration.
    ///
    /// # Errors
    ///
    /// - [`ErrorCode::E200`] when the name does not start with an uppercase letter
    /// - [`ErrorCode::E201`] when the name differs from the file name stem
    pub fn check_list(&self, header: &ListHeader<'src>) -> Result<()> {
        let name = *header.name.inner();

        if !starts_uppercase(name) {
            return Err(Diagnostic::error(format!(
                "list name '{name}' must start with an uppercase letter"
            ))
            .with_code(ErrorCode::E200)
            .with_label(header.span, "list declared here")
            .with_help(format!("rename the list to '{}'", capitalized(name))));
        }

        if let Some(stem) = self.filename_stem {
            if stem != name {
                return Err(Diagnostic::error(format!(
                    "list name '{name}' must match the file name '{stem}'"
                ))
                .with_code(ErrorCode::E201)
                .with_label(header.span, "list declared here")
                .with_help(format!(
                    "rename the list to '{stem}' or save the file as '{name}.slc'"
                )));
            }
        }

        trace!(name = name; "List header accepted");
        Ok(())
    }

    /// Check a shape header and remember its name.
    ///
    /// # Errors
    ///
    /// - [`ErrorCode::E202`] when the name is missing
    /// - [`ErrorCode::E203`] when the name is `List` in any casing
    /// - [`ErrorCode::E204`] when the name does not start with an uppercase letter
    /// - [`ErrorCode::E205`] when an earlier shape has the same name
    pub fn check_shape(&mut self, header: &ShapeHeader<'src>) -> Result<()> {
        let shape_type = *header.shape_type.inner();
        let Some(name) = header.name.as_ref() else {
            return Err(Diagnostic::error(format!(
                "shape of type '{shape_type}' is missing a name"
            ))
            .with_code(ErrorCode::E202)
            .with_label(header.span, "shape declared here")
            .with_help(format!("write 'Create {shape_type} <Name>(...) {{'")));
        };
        let name = *name.inner();

        if name.eq_ignore_ascii_case(LIST_KEYWORD) {
            return Err(Diagnostic::error(format!(
                "shape name '{name}' is reserved"
            ))
            .with_code(ErrorCode::E203)
            .with_label(header.span, "shape declared here")
            .with_help("'List' names the document and cannot name a shape"));
        }

        if !starts_uppercase(name) {
            return Err(Diagnostic::error(format!(
                "shape name '{name}' must start with an uppercase letter"
            ))
            .with_code(ErrorCode::E204)
            .with_label(header.span, "shape declared here")
            .with_help(format!("rename the shape to '{}'", capitalized(name))));
        }

        if let Some(first) = self.seen.get(name) {
            return Err(Diagnostic::error(format!("duplicate shape name '{name}'"))
                .with_code(ErrorCode::E205)
                .with_label(header.span, "duplicate name")
                .with_secondary_label(*first, "first declared here")
                .with_help("shape names must be unique within a list"));
        }

        self.seen.insert(name, header.span);
        trace!(shape_type = shape_type, name = name; "Shape header accepted");
        Ok(())
    }
}
