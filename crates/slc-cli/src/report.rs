//! Output of `slc check`: a text summary or a JSON report.
//!
//! The JSON form is what an editor host consumes. Diagnostics carry the
//! 1-based `line`/`column` it needs to place markers.

use std::io::Write;

use serde::Serialize;

use slc_core::Document;
use slc_parser::error::Diagnostic;

use crate::error::SlcError;

/// One diagnostic in the JSON report.
#[derive(Debug, Serialize)]
pub struct DiagnosticReport<'a> {
    pub severity: String,
    pub code: Option<&'static str>,
    pub message: &'a str,
    pub line: usize,
    pub column: usize,
    pub help: Option<&'a str>,
}

impl<'a> From<&'a Diagnostic> for DiagnosticReport<'a> {
    fn from(diagnostic: &'a Diagnostic) -> Self {
        Self {
            severity: diagnostic.severity().to_string(),
            code: diagnostic.code().map(|code| code.as_str()),
            message: diagnostic.message(),
            line: diagnostic.line(),
            column: diagnostic.column(),
            help: diagnostic.help(),
        }
    }
}

/// The JSON report for one checked file.
#[derive(Debug, Serialize)]
pub struct CheckReport<'a> {
    pub file: &'a str,
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document: Option<&'a Document>,
    pub diagnostics: Vec<DiagnosticReport<'a>>,
}

impl<'a> CheckReport<'a> {
    /// Build a report from a parse result and the lint warnings.
    pub fn new(
        file: &'a str,
        result: Result<&'a Document, &'a Diagnostic>,
        warnings: &'a [Diagnostic],
    ) -> Self {
        let mut diagnostics: Vec<DiagnosticReport<'a>> = Vec::new();
        let document = match result {
            Ok(document) => Some(document),
            Err(diagnostic) => {
                diagnostics.push(diagnostic.into());
                None
            }
        };
        diagnostics.extend(warnings.iter().map(DiagnosticReport::from));

        Self {
            file,
            ok: document.is_some(),
            document,
            diagnostics,
        }
    }

    /// Write the report as pretty printed JSON followed by a newline.
    pub fn write_json(&self, out: &mut impl Write) -> Result<(), SlcError> {
        serde_json::to_writer_pretty(&mut *out, self)?;
        writeln!(out)?;
        Ok(())
    }
}

/// Write a human readable summary of `document`.
///
/// ```text
/// Scene: 2 shapes
///   Square Sq1 at (100, 100) color=red size=50x50
///   Circle Sun at (320, 60) color=yellow size=40x40
/// ```
pub fn write_summary(document: &Document, out: &mut impl Write) -> Result<(), SlcError> {
    let count = document.len();
    let noun = if count == 1 { "shape" } else { "shapes" };
    writeln!(out, "{}: {count} {noun}", document.list_name())?;

    for shape in document.shapes() {
        let (x, y) = shape.origin();
        writeln!(
            out,
            "  {} {} at ({x}, {y}) color={} size={}x{}",
            shape.shape_type(),
            shape.name(),
            shape.color(),
            shape.width(),
            shape.height(),
        )?;
    }
    Ok(())
}
