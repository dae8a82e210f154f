//! The core diagnostic type for the SLC error system.
//!
//! A [`Diagnostic`] is a single error or warning with an optional error
//! code, labeled source spans, help text, and the 1-based [`Position`] a
//! host editor uses to place its marker.

use std::fmt;

use crate::{
    error::{ErrorCode, Label, Severity},
    position::{LineIndex, Position},
    span::Span,
};

/// A diagnostic message with source location information.
///
/// Diagnostics are built with the `with_*` methods while scanning and are
/// resolved to a line/column once, against the whole source, before they
/// leave the crate. The position is taken from the start of the primary
/// label, or the start of the source when there is none.
///
/// # Example
///
/// ```
/// # use slc_parser::error::{Diagnostic, ErrorCode};
/// # use slc_parser::Span;
///
/// let diag = Diagnostic::error("shape name 'sq1' must start with an uppercase letter")
///     .with_code(ErrorCode::E204)
///     .with_label(Span::new(21..49), "shape declared here")
///     .with_help("rename the shape to 'Sq1'");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    severity: Severity,
    code: Option<ErrorCode>,
    message: String,
    labels: Vec<Label>,
    help: Option<String>,
    position: Position,
}

impl Diagnostic {
    /// Create an error diagnostic.
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(Severity::Error, message)
    }

    /// Create a warning diagnostic.
    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(Severity::Warning, message)
    }

    /// Get the severity of this diagnostic.
    pub fn severity(&self) -> Severity {
        self.severity
    }

    /// Get the error code, if any.
    pub fn code(&self) -> Option<ErrorCode> {
        self.code
    }

    /// Get the primary message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Get all labels attached to this diagnostic.
    pub fn labels(&self) -> &[Label] {
        &self.labels
    }

    /// Get the help text, if any.
    pub fn help(&self) -> Option<&str> {
        self.help.as_deref()
    }

    /// Get the span of the primary label, if any.
    pub fn primary_span(&self) -> Option<Span> {
        self.labels
            .iter()
            .find(|label| label.is_primary())
            .map(Label::span)
    }

    /// Get the resolved 1-based position.
    pub fn position(&self) -> Position {
        self.position
    }

    /// Get the 1-based line.
    pub fn line(&self) -> usize {
        self.position.line()
    }

    /// Get the 1-based column.
    pub fn column(&self) -> usize {
        self.position.column()
    }

    /// Set the error code.
    pub fn with_code(mut self, code: ErrorCode) -> Self {
        self.code = Some(code);
        self
    }

    /// Add a primary label to this diagnostic.
    pub fn with_label(mut self, span: Span, message: impl Into<String>) -> Self {
        self.labels.push(Label::primary(span, message));
        self
    }

    /// Add a secondary label to this diagnostic.
    pub fn with_secondary_label(mut self, span: Span, message: impl Into<String>) -> Self {
        self.labels.push(Label::secondary(span, message));
        self
    }

    /// Set the help text.
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }

    /// Resolve the line/column of the primary label against `index`.
    pub fn locate(mut self, index: &LineIndex<'_>) -> Self {
        let offset = self.primary_span().map_or(0, |span| span.start());
        self.position = index.position(offset);
        self
    }

    fn new(severity: Severity, message: impl Into<String>) -> Self {
        Self {
            severity,
            code: None,
            message: message.into(),
            labels: Vec::new(),
            help: None,
            position: Position::START,
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Format: "error[E100]: message" or "error: message"
        write!(f, "{}", self.severity)?;
        if let Some(code) = self.code {
            write!(f, "[{code}]")?;
        }
        write!(f, ": {}", self.message)
    }
}

impl std::error::Error for Diagnostic {}
