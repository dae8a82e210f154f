//! Severity levels for diagnostics.

use std::fmt;

/// How serious a diagnostic is.
///
/// - [`Severity::Error`] aborts the parse; no document is produced.
/// - [`Severity::Warning`] is advisory and comes only from the line lint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    /// The document cannot be built until this is fixed.
    Error,

    /// The line looks suspicious but the document may still parse.
    Warning,
}

impl Severity {
    /// Returns `true` if this is an error severity.
    pub fn is_error(&self) -> bool {
        matches!(self, Severity::Error)
    }

    /// Returns `true` if this is a warning severity.
    pub fn is_warning(&self) -> bool {
        matches!(self, Severity::Warning)
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}
