//! Labeled source spans for diagnostic messages.

use crate::span::Span;

/// A message attached to a span of the source.
///
/// The primary label marks where the problem is and decides the
/// diagnostic's line/column. Secondary labels add context, such as
/// "first declared here" for a duplicate shape name:
///
/// ```text
/// error[E205]: duplicate shape name 'Sq1'
///   --> Scene.slc:6:5
///    |
///  3 |     Create Square Sq1(x:100, y:100) {
///    |     ------------------------------- first declared here
///    ...
///  6 |     Create Circle Sq1(x:10, y:10) {
///    |     ^^^^^^^^^^^^^^^^^^^^^^^^^^^^^ duplicate name
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Label {
    span: Span,
    message: String,
    is_primary: bool,
}

impl Label {
    /// Create a new primary label.
    pub fn primary(span: Span, message: impl Into<String>) -> Self {
        Self {
            span,
            message: message.into(),
            is_primary: true,
        }
    }

    /// Create a new secondary label.
    pub fn secondary(span: Span, message: impl Into<String>) -> Self {
        Self {
            span,
            message: message.into(),
            is_primary: false,
        }
    }

    /// Get the span this label applies to.
    pub fn span(&self) -> Span {
        self.span
    }

    /// Get the label message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Check if this is a primary label.
    pub fn is_primary(&self) -> bool {
        self.is_primary
    }

    /// Check if this is a secondary label.
    pub fn is_secondary(&self) -> bool {
        !self.is_primary
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primary_label() {
        let label = Label::primary(Span::new(10..20), "duplicate name");

        assert_eq!(label.span(), Span::new(10..20));
        assert_eq!(label.message(), "duplicate name");
        assert!(label.is_primary());
        assert!(!label.is_secondary());
    }

    #[test]
    fn test_secondary_label() {
        let label = Label::secondary(Span::new(5..15), "first declared here");

        assert_eq!(label.span().start(), 5);
        assert!(label.is_secondary());
    }
}
