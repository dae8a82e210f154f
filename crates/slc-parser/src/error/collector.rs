//! Collector for accumulating diagnostics during a checking pass.
//!
//! Parsing stops at the first error, but the line lint reports every
//! suspicious line it finds; [`DiagnosticCollector`] gathers those.

use crate::{error::Diagnostic, position::LineIndex};

/// A collector for accumulating diagnostics during a pass over the source.
#[derive(Debug, Default)]
pub struct DiagnosticCollector {
    diagnostics: Vec<Diagnostic>,
}

impl DiagnosticCollector {
    /// Create a new empty collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Emit a diagnostic to this collector.
    pub fn emit(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    /// Number of diagnostics emitted so far.
    pub fn count(&self) -> usize {
        self.diagnostics.len()
    }

    /// Finish collection, resolving every diagnostic's position against `index`.
    pub fn finish(self, index: &LineIndex<'_>) -> Vec<Diagnostic> {
        self.diagnostics
            .into_iter()
            .map(|diagnostic| diagnostic.locate(index))
            .collect()
    }
}
