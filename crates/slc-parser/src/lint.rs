//! Line-oriented lint for SLC sources.
//!
//! Unlike [`parse`](crate::parse), the lint never stops early: every line is
//! checked on its own and all findings are reported as warnings. It catches
//! the typos an editor wants to underline while the user is still typing,
//! before the document is complete enough to parse.

use log::debug;

use crate::{
    error::{Diagnostic, DiagnosticCollector, ErrorCode},
    position::LineIndex,
    span::Span,
};

/// Line prefixes that start a known instruction.
const INSTRUCTION_PREFIXES: [&str; 4] = ["Create", "Style", "{", "}"];

/// `Create` followed by whitespace and a word character.
fn has_create_command(line: &str) -> bool {
    line.match_indices("Create").any(|(idx, keyword)| {
        let rest = &line[idx + keyword.len()..];
        let word = rest.trim_start();
        word.len() < rest.len()
            && word
                .chars()
                .next()
                .is_some_and(|c| c.is_alphanumeric() || c == '_')
    })
}

/// Span of the last character of `line`, which starts at `offset`.
fn last_char(line: &str, offset: usize) -> Span {
    let width = line.chars().next_back().map_or(0, char::len_utf8);
    Span::new(offset + line.len() - width..offset + line.len())
}

/// Check every line of `source` and return the warnings found, in order.
///
/// Blank lines and `//` comment lines are skipped.
pub fn lint(source: &str) -> Vec<Diagnostic> {
    let mut collector = DiagnosticCollector::new();

    let mut line_start = 0;
    for raw in source.split('\n') {
        let offset = line_start + (raw.len() - raw.trim_start().len());
        line_start += raw.len() + 1;

        let line = raw.trim();
        if line.is_empty() || line.starts_with("//") {
            continue;
        }

        if has_create_command(line) && !line.ends_with('{') {
            collector.emit(
                Diagnostic::warning("expected '{' at the end of a Create line")
                    .with_code(ErrorCode::W001)
                    .with_label(last_char(line, offset), "line should end with '{'"),
            );
        }

        if line.starts_with("Style") && !line.contains('{') {
            collector.emit(
                Diagnostic::warning("missing '{' after Style")
                    .with_code(ErrorCode::W002)
                    .with_label(last_char(line, offset), "expected 'Style { ... }'"),
            );
        }

        let known = INSTRUCTION_PREFIXES
            .iter()
            .any(|prefix| line.starts_with(prefix));
        if !known && !line.contains(':') && !line.ends_with('}') {
            collector.emit(
                Diagnostic::warning(format!("unknown instruction: {line}"))
                    .with_code(ErrorCode::W003)
                    .with_label(Span::new(offset..offset + line.len()), "not an SLC instruction"),
            );
        }
    }

    debug!(warnings = collector.count(); "Lint finished");
    collector.finish(&LineIndex::new(source))
}
