//! Style extractor for `Style { ... }` blocks.
//!
//! The block body is split on every `;` into `key:value` clauses, and each
//! clause on its first `:`. Style is presentational, so extraction is
//! lenient: clauses without a colon or with an empty key or value are
//! dropped, and values stay strings exactly as written (`width: 80` yields
//! `"80"`). Quotes carry no meaning here. Converting values is up to the
//! consumer.

use indexmap::IndexMap;
use log::trace;

use crate::span::Spanned;

/// Drop the `//` comment lines of a body.
///
/// The first line continues the `Style {` line, so it is never a comment.
fn strip_comment_lines(body: &str) -> String {
    body.split('\n')
        .enumerate()
        .filter(|(index, line)| *index == 0 || !line.trim_start().starts_with("//"))
        .map(|(_, line)| line)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Extract the `key:value` entries of a style block body.
///
/// A key given twice keeps its first position and its last value.
pub(crate) fn extract_style(body: &Spanned<&str>) -> IndexMap<String, String> {
    let text = strip_comment_lines(body.inner());
    let mut style = IndexMap::new();

    for clause in text.split(';') {
        let Some((key, value)) = clause.split_once(':') else {
            continue;
        };
        let (key, value) = (key.trim(), value.trim());
        if key.is_empty() || value.is_empty() {
            continue;
        }

        trace!(key = key, value = value; "Parsed style entry");
        style.insert(key.to_string(), value.to_string());
    }

    style
}
