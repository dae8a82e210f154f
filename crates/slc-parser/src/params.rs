//! Parameter parser for shape headers.
//!
//! Turns the raw text between a shape's parentheses, such as
//! `x:100, y:2.5, label:"a, b"`, into an ordered map of typed values.
//!
//! Pieces are separated by top-level commas (a comma inside a quoted string
//! does not split) and by `//` comment lines, and keys from values by the
//! first colon. Keys must be identifiers. Values must be an integer
//! (`-?digits`), a decimal (`-?digits.digits`) or a string wrapped in
//! matching quotes.

use indexmap::IndexMap;
use log::trace;
use winnow::{
    Parser as _,
    ascii::digit1,
    combinator::{alt, delimited, opt},
    error::ModalResult,
    token::take_while,
};

use slc_core::ParamValue;

use crate::{
    error::{Diagnostic, ErrorCode, Result},
    lexer,
    span::{Span, Spanned},
    tokens::Token,
};

fn integer(input: &mut &str) -> ModalResult<i64> {
    (opt('-'), digit1)
        .take()
        .try_map(str::parse::<i64>)
        .parse_next(input)
}

fn decimal(input: &mut &str) -> ModalResult<f64> {
    (opt('-'), digit1, '.', digit1)
        .take()
        .try_map(str::parse::<f64>)
        .parse_next(input)
}

fn quoted<'a>(input: &mut &'a str) -> ModalResult<&'a str> {
    alt((
        delimited('"', take_while(0.., |c| c != '"'), '"'),
        delimited('\'', take_while(0.., |c| c != '\''), '\''),
    ))
    .parse_next(input)
}

/// Classify a trimmed value; `None` if it fits none of the value forms.
fn param_value(text: &str) -> Option<ParamValue> {
    alt((
        decimal.map(ParamValue::Float),
        integer.map(ParamValue::Integer),
        quoted.map(|s: &str| ParamValue::String(s.to_string())),
    ))
    .parse(text)
    .ok()
}

fn is_identifier(key: &str) -> bool {
    let mut chars = key.chars();
    chars
        .next()
        .is_some_and(|c| c.is_alphabetic() || c == '_')
        && chars.all(|c| c.is_alphanumeric() || c == '_')
}

/// Trim `range` of `text`, returning the trimmed slice and its local span.
fn trimmed(text: &str, start: usize, end: usize) -> (&str, Span) {
    let raw = &text[start..end];
    let leading = raw.len() - raw.trim_start().len();
    let value = raw.trim();
    let start = start + leading;
    (value, Span::new(start..start + value.len()))
}

/// Parse the raw parameter text of a shape header.
///
/// `raw` carries the absolute span of the text so that diagnostics point at
/// the right place in the full source. Empty pieces (an empty list, or a
/// trailing comma) are skipped. A key given twice keeps its first position
/// and its last value.
///
/// # Errors
///
/// - [`ErrorCode::E300`] for a piece without a colon, or whose key is not an identifier
/// - [`ErrorCode::E301`] for a value that is not an integer, decimal or quoted string
pub(crate) fn parse_params(raw: &Spanned<&str>) -> Result<IndexMap<String, ParamValue>> {
    let text = *raw.inner();
    let base = raw.span().start();
    let tokens = lexer::tokenize_inline(text);

    // Local byte ranges of each comma separated piece and its first colon
    let mut pieces: Vec<(usize, usize, Option<Span>)> = Vec::new();
    let mut piece_start = 0;
    let mut colon = None;
    for token in &tokens {
        match token.token {
            Token::Comma | Token::LineComment(_) => {
                pieces.push((piece_start, token.span.start(), colon.take()));
                piece_start = token.span.end();
            }
            Token::Colon if colon.is_none() => colon = Some(token.span),
            _ => {}
        }
    }
    pieces.push((piece_start, text.len(), colon));

    let mut params = IndexMap::new();
    for (start, end, colon) in pieces {
        let (piece, piece_span) = trimmed(text, start, end);
        if piece.is_empty() {
            continue;
        }

        let Some(colon) = colon else {
            return Err(malformed(piece, piece_span.shift(base)));
        };
        let (key, key_span) = trimmed(text, start, colon.start());
        if key.is_empty() {
            return Err(malformed(piece, piece_span.shift(base)));
        }
        if !is_identifier(key) {
            return Err(Diagnostic::error(format!("invalid parameter name '{key}'"))
                .with_code(ErrorCode::E300)
                .with_label(key_span.shift(base), "expected an identifier")
                .with_help("parameter names are letters, digits and underscores, like `x` or `stroke_width`"));
        }
        let (value, value_span) = trimmed(text, colon.end(), end);

        let Some(parsed) = param_value(value) else {
            return Err(Diagnostic::error(format!(
                "invalid value for parameter '{key}': '{value}'"
            ))
            .with_code(ErrorCode::E301)
            .with_label(value_span.shift(base), "not a number or quoted string")
            .with_help("use an integer like `100`, a decimal like `2.5`, or a quoted string like `\"text\"`"));
        };

        trace!(key = key, value = parsed.to_string(); "Parsed parameter");
        params.insert(key.to_string(), parsed);
    }

    Ok(params)
}

fn malformed(piece: &str, span: Span) -> Diagnostic {
    Diagnostic::error(format!(
        "invalid parameter '{piece}', expected 'key:value'"
    ))
    .with_code(ErrorCode::E300)
    .with_label(span, "expected 'key:value'")
}
