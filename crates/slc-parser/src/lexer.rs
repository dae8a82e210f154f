//! Lexical analyzer for SLC source text.
//!
//! The lexer converts source text into a stream of [`Token`]s for the
//! structural scanner. SLC documents are loosely structured (comments,
//! free text and style values like `#ff0000` may appear anywhere), so the
//! lexer never fails: every character ends up in some token, and anything
//! unrecognised becomes [`Token::Text`].
//!
//! The public entry point is [`tokenize`].

use winnow::{
    Parser as _,
    ascii::digit1,
    combinator::{alt, delimited, not, opt, peek, preceded, terminated},
    error::ModalResult,
    stream::{LocatingSlice, Location, Stream},
    token::{any, literal, one_of, take_while},
};

use crate::{
    span::Span,
    tokens::{PositionedToken, Token},
};

type Input<'a> = LocatingSlice<&'a str>;
type IResult<O> = ModalResult<O>;

/// Characters that end a word and are lexed on their own.
const PUNCTUATION: [char; 7] = ['(', ')', '{', '}', ':', ';', ','];

fn is_identifier_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

fn is_text_char(c: char) -> bool {
    !c.is_whitespace() && !PUNCTUATION.contains(&c) && c != '"' && c != '\''
}

/// Parse line comment starting with '//'
///
/// Only tried when nothing but whitespace precedes it on the line, so a
/// `//` inside a value such as `url(http://x)` stays ordinary text.
fn line_comment<'a>(input: &mut Input<'a>) -> IResult<Token<'a>> {
    preceded("//", take_while(0.., |c| c != '\n'))
        .map(Token::LineComment)
        .parse_next(input)
}

/// Parse a quoted string on a single line.
///
/// Both `"..."` and `'...'` are accepted; there are no escape sequences.
/// An unterminated quote backtracks and is picked up by [`stray_char`].
fn string_literal<'a>(input: &mut Input<'a>) -> IResult<Token<'a>> {
    alt((
        delimited('"', take_while(0.., |c| c != '"' && c != '\n'), '"'),
        delimited('\'', take_while(0.., |c| c != '\'' && c != '\n'), '\''),
    ))
    .map(Token::StringLiteral)
    .parse_next(input)
}

/// Parse keywords with word boundary checking
fn keyword<'a>(input: &mut Input<'a>) -> IResult<Token<'a>> {
    terminated(
        alt((literal("Create"), literal("Style"))),
        // Ensure keyword is not followed by identifier character (word boundary)
        peek(not(one_of(is_identifier_char))),
    )
    .map(|keyword: &str| match keyword {
        "Create" => Token::Create,
        _ => Token::Style,
    })
    .parse_next(input)
}

/// Parse a number: `-12`, `7`, `3.25`
fn number<'a>(input: &mut Input<'a>) -> IResult<Token<'a>> {
    terminated(
        (opt('-'), digit1, opt(('.', digit1))).take(),
        // `12px` or `3d` are words, not numbers
        peek(not(one_of(is_identifier_char))),
    )
    .map(Token::Number)
    .parse_next(input)
}

/// Parse identifiers: a letter or underscore followed by letters, digits or underscores
fn identifier<'a>(input: &mut Input<'a>) -> IResult<Token<'a>> {
    take_while(1.., is_identifier_char)
        .verify(|s: &str| {
            s.chars()
                .next()
                .is_some_and(|c| c.is_alphabetic() || c == '_')
        })
        .map(Token::Identifier)
        .parse_next(input)
}

/// Parse single character punctuation
fn punctuation<'a>(input: &mut Input<'a>) -> IResult<Token<'a>> {
    alt((
        '('.value(Token::LeftParen),
        ')'.value(Token::RightParen),
        '{'.value(Token::LeftBrace),
        '}'.value(Token::RightBrace),
        ':'.value(Token::Colon),
        ';'.value(Token::Semicolon),
        ','.value(Token::Comma),
    ))
    .parse_next(input)
}

/// Parse newline
fn newline<'a>(input: &mut Input<'a>) -> IResult<Token<'a>> {
    '\n'.value(Token::Newline).parse_next(input)
}

/// Parse whitespace (spaces, tabs, carriage returns but not newlines)
fn whitespace<'a>(input: &mut Input<'a>) -> IResult<Token<'a>> {
    take_while(1.., |c: char| c.is_whitespace() && c != '\n')
        .value(Token::Whitespace)
        .parse_next(input)
}

/// Parse a run of free text such as `#ff0000` or `1e5`
fn text<'a>(input: &mut Input<'a>) -> IResult<Token<'a>> {
    take_while(1.., is_text_char)
        .map(Token::Text)
        .parse_next(input)
}

/// Parse any single remaining character, e.g. an unterminated quote
fn stray_char<'a>(input: &mut Input<'a>) -> IResult<Token<'a>> {
    any.take().map(Token::Text).parse_next(input)
}

/// Parse a single token with position tracking
fn positioned_token<'a>(input: &mut Input<'a>, line_start: bool) -> IResult<PositionedToken<'a>> {
    let start_pos = input.current_token_start();

    let comment = if line_start {
        opt(line_comment).parse_next(input)?
    } else {
        None
    };
    let token = match comment {
        Some(comment) => comment,
        None => alt((
            string_literal, // Must come before stray quotes
            keyword,        // Must come before identifier
            number,         // Must come before text
            identifier,     // Must come before text
            punctuation,
            newline, // Must come before whitespace
            whitespace,
            text,
            stray_char,
        ))
        .parse_next(input)?,
    };

    let end_pos = input.current_token_start();

    Ok(PositionedToken::new(token, Span::new(start_pos..end_pos)))
}

/// Split `input` into positioned tokens.
///
/// Token spans are byte offsets into `input`. Whitespace, newlines and
/// comments are kept; callers that only care about structure filter them
/// with [`Token::is_trivia`].
pub fn tokenize(input: &str) -> Vec<PositionedToken<'_>> {
    lex(input, true)
}

/// Like [`tokenize`], for a fragment that starts in the middle of a line.
pub(crate) fn tokenize_inline(input: &str) -> Vec<PositionedToken<'_>> {
    lex(input, false)
}

fn lex(input: &str, mut line_start: bool) -> Vec<PositionedToken<'_>> {
    let mut located_input = LocatingSlice::new(input);
    let mut tokens = Vec::new();

    while !located_input.is_empty() {
        match positioned_token(&mut located_input, line_start) {
            Ok(token) => {
                line_start = match token.token {
                    Token::Newline => true,
                    Token::Whitespace => line_start,
                    _ => false,
                };
                tokens.push(token);
            }
            Err(_) => {
                // `stray_char` accepts any character, so this only guards
                // against an infinite loop.
                let start = located_input.current_token_start();
                line_start = false;
                if let Some(c) = located_input.next_token() {
                    let span = Span::new(start..start + c.len_utf8());
                    tokens.push(PositionedToken::new(
                        Token::Text(&input[span.range()]),
                        span,
                    ));
                }
            }
        }
    }

    tokens
}


#[cfg(test)]
mod proptest_tests {
    use proptest::prelude::*;

    use super::*;

    /// Tokens tile the input: contiguous, in order, and ending at its length.
    fn check_tokens_cover_input(input: &str) -> Result<(), TestCaseError> {
        let tokens = tokenize(input);

        let mut offset = 0;
        for token in &tokens {
            prop_assert_eq!(token.span.start(), offset);
            prop_assert!(!token.span.is_empty(), "empty token {:?}", token);
            offset = token.span.end();
        }
        prop_assert_eq!(offset, input.len());
        Ok(())
    }

    proptest! {
        #[test]
        fn tokens_cover_any_input(input in "\\PC{0,64}") {
            check_tokens_cover_input(&input)?;
        }

        #[test]
        fn tokens_cover_slc_like_input(input in "[A-Za-z0-9 (){}:;,'\"#/\\n.-]{0,64}") {
            check_tokens_cover_input(&input)?;
        }
    }
}
