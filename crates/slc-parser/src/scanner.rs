//! Structural scanner for SLC token streams.
//!
//! The scanner walks the significant tokens (whitespace and comments
//! removed) once, left to right, and recognises three constructs:
//!
//! ```text
//! Create List <Name> ( ) {                  -> ListHeader
//! Create <Type> [<Name>] ( <params> ) {     -> ShapeHeader
//! Style { <body> }                          -> StyleBlock
//! ```
//!
//! Everything between those constructs is skipped. Parameter and style
//! bodies are handed on as raw source slices; splitting them into entries is
//! the job of [`params`](crate::params) and [`style`](crate::style).

use winnow::{
    Parser as _,
    combinator::{opt, repeat},
    error::ModalResult,
    stream::{Stream, TokenSlice},
    token::any,
};

use crate::{
    span::{Span, Spanned},
    tokens::{PositionedToken, Token},
};

/// Type keyword reserved for the list declaration.
pub(crate) const LIST_KEYWORD: &str = "List";

type Input<'t, 'src> = TokenSlice<'t, PositionedToken<'src>>;
type IResult<O> = ModalResult<O>;

/// `Create List <Name>() {`
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct ListHeader<'src> {
    pub name: Spanned<&'src str>,
    /// From `Create` to the opening brace
    pub span: Span,
}

/// `Create <Type> <Name>(<params>) {`
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct ShapeHeader<'src> {
    pub shape_type: Spanned<&'src str>,
    /// Absent when the header reads `Create <Type>(...) {`
    pub name: Option<Spanned<&'src str>>,
    /// Raw text between the parentheses
    pub params: Spanned<&'src str>,
    /// From `Create` to the opening brace
    pub span: Span,
}

impl ShapeHeader<'_> {
    /// The name if present, otherwise the type, for messages.
    pub fn display_name(&self) -> &str {
        self.name.as_ref().map_or(self.shape_type.inner(), |n| n.inner())
    }
}

/// `Style { <body> }`
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct StyleBlock<'src> {
    /// Raw text between the braces
    pub body: Spanned<&'src str>,
}

/// A declaration header found by [`Scanner::next_header`].
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Header<'src> {
    List(ListHeader<'src>),
    Shape(ShapeHeader<'src>),
}

/// Match a single token of the given kind and return its span
fn expect<'t, 'src>(input: &mut Input<'t, 'src>, expected: Token<'static>) -> IResult<Span> {
    let expected: Token<'src> = expected;
    any.verify_map(|token: &PositionedToken<'src>| (token.token == expected).then_some(token.span))
        .parse_next(input)
}

/// Parse an identifier with span preservation
fn identifier<'t, 'src>(input: &mut Input<'t, 'src>) -> IResult<Spanned<&'src str>> {
    any.verify_map(|token: &PositionedToken<'src>| match token.token {
        Token::Identifier(name) => Some(Spanned::new(name, token.span)),
        _ => None,
    })
    .parse_next(input)
}

/// Any token that may appear between a shape header's parentheses
fn parameter_token<'t, 'src>(input: &mut Input<'t, 'src>) -> IResult<()> {
    any.verify(|token: &PositionedToken<'src>| {
        !matches!(
            token.token,
            Token::LeftParen
                | Token::RightParen
                | Token::LeftBrace
                | Token::RightBrace
                | Token::Create
                | Token::Style
        )
    })
    .void()
    .parse_next(input)
}

/// Any token up to the closing brace of a style block, keywords included
fn style_token<'t, 'src>(input: &mut Input<'t, 'src>) -> IResult<()> {
    any.verify(|token: &PositionedToken<'src>| token.token != Token::RightBrace)
        .void()
        .parse_next(input)
}

/// Parse `Create List <Name> ( ) {`
fn list_header<'t, 'src>(input: &mut Input<'t, 'src>) -> IResult<ListHeader<'src>> {
    let start = expect(input, Token::Create)?;
    identifier
        .verify(|keyword: &Spanned<&'src str>| *keyword.inner() == LIST_KEYWORD)
        .parse_next(input)?;
    let name = identifier(input)?;
    expect(input, Token::LeftParen)?;
    expect(input, Token::RightParen)?;
    let end = expect(input, Token::LeftBrace)?;

    Ok(ListHeader {
        name,
        span: start.union(end),
    })
}

/// Parse `Create <Type> [<Name>] ( <params> ) {`
fn shape_header<'t, 'src>(
    input: &mut Input<'t, 'src>,
    source: &'src str,
) -> IResult<ShapeHeader<'src>> {
    let start = expect(input, Token::Create)?;
    let shape_type = identifier
        .verify(|ty: &Spanned<&'src str>| *ty.inner() != LIST_KEYWORD)
        .parse_next(input)?;
    let name = opt(identifier).parse_next(input)?;
    let open = expect(input, Token::LeftParen)?;
    let () = repeat(0.., parameter_token).parse_next(input)?;
    let close = expect(input, Token::RightParen)?;
    let end = expect(input, Token::LeftBrace)?;

    let params_span = Span::new(open.end()..close.start());
    Ok(ShapeHeader {
        shape_type,
        name,
        params: Spanned::new(&source[params_span.range()], params_span),
        span: start.union(end),
    })
}

/// Parse `Style { <body> }`
fn style_block<'t, 'src>(
    input: &mut Input<'t, 'src>,
    source: &'src str,
) -> IResult<StyleBlock<'src>> {
    expect(input, Token::Style)?;
    let open = expect(input, Token::LeftBrace)?;
    let () = repeat(0.., style_token).parse_next(input)?;
    let close = expect(input, Token::RightBrace)?;

    let body_span = Span::new(open.end()..close.start());
    Ok(StyleBlock {
        body: Spanned::new(&source[body_span.range()], body_span),
    })
}

/// Left-to-right cursor over the significant tokens of one source.
pub(crate) struct Scanner<'t, 'src> {
    source: &'src str,
    input: Input<'t, 'src>,
}

impl<'t, 'src> Scanner<'t, 'src> {
    /// Create a scanner over `tokens`, which must not contain trivia.
    pub fn new(source: &'src str, tokens: &'t [PositionedToken<'src>]) -> Self {
        Self {
            source,
            input: TokenSlice::new(tokens),
        }
    }

    /// Advance to the next List or Shape header and consume it.
    ///
    /// Returns `None` once the end of the token stream is reached.
    pub fn next_header(&mut self) -> Option<Header<'src>> {
        while self.input.eof_offset() > 0 {
            if let Some(header) = self.try_header() {
                return Some(header);
            }
            self.input.next_token();
        }
        None
    }

    /// Find the first Style block before the next header.
    ///
    /// When a header (or the end of input) comes first, the cursor is left
    /// in front of it and `None` is returned.
    pub fn find_style(&mut self) -> Option<StyleBlock<'src>> {
        while self.input.eof_offset() > 0 {
            let checkpoint = self.input.checkpoint();
            if self.try_header().is_some() {
                self.input.reset(&checkpoint);
                return None;
            }
            if let Ok(block) = style_block(&mut self.input, self.source) {
                return Some(block);
            }
            self.input.reset(&checkpoint);
            self.input.next_token();
        }
        None
    }

    /// Try to parse a header at the cursor, consuming nothing on failure.
    fn try_header(&mut self) -> Option<Header<'src>> {
        let checkpoint = self.input.checkpoint();
        if let Ok(header) = list_header(&mut self.input) {
            return Some(Header::List(header));
        }
        self.input.reset(&checkpoint);
        if let Ok(header) = shape_header(&mut self.input, self.source) {
            return Some(Header::Shape(header));
        }
        self.input.reset(&checkpoint);
        None
    }
}
