use std::fmt;

use crate::span::Span;

/// Token types for the SLC language
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token<'src> {
    // Keywords
    Create,
    Style,

    // Words and literals
    Identifier(&'src str),
    Number(&'src str),
    /// Content between matching quotes, quotes excluded
    StringLiteral(&'src str),
    /// Anything else that is not whitespace or punctuation (`#ff0000`, a stray quote)
    Text(&'src str),

    // Punctuation
    LeftParen,  // (
    RightParen, // )
    LeftBrace,  // {
    RightBrace, // }
    Colon,      // :
    Semicolon,  // ;
    Comma,      // ,

    // Comments
    LineComment(&'src str), // // comment

    // Whitespace
    Whitespace,
    Newline,
}

impl Token<'_> {
    /// Whitespace, newlines and comments carry no structure.
    pub fn is_trivia(&self) -> bool {
        matches!(
            self,
            Token::Whitespace | Token::Newline | Token::LineComment(_)
        )
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Create => write!(f, "Create"),
            Token::Style => write!(f, "Style"),
            Token::Identifier(s) | Token::Number(s) | Token::Text(s) => write!(f, "{s}"),
            Token::StringLiteral(s) => write!(f, "\"{s}\""),
            Token::LeftParen => write!(f, "("),
            Token::RightParen => write!(f, ")"),
            Token::LeftBrace => write!(f, "{{"),
            Token::RightBrace => write!(f, "}}"),
            Token::Colon => write!(f, ":"),
            Token::Semicolon => write!(f, ";"),
            Token::Comma => write!(f, ","),
            Token::LineComment(s) => write!(f, "//{s}"),
            Token::Whitespace => write!(f, " "),
            Token::Newline => writeln!(f),
        }
    }
}

/// A token with position information for winnow integration
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PositionedToken<'src> {
    pub token: Token<'src>,
    pub span: Span,
}

impl<'src> PositionedToken<'src> {
    pub fn new(token: Token<'src>, span: Span) -> Self {
        Self { token, span }
    }
}

impl<'src> std::ops::Deref for PositionedToken<'src> {
    type Target = Token<'src>;

    fn deref(&self) -> &Self::Target {
        &self.token
    }
}

impl fmt::Display for PositionedToken<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.token)
    }
}
