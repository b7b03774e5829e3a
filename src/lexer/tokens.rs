use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::Span;

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("let", TokenKind::Let);
        map.insert("print", TokenKind::Print);
        map.insert("abs", TokenKind::Abs);
        map.insert("sqrt", TokenKind::Sqrt);
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    EOF,
    Number,
    Identifier,

    OpenParen,
    CloseParen,

    Assignment, // =
    Equals,     // ==

    Plus,
    Dash,
    Star,
    StarStar, // **
    Slash,
    Percent,

    /// A character no pattern accepts; left for the parser to reject
    Unrecognised,

    // Reserved
    Let,
    Print,
    Abs,
    Sqrt,
}

impl TokenKind {
    /// How the token kind reads in an expectation list.
    pub fn describe(&self) -> &'static str {
        match self {
            TokenKind::EOF => "end of input",
            TokenKind::Number => "a number",
            TokenKind::Identifier => "an identifier",
            TokenKind::OpenParen => "\"(\"",
            TokenKind::CloseParen => "\")\"",
            TokenKind::Assignment => "\"=\"",
            TokenKind::Equals => "\"==\"",
            TokenKind::Plus => "\"+\"",
            TokenKind::Dash => "\"-\"",
            TokenKind::Star => "\"*\"",
            TokenKind::StarStar => "\"**\"",
            TokenKind::Slash => "\"/\"",
            TokenKind::Percent => "\"%\"",
            TokenKind::Unrecognised => "an unrecognised character",
            TokenKind::Let => "\"let\"",
            TokenKind::Print => "\"print\"",
            TokenKind::Abs => "\"abs\"",
            TokenKind::Sqrt => "\"sqrt\"",
        }
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(Debug, Clone)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    pub span: Span,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Token {{\nkind: {},\nvalue: {}}}", self.kind, self.value)
    }
}

impl Token {
    fn is_one_of_many(&self, tokens: &[TokenKind]) -> bool {
        tokens.contains(&self.kind)
    }

    /// Text used when the token shows up in a diagnostic.
    pub fn describe(&self) -> String {
        if self.kind == TokenKind::EOF {
            String::from("end of input")
        } else {
            format!("\"{}\"", self.value)
        }
    }

    pub fn debug(&self) -> String {
        if self.is_one_of_many(&[
            TokenKind::Identifier,
            TokenKind::Number,
            TokenKind::Unrecognised,
        ]) {
            format!("{} ({})", self.kind, self.value)
        } else {
            format!("{} ()", self.kind)
        }
    }
}
