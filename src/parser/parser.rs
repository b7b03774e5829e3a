//! Grammar matcher for Ael.
//!
//! The parser walks the token stream by recursive descent and produces the
//! concrete derivation in [`super::cst`]. Dispatch on the leading token of a
//! statement or primary goes through the process-wide [`GRAMMAR`] tables.
//!
//! Failures are tracked the way PEG matchers report them: every token kind
//! the parser looked for and did not find is recorded against the token it
//! was looking at. Only the furthest token keeps its expectations, so the
//! final error names the point the match got stuck and everything that
//! would have let it continue.

use std::sync::Arc;

use tracing::{debug, trace};

use crate::{
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{Token, TokenKind},
    Position, Span, MK_TOKEN,
};

use super::{
    cst::ProgramNode,
    lookups::{BindingPower, GRAMMAR},
    stmt::parse_stmt,
};

/// The main parser structure that maintains parsing state.
pub struct Parser {
    /// The list of tokens to parse, always ending in `EOF`
    tokens: Vec<Token>,
    /// Current position in the token stream
    pos: usize,
    /// The name of the source being parsed
    file: Arc<String>,
    /// Index of the furthest token an expectation failed at
    furthest: usize,
    /// Token kinds expected at `furthest`, in discovery order
    expected: Vec<TokenKind>,
}

impl Parser {
    pub fn new(tokens: Vec<Token>, file: Arc<String>) -> Self {
        Parser {
            tokens,
            pos: 0,
            file,
            furthest: 0,
            expected: vec![],
        }
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &Token {
        // The trailing EOF is never consumed, so the cursor stays in bounds
        &self.tokens[self.pos.min(self.tokens.len() - 1)]
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.current_token().kind
    }

    /// Advances to the next token and returns the previous token.
    pub fn advance(&mut self) -> Token {
        let token = self.current_token().clone();
        if token.kind != TokenKind::EOF {
            self.pos += 1;
        }
        token
    }

    /// Consumes the current token if it is of `kind`.
    ///
    /// A miss is recorded as an expectation at the current token.
    pub fn accept(&mut self, kind: TokenKind) -> Option<Token> {
        if self.current_token_kind() == kind {
            Some(self.advance())
        } else {
            self.record_expected(kind);
            None
        }
    }

    /// Consumes the current token if it is any of `kinds`.
    pub fn accept_any(&mut self, kinds: &[TokenKind]) -> Option<Token> {
        if kinds.contains(&self.current_token_kind()) {
            Some(self.advance())
        } else {
            kinds.iter().for_each(|kind| self.record_expected(*kind));
            None
        }
    }

    /// Consumes a binary operator registered at exactly `binding_power`.
    ///
    /// On a miss every operator of that level is recorded as expected.
    pub fn accept_operator(&mut self, binding_power: BindingPower) -> Option<Token> {
        if GRAMMAR.binding_power(self.current_token_kind()) == Some(binding_power) {
            return Some(self.advance());
        }

        for kind in GRAMMAR.operators_at(binding_power) {
            self.record_expected(kind);
        }
        None
    }

    /// Expects a token of the specified kind.
    ///
    /// # Returns
    ///
    /// The consumed token, or the furthest failure seen so far.
    pub fn expect(&mut self, expected_kind: TokenKind) -> Result<Token, Error> {
        self.accept(expected_kind).ok_or_else(|| self.failure())
    }

    /// Notes that `kind` would have been accepted at the current token.
    pub fn record_expected(&mut self, kind: TokenKind) {
        if self.pos > self.furthest {
            self.furthest = self.pos;
            self.expected.clear();
        }

        if self.pos == self.furthest && !self.expected.contains(&kind) {
            trace!(position = self.pos, expected = %kind, "recorded expectation");
            self.expected.push(kind);
        }
    }

    /// Builds the syntax error for the furthest point reached.
    pub fn failure(&self) -> Error {
        let token = &self.tokens[self.furthest];

        Error::new(
            ErrorImpl::SyntaxError {
                expected: self
                    .expected
                    .iter()
                    .map(|kind| kind.describe().to_string())
                    .collect(),
                found: token.describe(),
            },
            token.span.start.clone(),
        )
    }
}

/// Matches a token stream against the grammar.
///
/// The whole stream must match: `Statement+` followed by end of input.
///
/// # Returns
///
/// The concrete derivation, or a `SyntaxError` at the furthest token reached.
pub fn match_program(mut tokens: Vec<Token>, file: Arc<String>) -> Result<ProgramNode, Error> {
    if tokens.last().map(|token| token.kind) != Some(TokenKind::EOF) {
        let end = tokens
            .last()
            .map(|token| token.span.end.clone())
            .unwrap_or_else(|| Position(0, Arc::clone(&file)));
        let span = Span { start: end.clone(), end };
        tokens.push(MK_TOKEN!(TokenKind::EOF, String::from("EOF"), span));
    }

    let mut parser = Parser::new(tokens, file);

    let mut statements = vec![parse_stmt(&mut parser)?];

    while GRAMMAR.stmt_handler(parser.current_token_kind()).is_some() {
        statements.push(parse_stmt(&mut parser)?);
    }

    for kind in GRAMMAR.stmt_starts() {
        parser.record_expected(kind);
    }
    parser.expect(TokenKind::EOF)?;

    debug!(statements = statements.len(), file = %parser.file, "matched program");
    Ok(ProgramNode { statements })
}
