#![allow(clippy::module_inception)]

use std::sync::Arc;

use tracing::debug;

use crate::{
    ast::{ast::Program, builder::build_program},
    errors::errors::Error,
    lexer::lexer::tokenize,
    parser::{cst::ProgramNode, parser::match_program},
};

pub mod ast;
pub mod config;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;

extern crate regex;

/// Byte offset into a named source.
#[derive(Debug, Clone, PartialEq)]
pub struct Position(pub usize, pub Arc<String>);

impl Position {
    pub fn null() -> Self {
        Position(0, Arc::new(String::from("<null>")))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

/// Parses Ael source into its abstract syntax tree.
///
/// Fails with a `SyntaxError` unless the whole input matches the grammar.
pub fn parse(source: &str) -> Result<Program, Error> {
    parse_named(source, None)
}

/// Same as [`parse`], with `name` used as the source name in diagnostics.
pub fn parse_named(source: &str, name: Option<String>) -> Result<Program, Error> {
    let derivation = match_named(source, name)?;
    let program = build_program(derivation)?;

    debug!(statements = program.len(), "built program");
    Ok(program)
}

/// Matches source text against the grammar, returning the concrete derivation.
pub fn match_source(source: &str) -> Result<ProgramNode, Error> {
    match_named(source, None)
}

fn match_named(source: &str, name: Option<String>) -> Result<ProgramNode, Error> {
    let tokens = tokenize(source, name);
    let file = Arc::clone(&tokens[tokens.len() - 1].span.start.1);
    match_program(tokens, file)
}

/// Finds the line holding byte `position` of `content`.
///
/// Returns the 1-based line number, the line text and the byte offset of
/// `position` within that line. A position at the very end of the input maps
/// past the last character of the final line.
pub fn get_line_at_position(content: &str, position: usize) -> (usize, String, usize) {
    let pos = position.min(content.len());

    let mut start = 0;
    let mut line_number = 1;

    for line in content.split_inclusive('\n') {
        let end = start + line.len();

        if (start..end).contains(&pos) {
            return (line_number, line.to_string(), pos - start);
        }

        start = end;
        line_number += 1;
    }

    // End of input: either after a trailing newline or on the last line
    match content.rsplit_once('\n') {
        Some((_, last)) if !last.is_empty() => (line_number - 1, last.to_string(), last.len()),
        Some(_) => (line_number, String::new(), 0),
        None => (1, content.to_string(), content.len()),
    }
}
