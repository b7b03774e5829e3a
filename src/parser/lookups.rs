use lazy_static::lazy_static;

use crate::{errors::errors::Error, lexer::tokens::TokenKind};

use super::{
    cst::{PrimaryNode, StatementNode},
    expr::*,
    parser::Parser,
    stmt::*,
};

/// Precedence levels, loosest first.
#[derive(PartialEq, PartialOrd, Clone, Copy, Debug)]
pub enum BindingPower {
    Relational,
    Additive,
    Multiplicative,
    Exponent,
}

pub type StmtHandler = fn(&mut Parser) -> Result<StatementNode, Error>;
pub type NUDHandler = fn(&mut Parser) -> Result<PrimaryNode, Error>;

/// The Ael grammar's dispatch tables.
///
/// Entries keep registration order, which is also the order expectations
/// are listed in diagnostics.
pub struct Grammar {
    stmt_lookup: Vec<(TokenKind, StmtHandler)>,
    nud_lookup: Vec<(TokenKind, NUDHandler)>,
    binding_power_lookup: Vec<(TokenKind, BindingPower)>,
}

impl Grammar {
    fn new() -> Self {
        Grammar {
            stmt_lookup: vec![],
            nud_lookup: vec![],
            binding_power_lookup: vec![],
        }
    }

    /// Registers a statement that starts with `kind`.
    fn stmt(&mut self, kind: TokenKind, stmt_fn: StmtHandler) {
        self.stmt_lookup.push((kind, stmt_fn));
    }

    /// Registers a primary expression that starts with `kind`.
    fn nud(&mut self, kind: TokenKind, nud_fn: NUDHandler) {
        self.nud_lookup.push((kind, nud_fn));
    }

    /// Registers a binary operator at the given precedence level.
    fn led(&mut self, kind: TokenKind, binding_power: BindingPower) {
        self.binding_power_lookup.push((kind, binding_power));
    }

    pub fn stmt_handler(&self, kind: TokenKind) -> Option<StmtHandler> {
        lookup(&self.stmt_lookup, kind)
    }

    pub fn nud_handler(&self, kind: TokenKind) -> Option<NUDHandler> {
        lookup(&self.nud_lookup, kind)
    }

    /// The level `kind` binds at as a binary operator, if it is one.
    pub fn binding_power(&self, kind: TokenKind) -> Option<BindingPower> {
        lookup(&self.binding_power_lookup, kind)
    }

    pub fn stmt_starts(&self) -> Vec<TokenKind> {
        self.stmt_lookup.iter().map(|(kind, _)| *kind).collect()
    }

    pub fn nud_starts(&self) -> Vec<TokenKind> {
        self.nud_lookup.iter().map(|(kind, _)| *kind).collect()
    }

    /// Operators recognised at exactly `binding_power`.
    pub fn operators_at(&self, binding_power: BindingPower) -> Vec<TokenKind> {
        self.binding_power_lookup
            .iter()
            .filter(|(_, bp)| *bp == binding_power)
            .map(|(kind, _)| *kind)
            .collect()
    }
}

fn lookup<T: Copy>(table: &[(TokenKind, T)], kind: TokenKind) -> Option<T> {
    table
        .iter()
        .find(|(entry, _)| *entry == kind)
        .map(|(_, value)| *value)
}

lazy_static! {
    pub static ref GRAMMAR: Grammar = create_grammar();
}

fn create_grammar() -> Grammar {
    let mut grammar = Grammar::new();

    // Binary operators, tightest binding last
    grammar.led(TokenKind::Equals, BindingPower::Relational);
    grammar.led(TokenKind::Plus, BindingPower::Additive);
    grammar.led(TokenKind::Dash, BindingPower::Additive);
    grammar.led(TokenKind::Star, BindingPower::Multiplicative);
    grammar.led(TokenKind::Slash, BindingPower::Multiplicative);
    grammar.led(TokenKind::Percent, BindingPower::Multiplicative);
    grammar.led(TokenKind::StarStar, BindingPower::Exponent);

    // Primaries
    grammar.nud(TokenKind::Identifier, parse_var_primary);
    grammar.nud(TokenKind::Number, parse_num_primary);
    grammar.nud(TokenKind::OpenParen, parse_parens_primary);
    grammar.nud(TokenKind::Dash, parse_unary_primary);
    grammar.nud(TokenKind::Abs, parse_unary_primary);
    grammar.nud(TokenKind::Sqrt, parse_unary_primary);

    // Statements
    grammar.stmt(TokenKind::Let, parse_var_decl_stmt);
    grammar.stmt(TokenKind::Print, parse_print_stmt);
    grammar.stmt(TokenKind::Identifier, parse_assign_stmt);

    grammar
}
