use crate::{errors::errors::Error, lexer::tokens::TokenKind};

use super::{
    cst::{Exp1Node, ExpNode, FactorNode, PrimaryNode, TermNode, VarNode},
    lookups::{BindingPower, GRAMMAR},
    parser::Parser,
};

// Exp, Exp1 and Term are left-recursive in the grammar; each is matched as a
// loop collecting `(operator, operand)` pairs after the first operand. Factor is
// right-recursive.

/// `Exp = Exp "==" Exp1 | Exp1`
pub fn parse_exp(parser: &mut Parser) -> Result<ExpNode, Error> {
    let first = parse_exp1(parser)?;
    let mut rest = vec![];

    while let Some(op) = parser.accept_operator(BindingPower::Relational) {
        rest.push((op, parse_exp1(parser)?));
    }

    Ok(ExpNode { first, rest })
}

/// `Exp1 = Exp1 ("+" | "-") Term | Term`
pub fn parse_exp1(parser: &mut Parser) -> Result<Exp1Node, Error> {
    let first = parse_term(parser)?;
    let mut rest = vec![];

    while let Some(op) = parser.accept_operator(BindingPower::Additive) {
        rest.push((op, parse_term(parser)?));
    }

    Ok(Exp1Node { first, rest })
}

/// `Term = Term ("*" | "/" | "%") Factor | Factor`
pub fn parse_term(parser: &mut Parser) -> Result<TermNode, Error> {
    let first = parse_factor(parser)?;
    let mut rest = vec![];

    while let Some(op) = parser.accept_operator(BindingPower::Multiplicative) {
        rest.push((op, parse_factor(parser)?));
    }

    Ok(TermNode { first, rest })
}

/// `Factor = Primary "**" Factor | Primary`
pub fn parse_factor(parser: &mut Parser) -> Result<FactorNode, Error> {
    let base = parse_primary(parser)?;

    match parser.accept_operator(BindingPower::Exponent) {
        Some(op) => Ok(FactorNode::Exponentiation {
            base,
            op,
            exponent: Box::new(parse_factor(parser)?),
        }),
        None => Ok(FactorNode::Primary(base)),
    }
}

pub fn parse_primary(parser: &mut Parser) -> Result<PrimaryNode, Error> {
    if let Some(handler) = GRAMMAR.nud_handler(parser.current_token_kind()) {
        return handler(parser);
    }

    for kind in GRAMMAR.nud_starts() {
        parser.record_expected(kind);
    }
    Err(parser.failure())
}

pub fn parse_var_primary(parser: &mut Parser) -> Result<PrimaryNode, Error> {
    let id = parser.expect(TokenKind::Identifier)?;
    Ok(PrimaryNode::Var(VarNode { id }))
}

pub fn parse_num_primary(parser: &mut Parser) -> Result<PrimaryNode, Error> {
    Ok(PrimaryNode::Num(parser.expect(TokenKind::Number)?))
}

/// `"(" Exp ")"`
pub fn parse_parens_primary(parser: &mut Parser) -> Result<PrimaryNode, Error> {
    let open = parser.expect(TokenKind::OpenParen)?;
    let exp = parse_exp(parser)?;
    let close = parser.expect(TokenKind::CloseParen)?;

    Ok(PrimaryNode::Parens {
        open,
        exp: Box::new(exp),
        close,
    })
}

/// `("-" | "abs" | "sqrt") Factor`
pub fn parse_unary_primary(parser: &mut Parser) -> Result<PrimaryNode, Error> {
    let op = parser
        .accept_any(&[TokenKind::Dash, TokenKind::Abs, TokenKind::Sqrt])
        .ok_or_else(|| parser.failure())?;
    let operand = parse_factor(parser)?;

    Ok(PrimaryNode::Unary {
        op,
        operand: Box::new(operand),
    })
}
