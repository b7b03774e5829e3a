use crate::{errors::errors::Error, lexer::tokens::TokenKind};

use super::{
    cst::{StatementNode, VarNode},
    expr::parse_exp,
    lookups::GRAMMAR,
    parser::Parser,
};

pub fn parse_stmt(parser: &mut Parser) -> Result<StatementNode, Error> {
    if let Some(handler) = GRAMMAR.stmt_handler(parser.current_token_kind()) {
        return handler(parser);
    }

    for kind in GRAMMAR.stmt_starts() {
        parser.record_expected(kind);
    }
    Err(parser.failure())
}

/// `let id = Exp`
pub fn parse_var_decl_stmt(parser: &mut Parser) -> Result<StatementNode, Error> {
    let let_token = parser.expect(TokenKind::Let)?;
    let id = parser.expect(TokenKind::Identifier)?;
    let eq = parser.expect(TokenKind::Assignment)?;
    let exp = parse_exp(parser)?;

    Ok(StatementNode::VarDecl {
        let_token,
        id,
        eq,
        exp,
    })
}

/// `Var = Exp`
pub fn parse_assign_stmt(parser: &mut Parser) -> Result<StatementNode, Error> {
    let var = VarNode {
        id: parser.expect(TokenKind::Identifier)?,
    };
    let eq = parser.expect(TokenKind::Assignment)?;
    let exp = parse_exp(parser)?;

    Ok(StatementNode::Assign { var, eq, exp })
}

/// `print Exp`
pub fn parse_print_stmt(parser: &mut Parser) -> Result<StatementNode, Error> {
    let print_token = parser.expect(TokenKind::Print)?;
    let exp = parse_exp(parser)?;

    Ok(StatementNode::Print { print_token, exp })
}
