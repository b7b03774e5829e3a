//! Builds the AST from a concrete derivation.
//!
//! Each derivation node type has exactly one function, and each function is a
//! single exhaustive match over that node's alternatives. The precedence layers
//! (Exp, Exp1, Term, Factor) all collapse into [`Expr::Binary`]; parentheses
//! and keyword tokens are dropped. Operand sequences are folded from the left
//! in a loop, so chain length never adds stack depth.

use crate::{
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::Token,
    parser::cst::{
        Exp1Node, ExpNode, FactorNode, PrimaryNode, ProgramNode, StatementNode, TermNode, VarNode,
    },
};

use super::{
    ast::Program,
    expressions::{BinaryOperator, Expr, IdentifierExpr, UnaryOperator},
    statements::{AssignmentStmt, PrintStmt, Stmt, VarDeclStmt},
};

pub fn build_program(program: ProgramNode) -> Result<Program, Error> {
    let statements = program
        .statements
        .into_iter()
        .map(build_stmt)
        .collect::<Result<Vec<Stmt>, Error>>()?;

    Ok(Program::new(statements))
}

pub fn build_stmt(statement: StatementNode) -> Result<Stmt, Error> {
    Ok(match statement {
        StatementNode::VarDecl { id, exp, .. } => Stmt::VarDecl(VarDeclStmt {
            name: id.value,
            initializer: build_exp(exp)?,
        }),
        StatementNode::Assign { var, exp, .. } => Stmt::Assignment(AssignmentStmt {
            target: build_var(var),
            value: build_exp(exp)?,
        }),
        StatementNode::Print { exp, .. } => Stmt::Print(PrintStmt {
            expression: build_exp(exp)?,
        }),
    })
}

pub fn build_exp(exp: ExpNode) -> Result<Expr, Error> {
    let mut left = build_exp1(exp.first)?;

    for (op, right) in exp.rest {
        left = binary(op, left, build_exp1(right)?)?;
    }

    Ok(left)
}

fn build_exp1(exp: Exp1Node) -> Result<Expr, Error> {
    let mut left = build_term(exp.first)?;

    for (op, right) in exp.rest {
        left = binary(op, left, build_term(right)?)?;
    }

    Ok(left)
}

fn build_term(term: TermNode) -> Result<Expr, Error> {
    let mut left = build_factor(term.first)?;

    for (op, right) in term.rest {
        left = binary(op, left, build_factor(right)?)?;
    }

    Ok(left)
}

fn build_factor(factor: FactorNode) -> Result<Expr, Error> {
    match factor {
        FactorNode::Exponentiation { base, op, exponent } => {
            binary(op, build_primary(base)?, build_factor(*exponent)?)
        }
        FactorNode::Primary(inner) => build_primary(inner),
    }
}

fn build_primary(primary: PrimaryNode) -> Result<Expr, Error> {
    match primary {
        PrimaryNode::Var(var) => Ok(Expr::Identifier(build_var(var))),
        PrimaryNode::Num(token) => match token.value.parse::<f64>() {
            Ok(value) => Ok(Expr::number(value)),
            Err(_) => Err(Error::new(
                ErrorImpl::NumberParseError { token: token.value },
                token.span.start,
            )),
        },
        // Parentheses only shape the derivation
        PrimaryNode::Parens { exp, .. } => build_exp(*exp),
        PrimaryNode::Unary { op, operand } => {
            let operator = UnaryOperator::from_symbol(&op.value)
                .ok_or_else(|| not_an_operator(&op, &["\"-\"", "\"abs\"", "\"sqrt\""]))?;
            Ok(Expr::unary(operator, build_factor(*operand)?))
        }
    }
}

fn build_var(var: VarNode) -> IdentifierExpr {
    IdentifierExpr { name: var.id.value }
}

fn binary(op: Token, left: Expr, right: Expr) -> Result<Expr, Error> {
    let operator = BinaryOperator::from_symbol(&op.value).ok_or_else(|| {
        not_an_operator(
            &op,
            &["\"==\"", "\"+\"", "\"-\"", "\"*\"", "\"/\"", "\"%\"", "\"**\""],
        )
    })?;

    Ok(Expr::binary(operator, left, right))
}

// Only reachable for hand-built derivations
fn not_an_operator(token: &Token, expected: &[&str]) -> Error {
    Error::new(
        ErrorImpl::SyntaxError {
            expected: expected.iter().map(|symbol| symbol.to_string()).collect(),
            found: token.describe(),
        },
        token.span.start.clone(),
    )
}
