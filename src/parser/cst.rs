//! Concrete derivation produced by the grammar matcher.
//!
//! One node type per grammar rule, one variant per alternative. The
//! left-recursive rules (Exp, Exp1, Term) are stored as an operand sequence
//! instead of a nested chain, so a long sum stays flat. Every token the rule
//! consumed is kept, including keywords, `=` and parentheses, so the
//! derivation mirrors the source exactly:
//!
//! ```text
//! Program    = Statement+
//! Statement  = "let" id "=" Exp  |  Var "=" Exp  |  "print" Exp
//! Exp        = Exp "==" Exp1 | Exp1
//! Exp1       = Exp1 ("+" | "-") Term | Term
//! Term       = Term ("*" | "/" | "%") Factor | Factor
//! Factor     = Primary "**" Factor | Primary
//! Primary    = Var | num | "(" Exp ")" | ("-" | "abs" | "sqrt") Factor
//! ```

use crate::lexer::tokens::Token;

#[derive(Debug, Clone)]
pub struct ProgramNode {
    pub statements: Vec<StatementNode>,
}

#[derive(Debug, Clone)]
pub enum StatementNode {
    VarDecl {
        let_token: Token,
        id: Token,
        eq: Token,
        exp: ExpNode,
    },
    Assign {
        var: VarNode,
        eq: Token,
        exp: ExpNode,
    },
    Print {
        print_token: Token,
        exp: ExpNode,
    },
}

/// `Exp "==" Exp1`, kept as its first operand plus each `("==", Exp1)` that
/// followed. Folding the sequence from the left gives the left-recursive tree.
#[derive(Debug, Clone)]
pub struct ExpNode {
    pub first: Exp1Node,
    pub rest: Vec<(Token, Exp1Node)>,
}

#[derive(Debug, Clone)]
pub struct Exp1Node {
    pub first: TermNode,
    pub rest: Vec<(Token, TermNode)>,
}

#[derive(Debug, Clone)]
pub struct TermNode {
    pub first: FactorNode,
    pub rest: Vec<(Token, FactorNode)>,
}

#[derive(Debug, Clone)]
pub enum FactorNode {
    Exponentiation {
        base: PrimaryNode,
        op: Token,
        exponent: Box<FactorNode>,
    },
    Primary(PrimaryNode),
}

#[derive(Debug, Clone)]
pub enum PrimaryNode {
    Var(VarNode),
    Num(Token),
    Parens {
        open: Token,
        exp: Box<ExpNode>,
        close: Token,
    },
    Unary {
        op: Token,
        operand: Box<FactorNode>,
    },
}

/// An identifier used as a variable reference.
#[derive(Debug, Clone)]
pub struct VarNode {
    pub id: Token,
}
