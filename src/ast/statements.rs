use super::expressions::{Expr, IdentifierExpr};

/// Statement Types
#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    VarDecl(VarDeclStmt),
    Assignment(AssignmentStmt),
    Print(PrintStmt),
}

/// `let name = initializer`
#[derive(Debug, Clone, PartialEq)]
pub struct VarDeclStmt {
    pub name: String,
    pub initializer: Expr,
}

/// `target = value`
///
/// Whether `target` was declared is not checked here.
#[derive(Debug, Clone, PartialEq)]
pub struct AssignmentStmt {
    pub target: IdentifierExpr,
    pub value: Expr,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PrintStmt {
    pub expression: Expr,
}
