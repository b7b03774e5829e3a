use std::fmt::Display;

/// Expression Types
///
/// Every expression node owns its operands; the tree has no sharing and no
/// back references.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Binary(BinaryExpr),
    Unary(UnaryExpr),
    Identifier(IdentifierExpr),
    Number(NumberExpr),
}

impl Expr {
    pub fn binary(operator: BinaryOperator, left: Expr, right: Expr) -> Self {
        Expr::Binary(BinaryExpr {
            operator,
            left: Box::new(left),
            right: Box::new(right),
        })
    }

    pub fn unary(operator: UnaryOperator, operand: Expr) -> Self {
        Expr::Unary(UnaryExpr {
            operator,
            operand: Box::new(operand),
        })
    }

    pub fn identifier(name: impl Into<String>) -> Self {
        Expr::Identifier(IdentifierExpr { name: name.into() })
    }

    pub fn number(value: f64) -> Self {
        Expr::Number(NumberExpr { value })
    }
}

/// Binary operators, carried with their source spelling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    Equals,
    Plus,
    Minus,
    Times,
    Divide,
    Modulo,
    Power,
}

impl BinaryOperator {
    pub fn symbol(&self) -> &'static str {
        match self {
            BinaryOperator::Equals => "==",
            BinaryOperator::Plus => "+",
            BinaryOperator::Minus => "-",
            BinaryOperator::Times => "*",
            BinaryOperator::Divide => "/",
            BinaryOperator::Modulo => "%",
            BinaryOperator::Power => "**",
        }
    }

    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "==" => Some(BinaryOperator::Equals),
            "+" => Some(BinaryOperator::Plus),
            "-" => Some(BinaryOperator::Minus),
            "*" => Some(BinaryOperator::Times),
            "/" => Some(BinaryOperator::Divide),
            "%" => Some(BinaryOperator::Modulo),
            "**" => Some(BinaryOperator::Power),
            _ => None,
        }
    }
}

impl Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Unary operators, carried with their source spelling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnaryOperator {
    Negate,
    Abs,
    Sqrt,
}

impl UnaryOperator {
    pub fn symbol(&self) -> &'static str {
        match self {
            UnaryOperator::Negate => "-",
            UnaryOperator::Abs => "abs",
            UnaryOperator::Sqrt => "sqrt",
        }
    }

    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "-" => Some(UnaryOperator::Negate),
            "abs" => Some(UnaryOperator::Abs),
            "sqrt" => Some(UnaryOperator::Sqrt),
            _ => None,
        }
    }
}

impl Display for UnaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

// LITERALS

/// Number Expression
/// A numeric literal, already converted to a double.
#[derive(Debug, Clone, PartialEq)]
pub struct NumberExpr {
    pub value: f64,
}

/// Identifier Expression
/// A reference to a variable by name. Resolution happens downstream.
#[derive(Debug, Clone, PartialEq)]
pub struct IdentifierExpr {
    pub name: String,
}

// COMPLEX

/// Binary Expression
///
/// Shared by every precedence level; the level is implied by tree shape.
#[derive(Debug, Clone, PartialEq)]
pub struct BinaryExpr {
    pub operator: BinaryOperator,
    pub left: Box<Expr>,
    pub right: Box<Expr>,
}

// A long `a + b + c + ...` is a left spine as deep as the chain. Children
// are moved onto a heap stack here so dropping it does not recurse.
impl Drop for BinaryExpr {
    fn drop(&mut self) {
        let mut pending = vec![take(&mut self.left), take(&mut self.right)];

        while let Some(mut expr) = pending.pop() {
            match &mut expr {
                Expr::Binary(inner) => {
                    pending.push(take(&mut inner.left));
                    pending.push(take(&mut inner.right));
                }
                Expr::Unary(inner) => pending.push(take(&mut inner.operand)),
                Expr::Identifier(_) | Expr::Number(_) => {}
            }
        }
    }
}

fn take(slot: &mut Expr) -> Expr {
    std::mem::replace(slot, Expr::number(0.0))
}

/// Unary Expression
/// Negation or one of the named functions `abs` and `sqrt`.
#[derive(Debug, Clone, PartialEq)]
pub struct UnaryExpr {
    pub operator: UnaryOperator,
    pub operand: Box<Expr>,
}
