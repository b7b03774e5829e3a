//! End-to-end tests for the public parsing API.
//!
//! These go from raw source text straight to the AST through `ael::parse`.

use ael::{
    ast::{
        expressions::{BinaryOperator, Expr, IdentifierExpr, UnaryOperator},
        statements::{AssignmentStmt, PrintStmt, Stmt, VarDeclStmt},
    },
    errors::errors::ErrorImpl,
    parse,
};

fn num(value: f64) -> Expr {
    Expr::number(value)
}

fn id(name: &str) -> Expr {
    Expr::identifier(name)
}

fn printed(source: &str) -> Expr {
    let program = parse(source).unwrap();
    assert_eq!(program.len(), 1);

    match &program.statements[0] {
        Stmt::Print(PrintStmt { expression }) => expression.clone(),
        other => panic!("Expected print statement, got {:?}", other),
    }
}

fn printed_owned(source: &str) -> Expr {
    match parse(source).unwrap().statements.into_iter().next() {
        Some(Stmt::Print(PrintStmt { expression })) => expression,
        other => panic!("Expected print statement, got {:?}", other),
    }
}

/// Counts binary nodes down the left spine, checking each one on the way.
fn left_spine_depth(expr: &Expr, operator: BinaryOperator) -> usize {
    let mut depth = 0;
    let mut current = expr;

    while let Expr::Binary(binary) = current {
        assert_eq!(binary.operator, operator);
        assert!(matches!(binary.right.as_ref(), Expr::Number(_)));
        depth += 1;
        current = binary.left.as_ref();
    }

    assert!(matches!(current, Expr::Number(_)));
    depth
}

#[test]
fn test_subtraction_is_left_associative() {
    assert_eq!(
        printed("print 8 - 3 - 2"),
        Expr::binary(
            BinaryOperator::Minus,
            Expr::binary(BinaryOperator::Minus, num(8.0), num(3.0)),
            num(2.0)
        )
    );
}

#[test]
fn test_division_is_left_associative() {
    assert_eq!(
        printed("print 64 / 4 / 2"),
        Expr::binary(
            BinaryOperator::Divide,
            Expr::binary(BinaryOperator::Divide, num(64.0), num(4.0)),
            num(2.0)
        )
    );
}

#[test]
fn test_exponentiation_is_right_associative() {
    assert_eq!(
        printed("print 2 ** 3 ** 2"),
        Expr::binary(
            BinaryOperator::Power,
            num(2.0),
            Expr::binary(BinaryOperator::Power, num(3.0), num(2.0))
        )
    );
}

#[test]
fn test_multiplication_binds_tighter_than_addition() {
    assert_eq!(
        printed("print 2 + 3 * 4"),
        Expr::binary(
            BinaryOperator::Plus,
            num(2.0),
            Expr::binary(BinaryOperator::Times, num(3.0), num(4.0))
        )
    );
    assert_eq!(
        printed("print 2 * 3 + 4"),
        Expr::binary(
            BinaryOperator::Plus,
            Expr::binary(BinaryOperator::Times, num(2.0), num(3.0)),
            num(4.0)
        )
    );
}

#[test]
fn test_exponentiation_binds_tighter_than_multiplication() {
    assert_eq!(
        printed("print 2 * 3 ** 2"),
        Expr::binary(
            BinaryOperator::Times,
            num(2.0),
            Expr::binary(BinaryOperator::Power, num(3.0), num(2.0))
        )
    );
}

#[test]
fn test_chained_equality_keeps_left_shape() {
    assert_eq!(
        printed("print a == b == c"),
        Expr::binary(
            BinaryOperator::Equals,
            Expr::binary(BinaryOperator::Equals, id("a"), id("b")),
            id("c")
        )
    );
}

#[test]
fn test_keyword_prefix_is_an_identifier() {
    let program = parse("let letx = 5").unwrap();

    assert_eq!(
        program.statements,
        vec![Stmt::VarDecl(VarDeclStmt {
            name: "letx".to_string(),
            initializer: num(5.0),
        })]
    );

    assert_eq!(printed("print printer"), id("printer"));
    assert_eq!(printed("print abs absx"), Expr::unary(UnaryOperator::Abs, id("absx")));
}

#[test]
fn test_comments_do_not_change_the_tree() {
    assert_eq!(parse("print 1 // comment\n"), parse("print 1"));
    assert_eq!(parse("print 1 // comment"), parse("print 1"));
    assert_eq!(
        parse("// header\nlet x = 1 // one\n// between\nprint x // done"),
        parse("let x = 1\nprint x")
    );
}

#[test]
fn test_comment_inside_expression() {
    assert_eq!(
        printed("print 1 + // the rest\n 2"),
        Expr::binary(BinaryOperator::Plus, num(1.0), num(2.0))
    );
}

#[test]
fn test_unary_functions() {
    assert_eq!(printed("print sqrt 4"), Expr::unary(UnaryOperator::Sqrt, num(4.0)));
    assert_eq!(printed("print -x"), Expr::unary(UnaryOperator::Negate, id("x")));
    assert_eq!(
        printed("print abs(1 - 5)"),
        Expr::unary(
            UnaryOperator::Abs,
            Expr::binary(BinaryOperator::Minus, num(1.0), num(5.0))
        )
    );
}

#[test]
fn test_declaration_then_assignment() {
    let program = parse("let x = 1\nx = x + 1").unwrap();

    assert_eq!(
        program.statements,
        vec![
            Stmt::VarDecl(VarDeclStmt {
                name: "x".to_string(),
                initializer: num(1.0),
            }),
            Stmt::Assignment(AssignmentStmt {
                target: IdentifierExpr {
                    name: "x".to_string()
                },
                value: Expr::binary(BinaryOperator::Plus, id("x"), num(1.0)),
            }),
        ]
    );
}

#[test]
fn test_statements_need_no_separator() {
    let program = parse("let x = 1 print x x = 2").unwrap();

    assert_eq!(program.len(), 3);
    let kinds: Vec<&str> = program
        .iter()
        .map(|stmt| match stmt {
            Stmt::VarDecl(_) => "decl",
            Stmt::Assignment(_) => "assign",
            Stmt::Print(_) => "print",
        })
        .collect();
    assert_eq!(kinds, vec!["decl", "print", "assign"]);
}

#[test]
fn test_larger_program() {
    let source = "
        // Computes the hypotenuse
        let a = 3
        let b = 4.5
        let c = sqrt (a ** 2 + b ** 2)
        print c
        c = abs -c % 2
        print c == 1
    ";

    let program = parse(source).unwrap();
    assert_eq!(program.len(), 6);

    assert_eq!(
        program.statements[2],
        Stmt::VarDecl(VarDeclStmt {
            name: "c".to_string(),
            initializer: Expr::unary(
                UnaryOperator::Sqrt,
                Expr::binary(
                    BinaryOperator::Plus,
                    Expr::binary(BinaryOperator::Power, id("a"), num(2.0)),
                    Expr::binary(BinaryOperator::Power, id("b"), num(2.0))
                )
            ),
        })
    );
    assert_eq!(
        program.statements[4],
        Stmt::Assignment(AssignmentStmt {
            target: IdentifierExpr {
                name: "c".to_string()
            },
            value: Expr::binary(
                BinaryOperator::Modulo,
                Expr::unary(
                    UnaryOperator::Abs,
                    Expr::unary(UnaryOperator::Negate, id("c"))
                ),
                num(2.0)
            ),
        })
    );
}

#[test]
fn test_missing_identifier_fails() {
    let error = parse("let = 5").unwrap_err();

    assert_eq!(error.get_error_name(), "SyntaxError");
    assert_eq!(error.get_position().0, 4);
}

#[test]
fn test_trailing_input_fails() {
    let error = parse("print 1 2").unwrap_err();

    assert_eq!(error.get_position().0, 8);
    match error.get_kind() {
        ErrorImpl::SyntaxError { expected, .. } => {
            assert!(expected.contains(&"end of input".to_string()))
        }
        other => panic!("Expected syntax error, got {:?}", other),
    }
}

#[test]
fn test_malformed_inputs_fail() {
    for source in [
        "",
        "   ",
        "print",
        "let x",
        "let x =",
        "x",
        "print 1.",
        "print .5",
        "print (1",
        "print 1)",
        "print 1 +* 2",
        "let let = 1",
        "sqrt = 4",
        "print x_y",
        "print 1e5",
        "print 2 ** ",
        "print 1 = 2",
        "print\u{a0}1",
        "let\u{3000}x = 1",
    ] {
        let result = parse(source);
        assert!(result.is_err(), "{:?} should not parse: {:?}", source, result);
    }
}

#[test]
fn test_long_chains_parse() {
    for (symbol, operator) in [
        ("+", BinaryOperator::Plus),
        ("*", BinaryOperator::Times),
        ("-", BinaryOperator::Minus),
    ] {
        let source = format!("print {}", vec!["3"; 10_000].join(symbol));
        let expr = printed_owned(&source);

        assert_eq!(left_spine_depth(&expr, operator), 9_999, "chain of {}", symbol);
    }
}

#[test]
fn test_deep_nesting_parses() {
    let source = format!("print {}x{}", "(".repeat(200), ")".repeat(200));
    assert_eq!(printed(&source), id("x"));

    let source = format!("print {}x", "- ".repeat(200));
    let mut expr = printed_owned(&source);
    let mut depth = 0;
    while let Expr::Unary(unary) = expr {
        assert_eq!(unary.operator, UnaryOperator::Negate);
        depth += 1;
        expr = *unary.operand;
    }
    assert_eq!(depth, 200);
    assert_eq!(expr, id("x"));
}

#[test]
fn test_failure_returns_no_partial_tree() {
    let error = parse("let x = 1\nprint x\nprint (").unwrap_err();

    assert_eq!(error.get_position().0, 25);
}

#[test]
fn test_concurrent_parsing() {
    let handles: Vec<_> = (0..8)
        .map(|i| {
            std::thread::spawn(move || {
                let source = format!("let v{i} = {i} * 2\nprint v{i} ** 2");
                parse(&source).map(|program| program.len())
            })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap().unwrap(), 2);
    }
}
