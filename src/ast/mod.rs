/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the AST structure
///
/// Submodules:
/// - ast: The program root
/// - expressions: Expression nodes and operators
/// - statements: Statement nodes
/// - builder: Conversion from a concrete derivation to the AST
pub mod ast;
pub mod builder;
pub mod expressions;
pub mod statements;
