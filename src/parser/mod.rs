//! Grammar matching for Ael.
//!
//! This module turns the token stream into a concrete derivation that
//! follows the grammar rule for rule. It handles:
//!
//! - Statement dispatch on the leading token (`let`, `print`, identifier)
//! - One matching function per precedence layer (Exp, Exp1, Term, Factor)
//! - Furthest-failure tracking for expectation-based diagnostics
//!
//! The dispatch tables and operator levels live in a single [`lookups::GRAMMAR`]
//! built once on first use.

pub mod cst;
pub mod expr;
pub mod lookups;
pub mod parser;
pub mod stmt;
