//! Error types for the Ael front end.
//!
//! Every failure carries the source position it was detected at. Parse
//! failures are `SyntaxError`s listing the token kinds that would have
//! been accepted at the furthest point the parser reached.

pub mod errors;
