//! Lexical analysis for the toy-Pascal language
//!
//! - [`token`]: token record, token classes and source locations
//! - [`tables`]: reserved-symbol table and per-class literal tables
//! - [`lexer`]: the [`Scanner`] itself (source text → tokens)
//!
//! # Character classes
//!
//! | class      | characters                    |
//! |------------|-------------------------------|
//! | digit      | `0-9`                         |
//! | word       | `A-Z a-z 0-9 _`               |
//! | delimiter  | `+ - ( ) [ ] = ; : < > ,`     |
//! | quote      | `'`                           |
//! | whitespace | any Unicode white space       |
//!
//! Keywords are scanned as words and then resolved against the
//! reserved-symbol table, so they come out with the same class as
//! punctuation.

pub mod lexer;
pub mod tables;
pub mod token;

pub use lexer::Scanner;
pub use tables::{lookup_reserved, reserved_symbols, LiteralTable, ReservedSymbol};
pub use token::{class_name, SourceLocation, Token, TokenClass};
