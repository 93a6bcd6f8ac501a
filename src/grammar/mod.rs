//! Syntax checking of token sequences
//!
//! - [`checker`]: [`GrammarChecker`], its [`ParseCursor`] and helpers
//! - `statements`: the top-level `if … then …` rule
//! - `expressions`: expression, term, factor and variable rules
//!
//! # Checker Implementation
//!
//! Hand-written recursive descent, one method per grammar rule, split across
//! files with `impl GrammarChecker` blocks. No tree is built: the only
//! outcome of a check is the diagnostics it reports.

pub mod checker;
mod expressions;
mod statements;

pub use checker::{GrammarChecker, ParseCursor};
