//! # Introduction
//!
//! `pasclex` analyzes programs in a small Pascal-like language in two
//! stages: a [`Scanner`] that turns source text into classified tokens, and a
//! [`GrammarChecker`] that verifies the tokens against the statement grammar
//! `if <expr> then <expr>` by recursive descent.
//!
//! ## Pipeline
//!
//! ```text
//! Source → Scanner → Tokens → GrammarChecker → Diagnostics
//!             ↓
//!       literal tables
//! ```
//!
//! 1. [`scanner`] — tokenizes source, fills the per-class literal tables and
//!    resolves keywords and punctuation against the reserved-symbol table.
//! 2. [`grammar`] — checks a token sequence; builds no tree.
//! 3. [`diagnostics`] — both stages report faults through a
//!    [`DiagnosticSink`] and always run to completion.
//! 4. [`analyzer`] — owns a scanner and runs both stages on a source string.
//!
//! ## Example
//!
//! ```
//! use pasclex::{Analyzer, CollectingSink};
//!
//! let mut analyzer = Analyzer::new();
//! let mut sink = CollectingSink::new();
//! analyzer.analyze("if x > 1 then y + 2", &mut sink);
//! assert!(sink.is_empty());
//! ```

pub mod analyzer;
pub mod constants;
pub mod diagnostics;
pub mod grammar;
pub mod scanner;

pub use analyzer::Analyzer;
pub use diagnostics::{CollectingSink, Diagnostic, DiagnosticKind, DiagnosticSink, LogSink};
pub use grammar::GrammarChecker;
pub use scanner::{Scanner, Token, TokenClass};
