//! Diagnostics reported by the scanner and the grammar checker
//!
//! Neither stage fails: every lexical or syntax fault becomes a
//! [`Diagnostic`] handed to a [`DiagnosticSink`], and processing carries on.
//! [`LogSink`] forwards diagnostics to `tracing`; [`CollectingSink`] keeps
//! them in memory for inspection.

use crate::scanner::token::{SourceLocation, TokenClass};
use std::fmt;

/// What went wrong
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiagnosticKind {
    /// Character that starts no token
    UnrecognizedCharacter { ch: char },

    /// End of input inside a string literal
    UnterminatedString,

    /// A required keyword (`if`, `then`) was not the lookahead
    ExpectedKeyword {
        keyword: &'static str,
        found: String,
    },

    /// A variable was required but the lookahead has another class
    IdentifierExpected { found: TokenClass },

    /// A parenthesized expression was not closed
    ExpectedClosingParen { found: String },
}

impl DiagnosticKind {
    pub fn is_lexical(&self) -> bool {
        matches!(
            self,
            DiagnosticKind::UnrecognizedCharacter { .. } | DiagnosticKind::UnterminatedString
        )
    }
}

impl fmt::Display for DiagnosticKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiagnosticKind::UnrecognizedCharacter { ch } => {
                write!(f, "Unrecognized character '{}'", ch.escape_debug())
            }
            DiagnosticKind::UnterminatedString => write!(f, "Unterminated string literal"),
            DiagnosticKind::ExpectedKeyword { keyword, found } => {
                write!(f, "Expected '{}' but got {}", keyword, found)
            }
            DiagnosticKind::IdentifierExpected { found } => {
                write!(f, "Identifier expected but got {}", found)
            }
            DiagnosticKind::ExpectedClosingParen { found } => {
                write!(f, "Expected closing ')' but got {}", found)
            }
        }
    }
}

/// A located diagnostic
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    pub location: SourceLocation,
}

impl Diagnostic {
    pub fn new(kind: DiagnosticKind, location: SourceLocation) -> Self {
        Self { kind, location }
    }

    /// The message without location
    pub fn message(&self) -> String {
        self.kind.to_string()
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let stage = if self.kind.is_lexical() {
            "Lexical"
        } else {
            "Syntax"
        };
        write!(
            f,
            "{} error at line {}, column {}: {}",
            stage, self.location.line, self.location.column, self.kind
        )
    }
}

/// Receiver for diagnostics.
///
/// Reporting is a side channel only; it never changes what the caller does
/// next.
pub trait DiagnosticSink {
    fn report(&mut self, diagnostic: Diagnostic);
}

/// Emits each diagnostic as a `tracing` warning
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSink;

impl DiagnosticSink for LogSink {
    fn report(&mut self, diagnostic: Diagnostic) {
        tracing::warn!(
            line = diagnostic.location.line,
            column = diagnostic.location.column,
            "{}",
            diagnostic
        );
    }
}

/// Records diagnostics in report order
#[derive(Debug, Clone, Default)]
pub struct CollectingSink {
    pub diagnostics: Vec<Diagnostic>,
}

impl CollectingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Messages without locations, in report order
    pub fn messages(&self) -> Vec<String> {
        self.diagnostics.iter().map(Diagnostic::message).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    pub fn clear(&mut self) {
        self.diagnostics.clear();
    }
}

impl DiagnosticSink for CollectingSink {
    fn report(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }
}
