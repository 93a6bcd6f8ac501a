//! Grammar checker coordinator
//!
//! This module provides the [`GrammarChecker`] struct, its token cursor and
//! the shared helper methods. The grammar rules themselves live in
//! `statements` and `expressions` as further `impl GrammarChecker` blocks.
//!
//! Rules return nothing. A rule that fails reports a diagnostic and keeps
//! going from the current lookahead, so one pass may report several
//! (possibly cascading) errors.

use crate::diagnostics::{Diagnostic, DiagnosticKind, DiagnosticSink};
use crate::scanner::token::{SourceLocation, Token};
use std::slice;

/// Front-to-back cursor over a token sequence with one token of lookahead.
///
/// Once the tokens are exhausted the lookahead is an end marker, and
/// advancing past it yields the end marker again.
#[derive(Debug, Clone)]
pub struct ParseCursor<'t> {
    remaining: slice::Iter<'t, Token>,
    lookahead: Token,
    end: SourceLocation,
}

impl<'t> ParseCursor<'t> {
    pub fn new(tokens: &'t [Token]) -> Self {
        let end = tokens
            .last()
            .map(Token::end_location)
            .unwrap_or_default();
        let mut cursor = Self {
            remaining: tokens.iter(),
            lookahead: Token::end_marker(end),
            end,
        };
        cursor.advance();
        cursor
    }

    pub fn lookahead(&self) -> &Token {
        &self.lookahead
    }

    /// Move to the next token, or to the end marker
    pub fn advance(&mut self) {
        self.lookahead = match self.remaining.next() {
            Some(token) => token.clone(),
            None => Token::end_marker(self.end),
        };
    }
}

/// Recursive descent checker for `if <expr> then <expr>`
pub struct GrammarChecker<'t, 's> {
    pub(crate) cursor: ParseCursor<'t>,
    pub(crate) sink: &'s mut dyn DiagnosticSink,
}

impl<'t, 's> GrammarChecker<'t, 's> {
    pub fn new(tokens: &'t [Token], sink: &'s mut dyn DiagnosticSink) -> Self {
        Self {
            cursor: ParseCursor::new(tokens),
            sink,
        }
    }

    /// Check `tokens` as a single statement, reporting faults to `sink`.
    ///
    /// The statement rule runs exactly once; tokens left over after it are
    /// not examined.
    pub fn check(tokens: &'t [Token], sink: &'s mut dyn DiagnosticSink) {
        let mut checker = Self::new(tokens, sink);
        checker.statement();
    }

    // ===== Helper methods =====

    pub(crate) fn lookahead(&self) -> &Token {
        self.cursor.lookahead()
    }

    pub(crate) fn advance(&mut self) {
        self.cursor.advance();
    }

    /// Whether the lookahead is the reserved symbol `symbol`
    pub(crate) fn check_symbol(&self, symbol: &str) -> bool {
        self.lookahead().is_reserved(symbol)
    }

    /// Consume `symbol` if it is the lookahead
    pub(crate) fn match_symbol(&mut self, symbol: &str) -> bool {
        if self.check_symbol(symbol) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Report a fault at the lookahead
    pub(crate) fn error(&mut self, kind: DiagnosticKind) {
        let location = self.lookahead().location;
        self.sink.report(Diagnostic::new(kind, location));
    }
}
