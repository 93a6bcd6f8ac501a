//! Scanner and grammar checker run back to back

use crate::diagnostics::DiagnosticSink;
use crate::grammar::GrammarChecker;
use crate::scanner::Scanner;

/// Owns a [`Scanner`] and checks each analyzed source as one statement.
///
/// Because the scanner is kept, its literal tables accumulate across
/// [`Analyzer::analyze`] calls.
#[derive(Debug, Default)]
pub struct Analyzer {
    scanner: Scanner,
}

impl Analyzer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tokenize `source` and check it, sending lexical and syntax faults to
    /// the same sink in the order they are found.
    pub fn analyze(&mut self, source: &str, sink: &mut dyn DiagnosticSink) {
        let tokens = self.scanner.tokenize(source, sink);
        GrammarChecker::check(&tokens, sink);
    }

    pub fn scanner(&self) -> &Scanner {
        &self.scanner
    }
}
