//! Statement rule
//!
//! ```text
//! statement ::= 'if' expression 'then' expression
//! ```
//!
//! A missing keyword is reported and the following expression is parsed
//! anyway from the current lookahead.

use super::checker::GrammarChecker;
use crate::diagnostics::DiagnosticKind;

impl GrammarChecker<'_, '_> {
    pub(crate) fn statement(&mut self) {
        tracing::debug!(lookahead = %self.lookahead(), "checking if statement");

        self.expect_keyword("if");
        self.expression();

        self.expect_keyword("then");
        self.expression();
    }

    fn expect_keyword(&mut self, keyword: &'static str) {
        if !self.match_symbol(keyword) {
            let found = self.lookahead().to_string();
            self.error(DiagnosticKind::ExpectedKeyword { keyword, found });
        }
    }
}
