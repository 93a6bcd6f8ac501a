//! Expression rules
//!
//! ```text
//! expression        ::= simple_expression [ '>' simple_expression ]
//! simple_expression ::= term { '+' term }
//! term              ::= factor
//! factor            ::= INT | STR | variable
//! variable          ::= ID [ '(' expression ')' ]
//! ```
//!
//! `>` is the only relational operator and `+` the only additive one. The
//! parenthesized suffix of `variable` covers both grouping and call/index
//! syntax; the grammar does not tell them apart.

use super::checker::GrammarChecker;
use crate::diagnostics::DiagnosticKind;
use crate::scanner::token::TokenClass;

impl GrammarChecker<'_, '_> {
    pub(crate) fn expression(&mut self) {
        self.simple_expression();
        if self.match_symbol(">") {
            self.simple_expression();
        }
    }

    fn simple_expression(&mut self) {
        self.term();
        while self.match_symbol("+") {
            self.term();
        }
    }

    fn term(&mut self) {
        self.factor();
    }

    fn factor(&mut self) {
        match self.lookahead().class {
            TokenClass::Integer | TokenClass::StringLiteral => self.advance(),
            _ => self.variable(),
        }
    }

    /// The lookahead is consumed even when it is not an identifier.
    fn variable(&mut self) {
        let class = self.lookahead().class;
        if class != TokenClass::Identifier {
            self.error(DiagnosticKind::IdentifierExpected { found: class });
        }
        self.advance();

        if self.match_symbol("(") {
            self.expression();
            if !self.check_symbol(")") {
                let found = self.lookahead().to_string();
                self.error(DiagnosticKind::ExpectedClosingParen { found });
            }
            self.advance();
        }
    }
}
