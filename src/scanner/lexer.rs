//! Scanner for toy-Pascal source
//!
//! Converts raw source text into a flat [`Token`] stream. At every
//! non-blank position the recognizers run in a fixed order: integer, string,
//! identifier/keyword, multi-character delimiter, single-character
//! delimiter. When nothing matches, the offending character is reported and
//! skipped, so scanning always reaches the end of the input.

use super::tables::{lookup_reserved, LiteralTable, ReservedSymbol};
use super::token::{SourceLocation, Token, TokenClass};
use crate::constants::{DELIMITER_CHARS, QUOTE};
use crate::diagnostics::{Diagnostic, DiagnosticKind, DiagnosticSink};

fn is_digit(ch: char) -> bool {
    ch.is_ascii_digit()
}

fn is_word(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || ch == '_'
}

fn is_delimiter(ch: char) -> bool {
    DELIMITER_CHARS.contains(&ch)
}

/// Saved cursor state for one token of backtracking
#[derive(Debug, Clone, Copy)]
struct Checkpoint {
    position: usize,
    location: SourceLocation,
}

/// Scanner-internal read position plus the lexeme under construction
#[derive(Debug)]
struct ScanCursor {
    input: Vec<char>,
    position: usize,
    location: SourceLocation,
    lexeme: String,
    checkpoint: Option<Checkpoint>,
}

impl ScanCursor {
    fn new(source: &str) -> Self {
        Self {
            input: source.chars().collect(),
            position: 0,
            location: SourceLocation::default(),
            lexeme: String::new(),
            checkpoint: None,
        }
    }

    /// Current character without consuming it
    fn peek(&self) -> Option<char> {
        self.input.get(self.position).copied()
    }

    fn peek_is(&self, class: fn(char) -> bool) -> bool {
        self.peek().is_some_and(class)
    }

    fn advance(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.position += 1;
        if ch == '\n' {
            self.location.line += 1;
            self.location.column = 1;
        } else {
            self.location.column += 1;
        }
        Some(ch)
    }

    /// Consume the current character into the lexeme
    fn take(&mut self) {
        if let Some(ch) = self.advance() {
            self.lexeme.push(ch);
        }
    }

    fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(char::is_whitespace) {
            self.advance();
        }
    }

    fn is_at_end(&self) -> bool {
        self.position >= self.input.len()
    }

    fn begin_lexeme(&mut self) {
        self.lexeme.clear();
        self.checkpoint = None;
    }

    fn save(&mut self) {
        self.checkpoint = Some(Checkpoint {
            position: self.position,
            location: self.location,
        });
    }

    /// Rewind to the saved checkpoint and drop the partial lexeme.
    fn restore(&mut self) {
        if let Some(checkpoint) = self.checkpoint.take() {
            self.position = checkpoint.position;
            self.location = checkpoint.location;
        }
        self.lexeme.clear();
    }
}

/// Tokenizer owning the per-class literal tables.
///
/// The literal tables persist across [`Scanner::tokenize`] calls on the
/// same instance: ids keep growing and are never reset. The token list
/// only holds the result of the latest call.
#[derive(Debug, Default)]
pub struct Scanner {
    tokens: Vec<Token>,
    integers: LiteralTable,
    strings: LiteralTable,
    identifiers: LiteralTable,
}

impl Scanner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tokenize the entire source, reporting lexical faults to `sink`.
    pub fn tokenize(&mut self, source: &str, sink: &mut dyn DiagnosticSink) -> Vec<Token> {
        let mut cursor = ScanCursor::new(source);
        let mut tokens = Vec::new();

        loop {
            cursor.skip_whitespace();
            if cursor.is_at_end() {
                break;
            }

            cursor.begin_lexeme();
            if let Some(token) = self.next_token(&mut cursor, sink) {
                tracing::trace!(
                    "found symbol {:?} for class {} with index {:?}",
                    token.text,
                    token.class,
                    token.index
                );
                tokens.push(token);
            }
        }

        self.tokens = tokens.clone();
        tokens
    }

    /// Tokens produced by the latest [`Scanner::tokenize`] call
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn reserved_symbols(&self) -> &'static [ReservedSymbol] {
        super::tables::reserved_symbols()
    }

    /// Literal table for `class`; delimiters and the end marker have none.
    pub fn literals(&self, class: TokenClass) -> Option<&LiteralTable> {
        match class {
            TokenClass::Integer => Some(&self.integers),
            TokenClass::StringLiteral => Some(&self.strings),
            TokenClass::Identifier => Some(&self.identifiers),
            TokenClass::Delimiter | TokenClass::EndOfInput => None,
        }
    }

    pub fn integers(&self) -> &LiteralTable {
        &self.integers
    }

    pub fn strings(&self) -> &LiteralTable {
        &self.strings
    }

    pub fn identifiers(&self) -> &LiteralTable {
        &self.identifiers
    }

    /// Run the recognizers in priority order at the current position.
    ///
    /// Returns `None` when no token was produced; the cursor has then either
    /// skipped one unrecognized character or reached the end of input.
    fn next_token(
        &mut self,
        cursor: &mut ScanCursor,
        sink: &mut dyn DiagnosticSink,
    ) -> Option<Token> {
        let start = cursor.location;

        if let Some(token) = self.integer_literal(cursor, start) {
            return Some(token);
        }
        if let Some(token) = self.string_literal(cursor, start, sink) {
            return Some(token);
        }
        if let Some(token) = self.identifier_or_keyword(cursor, start) {
            return Some(token);
        }
        if let Some(token) = multi_char_delimiter(cursor, start) {
            return Some(token);
        }
        if let Some(token) = single_char_delimiter(cursor, start) {
            return Some(token);
        }

        if let Some(ch) = cursor.advance() {
            sink.report(Diagnostic::new(
                DiagnosticKind::UnrecognizedCharacter { ch },
                start,
            ));
        }
        None
    }

    fn literal_token(&mut self, class: TokenClass, text: &str, start: SourceLocation) -> Token {
        let table = match class {
            TokenClass::Integer => &mut self.integers,
            TokenClass::StringLiteral => &mut self.strings,
            _ => &mut self.identifiers,
        };
        let index = table.intern(text);
        Token::new(class, text.to_string(), index, start)
    }

    fn integer_literal(&mut self, cursor: &mut ScanCursor, start: SourceLocation) -> Option<Token> {
        if !cursor.peek_is(is_digit) {
            return None;
        }
        while cursor.peek_is(is_digit) {
            cursor.take();
        }
        let text = std::mem::take(&mut cursor.lexeme);
        Some(self.literal_token(TokenClass::Integer, &text, start))
    }

    /// Quoted text up to the next quote; no escapes, no nesting
    fn string_literal(
        &mut self,
        cursor: &mut ScanCursor,
        start: SourceLocation,
        sink: &mut dyn DiagnosticSink,
    ) -> Option<Token> {
        if cursor.peek() != Some(QUOTE) {
            return None;
        }
        cursor.advance(); // opening quote

        while cursor.peek().is_some_and(|ch| ch != QUOTE) {
            cursor.take();
        }

        if cursor.peek() == Some(QUOTE) {
            cursor.advance(); // closing quote
            let text = std::mem::take(&mut cursor.lexeme);
            Some(self.literal_token(TokenClass::StringLiteral, &text, start))
        } else {
            // The cursor stays at the end of input
            sink.report(Diagnostic::new(DiagnosticKind::UnterminatedString, start));
            cursor.lexeme.clear();
            None
        }
    }

    fn identifier_or_keyword(
        &mut self,
        cursor: &mut ScanCursor,
        start: SourceLocation,
    ) -> Option<Token> {
        if !cursor.peek_is(is_word) {
            return None;
        }
        while cursor.peek_is(is_word) {
            cursor.take();
        }

        let text = std::mem::take(&mut cursor.lexeme);
        let token = match lookup_reserved(&text) {
            Some(index) => Token::new(TokenClass::Delimiter, text, index, start),
            None => self.literal_token(TokenClass::Identifier, &text, start),
        };
        Some(token)
    }
}

/// Longest run of delimiter characters, if the whole run is reserved.
///
/// Runs shorter than two characters, and runs with no reserved entry, are
/// rolled back so the single-character recognizer can retry.
fn multi_char_delimiter(cursor: &mut ScanCursor, start: SourceLocation) -> Option<Token> {
    if !cursor.peek_is(is_delimiter) {
        return None;
    }

    cursor.save();
    while cursor.peek_is(is_delimiter) {
        cursor.take();
    }

    if cursor.lexeme.chars().count() >= 2 {
        if let Some(index) = lookup_reserved(&cursor.lexeme) {
            let text = std::mem::take(&mut cursor.lexeme);
            return Some(Token::new(TokenClass::Delimiter, text, index, start));
        }
    }

    cursor.restore();
    None
}

fn single_char_delimiter(cursor: &mut ScanCursor, start: SourceLocation) -> Option<Token> {
    let ch = cursor.peek().filter(|&ch| is_delimiter(ch))?;
    let mut buf = [0; 4];
    let index = lookup_reserved(ch.encode_utf8(&mut buf))?;

    cursor.take();
    let text = std::mem::take(&mut cursor.lexeme);
    Some(Token::new(TokenClass::Delimiter, text, index, start))
}
