//! Token definitions shared by the scanner and the grammar checker
//!
//! A [`Token`] is a plain record rather than one enum variant per symbol:
//! keywords and punctuation are identified by their position in the
//! reserved-symbol table, literals by their id in the per-class literal
//! table.

use std::fmt;

/// Source location information for diagnostics
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceLocation {
    pub line: usize,
    pub column: usize,
}

impl SourceLocation {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }

    /// Location reached after reading `text` starting from this one.
    pub fn advanced_by(self, text: &str) -> Self {
        text.chars().fold(self, |loc, ch| {
            if ch == '\n' {
                SourceLocation::new(loc.line + 1, 1)
            } else {
                SourceLocation::new(loc.line, loc.column + 1)
            }
        })
    }
}

impl Default for SourceLocation {
    fn default() -> Self {
        Self::new(1, 1)
    }
}

/// Lexical class of a token.
///
/// Keywords are lexically identifiers but share the reserved-symbol table
/// with punctuation, so both come out as [`TokenClass::Delimiter`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenClass {
    /// Synthetic class of the end marker; never produced by the scanner
    EndOfInput,
    Integer,
    StringLiteral,
    Identifier,
    Delimiter,
}

impl TokenClass {
    /// Numeric class id
    pub fn id(self) -> u8 {
        match self {
            TokenClass::EndOfInput => 0,
            TokenClass::Integer => 1,
            TokenClass::StringLiteral => 2,
            TokenClass::Identifier => 3,
            TokenClass::Delimiter => 4,
        }
    }

    pub fn from_id(id: u8) -> Option<Self> {
        match id {
            0 => Some(TokenClass::EndOfInput),
            1 => Some(TokenClass::Integer),
            2 => Some(TokenClass::StringLiteral),
            3 => Some(TokenClass::Identifier),
            4 => Some(TokenClass::Delimiter),
            _ => None,
        }
    }

    /// Short display name used in diagnostics
    pub fn name(self) -> &'static str {
        match self {
            TokenClass::EndOfInput => "EOF",
            TokenClass::Integer => "INT",
            TokenClass::StringLiteral => "STR",
            TokenClass::Identifier => "ID",
            TokenClass::Delimiter => "DELIM",
        }
    }
}

impl fmt::Display for TokenClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Look up a class name from its numeric id.
pub fn class_name(id: u8) -> Option<&'static str> {
    TokenClass::from_id(id).map(TokenClass::name)
}

/// A classified lexeme.
///
/// `index` points into the reserved-symbol table for delimiters and into
/// the literal table of `class` otherwise. Only the end marker has none.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub class: TokenClass,
    pub text: String,
    pub index: Option<usize>,
    pub location: SourceLocation,
}

impl Token {
    pub fn new(class: TokenClass, text: String, index: usize, location: SourceLocation) -> Self {
        Self {
            class,
            text,
            index: Some(index),
            location,
        }
    }

    /// The marker a parse cursor yields once its tokens are exhausted.
    pub fn end_marker(location: SourceLocation) -> Self {
        Self {
            class: TokenClass::EndOfInput,
            text: String::new(),
            index: None,
            location,
        }
    }

    pub fn is_end_marker(&self) -> bool {
        self.class == TokenClass::EndOfInput
    }

    /// Whether this is the reserved symbol `symbol`, ignoring ASCII case.
    pub fn is_reserved(&self, symbol: &str) -> bool {
        self.class == TokenClass::Delimiter && self.text.eq_ignore_ascii_case(symbol)
    }

    /// Location just past the last source character of this token.
    pub fn end_location(&self) -> SourceLocation {
        match self.class {
            // Quotes are not part of the text
            TokenClass::StringLiteral => self
                .location
                .advanced_by("'")
                .advanced_by(&self.text)
                .advanced_by("'"),
            _ => self.location.advanced_by(&self.text),
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.class {
            TokenClass::EndOfInput => write!(f, "end of input"),
            TokenClass::StringLiteral => write!(f, "string literal '{}'", self.text),
            _ => write!(f, "'{}'", self.text),
        }
    }
}
