// Fixed language data for the toy-Pascal scanner

use crate::scanner::tables::ReservedSymbol;

/// Characters that may start or continue a delimiter.
///
/// `-` belongs to the class but has no reserved entry, so it is always
/// reported as unrecognized.
pub const DELIMITER_CHARS: &[char] = &['+', '-', '(', ')', '[', ']', '=', ';', ':', '<', '>', ','];

/// Opens and closes a string literal
pub const QUOTE: char = '\'';

/// Keywords and punctuation recognized as grammar terminals.
///
/// Order matters: lookup returns the first entry whose text matches, and
/// tokens carry the entry's position in this slice. The declared `index`
/// values are kept as written, including the one shared by `else` and `:=`.
pub const RESERVED_SYMBOLS: &[ReservedSymbol] = &[
    ReservedSymbol::keyword(1, "procedure"),
    ReservedSymbol::delimiter(2, "("),
    ReservedSymbol::delimiter(3, ")"),
    ReservedSymbol::delimiter(4, ":"),
    ReservedSymbol::delimiter(5, ";"),
    ReservedSymbol::keyword(6, "var"),
    ReservedSymbol::delimiter(7, "["),
    ReservedSymbol::delimiter(8, "]"),
    ReservedSymbol::keyword(9, "begin"),
    ReservedSymbol::delimiter(10, ","),
    ReservedSymbol::keyword(11, "if"),
    ReservedSymbol::keyword(12, "then"),
    ReservedSymbol::keyword(13, "else"),
    ReservedSymbol::delimiter(13, ":="),
    ReservedSymbol::delimiter(14, ">"),
    ReservedSymbol::delimiter(15, "<"),
    ReservedSymbol::delimiter(16, "<>"),
    ReservedSymbol::keyword(17, "end"),
    ReservedSymbol::keyword(18, "real"),
    ReservedSymbol::keyword(19, "string"),
    ReservedSymbol::keyword(20, "do"),
    ReservedSymbol::delimiter(21, "="),
    ReservedSymbol::delimiter(22, "+"),
];
