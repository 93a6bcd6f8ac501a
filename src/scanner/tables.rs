//! Symbol tables
//!
//! - the static reserved-symbol table of keywords and punctuation
//! - [`LiteralTable`], one per literal class, assigning dense ids in
//!   first-seen order

use crate::constants::RESERVED_SYMBOLS;
use rustc_hash::FxHashMap;

/// One entry of the reserved-symbol table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReservedSymbol {
    /// Index as declared in the table (not unique)
    pub index: usize,
    pub text: &'static str,
    /// `true` for punctuation and operators, `false` for keywords
    pub is_delimiter: bool,
}

impl ReservedSymbol {
    pub const fn keyword(index: usize, text: &'static str) -> Self {
        Self {
            index,
            text,
            is_delimiter: false,
        }
    }

    pub const fn delimiter(index: usize, text: &'static str) -> Self {
        Self {
            index,
            text,
            is_delimiter: true,
        }
    }

    pub fn is_multi_char(&self) -> bool {
        self.text.chars().count() > 1
    }
}

/// The full reserved-symbol table in declaration order.
pub fn reserved_symbols() -> &'static [ReservedSymbol] {
    RESERVED_SYMBOLS
}

/// Position of the first reserved symbol matching `text`, ignoring ASCII case.
pub fn lookup_reserved(text: &str) -> Option<usize> {
    RESERVED_SYMBOLS
        .iter()
        .position(|symbol| symbol.text.eq_ignore_ascii_case(text))
}

/// Append-only table of distinct literal texts.
///
/// Ids are dense and assigned in insertion order; inserting a text that is
/// already present returns its existing id.
#[derive(Debug, Clone, Default)]
pub struct LiteralTable {
    entries: Vec<String>,
    ids: FxHashMap<String, usize>,
}

impl LiteralTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `text` if unseen and return its id.
    pub fn intern(&mut self, text: &str) -> usize {
        if let Some(&id) = self.ids.get(text) {
            return id;
        }
        let id = self.entries.len();
        self.entries.push(text.to_string());
        self.ids.insert(text.to_string(), id);
        id
    }

    pub fn id_of(&self, text: &str) -> Option<usize> {
        self.ids.get(text).copied()
    }

    pub fn get(&self, id: usize) -> Option<&str> {
        self.entries.get(id).map(String::as_str)
    }

    /// All entries, indexed by id
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_is_case_insensitive() {
        let lower = lookup_reserved("procedure");
        assert!(lower.is_some());
        assert_eq!(lookup_reserved("PROCEDURE"), lower);
        assert_eq!(lookup_reserved("ProCeDure"), lower);
    }

    #[test]
    fn test_lookup_returns_position_not_declared_index() {
        // `:=` is declared with index 13 but sits after `else` (also 13)
        let assign = lookup_reserved(":=").unwrap();
        let else_kw = lookup_reserved("else").unwrap();
        assert_eq!(else_kw + 1, assign);
        assert_eq!(reserved_symbols()[assign].index, reserved_symbols()[else_kw].index);
    }

    #[test]
    fn test_lookup_miss() {
        assert_eq!(lookup_reserved("<="), None);
        assert_eq!(lookup_reserved("-"), None);
        assert_eq!(lookup_reserved("while"), None);
        assert_eq!(lookup_reserved(""), None);
    }

    #[test]
    fn test_multi_char_entries() {
        let multi: Vec<&str> = reserved_symbols()
            .iter()
            .filter(|s| s.is_delimiter && s.is_multi_char())
            .map(|s| s.text)
            .collect();
        assert_eq!(multi, vec![":=", "<>"]);
    }

    #[test]
    fn test_literal_table_first_seen_wins() {
        let mut table = LiteralTable::new();
        assert_eq!(table.intern("x"), 0);
        assert_eq!(table.intern("y"), 1);
        assert_eq!(table.intern("x"), 0);
        assert_eq!(table.len(), 2);
        assert_eq!(table.get(1), Some("y"));
        assert_eq!(table.id_of("z"), None);
        assert_eq!(table.entries(), &["x".to_string(), "y".to_string()]);
    }
}
