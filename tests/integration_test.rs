// Integration tests for the scanner and grammar checker

use pasclex::scanner::{class_name, lookup_reserved, reserved_symbols, Scanner, TokenClass};
use pasclex::{Analyzer, CollectingSink, GrammarChecker, LogSink};

fn analyze(source: &str) -> Vec<String> {
    let mut analyzer = Analyzer::new();
    let mut sink = CollectingSink::new();
    analyzer.analyze(source, &mut sink);
    sink.messages()
}

#[test]
fn test_well_formed_program() {
    assert!(analyze("if x > 1 then y + 2").is_empty());
}

#[test]
fn test_multiline_program() {
    let source = r#"
        if count(items) + 1 > limit
        then
            report('too many', count(items))
    "#;

    // `,` is not part of the expression grammar
    let messages = analyze(source);
    assert_eq!(messages, vec!["Expected closing ')' but got ','".to_string()]);
}

#[test]
fn test_missing_if_reports_once() {
    let messages = analyze("x > 1 then y");
    assert_eq!(messages.len(), 1);
    assert!(messages[0].starts_with("Expected 'if'"));
}

#[test]
fn test_errors_do_not_stop_checking() {
    let messages = analyze("then then");
    assert_eq!(
        messages,
        vec![
            "Expected 'if' but got 'then'".to_string(),
            "Identifier expected but got DELIM".to_string(),
            "Identifier expected but got EOF".to_string(),
        ]
    );
}

#[test]
fn test_check_is_repeatable() {
    let mut scanner = Scanner::new();
    let mut lex_sink = CollectingSink::new();
    let tokens = scanner.tokenize("x then (", &mut lex_sink);
    assert!(lex_sink.is_empty());

    let mut first = CollectingSink::new();
    let mut second = CollectingSink::new();
    GrammarChecker::check(&tokens, &mut first);
    GrammarChecker::check(&tokens, &mut second);

    assert!(!first.is_empty());
    assert_eq!(first.diagnostics, second.diagnostics);
}

#[test]
fn test_diagnostic_locations() {
    let mut analyzer = Analyzer::new();
    let mut sink = CollectingSink::new();
    analyzer.analyze("if x\n  y", &mut sink);

    assert_eq!(sink.len(), 1);
    assert_eq!(
        sink.diagnostics[0].to_string(),
        "Syntax error at line 2, column 3: Expected 'then' but got 'y'"
    );
}

#[test]
fn test_end_of_input_location_follows_last_token() {
    let mut analyzer = Analyzer::new();
    let mut sink = CollectingSink::new();
    analyzer.analyze("if 'ab'", &mut sink);

    let diag = &sink.diagnostics[0];
    assert_eq!(diag.message(), "Expected 'then' but got end of input");
    assert_eq!((diag.location.line, diag.location.column), (1, 8));
}

#[test]
fn test_literal_tables_grow_across_analyses() {
    let mut analyzer = Analyzer::new();
    let mut sink = CollectingSink::new();

    analyzer.analyze("if a > 'x' then 1", &mut sink);
    analyzer.analyze("if b > 'x' then 2 + 1", &mut sink);

    assert!(sink.is_empty());
    let scanner = analyzer.scanner();
    assert_eq!(scanner.identifiers().entries(), ["a", "b"]);
    assert_eq!(scanner.strings().entries(), ["x"]);
    assert_eq!(scanner.integers().entries(), ["1", "2"]);

    // Only the latest tokenization is kept
    assert_eq!(scanner.tokens().len(), 8);
    assert_eq!(scanner.tokens()[7].index, Some(0));
}

#[test]
fn test_reserved_table_inspection() {
    let table = reserved_symbols();
    assert_eq!(table.len(), 23);
    assert_eq!(table[0].text, "procedure");
    assert!(!table[0].is_delimiter);

    let keywords = ["procedure", "var", "begin", "if", "then", "else", "end", "real", "string", "do"];
    for keyword in keywords {
        let index = lookup_reserved(&keyword.to_uppercase()).unwrap();
        assert_eq!(table[index].text, keyword);
    }
}

#[test]
fn test_every_reserved_symbol_scans_to_its_own_index() {
    let mut scanner = Scanner::new();
    let mut sink = CollectingSink::new();

    for (position, symbol) in reserved_symbols().iter().enumerate() {
        let tokens = scanner.tokenize(symbol.text, &mut sink);
        assert_eq!(tokens.len(), 1, "symbol {}", symbol.text);
        assert_eq!(tokens[0].class, TokenClass::Delimiter);
        assert_eq!(tokens[0].index, Some(position));
    }
    assert!(sink.is_empty());
}

#[test]
fn test_class_name_lookup() {
    assert_eq!(class_name(TokenClass::Identifier.id()), Some("ID"));
    assert_eq!(class_name(TokenClass::Delimiter.id()), Some("DELIM"));
    assert_eq!(class_name(200), None);
}

#[test]
fn test_log_sink_runs_to_completion() {
    let mut analyzer = Analyzer::new();
    let mut sink = LogSink;
    analyzer.analyze("? if 'open", &mut sink);

    assert_eq!(analyzer.scanner().tokens().len(), 1);
}
