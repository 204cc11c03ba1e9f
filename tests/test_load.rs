mod support;

use cfg_ll::{FormatError, FormatErrorKind, Grammar, GrammarRule, TerminalSymbolSet};
use test_case::test_case;

#[test]
fn test_load_expression() {
    let grammar = support::expression_grammar();
    assert_eq!(grammar.rules().len(), 4);
    assert_eq!(grammar.start_sym(), support::sym(&grammar, "E"));
    let nonterminals: Vec<_> = grammar
        .nonterminals()
        .map(|sym| grammar.name(sym).unwrap())
        .collect();
    assert_eq!(nonterminals, &["E", "E'", "T"]);
    assert_eq!(support::alternatives(&grammar, "E'"), vec![vec!["+", "T", "E'"], vec![]]);
    assert!(grammar.is_terminal_name("id"));
    assert!(grammar.is_terminal_name("+"));
    assert!(grammar.is_terminal_name("unseen"));
    assert!(!grammar.is_terminal_name("E'"));
    assert!(grammar.is_nonterminal(support::sym(&grammar, "T")));
    assert!(!grammar.is_nonterminal(support::sym(&grammar, "id")));
}

#[test]
fn test_load_unicode_arrow_and_crlf() {
    let grammar = Grammar::load("E → T E'\r\nE' → + T E' | ϵ\r\n\r\nT → id\r\n").unwrap();
    assert_eq!(
        grammar.stringify_to_bnf(),
        "E -> T E'\nE' -> + T E' | ε\nT -> id\n"
    );
}

#[test]
fn test_epsilon_spellings_are_one_production() {
    let grammar = Grammar::load("S -> a | ε\nA -> ϵ").unwrap();
    let s = support::sym(&grammar, "S");
    let a = support::sym(&grammar, "A");
    let rhs: Vec<_> = grammar
        .productions(s)
        .chain(grammar.productions(a))
        .map(|(_, rule)| rule.rhs.len())
        .collect();
    assert_eq!(rhs, &[1, 0, 0]);
    let epsilon: Vec<_> = grammar.rules().map(|rule| rule.is_epsilon()).collect();
    assert_eq!(epsilon, &[false, true, true]);
    assert!(grammar.sym("ε").is_none());
    assert!(grammar.sym("ϵ").is_none());
}

#[test]
fn test_repeated_lhs_appends() {
    let grammar = Grammar::load("S -> a\nT -> b\nS -> c").unwrap();
    assert_eq!(grammar.start_sym(), support::sym(&grammar, "S"));
    assert_eq!(support::alternatives(&grammar, "S"), vec![vec!["a"], vec!["c"]]);
    assert_eq!(grammar.stringify_to_bnf(), "S -> a | c\nT -> b\n");
}

#[test_case("T E'", &["T", "E'"] ; "whitespace")]
#[test_case("+ T E'", &["+", "T", "E'"] ; "leading operator")]
#[test_case("id*id", &["id", "*", "id"] ; "operator without spaces")]
#[test_case("(E)", &["(", "E", ")"] ; "parentheses")]
#[test_case("TE'", &["T", "E'"] ; "uppercase starts symbol")]
#[test_case("ExprList", &["Expr", "List"] ; "legacy uppercase split")]
#[test_case("id   +   id", &["id", "+", "id"] ; "runs of whitespace")]
#[test_case("a ε b", &["a", "b"] ; "epsilon inside sequence")]
#[test_case("ε", &[] ; "epsilon alone")]
fn test_split_alternative(alternative: &str, expected: &[&str]) {
    let grammar = Grammar::load(&format!("S -> {}", alternative)).unwrap();
    assert_eq!(support::alternatives(&grammar, "S"), vec![expected.to_vec()]);
}

#[test_case("E -> T\nT id", FormatErrorKind::MissingSeparator, 2 ; "missing separator")]
#[test_case("E ->   ", FormatErrorKind::MissingAlternatives, 1 ; "missing alternatives")]
#[test_case("E -> a | | b", FormatErrorKind::EmptyAlternative, 1 ; "empty alternative")]
#[test_case("\n -> a", FormatErrorKind::InvalidLhs(String::new()), 2 ; "empty lhs")]
#[test_case("A B -> a", FormatErrorKind::InvalidLhs("A B".to_owned()), 1 ; "two symbols on lhs")]
#[test_case("ε -> a", FormatErrorKind::InvalidLhs("ε".to_owned()), 1 ; "epsilon lhs")]
fn test_format_errors(text: &str, kind: FormatErrorKind, line: u32) {
    let expected = FormatError {
        kind,
        line: Some(line),
    };
    assert_eq!(Grammar::load(text).unwrap_err(), expected);
}

#[test]
fn test_empty_grammar() {
    let error = Grammar::load("\n   \n").unwrap_err();
    assert_eq!(error.kind, FormatErrorKind::EmptyGrammar);
    assert_eq!(error.line, None);
    assert!(Grammar::builder().build().is_err());
}

#[test]
fn test_format_error_display() {
    let error = Grammar::load("S -> a\nS a").unwrap_err();
    assert_eq!(
        error.to_string(),
        "grammar format error at line 2: missing production separator"
    );
}

#[test]
fn test_builder_matches_loader() {
    let built = Grammar::builder()
        .rule("E")
        .rhs(["T", "E'"])
        .rule("E'")
        .rhs(["+", "T", "E'"])
        .rhs(["ε"])
        .rule("T")
        .rhs(["id"])
        .build()
        .unwrap();
    let loaded = support::expression_grammar();
    assert_eq!(built.stringify_to_bnf(), loaded.stringify_to_bnf());
    assert_eq!(built.rules().collect::<Vec<_>>(), loaded.rules().collect::<Vec<_>>());
}
