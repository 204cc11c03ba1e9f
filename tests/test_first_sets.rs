mod support;

use cfg_ll::{FirstSets, Grammar};

fn nullable_prefix_grammar() -> Grammar {
    Grammar::builder()
        .rule("start")
        .rhs(["a", "x", "b"])
        .rhs(["c"])
        .rule("b")
        .rhs(["a", "a"])
        .rhs(["a", "c"])
        .rule("c")
        .rhs(["x"])
        .rhs(["y"])
        .rule("a")
        .rhs(["ε"])
        .build()
        .unwrap()
}

#[test]
fn test_simple_first_sets() {
    support::init_logger();
    let grammar = nullable_prefix_grammar();
    let first = FirstSets::new(&grammar);
    let set = |name| support::names(&grammar, first.get(support::sym(&grammar, name)), "ε");

    assert_eq!(set("start"), &["x", "y"]);
    assert_eq!(set("a"), &["ε"]);
    assert_eq!(set("b"), &["x", "y", "ε"]);
    assert_eq!(set("c"), &["x", "y"]);
    assert_eq!(first.first_sets().len(), 4);
}

#[test]
fn test_expression_first_sets() {
    let grammar = support::expression_grammar();
    let first = FirstSets::new(&grammar);
    let set = |name| support::names(&grammar, first.get(support::sym(&grammar, name)), "ε");

    assert_eq!(set("E"), &["id"]);
    assert_eq!(set("E'"), &["+", "ε"]);
    assert_eq!(set("T"), &["id"]);
    assert!(first.is_nullable(support::sym(&grammar, "E'")));
    assert!(!first.is_nullable(support::sym(&grammar, "E")));
}

#[test]
fn test_nullable_chain() {
    support::init_logger();
    let grammar = Grammar::load("S -> A B C\nA -> a | ε\nB -> b | ε\nC -> ε").unwrap();
    let first = FirstSets::new(&grammar);
    let set = |name| support::names(&grammar, first.get(support::sym(&grammar, name)), "ε");

    assert_eq!(set("S"), &["a", "b", "ε"]);
    assert_eq!(set("C"), &["ε"]);
}

#[test]
fn test_nonterminal_declared_later() {
    support::init_logger();
    // S refers to A before A is declared, and A needs a second pass to become nullable.
    let grammar = Grammar::load("S -> A x | B\nB -> A\nA -> ε").unwrap();
    let first = FirstSets::new(&grammar);
    let set = |name| support::names(&grammar, first.get(support::sym(&grammar, name)), "ε");

    assert_eq!(set("S"), &["x", "ε"]);
    assert_eq!(set("B"), &["ε"]);
}

#[test]
fn test_first_set_for_string() {
    let grammar = support::expression_grammar();
    let first = FirstSets::new(&grammar);
    let e_prime = support::sym(&grammar, "E'");
    let t = support::sym(&grammar, "T");
    let plus = support::sym(&grammar, "+");

    let set = first.first_set_for_string(&grammar, &[e_prime, t]);
    assert_eq!(support::names(&grammar, Some(&set), "ε"), &["+", "id"]);
    let set = first.first_set_for_string(&grammar, &[e_prime, e_prime]);
    assert_eq!(support::names(&grammar, Some(&set), "ε"), &["+", "ε"]);
    let set = first.first_set_for_string(&grammar, &[plus, t]);
    assert_eq!(support::names(&grammar, Some(&set), "ε"), &["+"]);
    let set = first.first_set_for_string(&grammar, &[]);
    assert_eq!(support::names(&grammar, Some(&set), "ε"), &["ε"]);
}

#[test]
fn test_pass_is_idempotent() {
    for text in &[support::EXPRESSION, "S -> A B C\nA -> a | ε\nB -> b | ε\nC -> ε"] {
        let grammar = Grammar::load(text).unwrap();
        let first = FirstSets::new(&grammar);
        assert_eq!(first.pass(&grammar), first);
    }
}

#[test]
fn test_left_recursive_first_sets_terminate() {
    let grammar = Grammar::load("E -> E + T | T\nT -> ( E ) | id").unwrap();
    let first = FirstSets::new(&grammar);
    let set = |name| support::names(&grammar, first.get(support::sym(&grammar, name)), "ε");

    assert_eq!(set("E"), &["(", "id"]);
    assert_eq!(set("T"), &["(", "id"]);
}
