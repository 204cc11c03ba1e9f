#![allow(dead_code)]

use std::collections::BTreeSet;

use cfg_ll::{Grammar, GrammarRule, Symbol};

pub const EXPRESSION: &str = "E -> T E'\nE' -> + T E' | ε\nT -> id";

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn expression_grammar() -> Grammar {
    init_logger();
    Grammar::load(EXPRESSION).expect("expression grammar must load")
}

pub fn sym(grammar: &Grammar, name: &str) -> Symbol {
    grammar
        .sym(name)
        .unwrap_or_else(|| panic!("no symbol named `{}`", name))
}

/// Names of set members, sorted. `None` is written as `none`.
pub fn names(
    grammar: &Grammar,
    set: Option<&BTreeSet<Option<Symbol>>>,
    none: &str,
) -> Vec<String> {
    let mut result: Vec<String> = set
        .expect("set must exist")
        .iter()
        .map(|maybe_sym| match maybe_sym {
            Some(sym) => grammar.name(*sym).unwrap().to_owned(),
            None => none.to_owned(),
        })
        .collect();
    result.sort();
    result
}

/// Right-hand sides of all alternatives of `lhs`, as names.
pub fn alternatives(grammar: &Grammar, lhs: &str) -> Vec<Vec<String>> {
    grammar
        .productions(sym(grammar, lhs))
        .map(|(_, rule)| {
            rule.rhs()
                .iter()
                .map(|&sym| grammar.name(sym).unwrap().to_owned())
                .collect()
        })
        .collect()
}
