//! LL(1) analysis of context-free grammars and table-driven predictive parsing.
//!
//! A grammar is loaded from text or built with the rule builder. From it we compute FIRST and
//! FOLLOW sets, build an LL(1) parse table, and parse token sequences with a stack automaton:
//!
//! ```
//! use cfg_ll::{Grammar, LlParseTable, PredictiveParser};
//!
//! let grammar = Grammar::load("E -> T E'\nE' -> + T E' | ε\nT -> id").unwrap();
//! let table = LlParseTable::new(&grammar);
//! assert!(table.is_ll1());
//! let trace = PredictiveParser::new(&table).parse(["id", "+", "id"]).unwrap();
//! assert_eq!(trace.lines()[0], "E -> T E'");
//! ```

#![deny(
    missing_docs,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unused_import_braces
)]

pub mod classification;
pub mod error;
mod grammar;
mod load;
pub mod parser;
pub mod prediction;
pub mod rule;
pub mod symbol;

pub use crate::classification::{
    LlClassification, LlNonterminalClass, LlParseTable, TableConflict,
};
pub use crate::error::{FormatError, FormatErrorKind, SyntaxError, SyntaxErrorKind};
pub use crate::grammar::{
    is_epsilon, DisplayRule, Grammar, END_MARKER, EPSILON, EPSILON_ALIASES,
};
pub use crate::parser::{ParseOptions, PredictiveParser, Step, Trace};
pub use crate::prediction::{FirstSets, FollowSets, PerSymbolSets};
pub use crate::rule::builder::{GrammarBuilder, RuleBuilder};
pub use crate::rule::{GrammarRule, Rule, RuleId};
pub use crate::symbol::{Symbol, SymbolBitSet, SymbolSource, TerminalSymbolSet};
