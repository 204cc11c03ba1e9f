//! Grammar rules can be built with the builder pattern.

use indexmap::IndexSet;

use crate::error::{FormatError, FormatErrorKind};
use crate::grammar::{is_epsilon, Grammar};
use crate::rule::Rule;
use crate::symbol::{Symbol, SymbolSource};

/// The grammar builder. Call `rule` to start declaring alternatives of a nonterminal.
#[derive(Clone, Debug, Default)]
pub struct GrammarBuilder {
    sym_source: SymbolSource,
    nonterminals: IndexSet<Symbol>,
    rules: Vec<Rule>,
}

/// The rule builder, obtained from `GrammarBuilder::rule`.
#[derive(Clone, Debug)]
pub struct RuleBuilder {
    lhs: Symbol,
    grammar: GrammarBuilder,
}

impl GrammarBuilder {
    /// Creates a grammar builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts building a new rule with the given LHS. The first LHS ever declared becomes the
    /// start symbol. Declaring the same LHS again appends to its alternatives.
    pub fn rule(mut self, lhs: &str) -> RuleBuilder {
        let lhs = self.declare(lhs);
        RuleBuilder { lhs, grammar: self }
    }

    pub(crate) fn add_rule<I, S>(&mut self, lhs: Symbol, syms: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let rhs = syms
            .into_iter()
            .filter(|name| !is_epsilon(name.as_ref()))
            .map(|name| self.sym_source.sym(name.as_ref()))
            .collect();
        self.rules.push(Rule::new(lhs, rhs));
    }

    pub(crate) fn declare(&mut self, lhs: &str) -> Symbol {
        let lhs = self.sym_source.sym(lhs);
        self.nonterminals.insert(lhs);
        lhs
    }

    /// Finishes the grammar. Fails if no nonterminal was declared.
    pub fn build(self) -> Result<Grammar, FormatError> {
        let start = match self.nonterminals.get_index(0) {
            Some(&start) => start,
            None => {
                return Err(FormatError {
                    kind: FormatErrorKind::EmptyGrammar,
                    line: None,
                })
            }
        };
        Ok(Grammar::from_parts(
            self.sym_source,
            self.rules,
            self.nonterminals,
            start,
        ))
    }
}

impl RuleBuilder {
    /// Adds a rule alternative to the grammar. Epsilon spellings are dropped, so
    /// `rhs(["ε"])` adds the epsilon production.
    pub fn rhs<I, S>(mut self, syms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.grammar.add_rule(self.lhs, syms);
        self
    }

    /// Starts building a new rule with the given LHS.
    pub fn rule(self, lhs: &str) -> RuleBuilder {
        self.grammar.rule(lhs)
    }

    /// Finishes the grammar.
    pub fn build(self) -> Result<Grammar, FormatError> {
        self.grammar.build()
    }
}
