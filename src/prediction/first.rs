//! FIRST sets.

use std::collections::BTreeSet;

use log::debug;

use crate::grammar::Grammar;
use crate::prediction::PerSymbolSets;
use crate::rule::GrammarRule;
use crate::symbol::{Symbol, TerminalSymbolSet};

/// FIRST sets.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FirstSets {
    map: PerSymbolSets,
}

impl FirstSets {
    /// Compute all FIRST sets of the grammar.
    ///
    /// We define a binary relation FIRST(N, S), in which N is related to S
    /// if the grammar has a production of the form `N ⸬= α S β`, where
    /// α is a nullable string of symbols.
    ///
    /// Passes are repeated until one of them changes nothing. Sets only grow and are bounded
    /// by the terminals plus epsilon, so this terminates.
    pub fn new(grammar: &Grammar) -> Self {
        let mut this = FirstSets {
            map: grammar
                .nonterminals()
                .map(|lhs| (lhs, BTreeSet::new()))
                .collect(),
        };
        let mut passes = 1;
        loop {
            let next = this.pass(grammar);
            if next == this {
                break;
            }
            this = next;
            passes += 1;
        }
        debug!("FIRST sets converged after {} passes", passes);
        this
    }

    /// Performs one pass over all rules, reading only from `self`.
    pub fn pass(&self, grammar: &Grammar) -> Self {
        let mut map = self.map.clone();
        for rule in grammar.rules() {
            let lookahead = self.first_set_for_string(grammar, rule.rhs());
            map.entry(rule.lhs()).or_default().extend(lookahead);
        }
        FirstSets { map }
    }

    /// Calculates a FIRST set for a string of symbols. The set contains `None` if every symbol
    /// of the string is nullable, which includes the empty string.
    pub fn first_set_for_string<T>(
        &self,
        terminals: &T,
        string: &[Symbol],
    ) -> BTreeSet<Option<Symbol>>
    where
        T: TerminalSymbolSet,
    {
        let mut result = BTreeSet::new();
        for &sym in string {
            if terminals.is_terminal(sym) {
                result.insert(Some(sym));
                return result;
            }
            let mut nullable = false;
            // A nonterminal without an entry has no productions, so its set is empty.
            if let Some(set) = self.map.get(&sym) {
                for &maybe_terminal in set {
                    if maybe_terminal.is_some() {
                        result.insert(maybe_terminal);
                    } else {
                        nullable = true;
                    }
                }
            }
            if !nullable {
                return result;
            }
        }
        result.insert(None);
        result
    }

    /// Returns the FIRST set of a nonterminal.
    pub fn get(&self, nonterminal: Symbol) -> Option<&BTreeSet<Option<Symbol>>> {
        self.map.get(&nonterminal)
    }

    /// Checks whether a nonterminal derives the empty string.
    pub fn is_nullable(&self, nonterminal: Symbol) -> bool {
        self.map
            .get(&nonterminal)
            .map_or(false, |set| set.contains(&None))
    }

    /// Returns a reference to FIRST sets.
    pub fn first_sets(&self) -> &PerSymbolSets {
        &self.map
    }
}
