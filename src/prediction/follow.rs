//! FOLLOW sets.

use std::collections::BTreeSet;

use log::debug;

use crate::grammar::Grammar;
use crate::prediction::{FirstSets, PerSymbolSets};
use crate::rule::GrammarRule;
use crate::symbol::{Symbol, TerminalSymbolSet};

/// FOLLOW sets.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FollowSets {
    /// Mapping from nonterminals to FOLLOW sets.
    map: PerSymbolSets,
}

impl FollowSets {
    /// Compute all FOLLOW sets of the grammar.
    ///
    /// The FOLLOW set of the start symbol holds the end of input from the beginning.
    pub fn new(grammar: &Grammar, first_sets: &FirstSets) -> Self {
        let start_sym = grammar.start_sym();
        let mut this = FollowSets {
            map: grammar
                .nonterminals()
                .map(|lhs| {
                    let mut follow_set = BTreeSet::new();
                    if lhs == start_sym {
                        follow_set.insert(None);
                    }
                    (lhs, follow_set)
                })
                .collect(),
        };
        let mut passes = 1;
        loop {
            let next = this.pass(grammar, first_sets);
            if next == this {
                break;
            }
            this = next;
            passes += 1;
        }
        debug!("FOLLOW sets converged after {} passes", passes);
        this
    }

    /// Performs one pass over all rules, reading only from `self`.
    ///
    /// For every nonterminal occurrence, the whole remainder of the right-hand side is
    /// scanned: FIRST of the suffix goes into the occurrence's FOLLOW set, and if the suffix
    /// is nullable, so does the FOLLOW set of the rule's LHS.
    pub fn pass(&self, grammar: &Grammar, first_sets: &FirstSets) -> Self {
        let mut map = self.map.clone();
        for rule in grammar.rules() {
            let rhs = rule.rhs();
            for (pos, &sym) in rhs.iter().enumerate() {
                if !grammar.is_nonterminal(sym) {
                    continue;
                }
                let suffix_first_set = first_sets.first_set_for_string(grammar, &rhs[pos + 1..]);
                let followed = map.entry(sym).or_default();
                for maybe_terminal in suffix_first_set {
                    if maybe_terminal.is_some() {
                        followed.insert(maybe_terminal);
                    } else if let Some(lhs_follow_set) = self.map.get(&rule.lhs()) {
                        followed.extend(lhs_follow_set.iter().cloned());
                    }
                }
            }
        }
        FollowSets { map }
    }

    /// Returns the FOLLOW set of a nonterminal. `None` in the set is the end of input.
    pub fn get(&self, nonterminal: Symbol) -> Option<&BTreeSet<Option<Symbol>>> {
        self.map.get(&nonterminal)
    }

    /// Returns a reference to FOLLOW sets.
    pub fn follow_sets(&self) -> &PerSymbolSets {
        &self.map
    }
}
