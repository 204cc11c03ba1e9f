//! The LL(1) parse table and the LL grammar class.

use std::collections::BTreeMap;
use std::fmt::Write;

use bit_matrix::BitMatrix;
use log::{debug, warn};

use crate::grammar::{Grammar, END_MARKER};
use crate::prediction::{FirstSets, FollowSets};
use crate::rule::{GrammarRule, RuleId};
use crate::symbol::Symbol;

/// LL parse table.
///
/// Each cell holds a single rule. When two rules compete for a cell, the rule processed later
/// wins and the clash is recorded as a `TableConflict`.
#[derive(Clone, Debug)]
pub struct LlParseTable<'a> {
    map: BTreeMap<LlParseTableKey, RuleId>,
    conflicts: Vec<TableConflict>,
    grammar: &'a Grammar,
}

#[derive(Copy, Clone, Debug, Ord, PartialOrd, Eq, PartialEq)]
struct LlParseTableKey {
    nonterminal: Symbol,
    terminal: Option<Symbol>,
}

/// Two rules that compete for the same table cell.
#[cfg_attr(
    feature = "serialize",
    derive(serde_derive::Serialize, serde_derive::Deserialize)
)]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct TableConflict {
    /// Row of the cell.
    pub nonterminal: Symbol,
    /// Column of the cell. `None` is the end of input.
    pub terminal: Option<Symbol>,
    /// The rule that was in the cell before.
    pub discarded: RuleId,
    /// The rule that stays in the cell.
    pub kept: RuleId,
}

/// Container for classifying nonterminals as LL(1) or context-free.
#[derive(Debug, Eq, PartialEq)]
pub struct LlClassification {
    classes: BTreeMap<Symbol, LlNonterminalClass>,
}

/// A nonterminal class.
#[cfg_attr(
    feature = "serialize",
    derive(serde_derive::Serialize, serde_derive::Deserialize)
)]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum LlNonterminalClass {
    /// LL(1) class.
    Ll1,
    /// Context-free class.
    ContextFree,
}

impl<'a> LlParseTable<'a> {
    /// Creates an LL parse table, computing FIRST and FOLLOW sets along the way.
    pub fn new(grammar: &'a Grammar) -> Self {
        let first = FirstSets::new(grammar);
        let follow = FollowSets::new(grammar, &first);
        Self::with_sets(grammar, &first, &follow)
    }

    /// Creates an LL parse table from precomputed FIRST and FOLLOW sets.
    ///
    /// Never fails. A grammar that is not LL(1) yields a table with conflicts.
    pub fn with_sets(grammar: &'a Grammar, first: &FirstSets, follow: &FollowSets) -> Self {
        let mut this = LlParseTable {
            map: BTreeMap::new(),
            conflicts: vec![],
            grammar,
        };
        // LlParseTable[A,a] contains the rule A → w if and only if
        // a is in FIRST(w) or
        // None is in FIRST(w) and a is in FOLLOW(A).
        for (rule_id, rule) in grammar.rules().enumerate() {
            let rhs_first_set = first.first_set_for_string(grammar, rule.rhs());
            for &terminal in rhs_first_set.iter().flatten() {
                this.insert(rule.lhs(), Some(terminal), rule_id);
            }
            if rhs_first_set.contains(&None) {
                if let Some(lhs_follow_set) = follow.get(rule.lhs()) {
                    for &terminal in lhs_follow_set {
                        this.insert(rule.lhs(), terminal, rule_id);
                    }
                }
            }
        }
        debug!(
            "built LL(1) table with {} cells and {} conflicts",
            this.map.len(),
            this.conflicts.len()
        );
        this
    }

    /// Writes a cell. Only a different rule counts as a conflict. A rule may write the same cell
    /// twice when FIRST of its right-hand side and FOLLOW of its LHS overlap, and that alone is
    /// not recorded; the clash surfaces on the nonterminal that makes the rule nullable.
    fn insert(&mut self, nonterminal: Symbol, terminal: Option<Symbol>, rule_id: RuleId) {
        let key = LlParseTableKey {
            nonterminal,
            terminal,
        };
        match self.map.insert(key, rule_id) {
            Some(previous) if previous != rule_id => {
                warn!(
                    "conflict in table cell M[{}, {}]: `{}` replaced by `{}`",
                    self.grammar.display_name(nonterminal),
                    self.column_name(terminal),
                    self.grammar.display_rule(previous),
                    self.grammar.display_rule(rule_id)
                );
                self.conflicts.push(TableConflict {
                    nonterminal,
                    terminal,
                    discarded: previous,
                    kept: rule_id,
                });
            }
            _ => {}
        }
    }

    /// Returns the grammar this table was built for.
    pub fn grammar(&self) -> &'a Grammar {
        self.grammar
    }

    /// Returns the rule to expand for a nonterminal and a lookahead. `None` is the end of input.
    pub fn get(&self, nonterminal: Symbol, terminal: Option<Symbol>) -> Option<RuleId> {
        self.map
            .get(&LlParseTableKey {
                nonterminal,
                terminal,
            })
            .cloned()
    }

    /// Iterates over filled cells as `(nonterminal, lookahead, rule)`.
    pub fn iter(&self) -> impl Iterator<Item = (Symbol, Option<Symbol>, RuleId)> + '_ {
        self.map
            .iter()
            .map(|(key, &rule_id)| (key.nonterminal, key.terminal, rule_id))
    }

    /// Iterates over filled cells in one row.
    pub fn row(&self, nonterminal: Symbol) -> impl Iterator<Item = (Option<Symbol>, RuleId)> + '_ {
        self.iter()
            .filter(move |&(row, _, _)| row == nonterminal)
            .map(|(_, terminal, rule_id)| (terminal, rule_id))
    }

    /// Returns the number of filled cells.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Checks whether no cell is filled.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Returns all recorded conflicts, in the order they occurred.
    pub fn conflicts(&self) -> &[TableConflict] {
        &self.conflicts
    }

    /// Checks whether the grammar is LL(1), that is, the table has no conflicts.
    pub fn is_ll1(&self) -> bool {
        self.conflicts.is_empty()
    }

    /// Writes one line per filled cell, rows in declaration order.
    pub fn stringify_to_rows(&self) -> String {
        let mut result = String::new();
        for nonterminal in self.grammar.nonterminals() {
            for (terminal, rule_id) in self.row(nonterminal) {
                let _ = writeln!(
                    result,
                    "M[{}, {}] = {}",
                    self.grammar.display_name(nonterminal),
                    self.column_name(terminal),
                    self.grammar.display_rule(rule_id)
                );
            }
        }
        result
    }

    fn column_name(&self, terminal: Option<Symbol>) -> &'a str {
        match terminal {
            Some(terminal) => self.grammar.display_name(terminal),
            None => END_MARKER,
        }
    }

    /// Classifies nonterminals as LL(1) or context-free.
    ///
    /// A nonterminal is context-free if one of its cells has a conflict, or if it can reach
    /// such a nonterminal through right-hand sides.
    pub fn classify(&self) -> LlClassification {
        let mut result = LlClassification {
            classes: self
                .grammar
                .nonterminals()
                .map(|nonterminal| (nonterminal, LlNonterminalClass::Ll1))
                .collect(),
        };
        for conflict in &self.conflicts {
            result
                .classes
                .insert(conflict.nonterminal, LlNonterminalClass::ContextFree);
        }
        let context_free: Vec<Symbol> = result
            .classes
            .iter()
            .filter(|&(_, &class)| class == LlNonterminalClass::ContextFree)
            .map(|(&nonterminal, _)| nonterminal)
            .collect();
        let reachability = reachability(self.grammar);
        for (&nonterminal, class) in result.classes.iter_mut() {
            if context_free
                .iter()
                .any(|&sym| reachability[(nonterminal.usize(), sym.usize())])
            {
                *class = LlNonterminalClass::ContextFree;
            }
        }
        result
    }
}

/// Returns the reachability matrix.
fn reachability(grammar: &Grammar) -> BitMatrix {
    let num_syms = grammar.num_syms();
    let mut reachability = BitMatrix::new(num_syms, num_syms);

    for rule in grammar.rules() {
        for &sym in rule.rhs() {
            reachability.set(rule.lhs().usize(), sym.usize(), true);
        }
    }

    reachability.transitive_closure();

    reachability
}

impl LlClassification {
    /// Access classes.
    pub fn classes(&self) -> &BTreeMap<Symbol, LlNonterminalClass> {
        &self.classes
    }

    /// Returns the class of a nonterminal.
    pub fn get(&self, nonterminal: Symbol) -> Option<LlNonterminalClass> {
        self.classes.get(&nonterminal).cloned()
    }
}
