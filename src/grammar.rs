use std::fmt;
use std::slice;

use indexmap::IndexSet;

use crate::rule::builder::GrammarBuilder;
use crate::rule::{GrammarRule, Rule, RuleId};
use crate::symbol::{Symbol, SymbolBitSet, SymbolSource, TerminalSymbolSet};

/// Canonical spelling of the empty production.
pub const EPSILON: &str = "ε";
/// Every accepted spelling of the empty production.
pub const EPSILON_ALIASES: &[&str] = &["ε", "ϵ"];
/// Spelling of the end-of-input marker.
pub const END_MARKER: &str = "$";

/// Checks whether `name` spells the empty production.
pub fn is_epsilon(name: &str) -> bool {
    EPSILON_ALIASES.contains(&name)
}

/// Basic representation of context-free grammars.
///
/// Immutable once built. Nonterminals keep their declaration order, and the first declared
/// nonterminal is the start symbol.
#[derive(Clone, Debug)]
pub struct Grammar {
    /// The symbol source.
    sym_source: SymbolSource,
    /// The array of rules, in declaration order.
    rules: Vec<Rule>,
    nonterminals: IndexSet<Symbol>,
    start: Symbol,
    terminal_set: SymbolBitSet,
}

impl Grammar {
    /// Starts building a grammar.
    pub fn builder() -> GrammarBuilder {
        GrammarBuilder::new()
    }

    pub(crate) fn from_parts(
        sym_source: SymbolSource,
        rules: Vec<Rule>,
        nonterminals: IndexSet<Symbol>,
        start: Symbol,
    ) -> Self {
        let terminal_set =
            SymbolBitSet::terminal_set(sym_source.num_syms(), nonterminals.iter().cloned());
        Grammar {
            sym_source,
            rules,
            nonterminals,
            start,
            terminal_set,
        }
    }

    /// Returns the start symbol.
    pub fn start_sym(&self) -> Symbol {
        self.start
    }

    /// Returns an iterator over the grammar's rules.
    pub fn rules(&self) -> slice::Iter<'_, Rule> {
        self.rules.iter()
    }

    /// Returns the rule with the given ID.
    ///
    /// # Panics
    ///
    /// Panics if the ID belongs to another grammar.
    pub fn rule(&self, id: RuleId) -> &Rule {
        &self.rules[id]
    }

    /// Returns the alternatives of a nonterminal, in declaration order.
    pub fn productions(&self, lhs: Symbol) -> impl Iterator<Item = (RuleId, &Rule)> {
        self.rules
            .iter()
            .enumerate()
            .filter(move |(_, rule)| rule.lhs() == lhs)
    }

    /// Returns nonterminals in declaration order.
    pub fn nonterminals(&self) -> impl Iterator<Item = Symbol> + '_ {
        self.nonterminals.iter().cloned()
    }

    /// Returns terminals in order of first appearance.
    pub fn terminals(&self) -> impl Iterator<Item = Symbol> + '_ {
        self.terminal_set.iter()
    }

    /// Returns the set of terminal symbols.
    pub fn terminal_set(&self) -> &SymbolBitSet {
        &self.terminal_set
    }

    /// Returns an immutable reference to the grammar's symbol source.
    pub fn sym_source(&self) -> &SymbolSource {
        &self.sym_source
    }

    /// Returns the number of symbols in use.
    pub fn num_syms(&self) -> usize {
        self.sym_source.num_syms()
    }

    /// Looks up a symbol by name.
    pub fn sym(&self, name: &str) -> Option<Symbol> {
        self.sym_source.get(name)
    }

    /// Returns the name of a symbol.
    pub fn name(&self, sym: Symbol) -> Option<&str> {
        self.sym_source.name(sym)
    }

    /// Checks whether `name` is a terminal of this grammar. Names the grammar has never seen are
    /// terminal, since they are not declared as a left-hand side.
    pub fn is_terminal_name(&self, name: &str) -> bool {
        self.sym(name).map_or(true, |sym| self.is_terminal(sym))
    }

    /// Displays a rule as `lhs -> rhs`.
    pub fn display_rule(&self, id: RuleId) -> DisplayRule<'_> {
        DisplayRule {
            grammar: self,
            rule: self.rule(id),
        }
    }

    /// Writes the grammar back in its text form, one line per nonterminal.
    pub fn stringify_to_bnf(&self) -> String {
        let mut result = String::new();
        for lhs in self.nonterminals() {
            let alternatives: Vec<String> = self
                .productions(lhs)
                .map(|(_, rule)| self.stringify_rhs(rule))
                .collect();
            result.push_str(self.display_name(lhs));
            result.push_str(" -> ");
            result.push_str(&alternatives.join(" | "));
            result.push('\n');
        }
        result
    }

    pub(crate) fn display_name(&self, sym: Symbol) -> &str {
        self.name(sym).unwrap_or("?")
    }

    fn stringify_rhs(&self, rule: &Rule) -> String {
        if rule.is_epsilon() {
            EPSILON.to_owned()
        } else {
            let names: Vec<&str> = rule
                .rhs()
                .iter()
                .map(|&sym| self.display_name(sym))
                .collect();
            names.join(" ")
        }
    }
}

impl TerminalSymbolSet for Grammar {
    fn is_terminal(&self, sym: Symbol) -> bool {
        self.terminal_set.has_sym(sym)
    }
}

/// Helper for displaying a rule.
#[derive(Clone, Copy)]
pub struct DisplayRule<'a> {
    grammar: &'a Grammar,
    rule: &'a Rule,
}

impl<'a> fmt::Display for DisplayRule<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} -> {}",
            self.grammar.display_name(self.rule.lhs()),
            self.grammar.stringify_rhs(self.rule)
        )
    }
}
