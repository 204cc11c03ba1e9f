//! This module defines grammar rules. Each rule in a context-free grammar
//! consists of a single symbol on its left-hand side and an array of symbols
//! on its right-hand side. An empty right-hand side is the epsilon production.

pub mod builder;

use crate::symbol::Symbol;

/// Position of a rule in its grammar, in declaration order.
pub type RuleId = usize;

/// Trait for rules of a context-free grammar.
pub trait GrammarRule {
    /// Returns the rule's left-hand side.
    fn lhs(&self) -> Symbol;
    /// Returns the rule's right-hand side.
    fn rhs(&self) -> &[Symbol];

    /// Checks whether this is the epsilon production.
    fn is_epsilon(&self) -> bool {
        self.rhs().is_empty()
    }
}

impl<'a, R> GrammarRule for &'a R
where
    R: GrammarRule,
{
    fn lhs(&self) -> Symbol {
        (**self).lhs()
    }
    fn rhs(&self) -> &[Symbol] {
        (**self).rhs()
    }
}

/// Typical grammar rule representation.
#[cfg_attr(
    feature = "serialize",
    derive(serde_derive::Serialize, serde_derive::Deserialize)
)]
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct Rule {
    lhs: Symbol,
    /// The rule's right-hand side.
    pub rhs: Vec<Symbol>,
}

impl GrammarRule for Rule {
    fn lhs(&self) -> Symbol {
        self.lhs
    }

    fn rhs(&self) -> &[Symbol] {
        &self.rhs
    }
}

impl Rule {
    /// Creates a new rule.
    pub fn new(lhs: Symbol, rhs: Vec<Symbol>) -> Self {
        Rule { lhs, rhs }
    }
}
