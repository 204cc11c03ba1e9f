//! Informs whether symbols are terminal or nonterminal.

use std::iter;

use bit_vec::BitVec;

use crate::symbol::Symbol;

/// Informs whether symbols are terminal or nonterminal.
pub trait TerminalSymbolSet {
    /// Checks whether a given symbol is terminal.
    fn is_terminal(&self, sym: Symbol) -> bool;

    /// Checks whether a given symbol is nonterminal.
    fn is_nonterminal(&self, sym: Symbol) -> bool {
        !self.is_terminal(sym)
    }
}

/// A set of symbols in the form of a bit vector.
#[derive(Clone, Debug)]
pub struct SymbolBitSet {
    bit_vec: BitVec,
}

/// An iterator over a symbol set.
pub struct Iter<'a> {
    iter: iter::Enumerate<bit_vec::Iter<'a>>,
}

impl SymbolBitSet {
    /// Constructs a `SymbolBitSet` over `num_syms` symbols.
    pub fn new(num_syms: usize, elem: bool) -> Self {
        SymbolBitSet {
            bit_vec: BitVec::from_elem(num_syms, elem),
        }
    }

    /// Gathers information about whether symbols are terminal or nonterminal.
    /// Constructs a set of terminal symbols: those that never appear on a left-hand side.
    ///
    /// Constructs a data structure in O(n) time.
    pub fn terminal_set<I>(num_syms: usize, lhs_syms: I) -> Self
    where
        I: IntoIterator<Item = Symbol>,
    {
        let mut set = SymbolBitSet::new(num_syms, true);
        for lhs in lhs_syms {
            set.set(lhs, false);
        }
        set
    }

    /// Set the entry for a symbol.
    pub fn set(&mut self, sym: Symbol, value: bool) {
        self.bit_vec.set(sym.usize(), value);
    }

    /// Checks whether a given symbol is in this set. Symbols out of range are not.
    pub fn has_sym(&self, sym: Symbol) -> bool {
        self.bit_vec.get(sym.usize()).unwrap_or(false)
    }

    /// Iterates over symbols in the set.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            iter: self.bit_vec.iter().enumerate(),
        }
    }
}

impl TerminalSymbolSet for SymbolBitSet {
    fn is_terminal(&self, sym: Symbol) -> bool {
        self.has_sym(sym)
    }
}

impl<'a> Iterator for Iter<'a> {
    type Item = Symbol;

    fn next(&mut self) -> Option<Self::Item> {
        for (id, is_present) in &mut self.iter {
            if is_present {
                return Some(Symbol::from(id));
            }
        }
        None
    }
}
