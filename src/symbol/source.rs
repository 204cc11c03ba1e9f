//! Source of named symbols.

use indexmap::IndexSet;

use crate::symbol::Symbol;

/// A source of numeric symbols. Every distinct name gets its own symbol, in order of first use.
#[derive(Clone, Debug, Default)]
pub struct SymbolSource {
    names: IndexSet<String>,
}

impl SymbolSource {
    /// Creates a source of numeric symbols with an empty symbol space.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the symbol named `name`, generating a new one if the name is unseen.
    pub fn sym(&mut self, name: &str) -> Symbol {
        match self.names.get_full(name) {
            Some((id, _)) => Symbol::from(id),
            None => Symbol::from(self.names.insert_full(name.to_owned()).0),
        }
    }

    /// Looks up the symbol named `name` without generating one.
    pub fn get(&self, name: &str) -> Option<Symbol> {
        self.names.get_full(name).map(|(id, _)| Symbol::from(id))
    }

    /// Returns the name of a symbol.
    pub fn name(&self, sym: Symbol) -> Option<&str> {
        self.names.get_index(sym.usize()).map(String::as_str)
    }

    /// Returns the number of symbols in use.
    pub fn num_syms(&self) -> usize {
        self.names.len()
    }
}
