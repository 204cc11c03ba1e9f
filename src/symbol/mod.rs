//! A type that can represent symbols in a context-free grammar. Symbols are distinguished by their
//! IDs. Their names are kept by the grammar's `SymbolSource`.

mod repr;
pub mod set;
pub mod source;

use self::repr::SymbolRepr;

pub use self::repr::Symbol;
pub use self::set::{SymbolBitSet, TerminalSymbolSet};
pub use self::source::SymbolSource;

impl Symbol {
    /// Cast the symbol's ID to `usize`.
    #[inline]
    pub fn usize(self) -> usize {
        SymbolRepr::from(self) as usize
    }
}

impl From<usize> for Symbol {
    #[inline]
    fn from(id: usize) -> Self {
        Symbol::from(id as SymbolRepr)
    }
}
