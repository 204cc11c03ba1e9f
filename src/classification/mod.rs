//! Classification of grammars.

pub mod ll;

pub use self::ll::{LlClassification, LlNonterminalClass, LlParseTable, TableConflict};
