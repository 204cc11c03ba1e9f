//! Prediction for predictive parsers: FIRST and FOLLOW sets.

mod first;
mod follow;

use std::collections::{BTreeMap, BTreeSet};

use crate::symbol::Symbol;

pub use self::first::FirstSets;
pub use self::follow::FollowSets;

/// The representation of FIRST and FOLLOW sets.
///
/// In FIRST sets, `None` stands for epsilon. In FOLLOW sets, `None` stands for the end of input.
pub type PerSymbolSets = BTreeMap<Symbol, BTreeSet<Option<Symbol>>>;
