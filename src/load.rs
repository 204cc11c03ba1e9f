//! Allows us to load context-free grammars from text.
//!
//! Each non-blank line is `LHS -> RHS1 | RHS2 | ...`, with either `->` or `→` as the
//! separator. Repeating a left-hand side appends to its alternatives.
//!
//! Alternatives are split into symbols as follows. Whitespace delimits symbols. The operator
//! glyphs `+ - * / ( ) ;` always stand alone. An uppercase letter that is not the first character
//! of the alternative starts a new symbol, so `TE'` reads as `T E'`. This also splits multi-letter
//! names, e.g. `ExprList` reads as `Expr List`, which is a known limitation: nonterminal names
//! with an inner uppercase letter cannot be written. Everything else accumulates into one symbol.

use log::debug;

use crate::error::{FormatError, FormatErrorKind};
use crate::grammar::{is_epsilon, Grammar};
use crate::rule::builder::GrammarBuilder;

const SEPARATORS: &[&str] = &["->", "→"];
const OPERATORS: &[char] = &['+', '-', '*', '/', '(', ')', ';'];

impl Grammar {
    /// Loads a grammar from text.
    pub fn load(text: &str) -> Result<Grammar, FormatError> {
        let mut builder = GrammarBuilder::new();
        for (line_idx, line) in text.lines().enumerate() {
            let line_no = line_idx as u32 + 1;
            let error = |kind| FormatError {
                kind,
                line: Some(line_no),
            };
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            let (lhs, alternatives) =
                split_rule(line).ok_or_else(|| error(FormatErrorKind::MissingSeparator))?;
            let lhs = lhs.trim();
            if lhs.is_empty() || lhs.contains(char::is_whitespace) || is_epsilon(lhs) {
                return Err(error(FormatErrorKind::InvalidLhs(lhs.to_owned())));
            }
            let alternatives = alternatives.trim();
            if alternatives.is_empty() {
                return Err(error(FormatErrorKind::MissingAlternatives));
            }
            let lhs = builder.declare(lhs);
            for alternative in alternatives.split('|') {
                let alternative = alternative.trim();
                if alternative.is_empty() {
                    return Err(error(FormatErrorKind::EmptyAlternative));
                }
                builder.add_rule(lhs, split_alternative(alternative));
            }
        }
        let grammar = builder.build()?;
        debug!(
            "loaded grammar with {} rules over {} symbols",
            grammar.rules().len(),
            grammar.num_syms()
        );
        Ok(grammar)
    }
}

/// Splits a line at the leftmost separator.
fn split_rule(line: &str) -> Option<(&str, &str)> {
    SEPARATORS
        .iter()
        .filter_map(|sep| line.find(sep).map(|pos| (pos, sep.len())))
        .min()
        .map(|(pos, len)| (&line[..pos], &line[pos + len..]))
}

/// Splits an alternative into symbol names.
fn split_alternative(alternative: &str) -> Vec<&str> {
    let mut words = vec![];
    let mut start = None;
    for (pos, ch) in alternative.char_indices() {
        if ch.is_whitespace() {
            if let Some(word_start) = start.take() {
                words.push(&alternative[word_start..pos]);
            }
        } else if OPERATORS.contains(&ch) {
            if let Some(word_start) = start.take() {
                words.push(&alternative[word_start..pos]);
            }
            words.push(&alternative[pos..pos + ch.len_utf8()]);
        } else if ch.is_ascii_uppercase() && pos != 0 {
            if let Some(word_start) = start.take() {
                words.push(&alternative[word_start..pos]);
            }
            start = Some(pos);
        } else if start.is_none() {
            start = Some(pos);
        }
    }
    if let Some(word_start) = start {
        words.push(&alternative[word_start..]);
    }
    words
}
