//! Errors raised while loading a grammar and while parsing.

use std::error::Error;
use std::fmt;

use crate::grammar::END_MARKER;

/// Represents an error when loading grammar text.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FormatError {
    /// Reason for the error.
    pub kind: FormatErrorKind,
    /// Line where the error happened, if it came from text.
    ///
    /// One-indexed.
    pub line: Option<u32>,
}

/// What was wrong with the grammar text.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum FormatErrorKind {
    /// The line has no `->` or `→` between the left-hand side and the alternatives.
    MissingSeparator,
    /// The left-hand side is empty or is not a single symbol.
    InvalidLhs(String),
    /// Nothing follows the separator.
    MissingAlternatives,
    /// An alternative between two `|` is blank. Epsilon must be spelled out.
    EmptyAlternative,
    /// No rule was declared at all.
    EmptyGrammar,
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if let Some(line) = self.line {
            write!(f, "grammar format error at line {}: ", line)?;
        } else {
            write!(f, "grammar format error: ")?;
        }
        match &self.kind {
            FormatErrorKind::MissingSeparator => write!(f, "missing production separator"),
            FormatErrorKind::InvalidLhs(lhs) => write!(f, "invalid left-hand side `{}`", lhs),
            FormatErrorKind::MissingAlternatives => write!(f, "missing alternative list"),
            FormatErrorKind::EmptyAlternative => write!(f, "empty alternative"),
            FormatErrorKind::EmptyGrammar => write!(f, "grammar has no rules"),
        }
    }
}

impl Error for FormatError {}

/// Represents a syntax error found by the predictive parser. The parse is aborted.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SyntaxError {
    /// Reason for the error.
    pub kind: SyntaxErrorKind,
    /// Symbol on top of the stack. `None` is the end marker.
    pub stack_symbol: Option<String>,
    /// The current input token. `None` is the end marker.
    pub lookahead: Option<String>,
    /// Index of the current input token.
    pub position: usize,
}

/// Kinds of syntax errors.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SyntaxErrorKind {
    /// The table has no entry for the nonterminal on top of the stack and the lookahead.
    NoProduction,
    /// The terminal on top of the stack differs from the lookahead.
    UnexpectedToken,
    /// The stack was exhausted before the input.
    UnconsumedInput,
    /// The parse took more steps than allowed by `ParseOptions::max_steps`.
    StepLimitExceeded {
        /// The configured limit.
        limit: usize,
    },
}

impl fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let stack_symbol = self.stack_symbol.as_deref().unwrap_or(END_MARKER);
        let lookahead = self.lookahead.as_deref().unwrap_or(END_MARKER);
        write!(f, "syntax error at token {}: ", self.position)?;
        match self.kind {
            SyntaxErrorKind::NoProduction => {
                write!(f, "no production for [{}, {}]", stack_symbol, lookahead)
            }
            SyntaxErrorKind::UnexpectedToken => {
                write!(f, "expected `{}`, found `{}`", stack_symbol, lookahead)
            }
            SyntaxErrorKind::UnconsumedInput => {
                write!(f, "unconsumed input starting with `{}`", lookahead)
            }
            SyntaxErrorKind::StepLimitExceeded { limit } => {
                write!(f, "parse exceeded the limit of {} steps", limit)
            }
        }
    }
}

impl Error for SyntaxError {}
