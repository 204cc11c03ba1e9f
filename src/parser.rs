//! The table-driven predictive parser.
//!
//! The parser keeps nothing between calls. Tables can be shared by any number of parsers,
//! including across threads.
//!
//! Left-recursive grammars are not rejected. If a left-recursive rule ends up in a table cell
//! that the input reaches, the stack grows forever. Use `ParseOptions::max_steps` to bound
//! such parses.

use std::fmt;

use log::trace;

use crate::classification::LlParseTable;
use crate::error::{SyntaxError, SyntaxErrorKind};
use crate::grammar::Grammar;
use crate::rule::{GrammarRule, RuleId};
use crate::symbol::{Symbol, TerminalSymbolSet};

/// Options for a predictive parser.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct ParseOptions {
    /// Maximum number of stack symbols popped in one parse. Unbounded if `None`.
    pub max_steps: Option<usize>,
}

impl ParseOptions {
    /// Creates default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Limits the number of parse steps.
    pub fn max_steps(mut self, limit: usize) -> Self {
        self.max_steps = Some(limit);
        self
    }
}

/// A deterministic top-down parser driven by an LL(1) table.
#[derive(Clone, Copy, Debug)]
pub struct PredictiveParser<'t, 'g> {
    table: &'t LlParseTable<'g>,
    options: ParseOptions,
}

/// One step of a parse.
#[cfg_attr(
    feature = "serialize",
    derive(serde_derive::Serialize, serde_derive::Deserialize)
)]
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Step {
    /// A terminal on the stack matched the current token.
    Match(Symbol),
    /// A nonterminal on the stack was expanded with a rule.
    Derive(RuleId),
}

/// The steps of a successful parse.
#[derive(Clone, Debug)]
pub struct Trace<'g> {
    grammar: &'g Grammar,
    steps: Vec<Step>,
}

/// Helper for displaying a step.
#[derive(Clone, Copy)]
pub struct DisplayStep<'g> {
    grammar: &'g Grammar,
    step: Step,
}

struct Token {
    text: String,
    sym: Option<Symbol>,
}

struct ParserState<'g> {
    grammar: &'g Grammar,
    stack: Vec<Option<Symbol>>,
    input: Vec<Token>,
    cursor: usize,
    steps: Vec<Step>,
}

impl<'t, 'g> PredictiveParser<'t, 'g> {
    /// Creates a parser with default options.
    pub fn new(table: &'t LlParseTable<'g>) -> Self {
        PredictiveParser {
            table,
            options: ParseOptions::default(),
        }
    }

    /// Sets options.
    pub fn with_options(mut self, options: ParseOptions) -> Self {
        self.options = options;
        self
    }

    /// Parses a token sequence from the grammar's start symbol.
    pub fn parse<I, T>(&self, tokens: I) -> Result<Trace<'g>, SyntaxError>
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        self.parse_from(self.table.grammar().start_sym(), tokens)
    }

    /// Parses a token sequence from the given symbol.
    pub fn parse_from<I, T>(&self, start: Symbol, tokens: I) -> Result<Trace<'g>, SyntaxError>
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        let grammar = self.table.grammar();
        let input = tokens
            .into_iter()
            .map(|token| {
                let text = token.as_ref();
                Token {
                    text: text.to_owned(),
                    sym: grammar.sym(text),
                }
            })
            .collect();
        ParserState {
            grammar,
            stack: vec![None, Some(start)],
            input,
            cursor: 0,
            steps: vec![],
        }
        .run(self.table, self.options)
    }
}

impl<'g> ParserState<'g> {
    fn run(
        mut self,
        table: &LlParseTable<'g>,
        options: ParseOptions,
    ) -> Result<Trace<'g>, SyntaxError> {
        let mut num_steps = 0;
        while let Some(top) = self.stack.pop() {
            if let Some(limit) = options.max_steps {
                if num_steps >= limit {
                    return Err(self.error(SyntaxErrorKind::StepLimitExceeded { limit }, top));
                }
            }
            num_steps += 1;
            let lookahead = self.input.get(self.cursor);
            match top {
                // The end marker is always at the bottom. Leftover input is reported below.
                None => break,
                Some(sym) if self.grammar.is_terminal(sym) => {
                    match lookahead {
                        Some(token) if token.sym == Some(sym) => {
                            trace!("match `{}` at token {}", token.text, self.cursor);
                            self.steps.push(Step::Match(sym));
                            self.cursor += 1;
                        }
                        _ => return Err(self.error(SyntaxErrorKind::UnexpectedToken, top)),
                    }
                }
                Some(sym) => {
                    let cell = match lookahead {
                        Some(token) => token
                            .sym
                            .and_then(|terminal| table.get(sym, Some(terminal))),
                        None => table.get(sym, None),
                    };
                    let rule_id = match cell {
                        Some(rule_id) => rule_id,
                        None => return Err(self.error(SyntaxErrorKind::NoProduction, top)),
                    };
                    trace!("derive `{}`", self.grammar.display_rule(rule_id));
                    self.steps.push(Step::Derive(rule_id));
                    let rule = self.grammar.rule(rule_id);
                    if !rule.is_epsilon() {
                        self.stack.extend(rule.rhs().iter().rev().map(|&sym| Some(sym)));
                    }
                }
            }
        }
        if self.cursor < self.input.len() {
            return Err(self.error(SyntaxErrorKind::UnconsumedInput, None));
        }
        trace!("accept after {} steps", num_steps);
        Ok(Trace {
            grammar: self.grammar,
            steps: self.steps,
        })
    }

    fn error(&self, kind: SyntaxErrorKind, top: Option<Symbol>) -> SyntaxError {
        SyntaxError {
            kind,
            stack_symbol: top.map(|sym| self.grammar.display_name(sym).to_owned()),
            lookahead: self.input.get(self.cursor).map(|token| token.text.clone()),
            position: self.cursor,
        }
    }
}

impl<'g> Trace<'g> {
    /// Returns the steps in order.
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Returns the number of steps.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Checks whether the trace has no steps.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Iterates over displayable steps.
    pub fn iter(&self) -> impl Iterator<Item = DisplayStep<'g>> + '_ {
        let grammar = self.grammar;
        self.steps.iter().map(move |&step| step.display(grammar))
    }

    /// Renders each step, e.g. `E -> T E'` or `Match: id`.
    pub fn lines(&self) -> Vec<String> {
        self.iter().map(|step| step.to_string()).collect()
    }
}

impl<'g> fmt::Display for Trace<'g> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for step in self.iter() {
            writeln!(f, "{}", step)?;
        }
        Ok(())
    }
}

impl Step {
    /// Pairs the step with a grammar for display.
    pub fn display(self, grammar: &Grammar) -> DisplayStep<'_> {
        DisplayStep {
            grammar,
            step: self,
        }
    }
}

impl<'g> fmt::Display for DisplayStep<'g> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.step {
            Step::Match(sym) => write!(f, "Match: {}", self.grammar.display_name(sym)),
            Step::Derive(rule_id) => write!(f, "{}", self.grammar.display_rule(rule_id)),
        }
    }
}
