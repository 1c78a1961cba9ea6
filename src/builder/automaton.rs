//! Builder for constructing automata.

use crate::builder::error::BuildError;
use crate::core::{Automaton, Label, Transition};

/// Builder for constructing an [`Automaton`] with a fluent API.
///
/// Nothing is checked until [`build`](Self::build), which applies the
/// same validation as [`Automaton::new`].
#[derive(Clone, Debug, Default)]
pub struct AutomatonBuilder {
    states: Vec<String>,
    alphabet: Vec<char>,
    transitions: Vec<Transition>,
    start: Option<String>,
    finals: Vec<String>,
}

impl AutomatonBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a state.
    pub fn state(mut self, name: impl Into<String>) -> Self {
        self.states.push(name.into());
        self
    }

    /// Declare several states at once, in order.
    pub fn states<I>(mut self, names: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.states.extend(names.into_iter().map(Into::into));
        self
    }

    /// Add one alphabet symbol.
    pub fn symbol(mut self, symbol: char) -> Self {
        self.alphabet.push(symbol);
        self
    }

    /// Add every character of `symbols` to the alphabet.
    pub fn alphabet(mut self, symbols: &str) -> Self {
        self.alphabet.extend(symbols.chars());
        self
    }

    /// Add a transition on an alphabet symbol.
    pub fn transition(
        mut self,
        from: impl Into<String>,
        symbol: char,
        to: impl Into<String>,
    ) -> Self {
        self.transitions
            .push(Transition::new(from, Label::Symbol(symbol), to));
        self
    }

    /// Add an epsilon transition.
    pub fn epsilon(mut self, from: impl Into<String>, to: impl Into<String>) -> Self {
        self.transitions.push(Transition::new(from, Label::Epsilon, to));
        self
    }

    /// Add a pre-built transition.
    pub fn add_transition(mut self, transition: Transition) -> Self {
        self.transitions.push(transition);
        self
    }

    /// Set the start state (required).
    pub fn start(mut self, name: impl Into<String>) -> Self {
        self.start = Some(name.into());
        self
    }

    /// Mark a state as final.
    pub fn final_state(mut self, name: impl Into<String>) -> Self {
        self.finals.push(name.into());
        self
    }

    /// Mark several states as final.
    pub fn finals<I>(mut self, names: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.finals.extend(names.into_iter().map(Into::into));
        self
    }

    /// Build the automaton.
    /// Returns an error if the start state is missing or the description is invalid.
    pub fn build(self) -> Result<Automaton, BuildError> {
        let start = self.start.ok_or(BuildError::MissingStart)?;
        let automaton = Automaton::new(
            self.states,
            self.alphabet,
            self.transitions,
            &start,
            self.finals,
        )?;
        Ok(automaton)
    }
}
