//! Ordered record of the configurations visited during a simulation.

use super::state::StateSet;
use serde::{Deserialize, Serialize};

/// One record of the trace.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Step {
    /// Symbol consumed to reach this step; `None` for the initial step.
    pub symbol: Option<char>,
    /// Configuration after epsilon closure. Empty only for a dead end.
    pub configuration: StateSet,
}

/// Append-only sequence of [`Step`]s.
///
/// Only the simulator appends; once a [`Simulation`](super::Simulation)
/// is returned the trace is read-only.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trace {
    steps: Vec<Step>,
}

impl Trace {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn record(&mut self, symbol: Option<char>, configuration: StateSet) {
        self.steps.push(Step {
            symbol,
            configuration,
        });
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Step 0: the closure of the start state.
    pub fn initial(&self) -> Option<&Step> {
        self.steps.first()
    }

    pub fn last(&self) -> Option<&Step> {
        self.steps.last()
    }

    /// Configurations in step order.
    pub fn configurations(&self) -> impl Iterator<Item = &StateSet> + '_ {
        self.steps.iter().map(|step| &step.configuration)
    }

    /// Symbols consumed so far, in order.
    pub fn symbols(&self) -> impl Iterator<Item = char> + '_ {
        self.steps.iter().filter_map(|step| step.symbol)
    }
}
