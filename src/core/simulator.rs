//! On-the-fly subset construction over an input string.

use super::automaton::{Automaton, Label};
use super::closure::epsilon_closure;
use super::state::{StateId, StateSet};
use super::trace::Trace;
use serde::{Deserialize, Serialize};

/// Where a simulation ran out of continuations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeadEnd {
    /// 1-based step index, equal to the trace index of the dead-end record.
    pub step: usize,
    /// Symbol that had no transition from any active state.
    pub symbol: char,
}

/// Accept/reject decision of a simulation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    /// The ending configuration contains a final state; `via` is the
    /// lowest-handle such state.
    Accepted { via: StateId },

    /// No final state was active at the end. `configuration` is the ending
    /// configuration, empty when the run hit a dead end.
    Rejected {
        configuration: StateSet,
        dead_end: Option<DeadEnd>,
    },
}

/// Result of feeding one symbol to a [`Simulator`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Feed {
    /// The configuration moved forward; `accepting` tells whether a final
    /// state is now active.
    Advanced { accepting: bool },

    /// No active state had a transition on the symbol. The simulator halts.
    DeadEnd(DeadEnd),

    /// A previous feed hit a dead end; the symbol was ignored.
    Halted,
}

/// Completed run: the full trace and the verdict.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Simulation {
    pub trace: Trace,
    pub verdict: Verdict,
}

impl Simulation {
    pub fn accepted(&self) -> bool {
        matches!(self.verdict, Verdict::Accepted { .. })
    }

    pub fn dead_end(&self) -> Option<DeadEnd> {
        match self.verdict {
            Verdict::Rejected { dead_end, .. } => dead_end,
            Verdict::Accepted { .. } => None,
        }
    }
}

/// Incremental simulation of an [`Automaton`].
///
/// The simulator borrows the automaton read-only, so any number of
/// simulators may run over the same automaton at once.
///
/// # Example
///
/// ```rust
/// use nfa_trace::builder::AutomatonBuilder;
/// use nfa_trace::core::{Feed, Simulator};
///
/// let nfa = AutomatonBuilder::new()
///     .states(["even", "odd"])
///     .alphabet("1")
///     .transition("even", '1', "odd")
///     .transition("odd", '1', "even")
///     .start("even")
///     .final_state("even")
///     .build()
///     .unwrap();
///
/// let mut sim = Simulator::new(&nfa);
/// assert!(sim.is_accepting());
/// assert_eq!(sim.feed('1'), Feed::Advanced { accepting: false });
/// assert_eq!(sim.feed('1'), Feed::Advanced { accepting: true });
/// assert!(sim.finish().accepted());
/// ```
pub struct Simulator<'a> {
    automaton: &'a Automaton,
    current: StateSet,
    trace: Trace,
    dead_end: Option<DeadEnd>,
}

impl<'a> Simulator<'a> {
    /// Start at the epsilon closure of the start state and record step 0.
    pub fn new(automaton: &'a Automaton) -> Self {
        let current = epsilon_closure(&StateSet::singleton(automaton.start()), automaton);
        let mut trace = Trace::new();
        trace.record(None, current.clone());

        Self {
            automaton,
            current,
            trace,
            dead_end: None,
        }
    }

    /// Active configuration; empty after a dead end.
    pub fn configuration(&self) -> &StateSet {
        &self.current
    }

    pub fn trace(&self) -> &Trace {
        &self.trace
    }

    pub fn is_halted(&self) -> bool {
        self.dead_end.is_some()
    }

    pub fn is_accepting(&self) -> bool {
        self.current.intersects(self.automaton.finals())
    }

    /// Consume one symbol.
    ///
    /// Direct transitions of every active state are unioned first; the
    /// closure is only taken over that union.
    pub fn feed(&mut self, symbol: char) -> Feed {
        if self.dead_end.is_some() {
            return Feed::Halted;
        }

        let mut next = StateSet::new();
        for state in &self.current {
            next.union_with(self.automaton.targets(state, Label::Symbol(symbol)));
        }

        if next.is_empty() {
            let dead_end = DeadEnd {
                step: self.trace.len(),
                symbol,
            };
            self.current = next;
            self.trace.record(Some(symbol), StateSet::new());
            self.dead_end = Some(dead_end);
            return Feed::DeadEnd(dead_end);
        }

        self.current = epsilon_closure(&next, self.automaton);
        self.trace.record(Some(symbol), self.current.clone());
        Feed::Advanced {
            accepting: self.is_accepting(),
        }
    }

    /// Feed every character of `input`, stopping at the first dead end.
    pub fn run(&mut self, input: &str) -> &mut Self {
        for symbol in input.chars() {
            if let Feed::DeadEnd(_) | Feed::Halted = self.feed(symbol) {
                break;
            }
        }
        self
    }

    /// Decide the verdict and hand over the trace.
    pub fn finish(self) -> Simulation {
        let verdict = match (self.dead_end, self.current.first_common(self.automaton.finals())) {
            (Some(dead_end), _) => Verdict::Rejected {
                configuration: StateSet::new(),
                dead_end: Some(dead_end),
            },
            (None, Some(via)) => Verdict::Accepted { via },
            (None, None) => Verdict::Rejected {
                configuration: self.current,
                dead_end: None,
            },
        };

        Simulation {
            trace: self.trace,
            verdict,
        }
    }
}

/// Run `automaton` over `input` and return the trace and verdict.
///
/// `input` is expected to contain only alphabet symbols; a symbol with no
/// transition simply dead-ends the run.
pub fn simulate(automaton: &Automaton, input: &str) -> Simulation {
    let mut simulator = Simulator::new(automaton);
    simulator.run(input);
    simulator.finish()
}
