//! Automaton simulation core.
//!
//! This module is pure: no I/O and no shared mutable state.
//! - State handles and configurations (`StateId`, `StateSet`)
//! - The immutable automaton and its transition table
//! - Epsilon closure
//! - The simulator and the trace it produces
//!
//! The automaton is only ever borrowed immutably, so simulations of
//! different inputs can run in parallel over the same automaton.

mod automaton;
mod closure;
mod simulator;
mod state;
mod trace;

pub use automaton::{Automaton, AutomatonError, Label, Transition};
pub use closure::epsilon_closure;
pub use simulator::{simulate, DeadEnd, Feed, Simulation, Simulator, Verdict};
pub use state::{StateId, StateSet};
pub use trace::{Step, Trace};
