//! nfa-trace: step-by-step simulation of epsilon-NFAs.
//!
//! The crate follows a "pure core, thin shell" layout. The core consumes
//! an already validated automaton and an input string and produces an
//! ordered trace of configurations plus an accept/reject verdict. It
//! performs no I/O and cannot fail once the automaton exists.
//!
//! # Core Concepts
//!
//! - **StateSet**: a configuration, the set of states alive at once
//! - **Automaton**: immutable states, alphabet and transition table
//! - **Epsilon closure**: everything reachable through epsilon moves
//! - **Simulator**: subset construction on the fly, one symbol at a time
//!
//! Around the core, [`builder`] constructs automata fluently,
//! [`definition`] parses and validates untrusted descriptions, and
//! [`report`] renders a simulation with state names.
//!
//! # Example
//!
//! ```rust
//! use nfa_trace::builder::AutomatonBuilder;
//! use nfa_trace::core::simulate;
//!
//! let nfa = AutomatonBuilder::new()
//!     .states(["q0", "q1", "q2"])
//!     .alphabet("ab")
//!     .transition("q0", 'a', "q0")
//!     .transition("q0", 'a', "q1")
//!     .transition("q0", 'b', "q0")
//!     .transition("q1", 'b', "q2")
//!     .start("q0")
//!     .final_state("q2")
//!     .build()
//!     .unwrap();
//!
//! let run = simulate(&nfa, "aab");
//! assert!(run.accepted());
//! assert_eq!(run.trace.len(), 4);
//! ```

pub mod builder;
pub mod core;
pub mod definition;
pub mod report;

// Re-export commonly used types
pub use crate::builder::{AutomatonBuilder, BuildError};
pub use crate::core::{
    epsilon_closure, simulate, Automaton, AutomatonError, Label, Simulation, StateId, StateSet,
    Trace, Verdict,
};
pub use crate::report::SimulationReport;
