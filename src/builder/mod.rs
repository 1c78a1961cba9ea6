//! Builder API for ergonomic automaton construction.
//!
//! The builder collects states, symbols and transitions by name and
//! defers all checking to [`AutomatonBuilder::build`].

pub mod automaton;
pub mod error;

pub use automaton::AutomatonBuilder;
pub use error::BuildError;
